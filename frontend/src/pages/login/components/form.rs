use crate::{components::error::ErrorAlert, pages::login::utils};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm";

#[component]
pub fn LoginForm(
    #[prop(into)] username: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] name: Signal<String>,
    #[prop(into)] register_mode: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_username_input: Callback<String>,
    on_password_input: Callback<String>,
    on_name_input: Callback<String>,
    on_toggle_mode: Callback<()>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 bg-white shadow rounded-lg p-8">
                <h2 class="text-center text-3xl font-extrabold text-gray-900">
                    {move || utils::form_title(register_mode.get())}
                </h2>

                <ErrorAlert message=error />

                <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <Show when=move || register_mode.get()>
                        <div>
                            <label for="name" class="block text-sm text-gray-700">{"Имя"}</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                required
                                class=INPUT_CLASS
                                prop:value=name
                                on:input=move |ev| on_name_input.call(event_target_value(&ev))
                            />
                        </div>
                    </Show>
                    <div>
                        <label for="username" class="block text-sm text-gray-700">{"Логин"}</label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            required
                            class=INPUT_CLASS
                            prop:value=username
                            on:input=move |ev| on_username_input.call(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm text-gray-700">{"Пароль"}</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            class=INPUT_CLASS
                            prop:value=password
                            on:input=move |ev| on_password_input.call(event_target_value(&ev))
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50"
                    >
                        {move || utils::submit_label(register_mode.get(), pending.get())}
                    </button>

                    <div class="text-center">
                        <button
                            type="button"
                            class="text-sm text-blue-600 hover:underline"
                            on:click=move |_| on_toggle_mode.call(())
                        >
                            {move || utils::toggle_label(register_mode.get())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
