use crate::{
    state::auth::{self, use_auth},
    utils::storage as storage_utils,
};
use leptos::*;

pub const APP_TITLE: &str = "Расписание ВГУ";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let user_name = move || auth.get().user.map(|user| user.name);

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            storage_utils::navigate_to("/login");
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <header class="bg-blue-700 text-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold">{APP_TITLE}</h1>
                    <Show when=move || user_name().is_some()>
                        <div class="flex items-center gap-4">
                            <span class="text-sm">{move || user_name().unwrap_or_default()}</span>
                            <button
                                on:click=on_logout
                                class="px-3 py-2 rounded-md text-sm font-medium hover:bg-blue-600 disabled:opacity-50"
                                disabled=move || logout_pending.get()
                            >
                                "Выйти"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}
