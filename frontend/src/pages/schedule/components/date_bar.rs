use crate::utils::date::{format_date_ru, to_iso};
use chrono::NaiveDate;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn DateBar(
    #[prop(into)] heading: Signal<String>,
    date_input: RwSignal<String>,
    #[prop(into)] date_error: Signal<Option<String>>,
    #[prop(into)] recent: Signal<Vec<NaiveDate>>,
    #[prop(into)] loading: Signal<bool>,
    on_submit: Callback<()>,
    on_today: Callback<()>,
    on_refresh: Callback<()>,
    on_pick: Callback<NaiveDate>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <section class="bg-white shadow rounded-lg p-4 mb-6 space-y-3">
            <form class="flex flex-wrap items-center gap-3" on:submit=handle_submit>
                <h2 class="text-lg font-semibold text-gray-900">
                    {move || format!("Дата: {}", heading.get())}
                </h2>
                <input
                    type="text"
                    aria-label="Дата"
                    placeholder="ГГГГ-ММ-ДД"
                    class="px-3 py-2 border border-gray-300 rounded-md text-sm"
                    prop:value=date_input
                    on:input=move |ev| date_input.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-3 py-2 rounded-md text-sm font-medium bg-blue-600 text-white hover:bg-blue-700"
                >
                    "Открыть"
                </button>
                <button
                    type="button"
                    class="px-3 py-2 rounded-md text-sm font-medium bg-gray-100 hover:bg-gray-200"
                    on:click=move |_| on_today.call(())
                >
                    "Сегодня"
                </button>
                <button
                    type="button"
                    class="px-3 py-2 rounded-md text-sm font-medium bg-gray-100 hover:bg-gray-200 disabled:opacity-50"
                    disabled=move || loading.get()
                    on:click=move |_| on_refresh.call(())
                >
                    "Обновить"
                </button>
            </form>
            <Show when=move || date_error.get().is_some()>
                <p class="text-sm text-red-700">{move || date_error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !recent.get().is_empty()>
                <div class="flex flex-wrap items-center gap-2 text-sm">
                    <span class="text-gray-600">"Недавние:"</span>
                    <For
                        each=move || recent.get()
                        key=|date| to_iso(*date)
                        children=move |date| {
                            view! {
                                <button
                                    type="button"
                                    class="px-2 py-1 rounded border border-gray-300 hover:bg-gray-100"
                                    on:click=move |_| on_pick.call(date)
                                >
                                    {format_date_ru(date)}
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
