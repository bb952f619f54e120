use leptos::*;

/// Error banner; renders nothing while `message` is `None`. With
/// `on_dismiss` it gets a close button.
#[component]
pub fn ErrorAlert(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="flex items-start justify-between gap-3 bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded my-2"
            >
                <span>{move || message.get().unwrap_or_default()}</span>
                {on_dismiss.map(|on_dismiss| view! {
                    <button
                        type="button"
                        aria-label="Закрыть"
                        class="text-red-700 hover:text-red-900"
                        on:click=move |_| on_dismiss.call(())
                    >
                        {"✕"}
                    </button>
                })}
            </div>
        </Show>
    }
}
