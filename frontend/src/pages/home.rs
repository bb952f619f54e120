use crate::{
    components::{guard::home_target, layout::APP_TITLE},
    state::auth::use_auth,
    utils::storage as storage_utils,
};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let target = create_memo(move |_| {
        auth.with(|state| (!state.loading).then(|| home_target(state.is_authenticated)))
    });
    create_effect(move |_| {
        if let Some(target) = target.get() {
            storage_utils::navigate_to(target);
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="text-center space-y-4">
                <h1 class="text-3xl font-bold text-gray-900">{APP_TITLE}</h1>
                <a
                    href=move || target.get().unwrap_or("/login")
                    class="inline-block px-6 py-3 rounded-md text-white bg-blue-600 hover:bg-blue-700"
                >
                    "Перейти"
                </a>
            </div>
        </div>
    }
}
