use crate::{components::layout::LoadingSpinner, state::auth::use_auth, utils::storage as storage_utils};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        if let Some(target) = redirect_target(is_authenticated.get(), is_loading.get()) {
            storage_utils::navigate_to(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

fn redirect_target(is_authenticated: bool, is_loading: bool) -> Option<&'static str> {
    if is_loading || is_authenticated {
        None
    } else {
        Some("/login")
    }
}

/// Where `/` sends the visitor.
pub fn home_target(is_authenticated: bool) -> &'static str {
    if is_authenticated {
        "/schedule"
    } else {
        "/login"
    }
}
