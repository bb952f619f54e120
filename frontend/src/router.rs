use leptos::*;
use leptos_router::*;

use crate::{
    api::{unauthorized::redirect_to_login_if_needed, ApiClient, UnauthorizedPolicy},
    components::guard::RequireAuth,
    pages::{home::HomePage, login::LoginPage, schedule::SchedulePage},
    state::{auth::AuthProvider, session::SessionStore},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/schedule"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/schedule"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

/// Builds the one API client for the app: browser session store plus the
/// 401 policy that sends the user back to `/login`.
pub fn build_api_client() -> ApiClient {
    let policy = UnauthorizedPolicy::new();
    policy.subscribe(redirect_to_login_if_needed);
    ApiClient::new()
        .with_session(SessionStore::default())
        .with_unauthorized_policy(policy)
}

pub fn app_root() -> impl IntoView {
    provide_context(build_api_client());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/schedule" view=ProtectedSchedule/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedSchedule() -> impl IntoView {
    view! { <RequireAuth><SchedulePage/></RequireAuth> }
}
