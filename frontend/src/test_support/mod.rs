#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::User;
    use crate::state::auth::{AuthContext, AuthState};
    use leptos::*;

    pub fn sample_user() -> User {
        User {
            id: 1,
            name: "Иван Петров".into(),
            username: Some("ivan".into()),
        }
    }

    /// Signed-in auth context when `user` is set, signed-out otherwise.
    pub fn provide_auth(user: Option<User>) -> AuthContext {
        let is_authenticated = user.is_some();
        let ctx = create_signal(AuthState {
            user,
            is_authenticated,
            loading: false,
        });
        provide_context::<AuthContext>(ctx);
        ctx
    }
}
