use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegisterRequest, User},
    pages::login::repository::LoginRepository,
    state::session::SessionStore,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn from_session(session: &SessionStore) -> Self {
        Self {
            is_authenticated: session.is_authenticated(),
            user: session.get(),
            loading: false,
        }
    }

    fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }
}

fn create_auth_context(api_client: &ApiClient) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::from_session(api_client.session()));

    api_client.unauthorized_policy().subscribe(move || {
        let _ = set_auth_state.try_set(AuthState::default());
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api_client = use_context::<ApiClient>().unwrap_or_default();
    let ctx = create_auth_context(&api_client);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(&request).await {
        Ok(response) => {
            set_auth_state.set(AuthState::signed_in(response.user));
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Creates the account and signs in with the same credentials.
pub async fn register_request(
    request: RegisterRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    if let Err(error) = repo.register(&request).await {
        set_auth_state.update(|state| state.loading = false);
        return Err(error);
    }
    login_request(request.credentials(), repo, set_auth_state).await
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.set(AuthState::default());
}

fn use_login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    LoginRepository::new_with_client(Rc::new(api))
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = use_login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_register_action() -> Action<RegisterRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = use_login_repository();

    create_action(move |request: &RegisterRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { register_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let repo = use_login_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth) }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo_for(server: &MockServer) -> (LoginRepository, SessionStore) {
        let session = SessionStore::in_memory();
        let api = ApiClient::new_with_base_url(server.base_url()).with_session(session.clone());
        (LoginRepository::new_with_client(Rc::new(api)), session)
    }

    fn login_mock_body() -> serde_json::Value {
        json!({
            "token": "tok-1",
            "user": { "id": 1, "name": "Иван Петров", "username": "ivan" }
        })
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/login");
                then.status(200).json_body(login_mock_body());
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let (repo, session) = repo_for(&server);

        login_request(
            LoginRequest {
                username: "ivan".into(),
                password: "secret".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.user.map(|u| u.name), Some("Иван Петров".into()));
        assert!(session.is_authenticated());

        logout(&repo, set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(!session.is_authenticated());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_leaves_state_signed_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/login");
                then.status(401)
                    .json_body(json!({ "detail": "Неверный логин или пароль" }));
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let (repo, session) = repo_for(&server);

        let err = login_request(
            LoginRequest {
                username: "ivan".into(),
                password: "nope".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(err.message_or("Ошибка при входе"), "Неверный логин или пароль");
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(!snapshot.loading);
        assert!(!session.is_authenticated());
        runtime.dispose();
    }

    #[tokio::test]
    async fn registration_chains_into_login() {
        let server = MockServer::start_async().await;
        let register = server
            .mock_async(|when, then| {
                when.method(POST).path("/register");
                then.status(200)
                    .json_body(json!({ "message": "ok", "user_id": 1 }));
            })
            .await;
        let login = server
            .mock_async(|when, then| {
                when.method(POST).path("/login").body_contains("ivan");
                then.status(200).json_body(login_mock_body());
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let (repo, session) = repo_for(&server);

        register_request(
            RegisterRequest {
                username: "ivan".into(),
                password: "secret".into(),
                name: "Иван Петров".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();

        register.assert_async().await;
        login.assert_async().await;
        assert!(state.get().is_authenticated);
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_registration_never_attempts_login() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/register");
                then.status(400)
                    .json_body(json!({ "detail": "Пользователь уже существует" }));
            })
            .await;
        let login = server
            .mock_async(|when, then| {
                when.method(POST).path("/login");
                then.status(200).json_body(login_mock_body());
            })
            .await;

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let (repo, session) = repo_for(&server);

        let err = register_request(
            RegisterRequest {
                username: "ivan".into(),
                password: "secret".into(),
                name: "Иван".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error, "Пользователь уже существует");
        login.assert_hits_async(0).await;
        assert!(!state.get().is_authenticated);
        assert!(!session.is_authenticated());
        runtime.dispose();
    }
}
