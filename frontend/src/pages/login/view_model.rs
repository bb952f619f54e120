use super::utils::{build_submission, AuthSubmission, LOGIN_FALLBACK_ERROR};
use crate::api::{ApiError, LoginRequest, RegisterRequest};
use crate::state::auth;
use crate::utils::storage as storage_utils;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub name: RwSignal<String>,
    pub register_mode: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            name: create_rw_signal(String::new()),
            register_mode: create_rw_signal(false),
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
    pub pending: Signal<bool>,
}

impl LoginViewModel {
    /// Validates the form and dispatches login or register. Ignored while a
    /// request is in flight.
    pub fn submit(&self) {
        if self.pending.get_untracked() {
            return;
        }
        let submission = build_submission(
            self.form.register_mode.get_untracked(),
            &self.form.username.get_untracked(),
            &self.form.password.get_untracked(),
            &self.form.name.get_untracked(),
        );
        match submission {
            Ok(AuthSubmission::Login(request)) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Ok(AuthSubmission::Register(request)) => {
                self.error.set(None);
                self.register_action.dispatch(request);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }

    pub fn toggle_mode(&self) {
        self.form.register_mode.update(|mode| *mode = !*mode);
        self.error.set(None);
    }
}

fn handle_result(result: Result<(), ApiError>, error: RwSignal<Option<String>>) {
    match result {
        Ok(()) => {
            error.set(None);
            storage_utils::navigate_to("/schedule");
        }
        Err(err) => {
            log::warn!("Authentication failed: {}", err);
            error.set(Some(err.message_or(LOGIN_FALLBACK_ERROR)));
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();
    let register_action = auth::use_register_action();

    let login_pending = login_action.pending();
    let register_pending = register_action.pending();
    let pending = Signal::derive(move || login_pending.get() || register_pending.get());

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            handle_result(result, error);
        }
    });
    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            handle_result(result, error);
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
        register_action,
        pending,
    }
}
