use crate::api::{LoginRequest, RegisterRequest};

pub const LOGIN_FALLBACK_ERROR: &str = "Ошибка при входе";

pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Введите логин".into());
    }
    if password.is_empty() {
        return Err("Введите пароль".into());
    }
    Ok(())
}

pub fn validate_registration(username: &str, password: &str, name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Введите имя".into());
    }
    validate_credentials(username, password)
}

/// What the submit button sends, depending on the form mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

pub fn build_submission(
    register_mode: bool,
    username: &str,
    password: &str,
    name: &str,
) -> Result<AuthSubmission, String> {
    let username = username.trim().to_string();
    if register_mode {
        validate_registration(&username, password, name)?;
        Ok(AuthSubmission::Register(RegisterRequest {
            username,
            password: password.to_string(),
            name: name.trim().to_string(),
        }))
    } else {
        validate_credentials(&username, password)?;
        Ok(AuthSubmission::Login(LoginRequest {
            username,
            password: password.to_string(),
        }))
    }
}

pub fn form_title(register_mode: bool) -> &'static str {
    if register_mode {
        "Регистрация"
    } else {
        "Вход в Расписание ВГУ"
    }
}

pub fn submit_label(register_mode: bool, pending: bool) -> &'static str {
    match (pending, register_mode) {
        (true, _) => "Загрузка...",
        (false, true) => "Зарегистрироваться",
        (false, false) => "Войти",
    }
}

pub fn toggle_label(register_mode: bool) -> &'static str {
    if register_mode {
        "Уже есть аккаунт? Войти"
    } else {
        "Нет аккаунта? Зарегистрироваться"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_required() {
        assert_eq!(validate_credentials(" ", "pw"), Err("Введите логин".into()));
        assert_eq!(validate_credentials("ivan", ""), Err("Введите пароль".into()));
        assert!(validate_credentials("ivan", "pw").is_ok());
    }

    #[test]
    fn registration_requires_name() {
        assert_eq!(validate_registration("ivan", "pw", "  "), Err("Введите имя".into()));
        assert!(validate_registration("ivan", "pw", "Иван").is_ok());
    }

    #[test]
    fn submission_follows_form_mode() {
        assert_eq!(
            build_submission(false, " ivan ", "pw", "ignored"),
            Ok(AuthSubmission::Login(LoginRequest {
                username: "ivan".into(),
                password: "pw".into(),
            }))
        );
        assert_eq!(
            build_submission(true, "ivan", "pw", " Иван "),
            Ok(AuthSubmission::Register(RegisterRequest {
                username: "ivan".into(),
                password: "pw".into(),
                name: "Иван".into(),
            }))
        );
        assert!(build_submission(true, "ivan", "pw", "").is_err());
    }

    #[test]
    fn labels_switch_with_mode_and_pending() {
        assert_eq!(form_title(true), "Регистрация");
        assert_eq!(submit_label(false, true), "Загрузка...");
        assert_eq!(submit_label(true, false), "Зарегистрироваться");
        assert_eq!(submit_label(false, false), "Войти");
        assert_eq!(toggle_label(false), "Нет аккаунта? Зарегистрироваться");
    }
}
