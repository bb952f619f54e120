use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
}

impl RegisterRequest {
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub lesson_number: i32,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default, deserialize_with = "deserialize_file_refs")]
    pub files: Vec<FileRef>,
}

impl Lesson {
    pub fn subject_label(&self) -> Option<&str> {
        non_empty(self.subject.as_deref())
    }

    pub fn teacher_label(&self) -> Option<&str> {
        non_empty(self.teacher.as_deref())
    }

    pub fn room_label(&self) -> Option<&str> {
        non_empty(self.room.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub id: i64,
    #[serde(default)]
    pub filename: Option<String>,
}

impl FileRef {
    pub fn display_name(&self) -> String {
        match non_empty(self.filename.as_deref()) {
            Some(name) => name.to_string(),
            None => crate::utils::download::fallback_file_name(self.id),
        }
    }
}

/// `files` arrives either as objects or as bare ids depending on the endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum FileEntry {
    Id(i64),
    Ref(FileRef),
}

fn deserialize_file_refs<'de, D>(deserializer: D) -> Result<Vec<FileRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<FileEntry>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            FileEntry::Id(id) => FileRef { id, filename: None },
            FileEntry::Ref(file) => file,
        })
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl LessonUpdate {
    /// Multipart fields to send. Empty values are skipped so the backend
    /// keeps what it already has.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        [
            ("subject", &self.subject),
            ("teacher", &self.teacher),
            ("room", &self.room),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (name, v.to_string()))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.form_fields().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedLesson {
    pub id: i64,
    pub lesson_number: i32,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDateEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub lesson_id: Option<i64>,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub filepath: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// A file picked in the browser, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "NOT_FOUND")
    }

    /// Classifies a non-2xx status carrying a server-provided message.
    pub fn from_status(status: u16, msg: impl Into<String>) -> Self {
        match status {
            401 => Self::unauthorized(msg),
            404 => Self::not_found(msg),
            400 | 422 => Self::validation(msg),
            _ => Self::with_code(msg, "HTTP_ERROR"),
        }
    }

    /// Builds an error from a FastAPI-style body (`{"detail": ...}`).
    pub fn from_response_body(status: u16, body: &[u8]) -> Self {
        let parsed: Option<Value> = serde_json::from_slice(body).ok();
        let detail = parsed.as_ref().and_then(|value| value.get("detail"));
        match detail {
            Some(Value::String(message)) if !message.trim().is_empty() => {
                Self::from_status(status, message.clone())
            }
            Some(Value::Array(items)) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| {
                        item.get("msg")
                            .and_then(|m| m.as_str())
                            .or_else(|| item.as_str())
                            .map(str::to_string)
                    })
                    .collect();
                let mut error = if messages.is_empty() {
                    Self::unknown(format!("HTTP {}", status))
                } else {
                    Self::from_status(status, messages.join("; "))
                };
                error.details = Some(Value::Array(items.clone()));
                error
            }
            _ if status == 401 => Self::unauthorized("Требуется авторизация"),
            _ => Self::unknown(format!("HTTP {}", status)),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    pub fn has_server_message(&self) -> bool {
        !matches!(self.code.as_str(), "UNKNOWN" | "REQUEST_FAILED") && !self.error.is_empty()
    }

    /// Text for the user: the server message when there is one, the
    /// localized fallback otherwise.
    pub fn message_or(&self, fallback: &str) -> String {
        if self.has_server_message() {
            self.error.clone()
        } else {
            fallback.to_string()
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }
}
