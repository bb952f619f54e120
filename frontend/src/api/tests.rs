#![cfg(not(coverage))]

use super::*;
use crate::state::session::SessionStore;
use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;
use std::{cell::Cell, rc::Rc};

fn user_json(id: i64) -> serde_json::Value {
    json!({ "id": id, "name": "Иван Петров", "username": "ivan" })
}

fn lesson_json(id: i64, number: i32, subject: &str) -> serde_json::Value {
    json!({
        "id": id,
        "lesson_number": number,
        "subject": subject,
        "teacher": "",
        "room": "",
        "files": []
    })
}

fn schedule_json(date: &str) -> serde_json::Value {
    json!({
        "date": date,
        "notes": "",
        "lessons": [lesson_json(1, 1, "Пара 1"), lesson_json(2, 2, "Пара 2")]
    })
}

fn sample_user() -> User {
    User {
        id: 1,
        name: "Иван Петров".into(),
        username: Some("ivan".into()),
    }
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url()).with_session(SessionStore::in_memory())
}

fn signed_in_client(server: &MockServer) -> ApiClient {
    let api = api_client(server);
    api.session().set("tok-1", &sample_user()).unwrap();
    api
}

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

#[test]
fn auth_headers_are_empty_without_token() {
    let api = ApiClient::new_with_base_url("http://unused").with_session(SessionStore::in_memory());
    let headers = api.get_auth_headers().unwrap();
    assert!(headers.get(reqwest::header::AUTHORIZATION).is_none());

    api.session().set("tok-9", &sample_user()).unwrap();
    let headers = api.get_auth_headers().unwrap();
    assert_eq!(
        headers.get(reqwest::header::AUTHORIZATION).unwrap(),
        "Bearer tok-9"
    );
}

#[tokio::test]
async fn login_persists_token_and_user() {
    let server = MockServer::start_async().await;
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/login")
                .body_contains("name=\"username\"")
                .body_contains("ivan");
            then.status(200)
                .json_body(json!({ "token": "tok-1", "user": user_json(1) }));
        })
        .await;

    let api = api_client(&server);
    assert!(!api.is_authenticated());

    let response = api
        .login(&LoginRequest {
            username: "ivan".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    login.assert_async().await;
    assert_eq!(response.token, "tok-1");
    assert!(api.is_authenticated());
    assert_eq!(api.session().token().as_deref(), Some("tok-1"));
    assert_eq!(api.current_user(), Some(sample_user()));
}

#[tokio::test]
async fn login_failure_surfaces_server_detail_and_keeps_storage_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/login");
            then.status(401).json_body(json!({ "detail": "Неверные данные" }));
        })
        .await;

    let api = api_client(&server);
    let err = api
        .login(&LoginRequest {
            username: "ivan".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.message_or("Ошибка при входе"), "Неверные данные");
    assert!(!api.is_authenticated());
}

#[tokio::test]
async fn register_posts_multipart_fields() {
    let server = MockServer::start_async().await;
    let register = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/register")
                .body_contains("name=\"name\"")
                .body_contains("Иван Петров");
            then.status(200)
                .json_body(json!({ "message": "Пользователь создан", "user_id": 5 }));
        })
        .await;

    let api = api_client(&server);
    let response = api
        .register(&RegisterRequest {
            username: "ivan".into(),
            password: "secret".into(),
            name: "Иван Петров".into(),
        })
        .await
        .unwrap();

    register.assert_async().await;
    assert_eq!(response.user_id, Some(5));
    assert!(!api.is_authenticated());
}

#[tokio::test]
async fn authenticated_requests_carry_bearer_token() {
    let server = MockServer::start_async().await;
    let schedule = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/schedule/2024-01-01")
                .header("Authorization", "Bearer tok-1");
            then.status(200).json_body(schedule_json("2024-01-01"));
        })
        .await;

    let api = signed_in_client(&server);
    let loaded = api.create_or_get_schedule(date("2024-01-01")).await.unwrap();

    schedule.assert_async().await;
    assert_eq!(loaded.lessons.len(), 2);
}

#[tokio::test]
async fn create_or_get_schedule_is_idempotent_for_a_date() {
    let server = MockServer::start_async().await;
    let schedule = server
        .mock_async(|when, then| {
            when.method(POST).path("/schedule/2024-01-01");
            then.status(200).json_body(schedule_json("2024-01-01"));
        })
        .await;

    let api = signed_in_client(&server);
    let first = api.create_or_get_schedule(date("2024-01-01")).await.unwrap();
    let second = api.create_or_get_schedule(date("2024-01-01")).await.unwrap();

    schedule.assert_hits_async(2).await;
    assert_eq!(first.date, date("2024-01-01"));
    assert_eq!(second.date, first.date);
    assert_eq!(first.lessons, second.lessons);
}

#[tokio::test]
async fn get_schedule_and_dates_parse_backend_payloads() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/schedule/2025-03-19");
            then.status(200).json_body(json!({
                "date": "2025-03-19",
                "notes": "",
                "lessons": [{
                    "id": 4,
                    "lesson_number": 1,
                    "subject": "Алгебра",
                    "teacher": "Смирнова",
                    "room": "316",
                    "files": [21]
                }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/dates");
            then.status(200).json_body(json!([
                { "date": "2025-03-19", "notes": "" },
                { "date": "2025-03-18", "notes": "Контрольная" }
            ]));
        })
        .await;

    let api = signed_in_client(&server);
    let schedule = api.get_schedule(date("2025-03-19")).await.unwrap();
    assert_eq!(schedule.lessons[0].room_label(), Some("316"));
    assert_eq!(schedule.lessons[0].files[0].display_name(), "file_21");

    let dates = api.get_dates().await.unwrap();
    assert_eq!(dates.len(), 2);
    assert_eq!(dates[1].notes.as_deref(), Some("Контрольная"));
}

#[tokio::test]
async fn update_lesson_sends_only_provided_fields() {
    let server = MockServer::start_async().await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/lessons/3")
                .body_contains("name=\"subject\"")
                .body_contains("История");
            then.status(200).json_body(json!({
                "id": 3,
                "lesson_number": 2,
                "subject": "История",
                "teacher": "Иванов",
                "room": "12"
            }));
        })
        .await;

    let api = signed_in_client(&server);
    let updated = api
        .update_lesson(
            3,
            &LessonUpdate {
                subject: Some("История".into()),
                ..LessonUpdate::default()
            },
        )
        .await
        .unwrap();

    update.assert_async().await;
    assert_eq!(updated.subject.as_deref(), Some("История"));
    assert_eq!(updated.teacher.as_deref(), Some("Иванов"));
}

#[tokio::test]
async fn delete_endpoints_succeed() {
    let server = MockServer::start_async().await;
    let lesson = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/lessons/3");
            then.status(200).json_body(json!({ "message": "deleted" }));
        })
        .await;
    let file = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/files/8");
            then.status(200).json_body(json!(true));
        })
        .await;

    let api = signed_in_client(&server);
    api.delete_lesson(3).await.unwrap();
    api.delete_file(8).await.unwrap();
    lesson.assert_async().await;
    file.assert_async().await;
}

#[tokio::test]
async fn uploads_send_multipart_files() {
    let server = MockServer::start_async().await;
    let single = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/lessons/3/files")
                .body_contains("name=\"file\"")
                .body_contains("filename=\"notes.txt\"")
                .body_contains("hello");
            then.status(200).json_body(json!({
                "id": 10,
                "filename": "notes.txt",
                "lesson_id": 3,
                "message": "Файл прикреплён к паре!"
            }));
        })
        .await;
    let batch = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/upload")
                .body_contains("name=\"lesson_id\"")
                .body_contains("name=\"files\"")
                .body_contains("filename=\"b.txt\"");
            then.status(200).json_body(json!({
                "id": 11,
                "filename": "a.txt",
                "filepath": "/app/uploads/a.txt",
                "size": 3
            }));
        })
        .await;

    let api = signed_in_client(&server);
    let uploaded = api
        .upload_to_lesson(
            3,
            UploadFile {
                name: "notes.txt".into(),
                bytes: b"hello".to_vec(),
            },
        )
        .await
        .unwrap();
    assert_eq!(uploaded.lesson_id, Some(3));

    let uploaded = api
        .upload_files(
            3,
            vec![
                UploadFile {
                    name: "a.txt".into(),
                    bytes: b"aaa".to_vec(),
                },
                UploadFile {
                    name: "b.txt".into(),
                    bytes: b"bbb".to_vec(),
                },
            ],
        )
        .await
        .unwrap();
    assert_eq!(uploaded.size, Some(3));

    single.assert_async().await;
    batch.assert_async().await;
}

#[tokio::test]
async fn upload_files_rejects_empty_selection_without_request() {
    let server = MockServer::start_async().await;
    let batch = server
        .mock_async(|when, then| {
            when.method(POST).path("/upload");
            then.status(200).json_body(json!({}));
        })
        .await;

    let api = signed_in_client(&server);
    let err = api.upload_files(3, Vec::new()).await.unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
    batch.assert_hits_async(0).await;
}

#[tokio::test]
async fn download_returns_raw_bytes_and_info_parses() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/files/download/7");
            then.status(200)
                .header("content-type", "application/octet-stream")
                .body(b"\x89PNG-bytes".to_vec());
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/files/7");
            then.status(200).json_body(json!({
                "id": 7,
                "filename": "slide.png",
                "filepath": "/app/uploads/slide.png",
                "size": 10,
                "download_url": "/static/slide.png"
            }));
        })
        .await;

    let api = signed_in_client(&server);
    let bytes = api.download_file(7).await.unwrap();
    assert_eq!(bytes, b"\x89PNG-bytes".to_vec());

    let info = api.get_file_info(7).await.unwrap();
    assert_eq!(info.filename, "slide.png");
    assert_eq!(info.download_url.as_deref(), Some("/static/slide.png"));
}

#[tokio::test]
async fn unauthorized_from_any_endpoint_clears_session_and_notifies() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/dates");
            then.status(401).json_body(json!({ "detail": "Token expired" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/files/5");
            then.status(401);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/lessons/1");
            then.status(401).json_body(json!({ "detail": "Token expired" }));
        })
        .await;

    let notified = Rc::new(Cell::new(0));
    let policy = UnauthorizedPolicy::new();
    {
        let notified = notified.clone();
        policy.subscribe(move || notified.set(notified.get() + 1));
    }
    let api = signed_in_client(&server).with_unauthorized_policy(policy);

    let err = api.get_dates().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!api.is_authenticated());
    assert!(api.current_user().is_none());

    api.session().set("tok-2", &sample_user()).unwrap();
    let err = api.delete_file(5).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!api.is_authenticated());

    api.session().set("tok-3", &sample_user()).unwrap();
    let err = api
        .update_lesson(1, &LessonUpdate::default())
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!api.is_authenticated());

    assert_eq!(notified.get(), 3);
}

#[tokio::test]
async fn other_errors_leave_session_untouched() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/schedule/2024-01-01");
            then.status(400)
                .json_body(json!({ "detail": "Неверный формат даты" }));
        })
        .await;

    let api = signed_in_client(&server);
    let err = api
        .create_or_get_schedule(date("2024-01-01"))
        .await
        .unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
    assert_eq!(err.error, "Неверный формат даты");
    assert!(api.is_authenticated());
}

#[tokio::test]
async fn transport_failure_maps_to_request_failed() {
    let api = ApiClient::new_with_base_url("http://127.0.0.1:1").with_session(SessionStore::in_memory());
    let err = api.get_dates().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert_eq!(
        err.message_or("Ошибка загрузки расписания"),
        "Ошибка загрузки расписания"
    );
}
