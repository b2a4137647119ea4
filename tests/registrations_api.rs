//! HTTP tests for the registration routes over the in-memory store

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use futures::stream::BoxStream;
use regboard::{
    db::{repositories::MemoryRegistrationStore, RegistrationOrder, RegistrationStore},
    models::{NewRegistration, Registration},
    AppError, AppResult,
};
use serde_json::json;

use common::{send, send_raw, test_app};

fn alpha() -> serde_json::Value {
    json!({
        "collegeName": "Alpha",
        "collegeAddress": "1 University Ave",
        "facultyIncharge": "Dr. Kapoor",
        "contactNumber": "9123456780",
        "events": [
            { "eventName": "Quiz", "membersCount": 2, "memberNames": ["Asha", "Ravi"] }
        ]
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_app(Arc::new(MemoryRegistrationStore::new()));

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_create_update_and_leaderboard_flow() {
    let app = test_app(Arc::new(MemoryRegistrationStore::new()));

    let (status, body) = send(&app, Method::POST, "/api/v1/registrations", Some(alpha())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["registrationId"], "01");
    assert_eq!(body["message"], "Registration successful for all events!");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/registrations/01/event/Quiz/marks",
        Some(json!({ "round1": 10, "round3": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["event"]["eventName"], "Quiz");
    assert_eq!(body["event"]["marks"]["total"], 15.0);
    assert_eq!(body["event"]["marks"]["round2"], 0.0);
    assert_eq!(body["event"]["status"], "scored");

    let (status, body) = send(&app, Method::GET, "/api/v1/registrations/leaderboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "collegeName": "Alpha", "eventName": "Quiz", "total": 15.0 }])
    );
}

#[tokio::test]
async fn test_list_and_get() {
    let app = test_app(Arc::new(MemoryRegistrationStore::new()));

    send(&app, Method::POST, "/api/v1/registrations", Some(alpha())).await;
    let mut beta = alpha();
    beta["collegeName"] = json!("Beta");
    send(&app, Method::POST, "/api/v1/registrations", Some(beta)).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/registrations", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["collegeName"], "Beta");
    assert_eq!(list[0]["registrationId"], "02");
    assert_eq!(list[1]["events"][0]["memberNames"], json!(["Asha", "Ravi"]));
    assert!(list[1]["createdAt"].is_string());
    assert_eq!(list[1]["events"][0]["status"], "unscored");

    let (status, body) = send(&app, Method::GET, "/api/v1/registrations/01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["collegeName"], "Alpha");

    let (status, body) = send(&app, Method::GET, "/api/v1/registrations/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "REGISTRATION_NOT_FOUND");
}

#[tokio::test]
async fn test_create_validation_failures() {
    let store = Arc::new(MemoryRegistrationStore::new());
    let app = test_app(store.clone());

    let mut no_events = alpha();
    no_events["events"] = json!([]);
    let (status, body) = send(&app, Method::POST, "/api/v1/registrations", Some(no_events)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let mut missing_field = alpha();
    missing_field.as_object_mut().unwrap().remove("contactNumber");
    let (status, _) = send(&app, Method::POST, "/api/v1/registrations", Some(missing_field)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut no_count = alpha();
    no_count["events"] = json!([{ "eventName": "Quiz" }]);
    let (status, _) = send(&app, Method::POST, "/api/v1/registrations", Some(no_count)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_update_marks_errors() {
    let app = test_app(Arc::new(MemoryRegistrationStore::new()));
    send(&app, Method::POST, "/api/v1/registrations", Some(alpha())).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/registrations/09/event/Quiz/marks",
        Some(json!({ "round1": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "REGISTRATION_NOT_FOUND");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/registrations/01/event/Debate/marks",
        Some(json!({ "round1": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "EVENT_NOT_FOUND");
}

#[tokio::test]
async fn test_event_names_are_percent_decoded() {
    let app = test_app(Arc::new(MemoryRegistrationStore::new()));
    let mut body = alpha();
    body["events"] = json!([{ "eventName": "Code Sprint", "membersCount": 3 }]);
    send(&app, Method::POST, "/api/v1/registrations", Some(body)).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/registrations/01/event/Code%20Sprint/marks",
        Some(json!({ "round5": 12.5, "round2": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"]["marks"]["total"], 12.5);
}

#[tokio::test]
async fn test_event_status_is_reported() {
    let app = test_app(Arc::new(MemoryRegistrationStore::new()));
    send(&app, Method::POST, "/api/v1/registrations", Some(alpha())).await;

    let (_, body) = send(&app, Method::GET, "/api/v1/registrations/01", None).await;
    assert_eq!(body["events"][0]["status"], "unscored");

    // All-zero marks still count as scored
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/registrations/01/event/Quiz/marks",
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/v1/registrations/01", None).await;
    assert_eq!(body["events"][0]["status"], "scored");
    assert_eq!(body["events"][0]["marks"]["total"], 0.0);
}

#[tokio::test]
async fn test_overflowing_marks_are_rejected() {
    let app = test_app(Arc::new(MemoryRegistrationStore::new()));
    send(&app, Method::POST, "/api/v1/registrations", Some(alpha())).await;
    send(
        &app,
        Method::PUT,
        "/api/v1/registrations/01/event/Quiz/marks",
        Some(json!({ "round1": 8 })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/registrations/01/event/Quiz/marks",
        Some(json!({ "round1": 1e308, "round2": 1e308 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = send(&app, Method::GET, "/api/v1/registrations/leaderboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["total"], 8.0);

    let (status, body) = send(&app, Method::GET, "/api/v1/registrations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["events"][0]["marks"]["total"], 8.0);
}

#[tokio::test]
async fn test_rounds_accept_numeric_strings() {
    let app = test_app(Arc::new(MemoryRegistrationStore::new()));
    send(&app, Method::POST, "/api/v1/registrations", Some(alpha())).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/registrations/01/event/Quiz/marks",
        Some(json!({ "round1": "10", "round2": 2.5, "round3": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"]["marks"]["round1"], 10.0);
    assert_eq!(body["event"]["marks"]["round3"], 0.0);
    assert_eq!(body["event"]["marks"]["total"], 12.5);
}

#[tokio::test]
async fn test_malformed_bodies_use_error_envelope() {
    let store = Arc::new(MemoryRegistrationStore::new());
    let app = test_app(store.clone());

    let mut string_count = alpha();
    string_count["events"][0]["membersCount"] = json!("2");
    let (status, body) =
        send(&app, Method::POST, "/api/v1/registrations", Some(string_count)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"].is_string());
    assert!(store.is_empty().await);

    let (status, body) =
        send_raw(&app, Method::POST, "/api/v1/registrations", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    send(&app, Method::POST, "/api/v1/registrations", Some(alpha())).await;
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/registrations/01/event/Quiz/marks",
        Some(json!({ "round1": "ten" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (_, body) = send(&app, Method::GET, "/api/v1/registrations/01", None).await;
    assert_eq!(body["events"][0]["status"], "unscored");
}

/// Store whose backend is always down
struct UnavailableStore;

#[async_trait]
impl RegistrationStore for UnavailableStore {
    async fn next_sequence(&self) -> AppResult<u64> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }

    async fn insert(&self, _registration: NewRegistration) -> AppResult<Registration> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }

    async fn find_by_registration_id(
        &self,
        _registration_id: &str,
    ) -> AppResult<Option<Registration>> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }

    async fn find_all(
        &self,
        _order: RegistrationOrder,
    ) -> AppResult<BoxStream<'_, AppResult<Registration>>> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }

    async fn save(&self, _registration: &Registration) -> AppResult<Registration> {
        Err(AppError::StoreUnavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_store_failures_are_reported_without_details() {
    let app = test_app(Arc::new(UnavailableStore));

    let (status, body) = send(&app, Method::GET, "/api/v1/registrations/leaderboard", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");
    assert!(!body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("connection refused"));

    let (status, _) = send(&app, Method::POST, "/api/v1/registrations", Some(alpha())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
