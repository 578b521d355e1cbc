//! Route Table

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{health_check, submit_contact};
use crate::state::AppState;

/// Largest accepted contact request body, in bytes
pub const MAX_CONTACT_BODY: usize = 64 * 1024;

/// Build the application router
///
/// Unmatched paths are served from `static_dir`; unknown files fall back to
/// `index.html` so client-side routes such as `/dashboard` survive a reload.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Contact form
        .route(
            "/api/contact",
            post(submit_contact).layer(DefaultBodyLimit::max(MAX_CONTACT_BODY)),
        )
        // Static files (WASM frontend)
        .fallback_service(frontend)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use schoolpal_core::ContactReceipt;
    use tower::ServiceExt;

    fn app() -> (Router, AppState) {
        let state = AppState::default();
        (build_router(state.clone(), Path::new("no-such-dir")), state)
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_contact(body: &serde_json::Value) -> Request<Body> {
        Request::post("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _) = app();

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["submissions_received"], 0);
    }

    #[tokio::test]
    async fn test_contact_accepted() {
        let (app, state) = app();
        let body = serde_json::json!({
            "name": "Mei",
            "email": "mei@school.example",
            "organization": "Riverside Primary",
            "message": "Can we try this with grade 4?"
        });

        let response = app.oneshot(post_contact(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let receipt: ContactReceipt = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(state.contacts.recent(1)[0].receipt, receipt);
        assert_eq!(state.contacts.len(), 1);
    }

    #[tokio::test]
    async fn test_contact_missing_field_rejected() {
        let (app, state) = app();
        let body = serde_json::json!({
            "name": "Mei",
            "email": "mei@school.example",
            "message": ""
        });

        let response = app.oneshot(post_contact(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert_eq!(json["code"], "INVALID_SUBMISSION");
        assert!(state.contacts.is_empty());
    }

    #[tokio::test]
    async fn test_contact_bad_email_rejected() {
        let (app, state) = app();
        let body = serde_json::json!({
            "name": "Mei",
            "email": "not-an-email",
            "message": "Hello"
        });

        let response = app.oneshot(post_contact(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(state.contacts.is_empty());
    }

    #[tokio::test]
    async fn test_contact_long_message_rejected() {
        let (app, state) = app();
        let body = serde_json::json!({
            "name": "Mei",
            "email": "mei@school.example",
            "message": "a".repeat(schoolpal_core::MAX_MESSAGE_LEN + 1)
        });

        let response = app.oneshot(post_contact(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(response).await;
        assert_eq!(json["code"], "INVALID_SUBMISSION");
        assert!(state.contacts.is_empty());
    }

    #[tokio::test]
    async fn test_contact_oversized_body_rejected() {
        let (app, state) = app();
        let body = serde_json::json!({
            "name": "Mei",
            "email": "mei@school.example",
            "message": "a".repeat(MAX_CONTACT_BODY + 1)
        });

        let response = app.oneshot(post_contact(&body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(state.contacts.is_empty());
    }
}
