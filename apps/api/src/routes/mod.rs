pub mod contact;
pub mod health;
pub mod site;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::AppError;

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Turns a handler panic into the generic 500 body.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

/// Applies the 404 fallback and panic guard shared by every router we serve.
fn finish(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
}

/// Method mismatches on known paths answer 404 as well.
pub fn build_router() -> Router {
    finish(
        Router::new()
            .route("/health", get(health::health_handler).fallback(not_found))
            .route("/api/about", get(site::handle_about).fallback(not_found))
            .route("/api/projects", get(site::handle_projects).fallback(not_found))
            .route("/api/contact", post(contact::handle_contact).fallback(not_found)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        send(build_router(), request).await
    }

    async fn post_contact(body: Value) -> (StatusCode, Value) {
        post_raw(Some("application/json"), body.to_string()).await
    }

    async fn post_raw(content_type: Option<&str>, body: impl Into<Body>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(Method::POST).uri("/api/contact");
        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }
        send(build_router(), request.body(body.into()).unwrap()).await
    }

    #[tokio::test]
    async fn test_health_ok() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn test_about_returns_profile() {
        let (status, body) = get_json("/api/about").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Daniyal Alidana");
        assert_eq!(body["contact"]["github"], "https://github.com/daniyalalidana");
    }

    #[tokio::test]
    async fn test_projects_identical_across_calls() {
        let (status, first) = get_json("/api/projects").await;
        let (_, second) = get_json("/api/projects").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(first[0]["id"], 1);
        assert_eq!(first[1]["id"], 2);
        assert!(first[1]["url"].is_null());
    }

    #[tokio::test]
    async fn test_contact_accepts_complete_submission() {
        let (status, body) =
            post_contact(json!({"name": "Jo", "email": "jo@x.com", "message": "hi"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "message": "Message received. Will respond shortly!"})
        );
    }

    #[tokio::test]
    async fn test_contact_does_not_validate_content() {
        let cases = [
            json!({"name": "!!", "email": "not-an-email", "message": " "}),
            json!({"name": 42, "email": "jo@x.com", "message": "hi"}),
            json!({"name": "Jo", "email": true, "message": "hi"}),
            json!({"name": "Jo", "email": "jo@x.com", "message": {"text": "hi"}}),
            json!({"name": ["Jo"], "email": "jo@x.com", "message": -1}),
        ];
        for case in cases {
            let (status, body) = post_contact(case.clone()).await;
            assert_eq!(status, StatusCode::OK, "case {case}");
            assert_eq!(body["success"], true);
        }
    }

    #[tokio::test]
    async fn test_contact_rejects_empty_or_absent_fields() {
        let cases = [
            json!({"name": "", "email": "jo@x.com", "message": "hi"}),
            json!({"name": "Jo", "email": "", "message": "hi"}),
            json!({"name": "Jo", "email": "jo@x.com", "message": ""}),
            json!({"email": "jo@x.com", "message": "hi"}),
            json!({"name": "Jo", "message": "hi"}),
            json!({"name": "Jo", "email": "jo@x.com", "message": null}),
            json!({"name": 0, "email": "jo@x.com", "message": "hi"}),
            json!({"name": "Jo", "email": false, "message": "hi"}),
            json!({}),
            json!([]),
        ];
        for case in cases {
            let (status, body) = post_contact(case.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "case {case}");
            assert_eq!(body, json!({"error": "Missing required fields"}));
        }

        let bodiless = [
            (None, ""),
            (Some("application/json"), ""),
            (Some("text/plain"), r#"{"name":"Jo","email":"jo@x.com","message":"hi"}"#),
            (None, r#"{"name":"Jo","email":"jo@x.com","message":"hi"}"#),
        ];
        for (content_type, raw) in bodiless {
            let (status, body) = post_raw(content_type, raw).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{content_type:?} {raw:?}");
            assert_eq!(body, json!({"error": "Missing required fields"}));
        }
    }

    #[tokio::test]
    async fn test_contact_accepts_form_encoding() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Jo&email=jo%40x.com&subject=Hello&message=hi"))
            .unwrap();
        let (status, body) = send(build_router(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_contact_undecodable_json_is_500() {
        for raw in ["{\"name\": ", "\"Jo\""] {
            let (status, body) = post_raw(Some("application/json"), raw).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{raw}");
            assert_eq!(body, json!({"error": "Internal server error"}));
        }
    }

    #[tokio::test]
    async fn test_contact_json_with_charset() {
        let (status, body) = post_raw(
            Some("application/json; charset=utf-8"),
            r#"{"name":"Jo","email":"jo@x.com","message":"hi"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, body) = get_json("/api/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Endpoint not found"}));
    }

    #[tokio::test]
    async fn test_wrong_method_on_known_path_is_404() {
        let (status, body) = get_json("/api/contact").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Endpoint not found"}));
    }

    #[tokio::test]
    async fn test_handler_panic_is_500() {
        async fn explode() -> &'static str {
            panic!("boom")
        }
        let router = finish(Router::new().route("/explode", get(explode)));
        let request = Request::get("/explode").body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Internal server error"}));
    }
}
