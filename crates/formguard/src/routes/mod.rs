//! HTTP route handlers for FormGuard.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

pub mod form;
mod health;
mod verify;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Form page
        .route("/", get(form::index))
        .route("/index", get(form::redirect_index))

        // Submission verification
        .route("/verify", post(verify::verify_submission))

        // Health
        .route("/health", get(health::health_check))

        // Assets referenced by the page
        .nest_service("/static", static_files)

        // Any origin, credentials allowed (origin is mirrored)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())

        // Add shared state
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use crate::config::AppConfig;

    fn app() -> Router {
        let mut config = AppConfig::default();
        config.recaptcha.site_key = "site-key-under-test".to_string();
        config.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string();
        create_router(AppState::new(config).unwrap())
    }

    async fn get(uri: &str) -> axum::response::Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_site_key() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert!(body_string(response).await.contains("site-key-under-test"));
    }

    #[tokio::test]
    async fn test_index_alias_redirects() {
        let response = get("/index").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_health() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_static_assets() {
        let response = get("/static/style.css").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get("/static/missing.css").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cors_mirrors_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://example.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://example.org"
        );
    }
}
