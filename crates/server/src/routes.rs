use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub mod landing_page;
pub mod location;
pub mod pizza;
pub mod product;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let resources = Router::new()
        .route("/location", get(location::find_all).post(location::create))
        .route(
            "/location/:id",
            get(location::find_one)
                .patch(location::update)
                .put(location::update)
                .delete(location::remove),
        )
        .route("/pizza", get(pizza::find_all).post(pizza::create))
        .route(
            "/pizza/:id",
            get(pizza::find_one)
                .patch(pizza::update)
                .put(pizza::update)
                .delete(pizza::remove),
        )
        .route("/product", get(product::find_all).post(product::create))
        .route(
            "/product/:id",
            get(product::find_one)
                .patch(product::update)
                .put(product::update)
                .delete(product::remove),
        );

    Router::new()
        .route("/health", get(health))
        .route("/landing-page", get(landing_page::get_landing_page))
        .merge(resources)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use service::AppServices;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        build_router(ServerState::new(AppServices::in_memory()), CorsLayer::very_permissive())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let res = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn malformed_id_is_bad_request() {
        let res = app()
            .oneshot(Request::builder().uri("/pizza/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["message"].as_str().unwrap().starts_with("invalid id"));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/product")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
