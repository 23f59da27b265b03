use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::time::Instant;

use crate::server::handlers::{
    create_presentation, delete_presentation, get_presentation, list_presentations,
    update_presentation, AppState,
};
use crate::server::health::health;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/presentations",
            get(list_presentations).post(create_presentation),
        )
        .route(
            "/api/presentations/{id}",
            get(get_presentation)
                .patch(update_presentation)
                .delete(delete_presentation),
        )
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Logs one line per request with method, path, status and latency.
async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}
