use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use std::sync::Arc;
use tracing::info;

use crate::AppContext;

pub mod callback;

pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .merge(callback::callback_router(ctx))
        .layer(middleware::from_fn(log_request))
}

async fn log_request(req: Request, next: Next) -> Response {
    info!(
        method = %req.method(),
        uri = %req.uri(),
        headers = ?req.headers(),
        "Request received"
    );
    next.run(req).await
}
