use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::relay::{extract_identifiers, RelayTask};
use crate::web::error::CallbackError;
use crate::AppContext;

pub fn callback_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/callback", post(handle_callback))
        .with_state(ctx)
}

#[derive(Debug, Serialize)]
struct AckResponse {
    message: &'static str,
}

/// Validates the inbound notification and acknowledges it. The relay handoff
/// is a detached spawn; the response never waits on it.
async fn handle_callback(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, CallbackError> {
    let body = parse_body(&body)?;
    info!(body = %body, "Callback received");

    let callback_url = headers
        .get("callbackUrl")
        .and_then(|value| value.to_str().ok())
        .ok_or(CallbackError::MissingCallbackUrl)?;

    let ids = extract_identifiers(callback_url)?;
    ctx.dispatcher.schedule(RelayTask::new(callback_url, ids));

    Ok((
        StatusCode::OK,
        Json(AckResponse {
            message: "Callback received successfully",
        }),
    ))
}

// The body is opaque: logged, never interpreted. A broken body is an
// unhandled fault rather than a validation failure, an empty one is null.
fn parse_body(body: &Bytes) -> Result<Value, CallbackError> {
    if body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| CallbackError::Unhandled(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{RelayClient, RelayDispatcher};
    use serde_json::json;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::net::TcpListener;
    use tokio::time::{sleep, Duration};

    async fn spawn_app(delay: Duration) -> SocketAddr {
        let dispatcher = RelayDispatcher::new(RelayClient::new()).with_delay(delay);
        let ctx = Arc::new(AppContext {
            dispatcher: Arc::new(dispatcher),
        });
        let app = crate::web::handlers::router(ctx);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    struct Sink {
        addr: SocketAddr,
        hits: Arc<AtomicUsize>,
        last_body: Arc<Mutex<Option<Value>>>,
    }

    async fn spawn_sink() -> Sink {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_body = Arc::new(Mutex::new(None));
        let counter = hits.clone();
        let captured = last_body.clone();
        // Json rejects anything without a Content-Type: application/json, so
        // a counted hit also asserts the outbound header.
        let app = Router::new().route(
            "/t/abc/def",
            post(move |Json(body): Json<Value>| {
                let counter = counter.clone();
                let captured = captured.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    *captured.lock().unwrap() = Some(body);
                    Json(json!({"received": true}))
                }
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Sink {
            addr,
            hits,
            last_body,
        }
    }

    #[tokio::test]
    async fn missing_callback_url_is_rejected() {
        let addr = spawn_app(Duration::from_millis(50)).await;

        let resp = reqwest::Client::new()
            .post(format!("http://{}/callback", addr))
            .json(&json!({"x": 1}))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), 400);
        assert_eq!(resp.text().await.unwrap(), "Callback URL is missing");
    }

    #[tokio::test]
    async fn invalid_callback_url_is_rejected() {
        let addr = spawn_app(Duration::from_millis(50)).await;

        let resp = reqwest::Client::new()
            .post(format!("http://{}/callback", addr))
            .header("callbackUrl", "not a url")
            .json(&json!({"x": 1}))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), 400);
        assert_eq!(resp.text().await.unwrap(), "Invalid callback URL format");
    }

    #[tokio::test]
    async fn malformed_body_hits_the_error_boundary() {
        let addr = spawn_app(Duration::from_millis(50)).await;

        let resp = reqwest::Client::new()
            .post(format!("http://{}/callback", addr))
            .header("callbackUrl", "https://example.com/t/abc/def")
            .body("{not json")
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), 500);
        assert_eq!(resp.text().await.unwrap(), "Internal Server Error");
    }

    #[tokio::test]
    async fn valid_callback_is_acked_then_relayed_once() {
        let sink = spawn_sink().await;
        let addr = spawn_app(Duration::from_millis(300)).await;

        let resp = reqwest::Client::new()
            .post(format!("http://{}/callback", addr))
            .header("callbackUrl", format!("http://{}/t/abc/def", sink.addr))
            .json(&json!({"x": 1}))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), 200);
        assert_eq!(
            resp.json::<Value>().await.unwrap(),
            json!({"message": "Callback received successfully"})
        );

        // The acknowledgment arrived; the relay must still be waiting.
        assert_eq!(sink.hits.load(Ordering::SeqCst), 0);
        sleep(Duration::from_millis(100)).await;
        assert_eq!(sink.hits.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(700)).await;
        assert_eq!(sink.hits.load(Ordering::SeqCst), 1);
        assert_eq!(
            sink.last_body.lock().unwrap().clone(),
            Some(json!({"data": "QA Testing - RM"}))
        );

        sleep(Duration::from_millis(400)).await;
        assert_eq!(sink.hits.load(Ordering::SeqCst), 1, "exactly one relay per callback");
    }

    #[tokio::test]
    async fn empty_body_is_tolerated() {
        let sink = spawn_sink().await;
        let addr = spawn_app(Duration::from_millis(50)).await;

        let resp = reqwest::Client::new()
            .post(format!("http://{}/callback", addr))
            .header("callbackUrl", format!("http://{}/t/abc/def", sink.addr))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), 200);
        sleep(Duration::from_millis(400)).await;
        assert_eq!(sink.hits.load(Ordering::SeqCst), 1);
    }
}
