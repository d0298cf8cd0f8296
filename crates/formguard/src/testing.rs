//! Test doubles for the external verifier.

use axum::{
    Form, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::post,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
struct FakeState {
    body: String,
    delay: Duration,
    calls: Arc<AtomicUsize>,
    last_form: Arc<Mutex<Option<HashMap<String, String>>>>,
}

/// A local siteverify stand-in answering every call with a canned body
pub struct FakeVerifier {
    addr: std::net::SocketAddr,
    calls: Arc<AtomicUsize>,
    last_form: Arc<Mutex<Option<HashMap<String, String>>>>,
}

impl FakeVerifier {
    pub async fn spawn(body: serde_json::Value) -> Self {
        Self::start(body.to_string(), Duration::ZERO).await
    }

    pub async fn spawn_with_delay(body: serde_json::Value, delay: Duration) -> Self {
        Self::start(body.to_string(), delay).await
    }

    pub async fn spawn_raw(body: &str) -> Self {
        Self::start(body.to_string(), Duration::ZERO).await
    }

    async fn start(body: String, delay: Duration) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let last_form = Arc::new(Mutex::new(None));
        let state = FakeState {
            body,
            delay,
            calls: calls.clone(),
            last_form: last_form.clone(),
        };

        let app = Router::new()
            .route("/siteverify", post(answer))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, calls, last_form }
    }

    pub fn url(&self) -> String {
        format!("http://{}/siteverify", self.addr)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_form(&self) -> Option<HashMap<String, String>> {
        self.last_form.lock().unwrap().clone()
    }
}

async fn answer(
    State(state): State<FakeState>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    state.calls.fetch_add(1, Ordering::SeqCst);
    *state.last_form.lock().unwrap() = Some(form);
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    ([(header::CONTENT_TYPE, "application/json")], state.body)
}

/// URL of a port nothing listens on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/siteverify", addr)
}
