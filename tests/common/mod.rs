#![allow(dead_code)]

use axum::http::{StatusCode, header};
use axum::{Json, Router, routing::post};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url_shortener_client::domain::gateways::Clipboard;
use url_shortener_client::error::ClipboardError;

pub const YOUTUBE_URL: &str = "https://www.youtube.com/watch?v=Y4z3psSbMEo";

/// Canned answer of the stub shortening service.
#[derive(Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubReply {
    pub fn ok(body: Value) -> Self {
        Self::status(StatusCode::OK, &body.to_string())
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// JSON bodies received by the stub service.
#[derive(Clone, Default)]
pub struct RecordedRequests(Arc<Mutex<Vec<Value>>>);

impl RecordedRequests {
    fn push(&self, body: Value) {
        self.0.lock().unwrap().push(body);
    }

    pub fn all(&self) -> Vec<Value> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// Starts a stub `POST /shorten` service on an ephemeral port.
///
/// Returns the service origin and a handle to the recorded request bodies.
pub async fn spawn_stub_service(reply: StubReply) -> (String, RecordedRequests) {
    let recorded = RecordedRequests::default();
    let recorder = recorded.clone();

    let app = Router::new().route(
        "/shorten",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            let reply = reply.clone();
            async move {
                recorder.push(body);
                if let Some(delay) = reply.delay {
                    tokio::time::sleep(delay).await;
                }
                (
                    reply.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    reply.body,
                )
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), recorded)
}

/// Origin of a port nothing listens on.
pub async fn unreachable_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Clipboard that keeps the last written text in memory.
#[derive(Default)]
pub struct RecordingClipboard {
    contents: Mutex<Option<String>>,
}

impl RecordingClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
