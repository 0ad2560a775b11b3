//! Test doubles shared by the TUI tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use ratatui::buffer::Buffer;
use serde_json::Value;
use tokio::sync::Notify;

use crate::api::{ApiClient, ApiError};
use crate::tui::components::ListView;
use crate::tui::traits::ItemView;

enum Scripted {
    Body(Value),
    Status(u16),
    Unreachable,
}

/// In-process [`ApiClient`] answering from a path -> response table.
///
/// A gated client holds every request until [`ScriptedClient::release`].
pub struct ScriptedClient {
    responses: Mutex<HashMap<String, Scripted>>,
    gate: Option<Notify>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(HashMap::new()),
            gate: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn gated() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(HashMap::new()),
            gate: Some(Notify::new()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn respond(&self, path: &str, body: Value) {
        self.responses.lock().unwrap().insert(path.to_string(), Scripted::Body(body));
    }

    pub fn fail(&self, path: &str, status_code: u16) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Scripted::Status(status_code));
    }

    /// Fail before any response arrives, as a refused connection would
    pub fn unreachable(&self, path: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Scripted::Unreachable);
    }

    /// Let one held request through
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApiClient for ScriptedClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let responses = self.responses.lock().unwrap();
        match responses.get(path) {
            Some(Scripted::Body(body)) => Ok(body.clone()),
            Some(Scripted::Status(status_code)) => Err(ApiError::Status {
                status_code: *status_code,
                path: path.to_string(),
            }),
            Some(Scripted::Unreachable) => Err(ApiError::InvalidUrl {
                url: format!("http://unreachable.invalid{}", path),
                message: "connection refused".to_string(),
            }),
            None => Err(ApiError::Status {
                status_code: 404,
                path: path.to_string(),
            }),
        }
    }
}

/// Poll until the view's fetch has been applied
pub async fn settle<R: ItemView>(view: &mut ListView<R>) {
    for _ in 0..400 {
        view.poll().await;
        if !view.has_pending_fetch() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("fetch of {} never finished", R::LABEL);
}

/// Flatten a rendered buffer into newline-separated rows
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width.max(1));
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
