// Recording transport returning scripted responses.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

use tinkoff_pay::core::traits::{HttpTransport, TransportRequest, TransportResponse};
use tinkoff_pay::core::{AppError, Result};

/// Scripted reply: an HTTP response or a connection-level failure
pub enum Scripted {
    Response(TransportResponse),
    Failure(String),
}

/// Transport double that records every request it receives
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON reply with the given status
    pub fn reply_json(self, status: u16, body: Value) -> Self {
        self.reply_raw(status, &body.to_string())
    }

    /// Queue a raw body reply with the given status
    pub fn reply_raw(self, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Scripted::Response(TransportResponse {
                status,
                body: body.to_string(),
            }));
        self
    }

    /// Queue a transport failure (timeout, refused connection, ...)
    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Scripted::Failure(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(Scripted::Response(response)) => Ok(response),
            Some(Scripted::Failure(message)) => Err(AppError::transport(message)),
            None => Err(AppError::transport("no scripted reply")),
        }
    }
}
