use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

use super::signature::{Sha256TokenSigner, TokenSigner, TOKEN_KEY};
use crate::modules::payments::models::Notification;

/// Acknowledgement body for a processed notification
pub const ACK_OK: &str = "OK";
/// Acknowledgement body that makes the gateway re-deliver
pub const ACK_ERROR: &str = "ERROR";

/// Outcome classification reported back to the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckCode {
    Success,
    Error,
}

impl AckCode {
    /// 0 is success, every other code is an error
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => AckCode::Success,
            _ => AckCode::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AckCode::Success => ACK_OK,
            AckCode::Error => ACK_ERROR,
        }
    }
}

/// Verifies inbound notifications against the shared secret
#[derive(Clone)]
pub struct NotificationValidator {
    secret_key: String,
    signer: Arc<dyn TokenSigner>,
}

impl NotificationValidator {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_signer(secret_key, Arc::new(Sha256TokenSigner))
    }

    pub fn with_signer(secret_key: impl Into<String>, signer: Arc<dyn TokenSigner>) -> Self {
        Self {
            secret_key: secret_key.into(),
            signer,
        }
    }

    /// Returns true only if the payload carries a non-empty `Token` equal to
    /// the token recomputed over the rest of the payload.
    pub fn validate(&self, payload: &Map<String, Value>) -> bool {
        let token = match payload.get(TOKEN_KEY) {
            Some(Value::String(token)) if !token.is_empty() => token,
            Some(_) => {
                warn!("Notification token is empty or not a string");
                return false;
            }
            None => {
                warn!("Notification has no token");
                return false;
            }
        };

        let mut unsigned = payload.clone();
        unsigned.remove(TOKEN_KEY);

        let valid = self.signer.verify_token(&unsigned, &self.secret_key, token);
        if !valid {
            warn!(
                order_id = ?payload.get("OrderId"),
                "Notification signature mismatch"
            );
        } else {
            debug!(order_id = ?payload.get("OrderId"), "Notification signature verified");
        }
        valid
    }

    /// Validates and wraps the payload in one step
    pub fn inspect(&self, payload: Map<String, Value>) -> (bool, Notification) {
        let valid = self.validate(&payload);
        (valid, Notification::received(payload))
    }
}

/// Body the gateway expects in reply to a notification
pub fn acknowledgement(code: AckCode) -> &'static str {
    code.as_str()
}

/// Body the gateway expects in reply to a check request
pub fn check_acknowledgement(code: AckCode) -> &'static str {
    code.as_str()
}
