use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::modules::payments::services::signature::scalar_to_string;

/// Format of the synthetic `DateTime` stamp
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Inbound gateway notification held for one request/response cycle
///
/// Accessors read the raw map; absent or nested fields read as empty strings.
/// `DateTime` is stamped on receipt and overrides any value the gateway sent.
#[derive(Debug, Clone)]
pub struct Notification {
    payload: Map<String, Value>,
    received_at: DateTime<Utc>,
}

impl Notification {
    /// Wraps a payload, stamping the receive time as now
    pub fn received(payload: Map<String, Value>) -> Self {
        Self::received_at(payload, Utc::now())
    }

    pub fn received_at(payload: Map<String, Value>, received_at: DateTime<Utc>) -> Self {
        Self {
            payload,
            received_at,
        }
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Raw parameter by name as a string
    pub fn param(&self, name: &str) -> String {
        if name == "DateTime" {
            return self.date_time();
        }
        self.payload
            .get(name)
            .and_then(scalar_to_string)
            .unwrap_or_default()
    }

    pub fn order_id(&self) -> String {
        self.param("OrderId")
    }

    pub fn status(&self) -> String {
        self.param("Status")
    }

    /// True only for the literal string `"true"`
    pub fn is_success(&self) -> bool {
        matches!(self.payload.get("Success"), Some(Value::String(s)) if s == "true")
    }

    pub fn transaction_id(&self) -> String {
        self.param("PaymentId")
    }

    pub fn payment_id(&self) -> String {
        self.param("PaymentId")
    }

    /// Amount exactly as received (minor units, no rescaling)
    pub fn amount(&self) -> f64 {
        match self.payload.get("Amount") {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Masked card number
    pub fn pan(&self) -> String {
        self.param("Pan")
    }

    pub fn error_code(&self) -> String {
        self.param("ErrorCode")
    }

    /// Saved card token for recurring charges
    pub fn rebill_id(&self) -> String {
        self.param("RebillId")
    }

    pub fn date_time(&self) -> String {
        self.received_at.format(DATE_TIME_FORMAT).to_string()
    }
}
