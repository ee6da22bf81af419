use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

use super::signature::{scalar_to_string, Sha256TokenSigner, TokenSigner, TOKEN_KEY};
use crate::config::GatewayConfig;
use crate::core::traits::{HttpTransport, Method, ReqwestTransport, TransportRequest};
use crate::core::{AppError, Result};
use crate::modules::payments::models::{PaymentOrder, TokenCharge};

/// Result of a successful initiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInitiation {
    /// Redirect URL for the customer
    pub payment_url: String,
    /// Gateway-assigned payment id
    pub payment_id: String,
}

impl PaymentInitiation {
    pub fn payment_url(&self) -> &str {
        &self.payment_url
    }

    pub fn payment_id(&self) -> &str {
        &self.payment_id
    }
}

/// Client for the acquiring gateway's signed API
///
/// Holds only configuration; every call returns its own result, so one
/// instance can serve concurrent operations.
#[derive(Clone)]
pub struct PaymentGatewayClient {
    config: GatewayConfig,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<dyn TokenSigner>,
}

impl PaymentGatewayClient {
    pub fn new(
        config: GatewayConfig,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<dyn TokenSigner>,
    ) -> Self {
        Self {
            config,
            transport,
            signer,
        }
    }

    /// Builds a client with the reqwest transport and SHA-256 signer
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            config.clone(),
            Arc::new(ReqwestTransport::new()?),
            Arc::new(Sha256TokenSigner),
        ))
    }

    /// Registers the payment with the gateway and returns the redirect URL
    pub async fn initiate_payment(&self, order: &PaymentOrder) -> Result<PaymentInitiation> {
        let payload = order.to_init_payload()?;

        info!(
            order_id = %order.order_id,
            amount = %order.amount,
            currency = %order.currency,
            recurring = order.is_recurring(),
            "Initiating payment"
        );

        let body = self.call("Init", payload).await?;
        let response: InitResponse = serde_json::from_value(body).map_err(|e| {
            AppError::transport(format!("Malformed Init response: {}", e))
        })?;

        if let Some(message) = response.rejection() {
            warn!(order_id = %order.order_id, error = %message, "Payment rejected by gateway");
            return Err(AppError::gateway_rejected(message));
        }

        let payment_url = response
            .payment_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AppError::transport("Init response has no PaymentURL"))?;
        let payment_id = response
            .payment_id
            .as_ref()
            .and_then(scalar_to_string)
            .unwrap_or_default();

        info!(
            order_id = %order.order_id,
            payment_id = %payment_id,
            "Payment initiated"
        );

        Ok(PaymentInitiation {
            payment_url,
            payment_id,
        })
    }

    /// Charges a saved card token; true iff the gateway's `ErrorCode` is zero
    pub async fn pay_by_token(&self, charge: &TokenCharge) -> Result<bool> {
        info!(payment_id = %charge.payment_id, "Charging saved card");

        let body = self.call("Charge", charge.to_charge_payload()).await?;
        let code = body
            .get("ErrorCode")
            .and_then(parse_error_code)
            .ok_or_else(|| AppError::transport("Charge response has no numeric ErrorCode"))?;

        if code != 0 {
            warn!(
                payment_id = %charge.payment_id,
                error_code = code,
                message = ?body.get("Message"),
                "Token charge declined"
            );
        }

        Ok(code == 0)
    }

    /// Signs `payload`, posts it to `method` and returns the decoded JSON body
    async fn call(&self, method: &str, mut payload: Map<String, Value>) -> Result<Value> {
        payload
            .entry("TerminalKey".to_string())
            .or_insert_with(|| Value::from(self.config.terminal_key.clone()));
        let token = self.signer.generate_token(&payload, &self.config.secret_key);
        payload.insert(TOKEN_KEY.to_string(), Value::from(token));

        let request = TransportRequest {
            method: Method::Post,
            url: self.config.endpoint(method),
            body: Some(Value::Object(payload)),
            basic_auth: self.config.basic_auth(),
        };

        let response = self.transport.send(request).await.map_err(|e| {
            error!(method = method, error = %e, "Gateway request failed");
            e
        })?;

        if !response.is_success() {
            error!(method = method, status = response.status, "Gateway returned HTTP error");
            return Err(AppError::transport(format!(
                "{} returned HTTP {} ({})",
                method, response.status, response.body
            )));
        }

        serde_json::from_str(&response.body)
            .map_err(|e| AppError::transport(format!("Malformed {} response: {}", method, e)))
    }
}

#[derive(Debug, Deserialize)]
struct InitResponse {
    #[serde(rename = "Success")]
    success: Option<bool>,
    #[serde(rename = "ErrorCode")]
    error_code: Option<Value>,
    #[serde(rename = "Message")]
    message: Option<String>,
    #[serde(rename = "Details")]
    details: Option<String>,
    #[serde(rename = "PaymentId")]
    payment_id: Option<Value>,
    #[serde(rename = "PaymentURL")]
    payment_url: Option<String>,
}

impl InitResponse {
    /// Error message when the gateway flagged the request as failed
    fn rejection(&self) -> Option<String> {
        let code = self.error_code.as_ref().and_then(parse_error_code);
        let failed = self.success == Some(false) || code.is_some_and(|c| c != 0);
        if !failed {
            return None;
        }

        let text = [self.message.as_deref(), self.details.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(": ");

        Some(match (text.is_empty(), code) {
            (false, _) => text,
            (true, Some(code)) => format!("error code {}", code),
            (true, None) => "request failed".to_string(),
        })
    }
}

/// Accepts `0`, `"0"` and other integer forms
fn parse_error_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
