use rust_decimal::Decimal;
use serde_json::{Map, Value};

use super::receipt::Receipt;
use crate::core::{to_minor_units, AppError, Currency, Result};

pub const DEFAULT_CURRENCY: &str = "RUB";

/// Caller-supplied order data for a payment initiation
#[derive(Debug, Clone)]
pub struct PaymentOrder {
    pub order_id: String,
    pub payment_id: String,
    /// Amount in major units
    pub amount: Decimal,
    /// ISO-4217 alpha-3 code
    pub currency: String,
    pub description: String,
    /// Extra parameters for `DATA`, in insertion order
    pub extra_params: Vec<(String, String)>,
    pub receipt: Option<Receipt>,
    recurring: bool,
    user_id: Option<String>,
}

impl PaymentOrder {
    pub fn new(order_id: impl Into<String>, payment_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            order_id: order_id.into(),
            payment_id: payment_id.into(),
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
            description: String::new(),
            extra_params: Vec::new(),
            receipt: None,
            recurring: false,
            user_id: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.push((key.into(), value.into()));
        self
    }

    pub fn with_receipt(mut self, receipt: Receipt) -> Self {
        self.receipt = Some(receipt);
        self
    }

    /// Ask the gateway to remember the card for later charges
    pub fn make_recurring(mut self) -> Self {
        self.recurring = true;
        self
    }

    /// Customer the saved card is bound to
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.recurring
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// `key=value|key=value` with `PaymentId` appended (or overwritten in place).
    ///
    /// Neither `|` nor `=` is escaped: the gateway parses this exact shape, so a
    /// key or value containing either will be split incorrectly on its side.
    pub fn data_string(&self) -> String {
        let mut params = self.extra_params.clone();
        match params.iter_mut().find(|(key, _)| key == "PaymentId") {
            Some(entry) => entry.1 = self.payment_id.clone(),
            None => params.push(("PaymentId".to_string(), self.payment_id.clone())),
        }

        params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Builds the unsigned `Init` payload
    pub fn to_init_payload(&self) -> Result<Map<String, Value>> {
        if self.amount <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Amount must be positive, got {}",
                self.amount
            )));
        }
        let currency = Currency::from_alpha3(&self.currency)?;
        let amount = to_minor_units(self.amount)?;

        let mut payload = Map::new();
        payload.insert("OrderId".to_string(), Value::from(self.order_id.clone()));
        payload.insert("Amount".to_string(), Value::from(amount));
        payload.insert("Currency".to_string(), Value::from(currency.numeric()));
        payload.insert("Description".to_string(), Value::from(self.description.clone()));
        payload.insert("DATA".to_string(), Value::from(self.data_string()));

        if let Some(receipt) = &self.receipt {
            payload.insert("Receipt".to_string(), receipt.to_wire());
        }

        if self.recurring {
            payload.insert("Recurrent".to_string(), Value::from("Y"));
            payload.insert(
                "CustomerKey".to_string(),
                Value::from(self.user_id.clone().unwrap_or_default()),
            );
        }

        Ok(payload)
    }
}

/// Charge of a saved card token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCharge {
    /// Gateway payment id obtained from a prior initiation
    pub payment_id: String,
    /// Saved card token (`RebillId`)
    pub rebill_id: String,
}

impl TokenCharge {
    pub fn new(payment_id: impl Into<String>, rebill_id: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            rebill_id: rebill_id.into(),
        }
    }

    pub fn to_charge_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("PaymentId".to_string(), Value::from(self.payment_id.clone()));
        payload.insert("RebillId".to_string(), Value::from(self.rebill_id.clone()));
        payload
    }
}
