// Test Data Factory
//
// Generates unique order ids and ready-made gateway payloads.

use serde_json::{json, Map, Value};
use uuid::Uuid;

use tinkoff_pay::config::{CreditConfig, GatewayConfig};
use tinkoff_pay::payments::generate_token;

pub const TERMINAL_KEY: &str = "TinkoffBankTest";
pub const SECRET_KEY: &str = "test-secret";
pub const API_URL: &str = "https://securepay.example/v2";

/// Test data factory for generating unique test data
pub struct TestDataFactory;

impl TestDataFactory {
    /// Unique order id in format "TEST-{uuid}"
    pub fn random_order_id() -> String {
        format!("TEST-{}", Uuid::new_v4())
    }

    pub fn gateway_config() -> GatewayConfig {
        GatewayConfig::new(TERMINAL_KEY, SECRET_KEY).with_api_url(API_URL)
    }

    pub fn credit_config() -> CreditConfig {
        CreditConfig::new("shop-1", "showcase-1").with_host("example.test")
    }

    /// Successful `Init` reply
    pub fn init_success(payment_id: Value, payment_url: &str) -> Value {
        json!({
            "Success": true,
            "ErrorCode": "0",
            "TerminalKey": TERMINAL_KEY,
            "Status": "NEW",
            "PaymentId": payment_id,
            "PaymentURL": payment_url
        })
    }

    /// Notification payload as the gateway posts it (string values)
    pub fn notification(order_id: &str) -> Map<String, Value> {
        as_map(json!({
            "TerminalKey": TERMINAL_KEY,
            "OrderId": order_id,
            "Success": "true",
            "Status": "CONFIRMED",
            "PaymentId": "555",
            "ErrorCode": "0",
            "Amount": "9999",
            "RebillId": "145919",
            "CardId": "322264",
            "Pan": "430000******0777",
            "ExpDate": "1122"
        }))
    }

    /// Adds a valid `Token` computed with `secret`
    pub fn sign(mut payload: Map<String, Value>, secret: &str) -> Map<String, Value> {
        let token = generate_token(&payload, secret);
        payload.insert("Token".to_string(), Value::from(token));
        payload
    }

    /// Full credit record as returned by info/commit/cancel
    pub fn credit_record(id: &str, status: &str, committed: bool) -> Value {
        json!({
            "id": id,
            "status": status,
            "created_at": "2024-05-20T10:15:00Z",
            "committed": committed,
            "first_payment": 0,
            "order_amount": 30000,
            "credit_amount": 30000,
            "product": "credit",
            "term": 12,
            "monthly_payment": 2750.5,
            "first_name": "Иван",
            "last_name": "Иванов",
            "middle_name": "Иванович",
            "phone": "+79990000000",
            "loan_number": "LN-1",
            "email": "ivan@example.com"
        })
    }
}

pub fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {}", other),
    }
}
