// Integration tests for payment initiation and token charges
//
// Runs the gateway client against the recording transport:
// 1. Build and sign the Init payload
// 2. Parse the gateway reply
// 3. Surface rejections and transport failures

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::sync::Arc;
use tinkoff_pay::core::traits::Method;
use tinkoff_pay::core::AppError;
use tinkoff_pay::payments::{
    generate_token, NotificationValidator, PaymentGatewayClient, PaymentOrder, Receipt,
    ReceiptItem, Sha256TokenSigner, TokenCharge, VatCode,
};

fn client(transport: Arc<MockTransport>) -> PaymentGatewayClient {
    PaymentGatewayClient::new(
        TestDataFactory::gateway_config(),
        transport,
        Arc::new(Sha256TokenSigner),
    )
}

fn sent_body(transport: &MockTransport) -> serde_json::Map<String, Value> {
    as_map(transport.last_request().body.expect("request has a body"))
}

#[tokio::test]
async fn test_order_1001_end_to_end() {
    let transport = Arc::new(MockTransport::new().reply_json(
        200,
        TestDataFactory::init_success(json!(555), "https://pay.example/new/555"),
    ));
    let client = client(transport.clone());

    let order = PaymentOrder::new("1001", "internal-7", dec!(99.99))
        .with_currency("RUB")
        .with_description("Order 1001");

    let initiation = client.initiate_payment(&order).await.unwrap();

    assert_eq!(initiation.payment_url(), "https://pay.example/new/555");
    assert_eq!(initiation.payment_id(), "555");

    let request = transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, format!("{}/Init", API_URL));
    assert!(request.basic_auth.is_none());

    let body = sent_body(&transport);
    assert_eq!(body["TerminalKey"], TERMINAL_KEY);
    assert_eq!(body["OrderId"], "1001");
    assert_eq!(body["Amount"], 9999);
    assert_eq!(body["Currency"], 643);
    assert_eq!(body["Description"], "Order 1001");
    assert_eq!(body["DATA"], "PaymentId=internal-7");
}

#[tokio::test]
async fn test_request_token_matches_engine() {
    let transport = Arc::new(MockTransport::new().reply_json(
        200,
        TestDataFactory::init_success(json!("900"), "https://pay.example/900"),
    ));
    let order = PaymentOrder::new(TestDataFactory::random_order_id(), "1", dec!(10));
    client(transport.clone()).initiate_payment(&order).await.unwrap();

    let body = sent_body(&transport);
    let token = body["Token"].as_str().unwrap().to_string();
    assert_eq!(generate_token(&body, SECRET_KEY), token);

    // The gateway verifies requests with the same scheme as notifications
    assert!(NotificationValidator::new(SECRET_KEY).validate(&body));
}

#[tokio::test]
async fn test_amount_rounded_to_minor_units() {
    let transport = Arc::new(MockTransport::new().reply_json(
        200,
        TestDataFactory::init_success(json!(1), "https://pay.example/1"),
    ));
    let order = PaymentOrder::new("r-1", "1", dec!(123.456));
    client(transport.clone()).initiate_payment(&order).await.unwrap();

    assert_eq!(sent_body(&transport)["Amount"], 12346);
}

#[tokio::test]
async fn test_recurring_payment_fields() {
    let transport = Arc::new(MockTransport::new().reply_json(
        200,
        TestDataFactory::init_success(json!(2), "https://pay.example/2"),
    ));
    let order = PaymentOrder::new("rec-1", "1", dec!(50))
        .make_recurring()
        .with_user_id("user-42");
    client(transport.clone()).initiate_payment(&order).await.unwrap();

    let body = sent_body(&transport);
    assert_eq!(body["Recurrent"], "Y");
    assert_eq!(body["CustomerKey"], "user-42");
}

#[tokio::test]
async fn test_receipt_sent_as_object_and_not_signed() {
    let transport = Arc::new(MockTransport::new().reply_json(
        200,
        TestDataFactory::init_success(json!(3), "https://pay.example/3"),
    ));
    let receipt = Receipt::new(None, Some("buyer@example.com".into()))
        .with_item(ReceiptItem::new("Book", dec!(12.5), dec!(2), VatCode::Vat10));
    let order = PaymentOrder::new("rc-1", "1", dec!(25)).with_receipt(receipt);
    client(transport.clone()).initiate_payment(&order).await.unwrap();

    let body = sent_body(&transport);
    assert_eq!(body["Receipt"]["Email"], "buyer@example.com");
    assert_eq!(body["Receipt"]["Items"][0]["Amount"], 2500);

    let mut without_receipt = body.clone();
    without_receipt.remove("Receipt");
    assert_eq!(
        generate_token(&without_receipt, SECRET_KEY),
        body["Token"].as_str().unwrap()
    );
}

#[tokio::test]
async fn test_basic_auth_forwarded_when_configured() {
    let transport = Arc::new(MockTransport::new().reply_json(
        200,
        TestDataFactory::init_success(json!(4), "https://pay.example/4"),
    ));
    let config = TestDataFactory::gateway_config().with_basic_auth("merchant", "pa55");
    let client = PaymentGatewayClient::new(config, transport.clone(), Arc::new(Sha256TokenSigner));

    client
        .initiate_payment(&PaymentOrder::new("ba-1", "1", dec!(1)))
        .await
        .unwrap();

    let auth = transport.last_request().basic_auth.unwrap();
    assert_eq!(auth.login, "merchant");
    assert_eq!(auth.password, "pa55");
}

#[tokio::test]
async fn test_gateway_rejection() {
    let transport = Arc::new(MockTransport::new().reply_json(
        200,
        json!({
            "Success": false,
            "ErrorCode": "204",
            "Message": "Неверный токен",
            "Details": "Token mismatch"
        }),
    ));

    let err = client(transport)
        .initiate_payment(&PaymentOrder::new("rej-1", "1", dec!(10)))
        .await
        .unwrap_err();

    match err {
        AppError::GatewayRejected(message) => {
            assert!(message.contains("Неверный токен"));
            assert!(message.contains("Token mismatch"));
        }
        other => panic!("expected GatewayRejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failures() {
    let order = PaymentOrder::new("tr-1", "1", dec!(10));

    let timeout = Arc::new(MockTransport::new().fail("timeout"));
    assert!(matches!(
        client(timeout).initiate_payment(&order).await,
        Err(AppError::Transport(_))
    ));

    let server_error = Arc::new(MockTransport::new().reply_raw(503, "Service Unavailable"));
    assert!(matches!(
        client(server_error).initiate_payment(&order).await,
        Err(AppError::Transport(_))
    ));

    let malformed = Arc::new(MockTransport::new().reply_raw(200, "<html>oops</html>"));
    assert!(matches!(
        client(malformed).initiate_payment(&order).await,
        Err(AppError::Transport(_))
    ));
}

#[tokio::test]
async fn test_invalid_order_never_reaches_transport() {
    let transport = Arc::new(MockTransport::new());
    let client = client(transport.clone());

    let err = client
        .initiate_payment(&PaymentOrder::new("c-1", "1", dec!(10)).with_currency("ZZZ"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UnknownCurrency(_)));

    let err = client
        .initiate_payment(&PaymentOrder::new("c-2", "1", dec!(0)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_pay_by_token() {
    let transport = Arc::new(
        MockTransport::new()
            .reply_json(200, json!({ "Success": true, "ErrorCode": "0", "Status": "CONFIRMED" }))
            .reply_json(200, json!({ "Success": false, "ErrorCode": "103", "Message": "Declined" }))
            .reply_json(200, json!({ "Success": true })),
    );
    let client = client(transport.clone());
    let charge = TokenCharge::new("555", "145919");

    assert!(client.pay_by_token(&charge).await.unwrap());

    let request = transport.last_request();
    assert_eq!(request.url, format!("{}/Charge", API_URL));
    let body = sent_body(&transport);
    assert_eq!(body["RebillId"], "145919");
    assert_eq!(body["PaymentId"], "555");
    assert_eq!(body["TerminalKey"], TERMINAL_KEY);
    assert_eq!(generate_token(&body, SECRET_KEY), body["Token"].as_str().unwrap());

    assert!(!client.pay_by_token(&charge).await.unwrap());

    assert!(matches!(
        client.pay_by_token(&charge).await,
        Err(AppError::Transport(_))
    ));
}
