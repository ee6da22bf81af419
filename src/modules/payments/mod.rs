pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::NotificationController;
pub use models::{
    Notification, PaymentOrder, Receipt, ReceiptItem, TaxSystem, TokenCharge, VatCode,
};
pub use services::{
    acknowledgement, check_acknowledgement, generate_token, AckCode, LoggingNotificationHandler,
    NotificationHandler, NotificationValidator, PaymentGatewayClient, PaymentInitiation,
    Sha256TokenSigner, TokenSigner,
};
