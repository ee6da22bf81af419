pub mod gateway_client;
pub mod notification;
pub mod notification_handler;
pub mod signature;

pub use gateway_client::{PaymentGatewayClient, PaymentInitiation};
pub use notification::{
    acknowledgement, check_acknowledgement, AckCode, NotificationValidator, ACK_ERROR, ACK_OK,
};
pub use notification_handler::{LoggingNotificationHandler, NotificationHandler};
pub use signature::{generate_token, Sha256TokenSigner, TokenSigner};
