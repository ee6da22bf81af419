use async_trait::async_trait;
use tracing::info;

use crate::core::Result;
use crate::modules::payments::models::Notification;

/// Consumer of verified notifications
///
/// Persistence and order-state transitions live behind this trait; an error
/// makes the endpoint answer `ERROR` so the gateway re-delivers.
#[async_trait]
pub trait NotificationHandler: Send + Sync {
    async fn handle(&self, notification: &Notification) -> Result<()>;
}

/// Handler that only records the notification in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotificationHandler;

#[async_trait]
impl NotificationHandler for LoggingNotificationHandler {
    async fn handle(&self, notification: &Notification) -> Result<()> {
        info!(
            order_id = %notification.order_id(),
            payment_id = %notification.payment_id(),
            status = %notification.status(),
            success = notification.is_success(),
            amount = notification.amount(),
            error_code = %notification.error_code(),
            received_at = %notification.date_time(),
            "Payment notification received"
        );
        Ok(())
    }
}
