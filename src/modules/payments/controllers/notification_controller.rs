use actix_web::{post, web, Either, HttpResponse};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::modules::payments::services::{
    acknowledgement, AckCode, NotificationHandler, NotificationValidator,
};

/// Webhook controller receiving gateway notifications
///
/// The reply body is always the plain-text acknowledgement; anything other
/// than `OK` makes the gateway retry the delivery.
pub struct NotificationController {
    validator: NotificationValidator,
    handler: Arc<dyn NotificationHandler>,
}

impl NotificationController {
    pub fn new(validator: NotificationValidator, handler: Arc<dyn NotificationHandler>) -> Self {
        Self { validator, handler }
    }

    /// Configure notification routes under `/notifications`
    pub fn configure(
        cfg: &mut web::ServiceConfig,
        validator: NotificationValidator,
        handler: Arc<dyn NotificationHandler>,
    ) {
        let controller = web::Data::new(Self::new(validator, handler));

        cfg.service(
            web::scope("/notifications")
                .app_data(controller)
                .service(receive_notification),
        );
    }
}

type NotificationBody = Either<web::Json<Map<String, Value>>, web::Form<HashMap<String, String>>>;

fn plain_text(code: AckCode) -> HttpResponse {
    plain_text(code)
}

/// POST /notifications/tinkoff
///
/// Accepts a JSON object or a form-encoded body. A body that is neither
/// is answered with `ERROR` like any other rejected notification.
#[post("/tinkoff")]
async fn receive_notification(
    body: Result<NotificationBody, actix_web::Error>,
    controller: web::Data<NotificationController>,
) -> HttpResponse {
    let payload = match body {
        Ok(Either::Left(json)) => json.into_inner(),
        Ok(Either::Right(form)) => form
            .into_inner()
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
        Err(e) => {
            warn!(error = %e, "Rejected unreadable notification body");
            return plain_text(AckCode::Error);
        }
    };

    let (valid, notification) = controller.validator.inspect(payload);

    let code = if !valid {
        warn!(order_id = %notification.order_id(), "Rejected notification with invalid token");
        AckCode::Error
    } else {
        match controller.handler.handle(&notification).await {
            Ok(()) => {
                info!(
                    order_id = %notification.order_id(),
                    status = %notification.status(),
                    "Notification processed"
                );
                AckCode::Success
            }
            Err(e) => {
                error!(
                    order_id = %notification.order_id(),
                    error = %e,
                    "Notification handler failed"
                );
                AckCode::Error
            }
        }
    };

    plain_text(code)
}
