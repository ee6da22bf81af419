use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use tinkoff_pay::config::Config;
use tinkoff_pay::payments::{
    LoggingNotificationHandler, NotificationController, NotificationHandler,
    NotificationValidator,
};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinkoff_pay=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!("Starting Tinkoff notification endpoint");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        terminal_key = %config.tinkoff.terminal_key,
        credit_enabled = config.credit.is_some(),
        "Gateway configured"
    );

    let validator = NotificationValidator::new(config.tinkoff.secret_key.clone());
    let handler: Arc<dyn NotificationHandler> = Arc::new(LoggingNotificationHandler);

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(|cfg| {
                NotificationController::configure(cfg, validator.clone(), handler.clone())
            })
            .route("/health", web::get().to(health_check))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tinkoff-pay"
    }))
}
