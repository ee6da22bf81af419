use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::CreditConfig;
use crate::core::traits::{HttpTransport, Method, ReqwestTransport, TransportRequest};
use crate::core::{AppError, Result};
use crate::modules::credit::models::{CreditApplication, CreditOrder, CreditStatus};

/// Client for the credit origination API
///
/// Authenticates with optional HTTP Basic credentials only. Every call is a
/// fresh round trip; nothing is cached.
#[derive(Clone)]
pub struct CreditOrderClient {
    config: CreditConfig,
    transport: Arc<dyn HttpTransport>,
}

impl CreditOrderClient {
    pub fn new(config: CreditConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Builds a client with the reqwest transport
    pub fn from_config(config: &CreditConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.clone(), Arc::new(ReqwestTransport::new()?)))
    }

    /// Creates an application; the result carries only id and link
    pub async fn create_credit(&self, order: &CreditOrder, demo: bool) -> Result<CreditApplication> {
        let mut body = serde_json::to_value(order)?;
        if let Value::Object(map) = &mut body {
            map.insert("shopId".to_string(), Value::from(self.config.shop_id.clone()));
            map.insert(
                "showcaseId".to_string(),
                Value::from(self.config.showcase_id.clone()),
            );
        }

        let action = if demo { "create-demo" } else { "create" };
        info!(order_number = %order.order_number, sum = %order.sum, demo, "Creating credit application");

        let created: CreditApplication = self.request(Method::Post, &[action], Some(body)).await?;

        info!(order_number = %order.order_number, credit_id = %created.id, "Credit application created");
        Ok(created)
    }

    pub async fn get_credit_info(&self, id: &str) -> Result<CreditApplication> {
        self.request(Method::Get, &[id, "info"], None).await
    }

    pub async fn commit_credit(&self, id: &str) -> Result<CreditApplication> {
        info!(credit_id = %id, "Committing credit application");
        self.request(Method::Post, &[id, "commit"], None).await
    }

    pub async fn cancel_credit(&self, id: &str) -> Result<CreditApplication> {
        info!(credit_id = %id, "Canceling credit application");
        self.request(Method::Post, &[id, "cancel"], None).await
    }

    /// Commits the application and reports whether it is now committed
    pub async fn approve_transaction(&self, id: &str) -> Result<bool> {
        Ok(self.commit_credit(id).await?.is_committed())
    }

    /// Current status of the application
    pub async fn get_transaction_status(&self, id: &str) -> Result<CreditStatus> {
        let application = self.get_credit_info(id).await?;
        application
            .status
            .ok_or_else(|| AppError::transport(format!("Credit {} info has no status", id)))
    }

    /// Creates the application and returns where to send the applicant:
    /// the credit link, or the order's fail URL when the API returns none.
    ///
    /// Uses the demo endpoint when the client is configured for demo mode.
    pub async fn payment_link(&self, order: &CreditOrder) -> Result<String> {
        let created = self.create_credit(order, self.config.demo).await?;
        if !created.link().is_empty() {
            return Ok(created.link().to_string());
        }
        Ok(order.fail_url.clone().unwrap_or_default())
    }

    /// Orders URL with `segments` appended, each percent-encoded as one path segment
    fn order_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.orders_url()).map_err(|e| {
            AppError::Configuration(format!("Invalid credit API URL: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration("Credit API URL cannot take a path".to_string()))?
            .extend(segments);
        Ok(url)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<Value>,
    ) -> Result<T> {
        let url = self.order_url(segments)?;
        let request = TransportRequest {
            method,
            url: url.to_string(),
            body,
            basic_auth: self.config.basic_auth(),
        };

        let response = self.transport.send(request).await.map_err(|e| {
            error!(url = %url, error = %e, "Credit API request failed");
            e
        })?;

        if response.status >= 400 {
            error!(url = %url, status = response.status, "Credit API returned error");
            return Err(AppError::credit_api(response.body));
        }
        if !response.is_success() {
            return Err(AppError::transport(format!(
                "Credit API returned HTTP {}",
                response.status
            )));
        }

        serde_json::from_str(&response.body).map_err(|e| {
            AppError::transport(format!("Malformed credit API response: {}", e))
        })
    }
}
