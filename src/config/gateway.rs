use super::{optional_var, required_var};
use crate::core::traits::BasicAuth;
use crate::core::{AppError, Result};
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://securepay.tinkoff.ru/v2";
pub const DEFAULT_CREDIT_HOST: &str = "tinkoff.ru";

/// Acquiring (card payment) gateway settings
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Merchant terminal key issued by the gateway
    pub terminal_key: String,
    /// Shared secret used as `Password` when signing
    pub secret_key: String,
    pub api_url: String,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl GatewayConfig {
    pub fn new(terminal_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            terminal_key: terminal_key.into(),
            secret_key: secret_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            login: None,
            password: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_basic_auth(mut self, login: impl Into<String>, password: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self.password = Some(password.into());
        self
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            terminal_key: required_var("TINKOFF_TERMINAL_KEY")?,
            secret_key: required_var("TINKOFF_SECRET_KEY")?,
            api_url: optional_var("TINKOFF_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            login: optional_var("TINKOFF_LOGIN"),
            password: optional_var("TINKOFF_PASSWORD"),
        })
    }

    pub fn basic_auth(&self) -> Option<BasicAuth> {
        BasicAuth::from_parts(self.login.clone(), self.password.clone())
    }

    /// Joins a method name onto the API base URL
    pub fn endpoint(&self, method: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), method)
    }

    pub fn validate(&self) -> Result<()> {
        if self.terminal_key.trim().is_empty() {
            return Err(AppError::Configuration("Terminal key is empty".to_string()));
        }
        if self.secret_key.is_empty() {
            return Err(AppError::Configuration("Secret key is empty".to_string()));
        }
        if !self.api_url.starts_with("https://") && !self.api_url.starts_with("http://") {
            return Err(AppError::Configuration(format!(
                "Invalid API URL: {}",
                self.api_url
            )));
        }
        Ok(())
    }
}

/// Credit origination API settings
#[derive(Debug, Clone, Deserialize)]
pub struct CreditConfig {
    /// Sent as `shopId`
    pub shop_id: String,
    /// Sent as `showcaseId`
    pub showcase_id: String,
    /// Host the `forma.` subdomain is built on
    pub host: String,
    #[serde(default)]
    pub demo: bool,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CreditConfig {
    pub fn new(shop_id: impl Into<String>, showcase_id: impl Into<String>) -> Self {
        Self {
            shop_id: shop_id.into(),
            showcase_id: showcase_id.into(),
            host: DEFAULT_CREDIT_HOST.to_string(),
            demo: false,
            login: None,
            password: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_demo(mut self, demo: bool) -> Self {
        self.demo = demo;
        self
    }

    pub fn with_basic_auth(mut self, login: impl Into<String>, password: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self.password = Some(password.into());
        self
    }

    /// Returns `None` when no credit shop is configured
    pub fn from_env() -> Result<Option<Self>> {
        let Some(shop_id) = optional_var("TINKOFF_CREDIT_SHOP_ID") else {
            return Ok(None);
        };

        let demo = match optional_var("TINKOFF_CREDIT_DEMO") {
            None => false,
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(AppError::Configuration(
                        "Invalid TINKOFF_CREDIT_DEMO".to_string(),
                    ))
                }
            },
        };

        Ok(Some(Self {
            shop_id,
            showcase_id: required_var("TINKOFF_CREDIT_SHOWCASE_ID")?,
            host: optional_var("TINKOFF_CREDIT_HOST")
                .unwrap_or_else(|| DEFAULT_CREDIT_HOST.to_string()),
            demo,
            login: optional_var("TINKOFF_CREDIT_LOGIN"),
            password: optional_var("TINKOFF_CREDIT_PASSWORD"),
        }))
    }

    pub fn basic_auth(&self) -> Option<BasicAuth> {
        BasicAuth::from_parts(self.login.clone(), self.password.clone())
    }

    /// `https://forma.<host>/api/partners/v2/orders`
    pub fn orders_url(&self) -> String {
        format!(
            "https://forma.{}/api/partners/v2/orders",
            self.host.trim_end_matches('/')
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.shop_id.trim().is_empty() || self.showcase_id.trim().is_empty() {
            return Err(AppError::Configuration(
                "Credit shop and showcase ids must be set".to_string(),
            ));
        }
        if self.host.trim().is_empty() {
            return Err(AppError::Configuration("Credit host is empty".to_string()));
        }
        Ok(())
    }
}
