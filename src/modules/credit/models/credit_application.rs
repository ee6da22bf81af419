use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a credit application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditStatus {
    New,
    #[serde(alias = "inprogress")]
    InProgress,
    Approved,
    Signed,
    Issued,
    Canceled,
    Rejected,
}

impl CreditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditStatus::New => "new",
            CreditStatus::InProgress => "in_progress",
            CreditStatus::Approved => "approved",
            CreditStatus::Signed => "signed",
            CreditStatus::Issued => "issued",
            CreditStatus::Canceled => "canceled",
            CreditStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product the applicant was offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditType {
    Credit,
    InstallmentCredit,
}

/// Credit application as returned by the credit API
///
/// The create call fills only `id` and `link`; info/commit/cancel return the
/// full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditApplication {
    pub id: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub status: Option<CreditStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub committed: bool,
    #[serde(default)]
    pub first_payment: Option<Decimal>,
    #[serde(default)]
    pub order_amount: Option<Decimal>,
    #[serde(default)]
    pub credit_amount: Option<Decimal>,
    #[serde(default)]
    pub monthly_payment: Option<Decimal>,
    /// Number of months
    #[serde(default)]
    pub term: Option<u32>,
    #[serde(default, rename = "product")]
    pub credit_type: Option<CreditType>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub loan_number: Option<String>,
}

impl CreditApplication {
    pub fn new(id: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link: Some(link.into()),
            status: None,
            created_at: None,
            committed: false,
            first_payment: None,
            order_amount: None,
            credit_amount: None,
            monthly_payment: None,
            term: None,
            credit_type: None,
            first_name: None,
            middle_name: None,
            last_name: None,
            phone: None,
            email: None,
            loan_number: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Redirect link for the applicant, empty when the API sent none
    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or_default()
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn month_qty(&self) -> u32 {
        self.term.unwrap_or_default()
    }
}
