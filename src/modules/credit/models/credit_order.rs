use rust_decimal::Decimal;
use serde::Serialize;

/// Checkout data for a new credit application
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditOrder {
    #[serde(with = "rust_decimal::serde::float")]
    pub sum: Decimal,
    pub items: Vec<CreditItem>,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    #[serde(rename = "failURL", skip_serializing_if = "Option::is_none")]
    pub fail_url: Option<String>,
    #[serde(rename = "successURL", skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(rename = "returnURL", skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(rename = "promoCode", skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    pub values: CreditValues,
}

impl CreditOrder {
    pub fn new(order_number: impl Into<String>, sum: Decimal) -> Self {
        Self {
            sum,
            items: Vec::new(),
            order_number: order_number.into(),
            fail_url: None,
            success_url: None,
            return_url: None,
            promo_code: None,
            values: CreditValues::default(),
        }
    }

    pub fn with_item(mut self, item: CreditItem) -> Self {
        self.items.push(item);
        self
    }

    /// Sets success/fail URLs; the fail URL doubles as the return URL
    pub fn with_return_urls(mut self, success_url: impl Into<String>, fail_url: impl Into<String>) -> Self {
        let fail_url = fail_url.into();
        self.success_url = Some(success_url.into());
        self.return_url = Some(fail_url.clone());
        self.fail_url = Some(fail_url);
        self
    }

    pub fn with_promo_code(mut self, promo_code: impl Into<String>) -> Self {
        self.promo_code = Some(promo_code.into());
        self
    }

    pub fn with_contact(mut self, contact: CreditContact) -> Self {
        self.values.contact = contact;
        self
    }
}

/// Product line of a credit order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditItem {
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "vendorCode", skip_serializing_if = "Option::is_none")]
    pub vendor_code: Option<String>,
}

impl CreditItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            category: None,
            vendor_code: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CreditValues {
    pub contact: CreditContact,
}

/// Applicant contact details prefilled into the application form
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CreditContact {
    pub fio: FullName,
    #[serde(rename = "mobilePhone")]
    pub mobile_phone: String,
    pub email: String,
}

impl CreditContact {
    pub fn new(fio: FullName, mobile_phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            fio,
            mobile_phone: mobile_phone.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FullName {
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "middleName")]
    pub middle_name: String,
}

impl FullName {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_name: middle_name.into(),
        }
    }
}
