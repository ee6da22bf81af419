// Fiscal receipt attached to a payment initiation.
//
// Values are passed through to the gateway as-is; tax-system and VAT codes
// carry no local semantics beyond their wire names.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Maximum characters of an item name accepted by the gateway
pub const MAX_ITEM_NAME_CHARS: usize = 128;

/// Tax system of the receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxSystem {
    #[serde(rename = "osn")]
    Common,
    #[serde(rename = "usn_income")]
    SimpleIncome,
    #[serde(rename = "usn_income_outcome")]
    SimpleIncomeOutcome,
    #[serde(rename = "envd")]
    Unified,
    #[serde(rename = "esn")]
    Agricultural,
    #[serde(rename = "patent")]
    Patent,
}

impl TaxSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxSystem::Common => "osn",
            TaxSystem::SimpleIncome => "usn_income",
            TaxSystem::SimpleIncomeOutcome => "usn_income_outcome",
            TaxSystem::Unified => "envd",
            TaxSystem::Agricultural => "esn",
            TaxSystem::Patent => "patent",
        }
    }
}

/// Per-item VAT code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatCode {
    None,
    Vat0,
    Vat10,
    Vat18,
    Vat110,
    Vat118,
}

impl VatCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VatCode::None => "none",
            VatCode::Vat0 => "vat0",
            VatCode::Vat10 => "vat10",
            VatCode::Vat18 => "vat18",
            VatCode::Vat110 => "vat110",
            VatCode::Vat118 => "vat118",
        }
    }
}

/// Single receipt line
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptItem {
    pub name: String,
    /// Unit price in major units
    pub price: Decimal,
    pub quantity: Decimal,
    pub tax: VatCode,
}

impl ReceiptItem {
    pub fn new(name: impl Into<String>, price: Decimal, quantity: Decimal, tax: VatCode) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
            tax,
        }
    }

    /// Unit price in minor units
    pub fn price_minor(&self) -> Decimal {
        self.price * Decimal::ONE_HUNDRED
    }

    /// price × 100 × quantity
    pub fn amount_minor(&self) -> Decimal {
        self.price_minor() * self.quantity
    }

    pub fn to_wire(&self) -> Value {
        json!({
            "Name": self.name.chars().take(MAX_ITEM_NAME_CHARS).collect::<String>(),
            "Price": decimal_to_json(self.price_minor()),
            "Quantity": decimal_to_json(self.quantity),
            "Amount": decimal_to_json(self.amount_minor()),
            "Tax": self.tax.as_str(),
        })
    }
}

/// Fiscal receipt
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Receipt {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub items: Vec<ReceiptItem>,
    pub taxation: Option<TaxSystem>,
}

impl Receipt {
    pub fn new(phone: Option<String>, email: Option<String>) -> Self {
        Self {
            phone,
            email,
            items: Vec::new(),
            taxation: None,
        }
    }

    pub fn with_item(mut self, item: ReceiptItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_taxation(mut self, taxation: TaxSystem) -> Self {
        self.taxation = Some(taxation);
        self
    }

    /// Wire map placed under the `Receipt` key
    pub fn to_wire(&self) -> Value {
        let mut receipt = json!({
            "Phone": self.phone,
            "Email": self.email,
            "Items": self.items.iter().map(ReceiptItem::to_wire).collect::<Vec<_>>(),
        });
        if let (Some(taxation), Value::Object(map)) = (self.taxation, &mut receipt) {
            map.insert("Taxation".to_string(), Value::from(taxation.as_str()));
        }
        receipt
    }
}

/// Integral decimals become JSON integers, others JSON floats
fn decimal_to_json(value: Decimal) -> Value {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        if let Some(int) = normalized.to_i64() {
            return Value::from(int);
        }
    }
    normalized.to_f64().map(Value::from).unwrap_or(Value::Null)
}
