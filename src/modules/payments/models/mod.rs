pub mod notification;
pub mod payment_order;
pub mod receipt;

pub use notification::Notification;
pub use payment_order::{PaymentOrder, TokenCharge};
pub use receipt::{Receipt, ReceiptItem, TaxSystem, VatCode};
