pub mod credit_application;
pub mod credit_order;

pub use credit_application::{CreditApplication, CreditStatus, CreditType};
pub use credit_order::{CreditContact, CreditItem, CreditOrder, CreditValues, FullName};
