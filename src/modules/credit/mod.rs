pub mod models;
pub mod services;

pub use models::{
    CreditApplication, CreditContact, CreditItem, CreditOrder, CreditStatus, CreditType, FullName,
};
pub use services::CreditOrderClient;
