pub mod credit_client;

pub use credit_client::CreditOrderClient;
