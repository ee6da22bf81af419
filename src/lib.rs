//! Tinkoff payment gateway integration library
//!
//! Signs and submits payment initiations, verifies inbound notifications and
//! drives the credit origination API.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::credit;
pub use modules::payments;
