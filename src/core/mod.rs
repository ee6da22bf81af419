pub mod currency;
pub mod error;
pub mod traits;

pub use currency::{to_minor_units, Currency};
pub use error::{AppError, Result};
