pub mod credit;
pub mod payments;
