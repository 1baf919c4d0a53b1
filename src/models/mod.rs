pub mod add_on;
pub mod booking;
pub mod catalog;
pub mod pricing;
