pub mod models;
pub mod provider;
