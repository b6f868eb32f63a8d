pub mod config;
pub mod difficulty;
pub mod error;
pub mod gabor;
pub mod session;
pub mod types;
