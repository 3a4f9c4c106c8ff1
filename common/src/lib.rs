pub mod config;
pub mod crypto;
pub mod token;

pub use primitive_types::U256;
