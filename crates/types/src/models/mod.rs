//! Shared domain models

pub mod chain;
pub mod secret_string;
pub mod u256;

pub use chain::{ChainConfig, ChainDescriptor, TokenConfig};
pub use secret_string::SecretString;
pub use u256::U256;
