//! Bridge Configuration
//!
//! Configuration management for the bridge deposit plugin: settings
//! structures, the file/environment loader and the chain registry.

pub mod loader;
pub mod registry;
pub mod settings;

pub use loader::{load_config, ConfigLoadError};
pub use registry::ChainRegistry;
pub use settings::{AcrossSettings, ChainSettings, LoggingSettings, Settings, TokenSettings};
