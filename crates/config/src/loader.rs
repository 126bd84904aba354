//! Configuration loading utilities

use crate::Settings;
use config::{Config, Environment, File};
use thiserror::Error;

/// Errors raised while loading settings
#[derive(Error, Debug)]
pub enum ConfigLoadError {
	#[error("configuration error: {0}")]
	Config(#[from] config::ConfigError),
}

/// Load plugin settings
///
/// Reads `config/config.*` when present, then applies `BRIDGE__`-prefixed
/// environment overrides. Every field has a compiled-in default, so an
/// empty environment yields [`Settings::default`].
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("BRIDGE").separator("__"))
		.build()?;

	Ok(s.try_deserialize()?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn load_without_file_falls_back_to_defaults() {
		let settings = load_config().unwrap();
		assert_eq!(settings.across.endpoint, "https://app.across.to/api");
		assert!(!settings.chains.is_empty());
	}
}
