//! Configuration settings structures

use bridge_types::{ChainConfig, ChainDescriptor, TokenConfig};
use serde::{Deserialize, Serialize};

/// Main plugin settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub across: AcrossSettings,
	pub chains: Vec<ChainSettings>,
	pub logging: LoggingSettings,
}

/// Across service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AcrossSettings {
	/// Base URL of the Across API
	pub endpoint: String,
	/// Integrator identifier sent with deposits
	pub integrator_id: String,
	/// Poll interval for fill tracking, in milliseconds
	pub fill_poll_interval_ms: u64,
}

/// One supported chain, mirrored into the domain [`ChainConfig`]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChainSettings {
	pub chain_name: String,
	pub chain_id: u64,
	pub display_name: String,
	pub explorer_url: Option<String>,
	pub rpc_url: String,
	#[serde(default)]
	pub is_testnet: bool,
	pub tokens: Vec<TokenSettings>,
}

/// One supported token on a chain
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenSettings {
	pub symbol: String,
	pub address: String,
	pub decimals: u8,
	#[serde(default)]
	pub is_native: bool,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
}

impl From<ChainSettings> for ChainConfig {
	fn from(settings: ChainSettings) -> Self {
		Self {
			chain_name: settings.chain_name,
			chain_id: settings.chain_id,
			network: ChainDescriptor {
				name: settings.display_name,
				explorer_url: settings.explorer_url,
				rpc_url: settings.rpc_url,
				is_testnet: settings.is_testnet,
			},
			tokens: settings
				.tokens
				.into_iter()
				.map(|t| TokenConfig {
					symbol: t.symbol,
					address: t.address,
					decimals: t.decimals,
					is_native: t.is_native,
				})
				.collect(),
		}
	}
}

impl Default for AcrossSettings {
	fn default() -> Self {
		Self {
			endpoint: "https://app.across.to/api".to_string(),
			integrator_id: "0xdead".to_string(),
			fill_poll_interval_ms: 5_000,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			across: AcrossSettings::default(),
			chains: default_chains(),
			logging: LoggingSettings::default(),
		}
	}
}

/// Compiled-in chain table
///
/// USDC routes on Arbitrum One and Base, WETH routes on the Sepolia
/// testnets. Chain IDs follow the canonical chain-ID table.
fn default_chains() -> Vec<ChainSettings> {
	vec![
		ChainSettings {
			chain_name: "arbitrum".to_string(),
			chain_id: 42161,
			display_name: "Arbitrum One".to_string(),
			explorer_url: Some("https://arbiscan.io".to_string()),
			rpc_url: "https://arb1.arbitrum.io/rpc".to_string(),
			is_testnet: false,
			tokens: vec![TokenSettings {
				symbol: "USDC".to_string(),
				address: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
				decimals: 6,
				is_native: false,
			}],
		},
		ChainSettings {
			chain_name: "base".to_string(),
			chain_id: 8453,
			display_name: "Base".to_string(),
			explorer_url: Some("https://basescan.org".to_string()),
			rpc_url: "https://mainnet.base.org".to_string(),
			is_testnet: false,
			tokens: vec![TokenSettings {
				symbol: "USDC".to_string(),
				address: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913".to_string(),
				decimals: 6,
				is_native: false,
			}],
		},
		ChainSettings {
			chain_name: "sepolia".to_string(),
			chain_id: 11155111,
			display_name: "Sepolia".to_string(),
			explorer_url: Some("https://sepolia.etherscan.io".to_string()),
			rpc_url: "https://rpc.sepolia.org".to_string(),
			is_testnet: true,
			tokens: vec![TokenSettings {
				symbol: "WETH".to_string(),
				address: "0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14".to_string(),
				decimals: 18,
				is_native: true,
			}],
		},
		ChainSettings {
			chain_name: "arbitrum sepolia".to_string(),
			chain_id: 421614,
			display_name: "Arbitrum Sepolia".to_string(),
			explorer_url: Some("https://sepolia.arbiscan.io".to_string()),
			rpc_url: "https://sepolia-rollup.arbitrum.io/rpc".to_string(),
			is_testnet: true,
			tokens: vec![TokenSettings {
				symbol: "WETH".to_string(),
				address: "0x980B62Da83eFf3D4576C647993b0c1D7faf17c73".to_string(),
				decimals: 18,
				is_native: true,
			}],
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_cover_mainnet_and_testnet_routes() {
		let settings = Settings::default();
		assert_eq!(settings.chains.len(), 4);
		assert!(settings.chains.iter().any(|c| c.chain_id == 42161));
		assert!(settings.chains.iter().any(|c| c.chain_id == 8453));
		assert!(settings
			.chains
			.iter()
			.filter(|c| c.is_testnet)
			.all(|c| c.tokens.iter().all(|t| t.decimals == 18)));
	}

	#[test]
	fn chain_settings_convert_to_domain_config() {
		let settings = Settings::default();
		let config: ChainConfig = settings.chains[0].clone().into();
		assert_eq!(config.chain_name, "arbitrum");
		assert_eq!(config.chain_id, 42161);
		assert_eq!(config.token("USDC").unwrap().decimals, 6);
		assert_eq!(
			config.network.explorer_url.as_deref(),
			Some("https://arbiscan.io")
		);
	}
}
