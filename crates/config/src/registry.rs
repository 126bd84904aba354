//! Chain registry
//!
//! Fixed ordered list of supported chains, built once from settings and
//! read-only afterwards. An unknown name yields `None`; callers must treat
//! the whole deposit as unprocessable in that case.

use crate::Settings;
use bridge_types::ChainConfig;
use std::collections::HashMap;
use tracing::debug;

/// Read-only lookup table of supported chains
#[derive(Debug, Clone)]
pub struct ChainRegistry {
	chains: Vec<ChainConfig>,
}

impl ChainRegistry {
	/// Build the registry from loaded settings
	pub fn from_settings(settings: &Settings) -> Self {
		let chains: Vec<ChainConfig> = settings
			.chains
			.iter()
			.cloned()
			.map(ChainConfig::from)
			.collect();

		debug!(chains = chains.len(), "chain registry initialised");
		Self { chains }
	}

	/// Look up a chain by name (case-insensitive, trimmed)
	pub fn lookup(&self, name: &str) -> Option<&ChainConfig> {
		let wanted = name.trim();
		self.chains
			.iter()
			.find(|c| c.chain_name.eq_ignore_ascii_case(wanted))
	}

	/// RPC endpoints per chain ID, for constructing execution clients
	pub fn rpc_urls(&self) -> HashMap<u64, String> {
		self.chains
			.iter()
			.map(|c| (c.chain_id, c.network.rpc_url.clone()))
			.collect()
	}

	pub fn len(&self) -> usize {
		self.chains.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chains.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn registry() -> ChainRegistry {
		ChainRegistry::from_settings(&Settings::default())
	}

	#[test]
	fn lookup_hits_known_chains() {
		let registry = registry();
		assert_eq!(registry.lookup("arbitrum").unwrap().chain_id, 42161);
		assert_eq!(registry.lookup("base").unwrap().chain_id, 8453);
	}

	#[test]
	fn lookup_is_case_insensitive_and_trims() {
		let registry = registry();
		assert!(registry.lookup("Arbitrum").is_some());
		assert!(registry.lookup("  BASE ").is_some());
		assert!(registry.lookup("Arbitrum Sepolia").is_some());
	}

	#[test]
	fn lookup_misses_unknown_chain() {
		let registry = registry();
		assert!(registry.lookup("dogechain").is_none());
		assert!(registry.lookup("").is_none());
	}

	#[test]
	fn rpc_urls_keyed_by_chain_id() {
		let urls = registry().rpc_urls();
		assert_eq!(
			urls.get(&8453).map(String::as_str),
			Some("https://mainnet.base.org")
		);
		assert_eq!(urls.len(), 4);
	}
}
