//! Supported chain and token models
//!
//! One `ChainConfig` per supported chain, built from configuration at startup
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A supported chain with its bridgeable tokens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainConfig {
	/// Human-readable lookup name (e.g., "arbitrum", "base")
	pub chain_name: String,
	/// Numeric chain ID (e.g., 42161 for Arbitrum One)
	pub chain_id: u64,
	/// Native chain descriptor
	pub network: ChainDescriptor,
	/// Tokens bridgeable from this chain
	pub tokens: Vec<TokenConfig>,
}

/// Native chain descriptor: display name, explorer and RPC endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainDescriptor {
	/// Display name (e.g., "Arbitrum One")
	pub name: String,
	/// Block-explorer base URL, if the chain has one
	pub explorer_url: Option<String>,
	/// HTTP RPC endpoint for transaction submission
	pub rpc_url: String,
	/// Whether the chain is a testnet
	pub is_testnet: bool,
}

/// A token contract supported on a specific chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenConfig {
	/// Token symbol (e.g., "USDC", "WETH")
	pub symbol: String,
	/// Token contract address
	pub address: String,
	/// On-chain decimals of the token
	pub decimals: u8,
	/// Whether deposits of this token are made in the chain's native asset
	pub is_native: bool,
}

impl ChainConfig {
	/// Resolve a token on this chain by symbol (case-insensitive)
	pub fn token(&self, symbol: &str) -> Option<&TokenConfig> {
		let wanted = symbol.trim();
		self.tokens
			.iter()
			.find(|t| t.symbol.eq_ignore_ascii_case(wanted))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn chain_with_usdc() -> ChainConfig {
		ChainConfig {
			chain_name: "arbitrum".to_string(),
			chain_id: 42161,
			network: ChainDescriptor {
				name: "Arbitrum One".to_string(),
				explorer_url: Some("https://arbiscan.io".to_string()),
				rpc_url: "https://arb1.arbitrum.io/rpc".to_string(),
				is_testnet: false,
			},
			tokens: vec![TokenConfig {
				symbol: "USDC".to_string(),
				address: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
				decimals: 6,
				is_native: false,
			}],
		}
	}

	#[test]
	fn token_lookup_is_case_insensitive() {
		let chain = chain_with_usdc();
		assert!(chain.token("usdc").is_some());
		assert!(chain.token(" USDC ").is_some());
		assert_eq!(chain.token("USDC").unwrap().decimals, 6);
	}

	#[test]
	fn token_lookup_misses_unknown_symbol() {
		let chain = chain_with_usdc();
		assert!(chain.token("DAI").is_none());
	}
}
