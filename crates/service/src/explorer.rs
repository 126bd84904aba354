//! Block-explorer transaction links

use bridge_types::ChainDescriptor;
use thiserror::Error;

/// Explorer link errors
#[derive(Error, Debug)]
pub enum ExplorerError {
	#[error("chain {chain} has no block explorer configured")]
	NoExplorer { chain: String },
}

/// Format a block-explorer link for a transaction
///
/// The base URL is normalized to exactly one trailing slash before
/// `tx/<hash>` is appended.
pub fn transaction_url(chain: &ChainDescriptor, tx_hash: &str) -> Result<String, ExplorerError> {
	let base = chain
		.explorer_url
		.as_deref()
		.ok_or_else(|| ExplorerError::NoExplorer {
			chain: chain.name.clone(),
		})?;

	Ok(format!("{}/tx/{}", base.trim_end_matches('/'), tx_hash))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn chain_with_base(explorer_url: Option<&str>) -> ChainDescriptor {
		ChainDescriptor {
			name: "Arbitrum One".to_string(),
			explorer_url: explorer_url.map(str::to_string),
			rpc_url: "https://arb1.arbitrum.io/rpc".to_string(),
			is_testnet: false,
		}
	}

	#[test]
	fn appends_tx_path() {
		let url = transaction_url(&chain_with_base(Some("https://arbiscan.io")), "0xabc").unwrap();
		assert_eq!(url, "https://arbiscan.io/tx/0xabc");
	}

	#[test]
	fn trailing_slashes_normalize_to_one() {
		let with_slash = transaction_url(&chain_with_base(Some("https://x/")), "0xabc").unwrap();
		let without = transaction_url(&chain_with_base(Some("https://x")), "0xabc").unwrap();
		let doubled = transaction_url(&chain_with_base(Some("https://x//")), "0xabc").unwrap();
		assert_eq!(with_slash, without);
		assert_eq!(doubled, without);
		assert_eq!(without, "https://x/tx/0xabc");
	}

	#[test]
	fn missing_explorer_is_an_error() {
		let err = transaction_url(&chain_with_base(None), "0xabc").unwrap_err();
		assert!(matches!(err, ExplorerError::NoExplorer { .. }));
		assert!(err.to_string().contains("Arbitrum One"));
	}
}
