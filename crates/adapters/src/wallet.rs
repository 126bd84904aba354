//! Local wallet construction
//!
//! Wraps an Alloy private-key signer built from the hex key read out of the
//! agent runtime's settings. Suitable for the single-key setup this plugin
//! runs with; key management beyond that belongs to the hosting runtime.

use crate::{BridgeError, BridgeResult};
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use bridge_types::SecretString;

/// Signing wallet backed by a local private key
#[derive(Debug, Clone)]
pub struct LocalWallet {
	signer: PrivateKeySigner,
}

impl LocalWallet {
	/// Create a wallet from a hex-encoded private key (with or without 0x prefix)
	pub fn new(private_key: &SecretString) -> BridgeResult<Self> {
		let signer = private_key
			.expose_secret()
			.parse::<PrivateKeySigner>()
			.map_err(|e| BridgeError::InvalidKey {
				reason: e.to_string(),
			})?;

		Ok(Self { signer })
	}

	/// Address of the signing account
	pub fn address(&self) -> Address {
		self.signer.address()
	}

	pub(crate) fn signer(&self) -> &PrivateKeySigner {
		&self.signer
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// Well-known anvil development key
	const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

	#[test]
	fn derives_expected_address() {
		let wallet = LocalWallet::new(&SecretString::from(DEV_KEY)).unwrap();
		assert_eq!(
			format!("{:#x}", wallet.address()),
			"0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
		);
	}

	#[test]
	fn rejects_malformed_keys() {
		let err = LocalWallet::new(&SecretString::from("0xnot-a-key")).unwrap_err();
		assert!(matches!(err, BridgeError::InvalidKey { .. }));

		let err = LocalWallet::new(&SecretString::from("")).unwrap_err();
		assert!(matches!(err, BridgeError::InvalidKey { .. }));
	}
}
