//! Quote and deposit descriptor models
//!
//! A [`BridgeQuote`] is produced by the bridging service for a concrete
//! [`Route`] and amount. The handler treats it as opaque except for the
//! relay-fee proportion and the [`DepositParams`], which it merges with
//! adjusted amounts before execution.

use crate::models::U256;
use serde::{Deserialize, Serialize};

/// A priced route between two chains
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
	/// Origin chain ID
	pub origin_chain_id: u64,
	/// Destination chain ID
	pub destination_chain_id: u64,
	/// Input token contract address on the origin chain
	pub input_token: String,
	/// Output token contract address on the destination chain
	pub output_token: String,
	/// Whether the deposit is made in the origin chain's native asset
	pub is_native: bool,
}

/// Request for a bridging quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	pub route: Route,
	/// Desired amount in base units of the input token
	pub input_amount: U256,
}

/// One fee component: proportion (scaled by 1e18) and absolute total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeeComponent {
	/// Fee as a fraction of the transferred amount, scaled by 1e18
	pub pct: U256,
	/// Fee in base units of the input token
	pub total: U256,
}

/// Fee structure attached to a quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFees {
	/// Total relay fee retained by the bridging network
	pub total_relay_fee: FeeComponent,
	/// Relayer capital cost component
	pub relayer_capital_fee: FeeComponent,
	/// Relayer gas cost component
	pub relayer_gas_fee: FeeComponent,
	/// Liquidity-provider fee component
	pub lp_fee: FeeComponent,
}

/// Executable deposit descriptor returned with a quote
///
/// Field values come from the quoting service; the handler overrides
/// `input_amount`, `output_amount` and `recipient` before execution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DepositParams {
	pub origin_chain_id: u64,
	pub destination_chain_id: u64,
	pub input_token: String,
	pub output_token: String,
	/// Amount pulled from the depositor, in base units
	pub input_amount: U256,
	/// Amount delivered on the destination chain, in base units
	pub output_amount: U256,
	/// Recipient on the destination chain; absent until the handler sets it
	pub recipient: Option<String>,
	/// Spoke pool contract on the origin chain
	pub spoke_pool: String,
	/// Spoke pool contract on the destination chain
	pub destination_spoke_pool: String,
	/// Relayer with exclusive fill rights until the exclusivity deadline
	pub exclusive_relayer: String,
	/// Quote timestamp used by the settlement contracts
	pub quote_timestamp: u64,
	/// Unix deadline after which the deposit can no longer be filled
	pub fill_deadline: u64,
	/// Unix deadline for the exclusive relayer
	pub exclusivity_deadline: u64,
	/// Whether the deposit is funded with the native asset
	pub is_native: bool,
}

/// A quote for a specific cross-chain transfer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeQuote {
	/// Quote identifier assigned by the quoting service
	pub id: String,
	/// Executable deposit descriptor
	pub deposit: DepositParams,
	/// Fee breakdown
	pub fees: QuoteFees,
	/// Estimated time until fill, in seconds
	pub estimated_fill_time_sec: u64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quote_round_trips_through_json() {
		let quote = BridgeQuote {
			id: "xn8fx-1754342218143".to_string(),
			deposit: DepositParams {
				origin_chain_id: 42161,
				destination_chain_id: 8453,
				input_token: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
				output_token: "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913".to_string(),
				input_amount: U256::from("100000000"),
				output_amount: U256::from("99921094"),
				recipient: None,
				spoke_pool: "0x5c7BCd6E7De5423a257D81B442095A1a6ced35C5".to_string(),
				destination_spoke_pool: "0x6f26Bf09B1C792e3228e5467807a900A503c0281".to_string(),
				exclusive_relayer: "0x0000000000000000000000000000000000000000".to_string(),
				quote_timestamp: 1754342087,
				fill_deadline: 1754353917,
				exclusivity_deadline: 0,
				is_native: false,
			},
			fees: QuoteFees {
				total_relay_fee: FeeComponent {
					pct: U256::from("78905024308003"),
					total: U256::from("78905"),
				},
				relayer_capital_fee: FeeComponent {
					pct: U256::from("78750000000001"),
					total: U256::from("78750"),
				},
				relayer_gas_fee: FeeComponent {
					pct: U256::from("155024308002"),
					total: U256::from("155"),
				},
				lp_fee: FeeComponent {
					pct: U256::from("0"),
					total: U256::from("0"),
				},
			},
			estimated_fill_time_sec: 120,
		};

		let json = serde_json::to_string(&quote).unwrap();
		assert!(json.contains("\"originChainId\":42161"));
		assert!(json.contains("\"totalRelayFee\""));

		let back: BridgeQuote = serde_json::from_str(&json).unwrap();
		assert_eq!(back, quote);
	}
}
