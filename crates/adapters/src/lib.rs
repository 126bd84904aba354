//! Bridge Adapters
//!
//! The [`BridgeClient`] trait is the seam to the external bridging service:
//! quoting and execution both live behind it. The production implementation
//! is [`AcrossClient`]; tests supply mocks.

pub mod across;
pub mod wallet;

pub use across::AcrossClient;
pub use wallet::LocalWallet;

use async_trait::async_trait;
use bridge_types::{BridgeQuote, DepositParams, ExecutionReport, ProgressUpdate, QuoteRequest};
use std::fmt::Debug;
use thiserror::Error;

/// Bridging service errors
#[derive(Error, Debug)]
pub enum BridgeError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatus { status_code: u16, reason: String },

	#[error("invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("amount {amount} is below minimum deposit of {min_deposit}")]
	AmountTooLow { amount: String, min_deposit: String },

	#[error("invalid signing key: {reason}")]
	InvalidKey { reason: String },

	#[error("no RPC endpoint configured for chain {chain_id}")]
	NoRpcEndpoint { chain_id: u64 },

	#[error("deposit descriptor has no recipient")]
	MissingRecipient,

	#[error("execution failed: {reason}")]
	Execution { reason: String },
}

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Quote execution request: the deposit descriptor plus the signing wallet
#[derive(Debug)]
pub struct ExecuteRequest<'a> {
	pub wallet: &'a LocalWallet,
	pub deposit: DepositParams,
}

/// Callback receiving progress observations during execution
pub type ProgressSink<'a> = &'a mut (dyn FnMut(ProgressUpdate) + Send);

/// Client for the external bridging service
///
/// One outstanding call at a time per request; implementations report
/// progress through the sink and additionally return every observation in
/// the [`ExecutionReport`].
#[async_trait]
pub trait BridgeClient: Send + Sync + Debug {
	/// Request a quote for a route and input amount
	async fn get_quote(&self, request: &QuoteRequest) -> BridgeResult<BridgeQuote>;

	/// Execute a quoted deposit against a wallet
	async fn execute_quote(
		&self,
		request: ExecuteRequest<'_>,
		on_progress: ProgressSink<'_>,
	) -> BridgeResult<ExecutionReport>;
}
