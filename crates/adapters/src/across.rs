//! Across client implementation
//!
//! Quoting goes through the Across `suggested-fees` HTTP API; execution
//! submits the approval and `depositV3` transactions through an Alloy
//! provider on the origin chain, then polls the `deposit/status` API until
//! the destination-chain fill lands. No retry or deadline logic: a failure
//! at any step is terminal for the request.

use crate::{BridgeClient, BridgeError, BridgeResult, ExecuteRequest, ProgressSink};
use alloy::network::EthereumWallet;
use alloy::primitives::{Address, Bytes, U256 as EvmU256};
use alloy::providers::ProviderBuilder;
use alloy::signers::Signer;
use alloy::sol;
use async_trait::async_trait;
use bridge_types::{
	BridgeQuote, DepositParams, ExecutionReport, FeeComponent, ProgressStep, ProgressUpdate,
	QuoteFees, QuoteRequest, StepStatus, U256,
};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

sol! {
	#[sol(rpc)]
	interface IErc20 {
		function approve(address spender, uint256 value) external returns (bool);
	}

	#[sol(rpc)]
	interface V3SpokePool {
		function depositV3(
			address depositor,
			address recipient,
			address inputToken,
			address outputToken,
			uint256 inputAmount,
			uint256 outputAmount,
			uint256 destinationChainId,
			address exclusiveRelayer,
			uint32 quoteTimestamp,
			uint32 fillDeadline,
			uint32 exclusivityDeadline,
			bytes message
		) external payable;
	}
}

// ================================
// ACROSS API MODELS
// ================================

/// Across suggested fees response (fields this plugin consumes)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFeesResponse {
	/// Estimated fill time in seconds
	pub estimated_fill_time_sec: u64,
	/// Total relay fee breakdown
	pub total_relay_fee: FeeBand,
	/// Relayer capital fee breakdown
	pub relayer_capital_fee: FeeBand,
	/// Relayer gas fee breakdown
	pub relayer_gas_fee: FeeBand,
	/// LP fee breakdown
	pub lp_fee: FeeBand,
	/// Quote timestamp
	pub timestamp: String,
	/// Whether the requested amount is below the route minimum
	pub is_amount_too_low: bool,
	/// Exclusive relayer address
	pub exclusive_relayer: String,
	/// Exclusivity deadline timestamp
	pub exclusivity_deadline: u64,
	/// Spoke pool address on the origin chain
	pub spoke_pool_address: String,
	/// Spoke pool address on the destination chain
	pub destination_spoke_pool_address: String,
	/// Deposit limits
	pub limits: DepositLimits,
	/// Fill deadline timestamp
	pub fill_deadline: String,
	/// Output amount after fees
	pub output_amount: String,
	/// Quote ID
	pub id: String,
}

/// Across fee breakdown
#[derive(Debug, Clone, Deserialize)]
pub struct FeeBand {
	/// Fee as a fraction of the amount, scaled by 1e18
	pub pct: String,
	/// Fee total in base units
	pub total: String,
}

/// Across deposit limits
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositLimits {
	pub min_deposit: String,
	pub max_deposit: String,
}

/// Across deposit status response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DepositStatusResponse {
	/// "pending", "filled" or "expired"
	status: String,
	fill_tx: Option<String>,
	deposit_id: Option<u64>,
	action_success: Option<bool>,
}

/// Across client: HTTP quoting plus on-chain execution
#[derive(Debug)]
pub struct AcrossClient {
	endpoint: String,
	rpc_urls: HashMap<u64, String>,
	fill_poll_interval: Duration,
	http: reqwest::Client,
}

impl AcrossClient {
	/// Create a client for the given API endpoint and per-chain RPC endpoints
	pub fn new(
		endpoint: impl Into<String>,
		integrator_id: &str,
		rpc_urls: HashMap<u64, String>,
		fill_poll_interval: Duration,
	) -> BridgeResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		if let Ok(value) = HeaderValue::from_str(integrator_id) {
			headers.insert("X-Integrator-Id", value);
		}

		let http = reqwest::Client::builder()
			.default_headers(headers)
			.build()
			.map_err(BridgeError::Http)?;

		Ok(Self {
			endpoint: endpoint.into(),
			rpc_urls,
			fill_poll_interval,
			http,
		})
	}

	fn rpc_url(&self, chain_id: u64) -> BridgeResult<&str> {
		self.rpc_urls
			.get(&chain_id)
			.map(String::as_str)
			.ok_or(BridgeError::NoRpcEndpoint { chain_id })
	}

	/// Convert a suggested-fees response into the internal quote format
	fn to_quote(&self, fees: SuggestedFeesResponse, request: &QuoteRequest) -> BridgeResult<BridgeQuote> {
		let quote_timestamp = parse_u64(&fees.timestamp, "timestamp")?;
		let fill_deadline = parse_u64(&fees.fill_deadline, "fillDeadline")?;

		Ok(BridgeQuote {
			id: fees.id,
			deposit: DepositParams {
				origin_chain_id: request.route.origin_chain_id,
				destination_chain_id: request.route.destination_chain_id,
				input_token: request.route.input_token.clone(),
				output_token: request.route.output_token.clone(),
				input_amount: request.input_amount.clone(),
				output_amount: U256::from(fees.output_amount),
				recipient: None,
				spoke_pool: fees.spoke_pool_address,
				destination_spoke_pool: fees.destination_spoke_pool_address,
				exclusive_relayer: fees.exclusive_relayer,
				quote_timestamp,
				fill_deadline,
				exclusivity_deadline: fees.exclusivity_deadline,
				is_native: request.route.is_native,
			},
			fees: QuoteFees {
				total_relay_fee: to_fee_component(fees.total_relay_fee),
				relayer_capital_fee: to_fee_component(fees.relayer_capital_fee),
				relayer_gas_fee: to_fee_component(fees.relayer_gas_fee),
				lp_fee: to_fee_component(fees.lp_fee),
			},
			estimated_fill_time_sec: fees.estimated_fill_time_sec,
		})
	}

	/// Poll the deposit status endpoint until the fill lands
	///
	/// Runs until the deposit is filled or expired; a hang upstream blocks
	/// the whole pipeline, matching the handler's no-timeout contract.
	async fn wait_for_fill(
		&self,
		origin_chain_id: u64,
		deposit_tx_hash: &str,
	) -> BridgeResult<ProgressUpdate> {
		let status_url = format!("{}/deposit/status", self.endpoint);

		loop {
			let response = self
				.http
				.get(&status_url)
				.query(&[
					("originChainId", origin_chain_id.to_string()),
					("depositTxHash", deposit_tx_hash.to_string()),
				])
				.send()
				.await
				.map_err(BridgeError::Http)?;

			if !response.status().is_success() {
				// Status indexing can lag the deposit; keep polling on 404
				if response.status() == reqwest::StatusCode::NOT_FOUND {
					tokio::time::sleep(self.fill_poll_interval).await;
					continue;
				}
				return Err(BridgeError::HttpStatus {
					status_code: response.status().as_u16(),
					reason: "deposit status endpoint error".to_string(),
				});
			}

			let status: DepositStatusResponse =
				response
					.json()
					.await
					.map_err(|e| BridgeError::InvalidResponse {
						reason: format!("failed to parse deposit status response: {}", e),
					})?;

			match status.status.as_str() {
				"filled" => {
					return Ok(ProgressUpdate {
						step: ProgressStep::Fill,
						status: StepStatus::TxSuccess,
						tx_hash: status.fill_tx,
						deposit_id: status.deposit_id.map(|id| id.to_string()),
						action_success: Some(status.action_success.unwrap_or(true)),
					});
				},
				"expired" => {
					return Err(BridgeError::Execution {
						reason: format!("deposit {} expired before fill", deposit_tx_hash),
					});
				},
				other => {
					debug!(status = other, "deposit not yet filled, polling again");
					tokio::time::sleep(self.fill_poll_interval).await;
				},
			}
		}
	}
}

#[async_trait]
impl BridgeClient for AcrossClient {
	async fn get_quote(&self, request: &QuoteRequest) -> BridgeResult<BridgeQuote> {
		let route = &request.route;
		let quote_url = format!("{}/suggested-fees", self.endpoint);

		debug!(
			"fetching Across quote from {} - {}:{} -> {}:{}",
			quote_url,
			route.origin_chain_id,
			route.input_token,
			route.destination_chain_id,
			route.output_token
		);

		let response = self
			.http
			.get(&quote_url)
			.query(&[
				("inputToken", route.input_token.as_str()),
				("outputToken", route.output_token.as_str()),
				("originChainId", &route.origin_chain_id.to_string()),
				("destinationChainId", &route.destination_chain_id.to_string()),
				("amount", request.input_amount.as_str()),
			])
			.send()
			.await
			.map_err(BridgeError::Http)?;

		if !response.status().is_success() {
			return Err(BridgeError::HttpStatus {
				status_code: response.status().as_u16(),
				reason: "suggested-fees endpoint error".to_string(),
			});
		}

		let fees: SuggestedFeesResponse =
			response
				.json()
				.await
				.map_err(|e| BridgeError::InvalidResponse {
					reason: format!("failed to parse Across quote response: {}", e),
				})?;

		if fees.is_amount_too_low {
			return Err(BridgeError::AmountTooLow {
				amount: request.input_amount.to_string(),
				min_deposit: fees.limits.min_deposit,
			});
		}

		let quote = self.to_quote(fees, request)?;
		debug!(quote_id = %quote.id, "Across quote fetched");
		Ok(quote)
	}

	async fn execute_quote(
		&self,
		request: ExecuteRequest<'_>,
		on_progress: ProgressSink<'_>,
	) -> BridgeResult<ExecutionReport> {
		let deposit = &request.deposit;
		let recipient = deposit
			.recipient
			.as_deref()
			.ok_or(BridgeError::MissingRecipient)?;

		let url = self
			.rpc_url(deposit.origin_chain_id)?
			.parse()
			.map_err(|e| BridgeError::InvalidResponse {
				reason: format!("invalid RPC URL for chain {}: {}", deposit.origin_chain_id, e),
			})?;

		let signer = request
			.wallet
			.signer()
			.clone()
			.with_chain_id(Some(deposit.origin_chain_id));
		let depositor = signer.address();
		let provider = ProviderBuilder::new()
			.wallet(EthereumWallet::from(signer))
			.connect_http(url);

		let spoke_pool = parse_address(&deposit.spoke_pool)?;
		let input_token = parse_address(&deposit.input_token)?;
		let output_token = parse_address(&deposit.output_token)?;
		let recipient_addr = parse_address(recipient)?;
		let exclusive_relayer = parse_address(&deposit.exclusive_relayer)?;
		let input_amount = parse_amount(&deposit.input_amount)?;
		let output_amount = parse_amount(&deposit.output_amount)?;

		let mut report = ExecutionReport::default();

		// ERC-20 allowance for the spoke pool; skipped for native deposits
		if !deposit.is_native {
			let erc20 = IErc20::new(input_token, provider.clone());
			let receipt = erc20
				.approve(spoke_pool, input_amount)
				.send()
				.await
				.map_err(execution_error)?
				.get_receipt()
				.await
				.map_err(execution_error)?;

			let tx_hash = format!("{:#x}", receipt.transaction_hash);
			if !receipt.status() {
				observe(
					&mut report,
					on_progress,
					reverted(ProgressStep::Approve, &tx_hash),
				);
				return Err(BridgeError::Execution {
					reason: format!("approval transaction {} reverted", tx_hash),
				});
			}

			info!(tx_hash = %tx_hash, token = %deposit.input_token, "spoke pool approval confirmed");
			observe(
				&mut report,
				on_progress,
				ProgressUpdate::succeeded(ProgressStep::Approve, tx_hash),
			);
		}

		let spoke = V3SpokePool::new(spoke_pool, provider.clone());
		let call = spoke
			.depositV3(
				depositor,
				recipient_addr,
				input_token,
				output_token,
				input_amount,
				output_amount,
				EvmU256::from(deposit.destination_chain_id),
				exclusive_relayer,
				parse_u32(deposit.quote_timestamp, "quoteTimestamp")?,
				parse_u32(deposit.fill_deadline, "fillDeadline")?,
				parse_u32(deposit.exclusivity_deadline, "exclusivityDeadline")?,
				Bytes::default(),
			)
			.value(if deposit.is_native {
				input_amount
			} else {
				EvmU256::ZERO
			});

		let receipt = call
			.send()
			.await
			.map_err(execution_error)?
			.get_receipt()
			.await
			.map_err(execution_error)?;

		let deposit_tx_hash = format!("{:#x}", receipt.transaction_hash);
		if !receipt.status() {
			observe(
				&mut report,
				on_progress,
				reverted(ProgressStep::Deposit, &deposit_tx_hash),
			);
			return Err(BridgeError::Execution {
				reason: format!("deposit transaction {} reverted", deposit_tx_hash),
			});
		}

		info!(tx_hash = %deposit_tx_hash, "deposit confirmed on origin chain");
		report.deposit_tx_hash = Some(deposit_tx_hash.clone());
		observe(
			&mut report,
			on_progress,
			ProgressUpdate::succeeded(ProgressStep::Deposit, deposit_tx_hash.clone()),
		);

		let fill = self
			.wait_for_fill(deposit.origin_chain_id, &deposit_tx_hash)
			.await?;
		if fill.action_success == Some(false) {
			warn!("cross-chain messages failed for deposit {}", deposit_tx_hash);
		}
		report.fill_tx_hash = fill.tx_hash.clone();
		observe(&mut report, on_progress, fill);

		Ok(report)
	}
}

fn observe(report: &mut ExecutionReport, on_progress: ProgressSink<'_>, update: ProgressUpdate) {
	on_progress(update.clone());
	report.events.push(update);
}

fn reverted(step: ProgressStep, tx_hash: &str) -> ProgressUpdate {
	ProgressUpdate {
		step,
		status: StepStatus::TxReverted,
		tx_hash: Some(tx_hash.to_string()),
		deposit_id: None,
		action_success: None,
	}
}

fn execution_error(err: impl std::fmt::Display) -> BridgeError {
	BridgeError::Execution {
		reason: err.to_string(),
	}
}

fn to_fee_component(band: FeeBand) -> FeeComponent {
	FeeComponent {
		pct: U256::from(band.pct),
		total: U256::from(band.total),
	}
}

fn parse_address(value: &str) -> BridgeResult<Address> {
	value
		.parse::<Address>()
		.map_err(|e| BridgeError::InvalidResponse {
			reason: format!("invalid address {}: {}", value, e),
		})
}

fn parse_amount(value: &U256) -> BridgeResult<EvmU256> {
	EvmU256::from_str_radix(value.as_str(), 10).map_err(|e| BridgeError::InvalidResponse {
		reason: format!("invalid amount {}: {}", value, e),
	})
}

fn parse_u64(value: &str, field: &str) -> BridgeResult<u64> {
	value.parse().map_err(|_| BridgeError::InvalidResponse {
		reason: format!("invalid {}: {}", field, value),
	})
}

fn parse_u32(value: u64, field: &str) -> BridgeResult<u32> {
	value
		.try_into()
		.map_err(|_| BridgeError::InvalidResponse {
			reason: format!("{} out of range: {}", field, value),
		})
}
