//! BRIDGE_DEPOSIT action handler
//!
//! Orchestrates the intent → route → execute → report pipeline: extract
//! structured content from the conversation, validate it, resolve chain and
//! token configuration, quote, adjust amounts for the relay fee, execute,
//! and report exactly one final result through the callback. Any failure at
//! any stage is terminal; nothing is retried.

use crate::amount::{adjust_input_for_output, parse_units, AmountError};
use crate::explorer::transaction_url;
use crate::extractor::{compose_context, extract_json_block, ExtractionError};
use alloy::primitives::U256 as EvmU256;
use bridge_adapters::{BridgeClient, BridgeError, ExecuteRequest, LocalWallet};
use bridge_config::ChainRegistry;
use bridge_types::{
	ActionCallback, ActionResponse, AgentRuntime, ContentValidationError, DepositContent, Message,
	ProgressStep, ProgressUpdate, QuoteRequest, Route, RuntimeError, State, StepStatus, U256,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Runtime setting holding the signing key
pub const PRIVATE_KEY_SETTING: &str = "ACROSS_PRIVATE_KEY";

/// Pipeline errors; the `Display` text is what the failure callback carries
#[derive(Error, Debug)]
pub enum DepositError {
	#[error("Invalid transfer content")]
	InvalidContent(#[from] ContentValidationError),

	#[error("{0}")]
	Extraction(#[from] ExtractionError),

	#[error("{0}")]
	Runtime(#[from] RuntimeError),

	#[error("unsupported chain: {name}")]
	UnsupportedChain { name: String },

	#[error("token {token} is not supported on {chain}")]
	UnsupportedToken { token: String, chain: String },

	#[error("missing runtime setting: {key}")]
	MissingSetting { key: &'static str },

	#[error("{0}")]
	Amount(#[from] AmountError),

	#[error("{0}")]
	Bridge(#[from] BridgeError),
}

/// The BRIDGE_DEPOSIT action
pub struct BridgeDepositAction {
	registry: ChainRegistry,
	bridge: Arc<dyn BridgeClient>,
}

impl BridgeDepositAction {
	pub const NAME: &'static str = "BRIDGE_DEPOSIT";
	pub const SIMILES: &'static [&'static str] = &["DEPOSIT", "BRIDGE_TOKEN", "SEND", "BRIDGE"];
	pub const DESCRIPTION: &'static str =
		"Transfer tokens from the agent's wallet to another address across chains";

	pub fn new(registry: ChainRegistry, bridge: Arc<dyn BridgeClient>) -> Self {
		info!(chains = registry.len(), "bridge deposit action initialised");
		Self { registry, bridge }
	}

	/// Cheap pre-check invoked by the runtime before the handler runs
	pub async fn validate(&self, _runtime: &dyn AgentRuntime, message: &Message) -> bool {
		debug!(user_id = %message.user_id, "validating bridge request");
		true
	}

	/// Run the deposit pipeline for a message
	///
	/// Returns whether the transfer completed. The callback is invoked
	/// exactly once with the final result, plus best-effort informational
	/// notifications for confirmed transfer steps.
	pub async fn handle(
		&self,
		runtime: &dyn AgentRuntime,
		message: &Message,
		state: Option<State>,
		_options: &serde_json::Value,
		callback: Option<&ActionCallback>,
	) -> bool {
		info!("starting BRIDGE_DEPOSIT handler");

		match self.run(runtime, message, state, callback).await {
			Ok(content) => {
				if let Some(cb) = callback {
					cb(ActionResponse {
						text: format!(
							"Successfully bridged {} {} to {}",
							content.amount, content.token_name, content.recipient
						),
						content: json!({
							"success": true,
							"amount": content.amount,
							"recipient": content.recipient,
							"token": content.token_name,
						}),
					});
				}
				true
			},
			Err(err) => {
				error!(error = %err, "bridge deposit failed");
				if let Some(cb) = callback {
					cb(failure_response(&err));
				}
				false
			},
		}
	}

	async fn run(
		&self,
		runtime: &dyn AgentRuntime,
		message: &Message,
		state: Option<State>,
		callback: Option<&ActionCallback>,
	) -> Result<DepositContent, DepositError> {
		let state = match state {
			Some(state) => state,
			None => runtime.compose_state(message).await?,
		};

		let context = compose_context(&state);
		let reply = runtime.generate(&context).await?;
		let raw = extract_json_block(&reply)?;
		let content = DepositContent::validate(&raw)?;
		debug!(?content, "deposit content extracted");

		let source = self
			.registry
			.lookup(&content.source_chain)
			.ok_or_else(|| DepositError::UnsupportedChain {
				name: content.source_chain.clone(),
			})?;
		let destination = self
			.registry
			.lookup(&content.destination_chain)
			.ok_or_else(|| DepositError::UnsupportedChain {
				name: content.destination_chain.clone(),
			})?;

		let input_token =
			source
				.token(&content.token_name)
				.ok_or_else(|| DepositError::UnsupportedToken {
					token: content.token_name.clone(),
					chain: source.chain_name.clone(),
				})?;
		let output_token =
			destination
				.token(&content.token_name)
				.ok_or_else(|| DepositError::UnsupportedToken {
					token: content.token_name.clone(),
					chain: destination.chain_name.clone(),
				})?;

		// Base units derive from the resolved token, not a hardcoded scheme
		let input_amount = parse_units(&content.amount, input_token.decimals)?;

		let private_key = runtime
			.setting(PRIVATE_KEY_SETTING)
			.ok_or(DepositError::MissingSetting {
				key: PRIVATE_KEY_SETTING,
			})?;
		let wallet = LocalWallet::new(&private_key)?;

		let request = QuoteRequest {
			route: Route {
				origin_chain_id: source.chain_id,
				destination_chain_id: destination.chain_id,
				input_token: input_token.address.clone(),
				output_token: output_token.address.clone(),
				is_native: input_token.is_native,
			},
			input_amount: U256::from(input_amount.to_string()),
		};
		let quote = self.bridge.get_quote(&request).await?;

		let fee_pct = parse_pct(&quote.fees.total_relay_fee.pct)?;
		let adjusted_input = adjust_input_for_output(input_amount, fee_pct)?;
		info!(
			amount = %content.amount,
			adjusted_base_units = %adjusted_input,
			fee_pct = %fee_pct,
			"transferring with relay-fee adjustment"
		);

		// Merge adjusted amounts and the validated recipient into the
		// quoted deposit descriptor
		let mut deposit = quote.deposit;
		deposit.input_amount = U256::from(adjusted_input.to_string());
		deposit.output_amount = U256::from(input_amount.to_string());
		deposit.recipient = Some(content.recipient.clone());

		let mut on_progress = |update: ProgressUpdate| {
			if update.status != StepStatus::TxSuccess {
				return;
			}
			let chain = match update.step {
				ProgressStep::Fill => destination,
				_ => source,
			};
			let Some(tx_hash) = update.tx_hash.as_deref() else {
				return;
			};
			if update.action_success == Some(false) {
				warn!("cross-chain messages failed");
			}
			match transaction_url(&chain.network, tx_hash) {
				Ok(url) => {
					info!(step = %update.step, chain = %chain.network.name, %url, "transfer step confirmed");
					if let Some(cb) = callback {
						cb(ActionResponse {
							text: format!(
								"Bridge {} confirmed on {}: {}",
								update.step, chain.network.name, url
							),
							content: json!({
								"step": update.step,
								"txHash": tx_hash,
								"url": url,
							}),
						});
					}
				},
				Err(err) => warn!(error = %err, "could not build transaction link"),
			}
		};

		self.bridge
			.execute_quote(
				ExecuteRequest {
					wallet: &wallet,
					deposit,
				},
				&mut on_progress,
			)
			.await?;

		Ok(content)
	}
}

fn parse_pct(pct: &U256) -> Result<EvmU256, AmountError> {
	EvmU256::from_str_radix(pct.as_str(), 10).map_err(|e| AmountError::InvalidAmount {
		value: pct.to_string(),
		reason: e.to_string(),
	})
}

fn failure_response(err: &DepositError) -> ActionResponse {
	match err {
		DepositError::InvalidContent(_) => ActionResponse {
			text: "Unable to process bridge request. Invalid content provided.".to_string(),
			content: json!({ "error": "Invalid transfer content" }),
		},
		other => ActionResponse {
			text: format!("Error bridging tokens: {}", other),
			content: json!({ "error": other.to_string() }),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_content_gets_fixed_failure_text() {
		let err = DepositError::InvalidContent(ContentValidationError::MissingField {
			field: "recipient",
		});
		let response = failure_response(&err);
		assert_eq!(
			response.text,
			"Unable to process bridge request. Invalid content provided."
		);
		assert_eq!(response.content["error"], "Invalid transfer content");
	}

	#[test]
	fn other_errors_surface_verbatim() {
		let err = DepositError::Bridge(BridgeError::Execution {
			reason: "insufficient funds".to_string(),
		});
		let response = failure_response(&err);
		assert!(response.text.contains("insufficient funds"));
		assert!(response.content["error"]
			.as_str()
			.unwrap()
			.contains("insufficient funds"));
	}

	#[test]
	fn fee_pct_parses_from_wire_value() {
		let pct = parse_pct(&U256::from("78905024308003")).unwrap();
		assert_eq!(pct, EvmU256::from(78905024308003u64));
		assert!(parse_pct(&U256::from("not-a-number")).is_err());
	}
}
