//! Mock runtime and bridge client for tests and downstream consumers
//!
//! The mocks track calls and replay scripted behaviour so handler tests
//! can assert that no side-effecting call happens on early-failure paths.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use bridge_adapters::{
	BridgeClient, BridgeError, BridgeResult, ExecuteRequest, ProgressSink,
};
use bridge_types::{
	AgentRuntime, BridgeQuote, DepositParams, ExecutionReport, FeeComponent, Message,
	ProgressStep, ProgressUpdate, QuoteFees, QuoteRequest, RuntimeError, SecretString, State,
	StepStatus, U256,
};

/// Well-known anvil development key, usable wherever tests need a signer
pub const DEV_PRIVATE_KEY: &str =
	"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Agent runtime returning a canned generation reply
#[derive(Debug, Default)]
pub struct MockRuntime {
	settings: HashMap<String, String>,
	reply: String,
	fail_generation: Option<String>,
}

impl MockRuntime {
	/// Runtime that answers the extraction prompt with `reply`
	pub fn new(reply: impl Into<String>) -> Self {
		Self {
			settings: HashMap::new(),
			reply: reply.into(),
			fail_generation: None,
		}
	}

	pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.settings.insert(key.into(), value.into());
		self
	}

	/// Runtime whose generation step fails with `reason`
	pub fn failing_generation(reason: impl Into<String>) -> Self {
		Self {
			settings: HashMap::new(),
			reply: String::new(),
			fail_generation: Some(reason.into()),
		}
	}
}

#[async_trait]
impl AgentRuntime for MockRuntime {
	fn setting(&self, key: &str) -> Option<SecretString> {
		self.settings.get(key).map(|v| SecretString::from(v.as_str()))
	}

	async fn compose_state(&self, message: &Message) -> Result<State, RuntimeError> {
		Ok(State {
			recent_messages: format!("{}: {}", message.user_id, message.text),
		})
	}

	async fn generate(&self, _context: &str) -> Result<String, RuntimeError> {
		match &self.fail_generation {
			Some(reason) => Err(RuntimeError::GenerationFailed {
				reason: reason.clone(),
			}),
			None => Ok(self.reply.clone()),
		}
	}
}

/// Bridge client with a configurable fee, failure flags and call tracking
#[derive(Debug)]
pub struct MockBridgeClient {
	/// Total relay fee proportion, scaled by 1e18
	fee_pct: String,
	fail_quote: Option<String>,
	fail_execution: Option<String>,
	quote_calls: AtomicUsize,
	execute_calls: AtomicUsize,
	executed: Mutex<Option<DepositParams>>,
}

impl MockBridgeClient {
	/// Client quoting the given relay-fee proportion and executing cleanly
	pub fn new(fee_pct: impl Into<String>) -> Self {
		Self {
			fee_pct: fee_pct.into(),
			fail_quote: None,
			fail_execution: None,
			quote_calls: AtomicUsize::new(0),
			execute_calls: AtomicUsize::new(0),
			executed: Mutex::new(None),
		}
	}

	/// Client whose quote request fails with `reason`
	pub fn failing_quote(reason: impl Into<String>) -> Self {
		let mut client = Self::new("0");
		client.fail_quote = Some(reason.into());
		client
	}

	/// Client whose execution fails with `reason`
	pub fn failing_execution(reason: impl Into<String>) -> Self {
		let mut client = Self::new("0");
		client.fail_execution = Some(reason.into());
		client
	}

	pub fn quote_call_count(&self) -> usize {
		self.quote_calls.load(Ordering::SeqCst)
	}

	pub fn execute_call_count(&self) -> usize {
		self.execute_calls.load(Ordering::SeqCst)
	}

	/// Deposit descriptor from the most recent execution, if any
	pub fn last_deposit(&self) -> Option<DepositParams> {
		self.executed.lock().expect("mock poisoned").clone()
	}
}

#[async_trait]
impl BridgeClient for MockBridgeClient {
	async fn get_quote(&self, request: &QuoteRequest) -> BridgeResult<BridgeQuote> {
		self.quote_calls.fetch_add(1, Ordering::SeqCst);

		if let Some(reason) = &self.fail_quote {
			return Err(BridgeError::InvalidResponse {
				reason: reason.clone(),
			});
		}

		let zero = || FeeComponent {
			pct: U256::from("0"),
			total: U256::from("0"),
		};

		Ok(BridgeQuote {
			id: "mock-quote".to_string(),
			deposit: DepositParams {
				origin_chain_id: request.route.origin_chain_id,
				destination_chain_id: request.route.destination_chain_id,
				input_token: request.route.input_token.clone(),
				output_token: request.route.output_token.clone(),
				input_amount: request.input_amount.clone(),
				output_amount: request.input_amount.clone(),
				recipient: None,
				spoke_pool: "0x5c7BCd6E7De5423a257D81B442095A1a6ced35C5".to_string(),
				destination_spoke_pool: "0x6f26Bf09B1C792e3228e5467807a900A503c0281"
					.to_string(),
				exclusive_relayer: "0x0000000000000000000000000000000000000000".to_string(),
				quote_timestamp: 1754342087,
				fill_deadline: 1754353917,
				exclusivity_deadline: 0,
				is_native: request.route.is_native,
			},
			fees: QuoteFees {
				total_relay_fee: FeeComponent {
					pct: U256::from(self.fee_pct.clone()),
					total: U256::from("0"),
				},
				relayer_capital_fee: zero(),
				relayer_gas_fee: zero(),
				lp_fee: zero(),
			},
			estimated_fill_time_sec: 60,
		})
	}

	async fn execute_quote(
		&self,
		request: ExecuteRequest<'_>,
		on_progress: ProgressSink<'_>,
	) -> BridgeResult<ExecutionReport> {
		self.execute_calls.fetch_add(1, Ordering::SeqCst);

		if let Some(reason) = &self.fail_execution {
			return Err(BridgeError::Execution {
				reason: reason.clone(),
			});
		}

		let deposit = request.deposit;
		let mut report = ExecutionReport::default();
		let mut observe = |update: ProgressUpdate, report: &mut ExecutionReport| {
			on_progress(update.clone());
			report.events.push(update);
		};

		if !deposit.is_native {
			observe(
				ProgressUpdate::succeeded(ProgressStep::Approve, "0xa1a1a1"),
				&mut report,
			);
		}
		observe(
			ProgressUpdate::succeeded(ProgressStep::Deposit, "0xd2d2d2"),
			&mut report,
		);
		observe(
			ProgressUpdate {
				step: ProgressStep::Fill,
				status: StepStatus::TxSuccess,
				tx_hash: Some("0xf3f3f3".to_string()),
				deposit_id: Some("1".to_string()),
				action_success: Some(true),
			},
			&mut report,
		);

		report.deposit_tx_hash = Some("0xd2d2d2".to_string());
		report.fill_tx_hash = Some("0xf3f3f3".to_string());

		*self.executed.lock().expect("mock poisoned") = Some(deposit);
		Ok(report)
	}
}
