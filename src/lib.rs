//! Bridge Plugin
//!
//! BRIDGE_DEPOSIT action handler for a conversational agent runtime:
//! natural-language cross-chain transfers over the Across bridging service.

// Core domain types - the most commonly used types
pub use bridge_types::{
	// External dependencies for convenience
	serde_json,
	ActionCallback,
	ActionResponse,
	AgentRuntime,
	BridgeQuote,
	ChainConfig,
	ContentValidationError,
	DepositContent,
	DepositParams,
	ExecutionReport,
	Message,
	ProgressStep,
	ProgressUpdate,
	QuoteRequest,
	Route,
	SecretString,
	State,
	StepStatus,
	U256,
};

// Service layer
pub use bridge_service::{BridgeDepositAction, DepositError, PRIVATE_KEY_SETTING};

// Adapters
pub use bridge_adapters::{
	AcrossClient, BridgeClient, BridgeError, BridgeResult, ExecuteRequest, LocalWallet,
};

// Config
pub use bridge_config::{load_config, ChainRegistry, ConfigLoadError, Settings};

// Module aliases for advanced usage
pub mod types {
	pub use bridge_types::*;
}

pub mod config {
	pub use bridge_config::*;
}

pub mod adapters {
	pub use bridge_adapters::*;
}

pub mod service {
	pub use bridge_service::*;
}

pub mod mocks;

// Re-export external dependencies for downstream implementations
pub use async_trait;

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while assembling the plugin
#[derive(Error, Debug)]
pub enum BuildError {
	#[error("failed to load configuration: {0}")]
	Config(#[from] ConfigLoadError),

	#[error("failed to construct bridge client: {0}")]
	Bridge(#[from] BridgeError),
}

/// Builder for the BRIDGE_DEPOSIT action
///
/// Settings default to [`load_config`]; the bridge client defaults to an
/// [`AcrossClient`] wired with the registry's RPC endpoints.
#[derive(Default)]
pub struct PluginBuilder {
	settings: Option<Settings>,
	bridge: Option<Arc<dyn BridgeClient>>,
}

impl PluginBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	pub fn with_bridge(mut self, bridge: Arc<dyn BridgeClient>) -> Self {
		self.bridge = Some(bridge);
		self
	}

	pub fn build(self) -> Result<BridgeDepositAction, BuildError> {
		let settings = match self.settings {
			Some(settings) => settings,
			None => load_config()?,
		};
		let registry = ChainRegistry::from_settings(&settings);

		let bridge = match self.bridge {
			Some(bridge) => bridge,
			None => Arc::new(AcrossClient::new(
				settings.across.endpoint.clone(),
				&settings.across.integrator_id,
				registry.rpc_urls(),
				Duration::from_millis(settings.across.fill_poll_interval_ms),
			)?),
		};

		Ok(BridgeDepositAction::new(registry, bridge))
	}
}
