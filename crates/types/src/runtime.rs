//! Agent runtime seam
//!
//! The hosting conversational runtime composes state from recent messages,
//! runs the model generation step and stores secret settings. The plugin
//! only sees this trait; tests and downstream consumers supply their own
//! implementation.

use crate::models::SecretString;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the hosting runtime
#[derive(Error, Debug)]
pub enum RuntimeError {
	#[error("content generation failed: {reason}")]
	GenerationFailed { reason: String },

	#[error("state composition failed: {reason}")]
	StateCompositionFailed { reason: String },
}

/// An inbound chat message
#[derive(Debug, Clone)]
pub struct Message {
	/// Identifier of the user the message came from
	pub user_id: String,
	/// Raw message text
	pub text: String,
}

/// Conversation state composed by the runtime
#[derive(Debug, Clone, Default)]
pub struct State {
	/// Recent conversation rendered as prompt-ready text
	pub recent_messages: String,
}

/// Final or informational notification sent back to the caller
#[derive(Debug, Clone)]
pub struct ActionResponse {
	/// Human-readable summary
	pub text: String,
	/// Structured payload: `{success, ...}` or `{error}`
	pub content: Value,
}

/// Callback invoked with action responses
pub type ActionCallback = dyn Fn(ActionResponse) + Send + Sync;

/// Interface to the hosting agent runtime
#[async_trait]
pub trait AgentRuntime: Send + Sync {
	/// Read a configuration setting (e.g. `ACROSS_PRIVATE_KEY`)
	fn setting(&self, key: &str) -> Option<SecretString>;

	/// Compose conversation state for a message
	async fn compose_state(&self, message: &Message) -> Result<State, RuntimeError>;

	/// Run the model generation step over a rendered prompt context
	async fn generate(&self, context: &str) -> Result<String, RuntimeError>;
}
