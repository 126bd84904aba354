//! Bridge Types
//!
//! Shared models and traits for the bridge deposit plugin.
//! This crate contains all domain models organized by business entity.

pub mod deposit;
pub mod models;
pub mod progress;
pub mod quotes;
pub mod runtime;

// Re-export serde_json for convenience
pub use serde_json;

// Re-export commonly used types for convenience
pub use deposit::{ContentValidationError, DepositContent};

pub use models::{ChainConfig, ChainDescriptor, SecretString, TokenConfig, U256};

pub use progress::{ExecutionReport, ProgressStep, ProgressUpdate, StepStatus};

pub use quotes::{BridgeQuote, DepositParams, FeeComponent, QuoteFees, QuoteRequest, Route};

pub use runtime::{ActionCallback, ActionResponse, AgentRuntime, Message, RuntimeError, State};
