//! Progress events observed during quote execution
//!
//! The executing client reports one event per (step, status) observation.
//! Events are side observations only; the handler builds explorer links from
//! them but they drive no state transitions. The full sequence is also
//! returned in the [`ExecutionReport`] once execution completes, so callers
//! never need shared mutable state across the async boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of an in-flight transfer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStep {
	/// ERC-20 allowance granted to the spoke pool on the origin chain
	Approve,
	/// Deposit transaction on the origin chain
	Deposit,
	/// Fill transaction on the destination chain
	Fill,
}

impl fmt::Display for ProgressStep {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Approve => write!(f, "approval"),
			Self::Deposit => write!(f, "deposit"),
			Self::Fill => write!(f, "fill"),
		}
	}
}

/// Status of a step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StepStatus {
	TxPending,
	TxSuccess,
	TxReverted,
}

/// A single progress observation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
	pub step: ProgressStep,
	pub status: StepStatus,
	/// Transaction hash, present once the step's transaction landed
	pub tx_hash: Option<String>,
	/// Deposit identifier assigned by the origin spoke pool
	pub deposit_id: Option<String>,
	/// For fill events: whether cross-chain messages succeeded
	pub action_success: Option<bool>,
}

impl ProgressUpdate {
	/// A successful step observation carrying its transaction hash
	pub fn succeeded(step: ProgressStep, tx_hash: impl Into<String>) -> Self {
		Self {
			step,
			status: StepStatus::TxSuccess,
			tx_hash: Some(tx_hash.into()),
			deposit_id: None,
			action_success: None,
		}
	}
}

/// Everything observed while executing a quote
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
	/// All progress events in observation order
	pub events: Vec<ProgressUpdate>,
	/// Hash of the origin-chain deposit transaction
	pub deposit_tx_hash: Option<String>,
	/// Hash of the destination-chain fill transaction
	pub fill_tx_hash: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn step_labels_match_wire_names() {
		assert_eq!(ProgressStep::Approve.to_string(), "approval");
		assert_eq!(
			serde_json::to_string(&ProgressStep::Fill).unwrap(),
			"\"fill\""
		);
		assert_eq!(
			serde_json::to_string(&StepStatus::TxSuccess).unwrap(),
			"\"txSuccess\""
		);
	}

	#[test]
	fn succeeded_constructor_sets_status_and_hash() {
		let update = ProgressUpdate::succeeded(ProgressStep::Deposit, "0xabc");
		assert_eq!(update.status, StepStatus::TxSuccess);
		assert_eq!(update.tx_hash.as_deref(), Some("0xabc"));
		assert!(update.action_success.is_none());
	}
}
