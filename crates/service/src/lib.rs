//! Bridge Service
//!
//! Core logic of the BRIDGE_DEPOSIT action: amount adjustment, explorer
//! links, intent extraction plumbing and the handler orchestration.

pub mod amount;
pub mod deposit;
pub mod explorer;
pub mod extractor;

pub use amount::{adjust_input_for_output, parse_units, AmountError, FEE_SCALE};
pub use deposit::{BridgeDepositAction, DepositError, PRIVATE_KEY_SETTING};
pub use explorer::{transaction_url, ExplorerError};
pub use extractor::{compose_context, extract_json_block, ExtractionError, DEPOSIT_TEMPLATE};
