//! Deposit intent extracted from a chat message
//!
//! The extraction step returns loosely structured JSON; validation turns it
//! into a [`DepositContent`] or an explicit error, so downstream code never
//! sees a half-formed intent.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Structural validation errors for extracted deposit content
#[derive(Error, Debug)]
pub enum ContentValidationError {
	#[error("extracted content is not a JSON object")]
	NotAnObject,

	#[error("missing required field: {field}")]
	MissingField { field: &'static str },

	#[error("invalid type for field {field}: expected {expected}")]
	InvalidFieldType {
		field: &'static str,
		expected: &'static str,
	},

	#[error("invalid recipient address: {value}")]
	InvalidRecipient { value: String },
}

/// A validated bridge deposit request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DepositContent {
	/// Hex-prefixed recipient address on the destination chain
	pub recipient: String,
	/// Human-readable amount, e.g. "100" or "0.5"
	pub amount: String,
	/// Source chain lookup name
	pub source_chain: String,
	/// Destination chain lookup name
	pub destination_chain: String,
	/// Token symbol to bridge
	pub token_name: String,
}

impl DepositContent {
	/// Validate raw extracted content into a deposit intent
	///
	/// Checks presence and types only; whether the chains and token are
	/// actually supported is decided by the registry lookups downstream.
	pub fn validate(raw: &Value) -> Result<Self, ContentValidationError> {
		let obj = raw
			.as_object()
			.ok_or(ContentValidationError::NotAnObject)?;

		let recipient = require_string(obj, "recipient")?;
		if !is_hex_address(recipient) {
			return Err(ContentValidationError::InvalidRecipient {
				value: recipient.to_string(),
			});
		}

		// The model returns the amount as either a string or a bare number
		let amount = match obj.get("amount") {
			Some(Value::String(s)) => s.clone(),
			Some(Value::Number(n)) => n.to_string(),
			Some(_) => {
				return Err(ContentValidationError::InvalidFieldType {
					field: "amount",
					expected: "string or number",
				})
			},
			None => return Err(ContentValidationError::MissingField { field: "amount" }),
		};

		Ok(Self {
			recipient: recipient.to_string(),
			amount,
			source_chain: require_string(obj, "sourceChain")?.to_string(),
			destination_chain: require_string(obj, "destinationChain")?.to_string(),
			token_name: require_string(obj, "tokenName")?.to_string(),
		})
	}
}

fn require_string<'a>(
	obj: &'a serde_json::Map<String, Value>,
	field: &'static str,
) -> Result<&'a str, ContentValidationError> {
	match obj.get(field) {
		Some(Value::String(s)) => Ok(s),
		Some(_) => Err(ContentValidationError::InvalidFieldType {
			field,
			expected: "string",
		}),
		None => Err(ContentValidationError::MissingField { field }),
	}
}

/// `^0x[0-9a-fA-F]+$`
fn is_hex_address(value: &str) -> bool {
	value
		.strip_prefix("0x")
		.map(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_hexdigit()))
		.unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn valid_raw() -> Value {
		json!({
			"recipient": "0xabc123",
			"amount": "10",
			"sourceChain": "arbitrum",
			"destinationChain": "base",
			"tokenName": "USDC"
		})
	}

	#[test]
	fn accepts_well_formed_content() {
		let content = DepositContent::validate(&valid_raw()).unwrap();
		assert_eq!(content.recipient, "0xabc123");
		assert_eq!(content.amount, "10");
		assert_eq!(content.source_chain, "arbitrum");
		assert_eq!(content.destination_chain, "base");
		assert_eq!(content.token_name, "USDC");
	}

	#[test]
	fn accepts_numeric_amount() {
		let mut raw = valid_raw();
		raw["amount"] = json!(100);
		let content = DepositContent::validate(&raw).unwrap();
		assert_eq!(content.amount, "100");
	}

	#[test]
	fn rejects_non_hex_recipient() {
		let mut raw = valid_raw();
		raw["recipient"] = json!("not-hex");
		let err = DepositContent::validate(&raw).unwrap_err();
		assert!(matches!(
			err,
			ContentValidationError::InvalidRecipient { .. }
		));
	}

	#[test]
	fn rejects_bare_0x_recipient() {
		let mut raw = valid_raw();
		raw["recipient"] = json!("0x");
		assert!(DepositContent::validate(&raw).is_err());
	}

	#[test]
	fn rejects_missing_fields() {
		let mut raw = valid_raw();
		raw.as_object_mut().unwrap().remove("tokenName");
		let err = DepositContent::validate(&raw).unwrap_err();
		assert!(matches!(
			err,
			ContentValidationError::MissingField { field: "tokenName" }
		));
	}

	#[test]
	fn rejects_non_string_chain_names() {
		let mut raw = valid_raw();
		raw["sourceChain"] = json!(42161);
		let err = DepositContent::validate(&raw).unwrap_err();
		assert!(matches!(
			err,
			ContentValidationError::InvalidFieldType {
				field: "sourceChain",
				..
			}
		));
	}

	#[test]
	fn rejects_non_object_payload() {
		let err = DepositContent::validate(&json!("null")).unwrap_err();
		assert!(matches!(err, ContentValidationError::NotAnObject));
	}
}
