//! Intent extraction plumbing
//!
//! The model generation step is external; this module owns the prompt
//! template, context rendering and the parsing of the model's fenced JSON
//! reply into a raw value for validation.

use bridge_types::State;
use serde_json::Value;
use thiserror::Error;

/// Extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
	#[error("model reply contains no JSON object")]
	MissingJsonBlock,

	#[error("model reply is not valid JSON: {0}")]
	Malformed(#[from] serde_json::Error),
}

/// Prompt template for the extraction step
///
/// The model is asked for a fenced JSON block with exactly the fields the
/// validator checks.
pub const DEPOSIT_TEMPLATE: &str = r#"Respond with a JSON markdown block containing only the extracted values. Use null for any values that cannot be determined.

Example response:
```json
{
    "recipient": "0x2badda48c062e861ef17a96a806c451fd296a49f45b272dee17f85b0e32663fd",
    "amount": "1000",
    "sourceChain": "arbitrum",
    "destinationChain": "base",
    "tokenName": "USDC"
}
```

{{recentMessages}}

Given the recent messages, extract the following information about the requested token transfer:
- Recipient wallet address
- Amount to transfer
- source chain id
- destination chain id
- token name or token address

Respond with a JSON markdown block containing only the extracted values."#;

/// Render the extraction prompt for the composed conversation state
pub fn compose_context(state: &State) -> String {
	DEPOSIT_TEMPLATE.replace("{{recentMessages}}", &state.recent_messages)
}

/// Parse the model's reply into a raw JSON value
///
/// Accepts a ```json fenced block, a bare fenced block, or a reply that is
/// itself a JSON document.
pub fn extract_json_block(reply: &str) -> Result<Value, ExtractionError> {
	let candidate = fenced_block(reply).unwrap_or_else(|| reply.trim());
	if candidate.is_empty() {
		return Err(ExtractionError::MissingJsonBlock);
	}

	Ok(serde_json::from_str(candidate)?)
}

fn fenced_block(reply: &str) -> Option<&str> {
	let after_fence = match reply.split_once("```json") {
		Some((_, rest)) => rest,
		None => reply.split_once("```")?.1,
	};
	let (block, _) = after_fence.split_once("```")?;
	Some(block.trim())
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn template_has_placeholder_and_fields() {
		assert!(DEPOSIT_TEMPLATE.contains("{{recentMessages}}"));
		for field in ["recipient", "amount", "sourceChain", "destinationChain", "tokenName"] {
			assert!(DEPOSIT_TEMPLATE.contains(field), "missing field {}", field);
		}
	}

	#[test]
	fn context_substitutes_recent_messages() {
		let state = State {
			recent_messages: "user: bridge 10 USDC to base".to_string(),
		};
		let context = compose_context(&state);
		assert!(context.contains("user: bridge 10 USDC to base"));
		assert!(!context.contains("{{recentMessages}}"));
	}

	#[test]
	fn parses_json_fenced_reply() {
		let reply = "Here you go:\n```json\n{\"recipient\": \"0xabc\", \"amount\": \"10\"}\n```\n";
		let value = extract_json_block(reply).unwrap();
		assert_eq!(value["recipient"], json!("0xabc"));
	}

	#[test]
	fn parses_bare_fenced_reply() {
		let reply = "```\n{\"amount\": 5}\n```";
		let value = extract_json_block(reply).unwrap();
		assert_eq!(value["amount"], json!(5));
	}

	#[test]
	fn parses_unfenced_json_reply() {
		let value = extract_json_block("  {\"amount\": \"1\"}  ").unwrap();
		assert_eq!(value["amount"], json!("1"));
	}

	#[test]
	fn rejects_non_json_reply() {
		assert!(extract_json_block("I cannot determine the values").is_err());
		assert!(extract_json_block("").is_err());
	}
}
