//! U256 model for handling large integers as strings

/// U256 value represented as a decimal string to preserve precision
///
/// Used for on-chain amounts and fee proportions that might overflow
/// native integer types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct U256(pub String);

impl U256 {
	/// Create a new U256 from a string
	pub fn new(value: String) -> Self {
		Self(value)
	}

	/// Get the raw string value
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Try to parse as u128 (for smaller values)
	pub fn as_u128(&self) -> Result<u128, std::num::ParseIntError> {
		self.0.parse()
	}

	/// Check if the value is zero
	pub fn is_zero(&self) -> bool {
		!self.0.is_empty() && self.0.chars().all(|c| c == '0')
	}

	/// Validate that the string is a non-empty run of digits
	pub fn validate(&self) -> Result<(), String> {
		if self.0.is_empty() {
			return Err("U256 value cannot be empty".to_string());
		}

		if !self.0.chars().all(|c| c.is_ascii_digit()) {
			return Err("U256 value must contain only digits".to_string());
		}

		Ok(())
	}
}

impl std::fmt::Display for U256 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for U256 {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for U256 {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<u128> for U256 {
	fn from(value: u128) -> Self {
		Self(value.to_string())
	}
}

impl From<u64> for U256 {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

// Serialize/deserialize as a plain string, rejecting non-digit input
impl serde::Serialize for U256 {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> serde::Deserialize<'de> for U256 {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		use serde::Deserialize;
		let value = String::deserialize(deserializer)?;
		let u256 = Self(value);
		u256.validate().map_err(serde::de::Error::custom)?;
		Ok(u256)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_valid_amounts() {
		let val = U256::from("105263157");
		assert_eq!(val.as_u128().unwrap(), 105263157u128);
		assert!(!val.is_zero());
	}

	#[test]
	fn detects_zero() {
		assert!(U256::from("0").is_zero());
		assert!(U256::from("000").is_zero());
		assert!(!U256::from("10").is_zero());
	}

	#[test]
	fn rejects_non_digit_values() {
		assert!(U256::from("").validate().is_err());
		assert!(U256::from("12a4").validate().is_err());
		assert!(U256::from("-5").validate().is_err());
		assert!(U256::from("78905024308003").validate().is_ok());
	}

	#[test]
	fn deserialization_validates() {
		let ok: Result<U256, _> = serde_json::from_str("\"1000000\"");
		assert!(ok.is_ok());
		let bad: Result<U256, _> = serde_json::from_str("\"0xdead\"");
		assert!(bad.is_err());
	}
}
