//! Amount conversion and relay-fee adjustment
//!
//! All arithmetic is exact-integer over `alloy` U256 values; fee
//! proportions are fixed-point integers scaled by 1e18.

use alloy::primitives::U256 as EvmU256;
use thiserror::Error;

/// Fixed-point scale: 1e18 represents 100%
pub const FEE_SCALE: EvmU256 = EvmU256::from_limbs([1_000_000_000_000_000_000u64, 0, 0, 0]);

/// Amount computation errors
#[derive(Error, Debug)]
pub enum AmountError {
	#[error("invalid fee fraction {pct}: exceeds 1e18 (100%)")]
	FeeExceedsScale { pct: String },

	#[error("invalid fee fraction: 100% fee leaves a zero divisor")]
	ZeroDivisor,

	#[error("amount arithmetic overflowed")]
	Overflow,

	#[error("invalid amount {value}: {reason}")]
	InvalidAmount { value: String, reason: String },
}

/// Compute the input required so that `output_amount` survives the fee
///
/// With `fee_pct` the relay fee as a fraction scaled by 1e18, the input `I`
/// must satisfy `I - I * fee_pct / 1e18 = O`, i.e.
/// `I = O * 1e18 / (1e18 - fee_pct)`. Multiply-then-divide preserves
/// precision; the result truncates toward zero.
pub fn adjust_input_for_output(
	output_amount: EvmU256,
	fee_pct: EvmU256,
) -> Result<EvmU256, AmountError> {
	if fee_pct > FEE_SCALE {
		return Err(AmountError::FeeExceedsScale {
			pct: fee_pct.to_string(),
		});
	}
	if fee_pct == FEE_SCALE {
		return Err(AmountError::ZeroDivisor);
	}

	let numerator = output_amount
		.checked_mul(FEE_SCALE)
		.ok_or(AmountError::Overflow)?;

	Ok(numerator / (FEE_SCALE - fee_pct))
}

/// Convert a human-readable decimal amount into base units
///
/// `parse_units("1.5", 6)` is `1500000`. The fractional part must not be
/// longer than `decimals`; sub-unit precision would silently truncate
/// on-chain otherwise.
pub fn parse_units(amount: &str, decimals: u8) -> Result<EvmU256, AmountError> {
	let trimmed = amount.trim();
	if trimmed.is_empty() {
		return Err(invalid(amount, "empty amount"));
	}

	let (integer, fraction) = match trimmed.split_once('.') {
		Some((i, f)) => (i, f),
		None => (trimmed, ""),
	};

	if integer.is_empty() && fraction.is_empty() {
		return Err(invalid(amount, "no digits"));
	}
	if !integer.chars().all(|c| c.is_ascii_digit())
		|| !fraction.chars().all(|c| c.is_ascii_digit())
	{
		return Err(invalid(amount, "not a decimal number"));
	}
	if fraction.len() > decimals as usize {
		return Err(invalid(
			amount,
			&format!("more than {} decimal places", decimals),
		));
	}

	let scale = EvmU256::from(10u64)
		.checked_pow(EvmU256::from(decimals))
		.ok_or(AmountError::Overflow)?;

	let integer_part = if integer.is_empty() {
		EvmU256::ZERO
	} else {
		EvmU256::from_str_radix(integer, 10).map_err(|e| invalid(amount, &e.to_string()))?
	};

	let fraction_part = if fraction.is_empty() {
		EvmU256::ZERO
	} else {
		let padding = EvmU256::from(10u64)
			.checked_pow(EvmU256::from(decimals as usize - fraction.len()))
			.ok_or(AmountError::Overflow)?;
		EvmU256::from_str_radix(fraction, 10)
			.map_err(|e| invalid(amount, &e.to_string()))?
			.checked_mul(padding)
			.ok_or(AmountError::Overflow)?
	};

	integer_part
		.checked_mul(scale)
		.and_then(|v| v.checked_add(fraction_part))
		.ok_or(AmountError::Overflow)
}

fn invalid(value: &str, reason: &str) -> AmountError {
	AmountError::InvalidAmount {
		value: value.to_string(),
		reason: reason.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn u(value: u128) -> EvmU256 {
		EvmU256::from(value)
	}

	#[test]
	fn zero_fee_is_identity() {
		assert_eq!(adjust_input_for_output(u(100), u(0)).unwrap(), u(100));
	}

	#[test]
	fn five_percent_fee_from_spec_example() {
		// 100 * 1e18 / (1e18 - 5e16) = 105.26..., truncated
		let fee = u(50_000_000_000_000_000);
		assert_eq!(adjust_input_for_output(u(100), fee).unwrap(), u(105));
		assert_eq!(
			adjust_input_for_output(u(100_000_000), fee).unwrap(),
			u(105_263_157)
		);
	}

	#[test]
	fn adjustment_round_trips_within_one_unit() {
		let fees = [
			u(0),
			u(155_024_308_002),
			u(78_905_024_308_003),
			u(50_000_000_000_000_000),
			u(999_999_999_999_999_999),
		];
		for fee in fees {
			for output in [u(1), u(100), u(1_000_000), u(123_456_789_012_345_678)] {
				let input = adjust_input_for_output(output, fee).unwrap();
				let received = input * (FEE_SCALE - fee) / FEE_SCALE;
				// Truncating both divisions can land one unit either side
				// of the requested output
				let difference = received.abs_diff(output);
				assert!(
					difference <= u(1),
					"fee {} output {} received {}",
					fee,
					output,
					received
				);
			}
		}
	}

	#[test]
	fn rejects_fee_at_or_above_scale() {
		let err = adjust_input_for_output(u(100), FEE_SCALE).unwrap_err();
		assert!(matches!(err, AmountError::ZeroDivisor));

		let above = FEE_SCALE + u(1);
		let err = adjust_input_for_output(u(100), above).unwrap_err();
		assert!(matches!(err, AmountError::FeeExceedsScale { .. }));
	}

	#[test]
	fn parse_units_whole_and_fractional() {
		assert_eq!(parse_units("100", 6).unwrap(), u(100_000_000));
		assert_eq!(parse_units("1.5", 6).unwrap(), u(1_500_000));
		assert_eq!(parse_units("0.000001", 6).unwrap(), u(1));
		assert_eq!(parse_units(".5", 2).unwrap(), u(50));
		assert_eq!(parse_units("69", 18).unwrap(), u(69_000_000_000_000_000_000));
	}

	#[test]
	fn parse_units_rejects_bad_input() {
		assert!(parse_units("", 6).is_err());
		assert!(parse_units(" ", 6).is_err());
		assert!(parse_units(".", 6).is_err());
		assert!(parse_units("1,5", 6).is_err());
		assert!(parse_units("-1", 6).is_err());
		assert!(parse_units("0.1234567", 6).is_err());
	}

	#[test]
	fn fee_scale_is_1e18() {
		assert_eq!(FEE_SCALE.to_string(), "1000000000000000000");
	}
}
