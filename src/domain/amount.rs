//! Amount helpers
//!
//! Parsing, exact arithmetic and plain rendering for monetary values.
//! Amounts are plain `Decimal`s: no sign rules are enforced here, the
//! account operations decide what is allowed.
//!
//! `Decimal` holds a 96-bit mantissa with at most 28 fractional digits.
//! Plain `+`/`-` round results that need more digits and panic past the
//! range; the helpers here return `None` instead.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest mantissa a `Decimal` can hold (2^96 - 1)
const MAX_MANTISSA: u128 = 79_228_162_514_264_337_593_543_950_335;

/// Errors that can occur when reading an amount from text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Invalid amount format: {0}")]
    ParseError(String),
}

/// Parse an exact decimal amount from text.
///
/// Surrounding whitespace is ignored. Exponent notation is rejected, and so
/// is any input that `Decimal` could only hold by rounding away non-zero
/// digits.
///
/// # Example
/// ```
/// use bank_accounts::domain::amount::parse_amount;
/// use rust_decimal::Decimal;
///
/// let amount = parse_amount(" 1000.12345 ").unwrap();
/// assert_eq!(amount, Decimal::new(100012345, 5));
/// ```
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let trimmed = input.trim();
    if trimmed.contains(['e', 'E']) {
        return Err(AmountError::ParseError(format!(
            "{trimmed:?}: exponent notation is not supported"
        )));
    }

    let value = Decimal::from_str(trimmed)
        .map_err(|e| AmountError::ParseError(format!("{trimmed:?}: {e}")))?;

    // from_str rounds digits it cannot hold; only trailing zeros may go
    let significant_scale = trimmed
        .split_once('.')
        .map(|(_, fraction)| {
            fraction
                .trim_end_matches(['0', '_'])
                .chars()
                .filter(char::is_ascii_digit)
                .count()
        })
        .unwrap_or(0);
    if (value.scale() as usize) < significant_scale {
        return Err(AmountError::ParseError(format!(
            "{trimmed:?}: more digits than a decimal amount can hold"
        )));
    }

    Ok(value)
}

/// Exact `a + b`, or `None` when the sum does not fit a `Decimal`
/// without rounding.
pub fn exact_add(a: Decimal, b: Decimal) -> Option<Decimal> {
    let (a, b) = (a.normalize(), b.normalize());
    let mut scale = a.scale().max(b.scale());
    let mut mantissa = aligned_mantissa(a, scale)?.checked_add(aligned_mantissa(b, scale)?)?;

    while mantissa.unsigned_abs() > MAX_MANTISSA && scale > 0 && mantissa % 10 == 0 {
        mantissa /= 10;
        scale -= 1;
    }

    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}

/// Exact `a - b`, or `None` when the difference does not fit a `Decimal`
/// without rounding.
pub fn exact_sub(a: Decimal, b: Decimal) -> Option<Decimal> {
    exact_add(a, -b)
}

fn aligned_mantissa(value: Decimal, scale: u32) -> Option<i128> {
    10i128
        .checked_pow(scale - value.scale())?
        .checked_mul(value.mantissa())
}

/// Render a decimal without exponent and without trailing fractional zeros.
pub fn plain_string(value: Decimal) -> String {
    value.normalize().to_string()
}
