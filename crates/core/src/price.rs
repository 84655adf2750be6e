//! Price conversion between decimal strings and integer cents.
//!
//! The registry CSV carries prices as decimal strings ("12.50"). All
//! persisted prices are integer cents, so the conversion multiplies by
//! 100 and truncates any digits beyond the second decimal place. Done
//! as string arithmetic to avoid float rounding on values like 0.29.

use crate::error::CoreError;

/// Parse a decimal price string into integer cents, truncating past two
/// decimal places. Empty or whitespace-only input means a missing price
/// and parses as 0.
pub fn parse_price_cents(raw: &str) -> Result<i64, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }

    let invalid = || CoreError::Validation(format!("invalid price: '{raw}'"));

    // Strip the sign first so the fraction carries it too ("-12.50" is
    // -1250, not -1200 + 50).
    let (sign, magnitude) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw),
    };

    let (units, fraction) = match magnitude.split_once('.') {
        Some((u, f)) => (u, f),
        None => (magnitude, ""),
    };

    if units.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }

    let units: i64 = if units.is_empty() {
        0
    } else {
        units.parse().map_err(|_| invalid())?
    };
    if units < 0 {
        // A second '-' after the one already stripped.
        return Err(invalid());
    }

    // Keep at most two fractional digits, right-padded with zeros.
    let mut cents: i64 = 0;
    for (i, c) in fraction.chars().take(2).enumerate() {
        let d = c.to_digit(10).ok_or_else(invalid)? as i64;
        cents += d * if i == 0 { 10 } else { 1 };
    }
    if fraction.chars().skip(2).any(|c| !c.is_ascii_digit()) {
        return Err(invalid());
    }

    Ok(sign * (units * 100 + cents))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_number() {
        assert_eq!(parse_price_cents("12").unwrap(), 1200);
    }

    #[test]
    fn two_decimals() {
        assert_eq!(parse_price_cents("12.50").unwrap(), 1250);
    }

    #[test]
    fn one_decimal_pads() {
        assert_eq!(parse_price_cents("12.5").unwrap(), 1250);
    }

    #[test]
    fn extra_decimals_truncate() {
        assert_eq!(parse_price_cents("12.509").unwrap(), 1250);
        assert_eq!(parse_price_cents("0.999").unwrap(), 99);
    }

    #[test]
    fn no_float_drift() {
        // 0.29 * 100 is 28.999... in f64; string arithmetic keeps it 29.
        assert_eq!(parse_price_cents("0.29").unwrap(), 29);
    }

    #[test]
    fn negative_prices_keep_their_sign_on_the_fraction() {
        assert_eq!(parse_price_cents("-12.50").unwrap(), -1250);
        assert_eq!(parse_price_cents("-0.29").unwrap(), -29);
        assert_eq!(parse_price_cents("-12").unwrap(), -1200);
    }

    #[test]
    fn empty_defaults_to_zero() {
        assert_eq!(parse_price_cents("").unwrap(), 0);
        assert_eq!(parse_price_cents("   ").unwrap(), 0);
    }

    #[test]
    fn garbage_rejected() {
        assert!(parse_price_cents("abc").is_err());
        assert!(parse_price_cents("12.x5").is_err());
        assert!(parse_price_cents(".").is_err());
    }
}
