//! Spot rate math over exact decimals.
//!
//! Balances are parsed out of their string form into `rust_decimal`
//! values (28 significant digits, no binary floating point), so a rate
//! like 1/3 rounds at the decimal scale instead of drifting in base-2.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::RateError;
use crate::fetcher::PoolRecord;

/// Rates for one pool snapshot. Recomputed on every fetch, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolRates {
    pub amount_a: Decimal,
    pub amount_b: Decimal,
    /// B per A
    pub rate_a_to_b: Decimal,
    /// A per B
    pub rate_b_to_a: Decimal,
}

impl PoolRates {
    /// Constant product k = amount_a * amount_b. Informational only.
    pub fn constant_product(&self) -> Decimal {
        self.amount_a * self.amount_b
    }
}

/// Convert an integer base-unit balance into a decimal amount using the
/// asset's precision (power-of-ten divisor).
pub fn normalize(raw: &str, field: &'static str, precision: u32) -> Result<Decimal, RateError> {
    if precision > 28 {
        return Err(RateError::UnsupportedPrecision(precision));
    }
    let units = Decimal::from_str(raw).map_err(|_| RateError::InvalidBalance {
        field,
        value: raw.to_string(),
    })?;
    // 10^-precision as an exact decimal
    Ok(units * Decimal::new(1, precision))
}

/// Both directional spot rates for the pool. A side normalizing to zero
/// makes the rates undefined and is reported as such, not as a division
/// error.
pub fn calculate(
    record: &PoolRecord,
    precision_a: u32,
    precision_b: u32,
) -> Result<PoolRates, RateError> {
    let amount_a = normalize(&record.balance_a(), "balance_a", precision_a)?;
    let amount_b = normalize(&record.balance_b(), "balance_b", precision_b)?;

    if amount_a.is_zero() {
        return Err(RateError::ZeroBalance("balance_a"));
    }
    if amount_b.is_zero() {
        return Err(RateError::ZeroBalance("balance_b"));
    }

    Ok(PoolRates {
        rate_a_to_b: amount_b / amount_a,
        rate_b_to_a: amount_a / amount_b,
        amount_a,
        amount_b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(balance_a: &str, balance_b: &str) -> PoolRecord {
        PoolRecord::new(json!({
            "asset_a": "1.3.6268",
            "asset_b": "1.3.6574",
            "balance_a": balance_a,
            "balance_b": balance_b,
        }))
    }

    #[test]
    fn test_normalize_applies_precision() {
        let amount = normalize("123450000", "balance_a", 4).unwrap();
        assert_eq!(amount, Decimal::from_str("12345").unwrap());
        assert_eq!(amount.to_string(), "12345.0000");
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        let err = normalize("not-a-number", "balance_a", 4).unwrap_err();
        assert_eq!(
            err,
            RateError::InvalidBalance {
                field: "balance_a",
                value: "not-a-number".to_string(),
            }
        );
    }

    #[test]
    fn test_normalize_rejects_oversized_precision() {
        assert_eq!(
            normalize("1000", "balance_a", 29).unwrap_err(),
            RateError::UnsupportedPrecision(29)
        );
    }

    #[test]
    fn test_asymmetric_precisions() {
        // a = 1000 / 10^4 = 0.1, b = 1000 / 10^2 = 10
        let rates = calculate(&record("1000", "1000"), 4, 2).unwrap();
        assert_eq!(rates.amount_a, Decimal::from_str("0.1").unwrap());
        assert_eq!(rates.amount_b, Decimal::from_str("10").unwrap());
        assert_eq!(rates.rate_a_to_b, Decimal::from_str("100").unwrap());
        assert_eq!(rates.rate_b_to_a, Decimal::from_str("0.01").unwrap());
    }

    #[test]
    fn test_rates_are_inverse() {
        let rates = calculate(&record("7312940551", "94382719"), 4, 2).unwrap();
        let product = rates.rate_a_to_b * rates.rate_b_to_a;
        let drift = (product - Decimal::ONE).abs();
        assert!(drift < Decimal::new(1, 20), "drift {drift}");
    }

    #[test]
    fn test_zero_side_is_undefined() {
        assert_eq!(
            calculate(&record("0", "1000"), 4, 2).unwrap_err(),
            RateError::ZeroBalance("balance_a")
        );
        assert_eq!(
            calculate(&record("1000", "0"), 4, 2).unwrap_err(),
            RateError::ZeroBalance("balance_b")
        );
    }

    #[test]
    fn test_balance_beyond_u64_range() {
        // 2^64 is about 1.8e19; this normalizes to exactly 2^64
        let rates = calculate(&record("184467440737095516160000", "1000"), 4, 2).unwrap();
        assert_eq!(
            rates.amount_a,
            Decimal::from_str("18446744073709551616").unwrap()
        );
    }

    #[test]
    fn test_constant_product() {
        let rates = calculate(&record("1000", "1000"), 4, 2).unwrap();
        assert_eq!(rates.constant_product(), Decimal::ONE);
    }
}
