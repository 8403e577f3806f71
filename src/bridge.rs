//! Fee-adjusted bridge conversion quotes.

use rust_decimal::Decimal;

use crate::rates::PoolRates;

/// Default bridge fee multiplier: the spot rate less a 2.5% fee.
pub const DEFAULT_FEE_MULTIPLIER: Decimal = Decimal::from_parts(975, 0, 0, false, 3);

/// Conversion direction through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    AToB,
    BToA,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeQuote {
    /// Spot rate with the fee multiplier applied.
    pub rate: Decimal,
    /// Converted amount, rounded to the destination display precision.
    pub output: Decimal,
}

/// Pure function of the already-computed rates, the input amount and the
/// fee multiplier; no state is read or kept.
pub fn quote(
    rates: &PoolRates,
    direction: Direction,
    amount: Decimal,
    fee_multiplier: Decimal,
    output_precision: u32,
) -> BridgeQuote {
    let base = match direction {
        Direction::AToB => rates.rate_a_to_b,
        Direction::BToA => rates.rate_b_to_a,
    };
    let rate = base * fee_multiplier;
    BridgeQuote {
        rate,
        output: (amount * rate).round_dp(output_precision),
    }
}
