//! Weighted-mean primitive shared by every aggregation layer.
//!
//! # Invariants
//! - No rounding happens here; results keep full decimal precision.
//! - A zero-weight item is inert: it adds nothing to numerator or denominator.
//! - Zero total weight (including an empty input) yields `None`, never zero.

use rust_decimal::Decimal;

/// How a group treats members without a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Drop valueless members from both numerator and denominator.
    Skip,
    /// Count valueless members as the given value.
    Substitute(Decimal),
}

impl MissingPolicy {
    fn resolve(self, value: Option<Decimal>) -> Option<Decimal> {
        match (value, self) {
            (Some(value), _) => Some(value),
            (None, Self::Skip) => None,
            (None, Self::Substitute(fallback)) => Some(fallback),
        }
    }
}

/// Computes `sum(value * weight) / sum(weight)` over `(value, weight)` pairs.
///
/// Returns `None` when no member with positive weight survives `policy`.
pub fn weighted_mean<I>(items: I, policy: MissingPolicy) -> Option<Decimal>
where
    I: IntoIterator<Item = (Option<Decimal>, Decimal)>,
{
    let (numerator, denominator) = items
        .into_iter()
        .filter_map(|(value, weight)| {
            debug_assert!(!weight.is_sign_negative() || weight.is_zero());
            policy.resolve(value).map(|value| (value, weight))
        })
        .filter(|(_, weight)| !weight.is_zero())
        .fold((Decimal::ZERO, Decimal::ZERO), |(num, den), (value, weight)| {
            (num + value * weight, den + weight)
        });

    if denominator.is_zero() {
        return None;
    }
    Some(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::{weighted_mean, MissingPolicy};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn skip_policy_ignores_missing_values() {
        let mean = weighted_mean(
            [(Some(dec!(12)), dec!(1)), (None, dec!(5)), (Some(dec!(6)), dec!(2))],
            MissingPolicy::Skip,
        );
        assert_eq!(mean, Some(dec!(8)));
    }

    #[test]
    fn substitute_policy_counts_missing_values() {
        let mean = weighted_mean(
            [(Some(dec!(16)), dec!(1)), (None, dec!(1))],
            MissingPolicy::Substitute(Decimal::ZERO),
        );
        assert_eq!(mean, Some(dec!(8)));
    }

    #[test]
    fn empty_and_zero_weight_groups_are_absent() {
        let empty: [(Option<Decimal>, Decimal); 0] = [];
        assert_eq!(weighted_mean(empty, MissingPolicy::Skip), None);
        assert_eq!(
            weighted_mean([(Some(dec!(14)), dec!(0))], MissingPolicy::Skip),
            None
        );
        assert_eq!(
            weighted_mean([(None, dec!(2))], MissingPolicy::Skip),
            None
        );
    }

    #[test]
    fn zero_weight_member_is_inert() {
        let base = weighted_mean([(Some(dec!(11)), dec!(3))], MissingPolicy::Skip);
        let with_inert = weighted_mean(
            [(Some(dec!(11)), dec!(3)), (Some(dec!(0)), dec!(0))],
            MissingPolicy::Skip,
        );
        assert_eq!(base, with_inert);
    }

    #[test]
    fn repeating_decimals_keep_guard_digits() {
        let mean = weighted_mean(
            [(Some(dec!(10)), dec!(1)), (Some(dec!(11)), dec!(2))],
            MissingPolicy::Skip,
        )
        .unwrap();
        assert_eq!(mean.round_dp(10), dec!(10.6666666667));
    }
}
