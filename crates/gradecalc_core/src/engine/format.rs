//! Display rounding and formatting.
//!
//! This is the only place grades are rounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept in displayed grades.
pub const DISPLAY_DECIMALS: u32 = 5;
/// Rendering of an absent grade.
pub const ABSENT_LABEL: &str = "N/A";

/// Rounds half away from zero to `DISPLAY_DECIMALS` places.
pub fn round_grade(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds once and renders without trailing zeros; absent renders as `N/A`.
pub fn format_grade(value: Option<Decimal>) -> String {
    match value {
        Some(value) => round_grade(value).normalize().to_string(),
        None => ABSENT_LABEL.to_string(),
    }
}
