//! Monetary display formatting.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as US dollars with two decimals and thousands separators,
/// e.g. `1234.5` -> `"$1,234.50"`, `-3.2` -> `"-$3.20"`.
///
/// Rounding applies to the exact value of the `f64`, half away from zero:
/// `0.125` -> `"$0.13"`, while `1.115` (stored as 1.11499...) -> `"$1.11"`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let cents = exact_cents(amount.abs()).unwrap_or_else(|| {
        // Beyond Decimal's range; the saturating cast clamps instead of wrapping.
        (amount.abs() * 100.0).round() as u128
    });
    let dollars = cents / 100;
    let remainder = cents % 100;

    format!("{sign}${}.{remainder:02}", group_thousands(dollars))
}

fn exact_cents(amount: f64) -> Option<u128> {
    Decimal::from_f64_retain(amount)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_u128()
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
