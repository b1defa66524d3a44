//! Cost Display Utilities
//!
//! Rounding and formatting helpers for presenting a cost record. The
//! calculator never calls these; they exist for whoever renders the numbers.

use crate::core::cost::rates::currency_symbol;
use crate::core::cost::types::Currency;

/// Round to the nearest integer, halves towards positive infinity
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Insert `,` every three digits, e.g. `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Format an amount as whole currency units, e.g. `£245,700`
pub fn format_money(amount: f64, currency: Currency) -> String {
    let rounded = round_half_up(amount);
    let symbol = currency_symbol(currency);
    let grouped = group_thousands(rounded.unsigned_abs());

    if rounded < 0 {
        format!("-{}{}", symbol, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    }
}

/// Format an hourly rate as whole currency units, e.g. `£22`
pub fn format_hourly(rate: f64, currency: Currency) -> String {
    format_money(rate, currency)
}

/// Format a whole percentage, e.g. `70%`
pub fn format_percent(percent: i64) -> String {
    format!("{}%", percent)
}

/// Label for outsourced cells whose cost is bundled into the outsourced rate
pub const INCLUDED: &str = "Included";
