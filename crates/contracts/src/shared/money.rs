//! Money values and their default rendering.

use serde::{Deserialize, Serialize};

/// Amount together with its ISO currency code; always formatted as one unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

/// Formats a number with a space every three digits and a fixed number of
/// decimals (0 to 3, anything else falls back to 2).
///
/// ```
/// use contracts::shared::money::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let decimals = if decimals > 3 { 2 } else { decimals as usize };
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Default money token: grouped amount with two decimals followed by the
/// currency code, e.g. `1 234.50 USD`.
pub fn format_money(money: &Money) -> String {
    format!(
        "{} {}",
        format_number_with_decimals(money.amount, 2),
        money.currency
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(&Money::new(1234.5, "USD")), "1 234.50 USD");
        assert_eq!(format_money(&Money::new(1234567.89, "EUR")), "1 234 567.89 EUR");
        assert_eq!(format_money(&Money::new(0.0, "PLN")), "0.00 PLN");
        assert_eq!(format_money(&Money::new(-1234.56, "USD")), "-1 234.56 USD");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-100000.0, 0), "-100 000");
    }
}
