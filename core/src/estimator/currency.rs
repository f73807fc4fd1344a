//! Brazilian Real formatting: `R$ 1.234,56`.

use crate::config::{AMOUNT_PLACEHOLDER, CURRENCY_SYMBOL};

/// Format an amount as BRL with two decimals.
///
/// Rounds half away from zero at the cent. Non-finite amounts come back as
/// the placeholder so a broken computation never shows "NaN".
pub fn format_brl(amount: f64) -> String {
    if !amount.is_finite() {
        return AMOUNT_PLACEHOLDER.to_string();
    }

    let cents = (amount.abs() * 100.0).round();
    let sign = if amount < 0.0 && cents > 0.0 { "-" } else { "" };

    // Digits come from the float itself: an integer cast would saturate past u64::MAX cents
    let digits = format!("{:03.0}", cents);
    let (whole, fraction) = digits.split_at(digits.len() - 2);

    format!(
        "{}{} {},{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(whole),
        fraction
    )
}

/// `"1234567"` -> `1.234.567`
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(35.0), "R$ 35,00");
        assert_eq!(format_brl(24.5), "R$ 24,50");
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
    }

    #[test]
    fn test_format_brl_negative_and_non_finite() {
        assert_eq!(format_brl(-1.0), "-R$ 1,00");
        assert_eq!(format_brl(-0.001), "R$ 0,00");
        assert_eq!(format_brl(f64::NAN), AMOUNT_PLACEHOLDER);
        assert_eq!(format_brl(f64::INFINITY), AMOUNT_PLACEHOLDER);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1.000");
        assert_eq!(group_thousands("123456789"), "123.456.789");
    }

    #[test]
    fn test_format_brl_beyond_u64_cents() {
        assert_eq!(format_brl(0.05), "R$ 0,05");
        assert_eq!(format_brl(2.5e17), "R$ 250.000.000.000.000.000,00");
        assert_eq!(format_brl(1e20), "R$ 100.000.000.000.000.000.000,00");
        assert_ne!(format_brl(1e20), format_brl(2.5e17));
    }
}
