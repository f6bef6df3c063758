use super::error::FormatError;
use super::locale::Locale;

/// Largest magnitude formatted exactly; past 2^53 - 1 an `f64` can no longer
/// represent every kopeck.
const MAX_AMOUNT: f64 = 9_007_199_254_740_991.0;

/// Renders an amount with the Russian ruble conventions, e.g. `1 234,50 ₽`.
pub fn format_currency(amount: f64) -> Result<String, FormatError> {
    format_currency_with(&Locale::russian(), amount)
}

/// Renders an amount with the given locale profile. Rounds half away from
/// zero to two fraction digits. Non-finite and out-of-range amounts fail
/// with [`FormatError::InvalidAmount`].
pub fn format_currency_with(locale: &Locale, amount: f64) -> Result<String, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::invalid_amount(format!(
            "expected a finite number, got {amount}"
        )));
    }
    if amount.abs() > MAX_AMOUNT {
        return Err(FormatError::invalid_amount(format!(
            "{amount} is beyond the exactly representable range"
        )));
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;

    let grouped = group_digits(units, locale.group_separator);

    let mut out = String::with_capacity(grouped.len() + locale.currency_symbol.len() + 5);
    if amount < 0.0 && cents != 0 {
        out.push('-');
    }
    if locale.symbol_leads {
        out.push_str(locale.currency_symbol);
    }
    out.push_str(&grouped);
    out.push(locale.decimal_separator);
    out.push_str(&format!("{fraction:02}"));
    if !locale.symbol_leads {
        out.push('\u{a0}');
        out.push_str(locale.currency_symbol);
    }
    Ok(out)
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars() -> Locale {
        Locale {
            tag: "en-US",
            group_separator: ',',
            decimal_separator: '.',
            currency_symbol: "$",
            symbol_leads: true,
            date_pattern: "%m/%d/%Y",
        }
    }

    #[test]
    fn test_russian_ruble_rendering() {
        assert_eq!(format_currency(1234.5).unwrap(), "1\u{a0}234,50\u{a0}₽");
    }

    #[test]
    fn test_zero_rendering() {
        assert_eq!(format_currency(0.0).unwrap(), "0,00\u{a0}₽");
    }

    #[test]
    fn test_negative_amounts_carry_leading_sign() {
        assert_eq!(format_currency(-1234.5).unwrap(), "-1\u{a0}234,50\u{a0}₽");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_currency(-0.0).unwrap(), "0,00\u{a0}₽");
        assert_eq!(format_currency(-0.001).unwrap(), "0,00\u{a0}₽");
    }

    #[test]
    fn test_grouping_steps() {
        assert_eq!(format_currency(999.0).unwrap(), "999,00\u{a0}₽");
        assert_eq!(format_currency(1000.0).unwrap(), "1\u{a0}000,00\u{a0}₽");
        assert_eq!(
            format_currency(1_000_000.0).unwrap(),
            "1\u{a0}000\u{a0}000,00\u{a0}₽"
        );
    }

    #[test]
    fn test_kopeck_rendering() {
        assert_eq!(format_currency(12.34).unwrap(), "12,34\u{a0}₽");
        assert_eq!(format_currency(0.5).unwrap(), "0,50\u{a0}₽");
        assert_eq!(format_currency(7.0).unwrap(), "7,00\u{a0}₽");
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        assert!(format_currency(f64::NAN).is_err());
        assert!(format_currency(f64::INFINITY).is_err());
        assert!(format_currency(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_out_of_range_amounts_are_rejected() {
        assert!(format_currency(1e16).is_err());
        assert!(format_currency(-1e16).is_err());
    }

    #[test]
    fn test_deterministic_for_equal_input() {
        assert_eq!(
            format_currency(98_765.43).unwrap(),
            format_currency(98_765.43).unwrap()
        );
    }

    #[test]
    fn test_custom_locale_profile() {
        let locale = dollars();
        assert_eq!(format_currency_with(&locale, 1234.5).unwrap(), "$1,234.50");
        assert_eq!(
            format_currency_with(&locale, -1234.5).unwrap(),
            "-$1,234.50"
        );
    }
}
