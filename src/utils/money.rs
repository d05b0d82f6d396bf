//! Conversions between major-unit strings and integer minor units.
//!
//! All arithmetic in the pricing engine happens on `i64` minor units (cents).
//! Only the request boundary parses major units, and only the response
//! boundary formats them back.

/// Parse a validated major-unit amount (`"8"`, `"10.5"`, `"12,34"`) into minor units.
///
/// The conversion is exact: the fractional digits are padded to two places
/// rather than going through floating point. Returns `None` for anything that
/// is not a plain non-negative decimal with at most two fractional digits.
pub fn parse_major_units(value: &str) -> Option<i64> {
    let (whole, fraction) = match value.find(['.', ',']) {
        Some(idx) => (&value[..idx], Some(&value[idx + 1..])),
        None => (value, None),
    };
    if fraction.is_some_and(str::is_empty) {
        return None;
    }
    let fraction = fraction.unwrap_or_default();

    if whole.is_empty()
        || fraction.len() > 2
        || !whole.bytes().all(|b| b.is_ascii_digit())
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let whole: i64 = whole.parse().ok()?;
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    whole.checked_mul(100)?.checked_add(fraction)
}

/// Format minor units as a two-decimal major-unit string followed by the currency symbol.
pub fn format_minor_units(amount: i64, symbol: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}.{:02} {}", sign, abs / 100, abs % 100, symbol)
}

/// Format a distance in whole meters.
pub fn format_meters(meters: u64) -> String {
    format!("{} m", meters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_amounts() {
        assert_eq!(parse_major_units("8"), Some(800));
        assert_eq!(parse_major_units("100"), Some(10000));
        assert_eq!(parse_major_units("0"), Some(0));
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(parse_major_units("10.5"), Some(1050));
        assert_eq!(parse_major_units("10.05"), Some(1005));
        assert_eq!(parse_major_units("12,34"), Some(1234));
        // 0.29 * 100 is 28.999... in floating point
        assert_eq!(parse_major_units("0.29"), Some(29));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_major_units(""), None);
        assert_eq!(parse_major_units(".50"), None);
        assert_eq!(parse_major_units("1.234"), None);
        assert_eq!(parse_major_units("-5"), None);
        assert_eq!(parse_major_units("1e3"), None);
        assert_eq!(parse_major_units("1.2.3"), None);
        assert_eq!(parse_major_units("1."), None);
    }

    #[test]
    fn test_format_minor_units() {
        assert_eq!(format_minor_units(10190, "€"), "101.90 €");
        assert_eq!(format_minor_units(0, "€"), "0.00 €");
        assert_eq!(format_minor_units(5, "$"), "0.05 $");
        assert_eq!(format_minor_units(-550, "€"), "-5.50 €");
    }

    #[test]
    fn test_format_meters() {
        assert_eq!(format_meters(200), "200 m");
    }
}
