// 💲 Money formatting and cost parsing

/// Format an amount as dollars with exactly two decimals: 250 → "$250.00".
///
/// Rounds the exact binary value half away from zero, like `toFixed(2)`:
/// 0.015 is stored as 0.01499.. and prints "$0.01".
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${}", amount);
    }

    // Wide enough that the exact expansion of any f64 is printed without rounding
    let exact = format!("{:.1100}", amount.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((&exact, ""));

    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(2)).collect();
    if frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - 2;
    let whole = std::str::from_utf8(&digits[..split]).unwrap_or("0");
    let cents = std::str::from_utf8(&digits[split..]).unwrap_or("00");

    // avoid "-0.00"
    let is_zero = digits.iter().all(|d| *d == b'0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    format!("{}${}.{}", sign, whole, cents)
}

/// Add one to a string of ASCII digits, growing it on carry out
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Parse a cost the way a browser's `parseFloat` does: surrounding whitespace is
/// ignored and the longest numeric prefix wins ("12.5 bucks" → 12.5).
///
/// Returns `None` when there is no numeric prefix or the value is not finite.
pub fn parse_cost(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_two_decimals() {
        assert_eq!(format_currency(250.0), "$250.00");
        assert_eq!(format_currency(1200.0), "$1200.00");
        assert_eq!(format_currency(3.5), "$3.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_currency_rounds() {
        assert_eq!(format_currency(99.999), "$100.00");
        assert_eq!(format_currency(10.126), "$10.13");
        assert_eq!(format_currency(10.124), "$10.12");
    }

    #[test]
    fn test_currency_no_negative_zero() {
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(-0.0), "$0.00");
    }

    #[test]
    fn test_currency_rounds_exact_binary_value() {
        // 0.015 and 1.005 sit just below the tie in binary
        assert_eq!(format_currency(0.015), "$0.01");
        assert_eq!(format_currency(1.005), "$1.00");
        // 0.125 is an exact tie and rounds up
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(9.995), "$9.99");
        assert_eq!(format_currency(0.995), "$0.99");
        assert_eq!(format_currency(0.375), "$0.38");
    }

    #[test]
    fn test_currency_carries_into_whole_dollars() {
        assert_eq!(format_currency(999.999), "$1000.00");
        assert_eq!(format_currency(0.996), "$1.00");
        assert_eq!(format_currency(-2.5), "-$2.50");
    }

    #[test]
    fn test_currency_large_values_stay_finite() {
        let formatted = format_currency(1.7e308);
        assert!(formatted.starts_with("$1"));
        assert!(formatted.ends_with(".00"));
        assert!(!formatted.contains("inf"));
        assert_eq!(formatted.len(), "$".len() + 309 + ".00".len());
    }

    #[test]
    fn test_parse_cost_plain_numbers() {
        assert_eq!(parse_cost("250"), Some(250.0));
        assert_eq!(parse_cost(" 12.75 "), Some(12.75));
        assert_eq!(parse_cost(".5"), Some(0.5));
        assert_eq!(parse_cost("1e3"), Some(1000.0));
        assert_eq!(parse_cost("-4"), Some(-4.0));
    }

    #[test]
    fn test_parse_cost_numeric_prefix() {
        assert_eq!(parse_cost("12.5 bucks"), Some(12.5));
        assert_eq!(parse_cost("7e"), Some(7.0));
        assert_eq!(parse_cost("3.2.1"), Some(3.2));
    }

    #[test]
    fn test_parse_cost_rejects_non_numbers() {
        assert_eq!(parse_cost(""), None);
        assert_eq!(parse_cost("   "), None);
        assert_eq!(parse_cost("abc"), None);
        assert_eq!(parse_cost("NaN"), None);
        assert_eq!(parse_cost("."), None);
        assert_eq!(parse_cost("-"), None);
    }

    #[test]
    fn test_parse_cost_rejects_infinite() {
        assert_eq!(parse_cost("Infinity"), None);
        assert_eq!(parse_cost("1e400"), None);
    }
}
