//! Number formatting for the dashboard figures.
//!
//! Amounts are shown the way a browser's default number localization shows them:
//! comma grouping, at most three fraction digits, no trailing zeros.

/// Currency symbol prefixed to cash amounts.
pub const CURRENCY: &str = "₹";

/// Inserts thousands separators into a string of ASCII digits.
///
/// # Examples
/// ```
/// use finsight::format::group_thousands;
/// assert_eq!(group_thousands("1000"), "1,000");
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}

/// Formats an amount with grouping and up to three fraction digits.
///
/// # Examples
/// ```
/// use finsight::format::format_amount;
/// assert_eq!(format_amount(1234567.0), "1,234,567");
/// assert_eq!(format_amount(-2500.5), "-2,500.5");
/// assert_eq!(format_amount(0.1234), "0.123");
/// ```
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Formats an amount prefixed with the currency symbol.
pub fn format_currency(value: f64) -> String {
    format!("{}{}", CURRENCY, format_amount(value))
}

/// Formats the health score; whole scores carry no fraction.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.is_finite() {
        format!("{}", score as i64)
    } else {
        format_amount(score)
    }
}
