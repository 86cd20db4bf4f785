/// Enough fractional digits to print any score-sized `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 60;

/// Rounds `value` to a whole number of tenths.
///
/// The decision is made on the exact binary value rather than on `value * 10.0`,
/// so the double nearest 4.85 (which sits just below it) rounds down to 48.
/// Exact ties round away from zero.
pub fn round_tenths(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }

    let expanded = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = expanded
        .split_once('.')
        .unwrap_or((expanded.as_str(), ""));
    let whole: i64 = whole.parse().unwrap_or_default();

    let mut digits = fraction.bytes().map(|digit| i64::from(digit - b'0'));
    let tenths_digit = digits.next().unwrap_or(0);
    let hundredths_digit = digits.next().unwrap_or(0);

    let mut tenths = whole * 10 + tenths_digit;
    if hundredths_digit >= 5 {
        tenths += 1;
    }

    if value.is_sign_negative() {
        -tenths
    } else {
        tenths
    }
}

/// Renders a tenths count as a one-decimal string, e.g. `46` -> `"4.6"`.
pub fn format_tenths(tenths: i64) -> String {
    let sign = if tenths < 0 { "-" } else { "" };
    let magnitude = tenths.unsigned_abs();
    format!("{sign}{}.{}", magnitude / 10, magnitude % 10)
}

/// Numeric value of a one-decimal string produced by [`format_tenths`].
pub(crate) fn tenths_value(tenths: i64) -> f64 {
    // Division is correctly rounded, so this equals parsing the formatted string.
    tenths as f64 / 10.0
}
