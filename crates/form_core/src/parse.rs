//! Parsing and formatting shared by the controllers and the rule builder.
//!
//! Controllers read numbers leniently, the way a page script reads a field:
//! leading whitespace is skipped and trailing junk after a number is
//! ignored, so `"12px"` reads as 12. Rules read strictly: the whole trimmed
//! token must be a finite number.

/// Separator between the two halves of the canonical range encoding.
pub const RANGE_SEPARATOR: char = '-';

/// Read the leading number of `text`, ignoring anything after it.
///
/// Returns `None` when no digits lead the text or the number is not finite.
///
/// ```
/// use form_core::parse::parse_number;
///
/// assert_eq!(parse_number(" 2.5kg"), Some(2.5));
/// assert_eq!(parse_number("-.5"), Some(-0.5));
/// assert_eq!(parse_number("NaN-ish"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let len = numeric_prefix_len(s);
    if len == 0 {
        return None;
    }
    s[..len].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Read `text` as a number only if the whole trimmed token is one.
pub fn parse_strict(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() || numeric_prefix_len(s) != s.len() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Strictly read a `low-high` pair. Order is not checked.
pub fn parse_range_strict(text: &str) -> Option<(f64, f64)> {
    let (low, high) = text.split_once(RANGE_SEPARATOR)?;
    if high.contains(RANGE_SEPARATOR) {
        return None;
    }
    Some((parse_strict(low)?, parse_strict(high)?))
}

/// Leniently read exactly `N` numbers from `text`.
///
/// With `N == 1` the whole text is one token, so a leading minus sign is
/// read as a sign. Otherwise the text is split on [`RANGE_SEPARATOR`] and
/// must yield exactly `N` tokens.
pub fn try_parse<const N: usize>(text: &str) -> Option<[f64; N]> {
    let tokens: Vec<&str> = if N == 1 {
        vec![text]
    } else {
        text.split(RANGE_SEPARATOR).collect()
    };
    if tokens.len() != N {
        return None;
    }

    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = parse_number(token)?;
    }
    Some(out)
}

/// Read `N` numbers from `text`, or return `fallback` unchanged.
///
/// Never panics; the split arity is the length of `fallback`.
///
/// ```
/// use form_core::parse::parse_or_fallback;
///
/// assert_eq!(parse_or_fallback("20-80", [0.0, 100.0]), [20.0, 80.0]);
/// assert_eq!(parse_or_fallback("5", [0.0, 100.0]), [0.0, 100.0]);
/// assert_eq!(parse_or_fallback("abc", [3.0]), [3.0]);
/// ```
pub fn parse_or_fallback<const N: usize>(text: &str, fallback: [f64; N]) -> [f64; N] {
    try_parse(text).unwrap_or(fallback)
}

/// Canonical `low-high` encoding of a range value.
pub fn format_range(low: f64, high: f64) -> String {
    format!("{}{RANGE_SEPARATOR}{}", tidy(low), tidy(high))
}

/// Render a scalar with exactly `precision` decimal places.
pub fn format_scalar(value: f64, precision: usize) -> String {
    format!("{:.precision$}", tidy(value))
}

// Keep "-0" out of field text.
fn tidy(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Length of the longest prefix of `s` that reads as a decimal number:
/// optional sign, digits with an optional fraction, optional exponent.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let int_end = digits_from(i);
    let mut digits = int_end - i;
    i = int_end;

    if b.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        if digits + (frac_end - i - 1) > 0 {
            digits += frac_end - i - 1;
            i = frac_end;
        }
    }
    if digits == 0 {
        return 0;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}
