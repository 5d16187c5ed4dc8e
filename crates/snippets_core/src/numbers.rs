//! Number text helpers for the default number formatter.
//!
//! All helpers are pure and operate on integers, so every rendering is deterministic.
//!
//! ## Notes
//! - Magnitudes are taken with `i64::unsigned_abs`, so `i64::MIN` is handled without overflow.
//! - Words follow US English conventions: hyphenated tens (`thirty-four`), no "and" after hundreds.

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words for each group of three digits, lowest first.
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Insert `separator` between every group of three digits, counting from the right.
///
/// ## Parameters
/// - `digits`: ASCII digits only (no sign).
/// - `separator`: the grouping separator.
///
/// ## Examples
/// ```rust
/// use snippets_core::numbers::group_digits;
/// assert_eq!(group_digits("1234567", ','), "1,234,567");
/// assert_eq!(group_digits("999", ','), "999");
/// ```
pub fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Spell out `value` in English words.
///
/// ## Examples
/// ```rust
/// use snippets_core::numbers::spell_out;
/// assert_eq!(spell_out(0), "zero");
/// assert_eq!(spell_out(-42), "minus forty-two");
/// assert_eq!(spell_out(1_000_001), "one million one");
/// ```
pub fn spell_out(value: i64) -> String {
    let magnitude = value.unsigned_abs();
    let mut words = if magnitude == 0 {
        ONES[0].to_string()
    } else {
        spell_magnitude(magnitude)
    };
    if value < 0 {
        words.insert_str(0, "minus ");
    }
    words
}

fn spell_magnitude(mut magnitude: u64) -> String {
    let mut groups: Vec<String> = Vec::new();
    let mut scale = 0;
    while magnitude > 0 {
        let group = (magnitude % 1000) as usize;
        if group > 0 {
            let mut words = spell_below_thousand(group);
            if !SCALES[scale].is_empty() {
                words.push(' ');
                words.push_str(SCALES[scale]);
            }
            groups.push(words);
        }
        magnitude /= 1000;
        scale += 1;
    }
    groups.reverse();
    groups.join(" ")
}

fn spell_below_thousand(n: usize) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    let mut out = String::new();
    if hundreds > 0 {
        out.push_str(ONES[hundreds]);
        out.push_str(" hundred");
    }
    if rest > 0 {
        if !out.is_empty() {
            out.push(' ');
        }
        if rest < 20 {
            out.push_str(ONES[rest]);
        } else {
            out.push_str(TENS[rest / 10]);
            if rest % 10 > 0 {
                out.push('-');
                out.push_str(ONES[rest % 10]);
            }
        }
    }
    out
}

/// Return the English ordinal suffix for `value` (`st`, `nd`, `rd`, or `th`).
///
/// The suffix depends only on the magnitude: `-1` takes `st` like `1`.
pub fn ordinal_suffix(value: i64) -> &'static str {
    let magnitude = value.unsigned_abs();
    if (11..=13).contains(&(magnitude % 100)) {
        return "th";
    }
    match magnitude % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Render `value` in scientific notation with an `E` exponent marker.
///
/// The mantissa keeps every significant digit and drops trailing zeros.
///
/// ## Examples
/// ```rust
/// use snippets_core::numbers::scientific;
/// assert_eq!(scientific(1_234_567, '.'), "1.234567E6");
/// assert_eq!(scientific(1000, '.'), "1E3");
/// assert_eq!(scientific(0, '.'), "0E0");
/// ```
pub fn scientific(value: i64, decimal_separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let exponent = digits.len() - 1;
    let (lead, tail) = digits.split_at(1);
    let tail = tail.trim_end_matches('0');

    let mut out = String::with_capacity(digits.len() + 4);
    if value < 0 {
        out.push('-');
    }
    out.push_str(lead);
    if !tail.is_empty() {
        out.push(decimal_separator);
        out.push_str(tail);
    }
    out.push('E');
    out.push_str(&exponent.to_string());
    out
}
