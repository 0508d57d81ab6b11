// src/core/roman.rs
// Roman numeral tokens → decimal strings, for search keys only.

use std::sync::LazyLock;
use regex::Regex;

// Every group may match empty; `convert` rejects the empty token separately.
static NUMERAL: LazyLock<Regex> =
    regex!(r"(?i)^m*(c[md]|d?c{0,3})(x[cl]|l?x{0,3})(i[xv]|v?i{0,3})$");

fn digit(ch: char) -> Option<u32> {
    match ch.to_ascii_lowercase() {
        'm' => Some(1000),
        'd' => Some(500),
        'c' => Some(100),
        'l' => Some(50),
        'x' => Some(10),
        'v' => Some(5),
        'i' => Some(1),
        _ => None,
    }
}

/// Returns the decimal form of `token` when it is a strict roman numeral,
/// otherwise `token` unchanged. Never fails.
///
/// Single letters such as `"i"` or `"x"` convert too; search keys are approximate.
pub fn convert(token: &str) -> String {
    if token.is_empty() || !NUMERAL.is_match(token) {
        return s!(token);
    }

    let values: Vec<u32> = token.chars().filter_map(digit).collect();
    let mut total: i64 = 0;
    for (i, &v) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if v < next => total -= v as i64,
            _ => total += v as i64,
        }
    }
    total.to_string()
}
