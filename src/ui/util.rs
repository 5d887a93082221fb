use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Format an amount with thousand separators and exactly 2 decimal places.
/// e.g. `1234567.891` → `"1,234,567.89"`, `-5` → `"-5.00"`
pub(crate) fn format_money(val: Decimal) -> String {
    let rounded = val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.2}", rounded.abs());
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if rounded < Decimal::ZERO {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Parse the longest leading number in `input`, ignoring whatever follows it.
/// Input with no leading number parses as zero. `"12.5kg"` → `12.5`,
/// `"-3e2"` → `-300`, `"abc"` → `0`.
pub(crate) fn parse_amount(input: &str) -> Decimal {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let take_digits = |from: usize| -> usize {
        bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_len = take_digits(pos);
    let int_digits = &s[pos..pos + int_len];
    pos += int_len;

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_len = take_digits(pos + 1);
        frac_digits = &s[pos + 1..pos + 1 + frac_len];
        pos += 1 + frac_len;
    }
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Decimal::ZERO;
    }

    let mut canonical = String::new();
    if negative {
        canonical.push('-');
    }
    canonical.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        canonical.push('.');
        canonical.push_str(frac_digits);
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        let exp_negative = match bytes.get(exp_pos) {
            Some(b'-') => {
                exp_pos += 1;
                true
            }
            Some(b'+') => {
                exp_pos += 1;
                false
            }
            _ => false,
        };
        let exp_len = take_digits(exp_pos);
        if exp_len > 0 {
            let sign = if exp_negative { "-" } else { "" };
            let exponent = &s[exp_pos..exp_pos + exp_len];
            return Decimal::from_scientific(&format!("{canonical}e{sign}{exponent}"))
                .unwrap_or(Decimal::ZERO);
        }
    }

    Decimal::from_str(&canonical).unwrap_or(Decimal::ZERO)
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page.saturating_sub(1));
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}

/// Pull the cursor back inside a list that may have shrunk.
pub(crate) fn clamp_cursor(index: &mut usize, scroll: &mut usize, len: usize) {
    if len == 0 {
        *index = 0;
        *scroll = 0;
        return;
    }
    if *index >= len {
        *index = len - 1;
    }
    if *scroll > *index {
        *scroll = *index;
    }
}
