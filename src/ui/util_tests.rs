#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;
use crate::models::MAX_AMOUNT;

// ── format_money ──────────────────────────────────────────────

#[test]
fn test_format_money_groups_thousands() {
    assert_eq!(format_money(dec!(1234.56)), "1,234.56");
    assert_eq!(format_money(dec!(1234567.89)), "1,234,567.89");
    assert_eq!(format_money(dec!(10000000)), "10,000,000.00");
}

#[test]
fn test_format_money_small_values() {
    assert_eq!(format_money(dec!(0)), "0.00");
    assert_eq!(format_money(dec!(5)), "5.00");
    assert_eq!(format_money(dec!(999.9)), "999.90");
}

#[test]
fn test_format_money_negative() {
    assert_eq!(format_money(dec!(-42.5)), "-42.50");
    assert_eq!(format_money(dec!(-99999.01)), "-99,999.01");
}

#[test]
fn test_format_money_rounds_half_away_from_zero() {
    assert_eq!(format_money(dec!(1.005)), "1.01");
    assert_eq!(format_money(dec!(2.675)), "2.68");
    assert_eq!(format_money(dec!(-1.005)), "-1.01");
    assert_eq!(format_money(dec!(1.004)), "1.00");
}

#[test]
fn test_format_money_tiny_negative_is_zero() {
    assert_eq!(format_money(dec!(-0.001)), "0.00");
}

// ── parse_amount ──────────────────────────────────────────────

#[test]
fn test_parse_amount_plain() {
    assert_eq!(parse_amount("100"), dec!(100));
    assert_eq!(parse_amount("12.34"), dec!(12.34));
    assert_eq!(parse_amount("  7.5  "), dec!(7.5));
}

#[test]
fn test_parse_amount_signs() {
    assert_eq!(parse_amount("-5"), dec!(-5));
    assert_eq!(parse_amount("+5"), dec!(5));
}

#[test]
fn test_parse_amount_leading_prefix() {
    assert_eq!(parse_amount("12abc"), dec!(12));
    assert_eq!(parse_amount("3.5.1"), dec!(3.5));
    assert_eq!(parse_amount("8 dollars"), dec!(8));
}

#[test]
fn test_parse_amount_partial_decimals() {
    assert_eq!(parse_amount(".5"), dec!(0.5));
    assert_eq!(parse_amount("5."), dec!(5));
    assert_eq!(parse_amount("-.25"), dec!(-0.25));
}

#[test]
fn test_parse_amount_exponent() {
    assert_eq!(parse_amount("1e3"), dec!(1000));
    assert_eq!(parse_amount("-3e2"), dec!(-300));
    assert_eq!(parse_amount("25e-1"), dec!(2.5));
    assert_eq!(parse_amount("4e"), dec!(4));
}

#[test]
fn test_parse_amount_large_values() {
    assert_eq!(parse_amount("5e28"), dec!(50000000000000000000000000000));
    assert_eq!(parse_amount("999999999999999.99"), dec!(999999999999999.99));
    assert_eq!(
        parse_amount("0.1234567890123456789"),
        dec!(0.1234567890123456789)
    );
}

#[test]
fn test_format_money_large_values() {
    assert_eq!(format_money(MAX_AMOUNT), "1,000,000,000,000,000.00");
    assert_eq!(format_money(dec!(999999999999999.995)), "1,000,000,000,000,000.00");
}

#[test]
fn test_parse_amount_unparseable_is_zero() {
    assert_eq!(parse_amount(""), dec!(0));
    assert_eq!(parse_amount("abc"), dec!(0));
    assert_eq!(parse_amount("."), dec!(0));
    assert_eq!(parse_amount("-"), dec!(0));
    assert_eq!(parse_amount("Infinity"), dec!(0));
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("lunch", 10), "lunch");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("午饭和咖啡", 3), "午饭…");
}

// ── cursor helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..10 {
        scroll_down(&mut index, &mut scroll, 3, 10);
    }
    assert_eq!(index, 2);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 20, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_up_follows_cursor() {
    let (mut index, mut scroll) = (4, 4);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (3, 3));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_clamp_cursor_after_shrink() {
    let (mut index, mut scroll) = (5, 5);
    clamp_cursor(&mut index, &mut scroll, 3);
    assert_eq!((index, scroll), (2, 2));

    clamp_cursor(&mut index, &mut scroll, 0);
    assert_eq!((index, scroll), (0, 0));
}
