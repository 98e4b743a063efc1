#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    // Japanese characters are multi-byte UTF-8
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_emoji() {
    assert_eq!(truncate("🎉🎊🎈🎁", 3), "🎉🎊…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_mixed_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

#[test]
fn test_truncate_two_chars() {
    assert_eq!(truncate("hello", 2), "h…");
}

#[test]
fn test_truncate_single_char_string() {
    assert_eq!(truncate("a", 1), "a");
    assert_eq!(truncate("a", 5), "a");
}

#[test]
fn test_truncate_max_one_with_long_string() {
    // max=1 should always produce "…" for strings longer than 1
    assert_eq!(truncate("ab", 1), "…");
    assert_eq!(truncate("abc", 1), "…");
}

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_initial_savings() {
    assert_eq!(format_amount(dec!(500000)), "₹500,000");
}

#[test]
fn test_format_amount_fraction() {
    assert_eq!(format_amount(dec!(1234.56)), "₹1,234.56");
    assert_eq!(format_amount(dec!(1234.5)), "₹1,234.50");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999)), "₹999");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "₹0");
    assert_eq!(format_amount(dec!(0.00)), "₹0");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-₹42.50");
    assert_eq!(format_amount(dec!(-100000)), "-₹100,000");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "₹1,234,567.89");
    assert_eq!(format_amount(dec!(10000000)), "₹10,000,000");
}

#[test]
fn test_format_amount_rounds_to_two_decimals() {
    assert_eq!(format_amount(dec!(0.125)), "₹0.13");
    assert_eq!(format_amount(dec!(9.999)), "₹10");
}

#[test]
fn test_format_amount_tiny_negative_has_no_sign() {
    assert_eq!(format_amount(dec!(-0.001)), "₹0");
}

// ── percent_of ─────────────────────────────────────────────

#[test]
fn test_percent_of() {
    assert_eq!(percent_of(dec!(80), dec!(100)), 80);
    assert_eq!(percent_of(dec!(1), dec!(3)), 33);
    assert_eq!(percent_of(dec!(2), dec!(3)), 67);
}

#[test]
fn test_percent_of_non_positive_total() {
    assert_eq!(percent_of(dec!(5), dec!(0)), 0);
    assert_eq!(percent_of(dec!(5), dec!(-10)), 0);
}

#[test]
fn test_percent_of_huge_amounts() {
    let huge = dec!(1000000000000000000000000000);
    assert_eq!(percent_of(huge, huge), 100);
    assert_eq!(percent_of(Decimal::MAX, Decimal::MAX), 100);
    assert_eq!(percent_of(Decimal::MAX / dec!(2), Decimal::MAX), 50);
}

// ── mask ───────────────────────────────────────────────────

#[test]
fn test_mask() {
    assert_eq!(mask(""), "");
    assert_eq!(mask("admin"), "•••••");
    assert_eq!(mask("pä"), "••");
}

// ── scrolling ──────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 3, 5);
    assert_eq!(index, 2);
}

#[test]
fn test_scroll_up_pulls_window() {
    let (mut index, mut scroll) = (4, 4);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (3, 3));

    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
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
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (0, 0));
}
