use rust_decimal::{Decimal, RoundingStrategy};

pub(crate) const CURRENCY_GLYPH: &str = "₹";

/// Format an amount with thousand separators and the currency glyph.
/// Whole amounts drop the fraction; anything else shows 2 decimal places.
/// e.g. `500000` → `"₹500,000"`, `1234.5` → `"₹1,234.50"`, `-20` → `"-₹20"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = if abs.fract().is_zero() {
        format!("{:.0}", abs.trunc())
    } else {
        format!("{abs:.2}")
    };
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next();

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if val < Decimal::ZERO && !abs.is_zero() {
        "-"
    } else {
        ""
    };
    match dec_part {
        Some(dec) => format!("{sign}{CURRENCY_GLYPH}{with_commas}.{dec}"),
        None => format!("{sign}{CURRENCY_GLYPH}{with_commas}"),
    }
}

/// Share of `part` in `total` as a whole percentage, 0 when `total` is not positive.
pub(crate) fn percent_of(part: Decimal, total: Decimal) -> u32 {
    if total <= Decimal::ZERO {
        return 0;
    }
    use rust_decimal::prelude::ToPrimitive;
    let pct = part
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(total))
        .or_else(|| {
            part.checked_div(total)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        });
    pct.unwrap_or(Decimal::ZERO)
        .round()
        .to_u32()
        .unwrap_or(0)
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

/// Replace every character with a bullet, for the password field.
pub(crate) fn mask(s: &str) -> String {
    "•".repeat(s.chars().count())
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
