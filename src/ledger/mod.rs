//! In-memory expense ledger: the list of expenses plus the two running totals.
//!
//! `savings + total_expenses` always equals [`INITIAL_SAVINGS`]; both totals are
//! adjusted inside the same call that mutates the list.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{Category, ExpenseId, ExpenseRecord};

/// Starting balance of the savings tile.
pub const INITIAL_SAVINGS: Decimal = Decimal::from_parts(500_000, 0, 0, false, 0);

/// Per-category sums in first-occurrence order.
pub type CategoryAggregate = Vec<(Category, Decimal)>;

#[derive(Debug, Clone)]
pub struct Ledger {
    expenses: Vec<ExpenseRecord>,
    savings: Decimal,
    total_expenses: Decimal,
    last_id: Option<ExpenseId>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            savings: INITIAL_SAVINGS,
            total_expenses: Decimal::ZERO,
            last_id: None,
        }
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn savings(&self) -> Decimal {
        self.savings
    }

    pub fn total_expenses(&self) -> Decimal {
        self.total_expenses
    }

    /// Record a new expense from the raw text of the amount field.
    ///
    /// Empty text, text without a leading number, or an amount that would push
    /// either total past `Decimal`'s range leaves the ledger untouched and returns
    /// `None`.
    pub fn add_expense(&mut self, amount_text: &str, category: Category) -> Option<ExpenseId> {
        if amount_text.is_empty() {
            return None;
        }
        let Some(amount) = parse_amount(amount_text) else {
            tracing::debug!(input = amount_text, "ignoring non-numeric amount");
            return None;
        };

        let (Some(total), Some(savings)) = (
            self.total_expenses.checked_add(amount),
            self.savings.checked_sub(amount),
        ) else {
            tracing::warn!(%amount, "amount out of range, expense not added");
            return None;
        };

        let id = self.next_id();
        self.expenses.push(ExpenseRecord::new(id, amount, category));
        self.total_expenses = total;
        self.savings = savings;
        tracing::info!(%id, %amount, %category, "expense added");
        Some(id)
    }

    /// Remove an expense and hand its amount back to savings. Unknown ids are ignored,
    /// as is a removal whose totals would leave `Decimal`'s range.
    pub fn delete_expense(&mut self, id: ExpenseId) -> Option<ExpenseRecord> {
        let pos = self.expenses.iter().position(|e| e.id == id)?;
        let amount = self.expenses[pos].amount;
        let (Some(total), Some(savings)) = (
            self.total_expenses.checked_sub(amount),
            self.savings.checked_add(amount),
        ) else {
            tracing::warn!(%id, %amount, "amount out of range, expense not deleted");
            return None;
        };

        let removed = self.expenses.remove(pos);
        self.total_expenses = total;
        self.savings = savings;
        tracing::info!(%id, amount = %removed.amount, category = %removed.category, "expense deleted");
        Some(removed)
    }

    /// Sum amounts per category. Recomputed on every call.
    pub fn category_breakdown(&self) -> CategoryAggregate {
        let mut acc: CategoryAggregate = Vec::new();
        for expense in &self.expenses {
            match acc.iter_mut().find(|(cat, _)| *cat == expense.category) {
                Some((_, sum)) => *sum = sum.saturating_add(expense.amount),
                None => acc.push((expense.category, expense.amount)),
            }
        }
        acc
    }

    fn next_id(&mut self) -> ExpenseId {
        let now = chrono::Utc::now().timestamp_millis();
        let id = match self.last_id {
            Some(ExpenseId(last)) if now <= last => ExpenseId(last + 1),
            _ => ExpenseId(now),
        };
        self.last_id = Some(id);
        id
    }
}

/// Lenient number parsing for the amount field.
///
/// Skips leading whitespace and reads the longest numeric prefix: optional sign,
/// digits, optional fraction, optional exponent. Trailing garbage is ignored
/// (`"12abc"` is `12`). Returns `None` when there is no digit to read or the value
/// does not fit in a `Decimal`.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
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
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    let mantissa_end = end;
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
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

    let mut mantissa = &s[..mantissa_end];
    if let Some(stripped) = mantissa.strip_prefix('+') {
        mantissa = stripped;
    }
    // "5." and ".5" are valid prefixes; give Decimal a form it accepts.
    let mantissa = mantissa.trim_end_matches('.');
    let mantissa = match mantissa.strip_prefix('-') {
        Some(rest) if rest.starts_with('.') => format!("-0{rest}"),
        _ if mantissa.starts_with('.') => format!("0{mantissa}"),
        _ => mantissa.to_string(),
    };

    if end > mantissa_end {
        let exponent = &s[mantissa_end..end];
        Decimal::from_scientific(&format!("{mantissa}{exponent}"))
            .ok()
            .map(|d| d.normalize())
    } else {
        Decimal::from_str(&mantissa).ok()
    }
}
