use rust_decimal::Decimal;

use super::Category;

/// Creation-time token, milliseconds since the Unix epoch. Strictly increasing within a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(pub i64);

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub amount: Decimal,
    pub category: Category,
}

impl ExpenseRecord {
    pub fn new(id: ExpenseId, amount: Decimal, category: Category) -> Self {
        Self {
            id,
            amount,
            category,
        }
    }
}
