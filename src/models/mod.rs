mod category;
mod expense;

pub use category::Category;
pub use expense::{ExpenseId, ExpenseRecord};
