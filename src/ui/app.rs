use crate::ledger::Ledger;
use crate::models::{Category, ExpenseId, ExpenseRecord};
use crate::session::{GateField, SessionGate};

use super::util::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Login,
    Dashboard,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "Login"),
            Self::Dashboard => write!(f, "Dashboard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteExpense { id: ExpenseId, label: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Login
    pub(crate) gate: SessionGate,
    pub(crate) login_focus: GateField,

    // Dashboard
    pub(crate) ledger: Ledger,
    pub(crate) amount_input: String,
    pub(crate) category: Category,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Login,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            gate: SessionGate::new(),
            login_focus: GateField::Identifier,

            ledger: Ledger::new(),
            amount_input: String::new(),
            category: Category::default(),
            expense_index: 0,
            expense_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 10,
        }
    }

    /// Submit the login form. Moves to the dashboard on success; otherwise the
    /// gate keeps its error for the login screen to show.
    pub(crate) fn submit_login(&mut self) {
        if self.gate.attempt_login().is_ok() {
            self.screen = Screen::Dashboard;
            self.input_mode = InputMode::Normal;
            self.clamp_cursor();
            self.set_status("Logged in");
        }
    }

    /// Back to a fresh login screen. The ledger is kept, so logging in again
    /// resumes the same expenses.
    pub(crate) fn logout(&mut self) {
        self.gate = SessionGate::new();
        self.login_focus = GateField::Identifier;
        self.screen = Screen::Login;
        self.input_mode = InputMode::Normal;
        self.command_input.clear();
        self.pending_action = None;
        self.confirm_message.clear();
        self.show_help = false;
        self.status_message.clear();
        tracing::info!(expenses = self.ledger.len(), "logout");
    }

    /// Add the pending form entry. The amount field is cleared only when an
    /// expense was actually recorded.
    pub(crate) fn submit_expense(&mut self) -> Option<ExpenseId> {
        let amount = self.amount_input.clone();
        let id = self.add_expense(&amount, self.category)?;
        self.amount_input.clear();
        Some(id)
    }

    /// Record an expense and move the cursor onto it. Reports ignored input on the
    /// status line.
    pub(crate) fn add_expense(&mut self, amount_text: &str, category: Category) -> Option<ExpenseId> {
        let Some(id) = self.ledger.add_expense(amount_text, category) else {
            if amount_text.is_empty() {
                self.set_status("Enter an amount first");
            } else if crate::ledger::parse_amount(amount_text).is_some() {
                self.set_status(format!("Amount out of range: {amount_text}"));
            } else {
                self.set_status(format!("Not a number: {amount_text}"));
            }
            return None;
        };
        self.expense_index = self.ledger.len().saturating_sub(1);
        self.keep_cursor_visible();
        if let Some(label) = self.ledger.get(id).map(expense_label) {
            self.set_status(format!("Added {label}"));
        }
        Some(id)
    }

    pub(crate) fn cycle_category(&mut self, delta: i32) {
        self.category = self.category.cycle(delta);
    }

    pub(crate) fn selected_expense(&self) -> Option<&ExpenseRecord> {
        self.ledger.expenses().get(self.expense_index)
    }

    /// Ask for confirmation before deleting the expense under the cursor.
    pub(crate) fn request_delete_selected(&mut self) {
        let Some(rec) = self.selected_expense() else {
            self.set_status("No expense selected");
            return;
        };
        let id = rec.id;
        let label = expense_label(rec);
        self.confirm_message = format!("Delete {label}?");
        self.pending_action = Some(PendingAction::DeleteExpense { id, label });
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn confirm_pending(&mut self) {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteExpense { id, label } => {
                    if self.ledger.delete_expense(id).is_some() {
                        self.clamp_cursor();
                        self.set_status(format!("Deleted {label}"));
                    } else {
                        self.set_status(format!("Could not delete {label}"));
                    }
                }
            }
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }

    /// Keep the list cursor inside the list after it shrinks.
    pub(crate) fn clamp_cursor(&mut self) {
        let len = self.ledger.len();
        if self.expense_index >= len {
            self.expense_index = len.saturating_sub(1);
        }
        self.keep_cursor_visible();
    }

    fn keep_cursor_visible(&mut self) {
        let page = self.visible_rows.max(1);
        if self.expense_index < self.expense_scroll {
            self.expense_scroll = self.expense_index;
        } else if self.expense_index >= self.expense_scroll + page {
            self.expense_scroll = self.expense_index + 1 - page;
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

/// `Food: ₹1,250`, as shown in the expense list.
pub(crate) fn expense_label(rec: &ExpenseRecord) -> String {
    format!("{}: {}", rec.category, format_amount(rec.amount))
}
