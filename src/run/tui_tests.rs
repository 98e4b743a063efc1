#![allow(clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;
use crate::session::{GateField, GateState};

fn press(app: &mut App, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app).unwrap();
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn login(app: &mut App) {
    type_str(app, "admin");
    press(app, KeyCode::Tab);
    type_str(app, "admin");
    press(app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Dashboard);
}

fn add_via_form(app: &mut App, amount: &str) {
    press(app, KeyCode::Char('a'));
    type_str(app, amount);
    press(app, KeyCode::Enter);
    press(app, KeyCode::Esc);
}

// ── Login ─────────────────────────────────────────────────────

#[test]
fn test_login_with_keys() {
    let mut app = App::new();
    assert_eq!(app.screen, Screen::Login);
    login(&mut app);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_login_failure_stays_on_gate() {
    let mut app = App::new();
    type_str(&mut app, "admin");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "admin1");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen, Screen::Login);
    assert_eq!(app.gate.state(), GateState::ErrorShown);
}

#[test]
fn test_login_error_survives_editing_until_resubmit() {
    let mut app = App::new();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.gate.state(), GateState::ErrorShown);

    type_str(&mut app, "admin");
    assert_eq!(app.gate.state(), GateState::ErrorShown);

    press(&mut app, KeyCode::Down);
    type_str(&mut app, "admin");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Dashboard);
}

#[test]
fn test_login_backspace_edits_focused_field() {
    let mut app = App::new();
    type_str(&mut app, "adminx");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "pw");
    press(&mut app, KeyCode::Backspace);

    assert_eq!(app.gate.value(GateField::Identifier), "admin");
    assert_eq!(app.gate.value(GateField::Secret), "p");
}

#[test]
fn test_letters_in_login_are_text_not_shortcuts() {
    let mut app = App::new();
    type_str(&mut app, "qjkLD:");
    assert!(app.running);
    assert_eq!(app.screen, Screen::Login);
    assert_eq!(app.gate.value(GateField::Identifier), "qjkLD:");
}

#[test]
fn test_ctrl_q_quits_from_login() {
    let mut app = App::new();
    handle_key(
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        &mut app,
    )
    .unwrap();
    assert!(!app.running);
}

// ── Entry form ────────────────────────────────────────────────

#[test]
fn test_add_expense_through_form() {
    let mut app = App::new();
    login(&mut app);

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.input_mode, InputMode::Editing);
    type_str(&mut app, "150");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.ledger.expenses()[0].category, Category::Food);
    assert_eq!(app.ledger.total_expenses(), dec!(150));
    assert_eq!(app.ledger.savings(), dec!(499850));
    assert!(app.amount_input.is_empty());
    assert_eq!(app.input_mode, InputMode::Editing);
}

#[test]
fn test_form_filters_non_numeric_keys() {
    let mut app = App::new();
    login(&mut app);
    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "1x2.5z");
    assert_eq!(app.amount_input, "12.5");
}

#[test]
fn test_enter_with_empty_amount_is_noop() {
    let mut app = App::new();
    login(&mut app);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);

    assert!(app.ledger.is_empty());
    assert_eq!(app.ledger.savings(), dec!(500000));
}

#[test]
fn test_tab_cycles_category_while_editing() {
    let mut app = App::new();
    login(&mut app);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "20");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.ledger.expenses()[0].category, Category::Grocery);

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.category, Category::Others);
}

#[test]
fn test_category_keys_in_normal_mode() {
    let mut app = App::new();
    login(&mut app);
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.category, Category::Transport);
    press(&mut app, KeyCode::Char('C'));
    press(&mut app, KeyCode::Char('C'));
    assert_eq!(app.category, Category::Others);
}

// ── Delete ────────────────────────────────────────────────────

#[test]
fn test_delete_selected_with_confirmation() {
    let mut app = App::new();
    login(&mut app);
    add_via_form(&mut app, "10");
    add_via_form(&mut app, "20");
    add_via_form(&mut app, "30");

    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('D'));
    assert_eq!(app.input_mode, InputMode::Confirm);
    press(&mut app, KeyCode::Char('y'));

    let amounts: Vec<_> = app.ledger.expenses().iter().map(|e| e.amount).collect();
    assert_eq!(amounts, vec![dec!(10), dec!(30)]);
    assert_eq!(app.ledger.total_expenses(), dec!(40));
    assert_eq!(app.ledger.savings(), dec!(499960));
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_delete_cancelled() {
    let mut app = App::new();
    login(&mut app);
    add_via_form(&mut app, "10");

    press(&mut app, KeyCode::Delete);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.status_message, "Cancelled");
}

#[test]
fn test_delete_last_moves_cursor_back() {
    let mut app = App::new();
    login(&mut app);
    add_via_form(&mut app, "1");
    add_via_form(&mut app, "2");
    assert_eq!(app.expense_index, 1);

    press(&mut app, KeyCode::Char('D'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.expense_index, 0);
    assert!(app.selected_expense().is_some());
}

// ── Command mode, logout, help ────────────────────────────────

#[test]
fn test_command_mode_add() {
    let mut app = App::new();
    login(&mut app);
    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "add 99 personal");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.ledger.expenses()[0].category, Category::Personal);
    assert_eq!(app.ledger.total_expenses(), dec!(99));
}

#[test]
fn test_command_backspace_to_empty_leaves_command_mode() {
    let mut app = App::new();
    login(&mut app);
    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "q");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.running);
}

#[test]
fn test_logout_and_login_resumes_ledger() {
    let mut app = App::new();
    login(&mut app);
    add_via_form(&mut app, "500");

    press(&mut app, KeyCode::Char('L'));
    assert_eq!(app.screen, Screen::Login);
    assert_eq!(app.gate.value(GateField::Identifier), "");
    assert_eq!(app.gate.value(GateField::Secret), "");

    login(&mut app);
    assert_eq!(app.ledger.len(), 1);
    assert_eq!(app.ledger.savings(), dec!(499500));
}

#[test]
fn test_help_overlay_closes_on_any_key() {
    let mut app = App::new();
    login(&mut app);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('j'));
    assert!(!app.show_help);
}

#[test]
fn test_cursor_navigation_bounds() {
    let mut app = App::new();
    login(&mut app);
    for amt in ["1", "2", "3"] {
        add_via_form(&mut app, amt);
    }
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.expense_index, 2);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.expense_index, 0);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.expense_index, 0);
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.expense_index, 2);
}
