use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::session::GateField;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // Expense list rows: everything but bars, cards, form and borders.
            let content_height = f.area().height.saturating_sub(3 + 5 + 3 + 2) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app)?;
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: event::KeyEvent, app: &mut App) -> Result<()> {
    if is_quit(&key) {
        app.running = false;
        return Ok(());
    }
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.screen {
        Screen::Login => handle_login_input(key, app),
        Screen::Dashboard => match app.input_mode {
            InputMode::Normal => handle_normal_input(key, app),
            InputMode::Command => handle_command_input(key, app),
            InputMode::Editing => handle_editing_input(key, app),
            InputMode::Confirm => handle_confirm_input(key, app),
        },
    }
}

fn is_quit(key: &event::KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// ── Input handlers ───────────────────────────────────────────

fn handle_login_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.submit_login(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login_focus = app.login_focus.toggle();
        }
        KeyCode::Backspace => {
            app.gate.pop(app.login_focus);
        }
        KeyCode::F(1) => {
            app.show_help = true;
        }
        KeyCode::Char(c) => {
            app.gate.push(app.login_focus, c);
        }
        KeyCode::Esc => {
            if app.login_focus == GateField::Secret {
                app.login_focus = GateField::Identifier;
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.input_mode = InputMode::Editing;
            app.set_status("Type an amount, Tab to change category, Enter to add");
        }
        KeyCode::Char('c') => app.cycle_category(1),
        KeyCode::Char('C') => app.cycle_category(-1),
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => scroll_to_top(&mut app.expense_index, &mut app.expense_scroll),
        KeyCode::Char('G') => scroll_to_bottom(
            &mut app.expense_index,
            &mut app.expense_scroll,
            app.ledger.len(),
            app.visible_rows,
        ),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                handle_move_up(app);
            }
        }
        KeyCode::Char('D') | KeyCode::Delete => {
            commands::handle_command("delete", app)?;
        }
        KeyCode::Char('L') => app.logout(),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            app.submit_expense();
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.status_message.clear();
        }
        KeyCode::Tab | KeyCode::Right => app.cycle_category(1),
        KeyCode::BackTab | KeyCode::Left => app.cycle_category(-1),
        KeyCode::Backspace => {
            app.amount_input.pop();
        }
        // Same characters a numeric input box lets through.
        KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') => {
            app.amount_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_pending(),
        _ => {}
    }
    Ok(())
}

// ── Navigation helpers ───────────────────────────────────────

fn handle_move_down(app: &mut App) {
    let len = app.ledger.len();
    scroll_down(
        &mut app.expense_index,
        &mut app.expense_scroll,
        len,
        app.visible_rows,
    );
}

fn handle_move_up(app: &mut App) {
    scroll_up(&mut app.expense_index, &mut app.expense_scroll);
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tui_tests;
