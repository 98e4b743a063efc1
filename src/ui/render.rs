use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;
use crate::session::GateField;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area(), app.screen);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.screen {
        Screen::Login => " FinPulse ",
        Screen::Dashboard => " FinPulse Dashboard ",
    };
    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    )];
    if app.screen == Screen::Dashboard {
        spans.push(Span::styled(
            format!("Welcome, {}! ", app.gate.value(GateField::Identifier)),
            theme::normal_style(),
        ));
        spans.push(Span::styled(" | ", Style::default().fg(theme::OVERLAY)));
        spans.push(Span::styled("L logout", theme::dim_style()));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(bar, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Login => super::screens::login::render(f, area, app),
        Screen::Dashboard => super::screens::dashboard::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Command => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
        InputMode::Editing => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
        InputMode::Confirm => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::RED)
            .add_modifier(Modifier::BOLD),
    };

    let info = match app.screen {
        Screen::Login => format!(" {} ", app.screen),
        Screen::Dashboard => format!(" {} | {} expenses", app.screen, app.ledger.len()),
    };

    let right = match (app.screen, app.input_mode) {
        (Screen::Login, _) => " Tab switch field | Enter log in | F1 help ",
        (Screen::Dashboard, InputMode::Editing) => {
            " Enter add | Tab category | Esc done "
        }
        (Screen::Dashboard, _) => " a amount | c category | D delete | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, Style::default().fg(theme::YELLOW)),
                Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        InputMode::Normal | InputMode::Editing => (
            if app.status_message.is_empty() {
                let hint = match app.screen {
                    Screen::Login => " Log in to open your dashboard",
                    Screen::Dashboard => " Press : for commands, a to add an expense, ? for help",
                };
                Line::from(Span::styled(hint, theme::dim_style()))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {title}"),
        Style::default()
            .fg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    ))
}

fn help_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), theme::normal_style()))
}

fn render_help_overlay(f: &mut Frame, area: Rect, screen: Screen) {
    let mut help_text = vec![
        Line::from(Span::styled(
            " FinPulse Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match screen {
        Screen::Login => {
            help_text.push(section("Login"));
            help_text.push(help_line(
                "  Tab/Up/Down      Switch field          Enter      Log in",
            ));
            help_text.push(help_line(
                "  Backspace        Delete character      Ctrl-q     Quit",
            ));
        }
        Screen::Dashboard => {
            help_text.push(section("Navigation"));
            help_text.push(help_line(
                "  j/k or Up/Down   Move cursor           g/G        Top/Bottom",
            ));
            help_text.push(help_line(
                "  L                Log out               Ctrl-q     Quit",
            ));
            help_text.push(Line::from(""));
            help_text.push(section("Actions"));
            help_text.push(help_line(
                "  a/i             Edit amount            c/C        Next/Prev category",
            ));
            help_text.push(help_line(
                "  Enter (edit)    Add expense            Tab (edit) Next category",
            ));
            help_text.push(help_line(
                "  D/Delete        Delete expense         Esc        Cancel/Back",
            ));
            help_text.push(Line::from(""));
            help_text.push(section("Commands"));

            // Build command list dynamically from COMMANDS registry, longest alias wins
            let mut entries: Vec<(&str, &str)> = commands::COMMANDS
                .iter()
                .filter(|(name, _)| name.len() > 2)
                .map(|(&name, cmd)| (name, cmd.description))
                .collect();
            entries.sort_by_key(|(name, _)| (std::cmp::Reverse(name.len()), *name));
            let mut seen = std::collections::HashSet::new();
            let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
            for (name, desc) in entries {
                if seen.insert(desc) {
                    cmd_lines.push((name, desc));
                }
            }
            cmd_lines.sort_by_key(|(name, _)| *name);
            for (name, desc) in &cmd_lines {
                help_text.push(Line::from(Span::styled(
                    format!("  :{name:<14} {desc}"),
                    theme::normal_style(),
                )));
            }
        }
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
