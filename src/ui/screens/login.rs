use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::session::{GateField, GateState};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::mask;

const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 14;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let width = PANEL_WIDTH.min(area.width);
    let height = PANEL_HEIGHT.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let panel = Rect::new(x, y, width, height);

    let border = match app.gate.state() {
        GateState::AwaitingInput => theme::ACCENT,
        GateState::ErrorShown => theme::RED,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            " FinPulse Login ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(ratatui::layout::Alignment::Center);
    let inner = block.inner(panel);
    f.render_widget(Clear, panel);
    f.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Error line
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Username label
            Constraint::Length(3), // Username field
            Constraint::Length(1), // Password label
            Constraint::Length(3), // Password field
            Constraint::Min(0),
        ])
        .split(inner);

    if let Some(err) = app.gate.error() {
        let line = Paragraph::new(Line::from(Span::styled(err.to_string(), theme::error_style())))
            .centered();
        f.render_widget(line, rows[0]);
    }

    render_label(f, rows[2], "Username");
    render_field(f, rows[3], app, GateField::Identifier);
    render_label(f, rows[4], "Password");
    render_field(f, rows[5], app, GateField::Secret);
}

fn render_label(f: &mut Frame, area: Rect, text: &str) {
    let label = Paragraph::new(Line::from(Span::styled(
        format!(" {text}"),
        Style::default()
            .fg(theme::TEXT)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(label, area);
}

fn render_field(f: &mut Frame, area: Rect, app: &App, field: GateField) {
    let focused = app.login_focus == field;
    let raw = app.gate.value(field);
    let shown = match field {
        GateField::Identifier => raw.to_string(),
        GateField::Secret => mask(raw),
    };
    let max = area.width.saturating_sub(3) as usize;
    // Keep the tail visible while typing past the edge.
    let len = shown.chars().count();
    let visible: String = if len > max {
        shown.chars().skip(len - max).collect()
    } else {
        shown
    };
    let cursor_col = visible.chars().count() as u16;

    let input = Paragraph::new(Line::from(Span::styled(visible, theme::normal_style()))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused)),
    );
    f.render_widget(input, area);

    if focused && !app.show_help && area.height >= 3 {
        f.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
    }
}
