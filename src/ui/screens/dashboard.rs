use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::models::Category;
use crate::ui::app::{expense_label, App, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, percent_of, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Summary cards
            Constraint::Min(8),    // Breakdown + list
            Constraint::Length(3), // Entry form
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_breakdown(f, middle[0], &app.ledger.category_breakdown(), app.ledger.total_expenses());
    render_expense_list(f, middle[1], app);

    render_entry_form(f, chunks[2], app);
}

fn titled_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let count = app.ledger.len();
    render_card(
        f,
        cards[0],
        "Total Savings",
        app.ledger.savings(),
        if app.ledger.savings() >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        None,
    );
    render_card(
        f,
        cards[1],
        "Monthly Expenses",
        app.ledger.total_expenses(),
        theme::RED,
        Some(format!(
            "{count} expense{}",
            if count == 1 { "" } else { "s" }
        )),
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: Color,
    subtitle: Option<String>,
) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.unwrap_or_default(), theme::dim_style())),
    ])
    .centered()
    .block(titled_block(title, false));

    f.render_widget(text, area);
}

fn render_breakdown(f: &mut Frame, area: Rect, breakdown: &[(Category, Decimal)], total: Decimal) {
    let block = titled_block("Expense Breakdown", false);

    if breakdown.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No expenses to display.", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(30)])
        .split(inner);

    // Bar heights are per-mille of the largest slice so huge sums stay in u64 range.
    let largest = breakdown
        .iter()
        .map(|(_, amount)| *amount)
        .max()
        .unwrap_or(Decimal::ZERO);
    let bars: Vec<Bar> = breakdown
        .iter()
        .enumerate()
        .map(|(i, (category, amount))| {
            let color = theme::chart_color(i);
            Bar::default()
                .value(u64::from(percent_of(*amount, largest)) * 10)
                .text_value(format_amount(*amount))
                .label(Line::from(category.as_str()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1);
    f.render_widget(chart, parts[0]);

    let legend: Vec<Line> = breakdown
        .iter()
        .enumerate()
        .map(|(i, (category, amount))| legend_line(i, *category, *amount, total))
        .collect();
    f.render_widget(Paragraph::new(legend), parts[1]);
}

fn legend_line(index: usize, category: Category, amount: Decimal, total: Decimal) -> Line<'static> {
    Line::from(vec![
        Span::styled("■ ", Style::default().fg(theme::chart_color(index))),
        Span::styled(format!("{:<10}", category.as_str()), theme::normal_style()),
        Span::styled(format!("{:>11}", format_amount(amount)), theme::expense_style()),
        Span::styled(
            format!(" {:>3}%", percent_of(amount, total)),
            theme::dim_style(),
        ),
    ])
}

fn render_expense_list(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.input_mode == InputMode::Normal || app.input_mode == InputMode::Confirm;
    let title = format!("Expense List ({})", app.ledger.len());
    let block = titled_block(&title, focused);

    if app.ledger.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No expenses added yet.", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let page = area.height.saturating_sub(2) as usize;
    let width = area.width.saturating_sub(3) as usize;
    let lines: Vec<Line> = app
        .ledger
        .expenses()
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(page)
        .map(|(i, rec)| {
            let style = if focused && i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Line::from(Span::styled(
                format!(" {}", truncate(&expense_label(rec), width)),
                style,
            ))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_entry_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(52)])
        .split(area);

    let amount_text = if app.amount_input.is_empty() && !editing {
        Span::styled("Amount in INR", theme::dim_style())
    } else {
        Span::styled(app.amount_input.clone(), theme::normal_style())
    };
    let amount = Paragraph::new(Line::from(amount_text))
        .block(titled_block("Add Expense", editing));
    f.render_widget(amount, parts[0]);

    let mut options: Vec<Span> = Vec::new();
    for cat in Category::all() {
        let style = if *cat == app.category {
            theme::selected_style().add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        options.push(Span::styled(format!(" {cat} "), style));
    }
    let selector = Paragraph::new(Line::from(options)).block(titled_block("Category", editing));
    f.render_widget(selector, parts[1]);

    if editing && !app.show_help {
        let max = parts[0].width.saturating_sub(2);
        let col = (app.amount_input.chars().count() as u16).min(max.saturating_sub(1));
        f.set_cursor_position((parts[0].x + 1 + col, parts[0].y + 1));
    }
}
