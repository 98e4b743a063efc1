use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::App;
use crate::models::Category;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinPulse", cmd_quit, r);
    register_command!("quit", "Quit FinPulse", cmd_quit, r);
    register_command!("logout", "Return to the login screen", cmd_logout, r);
    register_command!(
        "add",
        "Add expense (e.g. :add 250 Food)",
        cmd_add,
        r
    );
    register_command!("a", "Add expense (e.g. :a 250 Food)", cmd_add, r);
    register_command!(
        "delete",
        "Delete selected expense",
        cmd_delete,
        r
    );
    register_command!("del", "Delete selected expense", cmd_delete, r);
    register_command!(
        "category",
        "Select form category (e.g. :category Transport)",
        cmd_category,
        r
    );
    register_command!(
        "c",
        "Select form category (e.g. :c Transport)",
        cmd_category,
        r
    );
    register_command!("clear", "Clear the amount field", cmd_clear, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_logout(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.logout();
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        app.set_status(format!(
            "Usage: :add <amount> [category]. Categories: {}",
            names.join(", ")
        ));
        return Ok(());
    }

    let mut parts = args.splitn(2, ' ');
    let amount = parts.next().unwrap_or("");
    let category = match parts.next().map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => match Category::parse(name) {
            Some(cat) => cat,
            None => {
                app.set_status(format!("Unknown category: {name}"));
                return Ok(());
            }
        },
        None => app.category,
    };

    app.add_expense(amount, category);
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.ledger.is_empty() {
        app.set_status("No expenses to delete");
        return Ok(());
    }
    app.request_delete_selected();
    Ok(())
}

fn cmd_category(args: &str, app: &mut App) -> anyhow::Result<()> {
    match Category::parse(args) {
        Some(cat) => {
            app.category = cat;
            app.set_status(format!("Category: {cat}"));
        }
        None => {
            let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
            app.set_status(format!("Usage: :category <{}>", names.join("|")));
        }
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.amount_input.clear();
    app.set_status("Amount cleared");
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
