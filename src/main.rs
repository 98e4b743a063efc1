mod ledger;
mod logging;
mod models;
mod run;
mod session;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => {
            if let Err(e) = logging::init() {
                eprintln!("Warning: logging disabled: {e:#}");
            }
            run::as_tui()
        }
        2.. => run::as_cli(&args),
        _ => {
            eprintln!("Usage: finpulse [command]");
            Ok(())
        }
    }
}
