use anyhow::Result;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finpulse {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FinPulse - terminal expense tracker");
    println!();
    println!("Usage: finpulse [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  FINPULSE_LOG                  Log filter (default: finpulse=info)");
    println!("  FINPULSE_LOG_DIR              Directory for finpulse.log");
}
