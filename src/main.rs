use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use expense_tracker::cli;
use expense_tracker::config::LedgerPaths;
use expense_tracker::storage::{Ledger, LedgerGuard};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record expenses, view monthly summaries and export them to CSV",
    long_about = "An interactive expense tracker. Expenses are kept in a JSON file \
                  (expenses.json in the current directory by default), loaded at \
                  startup and saved when the program exits."
)]
struct Cli {
    /// Ledger file (defaults to $EXPENSES_FILE, then ./expenses.json)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Append an audit entry for every add and export to this file
    /// (defaults to $EXPENSES_AUDIT_LOG; disabled if unset)
    #[arg(long, value_name = "PATH")]
    audit_log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = LedgerPaths::resolve(cli.file, cli.audit_log);

    let (ledger, status) = Ledger::load(paths.ledger_file()).with_context(|| {
        format!("Failed to load expense ledger {}", paths.ledger_file().display())
    })?;

    let guard = LedgerGuard::new(ledger);
    guard.save_on_interrupt()?;

    let stdin = io::stdin();
    cli::run(guard, status, &paths, stdin.lock(), io::stdout())?;

    Ok(())
}
