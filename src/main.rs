use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_expense_command, ExpenseCommands};
use expense_tracker::config::ExpensePaths;
use expense_tracker::logging::init_tracing;
use expense_tracker::storage::open_store;
use expense_tracker::tui::run_tui;
use expense_tracker::{ExpenseError, ExpenseResult};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record expenses and keep a running total",
    long_about = "Record named expenses with a price in a local SQLite file \
                  and see the running total. Run without a command to open \
                  the interactive screen."
)]
struct Cli {
    /// Database file (defaults to $EXPENSES_DB or ./expenses.db)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show the resolved database path
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = ExpensePaths::resolve(cli.db);

    if let Some(Commands::Config) = cli.command {
        println!("Expense tracker configuration");
        println!("=============================");
        println!("Database file: {}", paths.db_file().display());
        println!("Exists:        {}", paths.db_file().exists());
        return Ok(ExitCode::SUCCESS);
    }

    let store = open_store(&paths)?;

    let result = match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&store, cmd).map_err(anyhow::Error::from)
        }
        Some(Commands::Tui) | None => run_tui(&store),
        Some(Commands::Config) => Ok(()),
    };

    // Release the connection on every path out of here
    let closed = store.close();

    let status = finish(result, closed, &mut io::stderr())?;
    Ok(ExitCode::from(status))
}

/// Turn the command outcome and the close outcome into an exit status.
///
/// User errors are printed as `Title: message` and give status 1. Other
/// errors are returned for `main` to report. A close failure is always
/// reported, even when the command already failed.
fn finish(result: Result<()>, closed: ExpenseResult<()>, stderr: &mut impl Write) -> Result<u8> {
    let Err(err) = result else {
        closed?;
        return Ok(0);
    };

    if let Err(close_err) = closed {
        writeln!(stderr, "Error: {}", close_err)?;
    }

    match err.downcast_ref::<ExpenseError>().filter(|e| e.is_user_error()) {
        Some(user_err) => {
            writeln!(stderr, "{}: {}", user_err.title(), user_err)?;
            Ok(1)
        }
        None => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_failure() -> ExpenseResult<()> {
        Err(ExpenseError::Storage("Failed to close database: disk I/O error".into()))
    }

    fn run(result: Result<()>, closed: ExpenseResult<()>) -> (Result<u8>, String) {
        let mut stderr = Vec::new();
        let status = finish(result, closed, &mut stderr);
        (status, String::from_utf8(stderr).unwrap())
    }

    #[test]
    fn test_success() {
        let (status, stderr) = run(Ok(()), Ok(()));
        assert_eq!(status.unwrap(), 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn test_user_error_is_a_warning() {
        let (status, stderr) = run(Err(ExpenseError::duplicate("rent").into()), Ok(()));
        assert_eq!(status.unwrap(), 1);
        assert_eq!(stderr, "Input Error: Expense 'rent' already exists.\n");
    }

    #[test]
    fn test_user_error_still_reports_close_failure() {
        let (status, stderr) = run(Err(ExpenseError::duplicate("rent").into()), close_failure());
        assert_eq!(status.unwrap(), 1);
        assert!(stderr.contains("Error: Storage error: Failed to close database"));
        assert!(stderr.contains("Input Error: Expense 'rent' already exists."));
    }

    #[test]
    fn test_close_failure_after_success() {
        let (status, _) = run(Ok(()), close_failure());
        let err = status.unwrap_err();
        assert!(err.to_string().contains("Failed to close database"));
    }

    #[test]
    fn test_storage_error_is_returned() {
        let (status, stderr) = run(
            Err(ExpenseError::Storage("file is not a database".into()).into()),
            Ok(()),
        );
        let err = status.unwrap_err();
        assert_eq!(err.to_string(), "Storage error: file is not a database");
        assert!(stderr.is_empty());
    }
}
