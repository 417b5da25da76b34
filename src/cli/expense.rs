//! Expense CLI commands

use clap::Subcommand;

use crate::display::format_expense_table;
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Unique expense name
        name: String,
        /// Price, e.g. 12.50
        #[arg(allow_negative_numbers = true)]
        price: String,
    },
    /// Delete an expense by exact name
    #[command(alias = "rm", alias = "delete")]
    Remove {
        /// Expense name
        name: String,
    },
    /// List all expenses with the running total
    #[command(alias = "ls")]
    List {
        /// Print the expenses as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the running total
    Total,
}

/// Handle an expense command
pub fn handle_expense_command(store: &ExpenseStore, cmd: ExpenseCommands) -> ExpenseResult<()> {
    let service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add { name, price } => {
            let expense = service.add_from_input(&name, &price)?;
            println!("Added expense: {}", expense);
        }

        ExpenseCommands::Remove { name } => {
            // Absent names are not an error, only reported
            if service.remove_by_name(&name)? > 0 {
                println!("Deleted expense: {}", name);
            } else {
                println!("No expense named '{}'", name);
            }
        }

        ExpenseCommands::List { json } => {
            let summary = service.summary()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary.expenses)?);
            } else {
                println!("{}", format_expense_table(&summary));
            }
        }

        ExpenseCommands::Total => {
            println!("{}", service.summary()?.total);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_commands() {
        let store = ExpenseStore::open_in_memory().unwrap();

        handle_expense_command(
            &store,
            ExpenseCommands::Add {
                name: "coffee".into(),
                price: "3.5".into(),
            },
        )
        .unwrap();
        assert_eq!(store.count().unwrap(), 1);

        handle_expense_command(&store, ExpenseCommands::Remove { name: "coffee".into() }).unwrap();
        assert_eq!(store.count().unwrap(), 0);

        // Removing again is still fine
        handle_expense_command(&store, ExpenseCommands::Remove { name: "coffee".into() }).unwrap();
    }

    #[test]
    fn test_add_duplicate_fails() {
        let store = ExpenseStore::open_in_memory().unwrap();
        store.add("rent", 1200.0).unwrap();

        let err = handle_expense_command(
            &store,
            ExpenseCommands::Add {
                name: "rent".into(),
                price: "50".into(),
            },
        )
        .unwrap_err();

        assert!(err.is_duplicate());
        assert_eq!(store.count().unwrap(), 1);
    }
}
