use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_expense_command, run_menu, ExpenseCommands};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::storage::{LoadStatus, Storage};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record personal expenses from the terminal",
    long_about = "Expense Tracker keeps a list of what you spent in a JSON file, \
                  totals it, and compares the total against a reference spend."
)]
struct Cli {
    /// Use this expense file instead of the configured one
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Refuse to start if the expense file cannot be read
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Interactive numbered menu
    Menu,

    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store_path = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.store_path(&paths));

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut storage = open_storage(paths, store_path, cli.strict)?;
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Menu) => {
            let mut storage = open_storage(paths, store_path, cli.strict)?;
            let stdin = io::stdin();
            run_menu(&mut storage, &settings, &mut stdin.lock(), &mut io::stdout())?;
        }
        Some(Commands::Tui) => {
            let mut storage = open_storage(paths, store_path, cli.strict)?;
            expense_tracker::tui::run_tui(&mut storage, &settings)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Expense file:    {}", store_path.display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Reference spend: {:.2}", settings.reference_spend);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("Expense Tracker - record personal expenses from the terminal");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses menu' for the numbered menu.");
            println!("Run 'expenses tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

/// Open storage and warn on stderr if the expense file had to be set aside
fn open_storage(paths: ExpensePaths, store_path: PathBuf, strict: bool) -> Result<Storage> {
    let storage = if strict {
        Storage::new_strict(paths, store_path)?
    } else {
        Storage::new(paths, store_path)?
    };

    if let LoadStatus::Recovered {
        quarantined,
        reason,
    } = storage.expenses.load_status()
    {
        eprintln!("Warning: could not read the expense file ({}).", reason);
        eprintln!("Starting with an empty list. The original was saved to:");
        eprintln!("  {}", quarantined.display());
    }

    Ok(storage)
}
