use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use monthly_budget::cli::{
    handle_category_command, handle_currency, handle_export, handle_income, handle_reset,
    handle_show, CategoryCommands, ExportFormat,
};
use monthly_budget::config::{paths::DIR_ENV_VAR, BudgetPaths, Settings};
use monthly_budget::logging::init_tracing;
use monthly_budget::services::BudgetStore;
use monthly_budget::storage::{FileStore, KeyValueStore, MemoryStore};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal monthly budget tracker",
    long_about = "Track a monthly income against planned and actual spending in \
                  three groups: Needs, Wants and Savings. Every change is saved \
                  locally as soon as it is made."
)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data directory (defaults to the platform config directory)
    #[arg(long, global = true, env = DIR_ENV_VAR)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the dashboard as text
    Show,

    /// Set the monthly income
    Income {
        /// Amount; anything that is not a number is stored as 0
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Set the display currency
    Currency {
        /// £, $, € or GBP, USD, EUR
        symbol: String,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Export the budget and its summary
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Restore the default income, currency and categories
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings and logging
    let paths = match cli.dir {
        Some(ref dir) => BudgetPaths::with_base_dir(dir.clone()),
        None => BudgetPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths);
    if let Err(e) = init_tracing(&paths, &settings, cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let backend: Box<dyn KeyValueStore> = match FileStore::open(&paths) {
        Ok(files) => {
            info!(dir = %files.dir().display(), "opened store");
            Box::new(files)
        }
        Err(e) => {
            error!(error = %e, "cannot open store, keeping changes in memory");
            eprintln!("Warning: {}; changes will not be saved", e);
            Box::new(MemoryStore::new())
        }
    };
    let mut store = BudgetStore::open(backend);

    match cli.command {
        None | Some(Commands::Tui) => {
            monthly_budget::tui::run_tui(store, settings)?;
        }
        Some(Commands::Show) => handle_show(&store)?,
        Some(Commands::Income { amount }) => handle_income(&mut store, &amount)?,
        Some(Commands::Currency { symbol }) => handle_currency(&mut store, &symbol)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut store, &settings, cmd)?,
        Some(Commands::Export { format, output }) => {
            handle_export(store.budget(), format, output)?;
        }
        Some(Commands::Reset { yes }) => handle_reset(&mut store, yes)?,
        Some(Commands::Config) => {
            println!("Monthly Budget Configuration");
            println!("============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Store directory: {}", paths.store_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Log file:        {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Confirm deletes: {}", settings.confirm_deletes);
            println!("  Log filter:      {}", settings.log_filter);
            println!("  Tick rate:       {}ms", settings.tick_rate_ms);
        }
    }

    Ok(())
}
