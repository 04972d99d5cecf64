use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finance_ledger::cli::{handle_ledger_command, LedgerCommands, Menu};
use finance_ledger::config::{LedgerPaths, Settings};
use finance_ledger::display::DisplayFormat;
use finance_ledger::storage::open_configured;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal income and expense ledger",
    long_about = "Keeps a list of income and expense records in a JSON file. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(short, long, global = true, env = "FINANCE_LEDGER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Show current configuration and paths
    Config,
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    let format = DisplayFormat::from(&settings);

    match cli.command {
        Some(Commands::Config) => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", settings.ledger_path(&paths, cli.file).display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Log level:       {}", settings.log_level);
        }
        Some(Commands::Ledger(cmd)) => {
            let mut store = open_configured(&paths, &settings, cli.file)?;
            handle_ledger_command(&mut store, &format, &paths, cmd)?;
        }
        Some(Commands::Menu) | None => {
            let mut store = open_configured(&paths, &settings, cli.file)?;
            let stdin = io::stdin();
            Menu::new(&mut store, stdin.lock(), io::stdout(), format).run()?;
        }
    }

    Ok(())
}
