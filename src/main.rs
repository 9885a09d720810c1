use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use wayfarer::cli::{
    handle_expense_command, handle_export_command, handle_flight_command, ExpenseCommands,
    ExportArgs, FlightCommands,
};
use wayfarer::config::{paths::WayfarerPaths, settings::Settings};
use wayfarer::logging::{init_logging, Verbosity};
use wayfarer::models::AirportDirectory;
use wayfarer::services::FlightAnalyzer;
use wayfarer::storage::Sources;
use wayfarer::TravelError;

#[derive(Parser)]
#[command(
    name = "wayfarer",
    version,
    about = "Travel history analysis from the terminal",
    long_about = "Wayfarer reads a flight history export and a trip expense ledger \
                  and reports distances flown, international and connecting \
                  flights, and spending per trip and category."
)]
struct Cli {
    /// More diagnostics on stderr (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Flight history export to read
    #[arg(long, global = true)]
    flights: Option<PathBuf>,

    /// Expense ledger to read (JSON or CSV)
    #[arg(long, global = true)]
    expenses: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Flight history commands
    #[command(subcommand)]
    Flights(FlightCommands),

    /// Expense ledger commands
    #[command(subcommand)]
    Expenses(ExpenseCommands),

    /// Export everything to a file
    Export(ExportArgs),

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    run(cli).inspect_err(|err| {
        if let Some(TravelError::SourceUnavailable { source_kind, .. }) =
            err.downcast_ref::<TravelError>()
        {
            let flag = if *source_kind == "Flight history" {
                "--flights"
            } else {
                "--expenses"
            };
            eprintln!(
                "Hint: pass {} <PATH>, set the path in the config file, \
                 or run 'wayfarer config' to see where Wayfarer looks.",
                flag
            );
        }
    })
}

fn run(cli: Cli) -> Result<()> {
    // Initialize paths and settings
    let paths = WayfarerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let sources = Sources::resolve(&paths, &settings, cli.flights, cli.expenses);
    let analyzer = FlightAnalyzer::new(AirportDirectory::global())
        .with_connecting_window(settings.connecting_window());

    match cli.command {
        Some(Commands::Flights(cmd)) => {
            handle_flight_command(&sources.flights, &analyzer, &settings, cmd)?;
        }
        Some(Commands::Expenses(cmd)) => {
            handle_expense_command(&sources.expenses, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&sources, &analyzer, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Wayfarer at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Place your data files at:");
            println!("  Flight history: {}", paths.flights_file().display());
            println!("  Expense ledger: {}", paths.expenses_file().display());
            println!();
            println!("Run 'wayfarer flights stats' once the flight history is in place.");
        }
        Some(Commands::Config) => {
            println!("Wayfarer Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Sources:");
            println!("  Flight history: {}", sources.flights.path().display());
            println!(
                "  Expense ledger: {} ({:?})",
                sources.expenses.path().display(),
                sources.expenses.format()
            );
            println!();
            println!("Settings:");
            println!(
                "  Connecting window: {} hours",
                settings.connecting_window_hours
            );
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
        }
        None => {
            println!("Wayfarer - travel history analysis");
            println!();
            println!("Run 'wayfarer --help' for usage information.");
            println!("Run 'wayfarer init' to set up the data directory.");
        }
    }

    Ok(())
}
