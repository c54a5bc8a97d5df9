use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shopbooks::cli::{handle_dashboard_command, handle_report_command, ReportCommands};
use shopbooks::config::{paths::ShopPaths, settings::Settings};
use shopbooks::storage::Storage;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "SHOPBOOKS_LOG";

#[derive(Parser)]
#[command(
    name = "shopbooks",
    version,
    about = "Finance reports for a small made-to-order shop",
    long_about = "shopbooks reads the shop's orders and expenses and reports \
                  inflows against outflows per day, month or year, in the \
                  terminal or as an exported workbook."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Finance report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show the business snapshot
    #[command(alias = "home")]
    Dashboard,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "shopbooks=warn",
        1 => "shopbooks=info",
        2 => "shopbooks=debug",
        _ => "shopbooks=trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = ShopPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone());
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing shopbooks at: {}", paths.base_dir().display());
            shopbooks::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Orders file:   {}", paths.orders_file().display());
            println!("Expenses file: {}", paths.expenses_file().display());
        }
        Some(Commands::Config) => {
            println!("shopbooks Configuration");
            println!("=======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Date format:           {}", settings.date_format);
            println!("  Default granularity:   {}", settings.default_granularity);
            println!("  Default export format: {}", settings.default_export_format);
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd, today)?;
        }
        Some(Commands::Dashboard) => {
            handle_dashboard_command(&storage, &settings, today)?;
        }
        None => {
            println!("shopbooks - finance reports for a small made-to-order shop");
            println!();
            println!("Run 'shopbooks --help' for usage information.");
            println!("Run 'shopbooks report show' for this month's report.");
        }
    }

    Ok(())
}
