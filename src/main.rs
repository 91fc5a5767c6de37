use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flightpulse::ConfigLoader;
use flightpulse::cli::Output;
use flightpulse::cli::commands::{self, insights::InsightsOptions, serve::ServeOptions};
use flightpulse::data::FilterParams;

#[derive(Parser)]
#[command(name = "flightpulse")]
#[command(
    version,
    about = "Airline booking market-demand dashboard for hostel operators"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard HTTP server
    Serve {
        #[arg(long, help = "Bind host (default: 0.0.0.0)")]
        host: Option<String>,
        #[arg(long, short, help = "Bind port (default: 5000)")]
        port: Option<u16>,
    },

    /// Generate a sample, aggregate it and print the insights
    Insights {
        #[arg(long, short = 'n', help = "Number of sample flights")]
        count: Option<usize>,
        #[arg(long, default_value = "", help = "Origin city (case-insensitive)")]
        origin: String,
        #[arg(long, default_value = "", help = "Destination city (case-insensitive)")]
        destination: String,
        #[arg(long, default_value = "", help = "Earliest date, YYYY-MM-DD")]
        date_from: String,
        #[arg(long, default_value = "", help = "Latest date, YYYY-MM-DD")]
        date_to: String,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
        #[arg(long, help = "Include the narrative summary")]
        narrative: bool,
    },

    /// Fetch live flights from AviationStack
    Live,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Write flightpulse.toml in the current directory
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mFlightPulse encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new().error(&format!("Error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ConfigLoader::load()?;
            let rt = Runtime::new()?;
            rt.block_on(commands::serve::run(config, ServeOptions { host, port }))?;
        }
        Commands::Insights {
            count,
            origin,
            destination,
            date_from,
            date_to,
            format,
            narrative,
        } => {
            let config = ConfigLoader::load()?;
            let options = InsightsOptions {
                count,
                filter: FilterParams {
                    origin,
                    destination,
                    date_from,
                    date_to,
                },
                format,
                narrative,
            };
            let rt = Runtime::new()?;
            rt.block_on(commands::insights::run(&config, options))?;
        }
        Commands::Live => {
            let config = ConfigLoader::load()?;
            let rt = Runtime::new()?;
            rt.block_on(commands::live::run(&config))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => commands::config::show(&format)?,
            ConfigAction::Path => commands::config::path()?,
            ConfigAction::Init { force } => commands::config::init(force)?,
        },
    }

    Ok(())
}
