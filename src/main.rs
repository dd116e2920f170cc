use anyhow::Result;
use clap::{Parser, Subcommand};
use rateconv::cli::convert::parse_amount;
use rateconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for rateconv::AppCommand {
    fn from(cmd: Commands) -> rateconv::AppCommand {
        match cmd {
            Commands::Form => rateconv::AppCommand::Form,
            Commands::Convert { from, to, amount } => {
                rateconv::AppCommand::Convert { from, to, amount }
            }
            Commands::Rates => rateconv::AppCommand::Rates,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Open the interactive converter (default)
    Form,
    /// Convert an amount between two currencies
    Convert {
        /// Currency to convert from, e.g. USD
        #[arg(short, long)]
        from: String,
        /// Currency to convert to, e.g. EUR
        #[arg(short, long)]
        to: String,
        /// Amount to convert, zero or greater
        #[arg(short, long, value_parser = parse_amount)]
        amount: f64,
    },
    /// Display the stored exchange rates
    Rates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => rateconv::cli::setup::setup(),
        Some(cmd) => rateconv::run_command(cmd.into(), cli.config_path.as_deref()),
        None => rateconv::run_command(rateconv::AppCommand::Form, cli.config_path.as_deref()),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
