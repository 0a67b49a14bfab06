//! Tally CLI - Command-line interface for Tally expense statements.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally_driver::{split_members, DriverConfig};

mod commands;

/// Tally - Split shared expenses written as plain sentences
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Comma-separated participant names (default: $TALLY_MEMBERS)
    #[arg(short, long, global = true)]
    members: Option<String>,

    /// ISO 4217 currency code (default: $TALLY_CURRENCY or USD)
    #[arg(short, long, global = true)]
    currency: Option<String>,

    /// Decimal digits for amounts, overriding the currency's
    #[arg(long, global = true)]
    digits: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a statement and show tokens
    Lex {
        /// Statement text
        text: String,
    },

    /// Parse a statement and show the AST
    Parse {
        /// Statement text
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show ranked suggestions at a caret position
    Suggest {
        /// Statement text
        text: String,
        /// Byte offset of the caret (default: end of text)
        #[arg(long)]
        caret: Option<usize>,
    },

    /// Evaluate an amount or share expression
    Eval {
        /// Expression, e.g. `100+25%` or `2x`
        expr: String,
        /// Value for the variable `x`
        #[arg(long)]
        x: Option<f64>,
    },

    /// Settle payers, items and splits from a JSON file
    Settle {
        /// Input file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a statement and settle it
    Statement {
        /// Statement text
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let config = config(&cli);

    match cli.command {
        Commands::Lex { text } => commands::lex::run(&text, &config),
        Commands::Parse { text, json } => commands::parse::run(&text, &config, json),
        Commands::Suggest { text, caret } => commands::suggest::run(&text, caret, &config),
        Commands::Eval { expr, x } => commands::eval::run(&expr, x),
        Commands::Settle { file, json } => {
            commands::settle::run(&file, &config, cli.digits, json)
        }
        Commands::Statement { text, json } => commands::statement::run(&text, &config, json),
    }
}

/// Environment configuration with command-line overrides applied.
fn config(cli: &Cli) -> DriverConfig {
    let env = DriverConfig::from_env();
    let mut builder = DriverConfig::builder()
        .context(env.context)
        .currency(cli.currency.clone().unwrap_or(env.currency));
    if let Some(members) = &cli.members {
        builder = builder.members(split_members(members));
    }
    if let Some(digits) = cli.digits {
        builder = builder.digits(digits);
    }
    builder.build()
}
