mod commands;
mod output;

use clap::{Parser, Subcommand};
use soilgpt_core::session::DEFAULT_DELAY;
use std::path::PathBuf;
#[cfg(test)]
use std::time::Duration;

const DEFAULT_DELAY_MS: u64 = DEFAULT_DELAY.as_millis() as u64;

#[derive(Parser)]
#[command(
    name = "soilgpt",
    version,
    about = "Rule-based soil interpretation for N/P/K, pH and moisture readings"
)]
struct Cli {
    /// Show debug logs (overridden by SOILGPT_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a question about a soil sample CSV
    Analyze {
        /// Path to CSV file with sampleId,N,P,K,pH,Moisture columns
        csv: PathBuf,

        /// Free-text question, e.g. "Is this good for tomatoes?"
        query: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Custom JSON threshold file
        #[arg(short, long, value_name = "FILE")]
        thresholds: Option<PathBuf>,
    },
    /// Show the status of each reading and the N/P/K proportions
    Classify {
        /// Path to CSV file
        csv: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Custom JSON threshold file
        #[arg(short, long, value_name = "FILE")]
        thresholds: Option<PathBuf>,
    },
    /// Browse the soil knowledge base
    Knowledge {
        #[command(subcommand)]
        action: KnowledgeAction,
    },
    /// Inspect and validate threshold tables
    Thresholds {
        #[command(subcommand)]
        action: ThresholdsAction,
    },
    /// Ask questions about a sample interactively
    Chat {
        /// Path to CSV file
        csv: PathBuf,

        /// Log in under this name
        #[arg(short, long)]
        user: Option<String>,

        /// Simulated answer latency in milliseconds
        #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
        delay_ms: u64,
    },
    /// Simulated chat CLI and issue tracker
    Integrations {
        /// Simulated reply latency in milliseconds
        #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
        delay_ms: u64,
    },
}

#[derive(Subcommand)]
enum KnowledgeAction {
    /// Articles matching a question (title, content or keyword)
    Search {
        query: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List articles, optionally filtered
    List {
        /// Only articles whose title or content contains this text
        #[arg(long)]
        query: Option<String>,

        /// Only articles in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// List article categories
    Categories,
    /// Print one article
    Show {
        id: u32,
    },
}

#[derive(Subcommand)]
enum ThresholdsAction {
    /// Explain a threshold table in plain language
    Explain {
        /// Custom JSON threshold file (default: built-in table)
        #[arg(short, long, value_name = "FILE")]
        thresholds: Option<PathBuf>,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom threshold file
    Validate {
        /// Path to JSON threshold file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            csv,
            query,
            output,
            thresholds,
        } => commands::analyze::run(&csv, &query, &output, thresholds.as_deref()),
        Commands::Classify {
            csv,
            output,
            thresholds,
        } => commands::classify::run(&csv, &output, thresholds.as_deref()),
        Commands::Knowledge { action } => match action {
            KnowledgeAction::Search { query, output } => commands::knowledge::search(&query, &output),
            KnowledgeAction::List { query, category } => {
                commands::knowledge::list(query.as_deref(), category.as_deref())
            }
            KnowledgeAction::Categories => commands::knowledge::categories(),
            KnowledgeAction::Show { id } => commands::knowledge::show(id),
        },
        Commands::Thresholds { action } => match action {
            ThresholdsAction::Explain { thresholds } => {
                commands::thresholds::explain(thresholds.as_deref())
            }
            ThresholdsAction::Schema => commands::thresholds::schema(),
            ThresholdsAction::Validate { file } => commands::thresholds::validate(&file),
        },
        Commands::Chat {
            csv,
            user,
            delay_ms,
        } => commands::chat::run(&csv, user.as_deref(), delay_ms),
        Commands::Integrations { delay_ms } => commands::integrations::run(delay_ms),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SOILGPT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("warning: failed to initialize logging: {e}");
    }
}
