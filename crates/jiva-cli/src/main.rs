mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jiva",
    version,
    about = "Answer questions about INGRES groundwater assessment data"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where the assessment data and FAQ come from.
#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// INGRES workbook (xlsx). Defaults to the workbook named in the config.
    #[arg(short, long, value_name = "FILE")]
    workbook: Option<PathBuf>,

    /// Dataset snapshot JSON written by `jiva load -O`. Takes precedence over --workbook.
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Dataset config JSON (years and column headers)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom FAQ JSON file
    #[arg(long, value_name = "FILE")]
    faq: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single question
    Ask {
        /// The question, e.g. "extraction in Gujarat in 2023"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        source: SourceArgs,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Answer questions read line by line from stdin
    Chat {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Load a workbook and summarize it, or write it as a dataset snapshot
    Load {
        /// Path to the INGRES xlsx workbook
        workbook: PathBuf,

        /// Dataset config JSON (years and column headers)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the dataset snapshot to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// List the loaded years and the default year
    Years {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Inspect FAQ tables
    Faq {
        #[command(subcommand)]
        action: FaqAction,
    },
}

#[derive(Subcommand)]
enum FaqAction {
    /// List FAQ keywords and answers
    List {
        /// Custom FAQ JSON file (default: built-in INGRES FAQ)
        #[arg(long, value_name = "FILE")]
        faq: Option<PathBuf>,
    },
    /// Validate a custom FAQ file
    Validate {
        /// Path to FAQ JSON file
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Ask {
            query,
            source,
            output,
        } => commands::ask::run(&query.join(" "), &source, &output),
        Commands::Chat { source } => commands::chat::run(&source),
        Commands::Load {
            workbook,
            config,
            output,
            out,
        } => commands::load::run(&workbook, config.as_deref(), &output, out),
        Commands::Years { source } => commands::years::run(&source),
        Commands::Faq { action } => match action {
            FaqAction::List { faq } => commands::faq::list(faq.as_deref()),
            FaqAction::Validate { file } => commands::faq::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
