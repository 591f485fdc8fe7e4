mod gen;
mod schema;
mod types;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seedgen")]
#[command(version)]
#[command(about = "Generate synthetic test data from a table schema", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate records for a schema file and encode them
    Gen {
        /// Schema/config file (.json, .yaml or .yml)
        #[arg(short, long)]
        schema: PathBuf,

        /// Number of records (overrides recordCount)
        #[arg(short, long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Output format: sql, json, csv, or xml (overrides format)
        #[arg(short, long)]
        format: Option<String>,

        /// SQL dialect: mysql, postgresql, sqlite, or mongodb (overrides dialect)
        #[arg(short, long)]
        dialect: Option<String>,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// End of the date range, RFC 3339 (default: now)
        #[arg(long)]
        now: Option<chrono::DateTime<chrono::Utc>>,

        /// Records per INSERT statement
        #[arg(long)]
        batch_size: Option<usize>,

        /// Skip the CREATE TABLE statement in SQL output
        #[arg(long)]
        no_create_table: bool,

        /// Compact (single-line) JSON output
        #[arg(long)]
        compact: bool,

        /// Largest accepted record count
        #[arg(long, default_value_t = crate::orchestrator::DEFAULT_MAX_COUNT)]
        max_count: usize,

        /// Abort generation after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Output file (default: stdout)
        /// Compressed when it ends in .gz, .bz2, .xz or .zst
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the result with metadata as JSON
        #[arg(long)]
        json: bool,

        /// Show progress during generation
        #[arg(short, long)]
        progress: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the available field types
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print JSON Schemas for the config file and the --json result
    Schema {
        /// Schema name (config or result); all schemas when omitted
        name: Option<String>,

        /// Write each schema to <dir>/<name>.schema.json instead of stdout
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn init_tracing(verbose: bool) {
    let default = if verbose { "seedgen=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Gen {
            schema,
            count,
            format,
            dialect,
            seed,
            now,
            batch_size,
            no_create_table,
            compact,
            max_count,
            timeout,
            output,
            json,
            progress,
            verbose,
        } => {
            init_tracing(verbose);
            gen::run(gen::GenArgs {
                schema,
                count,
                format,
                dialect,
                seed,
                now,
                batch_size,
                no_create_table,
                compact,
                max_count,
                timeout,
                output,
                json,
                progress,
                verbose,
            })
        }
        Commands::Types { json } => types::run(json),
        Commands::Schema { name, output_dir } => schema::run(name, output_dir),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "seedgen", &mut io::stdout());
            Ok(())
        }
    }
}
