use crate::config::GenerateConfig;
use crate::generator::RunControl;
use crate::orchestrator::Orchestrator;
use crate::progress::record_bar;
use crate::writer::{write_output, Compression};
use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub struct GenArgs {
    pub schema: PathBuf,
    pub count: Option<i64>,
    pub format: Option<String>,
    pub dialect: Option<String>,
    pub seed: Option<u64>,
    pub now: Option<DateTime<Utc>>,
    pub batch_size: Option<usize>,
    pub no_create_table: bool,
    pub compact: bool,
    pub max_count: usize,
    pub timeout: Option<u64>,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub progress: bool,
    pub verbose: bool,
}

impl GenArgs {
    /// Apply command-line overrides on top of the file config.
    fn apply(&self, config: &mut GenerateConfig) {
        if let Some(count) = self.count {
            config.record_count = count;
        }
        if let Some(ref format) = self.format {
            config.format = format.clone();
        }
        if let Some(ref dialect) = self.dialect {
            config.dialect = Some(dialect.clone());
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.now.is_some() {
            config.now = self.now;
        }
        if self.batch_size.is_some() {
            config.batch_size = self.batch_size;
        }
        if self.no_create_table {
            config.create_table = false;
        }
        if self.compact {
            config.pretty = false;
        }
    }
}

pub fn run(args: GenArgs) -> anyhow::Result<()> {
    // Config errors are returned bare so main can classify them
    let mut config = match GenerateConfig::from_path(&args.schema) {
        Err(crate::error::GenError::Io(e)) => {
            return Err(e).with_context(|| format!("failed to read {}", args.schema.display()))
        }
        other => other?,
    };
    args.apply(&mut config);

    let orchestrator = Orchestrator::new().with_max_count(args.max_count);
    orchestrator.validate(&config)?;

    if args.verbose {
        eprintln!(
            "Generating {} records for '{}' ({} fields) as {}...",
            config.record_count,
            config.table_name,
            config.fields.len(),
            config.format
        );
    }

    let mut control = RunControl::default();
    if let Some(secs) = args.timeout {
        control = control.with_deadline(Instant::now() + Duration::from_secs(secs));
    }

    let start_time = Instant::now();
    let result = if args.progress && !args.json {
        let pb = record_bar(config.record_count.max(0) as u64);
        let pb_clone = pb.clone();
        control = control.with_progress(move |n| pb_clone.set_position(n as u64));
        let result = orchestrator.generate_with(&config, &control);
        pb.finish_and_clear();
        result?
    } else {
        orchestrator.generate_with(&config, &control)?
    };
    let elapsed = start_time.elapsed();

    let compression = match args.output.as_deref() {
        Some(path) => write_output(Some(path), &result.text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None if args.json => Compression::None,
        None => write_output(None, &result.text).context("failed to write to stdout")?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if args.verbose || args.output.is_some() {
        eprintln!("✓ Generated {} records", result.record_count);
        eprintln!("  Table: {}", result.table_name);
        match result.dialect {
            Some(dialect) => eprintln!("  Format: {} ({})", result.format, dialect),
            None => eprintln!("  Format: {}", result.format),
        }
        eprintln!("  Size: {} bytes", result.size_bytes);
        eprintln!("  Seed: {}", result.seed);
        eprintln!(
            "  Now: {}",
            result.now.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        );
        if let Some(ref path) = args.output {
            if compression == Compression::None {
                eprintln!("  Output: {}", path.display());
            } else {
                eprintln!("  Output: {} ({})", path.display(), compression);
            }
        }
        eprintln!("  Elapsed: {:.3?}", elapsed);
    }

    Ok(())
}
