use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use tagtree::Config;

#[derive(Debug, Parser)]
#[command(author, version, about = "Parse a tag-only XML document into a tree")]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Maximum number of nested open elements (0 means unlimited)
    #[arg(long, default_value_t = 0)]
    max_depth: usize,

    /// Maximum input size in bytes (0 means unlimited)
    #[arg(long, default_value_t = 0)]
    max_size: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::new(args.max_depth, args.max_size);

    let doc = match &args.input {
        Some(path) => {
            info!("Reading file: {}", path.display());
            tagtree::parse_file_with_config(path, config)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            tagtree::from_str_with_config(&buffer, config).context("failed to parse stdin")?
        }
    };

    print!("{doc}");
    Ok(())
}
