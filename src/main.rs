use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gramdex::utils::progress;
use gramdex::{output, Index, IndexConfig};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gramdex")]
#[command(about = "Substring search over a line-oriented corpus using an n-gram index")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON index configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the corpus lines containing each query
    Find {
        /// Corpus file, one string per line ("-" for stdin)
        corpus: PathBuf,

        /// Substrings to search for
        #[arg(required = true)]
        queries: Vec<String>,

        /// Print only the number of matches per query
        #[arg(short, long)]
        count: bool,

        /// When to use colors
        #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
        color: ColorMode,
    },
    /// Show index statistics for a corpus
    Stats {
        /// Corpus file, one string per line ("-" for stdin)
        corpus: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => IndexConfig::load(path)?,
        None => IndexConfig::default(),
    };

    match cli.command {
        Commands::Find {
            corpus,
            queries,
            count,
            color,
        } => {
            let index = build(&corpus, &config)?;
            let choice = ColorChoice::from(color);
            let heading = queries.len() > 1;

            for query in &queries {
                let matches = index.find(query);
                if count {
                    output::print_count(query, matches.len(), choice)?;
                } else {
                    output::print_matches(query, &matches, heading, choice)?;
                }
            }
        }
        Commands::Stats { corpus, json } => {
            let index = build(&corpus, &config)?;
            let stats = index.stats();
            if json {
                output::print_stats_json(&stats)?;
            } else {
                output::print_stats(&stats)?;
            }
        }
    }

    Ok(())
}

/// Read the corpus and build its index, with a spinner for large inputs
fn build(corpus: &Path, config: &IndexConfig) -> Result<Index<Vec<u8>>> {
    let lines = read_corpus(corpus)?;

    if lines.len() < config.progress_threshold {
        return Ok(Index::with_config(lines, config));
    }

    let spinner = progress::spinner("Building index...");
    let index = Index::with_config(lines, config);
    spinner.finish_and_clear();
    Ok(index)
}

/// Split a corpus into lines, dropping a trailing `\r` from each
fn read_corpus(path: &Path) -> Result<Vec<Vec<u8>>> {
    let data = if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("Failed to read corpus from stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("Failed to read corpus {}", path.display()))?
    };

    Ok(split_lines(&data))
}

fn split_lines(data: &[u8]) -> Vec<Vec<u8>> {
    if data.is_empty() {
        return Vec::new();
    }

    let data = data.strip_suffix(b"\n").unwrap_or(data);
    data.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}
