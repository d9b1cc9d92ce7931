//! `annot` CLI — build annotated datastream configurations from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Build: overlay annotations onto a baseline config
//! annot build -b baseline.json -a annotations.json
//!
//! # Build to a file
//! annot build -b baseline.json -a annotations.json -o built.json
//!
//! # Read the baseline from stdin
//! cat baseline.json | annot build -b - -a annotations.json
//!
//! # Normalize only: resolve baseline overlaps, no annotation overlay
//! annot normalize -b baseline.json
//! ```
//!
//! Inputs are JSON arrays: the baseline is the datastream's raw
//! `datapoints_config`, the annotations are the documents retrieved for it
//! (in retrieval order — application order is observable in the output).
//! The built configuration is written as pretty-printed JSON to stdout or
//! `-o`; a one-line summary goes to stderr so stdout stays pipeable.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::{self, Read};

use annot_core::Sentinels;

#[derive(Parser)]
#[command(
    name = "annot",
    version,
    about = "Build annotated datastream configurations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overlay annotations onto a baseline configuration
    Build {
        /// Baseline config JSON array ("-" for stdin)
        #[arg(short, long)]
        baseline: String,
        /// Annotations JSON array ("-" for stdin)
        #[arg(short, long)]
        annotations: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Normalize a baseline configuration without applying annotations
    Normalize {
        /// Baseline config JSON array ("-" for stdin)
        #[arg(short, long)]
        baseline: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            baseline,
            annotations,
            output,
        } => {
            if baseline == "-" && annotations == "-" {
                bail!("only one of --baseline and --annotations can read from stdin");
            }
            let baseline_docs = read_documents(&baseline)?;
            let annotation_docs = read_documents(&annotations)?;

            let built = annot_core::build_json(
                &baseline_docs,
                &annotation_docs,
                &Sentinels::default(),
            )
            .context("building configuration")?;

            eprintln!(
                "built {} segments from {} baseline entries and {} annotations",
                built.len(),
                baseline_docs.len(),
                annotation_docs.len()
            );
            write_output(&built, output.as_deref())
        }
        Commands::Normalize {
            baseline,
            output,
        } => {
            let baseline_docs = read_documents(&baseline)?;

            // Normalizing is building with no annotations.
            let built =
                annot_core::build_json(&baseline_docs, &[], &Sentinels::default())
                    .context("normalizing configuration")?;

            eprintln!(
                "normalized {} baseline entries into {} segments",
                baseline_docs.len(),
                built.len()
            );
            write_output(&built, output.as_deref())
        }
    }
}

/// Read a JSON array of documents from a file, or stdin when the path is "-".
fn read_documents(path: &str) -> Result<Vec<Value>> {
    let raw = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?
    };

    let value: Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing JSON from {path}"))?;
    match value {
        Value::Array(docs) => Ok(docs),
        _ => bail!("{path}: expected a JSON array of documents"),
    }
}

/// Write pretty-printed JSON to a file, or stdout when no path is given.
fn write_output(docs: &[Value], path: Option<&str>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(docs).context("rendering output JSON")?;
    match path {
        Some(path) => std::fs::write(path, rendered + "\n")
            .with_context(|| format!("writing {path}"))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
