// Author: Dustin Pilgrim
// License: MIT

//! necl command line interface

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use necl::config::Entry;
use necl::{export, NeclConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// NECL file to evaluate (must end in .necl)
    file: PathBuf,

    /// Print only the attribute or block at this dotted path
    ///
    /// Leading segments name blocks, e.g. `deployment.container.image`.
    #[arg(short = 'g', long = "get", value_name = "PATH")]
    get: Option<String>,

    /// Print the typed tree (type tags included) instead of plain values
    #[arg(short = 't', long = "typed")]
    typed: bool,

    /// Print JSON on a single line
    #[arg(short = 'c', long = "compact")]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("NECL_LOG"))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        for error in e.chain() {
            eprintln!("{error}")
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = NeclConfig::from_file(&cli.file)?;

    let value = match cli.get.as_deref() {
        None if cli.typed => serde_json::to_value(config.document())?,
        None => export::document_to_value(config.document()),
        Some(path) => {
            let entry = config
                .lookup(path)
                .with_context(|| format!("nothing at '{}' in {}", path, cli.file.display()))?;
            tracing::debug!(path, "selected entry");
            select(entry, cli.typed)?
        }
    };

    output(&value, cli.compact)
}

fn select(entry: Entry<'_>, typed: bool) -> anyhow::Result<serde_json::Value> {
    let value = match (entry, typed) {
        (Entry::Attribute(attribute), true) => serde_json::to_value(attribute)?,
        (Entry::Attribute(attribute), false) => export::attribute_value_to_json(&attribute.value),
        (Entry::Block(block), true) => serde_json::to_value(block)?,
        (Entry::Block(block), false) => export::block_to_value(block),
    };
    Ok(value)
}

fn output(value: &serde_json::Value, compact: bool) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if compact {
        serde_json::to_writer(&mut stdout, value)?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}
