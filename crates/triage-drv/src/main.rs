//! triage - command-line driver.
//!
//! Reads a rule script and a CSV of vital-sign records, runs the pipeline,
//! and prints either the resulting table or a value-counts summary of one
//! column. `--emit-tokens` and `--emit-ast` stop after the corresponding
//! phase and dump it, which is the quickest way to see what the scanner or
//! parser made of a script.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use triage_drv::{display, loader};
use triage_util::Handler;

/// Evaluate triage rule scripts against vital-sign tables.
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate triage rule scripts against vital-sign tables", long_about = None)]
struct Cli {
    /// Rule script file
    script: PathBuf,

    /// CSV data file with a header row
    data: PathBuf,

    /// Print at most this many rows of the result table
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Print a value-counts summary of this column instead of the table
    #[arg(long)]
    summary: Option<String>,

    /// Stop after scanning and print the token stream
    #[arg(long)]
    emit_tokens: bool,

    /// Stop after parsing and print the AST
    #[arg(long)]
    emit_ast: bool,

    /// Skip the derived-feature computations at load time
    #[arg(long)]
    no_derived: bool,

    /// Enable verbose logging
    #[arg(short, long, env = "TRIAGE_VERBOSE")]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("cannot read script file {}", cli.script.display()))?;

    let tokens = triage_lex::tokenize(&source)?;
    tracing::debug!(tokens = tokens.len(), "scanned script");
    if cli.emit_tokens {
        for token in &tokens {
            println!("{:?}", token);
        }
        return Ok(());
    }

    let script = triage_par::parse(tokens)?;
    tracing::debug!(rules = script.rules.len(), "parsed script");
    if cli.emit_ast {
        println!("{:#?}", script);
        return Ok(());
    }

    let mut rows = loader::load_table(&cli.data)?;
    if !cli.no_derived {
        loader::derive_features(&mut rows);
    }
    tracing::info!(rows = rows.len(), rules = script.rules.len(), "evaluating");

    let handler = Handler::new();
    let rows = triage_eval::evaluate(&script, rows, &handler)?;

    for diagnostic in handler.diagnostics() {
        eprintln!("{}: {}", diagnostic.level, diagnostic.message);
    }

    match &cli.summary {
        Some(column) => {
            let counts = display::value_counts(&rows, column);
            print!("{}", display::render_summary(column, &counts));
        },
        None => print!("{}", display::render_table(&rows, cli.limit)),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
