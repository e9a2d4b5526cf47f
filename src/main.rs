//! Tuned-filter sizing command-line interface.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tuned_filter::prelude::*;

#[derive(Parser)]
#[command(name = "tuned_filter")]
#[command(about = "Steady-state sizing calculator for single-tuned harmonic filter branches")]
#[command(version)]
struct Cli {
    /// Parameter file (`key = value` text, UTF-8 or Latin-1)
    #[arg(value_name = "FILE")]
    params: Option<PathBuf>,

    /// Write the default parameter template to FILE (or parameters.txt) and exit
    #[arg(long)]
    init: bool,

    /// Directory receiving results.json, results.txt, and results.xlsx
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Echo the parsed parameters before calculating
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init {
        let path = cli
            .params
            .unwrap_or_else(|| PathBuf::from("parameters.txt"));
        write_default_template(&path)
            .with_context(|| format!("writing template to {}", path.display()))?;
        println!("wrote default parameter template to {}", path.display());
        return Ok(());
    }

    let Some(path) = cli.params else {
        bail!("no parameter file given; run with --init to create parameters.txt");
    };

    let params = load_parameters(&path)
        .with_context(|| format!("loading parameters from {}", path.display()))?;
    if cli.verbose {
        println!("{params:#?}\n");
    }

    let result = calculate(&params)?;
    let report = Report::from_result(&result);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_text(&mut out, &report)?;
    out.flush()?;

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    write_artifacts(&cli.out_dir, &report)
        .with_context(|| format!("writing results to {}", cli.out_dir.display()))?;
    println!("\nresults written to {}", cli.out_dir.display());
    Ok(())
}
