//! xnb - batch extractor for packed game content

use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use xnb::{unpack, ContentCatalog, DirCatalog, UnpackOptions};

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let catalog = DirCatalog::open(&args.content)
        .with_context(|| format!("Failed to open content directory {:?}", args.content))?;

    if args.verbose {
        eprintln!(
            "Found {} assets in {:?}",
            catalog.assets().len(),
            args.content
        );
    }

    if args.list {
        for name in catalog.assets() {
            println!("{}", name);
        }
        return Ok(());
    }

    let started = Instant::now();
    let options = UnpackOptions {
        keep_going: args.keep_going,
        cancel: None,
    };

    let summary = unpack(&catalog, &args.out_dir, &options, |name| {
        println!("{}", name);
    })?;

    for failure in &summary.failures {
        eprintln!("Warning: failed '{}': {}", failure.name, failure.error);
    }
    eprintln!(
        "Extracted: {}, Failed: {}",
        summary.written.len(),
        summary.failures.len()
    );
    eprintln!("> Done in {:.2} seconds", started.elapsed().as_secs_f64());

    if !summary.failures.is_empty() {
        bail!("{} assets failed to extract", summary.failures.len());
    }

    Ok(())
}
