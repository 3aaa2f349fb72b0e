//! CLI argument definitions for xnb

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "xnb")]
#[command(about = "Extract raw assets from a game content catalog")]
#[command(version)]
pub struct Args {
    /// Content directory to read assets from
    pub content: PathBuf,

    /// Output directory; asset names become relative paths beneath it
    pub out_dir: PathBuf,

    /// List asset names without extracting (dry run)
    #[arg(short, long)]
    pub list: bool,

    /// Keep extracting past per-asset failures and report them at the end
    #[arg(short, long)]
    pub keep_going: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
