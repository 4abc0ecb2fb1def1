use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codesim", version, about = "Structural similarity scoring for source code")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file (defaults to ./codesim.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score two source files
    Compare {
        #[arg(value_name = "FILE_A")]
        a: PathBuf,
        #[arg(value_name = "FILE_B")]
        b: PathBuf,
        /// Print `{"similarity": ...}` instead of the summary
        #[arg(long)]
        json: bool,
    },
    /// Dump every sub-score for two files as one JSON line
    Features {
        #[arg(value_name = "FILE_A")]
        a: PathBuf,
        #[arg(value_name = "FILE_B")]
        b: PathBuf,
    },
    /// Score every pair of source files under a directory
    Matrix {
        #[arg(value_name = "DIR")]
        dir: PathBuf,
        /// Source extensions to include (repeatable, overrides config)
        #[arg(long = "ext", value_name = "EXT")]
        extensions: Vec<String>,
        /// Hide pairs scoring below this (0.0 to 1.0)
        #[arg(long)]
        threshold: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}
