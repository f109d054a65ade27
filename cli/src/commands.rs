pub mod check;
pub mod expand;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use ipsift_common::config::DEFAULT_EXPANSION_LIMIT;

#[derive(Parser)]
#[command(name = "ipsift")]
#[command(about = "Expand, deduplicate and classify IPv4 addresses, CIDR blocks and ranges.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Maximum number of addresses a single CIDR block or range may expand to
    #[arg(short, long, global = true, default_value_t = DEFAULT_EXPANSION_LIMIT)]
    pub limit: usize,

    /// Output format for expanded records
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write csv/json output to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Only render records that are valid IPv4 addresses
    #[arg(long, global = true)]
    pub only_valid: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce output (-q hides headers, -qq hides the record tree)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand and classify addresses, one per line (args, --file, or stdin)
    #[command(alias = "e")]
    Expand {
        /// Addresses, CIDR blocks (a.b.c.d/n) or ranges (a.b.c.d-e.f.g.h, a.b.c.d-n)
        targets: Vec<String>,
        /// Read input lines from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Classify a single address
    #[command(alias = "c")]
    Check { address: String },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether machine-readable output is headed for stdout, in which case
    /// logs must go elsewhere.
    pub fn exports_to_stdout(&self) -> bool {
        self.format != OutputFormat::Table && self.output.is_none()
    }
}
