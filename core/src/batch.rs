//! # Batch Orchestrator
//!
//! Runs the full pipeline over a block of text:
//!
//! 1. **Split** on `\n` / `\r\n`, trim, drop empty lines.
//! 2. **Dispatch** each line to the CIDR or range expander, or keep it as a literal.
//! 3. **Collect** capacity failures per line and carry on. Malformed
//!    expressions contribute nothing and are not recorded.
//! 4. **Merge & dedupe**, first occurrence wins, order preserved.
//! 5. **Classify** every surviving token.
//!
//! Every call starts from scratch; nothing is carried over between calls.

use std::collections::HashSet;

use ipsift_common::config::Config;
use ipsift_common::error::ExpandError;
use ipsift_common::network::record::AddressRecord;
use tracing::{debug, warn};

use crate::classifier;
use crate::expand::{self, LineKind};

/// A line whose expansion was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineFailure {
    pub line: String,
    pub error: ExpandError,
}

impl LineFailure {
    /// Human-readable reason, including the offending count.
    pub fn reason(&self) -> String {
        self.error.to_string()
    }
}

/// Counts over a [`ResultSet`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub private: usize,
    pub failed_lines: usize,
}

/// Output of one [`process`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub records: Vec<AddressRecord>,
    pub failures: Vec<LineFailure>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.records, self.failures.len())
    }
}

/// Counts over any selection of records, e.g. a filtered view of a [`ResultSet`].
pub fn summarize<'a>(
    records: impl IntoIterator<Item = &'a AddressRecord>,
    failed_lines: usize,
) -> Summary {
    let mut summary = Summary {
        failed_lines,
        ..Summary::default()
    };
    for record in records {
        summary.total += 1;
        if record.is_valid {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }
        if record.is_private {
            summary.private += 1;
        }
    }
    summary
}

/// Splits raw input into trimmed, non-empty lines.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Expands, deduplicates and classifies every line of `input`.
pub fn process(input: &str, config: &Config) -> ResultSet {
    let limit: usize = config.expansion_limit;
    let mut tokens: Vec<String> = Vec::new();
    let mut failures: Vec<LineFailure> = Vec::new();

    for line in split_lines(input) {
        debug!("Dispatching '{line}' as {:?}", LineKind::of(line));

        match expand::expand_line(line, limit) {
            Ok(expanded) => tokens.extend(expanded),
            Err(error) => {
                warn!("Skipping '{line}': {error}");
                failures.push(LineFailure {
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    let records: Vec<AddressRecord> = dedupe(tokens)
        .iter()
        .map(|token| classifier::classify(token))
        .collect();

    debug!(
        "Batch produced {} records and {} failed lines",
        records.len(),
        failures.len()
    );

    ResultSet { records, failures }
}

/// Removes repeated tokens, keeping the first occurrence in place.
fn dedupe(tokens: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(tokens.len());
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
