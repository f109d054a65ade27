//! Error types shared by the engine and its front ends.
//!
//! Malformed CIDR and range expressions are deliberately absent here: they
//! expand to nothing and are not reported.

use std::fmt;

use thiserror::Error;

/// Which grammar produced an oversized expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpansionKind {
    Cidr,
    Range,
}

impl fmt::Display for ExpansionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpansionKind::Cidr => write!(f, "CIDR block"),
            ExpansionKind::Range => write!(f, "Range"),
        }
    }
}

/// Errors raised while expanding a single CIDR or range token.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("{kind} expands to too many addresses ({count} > {limit})")]
    CapacityExceeded {
        kind: ExpansionKind,
        count: u64,
        limit: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Expansion limit must be at least 1")]
    ZeroLimit,
}
