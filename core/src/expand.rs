//! Expansion of CIDR and range expressions into address tokens.
//!
//! Both expanders share the same contract:
//! * a malformed expression yields `Ok(vec![])` and is not reported,
//! * an expression covering more than `limit` addresses yields
//!   [`ExpandError::CapacityExceeded`] and produces nothing,
//! * the count is checked before any address is materialized.

use ipsift_common::error::{ExpandError, ExpansionKind};
use ipsift_common::network::address;
use ipsift_common::network::range::Ipv4Range;

pub mod cidr;
pub mod range;

pub use cidr::{expand_cidr, parse_cidr};
pub use range::{expand_range, parse_range};

/// How a single input line is dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Cidr,
    Range,
    Literal,
}

impl LineKind {
    /// `/` wins over `-`, so `10.0.0.0/8-9` is handled (and rejected) as CIDR.
    ///
    /// A `-` only marks a range when the text before it is an IPv4 literal;
    /// hyphenated words such as `not-an-ip` stay literals.
    pub fn of(line: &str) -> Self {
        if line.contains('/') {
            return LineKind::Cidr;
        }
        match line.split_once('-') {
            Some((start, _)) if address::is_valid_address(start) => LineKind::Range,
            _ => LineKind::Literal,
        }
    }
}

/// Expands one trimmed input line into its address tokens.
///
/// Literal lines are passed through untouched, valid or not.
pub fn expand_line(line: &str, limit: usize) -> Result<Vec<String>, ExpandError> {
    match LineKind::of(line) {
        LineKind::Cidr => expand_cidr(line, limit),
        LineKind::Range => expand_range(line, limit),
        LineKind::Literal => Ok(vec![line.to_string()]),
    }
}

/// Fails when `count` addresses would exceed `limit`.
pub fn ensure_capacity(kind: ExpansionKind, count: u64, limit: usize) -> Result<(), ExpandError> {
    if count > limit as u64 {
        return Err(ExpandError::CapacityExceeded { kind, count, limit });
    }
    Ok(())
}

/// Checks capacity, then materializes `range`.
pub(crate) fn materialize(
    kind: ExpansionKind,
    range: Ipv4Range,
    limit: usize,
) -> Result<Vec<String>, ExpandError> {
    ensure_capacity(kind, range.len(), limit)?;
    Ok(range.addresses())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
