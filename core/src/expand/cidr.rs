//! CIDR expressions: `a.b.c.d/n` with `0 <= n <= 32`.

use ipsift_common::error::{ExpandError, ExpansionKind};
use ipsift_common::network::address;
use ipsift_common::network::range::{self, Ipv4Range};
use tracing::debug;

/// Parses `ip/prefix` into the block it denotes.
///
/// An address with host bits set is normalized to its network address.
/// Returns `None` unless the token holds exactly one `/`, a valid address
/// and an all-digit prefix in `0..=32`.
pub fn parse_cidr(token: &str) -> Option<Ipv4Range> {
    let (ip_str, prefix_str) = token.split_once('/')?;
    if prefix_str.contains('/') {
        return None;
    }

    let ip: u32 = address::encode(ip_str)?;
    let prefix: u8 = parse_prefix(prefix_str)?;

    range::cidr_range(ip, prefix)
}

fn parse_prefix(prefix_str: &str) -> Option<u8> {
    let prefix_str = prefix_str.trim();
    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix_str.parse::<u8>().ok().filter(|prefix| *prefix <= 32)
}

/// Expands a CIDR token into its ascending addresses.
pub fn expand_cidr(token: &str, limit: usize) -> Result<Vec<String>, ExpandError> {
    let Some(block) = parse_cidr(token) else {
        debug!("Ignoring malformed CIDR expression '{token}'");
        return Ok(Vec::new());
    };

    super::materialize(ExpansionKind::Cidr, block, limit)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
