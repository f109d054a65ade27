//! # IPv4 Range Model
//!
//! An inclusive range of IPv4 addresses held as `u32` bounds.
//!
//! Used by the expanders to compute how many addresses an expression covers
//! before any of them is materialized.

use crate::network::address;

/// A continuous range of IPv4 addresses, inclusive on both ends.
///
/// A range whose `end` is below its `start` is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start: u32,
    pub end: u32,
}

impl Ipv4Range {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of addresses covered. `0.0.0.0/0` covers 2^32, hence `u64`.
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            return 0;
        }
        u64::from(self.end) - u64::from(self.start) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u32> + Clone {
        self.start..=self.end
    }

    /// Materializes every address as dotted-quad text, ascending.
    pub fn addresses(&self) -> Vec<String> {
        self.iter().map(address::decode).collect()
    }
}

/// Creates the range covering the network block of `ip/prefix`.
///
/// `ip` does not have to be the network address; host bits are masked off.
/// Returns `None` for a prefix above 32.
pub fn cidr_range(ip: u32, prefix: u8) -> Option<Ipv4Range> {
    if prefix > 32 {
        return None;
    }
    let mask: u32 = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    };
    let network: u32 = ip & mask;
    let broadcast: u32 = network | !mask;

    Some(Ipv4Range::new(network, broadcast))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
