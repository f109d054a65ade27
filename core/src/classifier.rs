//! Per-token classification: validity, integer value and RFC1918 membership.

use ipsift_common::network::address;
use ipsift_common::network::range::Ipv4Range;
use ipsift_common::network::record::AddressRecord;

/// `10.0.0.0/8`
pub const PRIVATE_10: Ipv4Range = Ipv4Range {
    start: 0x0A00_0000,
    end: 0x0AFF_FFFF,
};
/// `172.16.0.0/12`
pub const PRIVATE_172: Ipv4Range = Ipv4Range {
    start: 0xAC10_0000,
    end: 0xAC1F_FFFF,
};
/// `192.168.0.0/16`
pub const PRIVATE_192: Ipv4Range = Ipv4Range {
    start: 0xC0A8_0000,
    end: 0xC0A8_FFFF,
};

const PRIVATE_BLOCKS: [Ipv4Range; 3] = [PRIVATE_10, PRIVATE_172, PRIVATE_192];

/// Whether `value` lies in one of the RFC1918 blocks, bounds inclusive.
pub fn is_private(value: u32) -> bool {
    PRIVATE_BLOCKS
        .iter()
        .any(|block| block.start <= value && value <= block.end)
}

/// Classifies a single literal token. Pure.
pub fn classify(token: &str) -> AddressRecord {
    match address::encode(token) {
        Some(value) => AddressRecord::valid(token, value, is_private(value)),
        None => AddressRecord::invalid(token),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
