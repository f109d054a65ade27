//! # IPv4 Address Codec
//!
//! Converts between dotted-quad text and the canonical `u32` form.
//!
//! Validation is strict: exactly four non-empty, all-digit segments, each in
//! `0..=255`, after trimming the surrounding whitespace. Signs, hex and
//! embedded whitespace are rejected. Leading zeros are accepted
//! (`010.0.0.1` is valid and encodes like `10.0.0.1`).

/// Parses the four octets of a dotted-quad literal.
///
/// Returns `None` for anything [`is_ipv4`] would reject.
pub fn octets(text: &str) -> Option<[u8; 4]> {
    let mut octets: [u8; 4] = [0; 4];
    let mut segments = text.trim().split('.');

    for slot in octets.iter_mut() {
        *slot = parse_octet(segments.next()?)?;
    }

    if segments.next().is_some() {
        return None;
    }

    Some(octets)
}

fn parse_octet(segment: &str) -> Option<u8> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Digit-only input that does not fit a u8 is out of range, however long it is.
    segment.parse::<u8>().ok()
}

/// Returns `true` iff `text` is a valid dotted-quad IPv4 literal.
pub fn is_ipv4(text: &str) -> bool {
    octets(text).is_some()
}

/// Encodes a dotted-quad literal as an unsigned 32-bit integer.
pub fn encode(text: &str) -> Option<u32> {
    octets(text).map(u32::from_be_bytes)
}

/// Formats a `u32` as dotted-quad text.
pub fn decode(value: u32) -> String {
    let [a, b, c, d] = value.to_be_bytes();
    format!("{a}.{b}.{c}.{d}")
}

/// Normalizes a valid literal, e.g. `"010.001.000.001"` -> `"10.1.0.1"`.
pub fn canonical(text: &str) -> Option<String> {
    encode(text).map(decode)
}

/// Validator entry point used by the CIDR and range grammars to check each
/// side independently.
pub fn is_valid_address(token: &str) -> bool {
    is_ipv4(token)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
