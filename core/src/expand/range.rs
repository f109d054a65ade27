//! Range expressions, split on the first `-`:
//!
//! * full range `a.b.c.d-e.f.g.h`,
//! * shorthand last-octet range `a.b.c.d-n` with `n <= 255`.
//!
//! Descending ranges are empty, not swapped.

use ipsift_common::error::{ExpandError, ExpansionKind};
use ipsift_common::network::address;
use ipsift_common::network::range::Ipv4Range;
use tracing::debug;

/// Parses either range grammar.
///
/// Returns `None` when neither grammar matches or the range is descending.
pub fn parse_range(token: &str) -> Option<Ipv4Range> {
    let (start_str, end_str) = token.split_once('-')?;
    let start: u32 = address::encode(start_str)?;

    let end: u32 = if address::is_valid_address(end_str) {
        address::encode(end_str)?
    } else {
        parse_last_octet_end(start, end_str)?
    };

    if end < start {
        return None;
    }
    Some(Ipv4Range::new(start, end))
}

/// Resolves the `n` of `a.b.c.d-n` to a full address sharing `a.b.c`.
fn parse_last_octet_end(start: u32, end_str: &str) -> Option<u32> {
    let end_str = end_str.trim();
    if end_str.is_empty() || !end_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let last_octet: u8 = end_str.parse::<u8>().ok()?;

    Some((start & 0xFFFF_FF00) | u32::from(last_octet))
}

/// Expands a range token into its ascending addresses, both ends inclusive.
pub fn expand_range(token: &str, limit: usize) -> Result<Vec<String>, ExpandError> {
    let Some(range) = parse_range(token) else {
        debug!("Ignoring malformed or descending range '{token}'");
        return Ok(Vec::new());
    };

    super::materialize(ExpansionKind::Range, range, limit)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 5000;

    fn seven() -> Vec<String> {
        (4..=10).map(|last| format!("1.2.3.{last}")).collect()
    }

    #[test]
    fn test_full_range_inclusive() {
        assert_eq!(expand_range("1.2.3.4-1.2.3.10", LIMIT).unwrap(), seven());
    }

    #[test]
    fn test_shorthand_range() {
        assert_eq!(expand_range("1.2.3.4-10", LIMIT).unwrap(), seven());
    }

    #[test]
    fn test_full_range_crosses_octet_boundary() {
        assert_eq!(
            expand_range("10.0.0.254-10.0.1.1", LIMIT).unwrap(),
            vec!["10.0.0.254", "10.0.0.255", "10.0.1.0", "10.0.1.1"]
        );
    }

    #[test]
    fn test_descending_is_silently_empty() {
        assert_eq!(expand_range("1.2.3.10-1.2.3.4", LIMIT), Ok(vec![]));
        assert_eq!(expand_range("1.2.3.10-4", LIMIT), Ok(vec![]));
    }

    #[test]
    fn test_single_address_range() {
        assert_eq!(expand_range("1.2.3.4-1.2.3.4", LIMIT).unwrap(), vec!["1.2.3.4"]);
        assert_eq!(expand_range("1.2.3.4-4", LIMIT).unwrap(), vec!["1.2.3.4"]);
    }

    #[test]
    fn test_shorthand_upper_bound() {
        assert_eq!(expand_range("1.2.3.250-255", LIMIT).unwrap().len(), 6);
        assert_eq!(expand_range("1.2.3.250-256", LIMIT), Ok(vec![]));
        assert_eq!(expand_range("1.2.3.250-99999999999999999999", LIMIT), Ok(vec![]));
    }

    #[test]
    fn test_shorthand_output_is_canonical() {
        assert_eq!(
            expand_range("010.002.003.004-5", LIMIT).unwrap(),
            vec!["10.2.3.4", "10.2.3.5"]
        );
    }

    #[test]
    fn test_full_range_over_limit() {
        assert_eq!(
            expand_range("10.0.0.0-10.0.255.255", LIMIT),
            Err(ExpandError::CapacityExceeded {
                kind: ExpansionKind::Range,
                count: 65536,
                limit: LIMIT,
            })
        );
    }

    #[test]
    fn test_full_range_whole_address_space() {
        assert!(matches!(
            expand_range("0.0.0.0-255.255.255.255", LIMIT),
            Err(ExpandError::CapacityExceeded { count, .. }) if count == 1u64 << 32
        ));
    }

    #[test]
    fn test_shorthand_checks_capacity() {
        assert!(matches!(
            expand_range("1.2.3.0-255", 100),
            Err(ExpandError::CapacityExceeded { count: 256, limit: 100, .. })
        ));
    }

    #[test]
    fn test_malformed_is_silent() {
        for token in [
            "1.2.3.4-abc",
            "1.2.3.4-",
            "1.2.3.4-1.2.3",
            "1.2.3.4-+5",
            "1.2.3-1.2.3.4",
            "1.2.3.4-5-6",
            "-1.2.3.4",
        ] {
            assert_eq!(expand_range(token, LIMIT), Ok(vec![]), "token {token}");
        }
    }

    #[test]
    fn test_sides_are_trimmed() {
        assert_eq!(expand_range("1.2.3.4 - 1.2.3.5", LIMIT).unwrap().len(), 2);
        assert_eq!(expand_range("1.2.3.4 - 5", LIMIT).unwrap().len(), 2);
    }
}
