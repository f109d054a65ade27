#![cfg(test)]
use ipsift_common::config::Config;
use ipsift_common::error::{ExpandError, ExpansionKind};
use ipsift_common::network::record::AddressRecord;
use ipsift_core::batch::{self, ResultSet};

fn addresses(result: &ResultSet) -> Vec<&str> {
    result.records.iter().map(|r| r.address.as_str()).collect()
}

/// A literal followed by a small block keeps input order and classifies
/// everything as private.
#[test]
fn literal_and_cidr_end_to_end() {
    let result: ResultSet = batch::process("192.168.1.1\n10.0.0.0/30", &Config::default());

    assert_eq!(
        result.records,
        vec![
            AddressRecord::valid("192.168.1.1", 3_232_235_777, true),
            AddressRecord::valid("10.0.0.0", 167_772_160, true),
            AddressRecord::valid("10.0.0.1", 167_772_161, true),
            AddressRecord::valid("10.0.0.2", 167_772_162, true),
            AddressRecord::valid("10.0.0.3", 167_772_163, true),
        ]
    );
    assert!(result.failures.is_empty());
}

#[test]
fn invalid_literal_end_to_end() {
    let result: ResultSet = batch::process("not-an-ip", &Config::default());

    assert_eq!(result.records.len(), 1);
    let record: &AddressRecord = &result.records[0];
    assert_eq!(record.address, "not-an-ip");
    assert!(!record.is_valid);
    assert_eq!(record.integer_value, None);
    assert!(!record.is_private);
}

#[test]
fn duplicate_across_literal_and_block() {
    let result: ResultSet = batch::process("10.0.0.0/30\n10.0.0.1", &Config::default());
    assert_eq!(
        addresses(&result),
        vec!["10.0.0.0", "10.0.0.1", "10.0.0.2", "10.0.0.3"]
    );

    let result: ResultSet = batch::process("10.0.0.1\n10.0.0.0/30", &Config::default());
    assert_eq!(
        addresses(&result),
        vec!["10.0.0.1", "10.0.0.0", "10.0.0.2", "10.0.0.3"]
    );
}

#[test]
fn mixed_batch_with_windows_line_endings() {
    let input = "\r\n  8.8.8.8  \r\n1.2.3.4-6\r\n172.16.0.0/16\r\n\r\n1.2.3.10-1.2.3.4\r\n10.0.0.0/abc\r\nbogus\r\n";
    let result: ResultSet = batch::process(input, &Config::default());

    assert_eq!(
        addresses(&result),
        vec!["8.8.8.8", "1.2.3.4", "1.2.3.5", "1.2.3.6", "bogus"]
    );
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].line, "172.16.0.0/16");
    assert_eq!(
        result.failures[0].error,
        ExpandError::CapacityExceeded {
            kind: ExpansionKind::Cidr,
            count: 65536,
            limit: 5000,
        }
    );
}

#[test]
fn oversized_range_reports_count() {
    let result: ResultSet = batch::process("10.0.0.0-10.0.19.255", &Config::default());

    assert!(result.records.is_empty());
    assert_eq!(result.failures.len(), 1);
    assert_eq!(
        result.failures[0].reason(),
        "Range expands to too many addresses (5120 > 5000)"
    );
}

#[test]
fn limit_is_threaded_through() {
    let config: Config = Config::new(2).unwrap();
    let result: ResultSet = batch::process("10.0.0.0/31\n10.0.0.8/30\n1.2.3.4-5\n1.2.3.4-6", &config);

    assert_eq!(
        addresses(&result),
        vec!["10.0.0.0", "10.0.0.1", "1.2.3.4", "1.2.3.5"]
    );
    let failed: Vec<&str> = result.failures.iter().map(|f| f.line.as_str()).collect();
    assert_eq!(failed, vec!["10.0.0.8/30", "1.2.3.4-6"]);
}

#[test]
fn exact_limit_is_accepted() {
    let config: Config = Config::new(4096).unwrap();
    let result: ResultSet = batch::process("10.0.0.0/20", &config);

    assert_eq!(result.records.len(), 4096);
    assert!(result.failures.is_empty());
    assert_eq!(result.records[4095].address, "10.0.15.255");
}

/// A `-` marks a range only after a valid address. Anything else is a
/// literal and shows up as an invalid record, while a valid start with a
/// malformed end still expands to nothing.
#[test]
fn hyphen_without_address_prefix_stays_literal() {
    let result: ResultSet = batch::process("1.2.3-4\n-1.2.3.4\n1.2.3.4-1.2.3", &Config::default());

    let summary: Vec<(&str, bool)> = result
        .records
        .iter()
        .map(|r| (r.address.as_str(), r.is_valid))
        .collect();
    assert_eq!(summary, vec![("1.2.3-4", false), ("-1.2.3.4", false)]);
    assert!(result.records.iter().all(|r| r.integer_value.is_none() && !r.is_private));
    assert!(result.failures.is_empty());
}
