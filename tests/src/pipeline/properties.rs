#![cfg(test)]
use ipsift_common::config::Config;
use ipsift_common::network::address;
use ipsift_core::batch;
use ipsift_core::classifier;
use ipsift_core::expand;

#[test]
fn round_trip_is_canonical() {
    let samples = [
        "0.0.0.0",
        "1.2.3.4",
        "01.002.0003.4",
        "127.0.0.1",
        "172.31.255.255",
        "255.255.255.255",
    ];
    for text in samples {
        let value: u32 = address::encode(text).unwrap();
        assert_eq!(Some(address::decode(value)), address::canonical(text));
        assert_eq!(address::encode(&address::decode(value)), Some(value));
    }
}

#[test]
fn private_boundaries_are_exact() {
    let cases = [
        ("10.255.255.255", true),
        ("11.0.0.0", false),
        ("172.31.255.255", true),
        ("172.32.0.0", false),
        ("192.168.255.255", true),
        ("192.169.0.0", false),
    ];
    for (text, expected) in cases {
        assert_eq!(classifier::classify(text).is_private, expected, "{text}");
    }
}

#[test]
fn expansions_are_ascending_and_unique() {
    for token in ["10.1.2.3/27", "192.168.0.250-192.168.1.5", "1.2.3.0-200"] {
        let out: Vec<String> = expand::expand_line(token, 5000).unwrap();
        let values: Vec<u32> = out.iter().map(|a| address::encode(a).unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] + 1 == w[1]), "{token}");
    }
}

#[test]
fn reported_count_matches_block_size() {
    for prefix in 0..=32u32 {
        let token = format!("10.0.0.0/{prefix}");
        let expected: u64 = 1u64 << (32 - prefix);
        match expand::expand_cidr(&token, 5000) {
            Ok(out) => assert_eq!(out.len() as u64, expected, "{token}"),
            Err(err) => {
                assert!(expected > 5000, "{token}");
                assert!(err.to_string().contains(&expected.to_string()), "{token}");
            }
        }
    }
}

#[test]
fn output_has_no_duplicates() {
    let input = "10.0.0.0/29\n10.0.0.4-10.0.0.12\n10.0.0.3\n10.0.0.5-9";
    let result = batch::process(input, &Config::default());
    let mut seen = std::collections::HashSet::new();
    assert!(result.records.iter().all(|r| seen.insert(r.address.clone())));
    assert_eq!(result.records.len(), 13);
}
