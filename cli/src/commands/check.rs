use colored::*;
use ipsift_common::network::address;
use ipsift_common::network::record::AddressRecord;
use ipsift_core::classifier;

use crate::terminal::{colors, format, print};

pub fn check(token: &str) {
    let token: &str = token.trim();
    let record: AddressRecord = classifier::classify(token);

    let mut details: Vec<format::Detail> = format::record_to_details(&record);
    if let Some(canonical) = address::canonical(token).filter(|c| c != token) {
        details.push(("Canon".to_string(), canonical.as_str().color(colors::IPV4_ADDR)));
    }
    print::record(0, &record.address, &details);
}
