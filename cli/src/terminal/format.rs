use colored::*;
use ipsift_common::network::record::AddressRecord;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn valid_to_detail(is_valid: bool) -> Detail {
    let value: ColoredString = if is_valid {
        "✓ yes".color(colors::VALID)
    } else {
        "✗ no".color(colors::INVALID)
    };
    (String::from("Valid"), value)
}

pub fn private_to_detail(is_private: bool) -> Detail {
    let value: ColoredString = if is_private {
        "yes".color(colors::PRIVATE)
    } else {
        "no".color(colors::PUBLIC)
    };
    (String::from("Private"), value)
}

pub fn integer_to_detail(integer_value: Option<u32>) -> Option<Detail> {
    integer_value.map(|value| {
        (
            String::from("Integer"),
            value.to_string().color(colors::INTEGER),
        )
    })
}

pub fn record_to_details(record: &AddressRecord) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        valid_to_detail(record.is_valid),
        private_to_detail(record.is_private),
    ];

    if let Some(integer_detail) = integer_to_detail(record.integer_value) {
        details.push(integer_detail);
    }

    details
}
