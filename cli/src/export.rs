//! CSV and JSON export of classified records.
//!
//! Both formats share one row shape: `ip`, `valid`, `private` as `yes`/`no`,
//! and `int` as a decimal string, empty for invalid addresses.

use anyhow::Context;
use ipsift_common::network::record::AddressRecord;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ExportRow<'a> {
    pub ip: &'a str,
    pub valid: bool,
    pub private: &'static str,
    pub int: String,
}

impl<'a> From<&'a AddressRecord> for ExportRow<'a> {
    fn from(record: &'a AddressRecord) -> Self {
        Self {
            ip: &record.address,
            valid: record.is_valid,
            private: if record.is_private { "yes" } else { "no" },
            int: record
                .integer_value
                .map(|value| value.to_string())
                .unwrap_or_default(),
        }
    }
}

fn rows<'a>(records: &[&'a AddressRecord]) -> Vec<ExportRow<'a>> {
    records.iter().map(|record| ExportRow::from(*record)).collect()
}

pub fn to_csv(records: &[&AddressRecord]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if records.is_empty() {
        writer
            .write_record(["ip", "valid", "private", "int"])
            .context("Failed to write CSV header")?;
    }
    for row in rows(records) {
        writer.serialize(row).context("Failed to write CSV row")?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {e}"))?;
    let mut output: String = String::from_utf8(bytes).context("CSV output is not UTF-8")?;
    // The trailing newline is added by the caller.
    output.truncate(output.trim_end().len());

    Ok(output)
}

pub fn to_json(records: &[&AddressRecord]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&rows(records)).context("Failed to serialize records to JSON")
}
