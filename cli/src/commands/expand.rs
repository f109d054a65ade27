use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use ipsift_common::config::Config;
use ipsift_common::network::record::AddressRecord;
use ipsift_core::batch::{self, ResultSet, Summary};
use tracing::{error, info};

use crate::commands::{CommandLine, OutputFormat};
use crate::export;
use crate::terminal::{colors, format, print};

pub fn expand(
    targets: &[String],
    file: Option<&Path>,
    cfg: &Config,
    cmd: &CommandLine,
) -> anyhow::Result<()> {
    let input: String = read_input(targets, file)?;

    let start_time: Instant = Instant::now();
    let result: ResultSet = batch::process(&input, cfg);
    let elapsed: Duration = start_time.elapsed();

    for failure in &result.failures {
        error!("Error expanding '{}': {}", failure.line, failure.reason());
    }

    let records: Vec<&AddressRecord> = visible_records(&result, cmd.only_valid);

    match cmd.format {
        OutputFormat::Table => {
            let summary: Summary = batch::summarize(records.iter().copied(), result.failures.len());
            render_table(&records, summary, elapsed, cmd.quiet);
            Ok(())
        }
        OutputFormat::Csv => write_export(&export::to_csv(&records)?, cmd.output.as_deref()),
        OutputFormat::Json => write_export(&export::to_json(&records)?, cmd.output.as_deref()),
    }
}

/// Records that get rendered or exported; the summary is computed over the same set.
fn visible_records(result: &ResultSet, only_valid: bool) -> Vec<&AddressRecord> {
    result
        .records
        .iter()
        .filter(|record| record.is_valid || !only_valid)
        .collect()
}

/// Positional targets first, then the file; stdin only when neither is given.
fn read_input(targets: &[String], file: Option<&Path>) -> anyhow::Result<String> {
    let mut lines: Vec<String> = targets.to_vec();

    if let Some(path) = file {
        let contents: String = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
        lines.push(contents);
    }

    if lines.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read addresses from stdin")?;
        return Ok(buffer);
    }

    Ok(lines.join("\n"))
}

fn write_export(contents: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            info!("Wrote export to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .context("Failed to write export to stdout")?;
        }
    }
    Ok(())
}

fn render_table(records: &[&AddressRecord], summary: Summary, elapsed: Duration, q_level: u8) {
    if records.is_empty() {
        print::header("zero addresses produced", q_level);
        print::nothing_to_show();
        return;
    }

    print::header("expanded addresses", q_level);
    if q_level < 2 {
        for (idx, record) in records.iter().enumerate() {
            print::record(idx, &record.address, &format::record_to_details(record));
        }
        print::blank();
    }
    if q_level == 0 {
        print::rule();
    }
    print::summary(&summary_rows(summary));

    let total_time: ColoredString = format!("{:.3}s", elapsed.as_secs_f64()).bold().yellow();
    print::status(&format!("Completed in {total_time}"));
}

fn summary_rows(summary: Summary) -> Vec<(&'static str, ColoredString)> {
    vec![
        ("Records", summary.total.to_string().bold()),
        ("Valid", summary.valid.to_string().color(colors::VALID)),
        ("Invalid", summary.invalid.to_string().color(colors::INVALID)),
        ("Private", summary.private.to_string().color(colors::PRIVATE)),
        ("Failed lines", summary.failed_lines.to_string().color(colors::INVALID)),
    ]
}
