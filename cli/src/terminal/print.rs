//! Terminal rendering for records and batch summaries.
//!
//! Every line goes out as an `info!` event on [`PRINT_TARGET`], which the
//! formatter in `logging` writes verbatim. The `*_lines` builders are pure so
//! layout can be tested without a subscriber.

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::format::Detail;

pub const WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "ipsift::print";

/// Width of the widest record detail key ("Private", "Integer").
const DETAIL_KEY_WIDTH: usize = 7;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn blank() {
    print("");
}

fn print_all(lines: Vec<String>) {
    lines.iter().for_each(|line| print(line));
}

/// Pads `title` with rules on both sides to [`WIDTH`] columns.
pub fn header_line(title: &str) -> String {
    let label: String = format!("⟦ {} ⟧", title.to_uppercase());
    let fill: usize = WIDTH.saturating_sub(UnicodeWidthStr::width(label.as_str()));
    let (left, right) = (fill / 2, fill - fill / 2);

    format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        label.bright_green(),
        "─".repeat(right).color(colors::SEPARATOR)
    )
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }
    let title: String = format!("ipsift v{}", env!("CARGO_PKG_VERSION"));
    print(&header_line(&title).replace('─', "═"));
}

pub fn header(title: &str, q_level: u8) {
    if q_level == 0 {
        print(&header_line(title));
    }
}

pub fn rule() {
    print(&format!("{}", "═".repeat(WIDTH).color(colors::SEPARATOR)));
}

/// `[idx] address` followed by one branch per detail.
pub fn record_lines(idx: usize, address: &str, details: &[Detail]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::with_capacity(details.len() + 1);
    lines.push(format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        address.color(colors::IPV4_ADDR)
    ));

    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        let dots: String = ".".repeat(DETAIL_KEY_WIDTH.saturating_sub(key.len()));
        lines.push(format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
    lines
}

pub fn record(idx: usize, address: &str, details: &[Detail]) {
    print_all(record_lines(idx, address, details));
}

/// `> key....: value` rows, dots aligned to the longest key.
pub fn summary_lines(rows: &[(&str, ColoredString)]) -> Vec<String> {
    let key_width: usize = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    rows.iter()
        .map(|(key, value)| {
            let dots: String = ".".repeat(key_width + 1 - key.len());
            format!(
                "{} {}{}{} {}",
                ">".color(colors::SEPARATOR),
                key.color(colors::PRIMARY),
                dots.color(colors::SEPARATOR),
                ":".color(colors::SEPARATOR),
                value
            )
        })
        .collect()
}

pub fn summary(rows: &[(&str, ColoredString)]) {
    print_all(summary_lines(rows));
}

pub fn status(msg: &str) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg));
}

pub fn nothing_to_show() {
    let msg: String = format!("{}", "No addresses to show".red().bold());
    let pad: usize = WIDTH.saturating_sub(console::measure_text_width(&msg)) / 2;
    print(&format!("{}{}", " ".repeat(pad), msg));
}
