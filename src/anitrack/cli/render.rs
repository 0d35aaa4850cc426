//! # Rendering Module
//!
//! Turns `CmdResult` payloads into terminal text. Every `render_*` function
//! returns a `String` so output can be tested without a terminal; the
//! command handlers only `print!` what comes back.
//!
//! Width math is done on the plain text with `unicode-width` (titles are
//! often CJK, which take two columns per character) and colors are applied
//! afterwards, so escape codes never throw the alignment off.

use anitrack::api::{CmdMessage, MessageLevel, Recommendation, Stats};
use anitrack::model::{Record, Status};
use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_MAX_WIDTH: usize = 40;
const GENRES_MAX_WIDTH: usize = 36;
const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 5] = ["Title", "Year", "Genres", "Status", "Rating"];

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

/// One row per record, columns aligned. Absent year/rating render blank.
pub fn render_record_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No anime found.\n".to_string();
    }

    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                truncate_to_width(r.title(), TITLE_MAX_WIDTH),
                r.year().map(|y| y.to_string()).unwrap_or_default(),
                truncate_to_width(&r.genres().join(", "), GENRES_MAX_WIDTH),
                r.status().to_string(),
                r.rating().map(|v| v.to_string()).unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_to_width(h, *w))
        .collect();
    out.push_str(&format!("{}\n", header.join(COLUMN_GAP).trim_end().bold()));

    for (row, record) in rows.iter().zip(records) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, w))| {
                let padded = pad_to_width(cell, *w);
                if col == 3 {
                    status_style(record.status(), padded).to_string()
                } else {
                    padded
                }
            })
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }
    out
}

pub fn render_stats(stats: &Stats) -> String {
    let average = stats
        .average_rating
        // Debug keeps a trailing ".0" on whole numbers
        .map(|avg| format!("{:?}", avg))
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        format!("{} {}", "Total:".bold(), stats.total),
        format!("{} {}", "Average Rating:".bold(), average),
        format!("{}", "Top Genres:".bold()),
    ];
    if stats.top_genres.is_empty() {
        lines.push("  - None".to_string());
    } else {
        for entry in &stats.top_genres {
            lines.push(format!("  - {}: {}", entry.genre, entry.count));
        }
    }
    lines.join("\n") + "\n"
}

pub fn render_recommendation(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::NeedsRatings => format!(
            "{}\n",
            "Please rate some anime 4 or higher to enable recommendations.".yellow()
        ),
        Recommendation::Titles(titles) if titles.is_empty() => format!(
            "{}\n",
            "Nothing new in the catalog for your favourite genres.".dimmed()
        ),
        Recommendation::Titles(titles) => {
            let mut out = format!("{}\n", "You might like:".bold());
            for title in titles {
                out.push_str(&format!("  - {}\n", title));
            }
            out
        }
    }
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

fn status_style(status: Status, text: String) -> ColoredString {
    match status {
        Status::Planned => text.normal(),
        Status::Watching => text.cyan(),
        Status::Completed => text.green(),
        Status::Dropped => text.red(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
