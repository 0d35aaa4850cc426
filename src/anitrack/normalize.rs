//! # Field Normalization
//!
//! Every [`Record`](crate::model::Record) field passes through one of these
//! functions at construction time. They are **fails-soft**: out-of-domain
//! input never raises, it collapses to the field's absent or default value.
//!
//! | Field    | Accepted                                   | Otherwise      |
//! |----------|--------------------------------------------|----------------|
//! | `title`  | any string, trimmed                        | empty string   |
//! | `year`   | positive integer, or a string holding one  | `None`         |
//! | `genres` | array of strings, or one comma list string | tokens dropped |
//! | `status` | one of the four statuses, any case         | `planned`      |
//! | `rating` | digit-only text or integer within `0..=5`  | `None`         |
//!
//! The rating rule is a textual one: the value must *look like* a run of
//! ASCII digits before its range is checked. `"-1"`, `" 4"` and `3.0` are all
//! absent, not clamped.

use crate::model::Status;
use serde_json::Value;

pub const MAX_RATING: u8 = 5;

pub fn title(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.trim().to_string(),
        _ => String::new(),
    }
}

pub fn year(raw: &Value) -> Option<u32> {
    let parsed = match raw {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    if parsed == 0 {
        return None;
    }
    u32::try_from(parsed).ok()
}

pub fn genres(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .filter_map(genre_token)
            .collect(),
        Value::String(s) => split_genres(s),
        _ => Vec::new(),
    }
}

/// Splits a comma separated genre list ("Action, Fantasy,,") into tokens.
pub fn split_genres(input: &str) -> Vec<String> {
    input.split(',').filter_map(genre_token).collect()
}

fn genre_token(token: &str) -> Option<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn status(raw: &Value) -> Status {
    raw.as_str()
        .and_then(Status::parse_lenient)
        .unwrap_or_default()
}

pub fn rating(raw: &Value) -> Option<u8> {
    let text = match raw {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => return None,
    };
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    // Long digit runs overflow u64; those are out of range anyway.
    let value = text.parse::<u64>().ok()?;
    if value <= u64::from(MAX_RATING) {
        u8::try_from(value).ok()
    } else {
        None
    }
}
