use crate::error::TrackerError;
use crate::normalize;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Watching status of a tracked title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Planned,
    Watching,
    Completed,
    Dropped,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Planned,
        Status::Watching,
        Status::Completed,
        Status::Dropped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Planned => "planned",
            Status::Watching => "watching",
            Status::Completed => "completed",
            Status::Dropped => "dropped",
        }
    }

    /// Trims and lowercases `input`. Blank input means the default status;
    /// anything outside the closed set yields `None`.
    pub fn parse_lenient(input: &str) -> Option<Status> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return Some(Status::default());
        }
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::parse_lenient(s).ok_or_else(|| {
            let names: Vec<&str> = Status::ALL.iter().map(|s| s.as_str()).collect();
            TrackerError::InvalidInput(format!("Status must be one of {}.", names.join(", ")))
        })
    }
}

/// Untrusted field values for a [`Record`], as read from the data file or
/// collected by a front end. Missing keys are `Value::Null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub title: Value,
    pub year: Value,
    pub genres: Value,
    pub status: Value,
    pub rating: Value,
}

impl RawRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Value::String(title.into()),
            ..Self::default()
        }
    }

    pub fn year(mut self, year: impl Into<Value>) -> Self {
        self.year = year.into();
        self
    }

    pub fn genres<I, G>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<String>,
    {
        self.genres = Value::Array(
            genres
                .into_iter()
                .map(|g| Value::String(g.into()))
                .collect(),
        );
        self
    }

    pub fn status(mut self, status: impl Into<Value>) -> Self {
        self.status = status.into();
        self
    }

    pub fn rating(mut self, rating: impl Into<Value>) -> Self {
        self.rating = rating.into();
        self
    }

    pub fn build(self) -> Record {
        Record::from(self)
    }
}

/// One tracked title. Fields are normalized once, at construction, and the
/// record is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct Record {
    title: String,
    year: Option<u32>,
    genres: Vec<String>,
    status: Status,
    rating: Option<u8>,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Self {
            title: normalize::title(&raw.title),
            year: normalize::year(&raw.year),
            genres: normalize::genres(&raw.genres),
            status: normalize::status(&raw.status),
            rating: normalize::rating(&raw.rating),
        }
    }
}

impl Record {
    pub fn builder(title: impl Into<String>) -> RawRecord {
        RawRecord::new(title)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> Option<u32> {
        self.year
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    /// Case-insensitive title comparison, the identity rule of the library.
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn construction_is_deterministic() {
        let make = || {
            Record::builder(" Frieren ")
                .year(2023)
                .genres(["Fantasy", " Adventure "])
                .status("Watching")
                .rating("5")
                .build()
        };
        assert_eq!(make(), make());
    }

    #[test]
    fn builder_normalizes_every_field() {
        let record = Record::builder("  Horimiya  ")
            .year("abc")
            .genres(["School", "", " Romance "])
            .status("COMPLETED")
            .rating(-2)
            .build();

        assert_eq!(record.title(), "Horimiya");
        assert_eq!(record.year(), None);
        assert_eq!(record.genres(), ["School", "Romance"]);
        assert_eq!(record.status(), Status::Completed);
        assert_eq!(record.rating(), None);
    }

    #[test]
    fn defaults_when_only_title_given() {
        let record = Record::builder("K-ON").build();
        assert_eq!(record.status(), Status::Planned);
        assert_eq!(record.year(), None);
        assert!(record.genres().is_empty());
        assert_eq!(record.rating(), None);
    }

    #[test]
    fn deserializes_legacy_entries_through_normalization() {
        let record: Record = serde_json::from_value(json!({
            "title": " Re:Zero ",
            "year": "Unknown",
            "genres": ["Fantasy", " "],
            "status": "WATCHING",
            "rating": 7,
            "extra": true
        }))
        .unwrap();

        assert_eq!(record.title(), "Re:Zero");
        assert_eq!(record.year(), None);
        assert_eq!(record.genres(), ["Fantasy"]);
        assert_eq!(record.status(), Status::Watching);
        assert_eq!(record.rating(), None);
    }

    #[test]
    fn deserializes_missing_keys_to_defaults() {
        let record: Record = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record, Record::builder("").build());
    }

    #[test]
    fn serializes_absent_values_as_null() {
        let record = Record::builder("Chainsaw Man").genres(["Action"]).build();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Chainsaw Man",
                "year": null,
                "genres": ["Action"],
                "status": "planned",
                "rating": null
            })
        );
    }

    #[test]
    fn status_from_str_rejects_unknown_values() {
        assert_eq!("Dropped".parse::<Status>().unwrap(), Status::Dropped);
        assert_eq!("".parse::<Status>().unwrap(), Status::Planned);
        let err = "paused".parse::<Status>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Status must be one of planned, watching, completed, dropped."
        );
    }

    #[test]
    fn title_match_ignores_case() {
        let record = Record::builder("Girls Band Cry").build();
        assert!(record.has_title("girls band CRY"));
        assert!(!record.has_title("Girls Band"));
    }
}
