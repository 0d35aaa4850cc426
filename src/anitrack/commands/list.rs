//! Sorted listing. Sorting always works on a snapshot; library order is
//! never changed.

use crate::commands::CmdResult;
use crate::error::TrackerError;
use crate::library::Library;
use crate::model::Record;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Year,
    Genres,
    Status,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Title,
        SortKey::Year,
        SortKey::Genres,
        SortKey::Status,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Year => "year",
            SortKey::Genres => "genres",
            SortKey::Status => "status",
            SortKey::Rating => "rating",
        }
    }

    /// - title, genres: lowercase text
    /// - year: oldest first, unknown years last
    /// - status: alphabetical by name
    /// - rating: highest first, unrated last
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
            SortKey::Year => absent_last(a.year(), b.year(), |x, y| x.cmp(&y)),
            SortKey::Genres => joined_genres(a).cmp(&joined_genres(b)),
            SortKey::Status => a.status().as_str().cmp(b.status().as_str()),
            SortKey::Rating => absent_last(a.rating(), b.rating(), |x, y| y.cmp(&x)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| TrackerError::InvalidInput(format!("Unknown sort key: {}", s)))
    }
}

fn absent_last<T: Copy>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn joined_genres(record: &Record) -> String {
    record.genres().join(", ").to_lowercase()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOrder {
    /// `None` keeps library order.
    pub key: Option<SortKey>,
    pub reverse: bool,
}

impl SortOrder {
    pub fn by(key: SortKey) -> Self {
        Self {
            key: Some(key),
            reverse: false,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reverse = !self.reverse;
        self
    }
}

pub fn run(library: &Library, order: SortOrder) -> CmdResult {
    CmdResult::default().with_listed_records(sorted(library, order))
}

/// Sorted copy of the library. The sort is stable; with `reverse` the
/// comparison is inverted, so records that compare equal stay in library order.
pub fn sorted(library: &Library, order: SortOrder) -> Vec<Record> {
    let mut records = library.snapshot();
    match order.key {
        Some(key) => records.sort_by(|a, b| {
            let ord = key.compare(a, b);
            if order.reverse {
                ord.reverse()
            } else {
                ord
            }
        }),
        None if order.reverse => records.reverse(),
        None => {}
    }
    records
}
