use crate::commands::helpers::tally_genres;
use crate::commands::CmdResult;
use crate::library::Library;

pub const TOP_GENRES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub total: usize,
    /// Mean over rated records, rounded to two decimals. `None` when nothing is rated.
    pub average_rating: Option<f64>,
    pub top_genres: Vec<GenreCount>,
}

pub fn run(library: &Library) -> CmdResult {
    CmdResult::default().with_stats(compute(library))
}

pub fn compute(library: &Library) -> Stats {
    let ratings: Vec<u32> = library
        .records()
        .iter()
        .filter_map(|r| r.rating())
        .map(u32::from)
        .collect();

    let average_rating = if ratings.is_empty() {
        None
    } else {
        let mean = f64::from(ratings.iter().sum::<u32>()) / ratings.len() as f64;
        Some(round2(mean))
    };

    let top_genres = tally_genres(library.records())
        .into_iter()
        .take(TOP_GENRES)
        .map(|(genre, count)| GenreCount { genre, count })
        .collect();

    Stats {
        total: library.len(),
        average_rating,
        top_genres,
    }
}

/// Two decimal places, exact halves going to the even neighbour.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
