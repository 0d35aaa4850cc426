//! Genre-affinity recommendations against the fixed [`Catalog`].
//!
//! Affinity counts genres over records rated at least [`LIKED_RATING`]. Genres
//! are visited from strongest affinity down, and each contributes its catalog
//! candidates in catalog order, minus titles already tracked (any case) and
//! titles already picked in this call.

use crate::catalog::Catalog;
use crate::commands::helpers::tally_genres;
use crate::commands::CmdResult;
use crate::library::Library;

pub const LIKED_RATING: u8 = 4;
pub const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// No record is rated high enough to derive any preference.
    NeedsRatings,
    /// Catalog picks, possibly empty when the catalog has nothing new to offer.
    Titles(Vec<String>),
}

impl Recommendation {
    pub fn titles(&self) -> &[String] {
        match self {
            Recommendation::NeedsRatings => &[],
            Recommendation::Titles(titles) => titles,
        }
    }
}

pub fn run(library: &Library, catalog: &Catalog, limit: usize) -> CmdResult {
    CmdResult::default().with_recommendation(recommend(library, catalog, limit))
}

pub fn recommend(library: &Library, catalog: &Catalog, limit: usize) -> Recommendation {
    let liked: Vec<_> = library
        .records()
        .iter()
        .filter(|r| r.rating().is_some_and(|rating| rating >= LIKED_RATING))
        .collect();
    if liked.is_empty() {
        return Recommendation::NeedsRatings;
    }

    let mut picks: Vec<String> = Vec::new();
    'genres: for (genre, _) in tally_genres(liked) {
        for candidate in catalog.titles_for(&genre) {
            if picks.len() >= limit {
                break 'genres;
            }
            if library.contains_title(candidate) || picks.contains(candidate) {
                continue;
            }
            picks.push(candidate.clone());
        }
    }
    Recommendation::Titles(picks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn needs_ratings_when_nothing_is_liked() {
        let library = Library::from_records(vec![
            Record::builder("Horimiya").genres(["School"]).rating(3).build(),
            Record::builder("K-ON").genres(["Band"]).build(),
        ]);
        assert_eq!(
            recommend(&library, &Catalog::builtin(), DEFAULT_LIMIT),
            Recommendation::NeedsRatings
        );
        assert_eq!(
            recommend(&Library::new(), &Catalog::builtin(), DEFAULT_LIMIT),
            Recommendation::NeedsRatings
        );
    }

    #[test]
    fn picks_from_strongest_genre_first() {
        let library = Library::from_records(vec![
            Record::builder("one").genres(["Band"]).rating(4).build(),
            Record::builder("two").genres(["Action", "Band"]).rating(5).build(),
        ]);

        let rec = recommend(&library, &Catalog::builtin(), 4);
        assert_eq!(
            rec.titles(),
            ["K-ON", "MyGO!!!!!", "Girls Band Cry", "Attack on Titan"]
        );
    }

    #[test]
    fn skips_tracked_titles_ignoring_case() {
        let library = Library::from_records(vec![
            Record::builder("re:zero").genres(["Fantasy"]).rating(5).build(),
            Record::builder("mushoku tensei").genres(["Fantasy"]).rating(2).build(),
        ]);

        let rec = recommend(&library, &Catalog::builtin(), DEFAULT_LIMIT);
        assert_eq!(rec.titles(), ["Frieren: Beyond Journey's End"]);
    }

    #[test]
    fn skips_duplicates_across_genres() {
        let catalog = Catalog::new()
            .with_genre("Romance", ["Horimiya", "Toradora!"])
            .with_genre("School", ["Horimiya", "K-ON"]);
        let library = Library::from_records(vec![Record::builder("x")
            .genres(["Romance", "School"])
            .rating(5)
            .build()]);

        let rec = recommend(&library, &catalog, 10);
        assert_eq!(rec.titles(), ["Horimiya", "Toradora!", "K-ON"]);
    }

    #[test]
    fn liked_genres_outside_catalog_give_empty_titles() {
        let library = Library::from_records(vec![Record::builder("Gurren Lagann")
            .genres(["Mecha"])
            .rating(5)
            .build()]);
        assert_eq!(
            recommend(&library, &Catalog::builtin(), DEFAULT_LIMIT),
            Recommendation::Titles(vec![])
        );
    }

    #[test]
    fn respects_limit() {
        let library = Library::from_records(vec![Record::builder("x")
            .genres(["Action", "School"])
            .rating(4)
            .build()]);
        assert_eq!(recommend(&library, &Catalog::builtin(), 2).titles().len(), 2);
        assert_eq!(
            recommend(&library, &Catalog::builtin(), 0),
            Recommendation::Titles(vec![])
        );
    }
}
