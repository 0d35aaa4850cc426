//! # Recommendation Catalog
//!
//! A fixed lookup table from genre name to an ordered list of candidate
//! titles. It is configuration, not data: nothing the user tracks ever
//! feeds back into it. The built-in table can be replaced through the
//! `catalog` key of the config file.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new()
        .with_genre(
            "Action",
            ["Attack on Titan", "Chainsaw Man", "Cyberpunk: Edgerunners"],
        )
        .with_genre(
            "Fantasy",
            ["Re:Zero", "Mushoku Tensei", "Frieren: Beyond Journey's End"],
        )
        .with_genre(
            "School",
            [
                "Too Many Losing Heroines!",
                "Kaguya-sama: Love is War",
                "Horimiya",
            ],
        )
        .with_genre("Band", ["K-ON", "MyGO!!!!!", "Girls Band Cry"])
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    genres: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn with_genre<I, T>(mut self, genre: impl Into<String>, titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.genres
            .insert(genre.into(), titles.into_iter().map(Into::into).collect());
        self
    }

    /// Candidates for `genre`. Lookup is exact, so "action" does not match "Action".
    pub fn titles_for(&self, genre: &str) -> &[String] {
        self.genres.get(genre).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genres.keys().map(String::as_str)
    }
}
