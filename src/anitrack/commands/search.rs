use crate::commands::CmdResult;
use crate::library::Library;
use crate::model::Record;

/// Case-insensitive substring match against the title or any genre.
/// A blank keyword matches everything.
pub fn run(library: &Library, keyword: &str) -> CmdResult {
    CmdResult::default().with_listed_records(matching(library, keyword))
}

pub fn matching(library: &Library, keyword: &str) -> Vec<Record> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return library.snapshot();
    }

    library
        .records()
        .iter()
        .filter(|record| {
            record.title().to_lowercase().contains(&needle)
                || record
                    .genres()
                    .iter()
                    .any(|genre| genre.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        Library::from_records(vec![
            Record::builder("Attack on Titan").genres(["Action", "Drama"]).build(),
            Record::builder("K-ON").genres(["Band", "School"]).build(),
            Record::builder("Horimiya").genres(["School", "Romance"]).build(),
        ])
    }

    fn titles(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.title()).collect()
    }

    #[test]
    fn blank_keyword_returns_everything_in_order() {
        let lib = library();
        assert_eq!(matching(&lib, ""), lib.snapshot());
        assert_eq!(matching(&lib, "   "), lib.snapshot());
    }

    #[test]
    fn matches_title_substring_ignoring_case() {
        let lib = library();
        assert_eq!(titles(&matching(&lib, "TITAN")), vec!["Attack on Titan"]);
    }

    #[test]
    fn matches_any_genre() {
        let lib = library();
        assert_eq!(titles(&matching(&lib, " school ")), vec!["K-ON", "Horimiya"]);
        assert_eq!(titles(&matching(&lib, "rom")), vec!["Horimiya"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(run(&library(), "mecha").listed_records.is_empty());
    }
}
