//! Static genre tables for movies and TV shows.
//!
//! The catalog API addresses genre listings by numeric TMDB genre id, but
//! users type genre names. These tables map between the two; they are the
//! fixed id sets the catalog serves, so there is no need to fetch them.

use crate::api::models::MediaKind;

/// Movie genre ids and display names.
pub const MOVIE_GENRES: &[(u32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (14, "Fantasy"),
    (27, "Horror"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// TV genre ids and display names.
pub const TV_GENRES: &[(u32, &str)] = &[
    (10759, "Action & Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (10762, "Kids"),
    (9648, "Mystery"),
    (10763, "News"),
    (10764, "Reality"),
    (10765, "Sci-Fi & Fantasy"),
    (10766, "Soap"),
    (10767, "Talk"),
    (10768, "War & Politics"),
    (37, "Western"),
];

/// Returns the genre table for the given media kind.
#[must_use]
pub const fn table(kind: MediaKind) -> &'static [(u32, &'static str)] {
    match kind {
        MediaKind::Movie => MOVIE_GENRES,
        MediaKind::Tv => TV_GENRES,
    }
}

/// Looks up a genre id by name, case-insensitively.
#[must_use]
pub fn genre_id_by_name(kind: MediaKind, name: &str) -> Option<u32> {
    let needle = name.to_lowercase();
    table(kind)
        .iter()
        .find(|(_, genre)| genre.to_lowercase() == needle)
        .map(|(id, _)| *id)
}

/// Looks up a genre's display name by id.
#[must_use]
pub fn genre_name_by_id(kind: MediaKind, id: u32) -> Option<&'static str> {
    table(kind)
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
}

/// All genre display names for one media kind, in table order.
#[must_use]
pub fn genre_names(kind: MediaKind) -> Vec<&'static str> {
    table(kind).iter().map(|(_, name)| *name).collect()
}

/// Genre names across both kinds, deduplicated, for autocomplete.
#[must_use]
pub fn all_genre_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = MOVIE_GENRES
        .iter()
        .chain(TV_GENRES.iter())
        .map(|(_, name)| *name)
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_id_by_name_case_insensitive() {
        assert_eq!(genre_id_by_name(MediaKind::Movie, "action"), Some(28));
        assert_eq!(genre_id_by_name(MediaKind::Movie, "SCIENCE FICTION"), Some(878));
        assert_eq!(
            genre_id_by_name(MediaKind::Tv, "sci-fi & fantasy"),
            Some(10765)
        );
    }

    #[test]
    fn test_genre_id_by_name_unknown() {
        assert_eq!(genre_id_by_name(MediaKind::Movie, "Kids"), None);
        assert_eq!(genre_id_by_name(MediaKind::Tv, "Horror"), None);
    }

    #[test]
    fn test_genre_name_by_id() {
        assert_eq!(genre_name_by_id(MediaKind::Movie, 27), Some("Horror"));
        assert_eq!(genre_name_by_id(MediaKind::Tv, 10768), Some("War & Politics"));
        assert_eq!(genre_name_by_id(MediaKind::Movie, 10759), None);
    }

    #[test]
    fn test_shared_ids_resolve_per_kind() {
        // 37 is Western in both tables, 16 Animation in both
        assert_eq!(genre_name_by_id(MediaKind::Movie, 37), Some("Western"));
        assert_eq!(genre_name_by_id(MediaKind::Tv, 37), Some("Western"));
    }

    #[test]
    fn test_genre_names_order_and_size() {
        let movie = genre_names(MediaKind::Movie);
        assert_eq!(movie.len(), 14);
        assert_eq!(movie.first(), Some(&"Action"));
        assert_eq!(genre_names(MediaKind::Tv).len(), 16);
    }

    #[test]
    fn test_all_genre_names_deduplicated() {
        let all = all_genre_names();
        // Animation, Comedy, Crime, Documentary, Drama, Western appear in
        // both tables but must be listed once
        let westerns = all.iter().filter(|n| **n == "Western").count();
        assert_eq!(westerns, 1);
        assert!(all.contains(&"Kids"));
        assert!(all.contains(&"Horror"));
    }
}
