//! Shared test fixtures.
//!
//! Sample catalog payloads used across module tests, shaped like what
//! the remote API actually returns.

use crate::api::models::{DetailInfo, Genre, MediaItem, Person};

/// A representative search/listing item.
#[must_use]
pub fn sample_media_item() -> MediaItem {
    MediaItem {
        id: 603,
        title: Some("The Matrix".to_string()),
        overview: Some("A computer hacker learns the truth about his reality.".to_string()),
        vote_average: Some(8.2),
        release_date: Some("1999-03-30".to_string()),
        backdrop: None,
        backdrop_path: Some("/matrix-backdrop.jpg".to_string()),
        poster: None,
        poster_path: Some("/matrix-poster.jpg".to_string()),
        media_type: Some("movie".to_string()),
    }
}

/// A representative movie detail block.
#[must_use]
pub fn sample_detail_info() -> DetailInfo {
    DetailInfo {
        id: 603,
        title: Some("The Matrix".to_string()),
        overview: Some("A computer hacker learns the truth about his reality.".to_string()),
        vote_average: Some(8.2),
        vote_count: Some(21_000),
        status: Some("Released".to_string()),
        original_language: Some("en".to_string()),
        release_date: Some("1999-03-30".to_string()),
        runtime: Some(136),
        budget: Some(63_000_000),
        revenue: Some(463_517_383),
        first_air_date: None,
        last_air_date: None,
        number_of_seasons: None,
        number_of_episodes: None,
        genres: vec![
            Genre {
                id: 28,
                name: "Action".to_string(),
            },
            Genre {
                id: 878,
                name: "Science Fiction".to_string(),
            },
        ],
        backdrop_path: Some("/matrix-backdrop.jpg".to_string()),
        poster_path: Some("/matrix-poster.jpg".to_string()),
    }
}

/// A representative person record.
#[must_use]
pub fn sample_person() -> Person {
    Person {
        name: "Keanu Reeves".to_string(),
        biography: Some("Canadian actor.".to_string()),
        known_for_department: Some("Acting".to_string()),
        birthday: Some("1964-09-02".to_string()),
        deathday: None,
        place_of_birth: Some("Beirut, Lebanon".to_string()),
        profile_path: Some("/keanu.jpg".to_string()),
    }
}
