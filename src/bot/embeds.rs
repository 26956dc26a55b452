//! Embed construction for catalog content.
//!
//! Field assembly is split out as plain functions returning
//! `(name, value, inline)` tuples so the rendering of an API payload can
//! be asserted in tests without a Discord connection; the embed builders
//! are thin wrappers over those.

use crate::api::models::{
    CastMember, DetailInfo, Episode, MediaItem, MediaKind, Person, Season, StreamSource, Video,
};
use crate::core::format;
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter};

/// Accent color used on every embed.
pub const EMBED_COLOR: u32 = 0x00E5_0914;

type EmbedField = (String, String, bool);

/// Fields for a listing embed: rating, release date, and id.
#[must_use]
pub fn media_fields(item: &MediaItem) -> Vec<EmbedField> {
    vec![
        ("Rating".to_string(), format::rating_line(item.vote_average), true),
        (
            "Release".to_string(),
            item.release_date.clone().unwrap_or_else(|| "Unknown".to_string()),
            true,
        ),
        ("ID".to_string(), item.id.to_string(), true),
    ]
}

/// Embed for one item in a listing or search result.
#[must_use]
pub fn media_embed(item: &MediaItem, kind: MediaKind) -> CreateEmbed {
    let mut embed = CreateEmbed::default()
        .color(EMBED_COLOR)
        .title(item.display_title().to_string())
        .url(format::tmdb_url(kind.path_segment(), item.id))
        .description(format::overview_line(item.overview.as_deref()))
        .fields(media_fields(item))
        .footer(CreateEmbedFooter::new(format!("Type: {}", kind.tag())));

    if let Some(url) = &item.backdrop {
        embed = embed.image(url.clone());
    } else if let Some(path) = &item.backdrop_path {
        embed = embed.image(format::tmdb_image(format::LIST_BACKDROP_SIZE, path));
    }

    if let Some(url) = &item.poster {
        embed = embed.thumbnail(url.clone());
    } else if let Some(path) = &item.poster_path {
        embed = embed.thumbnail(format::tmdb_image(format::POSTER_SIZE, path));
    }

    embed
}

/// Fields for a detail embed, varying by media kind.
#[must_use]
pub fn detail_fields(info: &DetailInfo, cast: &[CastMember], kind: MediaKind) -> Vec<EmbedField> {
    let mut fields = vec![
        (
            "Rating".to_string(),
            format::rating_with_votes(info.vote_average, info.vote_count),
            true,
        ),
        (
            "Status".to_string(),
            info.status.clone().unwrap_or_else(|| "Unknown".to_string()),
            true,
        ),
        (
            "Language".to_string(),
            info.original_language
                .as_deref()
                .map_or_else(|| "N/A".to_string(), str::to_uppercase),
            true,
        ),
    ];

    match kind {
        MediaKind::Movie => {
            fields.push((
                "Release Date".to_string(),
                info.release_date.clone().unwrap_or_else(|| "Unknown".to_string()),
                true,
            ));
            fields.push(("Runtime".to_string(), format::runtime_line(info.runtime), true));
            fields.push(("Budget".to_string(), format::dollars(info.budget), true));
            fields.push(("Revenue".to_string(), format::dollars(info.revenue), true));
        }
        MediaKind::Tv => {
            fields.push((
                "First Air Date".to_string(),
                info.first_air_date.clone().unwrap_or_else(|| "Unknown".to_string()),
                true,
            ));
            fields.push((
                "Last Air Date".to_string(),
                info.last_air_date.clone().unwrap_or_else(|| "Unknown".to_string()),
                true,
            ));
            fields.push((
                "Seasons".to_string(),
                info.number_of_seasons.map_or_else(|| "N/A".to_string(), |n| n.to_string()),
                true,
            ));
            fields.push((
                "Episodes".to_string(),
                info.number_of_episodes.map_or_else(|| "N/A".to_string(), |n| n.to_string()),
                true,
            ));
        }
    }

    if !info.genres.is_empty() {
        let genres = info
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        fields.push(("Genres".to_string(), genres, false));
    }

    if !cast.is_empty() {
        let top_cast = cast
            .iter()
            .take(5)
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        fields.push(("Cast".to_string(), top_cast, false));
    }

    fields
}

/// Full-detail embed for `/movie` and `/tv`.
#[must_use]
pub fn detail_embed(info: &DetailInfo, cast: &[CastMember], kind: MediaKind) -> CreateEmbed {
    let mut embed = CreateEmbed::default()
        .color(EMBED_COLOR)
        .title(info.display_title().to_string())
        .url(format::tmdb_url(kind.path_segment(), info.id))
        .description(
            info.overview
                .clone()
                .unwrap_or_else(|| "No description available".to_string()),
        )
        .fields(detail_fields(info, cast, kind));

    if let Some(path) = &info.backdrop_path {
        embed = embed.image(format::tmdb_image(format::DETAIL_BACKDROP_SIZE, path));
    }
    if let Some(path) = &info.poster_path {
        embed = embed.thumbnail(format::tmdb_image(format::POSTER_SIZE, path));
    }

    embed
}

/// Fields for a person embed.
#[must_use]
pub fn person_fields(person: &Person, known_for: &[MediaItem]) -> Vec<EmbedField> {
    let mut fields = vec![
        (
            "Known For".to_string(),
            person
                .known_for_department
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            true,
        ),
        (
            "Birthday".to_string(),
            person.birthday.clone().unwrap_or_else(|| "Unknown".to_string()),
            true,
        ),
        (
            "Place of Birth".to_string(),
            person
                .place_of_birth
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            true,
        ),
    ];

    if let Some(deathday) = &person.deathday {
        fields.push(("Died".to_string(), deathday.clone(), true));
    }

    if !known_for.is_empty() {
        let titles = known_for
            .iter()
            .take(5)
            .map(MediaItem::display_title)
            .collect::<Vec<_>>()
            .join(", ");
        fields.push(("Known For".to_string(), titles, false));
    }

    fields
}

/// Embed for `/cast`.
#[must_use]
pub fn person_embed(person: &Person, known_for: &[MediaItem]) -> CreateEmbed {
    let mut embed = CreateEmbed::default()
        .color(EMBED_COLOR)
        .title(person.name.clone())
        .description(format::biography_line(person.biography.as_deref()))
        .fields(person_fields(person, known_for));

    if let Some(path) = &person.profile_path {
        embed = embed.thumbnail(format::tmdb_image(format::POSTER_SIZE, path));
    }

    embed
}

/// Fields for a season embed, including the first ten episodes.
#[must_use]
pub fn season_fields(season: &Season) -> Vec<EmbedField> {
    let mut fields = vec![
        (
            "Episodes".to_string(),
            season
                .episode_count
                .map_or_else(|| "N/A".to_string(), |n| n.to_string()),
            true,
        ),
        (
            "Air Date".to_string(),
            season.air_date.clone().unwrap_or_else(|| "Unknown".to_string()),
            true,
        ),
    ];

    if !season.episodes.is_empty() {
        let listing = season
            .episodes
            .iter()
            .take(10)
            .map(|ep| {
                format!(
                    "E{}: {} ({}/10)",
                    ep.episode_number,
                    ep.name.as_deref().unwrap_or("Untitled"),
                    ep.rating.map_or_else(|| "N/A".to_string(), |r| r.to_string()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        fields.push(("Episodes".to_string(), listing, false));
    }

    fields
}

/// Embed for `/season`.
#[must_use]
pub fn season_embed(season: &Season) -> CreateEmbed {
    let mut embed = CreateEmbed::default()
        .color(EMBED_COLOR)
        .title(season.name.clone().unwrap_or_else(|| "Season".to_string()))
        .description(
            season
                .overview
                .clone()
                .unwrap_or_else(|| "No description available".to_string()),
        )
        .fields(season_fields(season));

    if let Some(path) = &season.poster_path {
        embed = embed.thumbnail(format::tmdb_image(format::POSTER_SIZE, path));
    }

    embed
}

/// Fields for an episode embed.
#[must_use]
pub fn episode_fields(episode: &Episode) -> Vec<EmbedField> {
    let mut fields = vec![
        (
            "Air Date".to_string(),
            episode.air_date.clone().unwrap_or_else(|| "Unknown".to_string()),
            true,
        ),
        ("Rating".to_string(), format::rating_line(episode.rating), true),
        ("Runtime".to_string(), format::runtime_line(episode.runtime), true),
    ];

    if let Some(crew) = &episode.crew {
        if !crew.directors.is_empty() {
            let directors = crew
                .directors
                .iter()
                .map(|d| d.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            fields.push(("Director".to_string(), directors, false));
        }
        if !crew.writers.is_empty() {
            let writers = crew
                .writers
                .iter()
                .map(|w| w.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            fields.push(("Writers".to_string(), writers, false));
        }
    }

    if !episode.guest_stars.is_empty() {
        let guests = episode
            .guest_stars
            .iter()
            .take(3)
            .map(|g| {
                format!(
                    "{} as {}",
                    g.name,
                    g.character.as_deref().unwrap_or("Unknown")
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        fields.push(("Guest Stars".to_string(), guests, false));
    }

    fields
}

/// Embed for `/episode`.
#[must_use]
pub fn episode_embed(episode: &Episode, season: u32, episode_number: u32) -> CreateEmbed {
    let mut embed = CreateEmbed::default()
        .color(EMBED_COLOR)
        .title(format::episode_tag(
            season,
            episode_number,
            episode.name.as_deref(),
        ))
        .description(
            episode
                .overview
                .clone()
                .unwrap_or_else(|| "No description available".to_string()),
        )
        .fields(episode_fields(episode));

    if let Some(still) = &episode.still {
        embed = embed.image(still.clone());
    }

    embed
}

/// Fields for the streaming-sources embed: the first five sources as
/// inline watch links.
#[must_use]
pub fn source_fields(sources: &[StreamSource]) -> Vec<EmbedField> {
    sources
        .iter()
        .take(5)
        .enumerate()
        .map(|(i, source)| {
            (
                format!("Source {}", i + 1),
                format!("[Watch Here]({})", source.stream_url),
                true,
            )
        })
        .collect()
}

/// Embed for `/watch`.
#[must_use]
pub fn sources_embed(sources: &[StreamSource]) -> CreateEmbed {
    CreateEmbed::default()
        .color(EMBED_COLOR)
        .title("Streaming Sources Available")
        .description(format!(
            "Found {} streaming sources for this content.",
            sources.len()
        ))
        .fields(source_fields(sources))
}

/// Fields for the trailers embed: each trailer as a watch link when it
/// is on YouTube, or named with its hosting site otherwise.
#[must_use]
pub fn trailer_fields(trailers: &[&Video]) -> Vec<EmbedField> {
    trailers
        .iter()
        .take(5)
        .map(|video| {
            let name = video.name.as_deref().unwrap_or("Trailer").to_string();
            let value = match (&video.key, video.is_youtube()) {
                (Some(key), true) => format!("[Watch on YouTube]({})", format::youtube_url(key)),
                _ => format!("Available on {}", video.site.as_deref().unwrap_or("unknown site")),
            };
            (name, value, false)
        })
        .collect()
}

/// Embed for `/trailer`.
#[must_use]
pub fn trailers_embed(title: &str, trailers: &[&Video]) -> CreateEmbed {
    CreateEmbed::default()
        .color(EMBED_COLOR)
        .title(format!("Trailers: {title}"))
        .fields(trailer_fields(trailers))
}
