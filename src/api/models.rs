//! Response models for the catalog API.
//!
//! The API is loose JSON: movies carry `title`/`release_date` where TV
//! shows carry `name`/`first_air_date`, detail payloads arrive under
//! either `info` or `data`, and almost everything can be absent. The
//! models here absorb that with serde aliases, defaults, and `Option`
//! fields so the bot layer never touches raw JSON.

use serde::Deserialize;

/// Whether an item is a movie or a TV show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum MediaKind {
    /// A feature film.
    #[name = "Movie"]
    Movie,
    /// A TV show.
    #[name = "TV Show"]
    Tv,
}

impl MediaKind {
    /// URL path segment used by the catalog API ("movie" or "tv").
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }

    /// Uppercase tag for embed footers ("MOVIE" or "TV").
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Movie => "MOVIE",
            Self::Tv => "TV",
        }
    }

    /// Singular display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Tv => "TV Show",
        }
    }

    /// Plural display label.
    #[must_use]
    pub const fn label_plural(self) -> &'static str {
        match self {
            Self::Movie => "Movies",
            Self::Tv => "TV Shows",
        }
    }

    /// Parses the API's `media_type` discriminator, defaulting to movie.
    #[must_use]
    pub fn from_media_type(media_type: Option<&str>) -> Self {
        match media_type {
            Some("tv") => Self::Tv,
            _ => Self::Movie,
        }
    }
}

/// One movie or TV show in a search result or listing.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    /// TMDB id of the item.
    pub id: u64,
    /// Movie title or TV show name.
    #[serde(alias = "name")]
    pub title: Option<String>,
    /// Plot summary.
    pub overview: Option<String>,
    /// Average user rating out of 10.
    pub vote_average: Option<f64>,
    /// Release date (movies) or first air date (TV).
    #[serde(alias = "first_air_date")]
    pub release_date: Option<String>,
    /// Full backdrop URL, when the API pre-resolves one.
    pub backdrop: Option<String>,
    /// TMDB backdrop path fragment.
    pub backdrop_path: Option<String>,
    /// Full poster URL, when the API pre-resolves one.
    pub poster: Option<String>,
    /// TMDB poster path fragment.
    pub poster_path: Option<String>,
    /// "movie" or "tv" on mixed listings such as search results.
    pub media_type: Option<String>,
}

impl MediaItem {
    /// Title to display, falling back when the API omits one.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// The item's media kind, preferring its own discriminator.
    #[must_use]
    pub fn kind_or(&self, fallback: Option<MediaKind>) -> MediaKind {
        match self.media_type.as_deref() {
            Some("tv") => MediaKind::Tv,
            Some("movie") => MediaKind::Movie,
            _ => fallback.unwrap_or(MediaKind::Movie),
        }
    }
}

/// `GET /search` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Matching items across movies and TV shows.
    #[serde(default)]
    pub results: Vec<MediaItem>,
}

/// Pagination metadata on listing responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ListMeta {
    /// The page these results belong to.
    pub page: Option<u32>,
    /// Whether another page exists after this one.
    pub has_next: Option<bool>,
}

/// `GET /list` and `GET /genres/{kind}/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    /// Items on this page.
    #[serde(default)]
    pub results: Vec<MediaItem>,
    /// Pagination metadata, when the endpoint provides it.
    pub meta: Option<ListMeta>,
}

impl ListResponse {
    /// Whether the API advertises a following page. Missing metadata is
    /// read as "no".
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.meta
            .as_ref()
            .and_then(|m| m.has_next)
            .unwrap_or(false)
    }
}

/// One curated section of the home feed.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeSection {
    /// Section heading, e.g. "Trending This Week".
    pub title: String,
    /// Items in the section.
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

/// `GET /home` response.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeResponse {
    /// Curated sections in display order.
    #[serde(default)]
    pub data: Vec<HomeSection>,
}

impl HomeResponse {
    /// The first section whose title mentions trending content.
    #[must_use]
    pub fn trending(&self) -> Option<&HomeSection> {
        self.data.iter().find(|s| s.title.contains("Trending"))
    }
}

/// A genre entry on a detail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    /// TMDB genre id.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// A cast credit on a detail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    /// Actor name.
    pub name: String,
    /// Character played, when credited.
    pub character: Option<String>,
}

/// Core fields of a movie or TV show detail payload.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailInfo {
    /// TMDB id.
    pub id: u64,
    /// Movie title or TV show name.
    #[serde(alias = "name")]
    pub title: Option<String>,
    /// Plot summary.
    pub overview: Option<String>,
    /// Average user rating out of 10.
    pub vote_average: Option<f64>,
    /// Number of votes behind the rating.
    pub vote_count: Option<u64>,
    /// Production status, e.g. "Released".
    pub status: Option<String>,
    /// ISO 639-1 original language code.
    pub original_language: Option<String>,
    /// Movie release date.
    pub release_date: Option<String>,
    /// Movie runtime in minutes.
    pub runtime: Option<u32>,
    /// Movie production budget in dollars.
    pub budget: Option<u64>,
    /// Movie box-office revenue in dollars.
    pub revenue: Option<u64>,
    /// TV first air date.
    pub first_air_date: Option<String>,
    /// TV last air date.
    pub last_air_date: Option<String>,
    /// TV season count.
    pub number_of_seasons: Option<u32>,
    /// TV episode count.
    pub number_of_episodes: Option<u32>,
    /// Genres attached to the item.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// TMDB backdrop path fragment.
    pub backdrop_path: Option<String>,
    /// TMDB poster path fragment.
    pub poster_path: Option<String>,
}

impl DetailInfo {
    /// Title to display, falling back when the API omits one.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}

/// `GET /details/{kind}/{id}` response. The info block arrives under
/// `info` on newer deployments and `data` on older ones.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResponse {
    /// Detail block (newer payloads).
    pub info: Option<DetailInfo>,
    /// Detail block (older payloads).
    pub data: Option<DetailInfo>,
    /// Top-billed cast.
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

impl DetailsResponse {
    /// The detail block, wherever the API put it.
    #[must_use]
    pub fn info(&self) -> Option<&DetailInfo> {
        self.info.as_ref().or(self.data.as_ref())
    }
}

/// Biographical fields of a person payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    /// Person's name.
    pub name: String,
    /// Biography text.
    pub biography: Option<String>,
    /// Department they are known for, e.g. "Acting".
    pub known_for_department: Option<String>,
    /// Birth date.
    pub birthday: Option<String>,
    /// Death date, when applicable.
    pub deathday: Option<String>,
    /// Birthplace.
    pub place_of_birth: Option<String>,
    /// TMDB profile image path fragment.
    pub profile_path: Option<String>,
}

/// `GET /cast/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonResponse {
    /// The person record.
    pub person: Person,
    /// Titles the person is known for.
    #[serde(default)]
    pub known_for: Vec<MediaItem>,
}

/// An episode row in a season payload.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeSummary {
    /// Episode number within the season.
    pub episode_number: u32,
    /// Episode title.
    pub name: Option<String>,
    /// Average user rating out of 10.
    pub rating: Option<f64>,
}

/// Season fields of a season payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Season {
    /// Season name, e.g. "Season 2".
    pub name: Option<String>,
    /// Season overview text.
    pub overview: Option<String>,
    /// Number of episodes in the season.
    pub episode_count: Option<u32>,
    /// Season air date.
    pub air_date: Option<String>,
    /// TMDB poster path fragment.
    pub poster_path: Option<String>,
    /// Episode listing.
    #[serde(default)]
    pub episodes: Vec<EpisodeSummary>,
}

/// `GET /tv/{id}/season/{n}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SeasonResponse {
    /// The season record.
    pub data: Season,
}

/// A credited crew member on an episode.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditedPerson {
    /// Crew member name.
    pub name: String,
}

/// Directors and writers credited on an episode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpisodeCrew {
    /// Credited directors.
    #[serde(default)]
    pub directors: Vec<CreditedPerson>,
    /// Credited writers.
    #[serde(default)]
    pub writers: Vec<CreditedPerson>,
}

/// A guest star credited on an episode.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestStar {
    /// Actor name.
    pub name: String,
    /// Character played.
    pub character: Option<String>,
}

/// Episode fields of an episode payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    /// Episode title.
    pub name: Option<String>,
    /// Episode overview text.
    pub overview: Option<String>,
    /// Air date.
    pub air_date: Option<String>,
    /// Average user rating out of 10.
    pub rating: Option<f64>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Full still-frame URL.
    pub still: Option<String>,
    /// Credited directors and writers.
    pub crew: Option<EpisodeCrew>,
    /// Guest stars.
    #[serde(default)]
    pub guest_stars: Vec<GuestStar>,
}

/// `GET /episodes/{id}/{season}/{episode}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeResponse {
    /// The episode record.
    pub data: Episode,
}

/// One playable source from the player endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamSource {
    /// Direct streaming URL.
    pub stream_url: String,
}

/// `GET /player/{kind}/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerResponse {
    /// Available streaming sources.
    #[serde(default)]
    pub sources: Vec<StreamSource>,
}

/// One video (trailer, teaser, clip) attached to an item.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    /// Site-specific video key (YouTube video id).
    pub key: Option<String>,
    /// Hosting site, e.g. "YouTube".
    pub site: Option<String>,
    /// Video title.
    pub name: Option<String>,
    /// Video category, e.g. "Trailer" or "Teaser".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Video {
    /// Whether this video is a trailer.
    #[must_use]
    pub fn is_trailer(&self) -> bool {
        self.kind.as_deref() == Some("Trailer")
    }

    /// Whether this video is hosted on YouTube (the only site we can
    /// link to directly).
    #[must_use]
    pub fn is_youtube(&self) -> bool {
        self.site.as_deref() == Some("YouTube")
    }
}

/// `GET /videos/{kind}/{id}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct VideosResponse {
    /// Videos attached to the item.
    #[serde(default)]
    pub results: Vec<Video>,
}

/// Error body the API attaches to non-success responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_media_item_movie_fields() {
        let item: MediaItem = serde_json::from_str(
            r#"{
                "id": 603,
                "title": "The Matrix",
                "overview": "A computer hacker learns the truth.",
                "vote_average": 8.2,
                "release_date": "1999-03-30",
                "poster_path": "/poster.jpg",
                "backdrop_path": "/backdrop.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(item.id, 603);
        assert_eq!(item.display_title(), "The Matrix");
        assert_eq!(item.release_date.as_deref(), Some("1999-03-30"));
        assert_eq!(item.kind_or(None), MediaKind::Movie);
    }

    #[test]
    fn test_media_item_tv_aliases() {
        let item: MediaItem = serde_json::from_str(
            r#"{
                "id": 1396,
                "name": "Breaking Bad",
                "first_air_date": "2008-01-20",
                "media_type": "tv"
            }"#,
        )
        .unwrap();
        assert_eq!(item.display_title(), "Breaking Bad");
        assert_eq!(item.release_date.as_deref(), Some("2008-01-20"));
        assert_eq!(item.kind_or(Some(MediaKind::Movie)), MediaKind::Tv);
    }

    #[test]
    fn test_media_item_bare_minimum() {
        let item: MediaItem = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(item.display_title(), "Untitled");
        assert!(item.overview.is_none());
        assert_eq!(item.kind_or(Some(MediaKind::Tv)), MediaKind::Tv);
    }

    #[test]
    fn test_list_response_has_next() {
        let with_next: ListResponse = serde_json::from_str(
            r#"{"results": [{"id": 1}], "meta": {"page": 2, "has_next": true}}"#,
        )
        .unwrap();
        assert!(with_next.has_next());
        assert_eq!(with_next.results.len(), 1);

        let without_meta: ListResponse =
            serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(!without_meta.has_next());
    }

    #[test]
    fn test_details_response_info_or_data() {
        let newer: DetailsResponse = serde_json::from_str(
            r#"{"info": {"id": 603, "title": "The Matrix"}, "cast": [{"name": "Keanu Reeves", "character": "Neo"}]}"#,
        )
        .unwrap();
        assert_eq!(newer.info().unwrap().display_title(), "The Matrix");
        assert_eq!(newer.cast[0].name, "Keanu Reeves");

        let older: DetailsResponse =
            serde_json::from_str(r#"{"data": {"id": 1396, "name": "Breaking Bad"}}"#).unwrap();
        assert_eq!(older.info().unwrap().display_title(), "Breaking Bad");
        assert!(older.cast.is_empty());
    }

    #[test]
    fn test_home_response_trending_section() {
        let home: HomeResponse = serde_json::from_str(
            r#"{"data": [
                {"title": "New Releases", "items": []},
                {"title": "Trending This Week", "items": [{"id": 5}]}
            ]}"#,
        )
        .unwrap();
        let trending = home.trending().unwrap();
        assert_eq!(trending.items.len(), 1);

        let empty: HomeResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(empty.trending().is_none());
    }

    #[test]
    fn test_episode_crew_and_guests() {
        let resp: EpisodeResponse = serde_json::from_str(
            r#"{"data": {
                "name": "Ozymandias",
                "air_date": "2013-09-15",
                "rating": 9.9,
                "crew": {"directors": [{"name": "Rian Johnson"}], "writers": [{"name": "Moira Walley-Beckett"}]},
                "guest_stars": [{"name": "Guest", "character": "Someone"}]
            }}"#,
        )
        .unwrap();
        let ep = resp.data;
        assert_eq!(ep.crew.as_ref().unwrap().directors[0].name, "Rian Johnson");
        assert_eq!(ep.guest_stars.len(), 1);
        assert!(ep.still.is_none());
    }

    #[test]
    fn test_video_trailer_detection() {
        let video: Video = serde_json::from_str(
            r#"{"key": "abc123", "site": "YouTube", "name": "Official Trailer", "type": "Trailer"}"#,
        )
        .unwrap();
        assert!(video.is_trailer());
        assert!(video.is_youtube());

        let teaser: Video =
            serde_json::from_str(r#"{"site": "Vimeo", "type": "Teaser"}"#).unwrap();
        assert!(!teaser.is_trailer());
        assert!(!teaser.is_youtube());
    }

    #[test]
    fn test_player_response_defaults() {
        let resp: PlayerResponse = serde_json::from_str(r"{}").unwrap();
        assert!(resp.sources.is_empty());

        let with_sources: PlayerResponse = serde_json::from_str(
            r#"{"sources": [{"stream_url": "https://cdn.test/stream.m3u8"}]}"#,
        )
        .unwrap();
        assert_eq!(with_sources.sources[0].stream_url, "https://cdn.test/stream.m3u8");
    }
}
