//! Pure presentation helpers.
//!
//! Everything here is framework-agnostic string assembly: truncation to
//! Discord's limits, rating and money lines, and the external URLs the
//! embeds link to. The bot layer composes these into embeds.

/// TMDB poster size used for embed thumbnails.
pub const POSTER_SIZE: &str = "w342";
/// TMDB backdrop size used on listing embeds.
pub const LIST_BACKDROP_SIZE: &str = "w780";
/// TMDB backdrop size used on detail embeds.
pub const DETAIL_BACKDROP_SIZE: &str = "w1280";

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";
const TMDB_BASE: &str = "https://www.themoviedb.org";
const PLAYER_BASE: &str = "https://vidsrc.xyz/embed";

/// Truncates to `max` characters, ending in `...` when text was cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max - 3).collect();
    cut.push_str("...");
    cut
}

/// Overview text clipped for a listing embed, with a fallback when the
/// API has none.
#[must_use]
pub fn overview_line(overview: Option<&str>) -> String {
    overview.map_or_else(|| "No description available".to_string(), |o| truncate(o, 300))
}

/// Biography text clipped for a person embed.
#[must_use]
pub fn biography_line(biography: Option<&str>) -> String {
    biography.map_or_else(|| "No biography available".to_string(), |b| truncate(b, 500))
}

/// Clips a string to Discord's select-option label limit.
#[must_use]
pub fn clip_label(label: &str) -> String {
    truncate(label, 100)
}

/// Rating rendered as `7.8/10`, or `N/A` when absent.
#[must_use]
pub fn rating_line(vote_average: Option<f64>) -> String {
    vote_average.map_or_else(|| "N/A".to_string(), |v| format!("{v}/10"))
}

/// Rating with vote count, e.g. `7.8/10 (1234 votes)`.
#[must_use]
pub fn rating_with_votes(vote_average: Option<f64>, vote_count: Option<u64>) -> String {
    let rating = vote_average.map_or_else(|| "N/A".to_string(), |v| v.to_string());
    format!("{rating}/10 ({} votes)", vote_count.unwrap_or(0))
}

/// Runtime rendered as `136 min`, or `N/A` when absent.
#[must_use]
pub fn runtime_line(runtime: Option<u32>) -> String {
    runtime.map_or_else(|| "N/A".to_string(), |m| format!("{m} min"))
}

/// Dollar amount with thousands separators, e.g. `$63,000,000`; `N/A`
/// for missing or zero values (the API reports unknown budgets as 0).
#[must_use]
pub fn dollars(amount: Option<u64>) -> String {
    match amount {
        Some(value) if value > 0 => format!("${}", group_thousands(value)),
        _ => "N/A".to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Tag for an episode embed title, e.g. `S3E7: The Title`.
#[must_use]
pub fn episode_tag(season: u32, episode: u32, name: Option<&str>) -> String {
    let name = name.unwrap_or("Untitled");
    format!("S{season}E{episode}: {name}")
}

/// Page indicator appended to the listing header.
#[must_use]
pub fn page_line(page: u32) -> String {
    format!("Page {page}")
}

/// Full TMDB image URL for a path fragment like `/abc.jpg`.
#[must_use]
pub fn tmdb_image(size: &str, path: &str) -> String {
    format!("{TMDB_IMAGE_BASE}/{size}{path}")
}

/// TMDB page for a movie or TV show.
#[must_use]
pub fn tmdb_url(kind_segment: &str, id: u64) -> String {
    format!("{TMDB_BASE}/{kind_segment}/{id}")
}

/// Player page for a movie.
#[must_use]
pub fn movie_player_url(id: u64) -> String {
    format!("{PLAYER_BASE}/movie/{id}")
}

/// Player page for a single TV episode.
#[must_use]
pub fn episode_player_url(tv_id: u64, season: u32, episode: u32) -> String {
    format!("{PLAYER_BASE}/tv/{tv_id}/{season}/{episode}")
}

/// YouTube watch URL for a video key.
#[must_use]
pub fn youtube_url(key: &str) -> String {
    format!("https://www.youtube.com/watch?v={key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_line_passthrough() {
        assert_eq!(overview_line(Some("Short plot.")), "Short plot.");
        assert_eq!(overview_line(None), "No description available");
    }

    #[test]
    fn test_overview_line_truncates_at_300() {
        let long = "x".repeat(301);
        let line = overview_line(Some(&long));
        assert_eq!(line.chars().count(), 300);
        assert!(line.ends_with("..."));
        // Exactly 300 characters is left alone
        let exact = "y".repeat(300);
        assert_eq!(overview_line(Some(&exact)), exact);
    }

    #[test]
    fn test_truncation_respects_multibyte_chars() {
        let long = "é".repeat(400);
        let line = overview_line(Some(&long));
        assert_eq!(line.chars().count(), 300);
        assert!(line.ends_with("..."));
    }

    #[test]
    fn test_biography_line_truncates_at_500() {
        let long = "b".repeat(600);
        let line = biography_line(Some(&long));
        assert_eq!(line.chars().count(), 500);
        assert!(line.ends_with("..."));
        assert_eq!(biography_line(None), "No biography available");
    }

    #[test]
    fn test_clip_label() {
        let long = "t".repeat(120);
        assert_eq!(clip_label(&long).chars().count(), 100);
        assert_eq!(clip_label("The Matrix"), "The Matrix");
    }

    #[test]
    fn test_rating_line() {
        assert_eq!(rating_line(Some(8.2)), "8.2/10");
        assert_eq!(rating_line(None), "N/A");
    }

    #[test]
    fn test_rating_with_votes() {
        assert_eq!(rating_with_votes(Some(8.2), Some(1234)), "8.2/10 (1234 votes)");
        assert_eq!(rating_with_votes(None, None), "N/A/10 (0 votes)");
    }

    #[test]
    fn test_runtime_line() {
        assert_eq!(runtime_line(Some(136)), "136 min");
        assert_eq!(runtime_line(None), "N/A");
    }

    #[test]
    fn test_dollars_grouping() {
        assert_eq!(dollars(Some(63_000_000)), "$63,000,000");
        assert_eq!(dollars(Some(1_000)), "$1,000");
        assert_eq!(dollars(Some(999)), "$999");
        assert_eq!(dollars(Some(0)), "N/A");
        assert_eq!(dollars(None), "N/A");
    }

    #[test]
    fn test_episode_tag() {
        assert_eq!(episode_tag(3, 7, Some("Ozymandias")), "S3E7: Ozymandias");
        assert_eq!(episode_tag(1, 1, None), "S1E1: Untitled");
    }

    #[test]
    fn test_page_line() {
        assert_eq!(page_line(4), "Page 4");
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            tmdb_image(POSTER_SIZE, "/abc.jpg"),
            "https://image.tmdb.org/t/p/w342/abc.jpg"
        );
        assert_eq!(tmdb_url("movie", 603), "https://www.themoviedb.org/movie/603");
        assert_eq!(movie_player_url(603), "https://vidsrc.xyz/embed/movie/603");
        assert_eq!(
            episode_player_url(1396, 5, 14),
            "https://vidsrc.xyz/embed/tv/1396/5/14"
        );
        assert_eq!(
            youtube_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
