//! Paginated browse commands - search, trending, curated listings, and
//! genre browsing.
//!
//! Each command here resolves to a browse filter and hands off to the
//! pagination module, which owns the session and the interactive
//! components.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        api::models::MediaKind,
        bot::{Context, handlers::autocomplete, pagination},
        core::session::{BrowseFilter, ListFeed},
        errors::Result,
    };

    /// Searches for movies and TV shows.
    #[poise::command(slash_command)]
    pub async fn search(
        ctx: Context<'_>,
        #[description = "What to search for"] query: String,
    ) -> Result<()> {
        ctx.defer().await?;
        let filter = BrowseFilter::Search {
            query: query.clone(),
        };
        pagination::run_browse(ctx, None, filter, "No results found for your search.", |page| {
            format!(
                "Found {} results for \"{query}\":",
                page.total.unwrap_or(page.items.len())
            )
        })
        .await
    }

    /// Shows trending movies and TV shows.
    #[poise::command(slash_command)]
    pub async fn trending(ctx: Context<'_>) -> Result<()> {
        ctx.defer().await?;
        pagination::run_browse(
            ctx,
            None,
            BrowseFilter::Trending,
            "Could not fetch trending content.",
            |_| "Trending Now:".to_string(),
        )
        .await
    }

    /// Shows popular content.
    #[poise::command(slash_command)]
    pub async fn popular(
        ctx: Context<'_>,
        #[description = "Content type"]
        #[rename = "type"]
        kind: MediaKind,
    ) -> Result<()> {
        ctx.defer().await?;
        let feed = ListFeed::Popular(kind);
        pagination::run_browse(
            ctx,
            Some(kind),
            BrowseFilter::Feed(feed),
            "Could not fetch popular content.",
            |_| feed.header(),
        )
        .await
    }

    /// Shows top rated content.
    #[poise::command(slash_command)]
    pub async fn toprated(
        ctx: Context<'_>,
        #[description = "Content type"]
        #[rename = "type"]
        kind: MediaKind,
    ) -> Result<()> {
        ctx.defer().await?;
        let feed = ListFeed::TopRated(kind);
        pagination::run_browse(
            ctx,
            Some(kind),
            BrowseFilter::Feed(feed),
            "Could not fetch top rated content.",
            |_| feed.header(),
        )
        .await
    }

    /// Shows upcoming movies.
    #[poise::command(slash_command)]
    pub async fn upcoming(ctx: Context<'_>) -> Result<()> {
        ctx.defer().await?;
        let feed = ListFeed::Upcoming;
        pagination::run_browse(
            ctx,
            Some(MediaKind::Movie),
            BrowseFilter::Feed(feed),
            "Could not fetch upcoming movies.",
            |_| feed.header(),
        )
        .await
    }

    /// Shows movies now playing in theaters.
    #[poise::command(slash_command)]
    pub async fn nowplaying(ctx: Context<'_>) -> Result<()> {
        ctx.defer().await?;
        let feed = ListFeed::NowPlaying;
        pagination::run_browse(
            ctx,
            Some(MediaKind::Movie),
            BrowseFilter::Feed(feed),
            "Could not fetch now playing movies.",
            |_| feed.header(),
        )
        .await
    }

    /// Shows TV shows airing today.
    #[poise::command(slash_command)]
    pub async fn airingtoday(ctx: Context<'_>) -> Result<()> {
        ctx.defer().await?;
        let feed = ListFeed::AiringToday;
        pagination::run_browse(
            ctx,
            Some(MediaKind::Tv),
            BrowseFilter::Feed(feed),
            "Could not fetch airing today shows.",
            |_| feed.header(),
        )
        .await
    }

    /// Browses content by genre.
    #[poise::command(slash_command)]
    pub async fn genres(
        ctx: Context<'_>,
        #[description = "Content type"]
        #[rename = "type"]
        kind: MediaKind,
        #[description = "Genre name"]
        #[autocomplete = "autocomplete::autocomplete_genre_name"]
        genre: String,
    ) -> Result<()> {
        ctx.defer().await?;

        let Some(genre_id) = crate::config::genres::genre_id_by_name(kind, &genre) else {
            ctx.say(format!(
                "Genre not found. Available genres: {}",
                crate::config::genres::genre_names(kind).join(", ")
            ))
            .await?;
            return Ok(());
        };

        let genre_name =
            crate::config::genres::genre_name_by_id(kind, genre_id).unwrap_or("Genre");

        pagination::run_browse(
            ctx,
            Some(kind),
            BrowseFilter::Genre { kind, genre_id },
            "No content found for this genre.",
            |_| format!("{genre_name} {}:", kind.label_plural()),
        )
        .await
    }
}

// Re-export all commands
pub use inner::*;
