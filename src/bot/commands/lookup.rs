//! Single-item lookup commands - detailed views for movies, TV shows,
//! seasons, episodes, people, and trailers.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        api::models::{MediaKind, Video},
        bot::{Context, embeds},
        core::format,
        errors::Result,
    };
    use poise::serenity_prelude as serenity;

    /// Gets detailed information about a movie.
    #[poise::command(slash_command)]
    pub async fn movie(
        ctx: Context<'_>,
        #[description = "TMDB Movie ID"] id: u64,
    ) -> Result<()> {
        ctx.defer().await?;
        let details = ctx.data().catalog.details(MediaKind::Movie, id).await?;
        let Some(info) = details.info() else {
            ctx.say("No details available for this movie.").await?;
            return Ok(());
        };

        let buttons = vec![
            serenity::CreateButton::new_link(format::movie_player_url(id)).label("Watch Now"),
            serenity::CreateButton::new_link(format::tmdb_url("movie", id)).label("TMDB Page"),
        ];
        ctx.send(
            poise::CreateReply::default()
                .embed(embeds::detail_embed(info, &details.cast, MediaKind::Movie))
                .components(vec![serenity::CreateActionRow::Buttons(buttons)]),
        )
        .await?;
        Ok(())
    }

    /// Gets detailed information about a TV show.
    #[poise::command(slash_command)]
    pub async fn tv(
        ctx: Context<'_>,
        #[description = "TMDB TV Show ID"] id: u64,
    ) -> Result<()> {
        ctx.defer().await?;
        let details = ctx.data().catalog.details(MediaKind::Tv, id).await?;
        let Some(info) = details.info() else {
            ctx.say("No details available for this show.").await?;
            return Ok(());
        };

        let buttons = vec![
            serenity::CreateButton::new_link(format::tmdb_url("tv", id)).label("TMDB Page"),
        ];
        ctx.send(
            poise::CreateReply::default()
                .embed(embeds::detail_embed(info, &details.cast, MediaKind::Tv))
                .components(vec![serenity::CreateActionRow::Buttons(buttons)]),
        )
        .await?;
        Ok(())
    }

    /// Gets TV show season details.
    #[poise::command(slash_command)]
    pub async fn season(
        ctx: Context<'_>,
        #[description = "TMDB TV Show ID"] tvid: u64,
        #[description = "Season number"] season: u32,
    ) -> Result<()> {
        ctx.defer().await?;
        let response = ctx.data().catalog.season(tvid, season).await?;
        ctx.send(poise::CreateReply::default().embed(embeds::season_embed(&response.data)))
            .await?;
        Ok(())
    }

    /// Gets TV show episode details.
    #[poise::command(slash_command)]
    pub async fn episode(
        ctx: Context<'_>,
        #[description = "TMDB TV Show ID"] tvid: u64,
        #[description = "Season number"] season: u32,
        #[description = "Episode number"] episode: u32,
    ) -> Result<()> {
        ctx.defer().await?;
        let response = ctx.data().catalog.episode(tvid, season, episode).await?;

        let buttons = vec![
            serenity::CreateButton::new_link(format::episode_player_url(tvid, season, episode))
                .label("Watch Episode"),
        ];
        ctx.send(
            poise::CreateReply::default()
                .embed(embeds::episode_embed(&response.data, season, episode))
                .components(vec![serenity::CreateActionRow::Buttons(buttons)]),
        )
        .await?;
        Ok(())
    }

    /// Gets information about an actor or crew member.
    #[poise::command(slash_command)]
    pub async fn cast(
        ctx: Context<'_>,
        #[description = "TMDB Person ID"] id: u64,
    ) -> Result<()> {
        ctx.defer().await?;
        let response = ctx.data().catalog.person(id).await?;
        ctx.send(
            poise::CreateReply::default()
                .embed(embeds::person_embed(&response.person, &response.known_for)),
        )
        .await?;
        Ok(())
    }

    /// Gets trailers for a movie or TV show.
    #[poise::command(slash_command)]
    pub async fn trailer(
        ctx: Context<'_>,
        #[description = "Content type"]
        #[rename = "type"]
        kind: MediaKind,
        #[description = "TMDB ID"] id: u64,
    ) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();

        let videos = data.catalog.videos(kind, id).await?;
        let trailers: Vec<&Video> = videos.results.iter().filter(|v| v.is_trailer()).collect();
        if trailers.is_empty() {
            ctx.say("No trailers available for this title.").await?;
            return Ok(());
        }

        let details = data.catalog.details(kind, id).await?;
        let title = details
            .info()
            .map_or_else(|| kind.label().to_string(), |info| info.display_title().to_string());

        ctx.send(poise::CreateReply::default().embed(embeds::trailers_embed(&title, &trailers)))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
