//! Streaming and random-pick commands.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        api::models::MediaKind,
        bot::{Context, embeds},
        core::session::ListFeed,
        errors::Result,
    };
    use poise::serenity_prelude as serenity;
    use rand::seq::SliceRandom;

    /// Gets streaming links for content.
    #[poise::command(slash_command)]
    pub async fn watch(
        ctx: Context<'_>,
        #[description = "Content type"]
        #[rename = "type"]
        kind: MediaKind,
        #[description = "TMDB ID"] id: u64,
        #[description = "Season number (TV shows only)"] season: Option<u32>,
        #[description = "Episode number (TV shows only)"] episode: Option<u32>,
    ) -> Result<()> {
        ctx.defer().await?;
        let response = ctx
            .data()
            .catalog
            .stream_sources(kind, id, season, episode)
            .await?;
        if response.sources.is_empty() {
            ctx.say("No streaming sources available.").await?;
            return Ok(());
        }

        ctx.send(poise::CreateReply::default().embed(embeds::sources_embed(&response.sources)))
            .await?;
        Ok(())
    }

    /// Gets a random movie or TV show.
    ///
    /// The pick comes from the popular listing, and the reply carries a
    /// re-roll button that swaps in a fresh pick from a fresh fetch.
    #[poise::command(slash_command)]
    pub async fn random(
        ctx: Context<'_>,
        #[description = "Content type"]
        #[rename = "type"]
        kind: MediaKind,
    ) -> Result<()> {
        ctx.defer().await?;
        let data = ctx.data();
        let feed = ListFeed::Popular(kind);

        let results = data.catalog.list(feed.endpoint(), 1).await?.results;
        let Some(item) = results.choose(&mut rand::thread_rng()) else {
            ctx.say("Could not fetch random content.").await?;
            return Ok(());
        };
        let mut current = item.clone();

        let ctx_id = ctx.id();
        let again_id = format!("{ctx_id}again");
        let button_row = serenity::CreateActionRow::Buttons(vec![
            serenity::CreateButton::new(&again_id)
                .label("Get Another Random")
                .style(serenity::ButtonStyle::Primary),
        ]);

        let reply = ctx
            .send(
                poise::CreateReply::default()
                    .content(format!("Random {}:", kind.label()))
                    .embed(embeds::media_embed(item, kind))
                    .components(vec![button_row.clone()]),
            )
            .await?;

        while let Some(press) = serenity::ComponentInteractionCollector::new(ctx)
            .filter(move |press| press.data.custom_id.starts_with(&ctx_id.to_string()))
            .timeout(data.settings.session_ttl)
            .await
        {
            let results = data.catalog.list(feed.endpoint(), 1).await?.results;
            let Some(item) = results.choose(&mut rand::thread_rng()) else {
                continue;
            };
            current = item.clone();
            press
                .create_response(
                    ctx.serenity_context(),
                    serenity::CreateInteractionResponse::UpdateMessage(
                        serenity::CreateInteractionResponseMessage::new()
                            .embeds(vec![embeds::media_embed(&current, kind)])
                            .components(vec![button_row.clone()]),
                    ),
                )
                .await?;
        }

        // Strip the re-roll button once the collector times out
        let _ = reply
            .edit(
                ctx,
                poise::CreateReply::default()
                    .content(format!("Random {}:", kind.label()))
                    .embed(embeds::media_embed(&current, kind))
                    .components(Vec::new()),
            )
            .await;

        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
