//! Paginated browse replies.
//!
//! Every browse-type command funnels through [`run_browse`]: fetch page
//! one, create a session, send the listing with prev/next buttons and a
//! detail select menu, then collect component interactions until the
//! session expires. Navigation always re-queries the catalog API for the
//! target page; the session only caches the page currently on screen so
//! the select menu can resolve a choice without another round trip.

use crate::api::models::{DetailsResponse, MediaItem, MediaKind};
use crate::bot::{BotData, Context, embeds};
use crate::core::format;
use crate::core::session::{BrowseFilter, BrowseSession};
use crate::errors::Result;
use poise::serenity_prelude as serenity;
use tracing::debug;

/// One fetched page of a browse listing.
#[derive(Debug, Clone)]
pub struct BrowsePage {
    /// Items to show, already clipped to the configured page size.
    pub items: Vec<MediaItem>,
    /// Whether a following page exists.
    pub has_next: bool,
    /// Total result count, when the source returns the whole list at once.
    pub total: Option<usize>,
}

/// Fetches one page for a browse filter.
///
/// Feed and genre listings are paged by the API (`meta.has_next`);
/// search and trending return a whole list per request, which is
/// re-fetched and windowed locally on every navigation.
pub async fn fetch_page(data: &BotData, filter: &BrowseFilter, page: u32) -> Result<BrowsePage> {
    let page_size = data.settings.page_size;
    match filter {
        BrowseFilter::Search { query } => {
            let results = data.catalog.search(query).await?.results;
            Ok(window(results, page, page_size))
        }
        BrowseFilter::Trending => {
            let home = data.catalog.home_sections().await?;
            let items = home.trending().map(|s| s.items.clone()).unwrap_or_default();
            Ok(window(items, page, page_size))
        }
        BrowseFilter::Feed(feed) => {
            let response = data.catalog.list(feed.endpoint(), page).await?;
            let has_next = response.has_next();
            let mut items = response.results;
            items.truncate(page_size);
            Ok(BrowsePage {
                items,
                has_next,
                total: None,
            })
        }
        BrowseFilter::Genre { kind, genre_id } => {
            let response = data.catalog.genre_listing(*kind, *genre_id, page).await?;
            let has_next = response.has_next();
            let mut items = response.results;
            items.truncate(page_size);
            Ok(BrowsePage {
                items,
                has_next,
                total: None,
            })
        }
    }
}

/// Windows a full result list down to one page.
fn window(all: Vec<MediaItem>, page: u32, page_size: usize) -> BrowsePage {
    let total = all.len();
    let start = (page.max(1) as usize - 1) * page_size;
    let items: Vec<MediaItem> = all.into_iter().skip(start).take(page_size).collect();
    BrowsePage {
        items,
        has_next: total > start + page_size,
        total: Some(total),
    }
}

/// Runs a paginated browse interaction to completion.
///
/// `header` builds the reply's content line from the first page (so it
/// can include a result count). `empty_notice` is sent instead when the
/// listing comes back empty.
pub async fn run_browse(
    ctx: Context<'_>,
    kind: Option<MediaKind>,
    filter: BrowseFilter,
    empty_notice: &str,
    header: impl FnOnce(&BrowsePage) -> String,
) -> Result<()> {
    let data = ctx.data();

    let first = fetch_page(data, &filter, 1).await?;
    if first.items.is_empty() {
        ctx.say(empty_notice).await?;
        return Ok(());
    }
    let header = header(&first);

    let ctx_id = ctx.id();
    let mut session = BrowseSession::new(ctx_id, kind, filter);
    session.show_page(1, first.items, first.has_next);
    data.sessions.insert(session.clone());

    let mut builder = poise::CreateReply::default().content(list_content(&header, 1));
    for item in &session.result_cache {
        builder = builder.embed(embeds::media_embed(item, item.kind_or(session.kind)));
    }
    builder = builder.components(list_components(ctx_id, &session));
    let reply = ctx.send(builder).await?;

    if let Ok(message) = reply.message().await {
        let message_id = message.id.get();
        data.sessions.update(ctx_id, |s| s.origin_message_id = Some(message_id));
    }

    let prev_id = format!("{ctx_id}prev");
    let next_id = format!("{ctx_id}next");
    let select_id = format!("{ctx_id}select");
    let back_id = format!("{ctx_id}back");

    while let Some(press) = serenity::ComponentInteractionCollector::new(ctx)
        .filter(move |press| press.data.custom_id.starts_with(&ctx_id.to_string()))
        .timeout(data.settings.session_ttl)
        .await
    {
        let Some(session) = data.sessions.get(ctx_id) else {
            expired_notice(ctx, &press).await?;
            break;
        };

        if press.data.custom_id == next_id || press.data.custom_id == prev_id {
            let target = if press.data.custom_id == next_id {
                if !session.has_next {
                    continue;
                }
                session.current_page + 1
            } else {
                if session.current_page <= 1 {
                    continue;
                }
                session.current_page - 1
            };

            let fetched = fetch_page(data, &session.filter, target).await?;
            data.sessions
                .update(ctx_id, |s| s.show_page(target, fetched.items, fetched.has_next));
            if let Some(session) = data.sessions.get(ctx_id) {
                respond_with_list(ctx, &press, &header, &session).await?;
            }
        } else if press.data.custom_id == select_id {
            let serenity::ComponentInteractionDataKind::StringSelect { values } = &press.data.kind
            else {
                continue;
            };
            let Some(index) = values.first().and_then(|v| v.parse::<usize>().ok()) else {
                continue;
            };
            let Some(item) = session.result_cache.get(index) else {
                continue;
            };

            let item_kind = item.kind_or(session.kind);
            let details = data.catalog.details(item_kind, item.id).await?;
            respond_with_detail(ctx, &press, &details, item_kind, item.id, ctx_id).await?;
        } else if press.data.custom_id == back_id {
            // The list view is reconstructed by re-querying the API for
            // the page the session is on, not from any cached results.
            let page = session.current_page;
            let fetched = fetch_page(data, &session.filter, page).await?;
            data.sessions
                .update(ctx_id, |s| s.show_page(page, fetched.items, fetched.has_next));
            if let Some(session) = data.sessions.get(ctx_id) {
                respond_with_list(ctx, &press, &header, &session).await?;
            }
        }
    }

    // Collector is done: drop the session and strip the components so
    // stale buttons cannot be pressed.
    if let Some(session) = data.sessions.remove(ctx_id) {
        debug!(session_id = ctx_id, "browse session ended");
        let mut builder = poise::CreateReply::default()
            .content(list_content(&header, session.current_page))
            .components(Vec::new());
        for item in &session.result_cache {
            builder = builder.embed(embeds::media_embed(item, item.kind_or(session.kind)));
        }
        let _ = reply.edit(ctx, builder).await;
    }

    Ok(())
}

/// Content line above the listing embeds.
fn list_content(header: &str, page: u32) -> String {
    if page <= 1 {
        header.to_string()
    } else {
        format!("{header} ({})", format::page_line(page))
    }
}

/// Prev/next buttons plus the detail select menu for the current page.
fn list_components(ctx_id: u64, session: &BrowseSession) -> Vec<serenity::CreateActionRow> {
    let buttons = vec![
        serenity::CreateButton::new(format!("{ctx_id}prev"))
            .emoji('◀')
            .style(serenity::ButtonStyle::Secondary)
            .disabled(session.current_page <= 1),
        serenity::CreateButton::new(format!("{ctx_id}next"))
            .emoji('▶')
            .style(serenity::ButtonStyle::Secondary)
            .disabled(!session.has_next),
    ];

    let options: Vec<serenity::CreateSelectMenuOption> = session
        .result_cache
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut option = serenity::CreateSelectMenuOption::new(
                format::clip_label(item.display_title()),
                index.to_string(),
            );
            if let Some(date) = &item.release_date {
                option = option.description(date.clone());
            }
            option
        })
        .collect();

    let mut rows = vec![serenity::CreateActionRow::Buttons(buttons)];
    if !options.is_empty() {
        rows.push(serenity::CreateActionRow::SelectMenu(
            serenity::CreateSelectMenu::new(
                format!("{ctx_id}select"),
                serenity::CreateSelectMenuKind::String { options },
            )
            .placeholder("More details..."),
        ));
    }
    rows
}

/// Back button plus the external link buttons for a detail view.
fn detail_components(ctx_id: u64, kind: MediaKind, id: u64) -> Vec<serenity::CreateActionRow> {
    let mut buttons = vec![
        serenity::CreateButton::new(format!("{ctx_id}back"))
            .label("Back to results")
            .style(serenity::ButtonStyle::Secondary),
    ];
    match kind {
        MediaKind::Movie => {
            buttons.push(
                serenity::CreateButton::new_link(format::movie_player_url(id)).label("Watch Now"),
            );
            buttons.push(
                serenity::CreateButton::new_link(format::tmdb_url("movie", id)).label("TMDB Page"),
            );
        }
        MediaKind::Tv => {
            buttons.push(
                serenity::CreateButton::new_link(format::tmdb_url("tv", id)).label("TMDB Page"),
            );
        }
    }
    vec![serenity::CreateActionRow::Buttons(buttons)]
}

/// Swaps the message to the current list view.
async fn respond_with_list(
    ctx: Context<'_>,
    press: &serenity::ComponentInteraction,
    header: &str,
    session: &BrowseSession,
) -> Result<()> {
    let page_embeds: Vec<serenity::CreateEmbed> = session
        .result_cache
        .iter()
        .map(|item| embeds::media_embed(item, item.kind_or(session.kind)))
        .collect();

    press
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .content(list_content(header, session.current_page))
                    .embeds(page_embeds)
                    .components(list_components(session.id, session)),
            ),
        )
        .await?;
    Ok(())
}

/// Swaps the message to a detail view for the selected item.
async fn respond_with_detail(
    ctx: Context<'_>,
    press: &serenity::ComponentInteraction,
    details: &DetailsResponse,
    kind: MediaKind,
    id: u64,
    ctx_id: u64,
) -> Result<()> {
    let Some(info) = details.info() else {
        press
            .create_response(
                ctx.serenity_context(),
                serenity::CreateInteractionResponse::Message(
                    serenity::CreateInteractionResponseMessage::new()
                        .content("No details available for this item.")
                        .ephemeral(true),
                ),
            )
            .await?;
        return Ok(());
    };

    press
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .content("")
                    .embeds(vec![embeds::detail_embed(info, &details.cast, kind)])
                    .components(detail_components(ctx_id, kind, id)),
            ),
        )
        .await?;
    Ok(())
}

/// Tells the user their browse session is gone.
async fn expired_notice(ctx: Context<'_>, press: &serenity::ComponentInteraction) -> Result<()> {
    press
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .content("This search has expired. Run the command again.")
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}
