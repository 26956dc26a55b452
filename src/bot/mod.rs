//! Bot layer - Discord-specific interface and command handlers.
//!
//! This module provides the Discord interface for the `CinemaBuddy`
//! application: all slash commands, the component-driven pagination, the
//! autocomplete handlers, and bot context management.

/// Discord command implementations (browse, lookup, watch, general)
pub mod commands;
/// Embed construction for catalog content
pub mod embeds;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;
/// Paginated browse replies and their interactive components
pub mod pagination;

use crate::api::CatalogClient;
use crate::config::settings::Settings;
use crate::core::session::SessionStore;
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{info, instrument};

/// Shared data available to all bot commands.
/// This structure holds the catalog client, the browse session store,
/// and the resolved settings that commands need to access.
pub struct BotData {
    /// Client for the remote catalog API
    pub catalog: CatalogClient,
    /// Live browse sessions, keyed by originating interaction id
    pub sessions: SessionStore,
    /// Resolved runtime settings
    pub settings: Arc<Settings>,
}

/// Type alias for the context poise passes to every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            panic!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("Error: {error}")).await {
                tracing::error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Global command gate: when `ALLOWED_CHANNEL_ID` is configured, refuse
/// commands issued anywhere else with an ephemeral notice.
async fn allowed_channel_check(ctx: Context<'_>) -> Result<bool> {
    let Some(allowed) = ctx.data().settings.allowed_channel_id else {
        return Ok(true);
    };
    if ctx.channel_id().get() == allowed {
        return Ok(true);
    }
    ctx.send(
        poise::CreateReply::default()
            .content("This bot only answers in its dedicated channel.")
            .ephemeral(true),
    )
    .await?;
    Ok(false)
}

/// Builds the poise framework and runs the bot until the gateway
/// connection ends.
#[instrument(skip(token, settings))]
pub async fn run_bot(token: String, settings: Settings) -> Result<()> {
    let settings = Arc::new(settings);
    let catalog = CatalogClient::new(&settings)?;
    let sessions = SessionStore::new(settings.session_ttl);
    let data = BotData {
        catalog,
        sessions,
        settings,
    };

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::search(),
                commands::trending(),
                commands::popular(),
                commands::toprated(),
                commands::upcoming(),
                commands::nowplaying(),
                commands::airingtoday(),
                commands::genres(),
                commands::movie(),
                commands::tv(),
                commands::season(),
                commands::episode(),
                commands::cast(),
                commands::trailer(),
                commands::watch(),
                commands::random(),
                commands::ping(),
                commands::help(),
            ],
            on_error: |error| Box::pin(on_error(error)),
            command_check: Some(|ctx| Box::pin(allowed_channel_check(ctx))),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    // Slash commands and component interactions arrive on the Guilds
    // intent alone
    let intents = serenity::GatewayIntents::GUILDS;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::Client::builder(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| tracing::error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| tracing::error!("Client error: {:?}", e))?;
    Ok(())
}
