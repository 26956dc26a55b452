//! General Discord commands - ping, help, and other utility commands.
//! This module contains simple commands that don't require catalog access
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{bot::Context, errors::Result};

    /// Responds with "Pong!" to test bot connectivity.
    ///
    /// This is a simple health check command that doesn't require any catalog requests.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: Context<'_>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command)]
    pub async fn help(ctx: Context<'_>) -> Result<()> {
        let help_text = "**CinemaBuddy Help**\n\
        Here is a summary of all available commands.\n\n\
        **Browse Commands**\n\
        • `/search <query>` - Search movies and TV shows.\n\
        • `/trending` - Trending movies and TV shows.\n\
        • `/popular <type>` / `/toprated <type>` - Popular or top rated content.\n\
        • `/upcoming` / `/nowplaying` - Upcoming and in-theater movies.\n\
        • `/airingtoday` - TV shows airing today.\n\
        • `/genres <type> <genre>` - Browse content by genre.\n\
        Browse replies page with the ◀ ▶ buttons; pick an entry from the menu for details.\n\n\
        **Lookup Commands**\n\
        • `/movie <id>` / `/tv <id>` - Full details for one title.\n\
        • `/season <tvid> <season>` - Season details with episode list.\n\
        • `/episode <tvid> <season> <episode>` - Single episode details.\n\
        • `/cast <id>` - Actor or crew member information.\n\
        • `/trailer <type> <id>` - Trailers for a title.\n\n\
        **Watch Commands**\n\
        • `/watch <type> <id> [season] [episode]` - Streaming sources.\n\
        • `/random <type>` - A random pick, with a re-roll button.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
