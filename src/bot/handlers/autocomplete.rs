//! Autocomplete handlers for Discord slash command parameters.
//!
//! Genre names come from the static genre tables, so suggestions are a
//! simple filter over the known names rather than a remote call.

use crate::bot::Context;
use crate::config::genres;

/// Provides autocomplete suggestions for genre names.
///
/// The `/genres` command takes the content type as a separate option, so
/// suggestions span both the movie and TV tables; the command itself
/// validates the chosen name against the selected type.
///
/// # Arguments
/// * `_ctx` - The poise context (unused, but required by poise signature)
/// * `partial` - The partial string the user has typed so far
///
/// # Returns
/// A vector of genre names that match the partial input
pub async fn autocomplete_genre_name(_ctx: Context<'_>, partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();

    genres::all_genre_names()
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&partial_lower))
        .take(25) // Discord autocomplete limit
        .map(str::to_string)
        .collect()
}
