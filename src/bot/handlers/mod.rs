//! Discord interaction handlers.

/// Autocomplete handlers for slash command parameters
pub mod autocomplete;
