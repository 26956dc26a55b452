//! Catalog API layer.
//!
//! The bot talks to a single remote REST service that fronts TMDB data.
//! This module provides the typed client and the serde models for every
//! payload the bot reads.

/// HTTP client for the catalog API
pub mod client;
/// Serde models for catalog responses
pub mod models;

pub use client::CatalogClient;
