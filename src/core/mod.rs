//! Core business logic, independent of the Discord framework.

/// Pure presentation helpers - truncation, ratings, URLs
pub mod format;
/// Ephemeral browse sessions and the process-local session store
pub mod session;
