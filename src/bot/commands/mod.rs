//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Paginated browse commands (search, trending, listings, genres)
pub mod browse;

/// General utility commands
pub mod general;

/// Single-item lookup commands (movie, tv, season, episode, cast, trailer)
pub mod lookup;

/// Streaming and random-pick commands
pub mod watch;

// Export commands
pub use browse::*;
pub use general::*;
pub use lookup::*;
pub use watch::*;
