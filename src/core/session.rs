//! Ephemeral browse sessions.
//!
//! Every paginated command creates one session: a record of what is being
//! browsed (the filter), where the user is (current page), and the items
//! currently on screen. Sessions live in a process-local map, are mutated
//! on next/prev/select, and vanish after a fixed TTL or on restart.
//! There is no persistence; navigation re-queries the catalog API.

use crate::api::models::{MediaItem, MediaKind};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A curated listing endpoint the bot can page through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFeed {
    /// Most popular movies or TV shows.
    Popular(MediaKind),
    /// Top rated movies or TV shows.
    TopRated(MediaKind),
    /// Upcoming movie releases.
    Upcoming,
    /// Movies currently in theaters.
    NowPlaying,
    /// TV shows airing today.
    AiringToday,
}

impl ListFeed {
    /// The catalog listing endpoint for this feed.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Popular(MediaKind::Movie) => "/movie/popular",
            Self::Popular(MediaKind::Tv) => "/tv/popular",
            Self::TopRated(MediaKind::Movie) => "/movie/top_rated",
            Self::TopRated(MediaKind::Tv) => "/tv/top_rated",
            Self::Upcoming => "/movie/upcoming",
            Self::NowPlaying => "/movie/now_playing",
            Self::AiringToday => "/tv/airing_today",
        }
    }

    /// The media kind every item in this feed has.
    #[must_use]
    pub const fn kind(self) -> MediaKind {
        match self {
            Self::Popular(kind) | Self::TopRated(kind) => kind,
            Self::Upcoming | Self::NowPlaying => MediaKind::Movie,
            Self::AiringToday => MediaKind::Tv,
        }
    }

    /// Header line shown above the listing.
    #[must_use]
    pub fn header(self) -> String {
        match self {
            Self::Popular(kind) => format!("Popular {}:", kind.label_plural()),
            Self::TopRated(kind) => format!("Top Rated {}:", kind.label_plural()),
            Self::Upcoming => "Upcoming Movies:".to_string(),
            Self::NowPlaying => "Now Playing in Theaters:".to_string(),
            Self::AiringToday => "TV Shows Airing Today:".to_string(),
        }
    }
}

/// What a browse session is paging through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseFilter {
    /// Free-text search results.
    Search {
        /// The user's query string.
        query: String,
    },
    /// A curated listing feed.
    Feed(ListFeed),
    /// A genre listing.
    Genre {
        /// Media kind being browsed.
        kind: MediaKind,
        /// TMDB genre id.
        genre_id: u32,
    },
    /// The trending section of the home feed.
    Trending,
}

/// In-memory record of one user's browse position.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    /// Unique id while the session is live (the originating interaction id).
    pub id: u64,
    /// Media kind of the listing, when the filter fixes one.
    pub kind: Option<MediaKind>,
    /// What is being browsed.
    pub filter: BrowseFilter,
    /// Page currently shown, 1-based.
    pub current_page: u32,
    /// Highest page the user has reached.
    pub max_page_reached: u32,
    /// Items on the page currently shown; serves the select menu.
    pub result_cache: Vec<MediaItem>,
    /// Whether the API advertises a page after the current one.
    pub has_next: bool,
    /// Message the session's components live on.
    pub origin_message_id: Option<u64>,
    created_at: Instant,
}

impl BrowseSession {
    /// Creates a session positioned on page 1.
    #[must_use]
    pub fn new(id: u64, kind: Option<MediaKind>, filter: BrowseFilter) -> Self {
        Self {
            id,
            kind,
            filter,
            current_page: 1,
            max_page_reached: 1,
            result_cache: Vec::new(),
            has_next: false,
            origin_message_id: None,
            created_at: Instant::now(),
        }
    }

    /// Moves the session to `page` and replaces the cached page contents.
    pub fn show_page(&mut self, page: u32, items: Vec<MediaItem>, has_next: bool) {
        self.current_page = page.max(1);
        self.max_page_reached = self.max_page_reached.max(self.current_page);
        self.result_cache = items;
        self.has_next = has_next;
    }

    fn expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

/// Process-local store of live browse sessions.
///
/// Expiry is naive: a sweep runs on every access rather than on a timer,
/// which is enough because an expired session only needs to be gone by
/// the time something next looks for it.
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    inner: Mutex<HashMap<u64, BrowseSession>>,
}

impl SessionStore {
    /// Creates a store whose sessions live for `ttl` after creation.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Inserts a session, sweeping expired ones first.
    pub fn insert(&self, session: BrowseSession) {
        self.purge_expired();
        self.inner.lock().unwrap().insert(session.id, session);
    }

    /// Drops every expired session from the map.
    pub fn purge_expired(&self) {
        let ttl = self.ttl;
        self.inner.lock().unwrap().retain(|_, s| !s.expired(ttl));
    }

    /// Returns a snapshot of a live session, if it exists and has not
    /// expired.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<BrowseSession> {
        let map = self.inner.lock().unwrap();
        map.get(&id).filter(|s| !s.expired(self.ttl)).cloned()
    }

    /// Mutates a live session in place. Returns false when the session
    /// is gone or expired.
    pub fn update(&self, id: u64, f: impl FnOnce(&mut BrowseSession)) -> bool {
        let mut map = self.inner.lock().unwrap();
        match map.get_mut(&id) {
            Some(session) if !session.expired(self.ttl) => {
                f(session);
                true
            }
            _ => false,
        }
    }

    /// Removes and returns a session.
    pub fn remove(&self, id: u64) -> Option<BrowseSession> {
        self.inner.lock().unwrap().remove(&id)
    }

    /// Number of live (unexpired) sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        let map = self.inner.lock().unwrap();
        map.values().filter(|s| !s.expired(self.ttl)).count()
    }

    /// Whether the store holds no live sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_media_item;

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(60))
    }

    #[test]
    fn test_feed_endpoints() {
        assert_eq!(ListFeed::Popular(MediaKind::Movie).endpoint(), "/movie/popular");
        assert_eq!(ListFeed::Popular(MediaKind::Tv).endpoint(), "/tv/popular");
        assert_eq!(ListFeed::TopRated(MediaKind::Movie).endpoint(), "/movie/top_rated");
        assert_eq!(ListFeed::TopRated(MediaKind::Tv).endpoint(), "/tv/top_rated");
        assert_eq!(ListFeed::Upcoming.endpoint(), "/movie/upcoming");
        assert_eq!(ListFeed::NowPlaying.endpoint(), "/movie/now_playing");
        assert_eq!(ListFeed::AiringToday.endpoint(), "/tv/airing_today");
    }

    #[test]
    fn test_feed_kinds_and_headers() {
        assert_eq!(ListFeed::Upcoming.kind(), MediaKind::Movie);
        assert_eq!(ListFeed::AiringToday.kind(), MediaKind::Tv);
        assert_eq!(ListFeed::Popular(MediaKind::Tv).header(), "Popular TV Shows:");
        assert_eq!(ListFeed::NowPlaying.header(), "Now Playing in Theaters:");
    }

    #[test]
    fn test_insert_and_get() {
        let store = store();
        let session = BrowseSession::new(1, Some(MediaKind::Movie), BrowseFilter::Trending);
        store.insert(session);
        let got = store.get(1).unwrap();
        assert_eq!(got.current_page, 1);
        assert_eq!(got.max_page_reached, 1);
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_show_page_tracks_max_page() {
        let mut session = BrowseSession::new(
            1,
            None,
            BrowseFilter::Search {
                query: "matrix".to_string(),
            },
        );
        session.show_page(2, vec![sample_media_item()], true);
        session.show_page(3, vec![], false);
        session.show_page(1, vec![], true);
        assert_eq!(session.current_page, 1);
        assert_eq!(session.max_page_reached, 3);
        assert!(session.has_next);
    }

    #[test]
    fn test_show_page_clamps_to_page_one() {
        let mut session = BrowseSession::new(1, None, BrowseFilter::Trending);
        session.show_page(0, vec![], false);
        assert_eq!(session.current_page, 1);
    }

    #[test]
    fn test_update_mutates_live_session() {
        let store = store();
        store.insert(BrowseSession::new(9, None, BrowseFilter::Trending));
        let updated = store.update(9, |s| s.origin_message_id = Some(777));
        assert!(updated);
        assert_eq!(store.get(9).unwrap().origin_message_id, Some(777));
        assert!(!store.update(10, |_| {}));
    }

    #[test]
    fn test_remove() {
        let store = store();
        store.insert(BrowseSession::new(4, None, BrowseFilter::Trending));
        assert!(store.remove(4).is_some());
        assert!(store.get(4).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_expired_sessions_are_invisible() {
        let store = SessionStore::new(Duration::ZERO);
        store.insert(BrowseSession::new(1, None, BrowseFilter::Trending));
        assert!(store.get(1).is_none());
        assert!(!store.update(1, |_| {}));
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_sweeps_expired_sessions() {
        let store = SessionStore::new(Duration::ZERO);
        store.insert(BrowseSession::new(1, None, BrowseFilter::Trending));
        store.insert(BrowseSession::new(2, None, BrowseFilter::Trending));
        // Both records are expired; the second insert swept the first
        let map = store.inner.lock().unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_purge_expired_empties_dead_store() {
        let store = SessionStore::new(Duration::ZERO);
        store.insert(BrowseSession::new(1, None, BrowseFilter::Trending));
        store.purge_expired();
        assert_eq!(store.inner.lock().unwrap().len(), 0);
    }
}
