//! HTTP client for the catalog API.
//!
//! Every remote call is a plain request/response with the configured
//! timeout. There are no retries and no backoff; a failure surfaces to
//! the user as a chat reply.

use crate::api::models::{
    ApiErrorBody, DetailsResponse, EpisodeResponse, HomeResponse, ListResponse, MediaKind,
    PersonResponse, PlayerResponse, SearchResponse, SeasonResponse, VideosResponse,
};
use crate::config::settings::Settings;
use crate::errors::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Typed client over the remote catalog REST API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Builds a client with the configured base URL and request timeout.
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: settings.api_base_url.clone(),
        })
    }

    /// Performs a GET request and decodes the JSON body.
    ///
    /// Non-success statuses are turned into [`Error::Api`], carrying the
    /// body's `error` message when the API provides one.
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "catalog request");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(Error::Http)
    }

    /// Searches movies and TV shows by free-text query.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        self.get("/search", &[("q", query)]).await
    }

    /// Fetches the curated home feed sections.
    pub async fn home_sections(&self) -> Result<HomeResponse> {
        self.get("/home", &[]).await
    }

    /// Fetches one page of a curated listing endpoint such as
    /// `/movie/popular` or `/tv/airing_today`.
    pub async fn list(&self, endpoint: &str, page: u32) -> Result<ListResponse> {
        let page = page.to_string();
        self.get("/list", &[("endpoint", endpoint), ("page", &page)])
            .await
    }

    /// Fetches one page of a genre listing.
    pub async fn genre_listing(
        &self,
        kind: MediaKind,
        genre_id: u32,
        page: u32,
    ) -> Result<ListResponse> {
        let page = page.to_string();
        self.get(
            &format!("/genres/{}/{genre_id}", kind.path_segment()),
            &[("page", &page)],
        )
        .await
    }

    /// Fetches full details (and cast) for a movie or TV show.
    pub async fn details(&self, kind: MediaKind, id: u64) -> Result<DetailsResponse> {
        self.get(&format!("/details/{}/{id}", kind.path_segment()), &[])
            .await
    }

    /// Fetches a person's biography and notable titles.
    pub async fn person(&self, id: u64) -> Result<PersonResponse> {
        self.get(&format!("/cast/{id}"), &[]).await
    }

    /// Fetches one season of a TV show, including its episode listing.
    pub async fn season(&self, tv_id: u64, season: u32) -> Result<SeasonResponse> {
        self.get(&format!("/tv/{tv_id}/season/{season}"), &[]).await
    }

    /// Fetches a single TV episode with crew and guest stars.
    pub async fn episode(&self, tv_id: u64, season: u32, episode: u32) -> Result<EpisodeResponse> {
        self.get(&format!("/episodes/{tv_id}/{season}/{episode}"), &[])
            .await
    }

    /// Fetches streaming sources for a movie, or for one TV episode when
    /// season and episode numbers are given.
    pub async fn stream_sources(
        &self,
        kind: MediaKind,
        id: u64,
        season: Option<u32>,
        episode: Option<u32>,
    ) -> Result<PlayerResponse> {
        let path = format!("/player/{}/{id}", kind.path_segment());
        match (kind, season, episode) {
            (MediaKind::Tv, Some(s), Some(e)) => {
                let (s, e) = (s.to_string(), e.to_string());
                self.get(&path, &[("s", s.as_str()), ("e", e.as_str())])
                    .await
            }
            _ => self.get(&path, &[]).await,
        }
    }

    /// Fetches trailers and other videos attached to an item.
    pub async fn videos(&self, kind: MediaKind, id: u64) -> Result<VideosResponse> {
        self.get(&format!("/videos/{}/{id}", kind.path_segment()), &[])
            .await
    }
}
