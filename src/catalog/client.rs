//! Catalog API client: stateless async GETs against the media-catalog service.
//!
//! Every operation issues exactly one request and has two terminal outcomes:
//! `Data(json)` on HTTP 200, or `Absent` after one error-severity log line for
//! any non-200 status, transport fault, or undecodable body. No error crosses
//! this boundary and no retry is attempted. Requests share one `reqwest::Client`
//! so connections are pooled; each logical call is still one logical request.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{error, info, instrument};

use super::kind::{MediaKind, TimeWindow};
use super::response::CatalogResponse;

/// Immutable catalog access settings, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without trailing slash (e.g. `https://api.themoviedb.org/3`).
    pub base_url: String,
    /// API key sent as the `api_key` query parameter on every request.
    pub api_key: String,
    /// Response locale sent as the `language` query parameter on every request.
    pub language: String,
}

/// Client for the external media-catalog API.
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Creates a client with a fresh connection pool for the given config.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Returns the configured settings (read-only).
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// One GET against `{base_url}/{path}` with `api_key` + `language` + `extra` params.
    /// `operation` names the call in failure logs.
    async fn get_json(&self, path: &str, extra: &[(&str, String)], operation: &str) -> CatalogResponse {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);

        let mut params: Vec<(&str, String)> = vec![
            ("api_key", self.config.api_key.clone()),
            ("language", self.config.language.clone()),
        ];
        params.extend_from_slice(extra);

        match self.http.get(&url).query(&params).send().await {
            Ok(response) => {
                let status = response.status();
                if status == StatusCode::OK {
                    match response.json::<Value>().await {
                        Ok(body) => CatalogResponse::Data(body),
                        Err(e) => {
                            error!(error = %e, operation = %operation, "Catalog response body was not valid JSON");
                            CatalogResponse::Absent
                        }
                    }
                } else {
                    error!(status = %status, operation = %operation, "Catalog API returned an error status");
                    CatalogResponse::Absent
                }
            }
            Err(e) => {
                error!(error = %e, operation = %operation, "Catalog request failed");
                CatalogResponse::Absent
            }
        }
    }

    /// Trending movies/TV for the given window, sorted by the API's own trending rank.
    #[instrument(skip(self))]
    pub async fn trending(&self, media: MediaKind, window: TimeWindow, page: u32) -> CatalogResponse {
        let path = format!("trending/{}/{}", media.as_str(), window.as_str());
        self.get_json(&path, &[("page", page.to_string())], "trending").await
    }

    /// Genre id/name list for the given media kind.
    #[instrument(skip(self))]
    pub async fn genres(&self, media: MediaKind) -> CatalogResponse {
        let path = format!("genre/{}/list", media.as_str());
        self.get_json(&path, &[], "genres").await
    }

    /// Paginated movie search. The query string is forwarded as-is, unvalidated.
    #[instrument(skip(self))]
    pub async fn search_movie(&self, query: &str, page: u32) -> CatalogResponse {
        let extra = [
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("include_adult", "false".to_string()),
        ];
        self.get_json("search/movie", &extra, "search_movie").await
    }

    /// Paginated TV search. The query string is forwarded as-is, unvalidated.
    #[instrument(skip(self))]
    pub async fn search_tv(&self, query: &str, page: u32) -> CatalogResponse {
        let extra = [
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("include_adult", "false".to_string()),
        ];
        self.get_json("search/tv", &extra, "search_tv").await
    }

    /// Full record for one movie.
    #[instrument(skip(self))]
    pub async fn movie_details(&self, movie_id: i64) -> CatalogResponse {
        let path = format!("movie/{}", movie_id);
        self.get_json(&path, &[], "movie_details").await
    }

    /// Full record for one TV show.
    #[instrument(skip(self))]
    pub async fn tv_details(&self, tv_id: i64) -> CatalogResponse {
        let path = format!("tv/{}", tv_id);
        self.get_json(&path, &[], "tv_details").await
    }

    /// Discovery by popularity, optionally filtered to one genre.
    /// The genre filter is omitted entirely when `genre_id` is `None`, never sent empty.
    #[instrument(skip(self))]
    pub async fn discover(&self, media: MediaKind, genre_id: Option<i64>, page: u32) -> CatalogResponse {
        let path = format!("discover/{}", media.as_str());
        let mut extra = vec![
            ("sort_by", "popularity.desc".to_string()),
            ("page", page.to_string()),
            ("include_adult", "false".to_string()),
        ];
        if let Some(id) = genre_id {
            extra.push(("with_genres", id.to_string()));
        }
        self.get_json(&path, &extra, "discover").await
    }

    /// Startup connectivity probe against the `configuration` endpoint.
    /// Logs the outcome and returns whether the API answered 200; never fails the caller.
    #[instrument(skip(self))]
    pub async fn check_connection(&self) -> bool {
        let url = format!("{}/configuration", self.config.base_url.trim_end_matches('/'));
        let params = [("api_key", self.config.api_key.clone())];

        match self.http.get(&url).query(&params).send().await {
            Ok(response) => {
                let status = response.status();
                if status == StatusCode::OK {
                    info!("Catalog API connection OK");
                    true
                } else {
                    error!(status = %status, "Catalog API connectivity check failed");
                    false
                }
            }
            Err(e) => {
                error!(error = %e, "Catalog API connectivity check failed");
                false
            }
        }
    }
}
