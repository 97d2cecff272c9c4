//! Repository search client.
//!
//! The client never performs I/O itself. [`SearchClient::request`] builds the
//! request the plugin shim hands to Zellij, and [`SearchClient::complete`]
//! interprets what the host sent back. Between the two the loading indicator
//! counts the search as pending.
//!
//! # Failure policy
//!
//! Every [`SearchFailure`](crate::domain::SearchFailure) is logged and turned
//! into an empty result. Callers cannot tell a failed search from one that
//! matched nothing, apart from the log line.
//!
//! # Ordering
//!
//! Each request carries a [`SearchTicket`]. Only the latest ticket may render;
//! an older search that resolves late is reported as [`SearchOutcome::Stale`].

use super::request::{SearchRequest, SearchResponse, SearchTicket};
use super::response;
use crate::domain::{Candidate, Query};
use crate::panels::LoadingIndicator;
use crate::Config;
use std::collections::BTreeMap;

/// Default API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default and maximum page sizes accepted by the search endpoint.
pub const DEFAULT_PER_PAGE: u32 = 5;
pub const MAX_PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!("repopin/", env!("CARGO_PKG_VERSION"));

/// Result of completing a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Latest search; render these (possibly empty) candidates.
    Fresh(Vec<Candidate>),
    /// Superseded by a newer search or by clearing the query; drop it.
    Stale,
}

/// Builds search requests and interprets their responses.
#[derive(Debug, Clone)]
pub struct SearchClient {
    api_url: String,
    per_page: u32,
    token: Option<String>,
    latest: u64,
    /// Tickets up to this one were released from the loader by `invalidate`.
    released_through: u64,
}

impl SearchClient {
    #[must_use]
    pub fn new(api_url: impl Into<String>, per_page: u32, token: Option<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            token,
            latest: 0,
            released_through: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), config.per_page, config.api_token.clone())
    }

    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Issues a ticket for `query`, marks `loader` busy and returns the request.
    pub fn request(&mut self, query: &Query, loader: &mut LoadingIndicator) -> SearchRequest {
        self.latest += 1;
        let ticket = SearchTicket(self.latest);
        loader.begin();

        let url = format!(
            "{}/search/repositories?q={}&per_page={}",
            self.api_url,
            urlencoding::encode(query.as_str()),
            self.per_page
        );

        tracing::debug!(ticket = ticket.0, query = %query, url = %url, "search dispatched");

        SearchRequest {
            ticket,
            query: query.clone(),
            url,
            headers: self.headers(),
        }
    }

    /// Makes every outstanding ticket stale and releases them from `loader`.
    ///
    /// Their responses may still arrive later; they are dropped without
    /// settling the loader a second time.
    pub fn invalidate(&mut self, loader: &mut LoadingIndicator) {
        self.latest += 1;
        self.released_through = self.latest;
        loader.reset();
        tracing::debug!(latest = self.latest, "outstanding searches invalidated");
    }

    #[must_use]
    pub const fn is_latest(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Settles a search in `loader` and interprets the host's response.
    ///
    /// Always returns; failures become `Fresh(vec![])`.
    pub fn complete(&self, response: &SearchResponse, loader: &mut LoadingIndicator) -> SearchOutcome {
        if response.ticket.0 <= self.released_through {
            tracing::debug!(ticket = response.ticket.0, "response to invalidated search discarded");
            return SearchOutcome::Stale;
        }

        let _in_flight = loader.settle_on_drop();

        if !self.is_latest(response.ticket) {
            tracing::debug!(
                ticket = response.ticket.0,
                latest = self.latest,
                "stale search response discarded"
            );
            return SearchOutcome::Stale;
        }

        match response::decode(response.status, &response.body) {
            Ok(mut candidates) => {
                candidates.truncate(self.per_page as usize);
                tracing::debug!(
                    ticket = response.ticket.0,
                    count = candidates.len(),
                    "search completed"
                );
                SearchOutcome::Fresh(candidates)
            }
            Err(e) => {
                tracing::warn!(ticket = response.ticket.0, error = %e, "search failed");
                SearchOutcome::Fresh(Vec::new())
            }
        }
    }

    fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::from([
            ("Accept".to_string(), "application/vnd.github+json".to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ]);
        if let Some(token) = &self.token {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }
        headers
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_PER_PAGE, None)
    }
}
