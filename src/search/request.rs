//! Request and response envelopes exchanged with the Zellij host.
//!
//! The host performs the HTTP call (`web_request`) and reports back with
//! `Event::WebRequestResult`, echoing the context map it was given. The
//! [`SearchTicket`] rides in that map so a response can be matched with the
//! search that produced it.

use crate::domain::Query;
use std::collections::BTreeMap;

const TICKET_KEY: &str = "repopin_ticket";
const QUERY_KEY: &str = "repopin_query";

/// Sequence number of a dispatched search. Later searches get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchTicket(pub u64);

impl SearchTicket {
    /// Reads the ticket back from a web request context map.
    ///
    /// Returns `None` for responses that did not originate from a search.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        context.get(TICKET_KEY)?.parse().ok().map(Self)
    }
}

/// A search ready to be handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: SearchTicket,
    pub query: Query,
    /// Fully encoded request URL.
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

impl SearchRequest {
    /// Context map the host echoes back with the response.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (TICKET_KEY.to_string(), self.ticket.0.to_string()),
            (QUERY_KEY.to_string(), self.query.as_str().to_string()),
        ])
    }
}

/// What the host reported for a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub ticket: SearchTicket,
    /// HTTP status; transport failures arrive as a non-2xx status.
    pub status: u16,
    pub body: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_survives_context_round_trip() {
        let request = SearchRequest {
            ticket: SearchTicket(7),
            query: Query::parse("serde").unwrap(),
            url: String::new(),
            headers: BTreeMap::new(),
        };

        let context = request.context();
        assert_eq!(context.get(QUERY_KEY).map(String::as_str), Some("serde"));
        assert_eq!(SearchTicket::from_context(&context), Some(SearchTicket(7)));
    }

    #[test]
    fn foreign_context_has_no_ticket() {
        let mut context = BTreeMap::new();
        assert_eq!(SearchTicket::from_context(&context), None);

        context.insert(TICKET_KEY.to_string(), "not-a-number".to_string());
        assert_eq!(SearchTicket::from_context(&context), None);
    }
}
