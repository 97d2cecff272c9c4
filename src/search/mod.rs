//! GitHub repository search.
//!
//! The plugin cannot open sockets; Zellij runs HTTP requests on its behalf.
//! This module is split along that boundary:
//!
//! - [`request`]: envelopes passed to and received from the host
//! - [`client`]: ticketing, loader bookkeeping and failure policy
//! - [`response`]: decoding of the search payload
//!
//! ```text
//! Query ─► SearchClient::request ─► SearchRequest ─► host web_request
//!                                                          │
//! SearchOutcome ◄─ SearchClient::complete ◄─ SearchResponse ◄┘
//! ```

pub mod client;
pub mod request;
pub mod response;

pub use client::{SearchClient, SearchOutcome, DEFAULT_API_URL, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use request::{SearchRequest, SearchResponse, SearchTicket};
