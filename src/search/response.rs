//! GitHub repository-search payload decoding.

use crate::domain::{Candidate, SearchFailure};
use serde::Deserialize;

/// Longest error message carried into a [`SearchFailure::Status`].
const MAX_MESSAGE_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct RepositorySearch {
    items: Vec<RepositoryItem>,
}

#[derive(Debug, Deserialize)]
struct RepositoryItem {
    name: String,
    owner: RepositoryOwner,
    stargazers_count: u64,
}

#[derive(Debug, Deserialize)]
struct RepositoryOwner {
    login: String,
}

/// Error body GitHub sends with 4xx/5xx answers.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// Turns a host response into candidates.
///
/// # Errors
///
/// - [`SearchFailure::Status`] for any non-2xx status
/// - [`SearchFailure::Malformed`] when a 2xx body is not a search payload
pub fn decode(status: u16, body: &[u8]) -> Result<Vec<Candidate>, SearchFailure> {
    if !(200..300).contains(&status) {
        return Err(SearchFailure::Status {
            status,
            message: error_message(body),
        });
    }

    let payload: RepositorySearch = serde_json::from_slice(body)?;
    Ok(payload
        .items
        .into_iter()
        .map(|item| Candidate {
            name: item.name,
            owner: item.owner.login,
            stars: item.stargazers_count,
        })
        .collect())
}

fn error_message(body: &[u8]) -> String {
    let message = serde_json::from_slice::<ApiMessage>(body)
        .map_or_else(|_| String::from_utf8_lossy(body).trim().to_string(), |api| api.message);
    message.chars().take(MAX_MESSAGE_CHARS).collect()
}
