//! The settled search query.

use std::fmt;

/// A trimmed, non-empty search query.
///
/// The empty string is the "no query" state and has no `Query`; callers get
/// `None` from [`Query::parse`] and clear the results instead of searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trims `raw` and returns a query unless nothing is left.
    ///
    /// ```
    /// use repopin::Query;
    ///
    /// assert_eq!(Query::parse("  react ").unwrap().as_str(), "react");
    /// assert!(Query::parse(" \t ").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_inner_whitespace() {
        let query = Query::parse("  rust  web ").unwrap();
        assert_eq!(query.as_str(), "rust  web");
    }

    #[test]
    fn empty_is_no_query() {
        assert!(Query::parse("").is_none());
        assert!(Query::parse("\n").is_none());
    }
}
