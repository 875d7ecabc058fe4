//! Request path and query string building

/// Normalizes a player, clan or war tag
///
/// The upstream convention displays tags with a leading `#` but paths carry
/// it percent-encoded, so the caller's `#` is dropped here and re-added by
/// [`tag_segment`].
pub fn normalize_tag(tag: &str) -> String {
    let trimmed = tag.trim();
    trimmed
        .strip_prefix('#')
        .unwrap_or(trimmed)
        .to_uppercase()
}

/// Returns the path segment for a tag: `%23` followed by the encoded tag
pub fn tag_segment(tag: &str) -> String {
    format!("%23{}", urlencoding::encode(&normalize_tag(tag)))
}

/// Pagination parameters shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub limit: Option<u32>,
    pub after: Option<String>,
    pub before: Option<String>,
}

impl PageParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of items to return
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continues after the given cursor
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Continues before the given cursor
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    pub(crate) fn apply(&self, query: Query) -> Query {
        query
            .push("limit", self.limit)
            .push_raw("after", self.after.as_deref())
            .push_raw("before", self.before.as_deref())
    }
}

/// Query string builder that skips absent values
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value` with the value percent-encoded, if present
    pub fn push<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            self.pairs
                .push(format!("{}={}", key, urlencoding::encode(&value)));
        }
        self
    }

    /// Appends `key=value` with the value embedded verbatim, if present
    ///
    /// Used for cursors, which are opaque and must reach the server unchanged.
    pub fn push_raw(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.pairs.push(format!("{}={}", key, value));
        }
        self
    }

    /// Renders the query string, empty when no value was present
    pub fn build(&self) -> String {
        if self.pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", self.pairs.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tag_strips_hash() {
        assert_eq!(normalize_tag("#2PP"), "2PP");
        assert_eq!(normalize_tag("2PP"), "2PP");
    }

    #[test]
    fn normalize_tag_trims_and_uppercases() {
        assert_eq!(normalize_tag("  #2pp  "), "2PP");
    }

    #[test]
    fn normalize_tag_only_strips_one_hash() {
        assert_eq!(normalize_tag("##2PP"), "#2PP");
    }

    #[test]
    fn tag_segment_matches_with_and_without_hash() {
        assert_eq!(tag_segment("#2PP"), "%232PP");
        assert_eq!(tag_segment("#2PP"), tag_segment("2PP"));
    }

    #[test]
    fn tag_segment_encodes_remaining_hash() {
        assert_eq!(tag_segment("##2PP"), "%23%232PP");
    }

    #[test]
    fn empty_query_renders_nothing() {
        let query = Query::new().push::<u32>("limit", None).push_raw("after", None);
        assert_eq!(query.build(), "");
    }

    #[test]
    fn first_pair_gets_question_mark() {
        let query = Query::new()
            .push("limit", Some(10))
            .push::<u32>("minMembers", None)
            .push("name", Some("clash clan"));
        assert_eq!(query.build(), "?limit=10&name=clash%20clan");
    }

    #[test]
    fn cursors_are_embedded_verbatim() {
        let params = PageParams::new().limit(1).after("eyJwb3MiOjF9=");
        assert_eq!(params.apply(Query::new()).build(), "?limit=1&after=eyJwb3MiOjF9=");
    }

    #[test]
    fn page_params_default_is_empty() {
        assert_eq!(PageParams::default().apply(Query::new()).build(), "");
    }

    #[test]
    fn page_params_before_only() {
        let params = PageParams::new().before("abc");
        assert_eq!(params.apply(Query::new()).build(), "?before=abc");
    }
}
