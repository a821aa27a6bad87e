//! Query parameters and the paging/time options shared by list and search.

use chrono::{DateTime, SecondsFormat, TimeZone};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Query-string parameters for a request.
///
/// Keys are unique: inserting an existing key replaces its value.
/// Values are stored as their `Display` rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to the string form of `value`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) -> &mut Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl serde::Serialize for QueryParams {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

/// Format a timestamp the way the API expects `receivedAfter`:
/// RFC 3339, whole seconds, `Z` for a zero offset.
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    time.fixed_offset()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Paging and time filters for `Client::list_messages` and
/// `Client::search_messages`.
///
/// Setting an option twice keeps the last value.
///
/// # Examples
/// ```
/// use mailosaur_client::MessageListOptions;
///
/// let options = MessageListOptions::new().page(2).items_per_page(50);
/// let query = options.to_query("my-server");
/// assert_eq!(query.get("server"), Some("my-server"));
/// assert_eq!(query.get("page"), Some("2"));
/// assert_eq!(query.get("itemsPerPage"), Some("50"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageListOptions {
    page: Option<u32>,
    items_per_page: Option<u32>,
    received_after: Option<String>,
}

impl MessageListOptions {
    /// No paging and no time filter; the server applies its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the given page of results.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set how many results a page holds.
    pub fn items_per_page(mut self, items_per_page: u32) -> Self {
        self.items_per_page = Some(items_per_page);
        self
    }

    /// Only return messages received after `time`.
    ///
    /// The timestamp is formatted here with [`format_timestamp`], since
    /// query values are otherwise plain strings.
    pub fn received_after<Tz: TimeZone>(mut self, time: DateTime<Tz>) -> Self {
        self.received_after = Some(format_timestamp(&time));
        self
    }

    /// Write the set options into `query`.
    pub fn apply(&self, query: &mut QueryParams) {
        if let Some(page) = self.page {
            query.insert("page", page);
        }
        if let Some(items_per_page) = self.items_per_page {
            query.insert("itemsPerPage", items_per_page);
        }
        if let Some(received_after) = &self.received_after {
            query.insert("receivedAfter", received_after);
        }
    }

    /// Build the full query for a list or search on `server_id`.
    pub fn to_query(&self, server_id: &str) -> QueryParams {
        let mut query = QueryParams::new();
        query.insert("server", server_id);
        self.apply(&mut query);
        query
    }
}
