//! Public data models sent to and returned by the Mailosaur API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Treat an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A sender or recipient of a message.
///
/// The API sends addresses as a map of fields; the well-known ones are
/// typed and any others are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Display name, if the message carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address (empty for SMS messages).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number (SMS messages only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// An email or SMS received by Mailosaur, with its full content.
///
/// Content payloads (`attachments`, `html`, `text`, `metadata`,
/// `hateos_links`) are kept as raw JSON and left for the caller to
/// interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier.
    pub id: String,
    /// Server (inbox) the message was received by.
    #[serde(default, deserialize_with = "null_as_default")]
    pub server: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: Vec<Address>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: Vec<Address>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cc: Vec<Address>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bcc: Vec<Address>,
    /// When Mailosaur received the message.
    #[serde(default)]
    pub received: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    /// Short plain-text preview of the body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default)]
    pub attachments: serde_json::Value,
    #[serde(default)]
    pub html: serde_json::Value,
    #[serde(default)]
    pub text: serde_json::Value,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub hateos_links: serde_json::Value,
}

/// Reduced message returned by list and search calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageSummary {
    /// Unique message identifier, usable with `Client::get_message`.
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub server: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: Vec<Address>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: Vec<Address>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cc: Vec<Address>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bcc: Vec<Address>,
    #[serde(default)]
    pub received: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Number of attachments on the full message.
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: u32,
}

/// Search criteria for `Client::search_messages`.
///
/// Empty fields are left out of the request body.
///
/// # Examples
/// ```
/// use mailosaur_client::SearchMessagesLookup;
///
/// let lookup = SearchMessagesLookup::new().subject("Password reset");
/// assert_eq!(lookup.subject, "Password reset");
/// assert!(lookup.body.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMessagesLookup {
    /// Match messages whose body contains this text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    /// Match messages whose subject contains this text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    /// Match messages sent to this address or phone number.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sent_to: String,
}

impl SearchMessagesLookup {
    /// Create an empty lookup, which matches every message.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn sent_to(mut self, sent_to: impl Into<String>) -> Self {
        self.sent_to = sent_to.into();
        self
    }
}

/// Envelope wrapping list and search results.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageListResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<MessageSummary>,
}
