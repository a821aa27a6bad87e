//! # Mailosaur Client
//! Asynchronous wrapper around the Mailosaur email testing REST API: fetch, list, search, and delete the messages that arrive in a Mailosaur inbox (a "server") from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For test suites that send mail (sign-up confirmations, password resets) and need to assert on what was delivered: generate an address with [`Client::generate_email`], trigger the mail, then look it up with [`Client::search_messages`] or [`Client::list_messages`] and read it with [`Client::get_message`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Requests and responses are logged through the `log` facade at `debug`/`trace` level; install any logger to see them.
//!
//! ## Out of scope
//! No retries, pagination cursors, or attachment parsing. Message content (`html`, `text`, `attachments`, `metadata`) is returned as raw JSON.
//!
//! ## Errors
//! Requests that cannot be built or sent become [`Error::Transport`]; bodies that are not the expected JSON become [`Error::Decode`]. HTTP status codes are not interpreted: use [`Client::call`] for the raw response when the status matters. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use mailosaur_client::{Client, MessageListOptions, SearchMessagesLookup};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailosaur_client::Error> {
//!     let client = Client::new("my-api-key", "my-server-id")?;
//!     let address = client.generate_email();
//!     println!("Send a mail to: {}", address);
//!
//!     let lookup = SearchMessagesLookup::new().sent_to(&address);
//!     let found = client.search_messages(&lookup, &MessageListOptions::new()).await?;
//!     for summary in found {
//!         let message = client.get_message(&summary.id).await?;
//!         println!("Subject: {}", message.subject);
//!     }
//!
//!     client.delete_messages().await?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;
mod options;

pub use client::{Client, ClientBuilder, SERVICE_URL, SMTP_HOST};
pub use error::Error;
pub use models::{Address, Message, MessageSummary, SearchMessagesLookup};
pub use options::{MessageListOptions, QueryParams, format_timestamp};
pub use reqwest::{Method, Response, StatusCode};

/// Result type alias for Mailosaur operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
