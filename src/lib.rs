//! Asynchronous client for the Piwik (Matomo) Reporting HTTP API.
//!
//! The API is a single GET endpoint that selects its handler through a
//! `method=Module.Action` query argument; this crate exposes one method
//! per remote operation on [`Piwik`], builds the query string (session
//! arguments, percent-encoded values) and hands back the raw response
//! body in the configured [`ResponseFormat`]. Replies are not
//! interpreted: an application-level error still comes back as ordinary
//! body content, in the `{"result":"error","message":...}` shape (see
//! [`http_response::response_common::StatusReply`]).
//!
//! ```no_run
//! use piwik_client::{Piwik, ResponseFormat};
//!
//! # async fn run() -> Result<(), piwik_client::reqwest::Error> {
//! let mut piwik = Piwik::new("https://stats.example.org/index.php", "", ResponseFormat::Json);
//! piwik.set_token_auth_from_credentials("admin", "secret", true).await?;
//! let sites = piwik.sites_manager_get_all_sites().await?;
//! println!("{sites}");
//! # Ok(())
//! # }
//! ```
//!
//! Transport failures propagate as [`reqwest::Error`]; the crate adds no
//! retries, timeouts or error translation of its own.

pub use chrono;
pub use reqwest;

pub mod config;
mod http_client;
pub mod http_request;
pub mod http_response;
mod logger;
mod piwik;

pub use config::{PiwikConfig, ResponseFormat};
pub use http_request::users_manager::AccessLevel;
pub use piwik::Piwik;
