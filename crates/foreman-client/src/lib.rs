//! foreman-client: HTTP client library for the Foreman API
//!
//! Wraps one authenticated session against a Foreman server and exposes its
//! paged listing endpoints as a total count plus a lazy, forward-only cursor
//! that fetches pages on demand.
//!
//! # Examples
//!
//! ```no_run
//! use foreman_api::responses::Host;
//! use foreman_client::{Session, SessionConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = Session::new(SessionConfig::default())?;
//!
//! // List hosts; the total is known before any page past the first is fetched
//! let (total, mut hosts) = session.get_all::<Host>("hosts", &[]).await?;
//! println!("{total} hosts");
//! while let Some(host) = hosts.next().await {
//!     let host = host?;
//!     println!("{}", host.name.as_deref().unwrap_or("-"));
//! }
//!
//! // Power a host back on
//! let response = session.power("web01.example.com", "start").await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod pages;

pub use error::{ClientError, Result};
pub use http::{Credentials, DEFAULT_URL, Session, SessionConfig};
pub use pages::Pages;
