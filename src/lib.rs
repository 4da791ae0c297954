#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
//! # bbsclient
//!
//! bbsclient is a small client for the HTTP API a bbsnode exposes on localhost.
//!
//! Every remote operation has a constructor in [`catalog`] returning a
//! [`ClientFn`]. Calling it sends one form-encoded `POST` to
//! `http://127.0.0.1:<port>/api/<operation>` and returns the raw response
//! body. Decoding the body is left to the caller.
//!
//! Each call races the request against a caller-supplied [`Context`]:
//! - If the response arrives first, its body is returned.
//! - If the context is cancelled or its deadline passes first,
//!   [`Error::Timeout`] is returned straight away.
//!
//! Nothing is retried.
//!
//! ## Example: Listing boards with a deadline.
//!
//! ```no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use std::time::Duration;
//! use bbsclient::{catalog, Context, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::background().with_timeout(Duration::from_secs(5));
//!
//!     match catalog::get_boards().call(&ctx, 7777).await {
//!         Ok(body) => println!("{}", String::from_utf8_lossy(&body)),
//!         Err(Error::Timeout) => println!("node did not answer in time"),
//!         Err(e) => return Err(e.into()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Error::Timeout`]: crate::error::Error::Timeout

pub mod catalog;

/// Client module contains [`Client`] for executing operations.
pub mod client;

pub mod context;

/// Contains [`Error`]s that can be thrown by the libary.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub mod transport;

pub(crate) mod models;

pub(crate) mod result;

pub use catalog::ClientFn;
pub use client::{CancelPolicy, Client, ClientConfig};
pub use context::Context;
pub use error::Error;
pub use models::*;
pub use result::Result;
