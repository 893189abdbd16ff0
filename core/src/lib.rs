//! EVNotify Core Library
//! Client for the EVNotify backend: account lifecycle, settings, and sync.
//!
//! Every operation is one HTTP POST against a fixed endpoint, funneled
//! through [`transport::Transport`], followed by field extraction from the
//! JSON response body.
//!
//! # Status policy
//!
//! A completed HTTP exchange never fails an operation, whatever its status
//! code. Each method extracts its result from whatever body the backend
//! returned, so a rejection reads as a `None`/`false` result rather than an
//! error. [`ClientError`] is reserved for transport faults (connection
//! failure, timeout) and for calling an authenticated operation without
//! stored credentials. Callers that need the raw status code can issue the
//! request through [`AccountClient::send_raw`].

pub mod client;
pub mod error;
pub mod session;
pub mod transport;

pub use client::{AccountClient, ClientOptions};
pub use error::ClientError;
pub use session::Session;
pub use transport::{ApiResponse, Transport, DEFAULT_BASE_URL};
