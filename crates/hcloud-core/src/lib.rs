//! # hcloud-core
//!
//! Core types and request plumbing for the Hetzner Cloud API.
//!
//! This crate provides the pieces every endpoint call funnels through: URL
//! construction, the error taxonomy, the API error envelope, and the request
//! dispatcher that attaches credentials and classifies responses.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and the API error envelope
//! - [`query`] - Ordered URL and query-parameter builder
//! - [`client`] - Request dispatcher shared by every endpoint
//! - [`transport`] - HTTP transport seam and the `reqwest` implementation
//! - [`config`] - Client configuration and validation
//! - [`types`] - Actions, pagination and shared wire enums
//! - [`ids`] - Strongly-typed resource identifiers
//! - [`timestamp`] - Wire format for date/time fields

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod macros;

pub mod client;
pub mod config;
pub mod error;
pub mod ids;
pub mod query;
pub mod timestamp;
pub mod transport;
pub mod types;

#[doc(hidden)]
pub use serde as __serde;

// Re-export commonly used types
pub use client::{ApiClient, ApiClientBuilder};
pub use error::{ApiError, ErrorCode, Error, Result};
pub use query::{QueryParams, UrlBuilder};
