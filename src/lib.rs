//! `badsec-http` is an async HTTP client for the BADSEC NOC list API.
//!
//! The crate wraps the two-step retrieval flow with ergonomic methods:
//! - [`BadsecClient::auth_token`]
//! - [`BadsecClient::user_ids`]
//!
//! Both ride on [`BadsecClient::send_with_retries`], which re-attempts
//! transient failures up to a fixed budget before surfacing the last error.

mod checksum;
mod client;
mod error;
mod options;
mod params;
mod types;

pub use checksum::request_checksum;
pub use client::{BadsecClient, DEFAULT_HOST, DEFAULT_PORT};
pub use error::BadsecError;
pub use options::ClientOptions;
pub use params::RequestParams;
pub use types::Response;

pub type Result<T> = std::result::Result<T, BadsecError>;
