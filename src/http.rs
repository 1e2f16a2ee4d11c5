// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Plumbing shared by services that talk to APIs over HTTP.

use reqwest::{Client, ClientBuilder, StatusCode, header};
use thiserror::Error;

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// An error that occurred while building or sending an HTTP request.
    #[error("Error while making HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    /// An error retrieving the body of a response.
    #[error("Error retrieving body of HTTP response: {0}")]
    Body(reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    #[error("Request returned HTTP {0}")]
    Http(StatusCode),

    /// A missing Content-Type header in a response.
    #[error("Missing Content-Type header")]
    MissingContentType,

    /// An invalid Content-Type header.
    #[error("Invalid Content-Type header value: {0}")]
    InvalidContentType(#[from] header::ToStrError),

    /// A Content-Type that is not understood by the service.
    #[error("Unexpected content type: {0}")]
    UnexpectedContentType(String),
}

/// An appropriate user agent to use when making HTTP requests.
///
/// Reddit rejects requests that do not carry a descriptive user agent, so
/// this is used whenever one has not been configured.
///
/// # Examples
///
/// ```
/// let user_agent = subwalk::http::default_user_agent();
/// assert!(user_agent.starts_with("subwalk v"));
/// ```
pub fn default_user_agent() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Creates an HTTP client that identifies itself with `user_agent`.
pub fn client(user_agent: &str) -> HTTPResult<Client> {
    let client = ClientBuilder::new().user_agent(user_agent).build()?;
    Ok(client)
}
