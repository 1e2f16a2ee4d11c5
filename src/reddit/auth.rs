// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! OAuth2 bearer tokens for the Reddit API.

use log::warn;
use serde::Deserialize;
use serde_json::Value;

/// An OAuth2 access token granted by Reddit.
///
/// Reddit's token endpoint responds with a JSON object like
///
/// ```json
/// {
///     "access_token": "eyJhbGciOi...",
///     "token_type": "bearer",
///     "expires_in": 86400,
///     "scope": "*"
/// }
/// ```
///
/// Every field is optional when parsing. In particular, a failed login
/// produces a token whose [`access_token`](Token::access_token) is empty;
/// callers must check [`is_empty`](Token::is_empty) before using it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Token {
    access_token: String,
    token_type: String,
    expires_in: u64,
    scope: String,
}

impl Token {
    /// Creates a bearer token with the given access token string.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: String::from("bearer"),
            ..Self::default()
        }
    }

    /// Parses the body of a response from Reddit's token endpoint.
    ///
    /// Parsing never fails: a body that is not a JSON object, or that does
    /// not contain an access token, results in an empty token.
    ///
    /// # Examples
    ///
    /// ```
    /// use subwalk::reddit::auth::Token;
    /// let token = Token::parse(r#"{"access_token": "abc123", "token_type": "bearer"}"#);
    /// assert_eq!(token.access_token(), "abc123");
    ///
    /// let token = Token::parse(r#"{"message": "Unauthorized", "error": 401}"#);
    /// assert!(token.is_empty());
    /// ```
    pub fn parse(data: &str) -> Self {
        // serde would otherwise fill the fields from a JSON array in order.
        let parsed = match serde_json::from_str(data) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value),
            Ok(_) => {
                warn!("Access token response is not a JSON object");
                return Self::default();
            }
            Err(err) => Err(err),
        };
        parsed.unwrap_or_else(|err| {
            warn!("Could not parse access token response: {err}");
            Self::default()
        })
    }

    /// The bearer string.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The type of token, usually "bearer".
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Number of seconds until the token expires.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// OAuth2 scopes granted to the token.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// True if no access token was granted.
    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty()
    }

    /// Value for an `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("bearer {}", self.access_token)
    }
}
