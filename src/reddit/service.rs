// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit. Each call is exactly one HTTP round trip and
//! returns the raw response body; making sense of the body is left to
//! [`thing`](crate::reddit::thing) and [`auth`](crate::reddit::auth).

use crate::conf::Credentials;
use crate::http::{self, HTTPError, HTTPResult};
use crate::reddit::auth::Token;
use log::debug;
use reqwest::{Client, Response, header};

/// Reddit's OAuth2 token endpoint.
pub const ACCESS_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Base URL for requests authenticated with a bearer token.
pub const OAUTH_BASE_URL: &str = "https://oauth.reddit.com";

/// A listing that can be paged through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resource<'a> {
    /// The "hot" threads in a subreddit.
    Hot {
        /// Name of the subreddit, without the leading `r/`.
        subreddit: &'a str,
    },

    /// The comments on a thread.
    Comments {
        /// Name of the subreddit the thread was posted in.
        subreddit: &'a str,

        /// ID of the thread, without the `t3_` prefix.
        thread_id: &'a str,
    },
}

impl Resource<'_> {
    /// URI of one page of the listing.
    ///
    /// `limit` is the maximum number of items on the page, and `after` is
    /// the cursor returned with the previous page, or an empty string for
    /// the first page.
    ///
    /// # Examples
    ///
    /// ```
    /// use subwalk::reddit::service::Resource;
    /// let hot = Resource::Hot { subreddit: "Home" };
    /// assert_eq!(
    ///     hot.uri(10, "t3_1g4c3d4"),
    ///     "https://oauth.reddit.com/r/Home/hot?raw_json=1&limit=10&after=t3_1g4c3d4",
    /// );
    /// ```
    pub fn uri(&self, limit: u32, after: &str) -> String {
        let path = match self {
            Resource::Hot { subreddit } => format!("r/{subreddit}/hot"),
            Resource::Comments {
                subreddit,
                thread_id,
            } => format!("r/{subreddit}/comments/{thread_id}"),
        };
        format!("{OAUTH_BASE_URL}/{path}?raw_json=1&limit={limit}&after={after}")
    }
}

/// A service for retrieving data from Reddit.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Requests an access token using the OAuth2 password grant and
    /// returns the raw response body.
    fn access_token(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Performs an authenticated GET request to `uri` and returns the raw
    /// JSON response body.
    fn get_resource(
        &self,
        uri: &str,
        token: &Token,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Reddit API directly to retrieve information.
#[derive(Debug)]
pub struct RedditService {
    client: Client,
}

impl RedditService {
    /// Creates a new Reddit service that identifies itself to Reddit
    /// with `user_agent`.
    pub fn new(user_agent: &str) -> HTTPResult<Self> {
        let client = http::client(user_agent)?;
        Ok(Self { client })
    }

    fn check_status(resp: Response) -> HTTPResult<Response> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(HTTPError::Http(resp.status()))
        }
    }
}

impl Service for RedditService {
    async fn access_token(&self, credentials: &Credentials) -> HTTPResult<String> {
        debug!("POST {ACCESS_TOKEN_URL} as {}", credentials.username());
        let form = [
            ("grant_type", "password"),
            ("username", credentials.username()),
            ("password", credentials.password()),
        ];
        let resp = self
            .client
            .post(ACCESS_TOKEN_URL)
            .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
            .form(&form)
            .send()
            .await?;
        let resp = Self::check_status(resp)?;
        resp.text().await.map_err(HTTPError::Body)
    }

    async fn get_resource(&self, uri: &str, token: &Token) -> HTTPResult<String> {
        debug!("GET {uri}");
        let resp = self
            .client
            .get(uri)
            .header(header::AUTHORIZATION, token.authorization())
            .send()
            .await?;
        let resp = Self::check_status(resp)?;

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .ok_or(HTTPError::MissingContentType)?
            .to_str()?;
        if !content_type.starts_with("application/json") {
            Err(HTTPError::UnexpectedContentType(content_type.to_string()))
        } else {
            resp.text().await.map_err(HTTPError::Body)
        }
    }
}
