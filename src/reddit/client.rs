// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Clients for reading data from the Reddit API.

use crate::conf::Credentials;
use crate::http;
use crate::reddit::auth::Token;
use crate::reddit::service::{RedditService, Resource, Service};
use crate::reddit::thing::{self, Comment, Page, Thread};
use log::{debug, info, warn};
use std::collections::HashSet;
use thiserror::Error;

/// Number of items requested per page when no other limit is given.
pub const DEFAULT_LIMIT: u32 = 10;

/// An authenticated session with the Reddit API.
///
/// A session holds the bearer token obtained when logging in and passes it
/// along with every request made through it. Tokens are not refreshed, so
/// a session is only good for as long as its token lasts (usually a day).
#[derive(Debug)]
pub struct Session<S: Service = RedditService> {
    service: S,
    token: Token,
    limit: u32,
}

impl Session {
    /// Logs in to Reddit with the given `credentials`.
    ///
    /// Returns an [`enum@Error`] if the token endpoint cannot be reached or
    /// if it does not grant an access token.
    pub async fn login(credentials: &Credentials) -> Result<Self, Error> {
        let service = RedditService::new(credentials.user_agent())?;
        Self::login_with_service(credentials, service).await
    }
}

impl<S: Service> Session<S> {
    /// Logs in to Reddit with the given `credentials`.
    ///
    /// `service` is the actual service implementation that will be used
    /// to talk to Reddit.
    pub(crate) async fn login_with_service(
        credentials: &Credentials,
        service: S,
    ) -> Result<Self, Error> {
        let data = service.access_token(credentials).await?;
        let token = Token::parse(&data);
        if token.is_empty() {
            return Err(Error::MissingToken);
        }
        info!(
            "Logged in as {} (scope: {}, expires in {}s)",
            credentials.username(),
            token.scope(),
            token.expires_in()
        );
        Ok(Self {
            service,
            token,
            limit: DEFAULT_LIMIT,
        })
    }

    /// Sets the number of items requested per page.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// The token used to authenticate requests.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Every thread in the subreddit's hot listing, in listing order.
    pub async fn threads(&self, subreddit: &str) -> Result<Vec<Thread>, Error> {
        let resource = Resource::Hot { subreddit };
        self.paginate(resource, Thread::parse_listing).await
    }

    /// Every top-level comment on a thread, in listing order.
    pub async fn comments(&self, subreddit: &str, thread_id: &str) -> Result<Vec<Comment>, Error> {
        let resource = Resource::Comments {
            subreddit,
            thread_id,
        };
        self.paginate(resource, Comment::parse_listing).await
    }

    /// Follows a listing's `after` cursor until it runs out, collecting
    /// the items from every page.
    ///
    /// Each cursor is requested at most once. If Reddit hands back a
    /// cursor that has already been followed, paging stops.
    async fn paginate<T>(
        &self,
        resource: Resource<'_>,
        parse: fn(&str) -> Result<Page<T>, thing::Error>,
    ) -> Result<Vec<T>, Error> {
        let mut items = vec![];
        let mut seen = HashSet::new();
        let mut after = String::new();

        loop {
            let uri = resource.uri(self.limit, &after);
            let data = self.service.get_resource(&uri, &self.token).await?;
            let (page, next) = parse(&data)?.into_parts();
            debug!("Got {} items from {uri}", page.len());
            items.extend(page);

            match next {
                None => break,
                Some(next) if !seen.insert(next.clone()) => {
                    warn!("Reddit returned cursor {next} more than once; stopping");
                    break;
                }
                Some(next) => after = next,
            }
        }

        Ok(items)
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] http::HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),

    /// Reddit did not grant an access token.
    #[error("Failed to obtain access token")]
    MissingToken,
}
