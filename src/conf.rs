// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Environment and configuration utilities.
//!
//! Reddit "script" applications authenticate with the credentials of the
//! account that registered the app. Those credentials are read from the
//! process environment, which is conventionally populated from a `.env`
//! file in the current directory:
//!
//! ```text
//! CLIENT_ID=...
//! CLIENT_SECRET=...
//! USERNAME=...
//! PASSWORD=...
//! USER_AGENT=linux:subwalk:v0.1.0 (by /u/...)
//! ```

use crate::http;
use std::path::{Path, PathBuf};
use std::{env, fmt};
use thiserror::Error;

/// Environment file read when no other file is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Loads variables from an environment file into the process environment.
///
/// If `path` is `None`, [`DEFAULT_ENV_FILE`] is read from the current
/// directory. Parent directories are not searched. Variables that are
/// already set in the environment are not overridden.
///
/// Returns the path of the file that was loaded.
pub fn load_env(path: Option<&Path>) -> Result<PathBuf, Error> {
    let path = env_file(path);
    dotenvy::from_path(path)?;
    Ok(path.to_path_buf())
}

fn env_file(path: Option<&Path>) -> &Path {
    path.unwrap_or(Path::new(DEFAULT_ENV_FILE))
}

/// Credentials for a Reddit script application.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
    user_agent: String,
}

impl Credentials {
    /// Creates a new set of credentials.
    ///
    /// If `user_agent` is empty, the [default](http::default_user_agent)
    /// user agent is used.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        let user_agent = user_agent.into();
        let user_agent = if user_agent.is_empty() {
            http::default_user_agent()
        } else {
            user_agent
        };
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
            user_agent,
        }
    }

    /// Reads credentials from `$CLIENT_ID`, `$CLIENT_SECRET`, `$USERNAME`,
    /// `$PASSWORD`, and `$USER_AGENT`.
    ///
    /// All but `$USER_AGENT` are required. Returns an error naming the first
    /// variable that is unset, empty, or not valid Unicode.
    pub fn from_env() -> Result<Self, Error> {
        let client_id = required_var("CLIENT_ID")?;
        let client_secret = required_var("CLIENT_SECRET")?;
        let username = required_var("USERNAME")?;
        let password = required_var("PASSWORD")?;
        let user_agent = optional_var("USER_AGENT")?.unwrap_or_default();
        Ok(Self::new(
            client_id,
            client_secret,
            username,
            password,
            user_agent,
        ))
    }

    /// The OAuth2 client ID of the Reddit app.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The OAuth2 client secret of the Reddit app.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// The Reddit account the app runs as.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password for the Reddit account.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn optional_var(name: &'static str) -> Result<Option<String>, Error> {
    match env::var(name) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(Error::NotUnicode(name)),
    }
}

fn required_var(name: &'static str) -> Result<String, Error> {
    optional_var(name)?.ok_or(Error::Missing(name))
}

/// A configuration error.
#[derive(Debug, Error)]
pub enum Error {
    /// The environment file could not be found or parsed.
    #[error("Could not load environment file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    /// A required variable is unset or empty.
    #[error("${0} is not set")]
    Missing(&'static str),

    /// A variable contains data that is not valid Unicode.
    #[error("${0} is not valid Unicode")]
    NotUnicode(&'static str),
}
