// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, comments, etc. Every
//! thing arrives wrapped in an envelope naming its `kind` (`t1` for a
//! comment, `t3` for a post) and carrying its fields under `data`.
//! Pages of things arrive as a `Listing`, whose `data` holds the
//! `children` and the `after` cursor pointing at the next page.
//!
//! This module decodes those loosely typed envelopes into [`Thread`]s and
//! [`Comment`]s. Fields are optional at the JSON level; a thing of the
//! expected kind that lacks a required field is an [`Error`], while things
//! of any other kind (such as `more` placeholders in comment trees) are
//! skipped.

use chrono::{DateTime, Utc};
use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// A thing that can appear as a child of a listing.
trait Kind: Sized {
    /// Reddit's kind tag for this thing, like `t1` or `t3`.
    const KIND: &'static str;

    /// Raw fields as they appear in the thing's `data` object.
    type Data: DeserializeOwned;

    fn from_data(data: Self::Data) -> Result<Self, Error>;
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: Value,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Value>,

    #[serde(default)]
    after: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    kind: String,

    #[serde(default)]
    data: Value,
}

/// Decodes `value` only if it is a JSON object.
///
/// serde will happily fill a struct from an array, one field per element,
/// so anything that is supposed to be an object is checked first.
fn from_object<D: DeserializeOwned>(value: Value, what: &'static str) -> Result<D, Error> {
    if value.is_object() {
        Ok(serde_json::from_value(value)?)
    } else {
        Err(Error::UnexpectedShape(what))
    }
}

fn page_from_listing<T: Kind>(listing: Value) -> Result<Page<T>, Error> {
    let listing: Listing = from_object(listing, "listing")?;
    let ListingData { children, after } = from_object(listing.data, "listing data")?;
    let mut items = vec![];
    for child in children {
        let child: Envelope = from_object(child, "thing")?;
        if child.kind != T::KIND {
            debug!("Skipping {} in listing of {}", child.kind, T::KIND);
            continue;
        }
        let data = from_object(child.data, T::KIND)?;
        items.push(T::from_data(data)?);
    }
    Ok(Page { items, after })
}

/// One page of a listing.
#[derive(Debug, PartialEq)]
pub struct Page<T> {
    items: Vec<T>,
    after: Option<String>,
}

impl<T> Page<T> {
    /// An empty page with no following page.
    pub fn empty() -> Self {
        Self {
            items: vec![],
            after: None,
        }
    }

    /// Items on this page, in the order Reddit returned them.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Cursor for the next page, if there is one.
    ///
    /// An empty cursor is treated the same as a missing one.
    pub fn after(&self) -> Option<&str> {
        self.after.as_deref().filter(|after| !after.is_empty())
    }

    /// Splits the page into its items and its cursor.
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        let after = self.after.filter(|after| !after.is_empty());
        (self.items, after)
    }
}

/// A top-level post in a subreddit.
#[derive(Clone, Debug, PartialEq)]
pub struct Thread {
    id: String,
    title: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct ThreadData {
    id: Option<String>,
    title: Option<String>,
    url: Option<String>,
}

impl Thread {
    /// Creates a new thread.
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
        }
    }

    /// Parses one page of a subreddit listing, such as the response to
    /// `/r/<subreddit>/hot`.
    pub fn parse_listing(data: &str) -> Result<Page<Self>, Error> {
        page_from_listing(serde_json::from_str(data)?)
    }

    /// The thread's ID, without the `t3_` prefix.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The thread's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The URL the thread links to, or the thread's own permalink for
    /// self posts.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Kind for Thread {
    const KIND: &'static str = "t3";
    type Data = ThreadData;

    fn from_data(data: ThreadData) -> Result<Self, Error> {
        let kind = "thread";
        Ok(Self {
            id: data.id.ok_or(Error::MissingField { kind, field: "id" })?,
            title: data.title.ok_or(Error::MissingField { kind, field: "title" })?,
            url: data.url.ok_or(Error::MissingField { kind, field: "url" })?,
        })
    }
}

/// A comment on a thread.
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    id: String,
    body: String,
    author: String,
    created_utc: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct CommentData {
    id: Option<String>,
    body: Option<String>,
    author: Option<String>,
    created_utc: Option<f64>,
}

impl Comment {
    /// Creates a new comment.
    pub fn new(
        id: impl Into<String>,
        body: impl Into<String>,
        author: impl Into<String>,
        created_utc: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            author: author.into(),
            created_utc,
        }
    }

    /// Parses one page of a thread's comments, such as the response to
    /// `/r/<subreddit>/comments/<thread>`.
    ///
    /// Reddit responds with a two-element array: the first element is a
    /// listing holding the thread itself, and the second is the listing of
    /// comments. A response with fewer than two elements is treated as a
    /// final page with no comments.
    pub fn parse_listing(data: &str) -> Result<Page<Self>, Error> {
        let parts: Vec<Value> = serde_json::from_str(data)?;
        match parts.into_iter().nth(1) {
            Some(comments) => page_from_listing(comments),
            None => {
                debug!("Comment response has no comment listing");
                Ok(Page::empty())
            }
        }
    }

    /// The comment's ID, without the `t1_` prefix.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The comment's text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Username of the comment's author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// When the comment was posted.
    pub fn created_utc(&self) -> DateTime<Utc> {
        self.created_utc
    }
}

impl Kind for Comment {
    const KIND: &'static str = "t1";
    type Data = CommentData;

    fn from_data(data: CommentData) -> Result<Self, Error> {
        let kind = "comment";
        let timestamp = data.created_utc.ok_or(Error::MissingField {
            kind,
            field: "created_utc",
        })?;
        let created_utc = DateTime::from_timestamp(timestamp.trunc() as i64, 0)
            .ok_or(Error::InvalidTimestamp(timestamp))?;
        Ok(Self {
            id: data.id.ok_or(Error::MissingField { kind, field: "id" })?,
            body: data.body.ok_or(Error::MissingField { kind, field: "body" })?,
            author: data.author.ok_or(Error::MissingField { kind, field: "author" })?,
            created_utc,
        })
    }
}

/// An error parsing data from the Reddit API.
#[derive(Debug, Error)]
pub enum Error {
    /// The response is not JSON, or does not have the expected shape.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Something that should be a JSON object is not one.
    #[error("Expected the {0} to be a JSON object")]
    UnexpectedShape(&'static str),

    /// A thing is missing a field that is required to make sense of it.
    #[error("The {kind} is missing its '{field}' field")]
    MissingField {
        /// The type of thing that was being parsed.
        kind: &'static str,

        /// Name of the missing field.
        field: &'static str,
    },

    /// A timestamp is out of range.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(f64),
}
