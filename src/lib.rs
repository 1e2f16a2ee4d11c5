// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! subwalk is a command-line tool that walks through the "hot" threads of a
//! subreddit and prints each thread's title followed by its comments. It
//! logs in to the Reddit API as a script application, follows Reddit's
//! pagination cursors until every thread has been listed, and then does the
//! same for the comments on each thread.
//!
//! # Examples
//!
//! Print every hot thread in r/Home along with its comments:
//!
//! ```bash
//! subwalk
//! ```
//!
//! Print the hot threads in r/rust, 25 at a time, including the time each
//! comment was posted:
//!
//! ```bash
//! subwalk rust --limit 25 --timestamps
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! subwalk --help
//! ```
//!
//! # Reddit API Setup
//!
//! subwalk authenticates with Reddit's OAuth2 "password" grant, which is
//! only available to [script apps]. To enable access:
//!
//! 1. Create a script app in your Reddit [app preferences].
//! 2. Note the app's client ID (shown under the app's name) and secret.
//! 3. Create a `.env` file in the directory you run subwalk from (parent
//!    directories are not searched):
//!
//!    ```text
//!    CLIENT_ID=<client id>
//!    CLIENT_SECRET=<client secret>
//!    USERNAME=<your Reddit username>
//!    PASSWORD=<your Reddit password>
//!    USER_AGENT=<platform>:subwalk:v0.1.0 (by /u/<your Reddit username>)
//!    ```
//!
//! Variables already set in the environment take precedence over the
//! `.env` file, and `--env-file` can point subwalk at a different file.
//! See [`conf`] for details.
//!
//! # License
//!
//! subwalk is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [app preferences]: https://www.reddit.com/prefs/apps
//! [script apps]: https://github.com/reddit-archive/reddit/wiki/OAuth2-Quick-Start-Example

pub mod cli;
pub mod conf;
pub mod http;
pub mod reddit;
pub mod view;

#[cfg(test)]
mod test_utils;
