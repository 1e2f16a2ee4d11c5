// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line program.

use crate::conf::{self, Credentials};
use crate::reddit::client::{self, DEFAULT_LIMIT, Session};
use crate::reddit::service::Service;
use crate::view::{SEPARATOR, ViewOptions, Viewable};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use thiserror::Error;

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{message}");
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Prints every comment on a subreddit's hot threads", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Subreddit to read, without the leading "r/"
    #[arg(default_value = "Home")]
    subreddit: String,

    /// Number of threads or comments to request per page
    #[arg(short = 'l', long, default_value_t = DEFAULT_LIMIT,
          value_parser = clap::value_parser!(u32).range(1..=100))]
    limit: u32,

    /// Load credentials from PATH instead of .env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Show when each comment was posted
    #[arg(long, default_value_t = false)]
    timestamps: bool,
}

impl Config {
    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }

    /// Sends log output to stderr at the level selected by `-v` and `-q`.
    pub fn init_logging(&self) {
        env_logger::Builder::new()
            .filter_level(self.verbosity.log_level_filter())
            .init();
    }

    fn view_options(&self) -> ViewOptions {
        ViewOptions::build().timestamps(self.timestamps).build()
    }
}

/// Runs the command-line program, printing to stdout.
pub async fn run(config: Config) -> Result<(), Error> {
    let path = conf::load_env(config.env_file.as_deref())?;
    info!("Loaded environment from {}", path.display());

    let credentials = Credentials::from_env()?;
    let session = Session::login(&credentials).await?.with_limit(config.limit);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    walk(&session, config.subreddit(), &config.view_options(), &mut out).await
}

/// Prints each thread in `subreddit` followed by its comments and a
/// separator.
///
/// Each thread's title is written before its comments are requested.
pub async fn walk<S: Service, W: Write>(
    session: &Session<S>,
    subreddit: &str,
    opts: &ViewOptions,
    out: &mut W,
) -> Result<(), Error> {
    let threads = session.threads(subreddit).await?;
    info!("Found {} threads in r/{subreddit}", threads.len());

    for thread in &threads {
        writeln!(out, "{}", thread.view(opts))?;

        let comments = session.comments(subreddit, thread.id()).await?;
        for comment in &comments {
            writeln!(out, "{}", comment.view(opts))?;
        }
        writeln!(out, "{SEPARATOR}")?;
    }

    Ok(())
}

/// A program error.
#[derive(Debug, Error)]
pub enum Error {
    /// The program is not configured correctly.
    #[error(transparent)]
    Conf(#[from] conf::Error),

    /// Reddit could not be read.
    #[error(transparent)]
    Client(#[from] client::Error),

    /// Output could not be written.
    #[error("Could not write output: {0}")]
    Output(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    mod config {
        use crate::cli::Config;
        use crate::reddit::client::DEFAULT_LIMIT;
        use clap::Parser;
        use std::path::Path;

        #[test]
        fn it_reads_the_home_subreddit_by_default() {
            let config = Config::parse_from(["subwalk"]);
            assert_eq!(config.subreddit(), "Home");
            assert_eq!(config.limit, DEFAULT_LIMIT);
            assert_eq!(config.env_file, None);
            assert!(!config.timestamps);
        }

        #[test]
        fn it_accepts_options() {
            let config = Config::parse_from([
                "subwalk",
                "rust",
                "--limit",
                "25",
                "--env-file",
                "reddit.env",
                "--timestamps",
            ]);
            assert_eq!(config.subreddit(), "rust");
            assert_eq!(config.limit, 25);
            assert_eq!(config.env_file.as_deref(), Some(Path::new("reddit.env")));
            assert!(config.timestamps);
        }

        #[test]
        fn it_rejects_a_page_size_of_zero() {
            assert!(Config::try_parse_from(["subwalk", "-l", "0"]).is_err());
        }

        #[test]
        fn it_rejects_a_page_size_reddit_will_not_honor() {
            assert!(Config::try_parse_from(["subwalk", "-l", "101"]).is_err());
        }
    }

    mod walk {
        use crate::cli::{Error, walk};
        use crate::reddit::client::Session;
        use crate::test_utils::TestService;
        use crate::view::ViewOptions;
        use pretty_assertions::assert_eq;

        const PAGE_1: &str = "https://oauth.reddit.com/r/Home/hot?raw_json=1&limit=10&after=";
        const PAGE_2: &str =
            "https://oauth.reddit.com/r/Home/hot?raw_json=1&limit=10&after=t3_1g4c3d4";
        const COMMENTS_A: &str =
            "https://oauth.reddit.com/r/Home/comments/1g4a1b2?raw_json=1&limit=10&after=";
        const COMMENTS_B_1: &str =
            "https://oauth.reddit.com/r/Home/comments/1g4c3d4?raw_json=1&limit=10&after=";
        const COMMENTS_B_2: &str = "https://oauth.reddit.com/r/Home/comments/1g4c3d4?raw_json=1&limit=10&after=t1_ls00001";
        const COMMENTS_C: &str =
            "https://oauth.reddit.com/r/Home/comments/1g4e5f6?raw_json=1&limit=10&after=";

        fn service() -> TestService {
            TestService::new("token")
                .page(PAGE_1, "hot_home_1")
                .page(PAGE_2, "hot_home_2")
                .page(COMMENTS_A, "comments_1g4a1b2")
                .page(COMMENTS_B_1, "comments_1g4c3d4_1")
                .page(COMMENTS_B_2, "comments_1g4c3d4_2")
                .page(COMMENTS_C, "comments_short")
        }

        #[tokio::test]
        async fn it_prints_every_thread_and_comment() {
            let session = Session::test(service()).await;
            let mut out = Vec::new();
            walk(&session, "Home", &ViewOptions::default(), &mut out)
                .await
                .unwrap();

            let actual = String::from_utf8(out).unwrap();
            let expected = "\
Thread: What's one home upgrade you'd never skip? (ID: 1g4a1b2)
Comment by HouseProud: A good water softener. Saves every appliance you own.
Comment by DIYorDIE: Heated bathroom floors. Zero regrets.
------
Thread: Finally finished our reading nook (ID: 1g4c3d4)
Comment by BookWorm77: That window seat is perfect.
Comment by cozycorner: Where did you get the cushions?
------
Thread: Paint color for a north-facing living room? (ID: 1g4e5f6)
------
";
            assert_eq!(actual, expected);
        }

        #[tokio::test]
        async fn it_prints_timestamps_when_asked() {
            let session = Session::test(service()).await;
            let opts = ViewOptions::build().timestamps(true).build();
            let mut out = Vec::new();
            walk(&session, "Home", &opts, &mut out).await.unwrap();

            let actual = String::from_utf8(out).unwrap();
            let second_line = actual.lines().nth(1).unwrap();
            assert_eq!(
                second_line,
                "Comment by HouseProud at 2024-10-15 16:00:00 UTC: A good water softener. Saves every appliance you own."
            );
        }

        #[tokio::test]
        async fn it_prints_the_thread_before_failing_to_read_its_comments() {
            let service = TestService::new("token").page(PAGE_1, "hot_home_2");
            let session = Session::test(service).await;
            let mut out = Vec::new();
            let result = walk(&session, "Home", &ViewOptions::default(), &mut out).await;

            assert!(matches!(result, Err(Error::Client(_))));
            let actual = String::from_utf8(out).unwrap();
            assert_eq!(
                actual,
                "Thread: Paint color for a north-facing living room? (ID: 1g4e5f6)\n"
            );
        }
    }
}
