// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Draws viewable objects as plain text.

use crate::reddit::thing::{Comment, Thread};

/// Printed after the last comment on each thread.
pub const SEPARATOR: &str = "------";

/// View renderer options.
#[derive(Debug, Default)]
pub struct ViewOptions {
    timestamps: bool,
}

impl ViewOptions {
    /// Incrementally builds a new set of view options.
    ///
    /// # Examples
    ///
    /// ```
    /// use subwalk::view::ViewOptions;
    /// let opts = ViewOptions::build().timestamps(true).build();
    /// ```
    pub fn build() -> ViewOptionsBuilder {
        ViewOptionsBuilder::default()
    }
}

/// A builder for view options.
///
/// You probably don't want to use this directly; call [`ViewOptions::build()`]
/// and construct it incrementally instead.
#[derive(Debug, Default)]
#[must_use]
pub struct ViewOptionsBuilder {
    timestamps: bool,
}

impl ViewOptionsBuilder {
    /// Sets whether comments are shown with the time they were posted.
    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    /// Finalizes the [`ViewOptions`].
    pub fn build(self) -> ViewOptions {
        ViewOptions {
            timestamps: self.timestamps,
        }
    }
}

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self, opts: &ViewOptions) -> String;
}

impl Viewable for Thread {
    fn view(&self, _: &ViewOptions) -> String {
        format!("Thread: {} (ID: {})", self.title(), self.id())
    }
}

impl Viewable for Comment {
    fn view(&self, opts: &ViewOptions) -> String {
        if opts.timestamps {
            format!(
                "Comment by {} at {}: {}",
                self.author(),
                self.created_utc().format("%Y-%m-%d %H:%M:%S UTC"),
                self.body()
            )
        } else {
            format!("Comment by {}: {}", self.author(), self.body())
        }
    }
}

#[cfg(test)]
mod tests {
    mod view_options {
        use super::super::*;

        #[test]
        fn it_returns_default_options() {
            let opts = ViewOptions::default();
            assert!(!opts.timestamps);
        }

        #[test]
        fn it_returns_custom_options() {
            let opts = ViewOptions::build().timestamps(true).build();
            assert!(opts.timestamps);
        }
    }

    mod viewable {
        use super::super::*;
        use chrono::DateTime;
        use pretty_assertions::assert_eq;

        fn comment(body: &str) -> Comment {
            let created = DateTime::from_timestamp(1729008000, 0).unwrap();
            Comment::new("lrz0001", body, "HouseProud", created)
        }

        #[test]
        fn it_views_a_thread() {
            let thread = Thread::new(
                "1g4c3d4",
                "Finally finished our reading nook",
                "https://i.redd.it/x7k2m9n4p1vd1.jpeg",
            );
            let actual = thread.view(&ViewOptions::default());
            assert_eq!(actual, "Thread: Finally finished our reading nook (ID: 1g4c3d4)");
        }

        #[test]
        fn it_views_a_comment() {
            let actual = comment("Heated floors.").view(&ViewOptions::default());
            assert_eq!(actual, "Comment by HouseProud: Heated floors.");
        }

        #[test]
        fn it_views_a_comment_with_a_timestamp() {
            let opts = ViewOptions::build().timestamps(true).build();
            let actual = comment("Heated floors.").view(&opts);
            assert_eq!(
                actual,
                "Comment by HouseProud at 2024-10-15 16:00:00 UTC: Heated floors."
            );
        }

        #[test]
        fn it_keeps_multiline_comment_bodies_intact() {
            let actual = comment("First line.\n\nSecond line.").view(&ViewOptions::default());
            assert_eq!(actual, "Comment by HouseProud: First line.\n\nSecond line.");
        }
    }
}
