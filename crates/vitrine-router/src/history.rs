//! History-API-style location tracking.
//!
//! The browser history itself is a collaborator outside this crate; this
//! module models the piece the router owns: the current-location pointer and
//! the entry stack behind back/forward navigation. Everything is
//! single-threaded and each navigation event applies exactly one mutation.

use std::borrow::Cow;

use crate::path::normalize;

/// How routable paths are carried in URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    /// Clean URLs, pushState-style: `/product-list`.
    #[default]
    History,
    /// Fragment-based URLs: `/index.html#/product-list`.
    Hash,
}

impl HistoryMode {
    /// Extracts the routable path from a raw URL for this mode.
    ///
    /// Hash mode routes on the fragment; a URL with no fragment routes to
    /// `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine_router::HistoryMode;
    ///
    /// assert_eq!(HistoryMode::History.routable("/product-list"), "/product-list");
    /// assert_eq!(
    ///     HistoryMode::Hash.routable("/index.html#/product-list"),
    ///     "/product-list"
    /// );
    /// assert_eq!(HistoryMode::Hash.routable("/index.html"), "/");
    /// ```
    pub fn routable<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self {
            HistoryMode::History => normalize(raw),
            HistoryMode::Hash => match raw.split_once('#') {
                Some((_, fragment)) => normalize(fragment),
                None => Cow::Borrowed("/"),
            },
        }
    }
}

/// A navigation target: the canonical routable path plus the raw URL it was
/// extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Canonical path, e.g. `/product-update/42`.
    pub path: String,
    /// The URL as supplied by the navigation event.
    pub raw: String,
}

/// In-process history stack: entries plus a cursor.
///
/// Starts with a single root entry, so `current` is always defined.
#[derive(Debug, Clone)]
pub struct History {
    mode: HistoryMode,
    entries: Vec<Location>,
    cursor: usize,
}

impl History {
    pub fn new(mode: HistoryMode) -> Self {
        Self {
            mode,
            entries: vec![Location {
                path: "/".to_string(),
                raw: "/".to_string(),
            }],
            cursor: 0,
        }
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// The location the cursor points at.
    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    /// Number of entries on the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn location_for(&self, raw: &str) -> Location {
        Location {
            path: self.mode.routable(raw).into_owned(),
            raw: raw.to_string(),
        }
    }

    /// pushState analogue: drops any forward entries, appends the new
    /// location and moves the cursor onto it.
    pub fn push(&mut self, raw: &str) -> &Location {
        let location = self.location_for(raw);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
        self.current()
    }

    /// replaceState analogue: swaps the current entry in place without
    /// growing the stack.
    pub fn replace(&mut self, raw: &str) -> &Location {
        self.entries[self.cursor] = self.location_for(raw);
        self.current()
    }

    /// Steps the cursor back one entry. Returns `None` when already at the
    /// oldest entry.
    pub fn back(&mut self) -> Option<&Location> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Steps the cursor forward one entry. Returns `None` when already at
    /// the newest entry.
    pub fn forward(&mut self) -> Option<&Location> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(HistoryMode::History)
    }
}
