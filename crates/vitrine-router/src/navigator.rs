//! Navigation dispatch: ties a route table to a history stack.
//!
//! The navigator is a plain value owned by the application shell and passed
//! by reference to whatever needs navigation. There is no global instance.
//! Each navigation event runs synchronously to completion: the location is
//! updated, then resolved, then the outcome is handed to the view layer, so
//! a `navigate` followed by a `resolve` of the current location always
//! agrees.

use std::collections::HashMap;

use tracing::debug;

use crate::history::{History, HistoryMode, Location};
use crate::route::Match;
use crate::table::RouteTable;

/// What a navigation event produced, handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<V> {
    /// A route matched: render this view with these parameters.
    Matched(Match<V>),
    /// Nothing matched: the view layer decides the fallback presentation.
    NotFound {
        /// The canonical path that failed to resolve. For named navigation
        /// misses this carries the unknown route name instead.
        path: String,
    },
}

impl<V> Outcome<V> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound { .. })
    }

    pub fn as_match(&self) -> Option<&Match<V>> {
        match self {
            Outcome::Matched(m) => Some(m),
            Outcome::NotFound { .. } => None,
        }
    }
}

/// The seam to the rendering layer.
///
/// The router resolves; something else draws. Implementations receive every
/// navigation outcome, including `NotFound`.
pub trait ViewSink<V> {
    fn present(&mut self, outcome: &Outcome<V>);
}

/// Drives navigation for one application: owns the route table and the
/// history stack.
///
/// # Examples
///
/// ```
/// use vitrine_router::{HistoryMode, Navigator, RouteTable};
///
/// let table = RouteTable::builder()
///     .route("/", "Home", "home")
///     .route("/product-update/:pk", "ProductUpdate", "update")
///     .build()
///     .unwrap();
///
/// let mut navigator = Navigator::new(table, HistoryMode::History);
///
/// let outcome = navigator.navigate("/product-update/42");
/// let m = outcome.as_match().unwrap();
/// assert_eq!(m.view, "update");
/// assert_eq!(m.param("pk"), Some("42"));
///
/// assert!(navigator.navigate("/nonexistent").is_not_found());
/// ```
#[derive(Debug, Clone)]
pub struct Navigator<V> {
    table: RouteTable<V>,
    history: History,
}

impl<V: Clone> Navigator<V> {
    pub fn new(table: RouteTable<V>, mode: HistoryMode) -> Self {
        Self {
            table,
            history: History::new(mode),
        }
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The location the application is currently at.
    pub fn current(&self) -> &Location {
        self.history.current()
    }

    fn resolve_current(&self) -> Outcome<V> {
        let path = &self.history.current().path;
        match self.table.resolve(path) {
            Some(m) => Outcome::Matched(m),
            None => Outcome::NotFound { path: path.clone() },
        }
    }

    /// Navigates to a path: pushes the location onto the history stack, then
    /// resolves it. No page-reload semantics are involved; the location
    /// pointer just moves.
    pub fn navigate(&mut self, raw: &str) -> Outcome<V> {
        let location = self.history.push(raw);
        debug!(path = %location.path, "navigate");
        self.resolve_current()
    }

    /// Like [`navigate`](Self::navigate) but swaps the current entry instead
    /// of growing the stack.
    pub fn replace(&mut self, raw: &str) -> Outcome<V> {
        let location = self.history.replace(raw);
        debug!(path = %location.path, "replace");
        self.resolve_current()
    }

    /// Named-route navigation: builds the path via
    /// [`RouteTable::path_for`], then navigates to it. Unknown names and
    /// missing parameters produce `NotFound` without touching history.
    pub fn navigate_named(
        &mut self,
        name: &str,
        params: &HashMap<String, String>,
    ) -> Outcome<V> {
        match self.table.path_for(name, params) {
            Some(path) => self.navigate(&path),
            None => {
                debug!(route = %name, "named navigation target unknown");
                Outcome::NotFound {
                    path: name.to_string(),
                }
            }
        }
    }

    /// Steps back through history and re-resolves the restored location.
    /// Returns `None` when already at the oldest entry.
    pub fn back(&mut self) -> Option<Outcome<V>> {
        self.history.back()?;
        Some(self.resolve_current())
    }

    /// Steps forward through history and re-resolves the restored location.
    /// Returns `None` when already at the newest entry.
    pub fn forward(&mut self) -> Option<Outcome<V>> {
        self.history.forward()?;
        Some(self.resolve_current())
    }

    /// Navigates and hands the outcome to the sink.
    pub fn dispatch_to(&mut self, raw: &str, sink: &mut dyn ViewSink<V>) {
        let outcome = self.navigate(raw);
        sink.present(&outcome);
    }
}
