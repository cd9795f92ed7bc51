//! Route definitions and match results.

mod pattern;

pub use pattern::{Pattern, Segment};

use std::collections::HashMap;

/// A single route: a URL pattern bound to a named view.
///
/// The view is any caller-chosen type; applications use a field-less enum so
/// the full set of reachable screens is closed at compile time.
#[derive(Debug, Clone)]
pub struct RouteDef<V> {
    /// Parsed URL pattern, e.g. `/product-update/:pk`.
    pub pattern: Pattern,
    /// Unique identifier within one table, e.g. `ProductUpdate`.
    pub name: String,
    /// The view rendered when this route matches.
    pub view: V,
}

/// Result of resolving a path against a route table.
///
/// Produced per navigation event and discarded once the view layer has
/// rendered it. The view is cloned out of the table, so the match does not
/// borrow the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<V> {
    /// The view to render.
    pub view: V,
    /// Name of the matched route.
    pub name: String,
    /// Parameter values bound from named segments, e.g. `pk → "42"`.
    pub params: HashMap<String, String>,
}

impl<V> Match<V> {
    /// Looks up a single bound parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine_router::RouteTable;
    ///
    /// let table = RouteTable::builder()
    ///     .route("/product-update/:pk", "ProductUpdate", ())
    ///     .build()
    ///     .unwrap();
    ///
    /// let m = table.resolve("/product-update/42").unwrap();
    /// assert_eq!(m.param("pk"), Some("42"));
    /// assert_eq!(m.param("missing"), None);
    /// ```
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}
