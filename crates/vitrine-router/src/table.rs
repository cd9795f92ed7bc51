//! Ordered route tables and first-match resolution.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::TableError;
use crate::path::normalize;
use crate::route::{Match, Pattern, RouteDef};

/// An immutable, ordered collection of routes.
///
/// Built once at application start. Resolution scans the table in
/// registration order and the first structural match wins, so overlapping
/// patterns behave exactly as declared: registering `/` twice is legal and
/// the first entry shadows the second.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<RouteDef<V>>,
}

impl<V> RouteTable<V> {
    /// Starts building a table.
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    /// All registered routes, in registration order.
    pub fn routes(&self) -> &[RouteDef<V>] {
        &self.routes
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Builds a concrete path for a named route by substituting parameter
    /// values into its pattern.
    ///
    /// Returns `None` for unknown names or missing parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use vitrine_router::RouteTable;
    ///
    /// let table = RouteTable::builder()
    ///     .route("/product-update/:pk", "ProductUpdate", ())
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("pk".to_string(), "42".to_string());
    ///
    /// assert_eq!(
    ///     table.path_for("ProductUpdate", &params),
    ///     Some("/product-update/42".to_string())
    /// );
    /// assert_eq!(table.path_for("Unknown", &params), None);
    /// ```
    pub fn path_for(&self, name: &str, params: &HashMap<String, String>) -> Option<String> {
        self.routes
            .iter()
            .find(|route| route.name == name)
            .and_then(|route| route.pattern.fill(params))
    }

    /// Convenience wrapper over [`path_for`](Self::path_for) taking parameter
    /// tuples instead of a map.
    pub fn path_for_pairs(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let params: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.path_for(name, &params)
    }
}

impl<V: Clone> RouteTable<V> {
    /// Resolves a navigation path to the first matching route.
    ///
    /// The input is normalized first, so `/product-list/`, `//product-list`
    /// and `/product-list?page=2` all resolve like `/product-list`. Returns
    /// `None` when no registered pattern matches; the caller decides how the
    /// fallback is presented.
    pub fn resolve(&self, path: &str) -> Option<Match<V>> {
        let path = normalize(path);

        let found = self.routes.iter().find_map(|route| {
            route.pattern.matches(&path).map(|params| Match {
                view: route.view.clone(),
                name: route.name.clone(),
                params,
            })
        });

        match &found {
            Some(m) => debug!(path = %path, route = %m.name, "resolved"),
            None => debug!(path = %path, "no route matched"),
        }

        found
    }
}

/// Builder for [`RouteTable`].
///
/// Entries are collected as declared; `build` validates them in one pass and
/// fails on the first malformed pattern or duplicated name.
#[derive(Debug, Clone)]
pub struct RouteTableBuilder<V> {
    entries: Vec<(String, String, V)>,
}

impl<V> RouteTableBuilder<V> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a route. Order is significant: earlier routes win on
    /// ambiguity.
    pub fn route(mut self, pattern: &str, name: &str, view: V) -> Self {
        self.entries
            .push((pattern.to_string(), name.to_string(), view));
        self
    }

    /// Validates and builds the table.
    ///
    /// # Errors
    ///
    /// - [`TableError::DuplicateName`] when two entries share a name
    /// - [`TableError::InvalidPattern`] when a pattern string fails to parse
    pub fn build(self) -> Result<RouteTable<V>, TableError> {
        let mut seen = HashSet::new();
        let mut routes = Vec::with_capacity(self.entries.len());

        for (pattern, name, view) in self.entries {
            if !seen.insert(name.clone()) {
                return Err(TableError::DuplicateName(name));
            }

            let pattern =
                Pattern::parse(&pattern).map_err(|source| TableError::InvalidPattern {
                    name: name.clone(),
                    source,
                })?;

            routes.push(RouteDef {
                pattern,
                name,
                view,
            });
        }

        debug!(routes = routes.len(), "route table built");

        Ok(RouteTable { routes })
    }
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
