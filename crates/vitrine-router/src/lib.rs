//! # Vitrine Router
//!
//! Client-side route resolution and navigation for single-page applications:
//! - Literal segments (`/product-list`)
//! - Named parameters (`/product-update/:pk`)
//! - Ordered route tables with first-match-wins resolution
//! - History-API-style location tracking (push/replace/back/forward)
//! - Named-route path generation (`path_for`)
//!
//! The table is built once at application start and is immutable afterwards.
//! Resolution is a plain linear scan in registration order; there is no
//! priority reordering and no caching, so overlapping patterns behave exactly
//! as declared.
//!
//! Views are a caller-chosen type, typically a field-less enum, so the path →
//! component mapping is closed at compile time rather than looked up by
//! string name at runtime.
//!
//! ## Example
//!
//! ```
//! use vitrine_router::RouteTable;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum View {
//!     Home,
//!     ProductUpdate,
//! }
//!
//! let table = RouteTable::builder()
//!     .route("/", "Home", View::Home)
//!     .route("/product-update/:pk", "ProductUpdate", View::ProductUpdate)
//!     .build()
//!     .unwrap();
//!
//! let m = table.resolve("/product-update/42").unwrap();
//! assert_eq!(m.view, View::ProductUpdate);
//! assert_eq!(m.param("pk"), Some("42"));
//!
//! assert!(table.resolve("/nonexistent").is_none());
//! ```

mod error;
pub mod history;
pub mod navigator;
pub mod path;
pub mod route;
pub mod table;

pub use error::{PatternError, TableError};
pub use history::{History, HistoryMode, Location};
pub use navigator::{Navigator, Outcome, ViewSink};
pub use path::{is_canonical, normalize};
pub use route::{Match, Pattern, RouteDef, Segment};
pub use table::{RouteTable, RouteTableBuilder};
