// File: src/routes.rs
// Purpose: Route table declarations for the catalog shell

use vitrine_router::{RouteTable, TableError};

use crate::views::View;

/// The storefront table, the set of screens the shipped catalog app mounts.
pub fn storefront() -> Result<RouteTable<View>, TableError> {
    RouteTable::builder()
        .route("/", "Home", View::Home)
        .route("/product-list", "ProductList", View::ProductList)
        .route("/product-create", "ProductCreate", View::ProductCreate)
        .route("/product-update/:pk", "ProductUpdate", View::ProductUpdate)
        .route("/callback", "Callback", View::Callback)
        .build()
}

/// The workbench table, a second route set used during development.
///
/// Kept separate from the storefront table rather than merged: the two sets
/// overlap but do not agree (this one has no sign-in callback and adds the
/// hello-world screen). `/hello-world` is declared before `/`, preserving
/// this table's original order.
pub fn workbench() -> Result<RouteTable<View>, TableError> {
    RouteTable::builder()
        .route("/hello-world", "HelloWorld", View::HelloWorld)
        .route("/", "Home", View::Home)
        .route("/product-list", "ProductList", View::ProductList)
        .route("/product-create", "ProductCreate", View::ProductCreate)
        .route("/product-update/:pk", "ProductUpdate", View::ProductUpdate)
        .build()
}
