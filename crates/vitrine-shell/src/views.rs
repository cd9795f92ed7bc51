// File: src/views.rs
// Purpose: The catalog's renderable views as a closed set

/// Every screen the catalog shell can render.
///
/// One variant per page component; the tables in [`crate::routes`] bind URL
/// patterns to these at compile time, so there is no runtime lookup from a
/// component name string to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    ProductList,
    ProductCreate,
    /// Reuses the create screen, pre-filled from the `pk` parameter.
    ProductUpdate,
    /// Sign-in redirect landing page.
    Callback,
    HelloWorld,
}

impl View {
    /// Human-readable title, used by the terminal renderer.
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::ProductList => "Product list",
            View::ProductCreate => "Create product",
            View::ProductUpdate => "Update product",
            View::Callback => "Signing in...",
            View::HelloWorld => "Hello world",
        }
    }
}
