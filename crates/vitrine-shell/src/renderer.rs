// File: src/renderer.rs
// Purpose: Terminal stand-in for the rendering layer

use tracing::{info, warn};
use vitrine_router::{Outcome, ViewSink};

use crate::filters::format_currency;
use crate::views::View;

// Stand-in rows for the product list; the data layer that would supply real
// products is outside this repository.
const SAMPLE_PRODUCTS: [(&str, f64); 3] = [
    ("Keyboard", 45.0),
    ("Mouse", 19.99),
    ("USB cable", 3.5),
];

/// Renders navigation outcomes as terminal output.
///
/// The real rendering layer is a collaborator outside this crate; this sink
/// shows what it would be told to draw, including the not-found fallback.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ViewSink<View> for TerminalRenderer {
    fn present(&mut self, outcome: &Outcome<View>) {
        match outcome {
            Outcome::Matched(m) => {
                info!(route = %m.name, "render");
                println!("[{}]", m.view.title());

                if !m.params.is_empty() {
                    let params =
                        serde_json::to_string(&m.params).unwrap_or_else(|_| "{}".to_string());
                    println!("  params: {}", params);
                }

                match m.view {
                    View::ProductList => {
                        for (name, price) in SAMPLE_PRODUCTS {
                            println!("  {:<12} {}", name, format_currency(price));
                        }
                    }
                    View::ProductUpdate => {
                        println!("  editing product {}", m.param("pk").unwrap_or("?"));
                    }
                    _ => {}
                }
            }
            Outcome::NotFound { path } => {
                warn!(%path, "no route matched");
                println!("[Not found] no view registered for {}", path);
            }
        }
    }
}
