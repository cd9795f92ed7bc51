mod config;
mod filters;
mod renderer;
mod routes;
mod views;

use std::io::{self, BufRead};

use anyhow::Result;
use vitrine_router::{Navigator, ViewSink};

use crate::config::{ShellConfig, TableChoice};
use crate::renderer::TerminalRenderer;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("vitrine shell starting...");

    let config = ShellConfig::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        ShellConfig::default()
    });

    let table = match config.app.table {
        TableChoice::Storefront => routes::storefront()?,
        TableChoice::Workbench => routes::workbench()?,
    };

    println!(
        "Table: {:?}, routes: {}, mode: {:?}",
        config.app.table,
        table.len(),
        config.app.history_mode
    );
    for route in table.routes() {
        println!("  {} -> {}", route.pattern.raw(), route.name);
    }

    let mut navigator = Navigator::new(table, config.app.history_mode.into());
    let mut renderer = TerminalRenderer::new();

    // Initial render; replace rather than push so `back` stops here.
    let outcome = navigator.replace(&config.app.start_path);
    renderer.present(&outcome);

    println!("Type a path to navigate ('back'/'forward' to move in history, Ctrl-D quits)");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "back" => match navigator.back() {
                Some(outcome) => renderer.present(&outcome),
                None => println!("already at the oldest entry"),
            },
            "forward" => match navigator.forward() {
                Some(outcome) => renderer.present(&outcome),
                None => println!("already at the newest entry"),
            },
            path => navigator.dispatch_to(path, &mut renderer),
        }
    }

    Ok(())
}
