//! Shared output helpers for commands

use rapport_core::error::Result;
use rapport_core::WeightedPath;

/// Print a JSON value to stdout, pretty-printed
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a route as `A -> B -> C`
pub fn render_route(path: &WeightedPath<String>) -> String {
    path.nodes.join(" -> ")
}
