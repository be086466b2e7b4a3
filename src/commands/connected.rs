//! `rapport connected` command

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use rapport_core::error::Result;
use rapport_core::SocialGraph;

pub fn execute(cli: &Cli, graph: &mut SocialGraph<String>, a: &str, b: &str) -> Result<()> {
    let (a, b) = (a.to_string(), b.to_string());
    let connected = graph.same_component(&a, &b);

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "a": a,
            "b": b,
            "connected": connected,
        })),
        OutputFormat::Human => {
            if connected {
                println!("{} and {} are connected", a, b);
            } else {
                println!("{} and {} are not connected", a, b);
            }
            Ok(())
        }
    }
}
