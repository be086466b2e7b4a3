//! `rapport components` command

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use rapport_core::error::Result;
use rapport_core::SocialGraph;

pub fn execute(cli: &Cli, graph: &mut SocialGraph<String>) -> Result<()> {
    let components = graph.components();

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "count": components.len(),
            "components": components,
        })),
        OutputFormat::Human => {
            if components.is_empty() {
                if !cli.quiet {
                    println!("No people loaded");
                }
                return Ok(());
            }
            for (index, members) in components.iter().enumerate() {
                println!("{}. {}", index + 1, members.join(", "));
            }
            Ok(())
        }
    }
}
