//! `rapport path` command
//!
//! Disconnected endpoints and routes over the limit are ordinary results,
//! printed and reported with exit code 0.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, render_route};
use rapport_core::error::Result;
use rapport_core::{PathOutcome, SocialGraph, WeightLimit};

pub fn execute(
    cli: &Cli,
    graph: &mut SocialGraph<String>,
    from: &str,
    to: &str,
    limit: Option<u64>,
) -> Result<()> {
    let (from, to) = (from.to_string(), to.to_string());
    let limit = limit.map_or_else(|| graph.limit(), WeightLimit::from_setting);
    let outcome = graph.shortest_path_within(&from, &to, limit)?;

    match cli.format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&outcome)?;
            if let Some(obj) = value.as_object_mut() {
                obj.insert("from".to_string(), json!(from));
                obj.insert("to".to_string(), json!(to));
            }
            print_json(&value)
        }
        OutputFormat::Human => {
            match &outcome {
                PathOutcome::Found(path) => {
                    println!("{}", render_route(path));
                    if !cli.quiet {
                        println!("distance: {} ({} hops)", path.distance, path.hops());
                    }
                }
                PathOutcome::Disconnected => {
                    println!("{} and {} are not connected", from, to);
                }
                PathOutcome::ExceedsLimit { limit } => {
                    println!("no route from {} to {} below {}", from, to, limit);
                }
            }
            Ok(())
        }
    }
}
