//! `rapport find` command - closest person whose name matches a pattern

use regex::Regex;
use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{print_json, render_route};
use rapport_core::bail_invalid;
use rapport_core::error::Result;
use rapport_core::{SocialGraph, WeightLimit};

pub fn execute(
    cli: &Cli,
    graph: &SocialGraph<String>,
    start: &str,
    pattern: &str,
    limit: Option<u64>,
) -> Result<()> {
    let matcher = match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => bail_invalid!("pattern", e),
    };
    let limit = limit.map_or(WeightLimit::UNLIMITED, WeightLimit::from_setting);
    let found =
        graph.search_until_within(&start.to_string(), limit, |name| matcher.is_match(name));

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "start": start,
            "pattern": pattern,
            "match": found,
        })),
        OutputFormat::Human => {
            match &found {
                Some(found) => {
                    println!("{}", found.node);
                    if !cli.quiet {
                        println!(
                            "route: {} (distance {})",
                            render_route(&found.path),
                            found.path.distance
                        );
                    }
                }
                None => println!("no match for '{}' reachable from {}", pattern, start),
            }
            Ok(())
        }
    }
}
