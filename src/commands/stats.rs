//! `rapport stats` command

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use rapport_core::error::Result;
use rapport_core::SocialGraph;

pub fn execute(cli: &Cli, graph: &mut SocialGraph<String>) -> Result<()> {
    let nodes = graph.node_count();
    let edges = graph.edge_count();
    let components = graph.component_count();
    let limit = graph.limit();

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "nodes": nodes,
            "edges": edges,
            "components": components,
            "default_limit": limit,
            "verify_with_oracle": graph.verification(),
        })),
        OutputFormat::Human => {
            println!("people:        {}", nodes);
            println!("friendships:   {}", edges);
            println!("groups:        {}", components);
            println!("default limit: {}", limit);
            Ok(())
        }
    }
}
