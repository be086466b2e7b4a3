//! `rapport limit` command - show or persist the default weight limit

use std::path::Path;

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_json;
use rapport_core::config::EngineConfig;
use rapport_core::error::Result;
use rapport_core::WeightLimit;

pub fn execute(cli: &Cli, config_path: &Path, value: Option<u64>) -> Result<()> {
    let mut config = EngineConfig::load_or_default(config_path)?;

    if let Some(value) = value {
        config.search.default_limit = value;
        config.save(config_path)?;
        tracing::info!(path = %config_path.display(), default_limit = value, "limit_saved");
    }

    let limit: WeightLimit = config.search.limit();
    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "default_limit": limit,
            "config": config_path.display().to_string(),
            "updated": value.is_some(),
        })),
        OutputFormat::Human => {
            if value.is_some() {
                if !cli.quiet {
                    println!("default limit set to {}", limit);
                }
            } else {
                println!("default limit: {}", limit);
            }
            Ok(())
        }
    }
}
