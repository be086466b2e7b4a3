//! Edge-list loading
//!
//! One undirected edge per line: `name, name, weight`. Blank lines and lines
//! consisting of a single `-` (group separators) are skipped, and lines
//! starting with `#` are comments. Weights are non-negative integers.
//! Names are trimmed; a repeated pair overwrites the earlier weight.

use std::fs;
use std::path::Path;
use std::time::Instant;

use rapport_core::error::{RapportError, Result};
use rapport_core::{trace_time, SocialGraph, Weight};

/// One parsed edge-list line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub a: String,
    pub b: String,
    pub weight: Weight,
}

/// Parse edge-list text. `path` only labels errors.
pub fn parse_edges(content: &str, path: &Path) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line == "-" || line.starts_with('#') {
            continue;
        }
        let record =
            parse_line(line).map_err(|reason| RapportError::edge_parse(path, index + 1, reason))?;
        records.push(record);
    }
    Ok(records)
}

fn parse_line(line: &str) -> std::result::Result<EdgeRecord, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [a, b, weight] = fields.as_slice() else {
        return Err(format!(
            "expected `name, name, weight`, found {} field(s)",
            fields.len()
        ));
    };
    if a.is_empty() || b.is_empty() {
        return Err("node names must not be empty".to_string());
    }
    let weight: Weight = weight.parse()?;
    Ok(EdgeRecord {
        a: a.to_string(),
        b: b.to_string(),
        weight,
    })
}

/// Read the edge list at `path` and insert every edge into `graph`
pub fn load_into(graph: &mut SocialGraph<String>, path: &Path) -> Result<usize> {
    let start = Instant::now();
    if !path.exists() {
        return Err(RapportError::not_found("edge list", path.display()));
    }
    let content = fs::read_to_string(path)
        .map_err(|e| RapportError::io_operation("read edge list", path.display(), e))?;
    let records = parse_edges(&content, path)?;
    let count = records.len();
    for record in records {
        graph.add_edge(record.a, record.b, record.weight);
    }
    trace_time!(start, "load_edges", edges = count);
    Ok(count)
}
