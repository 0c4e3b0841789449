//! Line-oriented edge list reader
//!
//! The format is a vertex count on the first line followed by one
//! `vertex vertex cost` triple per line. Vertices are registered the first
//! time an edge mentions them.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use itertools::Itertools;
use crate::error::ClusterError;
use crate::graph::{GraphBuilder, WeightedGraph};

/// Load an edge list from a file on disk
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<WeightedGraph, ClusterError> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());
    
    let io_err = |source: std::io::Error| ClusterError::Io { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(io_err)?;
    
    let graph = parse_edge_list(BufReader::new(file)).map_err(|err| match err {
        ClusterError::Read { source } => io_err(source),
        other => other,
    })?;
    
    log::info!(
        "Loaded graph with {} vertices and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    
    Ok(graph)
}

/// Parse an edge list from any buffered reader
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<WeightedGraph, ClusterError> {
    let mut builder: Option<GraphBuilder> = None;
    
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| ClusterError::Read { source })?;
        
        let mut fields = line.split_whitespace().peekable();
        if fields.peek().is_none() {
            continue;
        }
        
        match builder.as_mut() {
            None => {
                let declared: usize = parse_field(fields.next(), line_no, "vertex count")?;
                builder = Some(GraphBuilder::with_capacity(declared).declared_vertices(declared));
            }
            Some(builder) => {
                let (first, second, cost) = fields
                    .collect_tuple::<(&str, &str, &str)>()
                    .ok_or_else(|| ClusterError::parse(line_no, "expected `vertex vertex cost`"))?;
                let first: i64 = parse_field(Some(first), line_no, "first vertex")?;
                let second: i64 = parse_field(Some(second), line_no, "second vertex")?;
                let cost: u64 = parse_field(Some(cost), line_no, "edge cost")?;
                builder.add_edge(first, second, cost);
            }
        }
    }
    
    builder.map(GraphBuilder::build).ok_or(ClusterError::MissingHeader)
}

fn parse_field<T>(field: Option<&str>, line: usize, what: &str) -> Result<T, ClusterError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = field.ok_or_else(|| ClusterError::parse(line, format!("missing {}", what)))?;
    raw.parse().map_err(|err| {
        ClusterError::parse(line, format!("invalid {} `{}`: {}", what, raw, err))
    })
}
