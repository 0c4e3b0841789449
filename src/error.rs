//! Error types for loading graphs and running the clustering

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading an edge list or clustering it
#[derive(Debug, Error)]
pub enum ClusterError {
    /// The input file could not be opened or read
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Reading from an in-memory or stream input failed
    #[error("failed to read input: {source}")]
    Read {
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The input held no vertex-count line
    #[error("input is empty: expected a vertex count on the first line")]
    MissingHeader,

    /// A line could not be parsed
    #[error("line {line}: {reason}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// The requested cluster count can never be reached
    #[error("target cluster count must be at least 1, got {target}")]
    InvalidTarget {
        /// The rejected cluster count
        target: usize,
    },

    /// The edge queue ran dry with more clusters than requested
    #[error("edges exhausted with {clusters} clusters remaining; cannot reach {target}")]
    Exhausted {
        /// Clusters still live when the queue emptied
        clusters: usize,
        /// Cluster count that was requested
        target: usize,
    },
}

impl ClusterError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        ClusterError::Parse { line, reason: reason.into() }
    }
}
