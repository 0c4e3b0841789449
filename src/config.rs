//! Configuration management for the spacing cluster analyzer

use std::path::PathBuf;
use crate::error::ClusterError;

/// Default number of clusters the driver stops at
pub const DEFAULT_TARGET_CLUSTERS: usize = 3;

/// Run configuration for the analyzer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of clusters to stop merging at
    pub target_clusters: usize,
    
    /// Directory for JSON results (none = stdout only)
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_clusters: DEFAULT_TARGET_CLUSTERS,
            output_dir: None,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(target_clusters: usize, output_dir: Option<PathBuf>) -> Self {
        Self {
            target_clusters,
            output_dir,
        }
    }
    
    /// Reject targets the driver can never reach
    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.target_clusters == 0 {
            return Err(ClusterError::InvalidTarget { target: self.target_clusters });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_three_clusters() {
        let config = Config::default();
        assert_eq!(config.target_clusters, 3);
        assert!(config.output_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_target_is_rejected() {
        let err = Config::new(0, None).validate().unwrap_err();
        assert!(matches!(err, ClusterError::InvalidTarget { target: 0 }));
    }
}
