//! Core library functions for the max-spacing cluster analyzer

pub mod config;
pub mod error;
pub mod data;
pub mod graph;
pub mod cluster;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use error::ClusterError;
