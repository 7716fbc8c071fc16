//! Configuration for pathsearch (optional `pathsearch.toml`)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{Result, SearchError};
use crate::graph::NodeId;
use crate::search::Strategy;

/// File name looked up in the working directory when `--config` is absent
pub const CONFIG_FILE: &str = "pathsearch.toml";

/// Matrix file used when neither the CLI nor the config names one
pub const DEFAULT_MATRIX_FILE: &str = "graph.txt";

fn default_matrix() -> PathBuf {
    PathBuf::from(DEFAULT_MATRIX_FILE)
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::ALL.to_vec()
}

/// Defaults for the `search` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Matrix file, relative to the working directory
    #[serde(default = "default_matrix")]
    pub matrix: PathBuf,

    /// Source node
    #[serde(default)]
    pub source: NodeId,

    /// Target node; the last node of the graph when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<NodeId>,

    /// Strategies to run, in reporting order
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            matrix: default_matrix(),
            source: 0,
            target: None,
            strategies: default_strategies(),
        }
    }
}

impl SearchConfig {
    /// Target node for a graph of `node_count` nodes
    pub fn resolve_target(&self, node_count: usize) -> NodeId {
        self.target.unwrap_or(node_count.saturating_sub(1))
    }
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.search.strategies.is_empty() {
            bail_invalid!("config search.strategies", "empty list");
        }
        Ok(config)
    }

    /// Load configuration from an explicit file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SearchError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&content).map_err(|e| {
            SearchError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load `explicit` if given, else `pathsearch.toml` under `dir` if it
    /// exists, else defaults
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using_config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempdir().unwrap();
        let config = Config::resolve(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.search.matrix, PathBuf::from("graph.txt"));
        assert_eq!(config.search.strategies, Strategy::ALL.to_vec());
    }

    #[test]
    fn test_parse_search_section() {
        let config = Config::parse(
            "[search]\nmatrix = \"roads.txt\"\nsource = 2\ntarget = 7\nstrategies = [\"priority\", \"queue\"]\n",
        )
        .unwrap();
        assert_eq!(config.search.matrix, PathBuf::from("roads.txt"));
        assert_eq!(config.search.source, 2);
        assert_eq!(config.search.resolve_target(10), 7);
        assert_eq!(
            config.search.strategies,
            vec![Strategy::PriorityQueue, Strategy::Queue]
        );
    }

    #[test]
    fn test_target_defaults_to_last_node() {
        let config = Config::parse("[search]\nsource = 1\n").unwrap();
        assert_eq!(config.search.resolve_target(6), 5);
    }

    #[test]
    fn test_rejects_unknown_keys_and_empty_strategies() {
        assert!(Config::parse("[search]\nsorce = 1\n").is_err());
        assert!(Config::parse("[search]\nstrategies = []\n").is_err());
        assert!(Config::parse("[search]\nstrategies = [\"heap\"]\n").is_err());
    }

    #[test]
    fn test_discovers_file_in_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[search]\ntarget = 3\n").unwrap();
        let config = Config::resolve(None, dir.path()).unwrap();
        assert_eq!(config.search.target, Some(3));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::resolve(Some(&missing), dir.path()).is_err());
    }
}
