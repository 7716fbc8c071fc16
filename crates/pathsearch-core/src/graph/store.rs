//! Immutable adjacency-matrix graph

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use tracing::debug;

use super::types::{NodeId, Weight, MAX_WEIGHT};
use crate::bail_malformed;
use crate::error::{Result, SearchError};

/// Square weight matrix stored row-major; `weight(i, j) == 0` means no edge.
///
/// There is no mutating API, so a `GraphStore` can be borrowed by any number
/// of concurrent searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStore {
    node_count: usize,
    weights: Vec<Weight>,
}

impl GraphStore {
    /// Build a graph from a node count and a complete row-major weight list
    pub fn from_weights(node_count: usize, weights: Vec<Weight>) -> Result<Self> {
        if node_count == 0 {
            bail_malformed!("node count must be positive");
        }
        let expected = node_count.checked_mul(node_count).ok_or_else(|| {
            SearchError::malformed(format!("node count {} is too large", node_count))
        })?;
        if weights.len() != expected {
            bail_malformed!(
                "expected {} weights for {} nodes, found {}",
                expected,
                node_count,
                weights.len()
            );
        }
        if let Some((position, weight)) = weights
            .iter()
            .enumerate()
            .find(|&(_, &w)| w > MAX_WEIGHT)
        {
            bail_malformed!(
                "weight #{} ({}) exceeds the maximum of {}",
                position + 1,
                weight,
                MAX_WEIGHT
            );
        }
        Ok(Self {
            node_count,
            weights,
        })
    }

    /// Parse the whitespace-delimited matrix format: node count followed by
    /// exactly `node_count²` non-negative integers in row-major order.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();

        let header = match tokens.next() {
            Some(token) => token,
            None => bail_malformed!("empty input, expected a node count"),
        };
        let node_count: usize = header.parse().map_err(|_| {
            SearchError::malformed(format!("node count '{}' is not a positive integer", header))
        })?;

        let weights = tokens
            .enumerate()
            .map(|(position, token)| {
                token.parse::<Weight>().map_err(|_| {
                    SearchError::malformed(format!(
                        "weight #{} ('{}') is not a non-negative integer",
                        position + 1,
                        token
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_weights(node_count, weights)
    }

    /// Read and parse a matrix file
    #[tracing::instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SearchError::InputNotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::InvalidData => SearchError::malformed(format!(
                "{} is not valid UTF-8 text",
                path.display()
            )),
            _ => SearchError::io_operation("read", path.display(), e),
        })?;
        let graph = Self::parse(&text)?;
        debug!(
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            elapsed = ?start.elapsed(),
            "load_matrix"
        );
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Fail with `OutOfRange` unless `node` is a valid index
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if node < self.node_count {
            Ok(())
        } else {
            Err(SearchError::OutOfRange {
                index: node,
                node_count: self.node_count,
            })
        }
    }

    /// Weight of the edge `from -> to`, zero if absent
    pub fn weight(&self, from: NodeId, to: NodeId) -> Result<Weight> {
        self.check_node(from)?;
        self.check_node(to)?;
        Ok(self.weights[from * self.node_count + to])
    }

    /// Full outbound row of `from`
    pub fn row(&self, from: NodeId) -> Result<&[Weight]> {
        self.check_node(from)?;
        let start = from * self.node_count;
        Ok(&self.weights[start..start + self.node_count])
    }

    /// Outbound edges of `from` with positive weight, in ascending node order
    pub fn neighbors(&self, from: NodeId) -> Result<impl Iterator<Item = (NodeId, Weight)> + '_> {
        Ok(self
            .row(from)?
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, weight)| weight > 0))
    }

    /// Number of present (non-zero) edges
    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }
}

impl FromStr for GraphStore {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
