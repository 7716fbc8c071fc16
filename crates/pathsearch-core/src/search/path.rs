//! Path reconstruction from parent pointers

use crate::error::{Result, SearchError};
use crate::graph::NodeId;

/// Walk parent pointers back from `target` and return the path
/// `source ..= target`.
///
/// Fails with `Unreachable` when the chain from `target` never reaches
/// `source`. The walk takes at most `parent.len()` steps, so a corrupted
/// chain cannot loop forever.
pub fn reconstruct(parent: &[Option<NodeId>], source: NodeId, target: NodeId) -> Result<Vec<NodeId>> {
    let unreachable = || SearchError::Unreachable {
        from: source,
        to: target,
    };

    let mut path = vec![target];
    let mut current = target;

    while current != source {
        if path.len() > parent.len() {
            return Err(unreachable());
        }
        current = parent
            .get(current)
            .copied()
            .flatten()
            .ok_or_else(unreachable)?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}
