//! Mesh merging.
//!
//! Appends one mesh onto another. The source is first compacted (on a
//! private copy), then shifted past the target's largest node and element
//! ids, so the two id spaces never collide no matter how the inputs were
//! numbered.

use log::debug;

use super::compact::compact;
use crate::error::{MeshError, Result};
use crate::mesh::{Mesh, MeshId, ReindexBuilder};

/// Merge `source` into `target`.
///
/// Source nodes receive ids starting at `target.max_node_id() + 1` and source
/// elements ids starting at `target.max_element_id() + 1`; element node
/// references are rewritten accordingly. Nodes, elements and physical names
/// are appended, then nodes and elements are sorted by id. Physical names are
/// concatenated as-is, so duplicate tags are possible.
///
/// Fails if `source` itself references a missing node (see
/// [`compact`](super::compact::compact)), or with [`MeshError::IdOverflow`]
/// if the shifted ids would not fit in an `i64`. All renumbering happens on a
/// copy of `source`, so `target` is unchanged on failure.
///
/// # Example
///
/// ```
/// use mshkit::prelude::*;
/// use mshkit::algo::merge;
///
/// let mut a = Mesh::new();
/// a.nodes.push(Node::from_coords(1, 0.0, 0.0, 0.0));
/// a.nodes.push(Node::from_coords(2, 1.0, 0.0, 0.0));
/// a.elements.push(Element::from_raw(1, ElementKind::Line, &[], &[1, 2]));
///
/// // Same ids as `a`, different geometry.
/// let mut b = a.clone();
/// b.nodes[1].position.y = 1.0;
///
/// merge(&mut a, &b).unwrap();
/// assert_eq!(a.num_nodes(), 4);
/// assert_eq!(a.elements[1].node_ids, vec![NodeId::new(3), NodeId::new(4)]);
/// ```
pub fn merge(target: &mut Mesh, source: &Mesh) -> Result<()> {
    let mut src = source.clone();
    compact(&mut src)?;

    let node_start = next_id(target.max_node_id())?;
    let nodes = ReindexBuilder::sequential(src.nodes.iter().map(|n| n.id), node_start)?.finish();
    for node in &mut src.nodes {
        node.id = nodes.get(node.id)?;
    }
    for element in &mut src.elements {
        element.node_ids = nodes.map_all(&element.node_ids)?;
    }

    let element_start = next_id(target.max_element_id())?;
    let elements =
        ReindexBuilder::sequential(src.elements.iter().map(|e| e.id), element_start)?.finish();
    for element in &mut src.elements {
        element.id = elements.get(element.id)?;
    }

    debug!(
        "merging {} nodes (ids from {}) and {} elements (ids from {})",
        src.nodes.len(),
        node_start,
        src.elements.len(),
        element_start
    );

    target.nodes.append(&mut src.nodes);
    target.nodes.sort_by_key(|n| n.id);
    target.elements.append(&mut src.elements);
    target.elements.sort_by_key(|e| e.id);
    target.physical_names.append(&mut src.physical_names);
    Ok(())
}

fn next_id<I: MeshId>(max: I) -> Result<i64> {
    max.raw().checked_add(1).ok_or(MeshError::IdOverflow {
        kind: I::LABEL,
        start: max.raw(),
    })
}
