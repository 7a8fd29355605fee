//! Id compaction.
//!
//! Renumbers nodes to `1..=N` and elements to `1..=M` in their current
//! order and rewrites every element's node references to match.

use log::trace;

use crate::error::Result;
use crate::mesh::{ElementId, Mesh, NodeId, ReindexBuilder};

/// Renumber node and element ids to a dense range starting at 1.
///
/// Fails with [`MeshError::Lookup`](crate::error::MeshError::Lookup) if an
/// element references a node id that is not in the mesh, or with
/// [`MeshError::DuplicateId`](crate::error::MeshError::DuplicateId) if an id
/// appears twice. Every new id is computed before anything is written back,
/// so on failure the mesh is left exactly as it was.
///
/// # Example
///
/// ```
/// use mshkit::prelude::*;
/// use mshkit::algo::compact;
///
/// let mut mesh = Mesh::new();
/// mesh.nodes.push(Node::from_coords(10, 0.0, 0.0, 0.0));
/// mesh.nodes.push(Node::from_coords(30, 1.0, 0.0, 0.0));
/// mesh.elements.push(Element::from_raw(7, ElementKind::Line, &[], &[30, 10]));
///
/// compact(&mut mesh).unwrap();
/// assert_eq!(mesh.nodes[1].id, NodeId::new(2));
/// assert_eq!(mesh.elements[0].id, ElementId::new(1));
/// assert_eq!(mesh.elements[0].node_ids, vec![NodeId::new(2), NodeId::new(1)]);
/// ```
pub fn compact(mesh: &mut Mesh) -> Result<()> {
    let nodes = ReindexBuilder::sequential(mesh.nodes.iter().map(|n| n.id), 1)?.finish();
    let elements = ReindexBuilder::sequential(mesh.elements.iter().map(|e| e.id), 1)?.finish();

    let node_ids: Vec<NodeId> = mesh
        .nodes
        .iter()
        .map(|n| nodes.get(n.id))
        .collect::<Result<_>>()?;
    let references: Vec<Vec<NodeId>> = mesh
        .elements
        .iter()
        .map(|e| nodes.map_all(&e.node_ids))
        .collect::<Result<_>>()?;
    let element_ids: Vec<ElementId> = mesh
        .elements
        .iter()
        .map(|e| elements.get(e.id))
        .collect::<Result<_>>()?;

    for (node, id) in mesh.nodes.iter_mut().zip(node_ids) {
        node.id = id;
    }
    for ((element, id), refs) in mesh.elements.iter_mut().zip(element_ids).zip(references) {
        element.id = id;
        element.node_ids = refs;
    }

    trace!(
        "compacted mesh to {} nodes and {} elements",
        mesh.nodes.len(),
        mesh.elements.len()
    );
    Ok(())
}
