//! # mshkit
//!
//! Reading, writing and renumbering meshes in the legacy Gmsh MSH 2.2 ASCII
//! format.
//!
//! A [`Mesh`](mesh::Mesh) is a list of physical names, a list of nodes and a
//! list of elements. Elements refer to nodes by the integer ids written in the
//! file, which can be sparse and collide between meshes from different
//! sources. The operations in [`algo`] rewrite those ids so that every element
//! reference keeps pointing at an existing node.
//!
//! ## Features
//!
//! - **Codec**: [`io::msh::decode`] and [`io::msh::encode`], with stable
//!   six-decimal output
//! - **Compaction**: dense `1..=N` renumbering through a two-phase
//!   [`ReindexBuilder`](mesh::ReindexBuilder)
//! - **Merging**: append meshes with colliding ids
//! - **Deduplication**: collapse coincident nodes under a distance tolerance
//! - **Filtering and ordering** of elements by kind
//!
//! ## Quick Start
//!
//! ```
//! use mshkit::prelude::*;
//! use mshkit::io::msh;
//!
//! let text = "\
//! $Nodes
//! 3
//! 1 0 0 0
//! 2 1 0 0
//! 3 0 1 0
//! $EndNodes
//! $Elements
//! 2
//! 1 15 2 1 1 1
//! 2 2 2 2 1 1 2 3
//! $EndElements
//! ";
//!
//! let mut mesh = msh::decode(text).unwrap();
//! mesh.filter(&[ElementKind::Point]);
//! mesh.compact().unwrap();
//! assert_eq!(mesh.num_elements(), 1);
//! assert_eq!(mesh.elements[0].id, ElementId::new(1));
//!
//! let out = msh::encode(&mesh);
//! assert!(out.contains("$Elements\n1\n1 2 2 2 1 1 2 3\n"));
//! ```
//!
//! ## Merging Meshes
//!
//! ```
//! use mshkit::prelude::*;
//!
//! let mut a = Mesh::new();
//! a.nodes.push(Node::from_coords(1, 0.0, 0.0, 0.0));
//! a.nodes.push(Node::from_coords(2, 1.0, 0.0, 0.0));
//! a.elements.push(Element::from_raw(1, ElementKind::Line, &[], &[1, 2]));
//!
//! let mut b = Mesh::new();
//! b.nodes.push(Node::from_coords(1, 1.0, 0.0, 0.0));
//! b.nodes.push(Node::from_coords(2, 2.0, 0.0, 0.0));
//! b.elements.push(Element::from_raw(1, ElementKind::Line, &[], &[1, 2]));
//!
//! a.merge(&b).unwrap();
//! assert_eq!(a.num_nodes(), 4);
//!
//! // Node 2 of `a` and node 1 of `b` are the same point.
//! a.dedupe(0.0).unwrap();
//! assert_eq!(a.num_nodes(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod generate;
pub mod io;
pub mod mesh;

#[cfg(test)]
mod testdata;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use mshkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::generate::Generator;
    pub use crate::mesh::{
        Element, ElementId, ElementKind, Mesh, MeshId, Node, NodeId, PhysicalName, Reindex,
        ReindexBuilder,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::io::msh;
    use super::prelude::*;
    use super::testdata::SAMPLE;

    #[test]
    fn test_sample_filter_compact() {
        let mut mesh = msh::decode(SAMPLE).unwrap();
        assert_eq!(mesh.num_nodes(), 5);
        assert_eq!(mesh.num_elements(), 10);

        mesh.filter(&[ElementKind::Point, ElementKind::Line]);
        assert_eq!(mesh.num_nodes(), 5);
        mesh.compact().unwrap();

        let element_ids: Vec<i64> = mesh.elements.iter().map(|e| e.id.raw()).collect();
        assert_eq!(element_ids, vec![1, 2, 3, 4]);
        let node_ids: Vec<i64> = mesh.nodes.iter().map(|n| n.id.raw()).collect();
        assert_eq!(node_ids, vec![1, 2, 3, 4, 5]);

        // Every reference resolves.
        for element in &mesh.elements {
            for &id in &element.node_ids {
                assert!(mesh.find_node(id).is_some());
            }
        }
    }
}
