//! Core mesh data structures.
//!
//! This module provides the record types of an MSH 2 mesh and the id
//! remapping helper the renumbering operations are built on.
//!
//! # Overview
//!
//! The primary type is [`Mesh`], which holds ordered lists of
//! [`PhysicalName`]s, [`Node`]s and [`Element`]s. Elements reference nodes
//! through [`NodeId`] values assigned by the file author; those ids are
//! not positions in [`Mesh::nodes`].
//!
//! # Id Types
//!
//! - [`NodeId`] - Identifies a node
//! - [`ElementId`] - Identifies an element
//!
//! Both implement [`MeshId`], which lets [`ReindexBuilder`] and [`Reindex`]
//! work with either.
//!
//! # Construction
//!
//! Meshes are typically decoded from text, but can be built directly:
//!
//! ```
//! use mshkit::mesh::{Element, ElementKind, Mesh, Node};
//!
//! let mut mesh = Mesh::new();
//! mesh.nodes.push(Node::from_coords(1, 0.0, 0.0, 0.0));
//! mesh.nodes.push(Node::from_coords(2, 1.0, 0.0, 0.0));
//! mesh.elements.push(Element::from_raw(1, ElementKind::Line, &[1, 1], &[1, 2]));
//!
//! assert_eq!(mesh.num_nodes(), 2);
//! ```

mod id;
mod reindex;
mod types;

pub use id::{ElementId, MeshId, NodeId};
pub use reindex::{Reindex, ReindexBuilder};
pub use types::{Element, ElementKind, Mesh, Node, PhysicalName};
