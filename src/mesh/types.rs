//! Mesh records and the [`Mesh`] aggregate.
//!
//! A [`Mesh`] is three ordered lists. Elements refer to nodes only through
//! [`NodeId`] values, never through positions or references, so a mesh can be
//! cloned or merged without aliasing concerns.
//!
//! The one invariant the mutating operations maintain is that every node id
//! listed by an element resolves to exactly one node of the same mesh.

use nalgebra::Point3;

use super::id::{ElementId, NodeId};

/// Kind of a geometric element, with its MSH type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 1-node point (code 15).
    Point,
    /// 2-node line (code 1).
    Line,
    /// 3-node triangle (code 2).
    Triangle,
    /// 4-node quadrangle (code 3).
    Quadrangle,
    /// 4-node tetrahedron (code 4).
    Tetrahedron,
    /// Any other type code, kept as read.
    Other(i64),
}

impl ElementKind {
    /// The MSH element type code.
    pub fn code(self) -> i64 {
        match self {
            ElementKind::Point => 15,
            ElementKind::Line => 1,
            ElementKind::Triangle => 2,
            ElementKind::Quadrangle => 3,
            ElementKind::Tetrahedron => 4,
            ElementKind::Other(code) => code,
        }
    }

    /// Map an MSH element type code to a kind.
    pub fn from_code(code: i64) -> Self {
        match code {
            15 => ElementKind::Point,
            1 => ElementKind::Line,
            2 => ElementKind::Triangle,
            3 => ElementKind::Quadrangle,
            4 => ElementKind::Tetrahedron,
            other => ElementKind::Other(other),
        }
    }
}

/// A physical group label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalName {
    /// Dimension of the group (0 = points, 1 = curves, ...).
    pub dimension: i64,
    /// Physical tag.
    pub tag: i64,
    /// Label, without the surrounding quotes.
    pub name: String,
}

impl PhysicalName {
    /// Create a new physical name.
    pub fn new<S: Into<String>>(dimension: i64, tag: i64, name: S) -> Self {
        Self {
            dimension,
            tag,
            name: name.into(),
        }
    }
}

/// A node: an id and a position.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Node id.
    pub id: NodeId,
    /// The 3D position of this node.
    pub position: Point3<f64>,
}

impl Node {
    /// Create a new node.
    pub fn new(id: NodeId, position: Point3<f64>) -> Self {
        Self { id, position }
    }

    /// Create a new node from a raw id and coordinates.
    pub fn from_coords(id: i64, x: f64, y: f64, z: f64) -> Self {
        Self::new(NodeId::new(id), Point3::new(x, y, z))
    }
}

/// A geometric element referencing nodes by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element id.
    pub id: ElementId,
    /// Element kind.
    pub kind: ElementKind,
    /// Integer tags (physical tag, elementary tag, ...).
    pub tags: Vec<i64>,
    /// Referenced node ids, in local winding order.
    pub node_ids: Vec<NodeId>,
}

impl Element {
    /// Create a new element.
    pub fn new(id: ElementId, kind: ElementKind, tags: Vec<i64>, node_ids: Vec<NodeId>) -> Self {
        Self {
            id,
            kind,
            tags,
            node_ids,
        }
    }

    /// Create a new element from raw ids.
    pub fn from_raw(id: i64, kind: ElementKind, tags: &[i64], node_ids: &[i64]) -> Self {
        Self::new(
            ElementId::new(id),
            kind,
            tags.to_vec(),
            node_ids.iter().copied().map(NodeId::new).collect(),
        )
    }
}

/// A mesh: physical names, nodes and elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Physical group labels.
    pub physical_names: Vec<PhysicalName>,
    /// All nodes in the mesh.
    pub nodes: Vec<Node>,
    /// All elements in the mesh.
    pub elements: Vec<Element>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of physical names.
    #[inline]
    pub fn num_physical_names(&self) -> usize {
        self.physical_names.len()
    }

    /// Number of nodes.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements.
    #[inline]
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Largest node id, or 0 if there are no nodes.
    pub fn max_node_id(&self) -> NodeId {
        self.nodes.iter().map(|n| n.id).max().unwrap_or_default()
    }

    /// Largest element id, or 0 if there are no elements.
    pub fn max_element_id(&self) -> ElementId {
        self.elements.iter().map(|e| e.id).max().unwrap_or_default()
    }

    /// Position of the node with the given id in [`Mesh::nodes`].
    ///
    /// Tries a binary search first, which finds the node whenever the node
    /// list is sorted by id (always true right after compaction or merge).
    /// If the candidate does not match, falls back to a linear scan so that
    /// unsorted lists are still searched correctly.
    ///
    /// # Example
    ///
    /// ```
    /// use mshkit::prelude::*;
    ///
    /// let mut mesh = Mesh::new();
    /// for id in [1, 2, 4, 5] {
    ///     mesh.nodes.push(Node::from_coords(id, 0.0, 0.0, id as f64));
    /// }
    /// assert_eq!(mesh.find_node(NodeId::new(3)), None);
    /// assert_eq!(mesh.find_node(NodeId::new(5)), Some(3));
    /// ```
    pub fn find_node(&self, id: NodeId) -> Option<usize> {
        let candidate = self.nodes.partition_point(|n| n.id < id);
        if self.nodes.get(candidate).is_some_and(|n| n.id == id) {
            return Some(candidate);
        }
        self.nodes.iter().position(|n| n.id == id)
    }

    /// The node with the given id, if any.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.find_node(id).map(|i| &self.nodes[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_nodes(ids: &[i64]) -> Mesh {
        let mut mesh = Mesh::new();
        for &id in ids {
            mesh.nodes.push(Node::from_coords(id, id as f64, 0.0, 0.0));
        }
        mesh
    }

    #[test]
    fn test_kind_codes() {
        for kind in [
            ElementKind::Point,
            ElementKind::Line,
            ElementKind::Triangle,
            ElementKind::Quadrangle,
            ElementKind::Tetrahedron,
        ] {
            assert_eq!(ElementKind::from_code(kind.code()), kind);
        }
        assert_eq!(ElementKind::Point.code(), 15);
        assert_eq!(ElementKind::from_code(9), ElementKind::Other(9));
        assert_eq!(ElementKind::Other(9).code(), 9);
    }

    #[test]
    fn test_max_ids() {
        let mesh = Mesh::new();
        assert_eq!(mesh.max_node_id(), NodeId::new(0));
        assert_eq!(mesh.max_element_id(), ElementId::new(0));

        let mut mesh = sparse_nodes(&[4, 9, 2]);
        mesh.elements
            .push(Element::from_raw(12, ElementKind::Point, &[], &[9]));
        mesh.elements
            .push(Element::from_raw(3, ElementKind::Point, &[], &[4]));
        assert_eq!(mesh.max_node_id(), NodeId::new(9));
        assert_eq!(mesh.max_element_id(), ElementId::new(12));
    }

    #[test]
    fn test_find_node_sorted_with_gap() {
        let mesh = sparse_nodes(&[1, 2, 4, 5]);
        assert_eq!(mesh.find_node(NodeId::new(3)), None);
        assert_eq!(mesh.find_node(NodeId::new(5)), Some(3));
        assert_eq!(mesh.find_node(NodeId::new(1)), Some(0));
        assert_eq!(mesh.find_node(NodeId::new(10000)), None);
    }

    #[test]
    fn test_find_node_unsorted_falls_back() {
        let mesh = sparse_nodes(&[7, 3, 9, 1]);
        assert_eq!(mesh.find_node(NodeId::new(1)), Some(3));
        assert_eq!(mesh.find_node(NodeId::new(7)), Some(0));
        assert_eq!(mesh.find_node(NodeId::new(9)), Some(2));
        assert_eq!(mesh.find_node(NodeId::new(4)), None);
        assert_eq!(mesh.node(NodeId::new(3)).map(|n| n.position.x), Some(3.0));
    }

    #[test]
    fn test_find_node_empty() {
        assert_eq!(Mesh::new().find_node(NodeId::new(1)), None);
    }
}
