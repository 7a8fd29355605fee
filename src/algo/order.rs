//! Element filtering and reordering by kind.
//!
//! Neither operation touches node ids or element ids. Run
//! [`compact`](super::compact::compact) afterwards for dense ids.

use crate::mesh::{ElementKind, Mesh};

/// Stably move elements of the listed kinds to the front.
///
/// Elements are ordered by the position of their kind in `priority`; kinds
/// not listed come last. Elements with the same priority keep their relative
/// order.
///
/// # Example
///
/// ```
/// use mshkit::prelude::*;
/// use mshkit::algo::reorder;
///
/// let mut mesh = Mesh::new();
/// mesh.elements.push(Element::from_raw(1, ElementKind::Point, &[], &[1]));
/// mesh.elements.push(Element::from_raw(2, ElementKind::Triangle, &[], &[1, 2, 3]));
/// mesh.elements.push(Element::from_raw(3, ElementKind::Line, &[], &[1, 2]));
/// mesh.elements.push(Element::from_raw(4, ElementKind::Triangle, &[], &[2, 3, 4]));
///
/// reorder(&mut mesh, &[ElementKind::Triangle]);
/// let order: Vec<i64> = mesh.elements.iter().map(|e| e.id.raw()).collect();
/// assert_eq!(order, vec![2, 4, 1, 3]);
/// ```
pub fn reorder(mesh: &mut Mesh, priority: &[ElementKind]) {
    let rank = |kind: ElementKind| {
        priority
            .iter()
            .position(|&k| k == kind)
            .unwrap_or(priority.len())
    };
    mesh.elements.sort_by_key(|e| rank(e.kind));
}

/// Remove every element whose kind is listed in `excluded`.
///
/// Nodes are left alone, including nodes no remaining element references.
pub fn filter(mesh: &mut Mesh, excluded: &[ElementKind]) {
    mesh.elements.retain(|e| !excluded.contains(&e.kind));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::compact;
    use crate::io::msh;
    use crate::mesh::{Element, Node};
    use crate::testdata::SAMPLE;

    fn kinds(mesh: &Mesh) -> Vec<ElementKind> {
        mesh.elements.iter().map(|e| e.kind).collect()
    }

    fn element_ids(mesh: &Mesh) -> Vec<i64> {
        mesh.elements.iter().map(|e| e.id.raw()).collect()
    }

    #[test]
    fn test_reorder_multiple_priorities() {
        let mut mesh = msh::decode(SAMPLE).unwrap();
        reorder(&mut mesh, &[ElementKind::Triangle, ElementKind::Point]);

        assert_eq!(element_ids(&mesh), vec![7, 8, 9, 10, 1, 2, 3, 4, 5, 6]);
        assert_eq!(mesh.num_nodes(), 5);
    }

    #[test]
    fn test_reorder_empty_priority_keeps_order() {
        let mut mesh = msh::decode(SAMPLE).unwrap();
        let before = mesh.clone();
        reorder(&mut mesh, &[]);
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_reorder_then_compact() {
        let mut mesh = msh::decode(SAMPLE).unwrap();
        reorder(&mut mesh, &[ElementKind::Triangle, ElementKind::Quadrangle]);
        compact(&mut mesh).unwrap();

        assert_eq!(element_ids(&mesh), (1..=10).collect::<Vec<_>>());
        assert!(kinds(&mesh)[..4].iter().all(|&k| k == ElementKind::Triangle));
        // Tags travel with the element.
        assert_eq!(mesh.elements[0].tags, vec![7, 6]);
    }

    #[test]
    fn test_reorder_other_kinds() {
        let mut mesh = Mesh::new();
        mesh.elements
            .push(Element::from_raw(1, ElementKind::Other(9), &[], &[]));
        mesh.elements
            .push(Element::from_raw(2, ElementKind::Line, &[], &[]));
        mesh.elements
            .push(Element::from_raw(3, ElementKind::Other(9), &[], &[]));
        reorder(&mut mesh, &[ElementKind::Other(9)]);
        assert_eq!(element_ids(&mesh), vec![1, 3, 2]);
    }

    #[test]
    fn test_filter_leaves_nodes() {
        let mut mesh = msh::decode(SAMPLE).unwrap();
        filter(&mut mesh, &[ElementKind::Line]);
        assert_eq!(mesh.num_elements(), 7);
        assert_eq!(mesh.num_nodes(), 5);
        assert!(!kinds(&mesh).contains(&ElementKind::Line));
    }

    #[test]
    fn test_filter_then_compact() {
        let mut mesh = msh::decode(SAMPLE).unwrap();
        filter(
            &mut mesh,
            &[ElementKind::Point, ElementKind::Line, ElementKind::Tetrahedron],
        );
        compact(&mut mesh).unwrap();

        assert_eq!(element_ids(&mesh), vec![1, 2, 3, 4]);
        assert!(kinds(&mesh).iter().all(|&k| k == ElementKind::Triangle));
        let node_ids: Vec<i64> = mesh.nodes.iter().map(|n| n.id.raw()).collect();
        assert_eq!(node_ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_orphans_are_kept() {
        let mut mesh = Mesh::new();
        mesh.nodes.push(Node::from_coords(1, 0.0, 0.0, 0.0));
        mesh.nodes.push(Node::from_coords(2, 1.0, 0.0, 0.0));
        mesh.elements
            .push(Element::from_raw(1, ElementKind::Line, &[], &[1, 2]));

        filter(&mut mesh, &[ElementKind::Line]);
        compact(&mut mesh).unwrap();
        assert_eq!(mesh.num_elements(), 0);
        assert_eq!(mesh.num_nodes(), 2);
    }
}
