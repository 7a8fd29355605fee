//! Merging of coincident nodes.
//!
//! Nodes closer than a tolerance are collapsed one pair at a time. Each pass
//! scans the pairs `(i, j)` with `i < j` in order, takes the first pair within
//! tolerance, points element references from node `i` to node `j`, removes
//! node `i`, and starts over. The mesh is compacted at the end.
//!
//! Only the *first* occurrence of node `i` in each element is rewritten. An
//! element that lists the same node twice therefore keeps a stale reference,
//! and the final compaction reports it as a lookup error.
//!
//! # Example
//!
//! ```
//! use mshkit::prelude::*;
//! use mshkit::algo::dedupe;
//!
//! let mut mesh = Mesh::new();
//! mesh.nodes.push(Node::from_coords(1, 0.0, 0.0, 0.0));
//! mesh.nodes.push(Node::from_coords(2, 1.0, 0.0, 0.0));
//! mesh.nodes.push(Node::from_coords(3, 1.0, 0.0, 1e-9));
//! mesh.elements.push(Element::from_raw(1, ElementKind::Line, &[], &[1, 2]));
//! mesh.elements.push(Element::from_raw(2, ElementKind::Line, &[], &[3, 1]));
//!
//! dedupe(&mut mesh, 1e-6).unwrap();
//! assert_eq!(mesh.num_nodes(), 2);
//! assert_eq!(mesh.elements[1].node_ids, vec![NodeId::new(2), NodeId::new(1)]);
//! ```

use log::debug;
use nalgebra::distance;
use rayon::prelude::*;

use super::compact::compact;
use super::Progress;
use crate::error::Result;
use crate::mesh::{Mesh, Node};

/// Tolerance used when a tolerance of exactly zero is requested.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Upper bound on the number of passes (and so on the number of merged nodes).
pub const DEFAULT_MAX_PASSES: usize = 1000;

/// Options for [`dedupe_with`].
#[derive(Debug, Clone)]
pub struct DedupeOptions {
    /// Nodes at distance `<= tolerance` are merged.
    /// Negative disables merging; zero means [`DEFAULT_TOLERANCE`].
    pub tolerance: f64,

    /// Maximum number of scan passes. Each pass merges at most one pair.
    pub max_passes: usize,

    /// Whether to scan for pairs in parallel (default: true).
    /// The pair found is the same either way.
    pub parallel: bool,

    /// Called once per pass.
    pub progress: Progress,
}

impl Default for DedupeOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_passes: DEFAULT_MAX_PASSES,
            parallel: true,
            progress: Progress::none(),
        }
    }
}

impl DedupeOptions {
    /// Set the merge tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the maximum number of passes.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Use single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set a progress callback.
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }
}

/// Merge nodes closer than `tolerance`, then compact the mesh.
///
/// Shorthand for [`dedupe_with`] with default options and the given
/// tolerance.
pub fn dedupe(mesh: &mut Mesh, tolerance: f64) -> Result<()> {
    dedupe_with(mesh, &DedupeOptions::default().with_tolerance(tolerance))
}

/// Merge nodes closer than `options.tolerance`, then compact the mesh.
///
/// A negative tolerance returns immediately without touching the mesh
/// (no compaction either). The final compaction fails if an element is left
/// referencing a removed node; nodes merged up to that point stay merged.
pub fn dedupe_with(mesh: &mut Mesh, options: &DedupeOptions) -> Result<()> {
    if options.tolerance < 0.0 {
        return Ok(());
    }
    let tolerance = if options.tolerance == 0.0 {
        DEFAULT_TOLERANCE
    } else {
        options.tolerance
    };

    let mut merged = 0;
    for pass in 0..options.max_passes {
        options
            .progress
            .report(pass, options.max_passes, "merging coincident nodes");

        let Some((i, j)) = find_close_pair(&mesh.nodes, tolerance, options.parallel) else {
            break;
        };
        let from = mesh.nodes[i].id;
        let to = mesh.nodes[j].id;

        for element in &mut mesh.elements {
            if let Some(slot) = element.node_ids.iter_mut().find(|id| **id == from) {
                *slot = to;
            }
        }
        mesh.nodes.remove(i);
        merged += 1;
    }

    debug!(
        "merged {} nodes within {} ({} remain)",
        merged,
        tolerance,
        mesh.nodes.len()
    );
    compact(mesh)
}

/// First pair `(i, j)`, `i < j`, in scan order with distance within tolerance.
fn find_close_pair(nodes: &[Node], tolerance: f64, parallel: bool) -> Option<(usize, usize)> {
    let partner = |i: usize| {
        let p = &nodes[i].position;
        (i + 1..nodes.len())
            .find(|&j| distance(p, &nodes[j].position) <= tolerance)
            .map(|j| (i, j))
    };

    if parallel {
        (0..nodes.len()).into_par_iter().find_map_first(partner)
    } else {
        (0..nodes.len()).find_map(partner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::algo::merge;
    use crate::error::MeshError;
    use crate::io::msh;
    use crate::mesh::{Element, ElementKind, NodeId};
    use crate::testdata::SAMPLE;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn ids(mesh: &Mesh) -> Vec<i64> {
        mesh.nodes.iter().map(|n| n.id.raw()).collect()
    }

    /// Three well separated clusters of jittered nodes, one element per node.
    fn clustered_mesh() -> Mesh {
        let centers = [(0.0, 0.0, 0.0), (10.0, 0.0, 0.0), (0.0, 10.0, 5.0)];
        let jitter = [0.0, 1e-3, -2e-3, 4e-3];
        let mut mesh = Mesh::new();
        let mut id = 1;
        for &(x, y, z) in &centers {
            for &d in &jitter {
                mesh.nodes.push(Node::from_coords(id, x + d, y - d, z));
                mesh.elements
                    .push(Element::from_raw(id, ElementKind::Point, &[1], &[id]));
                id += 1;
            }
        }
        mesh
    }

    #[test]
    fn test_negative_tolerance_is_noop() {
        let mut mesh = Mesh::new();
        mesh.nodes.push(Node::from_coords(10, 0.0, 0.0, 0.0));
        mesh.nodes.push(Node::from_coords(20, 0.0, 0.0, 0.0));
        let before = mesh.clone();

        dedupe(&mut mesh, -1.0).unwrap();
        assert_eq!(mesh, before);
    }

    #[test]
    fn test_zero_tolerance_merges_exact_duplicates() {
        let mut mesh = Mesh::new();
        mesh.nodes.push(Node::from_coords(1, 1.0, 2.0, 3.0));
        mesh.nodes.push(Node::from_coords(2, 1.0, 2.0, 3.0));
        mesh.nodes.push(Node::from_coords(3, 1.0, 2.0, 3.1));

        dedupe(&mut mesh, 0.0).unwrap();
        assert_eq!(mesh.num_nodes(), 2);
        assert_eq!(ids(&mesh), vec![1, 2]);
    }

    #[test]
    fn test_later_node_survives() {
        let mut mesh = Mesh::new();
        mesh.nodes.push(Node::from_coords(1, 0.0, 0.0, 0.0));
        mesh.nodes.push(Node::from_coords(2, 5.0, 0.0, 0.0));
        mesh.nodes.push(Node::from_coords(3, 0.0, 0.0, 1e-9));
        mesh.elements
            .push(Element::from_raw(1, ElementKind::Triangle, &[], &[1, 2, 3]));

        dedupe(&mut mesh, 1e-6).unwrap();

        assert_eq!(mesh.num_nodes(), 2);
        assert_eq!(mesh.nodes[1].position.z, 1e-9);
        assert_eq!(
            mesh.elements[0].node_ids,
            vec![NodeId::new(2), NodeId::new(1), NodeId::new(2)]
        );
    }

    #[test]
    fn test_only_first_occurrence_is_rewritten() {
        let mut mesh = Mesh::new();
        mesh.nodes.push(Node::from_coords(1, 0.0, 0.0, 0.0));
        mesh.nodes.push(Node::from_coords(2, 0.0, 0.0, 0.0));
        mesh.elements
            .push(Element::from_raw(1, ElementKind::Line, &[], &[1, 1]));

        let err = dedupe(&mut mesh, 0.0).unwrap_err();
        assert!(matches!(err, MeshError::Lookup { kind: "node", id: 1 }));
        // The merge itself was applied before compaction failed.
        assert_eq!(mesh.num_nodes(), 1);
        assert_eq!(mesh.elements[0].node_ids, vec![NodeId::new(2), NodeId::new(1)]);
    }

    #[test]
    fn test_cluster_count() {
        init_logger();
        let mut mesh = clustered_mesh();
        dedupe(&mut mesh, 0.1).unwrap();

        assert_eq!(mesh.num_nodes(), 3);
        assert_eq!(ids(&mesh), vec![1, 2, 3]);
        assert_eq!(mesh.num_elements(), 12);
        // The last node of each cluster is the one kept.
        assert_eq!(mesh.nodes[0].position.x, 4e-3);
        for element in &mesh.elements {
            assert!(mesh.find_node(element.node_ids[0]).is_some());
        }
    }

    #[test]
    fn test_max_passes_caps_merges() {
        let mut mesh = Mesh::new();
        for id in 1..=5 {
            mesh.nodes.push(Node::from_coords(id, 0.0, 0.0, 0.0));
        }
        let options = DedupeOptions::default().with_max_passes(2);
        dedupe_with(&mut mesh, &options).unwrap();
        assert_eq!(mesh.num_nodes(), 3);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut parallel = clustered_mesh();
        let mut sequential = clustered_mesh();

        dedupe_with(&mut parallel, &DedupeOptions::default().with_tolerance(0.1)).unwrap();
        dedupe_with(
            &mut sequential,
            &DedupeOptions::default().with_tolerance(0.1).sequential(),
        )
        .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_progress_reported_per_pass() {
        let passes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&passes);
        let options = DedupeOptions::default()
            .with_tolerance(0.1)
            .with_progress(Progress::new(move |_, _, _| {
                counter.fetch_add(1, Ordering::Relaxed);
            }));

        let mut mesh = clustered_mesh();
        dedupe_with(&mut mesh, &options).unwrap();
        // Nine merges plus the pass that finds nothing.
        assert_eq!(passes.load(Ordering::Relaxed), 10);
    }

    #[test]
    fn test_dedupe_undoes_self_merge() {
        let original = msh::decode(SAMPLE).unwrap();
        let mut mesh = original.clone();
        merge(&mut mesh, &original).unwrap();
        assert_eq!(mesh.num_nodes(), 10);

        dedupe(&mut mesh, 0.0).unwrap();
        assert_eq!(mesh.num_nodes(), 5);
        assert_eq!(mesh.num_elements(), 20);
        assert_eq!(mesh.nodes, original.nodes);

        // Both copies of every element now share the same nodes.
        for (a, b) in mesh.elements[..10].iter().zip(&mesh.elements[10..]) {
            assert_eq!(a.node_ids, b.node_ids);
        }
    }
}
