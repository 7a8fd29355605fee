//! Operations that rewrite a mesh in place.
//!
//! This module contains:
//!
//! - **Compaction**: [`compact`] renumbers ids to `1..=N`
//! - **Merging**: [`merge`] appends one mesh onto another without id clashes
//! - **Deduplication**: [`dedupe`] collapses near-coincident nodes
//! - **Ordering**: [`reorder`] and [`filter`] arrange or drop elements by kind
//!
//! All of them keep element → node references consistent: when they
//! succeed, every node id in every element names a node of the mesh.
//! The same operations are available as methods on [`Mesh`].

pub mod compact;
pub mod dedupe;
pub mod merge;
pub mod order;
pub mod progress;

pub use compact::compact;
pub use dedupe::{dedupe, dedupe_with, DedupeOptions};
pub use merge::merge;
pub use order::{filter, reorder};
pub use progress::Progress;

use crate::error::Result;
use crate::mesh::{ElementKind, Mesh};

impl Mesh {
    /// Renumber ids to a dense range. See [`compact()`].
    pub fn compact(&mut self) -> Result<()> {
        compact::compact(self)
    }

    /// Append `source` onto this mesh. See [`merge()`].
    pub fn merge(&mut self, source: &Mesh) -> Result<()> {
        merge::merge(self, source)
    }

    /// Collapse nodes within `tolerance`. See [`dedupe()`].
    pub fn dedupe(&mut self, tolerance: f64) -> Result<()> {
        dedupe::dedupe(self, tolerance)
    }

    /// Move elements of the given kinds to the front. See [`reorder()`].
    pub fn reorder(&mut self, priority: &[ElementKind]) {
        order::reorder(self, priority)
    }

    /// Drop elements of the given kinds. See [`filter()`].
    pub fn filter(&mut self, excluded: &[ElementKind]) {
        order::filter(self, excluded)
    }
}
