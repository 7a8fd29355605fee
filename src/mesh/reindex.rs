//! Two-phase id remapping.
//!
//! Renumbering happens in two steps: a [`ReindexBuilder`] collects the full
//! old → new mapping, then [`ReindexBuilder::finish`] freezes it into a
//! [`Reindex`] that is used to rewrite every reference. Lookups are only
//! available on the frozen map, so no reference can be resolved against a
//! half-built mapping.
//!
//! ```
//! use mshkit::mesh::{NodeId, ReindexBuilder};
//!
//! let mut builder = ReindexBuilder::new();
//! builder.add(NodeId::new(10), NodeId::new(1)).unwrap();
//! builder.add(NodeId::new(30), NodeId::new(2)).unwrap();
//! let reindex = builder.finish();
//!
//! assert_eq!(reindex.get(NodeId::new(30)).unwrap(), NodeId::new(2));
//! assert!(reindex.get(NodeId::new(20)).is_err());
//! ```

use std::collections::btree_map::{BTreeMap, Entry};

use super::id::MeshId;
use crate::error::{MeshError, Result};

/// Insert-only builder for a [`Reindex`].
#[derive(Debug, Clone)]
pub struct ReindexBuilder<I: MeshId> {
    map: BTreeMap<I, I>,
}

impl<I: MeshId> Default for ReindexBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshId> ReindexBuilder<I> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    /// Build the mapping that assigns `start, start + 1, ...` to `ids` in
    /// iteration order.
    ///
    /// Fails with [`MeshError::IdOverflow`] if a new id would exceed
    /// `i64::MAX`.
    pub fn sequential<T>(ids: T, start: i64) -> Result<Self>
    where
        T: IntoIterator<Item = I>,
    {
        let overflow = || MeshError::IdOverflow {
            kind: I::LABEL,
            start,
        };
        let mut builder = Self::new();
        for (offset, old) in ids.into_iter().enumerate() {
            let new = i64::try_from(offset)
                .ok()
                .and_then(|offset| start.checked_add(offset))
                .ok_or_else(overflow)?;
            builder.add(old, I::new(new))?;
        }
        Ok(builder)
    }

    /// Record that `old` maps to `new`.
    ///
    /// Fails with [`MeshError::DuplicateId`] if `old` was already added.
    pub fn add(&mut self, old: I, new: I) -> Result<()> {
        match self.map.entry(old) {
            Entry::Occupied(_) => Err(MeshError::DuplicateId {
                kind: I::LABEL,
                id: old.raw(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(new);
                Ok(())
            }
        }
    }

    /// Number of recorded mappings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Freeze the mapping.
    pub fn finish(self) -> Reindex<I> {
        Reindex { map: self.map }
    }
}

/// Frozen old → new id mapping.
#[derive(Debug, Clone)]
pub struct Reindex<I: MeshId> {
    map: BTreeMap<I, I>,
}

impl<I: MeshId> Reindex<I> {
    /// The new id for `old`.
    ///
    /// Fails with [`MeshError::Lookup`] if `old` was never added.
    #[inline]
    pub fn get(&self, old: I) -> Result<I> {
        self.map.get(&old).copied().ok_or(MeshError::Lookup {
            kind: I::LABEL,
            id: old.raw(),
        })
    }

    /// Map every id in `ids`, failing on the first unmapped one.
    pub fn map_all(&self, ids: &[I]) -> Result<Vec<I>> {
        ids.iter().map(|&id| self.get(id)).collect()
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
