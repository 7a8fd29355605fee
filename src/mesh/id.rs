//! Id types for mesh records.
//!
//! Nodes and elements are identified by integers chosen by whoever wrote the
//! file. They are not indices: they may be sparse, unsorted, negative, and
//! they collide freely between independently authored meshes. The wrappers
//! here keep node ids and element ids from being mixed up.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait implemented by the id wrappers.
pub trait MeshId: Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Send + Sync + 'static {
    /// Name of the record kind, used in error messages.
    const LABEL: &'static str;

    /// Wrap a raw id.
    fn new(raw: i64) -> Self;

    /// The raw id value.
    fn raw(self) -> i64;
}

/// Id of a [`Node`](super::Node).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct NodeId(i64);

/// Id of an [`Element`](super::Element).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct ElementId(i64);

macro_rules! impl_id_type {
    ($name:ident, $label:literal, $debug:literal) => {
        impl MeshId for $name {
            const LABEL: &'static str = $label;

            #[inline]
            fn new(raw: i64) -> Self {
                Self(raw)
            }

            #[inline]
            fn raw(self) -> i64 {
                self.0
            }
        }

        impl $name {
            /// Wrap a raw id.
            #[inline]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// The raw id value.
            #[inline]
            pub const fn raw(self) -> i64 {
                self.0
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $debug, self.0)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $name {
            fn from(v: i64) -> Self {
                Self(v)
            }
        }
    };
}

impl_id_type!(NodeId, "node", "N");
impl_id_type!(ElementId, "element", "E");
