//! Mesh text and file I/O.
//!
//! This module provides the MSH 2.2 codec and functions for loading and
//! saving meshes as files.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | Gmsh MSH 2.2 | `.msh` | ✓ | ✓ | ASCII only |
//!
//! # Usage
//!
//! Text can be decoded and encoded directly:
//!
//! ```
//! use mshkit::io::msh;
//!
//! let mesh = msh::decode("$Nodes\n1\n1 0 0 0\n$EndNodes\n").unwrap();
//! let text = msh::encode(&mesh);
//! assert!(text.starts_with("$MeshFormat\n"));
//! ```
//!
//! Files use automatic format detection:
//!
//! ```no_run
//! use mshkit::io::{load, save};
//!
//! let mesh = load("model.msh").unwrap();
//! save(&mesh, "output.msh").unwrap();
//! ```

pub mod msh;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::Mesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Gmsh MSH 2.2 ASCII format.
    Msh,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "msh" => Some(Format::Msh),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

fn detect(path: &Path) -> Result<Format> {
    Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Load a mesh from a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Msh => msh::load(path),
    }
}

/// Save a mesh to a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn save<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Msh => msh::save(mesh, path),
    }
}
