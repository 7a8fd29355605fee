//! Mesh generation hook.
//!
//! Turning a geometry description into MSH text is the job of an external
//! mesher. This crate does not run one; it only defines the [`Generator`]
//! seam and decodes whatever text comes back. Anything a process-backed
//! implementation needs (executable path, command-line flags, scratch
//! directory) belongs to that implementation's own fields.
//!
//! Closures work as generators:
//!
//! ```
//! use mshkit::generate::Generator;
//! use mshkit::mesh::Mesh;
//!
//! let fixed = |_geometry: &str| -> Result<String, std::io::Error> {
//!     Ok("$Nodes\n1\n1 0 0 0\n$EndNodes\n".to_string())
//! };
//! let mesh = Mesh::from_geometry(&fixed, "Point(1) = {0, 0, 0};").unwrap();
//! assert_eq!(mesh.num_nodes(), 1);
//! ```

use log::debug;

use crate::error::{MeshError, Result};
use crate::io::msh;
use crate::mesh::Mesh;

/// Something that turns a geometry description into MSH 2.2 text.
pub trait Generator {
    /// Error reported by the generator.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produce mesh text for `geometry`.
    fn generate(&self, geometry: &str) -> std::result::Result<String, Self::Error>;
}

impl<F, E> Generator for F
where
    F: Fn(&str) -> std::result::Result<String, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn generate(&self, geometry: &str) -> std::result::Result<String, E> {
        self(geometry)
    }
}

impl Mesh {
    /// Run `generator` on `geometry` and decode its output.
    ///
    /// A generator failure is returned as [`MeshError::Generate`] with the
    /// generator's error as its source. Malformed output fails like
    /// [`msh::decode`].
    pub fn from_geometry<G: Generator + ?Sized>(generator: &G, geometry: &str) -> Result<Self> {
        let text = generator
            .generate(geometry)
            .map_err(|e| MeshError::Generate(Box::new(e)))?;
        debug!("generator returned {} bytes of mesh text", text.len());
        msh::decode(&text)
    }
}
