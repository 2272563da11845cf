mod tessellate_hull;

pub use tessellate_hull::TessellateHull;

use crate::math::{Point3, Vector3};

/// An indexed triangle mesh, ready for a renderer.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}
