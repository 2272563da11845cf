use std::collections::HashMap;

use crate::error::{Result, TopologyError};
use crate::math::vector_3d::normalized_or_zero;
use crate::math::Vector3;
use crate::topology::{Mesh, VertexId};

use super::TriangleMesh;

/// Converts a closed hull mesh into an indexed triangle mesh.
///
/// Each mesh vertex becomes one entry in the vertex table; each face
/// becomes one index triple in its boundary order, so the winding stays
/// counterclockwise seen from outside. Vertex normals accumulate the
/// area-weighted normals of the incident faces and are normalized at the
/// end.
///
/// The input mesh is only read; this is the sole surface the rendering
/// layer consumes.
#[derive(Debug, Default)]
pub struct TessellateHull;

impl TessellateHull {
    /// Creates a new `TessellateHull` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if a face boundary is broken or references
    /// entities missing from the mesh.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self, mesh: &Mesh) -> Result<TriangleMesh> {
        let mut output = TriangleMesh::default();
        let mut index_of: HashMap<VertexId, u32> = HashMap::new();

        for (id, vertex) in mesh.vertices() {
            index_of.insert(id, output.vertices.len() as u32);
            output.vertices.push(vertex.point);
            output.normals.push(Vector3::zeros());
        }

        for (face, _) in mesh.faces() {
            let boundary = mesh.face_boundary(face)?;
            let mut triangle = [0u32; 3];
            let mut corners = [VertexId::default(); 3];
            for (slot, he) in boundary.iter().enumerate().take(3) {
                let origin = mesh.half_edge(*he)?.origin;
                corners[slot] = origin;
                triangle[slot] = index_of
                    .get(&origin)
                    .copied()
                    .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))?;
            }
            output.indices.push(triangle);

            let a = mesh.vertex(corners[0])?.point;
            let b = mesh.vertex(corners[1])?.point;
            let c = mesh.vertex(corners[2])?.point;
            let face_normal = (b - a).cross(&(c - a));
            for index in triangle {
                output.normals[index as usize] += face_normal;
            }
        }

        for normal in &mut output.normals {
            *normal = normalized_or_zero(*normal);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::GiftWrap;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn tetrahedron() -> Mesh {
        GiftWrap::new(vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
        ])
        .execute()
        .unwrap()
    }

    #[test]
    fn one_triangle_per_face_one_entry_per_vertex() {
        let mesh = tetrahedron();
        let tri_mesh = TessellateHull::new().execute(&mesh).unwrap();

        assert_eq!(tri_mesh.vertices.len(), 4);
        assert_eq!(tri_mesh.normals.len(), 4);
        assert_eq!(tri_mesh.indices.len(), 4);
        for triangle in &tri_mesh.indices {
            for &index in triangle {
                assert!((index as usize) < tri_mesh.vertices.len());
            }
        }
    }

    #[test]
    fn triangles_keep_outward_winding() {
        let mesh = tetrahedron();
        let tri_mesh = TessellateHull::new().execute(&mesh).unwrap();

        let center = Point3::from(
            tri_mesh
                .vertices
                .iter()
                .map(|v| v.coords)
                .sum::<crate::math::Vector3>()
                / 4.0,
        );

        for triangle in &tri_mesh.indices {
            let a = tri_mesh.vertices[triangle[0] as usize];
            let b = tri_mesh.vertices[triangle[1] as usize];
            let c = tri_mesh.vertices[triangle[2] as usize];
            let normal = (b - a).cross(&(c - a));
            assert!(normal.dot(&(a - center)) > 0.0);
        }
    }

    #[test]
    fn vertex_normals_are_unit_and_outward() {
        let mesh = tetrahedron();
        let tri_mesh = TessellateHull::new().execute(&mesh).unwrap();

        let center = Point3::from(
            tri_mesh
                .vertices
                .iter()
                .map(|v| v.coords)
                .sum::<crate::math::Vector3>()
                / 4.0,
        );

        for (vertex, normal) in tri_mesh.vertices.iter().zip(&tri_mesh.normals) {
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-12);
            assert!(normal.dot(&(vertex - center)) > 0.0);
        }
    }
}
