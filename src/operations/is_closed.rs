use crate::error::TopologyError;
use crate::topology::Mesh;

/// Validates that a mesh is a closed, consistent triangulated boundary.
///
/// Checks the invariants a completed hull construction guarantees: every
/// half-edge twinned with its exact reverse, every face boundary a
/// `next`/`prev` 3-cycle stamped with that face, and Euler's formula
/// `V - E + F = 2`.
#[derive(Debug, Default)]
pub struct IsClosed;

impl IsClosed {
    /// Creates a new `IsClosed` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the validation, returning `true` if the mesh is closed.
    #[must_use]
    pub fn execute(&self, mesh: &Mesh) -> bool {
        check(mesh).unwrap_or(false)
    }
}

fn check(mesh: &Mesh) -> Result<bool, TopologyError> {
    if mesh.half_edge_count() % 2 != 0 {
        return Ok(false);
    }

    for (id, data) in mesh.half_edges() {
        let Some(twin_id) = data.twin else {
            return Ok(false);
        };
        let twin = mesh.half_edge(twin_id)?;
        if twin.twin != Some(id) || twin.origin != data.end || twin.end != data.origin {
            return Ok(false);
        }
    }

    for (id, _) in mesh.faces() {
        let boundary = mesh.face_boundary(id)?;
        if boundary.len() != 3 {
            return Ok(false);
        }

        for (i, &he) in boundary.iter().enumerate() {
            let data = mesh.half_edge(he)?;
            if data.face != Some(id)
                || data.next != Some(boundary[(i + 1) % 3])
                || data.prev != Some(boundary[(i + 2) % 3])
            {
                return Ok(false);
            }
        }
    }

    Ok(mesh.euler_characteristic() == 2)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    /// Hand-built tetrahedron: four triangles, twins paired manually.
    fn closed_tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(p(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(p(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(p(0.0, 1.0, 0.0));
        let d = mesh.add_vertex(p(0.0, 0.0, 1.0));

        // Outward-wound boundaries.
        mesh.add_triangle(a, c, b).unwrap();
        mesh.add_triangle(a, b, d).unwrap();
        mesh.add_triangle(b, c, d).unwrap();
        mesh.add_triangle(a, d, c).unwrap();

        let pairs: Vec<_> = mesh
            .half_edges()
            .map(|(id, data)| (id, data.key))
            .collect();
        for (id, key) in pairs {
            let twin = mesh.find_half_edge_by_key(key.reversed()).unwrap();
            mesh.half_edge_mut(id).unwrap().twin = Some(twin);
        }

        mesh
    }

    #[test]
    fn accepts_a_closed_tetrahedron() {
        assert!(IsClosed::new().execute(&closed_tetrahedron()));
    }

    #[test]
    fn rejects_an_empty_mesh() {
        // V - E + F = 0, not 2.
        assert!(!IsClosed::new().execute(&Mesh::new()));
    }

    #[test]
    fn rejects_an_unpaired_boundary() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(p(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(p(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(p(0.0, 1.0, 0.0));
        mesh.add_triangle(a, b, c).unwrap();

        assert!(!IsClosed::new().execute(&mesh));
    }

    #[test]
    fn rejects_a_broken_twin_link() {
        let mut mesh = closed_tetrahedron();
        let (first, _) = mesh.half_edges().next().unwrap();
        mesh.half_edge_mut(first).unwrap().twin = None;

        assert!(!IsClosed::new().execute(&mesh));
    }
}
