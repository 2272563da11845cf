use std::collections::VecDeque;

use crate::error::{ConstructionError, Result};
use crate::math::Point3;
use crate::topology::{FaceId, HalfEdgeId, Mesh};

use super::pivot::next_vertex;

/// Computes the convex hull of a point set by gift wrapping.
///
/// Starting from a seed face at the bottom of the point set, the
/// construction repeatedly pivots around open boundary edges, adding one
/// triangular face per pivot, until every half-edge has been paired with
/// its twin and the mesh is closed.
///
/// The input must contain at least four points and is assumed to be in
/// general position (no three collinear, no four coplanar); degenerate
/// inputs are not detected and may yield an invalid mesh.
pub struct GiftWrap {
    points: Vec<Point3>,
}

impl GiftWrap {
    /// Creates a new `GiftWrap` operation over the given points.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Executes the construction, returning the closed hull mesh.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InsufficientInput`] for fewer than
    /// four input points, or [`ConstructionError::NoExtremeVertex`] if a
    /// pivot finds no candidate.
    pub fn execute(&self) -> Result<Mesh> {
        if self.points.len() < 4 {
            return Err(ConstructionError::InsufficientInput {
                required: 4,
                actual: self.points.len(),
            }
            .into());
        }

        let mut mesh = Mesh::new();
        let mut queue: VecDeque<HalfEdgeId> = VecDeque::new();

        let first = self.first_face(&mut mesh)?;
        queue.extend(mesh.face_boundary(first)?);

        while let Some(he) = queue.pop_front() {
            // Closing one face can retroactively pair an edge still
            // sitting in the queue.
            if mesh.half_edge(he)?.twin.is_some() {
                continue;
            }

            let (origin, end) = {
                let data = mesh.half_edge(he)?;
                (data.origin, data.end)
            };
            let origin_point = mesh.vertex(origin)?.point;
            let end_point = mesh.vertex(end)?.point;

            let next = next_vertex(&mut mesh, origin_point, end_point, &self.points)?;

            // Reversed orientation relative to the open edge keeps the
            // new face's boundary winding outward.
            let face = mesh.add_triangle(next, end, origin)?;

            for side in mesh.face_boundary(face)? {
                let key = mesh.half_edge(side)?.key;
                if let Some(twin) = mesh.find_half_edge_by_key(key.reversed()) {
                    mesh.half_edge_mut(side)?.twin = Some(twin);
                    mesh.half_edge_mut(twin)?.twin = Some(side);
                } else {
                    queue.push_back(side);
                }
            }
        }

        Ok(mesh)
    }

    /// Builds the seed face of the hull.
    ///
    /// The seed vertex is the input point with minimal z. Pivoting from
    /// it toward the synthetic target `(1, 0, a.z)` yields the second
    /// hull vertex, and pivoting toward that vertex yields the third.
    fn first_face(&self, mesh: &mut Mesh) -> Result<FaceId> {
        let seed = index_min_z(&self.points);
        let a_point = self.points[seed];
        let a = mesh.add_vertex(a_point);

        let auxiliary = Point3::new(1.0, 0.0, a_point.z);
        let c = next_vertex(mesh, a_point, auxiliary, &self.points)?;
        let c_point = mesh.vertex(c)?.point;
        let b = next_vertex(mesh, a_point, c_point, &self.points)?;

        let face = mesh.add_triangle(a, b, c)?;
        Ok(face)
    }
}

/// Index of the point with the smallest z-coordinate (first on ties).
fn index_min_z(points: &[Point3]) -> usize {
    let mut index_min = 0;
    for (i, point) in points.iter().enumerate().skip(1) {
        if point.z < points[index_min].z {
            index_min = i;
        }
    }
    index_min
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::HullisError;
    use crate::math::Vector3;
    use crate::operations::IsClosed;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn hull(points: Vec<Point3>) -> Mesh {
        GiftWrap::new(points).execute().unwrap()
    }

    /// Centroid of all mesh vertices.
    fn centroid(mesh: &Mesh) -> Point3 {
        let mut sum = Vector3::zeros();
        let mut count = 0.0;
        for (_, vertex) in mesh.vertices() {
            sum += vertex.point.coords;
            count += 1.0;
        }
        Point3::from(sum / count)
    }

    fn tetrahedron_points() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 1.0),
        ]
    }

    fn cube_points() -> Vec<Point3> {
        let mut points = Vec::new();
        for x in [0.0, 1.0] {
            for y in [0.0, 1.0] {
                for z in [0.0, 1.0] {
                    points.push(p(x, y, z));
                }
            }
        }
        points
    }

    #[test]
    fn rejects_insufficient_input() {
        let result = GiftWrap::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]).execute();
        assert!(matches!(
            result,
            Err(HullisError::Construction(
                ConstructionError::InsufficientInput {
                    required: 4,
                    actual: 2,
                }
            ))
        ));
    }

    #[test]
    fn tetrahedron_counts() {
        let mesh = hull(tetrahedron_points());

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.edge_count(), 6);
        assert_eq!(mesh.face_count(), 4);
        assert_eq!(mesh.euler_characteristic(), 2);
    }

    #[test]
    fn tetrahedron_faces_are_input_triangles() {
        let input = tetrahedron_points();
        let mesh = hull(input.clone());

        for (face, _) in mesh.faces() {
            let points = mesh.face_points(face).unwrap();
            assert_eq!(points.len(), 3);
            for point in &points {
                assert!(input.contains(point));
            }
            // Three distinct corners.
            assert_ne!(points[0], points[1]);
            assert_ne!(points[1], points[2]);
            assert_ne!(points[0], points[2]);
        }
    }

    #[test]
    fn cube_counts() {
        let mesh = hull(cube_points());

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.edge_count(), 18);
        assert_eq!(mesh.face_count(), 12);
        assert_eq!(mesh.euler_characteristic(), 2);
    }

    #[test]
    fn twins_are_a_consistent_involution() {
        let mesh = hull(tetrahedron_points());

        for (id, data) in mesh.half_edges() {
            let twin_id = data.twin.unwrap();
            let twin = mesh.half_edge(twin_id).unwrap();
            assert_eq!(twin.twin, Some(id));
            assert_eq!(twin.origin, data.end);
            assert_eq!(twin.end, data.origin);
        }
    }

    #[test]
    fn face_loops_close_with_inverse_prev() {
        let mesh = hull(cube_points());

        for (face, data) in mesh.faces() {
            let boundary = mesh.face_boundary(face).unwrap();
            assert_eq!(boundary.len(), 3);
            assert_eq!(boundary[0], data.outer_component);

            for (i, &he) in boundary.iter().enumerate() {
                let edge = mesh.half_edge(he).unwrap();
                assert_eq!(edge.face, Some(face));
                assert_eq!(edge.next, Some(boundary[(i + 1) % 3]));
                assert_eq!(edge.prev, Some(boundary[(i + 2) % 3]));
            }
        }
    }

    #[test]
    fn result_is_closed() {
        assert!(IsClosed::new().execute(&hull(tetrahedron_points())));
        assert!(IsClosed::new().execute(&hull(cube_points())));
    }

    #[test]
    fn faces_wind_outward() {
        let mesh = hull(tetrahedron_points());
        let center = centroid(&mesh);

        for (face, _) in mesh.faces() {
            let points = mesh.face_points(face).unwrap();
            let normal = (points[1] - points[0]).cross(&(points[2] - points[0]));
            let to_face = points[0] - center;
            assert!(
                normal.dot(&to_face) > 0.0,
                "face normal must point away from the hull center"
            );
        }
    }

    #[test]
    fn interior_point_never_surfaces() {
        let mut points = tetrahedron_points();
        points.push(p(0.1, 0.1, 0.1));
        let mesh = hull(points);

        assert_eq!(mesh.vertex_count(), 4);
        assert!(mesh.find_vertex(&p(0.1, 0.1, 0.1)).is_none());
        for (face, _) in mesh.faces() {
            for point in mesh.face_points(face).unwrap() {
                assert_ne!(point, p(0.1, 0.1, 0.1));
            }
        }
    }

    #[test]
    fn hull_vertices_come_from_the_input() {
        let input = vec![
            p(-1.0, -1.0, -1.0),
            p(1.0, -1.0, -1.0),
            p(0.0, 1.0, -1.0),
            p(0.0, 0.0, 1.0),
            p(0.0, 0.0, -0.5),
        ];
        let mesh = hull(input.clone());

        for (_, vertex) in mesh.vertices() {
            assert!(input.contains(&vertex.point));
        }
    }

    #[test]
    fn independent_runs_share_no_state() {
        let first = hull(tetrahedron_points());
        let second = hull(cube_points());

        assert_eq!(first.vertex_count(), 4);
        assert_eq!(second.vertex_count(), 8);
    }
}
