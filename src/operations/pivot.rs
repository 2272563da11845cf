use crate::error::ConstructionError;
use crate::math::vector_3d::{normalized_or_zero, reject_from};
use crate::math::Point3;
use crate::topology::{Mesh, VertexId};

/// Finds the extreme vertex for the face being wrapped across the
/// directed edge `a -> b`.
///
/// Every candidate displacement from `a` is projected onto the plane
/// perpendicular to the edge direction. A running best is kept: a
/// contender replaces it when the cross product of their projections,
/// dotted with the edge direction, is negative (the contender lies
/// further clockwise viewed along the edge). When that dot product is
/// exactly zero the contender wins iff its projected z-component is
/// smaller. The winner is the point whose supporting half-plane through
/// the edge makes the tightest wrap from the previous face.
///
/// Candidates equal to `a` or `b` (exact coordinate equality) are
/// skipped. The winning point is registered as a vertex if the mesh does
/// not already hold one with its coordinates.
///
/// # Errors
///
/// Returns [`ConstructionError::NoExtremeVertex`] if no candidate
/// survives the equality filter. This cannot happen for inputs with at
/// least four points in general position.
pub fn next_vertex(
    mesh: &mut Mesh,
    a: Point3,
    b: Point3,
    points: &[Point3],
) -> Result<VertexId, ConstructionError> {
    let edge = normalized_or_zero(b - a);

    let mut best: Option<usize> = None;
    for (i, point) in points.iter().enumerate() {
        if *point == a || *point == b {
            continue;
        }

        let Some(best_index) = best else {
            best = Some(i);
            continue;
        };

        let candidate = reject_from(points[best_index] - a, edge);
        let contender = reject_from(*point - a, edge);

        let turn = candidate.cross(&contender).dot(&edge);
        if turn < 0.0 || (turn == 0.0 && contender.z < candidate.z) {
            best = Some(i);
        }
    }

    let index = best.ok_or_else(|| ConstructionError::NoExtremeVertex {
        origin: format!("({}, {}, {})", a.x, a.y, a.z),
        end: format!("({}, {}, {})", b.x, b.y, b.z),
    })?;

    Ok(mesh.add_vertex(points[index]))
}
