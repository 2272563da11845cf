//! Exact-semantics vector predicates for hull construction.
//!
//! Every comparison in this module is plain floating-point equality.
//! Vertex identity and the pivoting tie-break depend on exact comparison,
//! so no tolerance is applied anywhere in this layer.

use super::{Point3, Vector3};

/// Returns the unit vector in the direction of `v`, or `v` unchanged
/// when its magnitude is exactly zero.
#[must_use]
pub fn normalized_or_zero(v: Vector3) -> Vector3 {
    let mag = v.norm();
    if mag == 0.0 {
        v
    } else {
        v / mag
    }
}

/// Projects `v` onto `axis`: `(v . axis) * axis`.
///
/// `axis` is expected to be unit length; no normalization is performed.
#[must_use]
pub fn project_onto(v: Vector3, axis: Vector3) -> Vector3 {
    v.dot(&axis) * axis
}

/// Component of `v` perpendicular to `axis`: `v - project_onto(v, axis)`.
///
/// With a unit `axis`, this is the projection of `v` onto the plane
/// through the origin with normal `axis`.
#[must_use]
pub fn reject_from(v: Vector3, axis: Vector3) -> Vector3 {
    v - project_onto(v, axis)
}

/// Signed volume (six times) of the tetrahedron `(a, b, c, d)`.
///
/// Positive when `(a, b, c)` winds counterclockwise seen from the side
/// of the plane opposite `d`.
#[must_use]
pub fn signed_tetra_volume(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> f64 {
    // Translate d to the origin and expand the 3x3 determinant.
    let ax = a.x - d.x;
    let ay = a.y - d.y;
    let az = a.z - d.z;
    let bx = b.x - d.x;
    let by = b.y - d.y;
    let bz = b.z - d.z;
    let cx = c.x - d.x;
    let cy = c.y - d.y;
    let cz = c.z - d.z;

    ax * (by * cz - bz * cy) + ay * (bz * cx - bx * cz) + az * (bx * cy - by * cx)
}

/// Exact collinearity test for three points.
///
/// True iff all three 2x2 minors of the displacement vectors `b - a` and
/// `c - a` vanish, i.e. `(b - a) x (c - a)` is exactly the zero vector.
#[must_use]
pub fn are_collinear(a: &Point3, b: &Point3, c: &Point3) -> bool {
    ((c.z - a.z) * (b.y - a.y)) - ((b.z - a.z) * (c.y - a.y)) == 0.0
        && ((b.z - a.z) * (c.x - a.x)) - ((b.x - a.x) * (c.z - a.z)) == 0.0
        && ((b.x - a.x) * (c.y - a.y)) - ((b.y - a.y) * (c.x - a.x)) == 0.0
}

/// Smallest angle between two vectors, in radians.
///
/// Returns `0.0` when either operand is exactly the zero vector. The
/// cosine is clamped to `[-1, 1]` before the inverse cosine so rounding
/// can never push it outside the `acos` domain.
#[must_use]
pub fn angle_between(u: Vector3, v: Vector3) -> f64 {
    if u.x == 0.0 && u.y == 0.0 && u.z == 0.0 {
        return 0.0;
    }
    if v.x == 0.0 && v.y == 0.0 && v.z == 0.0 {
        return 0.0;
    }

    let amt = u.dot(&v) / (u.norm() * v.norm());
    if amt <= -1.0 {
        std::f64::consts::PI
    } else if amt >= 1.0 {
        0.0
    } else {
        amt.acos()
    }
}
