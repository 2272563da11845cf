use crate::math::vector_3d::{are_collinear, signed_tetra_volume};
use crate::math::Point3;

/// Signed-volume band inside which four points count as coplanar for the
/// purposes of input generation. This is a generation-side filter only;
/// hull construction itself never applies a tolerance.
const COPLANAR_BAND: f64 = 0.5;

/// Whether appending `candidate` to `accepted` keeps the set in general
/// position: no three points exactly collinear and no four points with a
/// signed tetrahedron volume inside the coplanarity band.
///
/// The first two points are always acceptable.
#[must_use]
pub fn preserves(accepted: &[Point3], candidate: &Point3) -> bool {
    if accepted.len() < 2 {
        return true;
    }

    for (i, first) in accepted.iter().enumerate() {
        for second in &accepted[i + 1..] {
            if are_collinear(first, second, candidate) {
                return false;
            }
        }
    }

    for (i, first) in accepted.iter().enumerate() {
        for (j, second) in accepted.iter().enumerate().skip(i + 1) {
            for third in &accepted[j + 1..] {
                let volume = signed_tetra_volume(first, second, third, candidate);
                if (-COPLANAR_BAND..=COPLANAR_BAND).contains(&volume) {
                    return false;
                }
            }
        }
    }

    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn first_two_points_always_pass() {
        assert!(preserves(&[], &p(0.0, 0.0, 0.0)));
        assert!(preserves(&[p(0.0, 0.0, 0.0)], &p(0.0, 0.0, 0.0)));
    }

    #[test]
    fn rejects_exact_collinearity() {
        let accepted = [p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0)];
        assert!(!preserves(&accepted, &p(5.0, 5.0, 5.0)));
    }

    #[test]
    fn rejects_near_coplanar_candidates() {
        let accepted = [p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(0.0, 10.0, 0.0)];
        // Signed tetra volume is 0.1, inside the band.
        assert!(!preserves(&accepted, &p(1.0, 1.0, 0.001)));
    }

    #[test]
    fn accepts_a_clearly_off_plane_candidate() {
        let accepted = [p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(0.0, 10.0, 0.0)];
        assert!(preserves(&accepted, &p(1.0, 1.0, 10.0)));
    }
}
