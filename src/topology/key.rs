use crate::math::Point3;

/// Canonical identity of a point: its exact coordinates.
///
/// Two points are the same vertex iff their keys are equal. Keys compare
/// coordinate bit patterns, with `-0.0` folded onto `+0.0` so that key
/// equality agrees with numeric `==` for every non-NaN coordinate. No
/// tolerance is involved anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey([u64; 3]);

impl PointKey {
    /// Builds the key for a point.
    #[must_use]
    pub fn of(point: &Point3) -> Self {
        Self([
            canonical_bits(point.x),
            canonical_bits(point.y),
            canonical_bits(point.z),
        ])
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Canonical identity of a directed edge: the ordered pair of its
/// endpoint keys.
///
/// Swapped pairs are never equal; they identify the two twin half-edges
/// of one undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    origin: PointKey,
    end: PointKey,
}

impl EdgeKey {
    /// Builds the key for a directed edge `origin -> end`.
    #[must_use]
    pub fn new(origin: PointKey, end: PointKey) -> Self {
        Self { origin, end }
    }

    /// The key of the oppositely directed half-edge.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            origin: self.end,
            end: self.origin,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn equal_coordinates_equal_keys() {
        assert_eq!(PointKey::of(&p(1.0, 2.0, 3.0)), PointKey::of(&p(1.0, 2.0, 3.0)));
        assert_ne!(PointKey::of(&p(1.0, 2.0, 3.0)), PointKey::of(&p(1.0, 2.0, 3.5)));
    }

    #[test]
    fn negative_zero_keys_like_positive_zero() {
        assert_eq!(PointKey::of(&p(-0.0, 0.0, -0.0)), PointKey::of(&p(0.0, 0.0, 0.0)));
    }

    #[test]
    fn no_epsilon_in_identity() {
        let a = PointKey::of(&p(0.1 + 0.2, 0.0, 0.0));
        let b = PointKey::of(&p(0.3, 0.0, 0.0));
        // 0.1 + 0.2 != 0.3 in binary floating point; the keys must differ.
        assert_ne!(a, b);
    }

    #[test]
    fn reversed_edge_key_is_distinct() {
        let a = PointKey::of(&p(0.0, 0.0, 0.0));
        let b = PointKey::of(&p(1.0, 0.0, 0.0));
        let key = EdgeKey::new(a, b);

        assert_ne!(key, key.reversed());
        assert_eq!(key, key.reversed().reversed());
    }
}
