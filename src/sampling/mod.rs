pub mod general_position;

use crate::error::{Result, SamplingError};
use crate::math::vector_3d::normalized_or_zero;
use crate::math::{Point3, Vector3};

/// Generates `count` random points uniformly inside an axis-aligned box.
///
/// Each coordinate is drawn independently from `[min, max)` on its axis.
/// With general-position filtering enabled, candidates that would create
/// three exactly collinear points or four near-coplanar points are
/// redrawn until `count` points pass; a box too small to ever satisfy
/// the filter will keep redrawing.
pub struct RandomPointsInBox {
    count: usize,
    min: Point3,
    max: Point3,
    general_position: bool,
    seed: Option<u64>,
}

impl RandomPointsInBox {
    /// Creates a new `RandomPointsInBox` operation.
    #[must_use]
    pub fn new(count: usize, min: Point3, max: Point3) -> Self {
        Self {
            count,
            min,
            max,
            general_position: false,
            seed: None,
        }
    }

    /// Enables or disables the general-position filter.
    #[must_use]
    pub fn with_general_position(mut self, general_position: bool) -> Self {
        self.general_position = general_position;
        self
    }

    /// Seeds the generator so the sample reproduces.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Executes the operation, returning the generated points.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidBounds`] if any `min` component
    /// exceeds the corresponding `max` component.
    pub fn execute(&self) -> Result<Vec<Point3>> {
        for (axis, min, max) in [
            ("x", self.min.x, self.max.x),
            ("y", self.min.y, self.max.y),
            ("z", self.min.z, self.max.z),
        ] {
            if min > max {
                return Err(SamplingError::InvalidBounds { axis, min, max }.into());
            }
        }

        let mut rng = make_rng(self.seed);
        let range = self.max - self.min;

        let mut points = Vec::with_capacity(self.count);
        while points.len() < self.count {
            let candidate = Point3::new(
                rng.f64() * range.x + self.min.x,
                rng.f64() * range.y + self.min.y,
                rng.f64() * range.z + self.min.z,
            );

            if !self.general_position || general_position::preserves(&points, &candidate) {
                points.push(candidate);
            }
        }

        Ok(points)
    }
}

/// Generates `count` random points inside a sphere.
///
/// Each point is a uniformly drawn direction (a cube sample normalized
/// onto the unit sphere) scaled by a uniform radius and translated to
/// the center. The same general-position filtering as
/// [`RandomPointsInBox`] applies when enabled.
pub struct RandomPointsInSphere {
    count: usize,
    center: Point3,
    radius: f64,
    general_position: bool,
    seed: Option<u64>,
}

impl RandomPointsInSphere {
    /// Creates a new `RandomPointsInSphere` operation.
    #[must_use]
    pub fn new(count: usize, center: Point3, radius: f64) -> Self {
        Self {
            count,
            center,
            radius,
            general_position: false,
            seed: None,
        }
    }

    /// Enables or disables the general-position filter.
    #[must_use]
    pub fn with_general_position(mut self, general_position: bool) -> Self {
        self.general_position = general_position;
        self
    }

    /// Seeds the generator so the sample reproduces.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Executes the operation, returning the generated points.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidRadius`] if the radius is
    /// negative.
    pub fn execute(&self) -> Result<Vec<Point3>> {
        if self.radius < 0.0 {
            return Err(SamplingError::InvalidRadius(self.radius).into());
        }

        let mut rng = make_rng(self.seed);

        let mut points = Vec::with_capacity(self.count);
        while points.len() < self.count {
            let direction = normalized_or_zero(Vector3::new(
                rng.f64() * 2.0 - 1.0,
                rng.f64() * 2.0 - 1.0,
                rng.f64() * 2.0 - 1.0,
            ));
            let candidate = self.center + direction * (rng.f64() * self.radius);

            if !self.general_position || general_position::preserves(&points, &candidate) {
                points.push(candidate);
            }
        }

        Ok(points)
    }
}

fn make_rng(seed: Option<u64>) -> fastrand::Rng {
    seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed)
}
