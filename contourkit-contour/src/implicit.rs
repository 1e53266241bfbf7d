//! Implicit functions sampled by the cutter.

use contourkit_core::{Point3d, Vector3d};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A scalar function of position whose zero set is a surface.
pub trait ImplicitFunction: Send + Sync + Debug {
    fn evaluate(&self, point: &Point3d) -> f64;
}

/// Signed distance to a plane, scaled by the length of `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3d,
    pub normal: Vector3d,
}

impl Plane {
    pub fn new(origin: Point3d, normal: Vector3d) -> Self {
        Self { origin, normal }
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Point3d::origin(), Vector3d::z())
    }
}

impl ImplicitFunction for Plane {
    fn evaluate(&self, point: &Point3d) -> f64 {
        self.normal.dot(&(point - self.origin))
    }
}

/// `|x - center|^2 - radius^2`: negative inside, zero on the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Point3d,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point3d, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Point3d::origin(), 0.5)
    }
}

impl ImplicitFunction for Sphere {
    fn evaluate(&self, point: &Point3d) -> f64 {
        (point - self.center).norm_squared() - self.radius * self.radius
    }
}
