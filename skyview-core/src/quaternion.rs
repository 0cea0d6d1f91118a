//! Device attitude quaternions.
//!
//! Orientation sensors report a unit quaternion `{x, y, z, w}` that rotates the
//! device frame into a fixed world frame (East-North-Up). Sensor output is
//! only approximately normalized; every function here accepts near-unit input
//! and degrades in accuracy, never in validity, as the norm drifts.
//!
//! The quantity the sky math needs is where the device's +Z axis ends up:
//!
//! ```text
//! v = ( 2(xz + wy),  2(yz - wx),  1 - 2(x² + y²) )
//! ```
//!
//! which is the third column of the equivalent rotation matrix. For a unit
//! quaternion this equals `q.rotate(Vector3::z_axis())`.
//!
//! ```
//! use skyview_core::{Quaternion, Vector3};
//!
//! let q = Quaternion::identity();
//! assert_eq!(q.pointing_vector(), Vector3::z_axis());
//! ```

use crate::errors::{SkyError, SkyResult};
use crate::vector3::Vector3;

const DEGENERATE_NORM: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Widens single-precision sensor components.
    pub fn from_f32(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::new(x as f64, y as f64, z as f64, w as f64)
    }

    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Rotation of `angle_rad` about `axis` (normalized internally).
    pub fn from_axis_angle(axis: Vector3, angle_rad: f64) -> Self {
        let axis = axis.normalize();
        let (s, c) = libm::sincos(angle_rad / 2.0);
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.norm_squared())
    }

    pub fn is_unit(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() <= tolerance
    }

    /// Scales to unit norm. Fails for a (near) zero quaternion.
    pub fn normalized(&self) -> SkyResult<Self> {
        let n = self.norm();
        if !n.is_finite() || n < DEGENERATE_NORM {
            return Err(SkyError::degenerate_quaternion(n));
        }
        Ok(Self::new(self.x / n, self.y / n, self.z / n, self.w / n))
    }

    /// Hamilton product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }

    /// Rotates `v` by this quaternion, assuming unit norm.
    pub fn rotate(&self, v: Vector3) -> Vector3 {
        let u = Vector3::new(self.x, self.y, self.z);
        let uv = u.cross(&v);
        let uuv = u.cross(&uv);
        v + uv * (2.0 * self.w) + uuv * 2.0
    }

    /// The device +Z axis expressed in the world frame.
    pub fn pointing_vector(&self) -> Vector3 {
        let Self { x, y, z, w } = *self;
        Vector3::new(
            2.0 * (x * z + w * y),
            2.0 * (y * z - w * x),
            1.0 - 2.0 * (x * x + y * y),
        )
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from(q: [f32; 4]) -> Self {
        Self::from_f32(q[0], q[1], q[2], q[3])
    }
}
