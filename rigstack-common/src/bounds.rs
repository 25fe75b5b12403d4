//! Axis-aligned bounds tracking

use glam::Vec3;

/// Axis-aligned bounding box published to the host with the vertex data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create new bounds initialised to infinity sentinels
    pub fn new() -> Self {
        Self {
            min: Vec3::INFINITY,
            max: Vec3::NEG_INFINITY,
        }
    }

    /// Fold a point into the bounds
    pub fn update(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// World-space extent along each axis
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// True once at least one point has been folded in
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new()
    }
}
