//! Cube appending
//!
//! Each cube contributes 8 corner vertices and 36 triangle indices (6 faces
//! × 2 triangles), offset by the vertex count at append time so successive
//! cubes concatenate into one shared buffer.

use glam::Vec3;
use rigstack_common::INFLUENCES_PER_VERTEX;
use tracing::{debug, error};

use super::SkinGeometry;

/// Corner offsets in the cube's local frame, scaled componentwise by the
/// cube dimensions. The index order is load-bearing: the face windings
/// below name these corners, and the host culls backfaces based on the
/// resulting winding.
const CORNERS: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
];

/// Two triangles per face, as corner indices into [`CORNERS`].
const FACES: [[u32; 6]; 6] = [
    [1, 2, 0, 2, 3, 1], // bottom
    [4, 6, 7, 5, 4, 7], // top
    [5, 0, 4, 1, 0, 5], // back
    [6, 2, 3, 6, 3, 7], // front
    [6, 4, 2, 0, 2, 4], // left
    [7, 5, 1, 1, 3, 7], // right
];

impl SkinGeometry {
    /// Append a cube spanning `dimensions` around `position` with an
    /// explicit influence binding.
    ///
    /// `joints` and `weights` must each carry one 4-tuple per new vertex
    /// (32 entries for the 8 corners), or both be empty to request the
    /// default binding: full weight (1,0,0,0) on joint 0. Any other shape
    /// is a precondition violation and panics after logging diagnostic
    /// counts.
    ///
    /// Sets both dirty flags unconditionally.
    pub fn add_cube(&mut self, position: Vec3, dimensions: Vec3, joints: &[i32], weights: &[f32]) {
        let index_offset = self.positions.len() as u32;

        let corners = CORNERS.map(|corner| corner * dimensions + position);

        if joints.is_empty() && weights.is_empty() {
            debug!("no influence binding given, defaulting to full weight on joint 0");
            for _ in 0..corners.len() {
                self.joints.extend_from_slice(&[0, 0, 0, 0]);
                self.weights.extend_from_slice(&[1.0, 0.0, 0.0, 0.0]);
            }
        } else if joints.len() == weights.len()
            && joints.len() == corners.len() * INFLUENCES_PER_VERTEX
        {
            self.joints.extend_from_slice(joints);
            self.weights.extend_from_slice(weights);
        } else {
            error!(
                "influence binding mismatch: {} new vertices, {} new indices, {} joints given, {} weights given ({} joints / {} weights accumulated)",
                corners.len(),
                FACES.len() * 6,
                joints.len(),
                weights.len(),
                self.joints.len(),
                self.weights.len(),
            );
            panic!("joint/weight count does not match vertex count");
        }

        self.positions.extend_from_slice(&corners);
        for face in FACES {
            self.indices
                .extend(face.iter().map(|corner| corner + index_offset));
        }

        self.vertex_dirty = true;
        self.index_dirty = true;
    }

    /// Append a cube rigged fully to a single joint: every corner gets the
    /// influence tuple (joint,0,0,0) with weights (1,0,0,0).
    pub fn add_cube_with_joint(&mut self, position: Vec3, dimensions: Vec3, joint: u32) {
        debug!("binding cube to joint {joint}");
        let mut joints = Vec::with_capacity(CORNERS.len() * INFLUENCES_PER_VERTEX);
        let mut weights = Vec::with_capacity(CORNERS.len() * INFLUENCES_PER_VERTEX);
        for _ in 0..CORNERS.len() {
            joints.extend_from_slice(&[joint as i32, 0, 0, 0]);
            weights.extend_from_slice(&[1.0, 0.0, 0.0, 0.0]);
        }
        self.add_cube(position, dimensions, &joints, &weights);
    }
}
