//! Skinned cube-stack geometry builder
//!
//! Accumulates vertex positions, per-vertex joint indices and weights (4
//! influences per vertex) and triangle indices, then packs them into the
//! GPU-ready buffers of `rigstack-common` on demand.
//!
//! The four lists are parallel and index-aligned. Cube appends keep
//! `joints.len() == weights.len() == 4 * positions.len()`; breaking that
//! invariant during an append is fatal. Lists replaced wholesale through
//! the setters are not validated - short influence lists surface as
//! zero-filled tuples when the buffers are next packed (see `sync.rs`).

mod cube;
mod sync;
#[cfg(test)]
mod tests;

use glam::Vec3;
use rigstack_common::Aabb;

use crate::events::GeometryEvent;

/// Procedural skinned geometry: stacked cubes, each rigged to one joint.
///
/// Construction appends cubes; the host drives
/// [`synchronize`](crate::GeometrySource::synchronize) before each frame
/// that might render the geometry. Derived buffers rebuild lazily, gated by
/// two dirty flags (vertex data and index data track their source lists
/// independently).
pub struct SkinGeometry {
    positions: Vec<Vec3>,
    joints: Vec<i32>,
    weights: Vec<f32>,
    indices: Vec<u32>,

    vertex_dirty: bool,
    index_dirty: bool,

    vertex_data: Vec<u8>,
    index_data: Vec<u8>,
    bounds: Aabb,

    events: Vec<GeometryEvent>,
}

impl SkinGeometry {
    /// The default stack: three 10×10×10 cubes along +Y, rigged to joints
    /// 0, 1 and 2. Both buffers start dirty.
    pub fn new() -> Self {
        let mut geometry = Self::empty();
        geometry.add_cube_with_joint(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 10.0, 10.0), 0);
        geometry.add_cube_with_joint(Vec3::new(0.0, 10.1, 0.0), Vec3::new(10.0, 10.0, 10.0), 1);
        geometry.add_cube_with_joint(Vec3::new(0.0, 20.2, 0.0), Vec3::new(10.0, 10.0, 10.0), 2);
        geometry
    }

    /// A geometry with no vertices; compose a scene through the cube
    /// appends or the list setters.
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
            joints: Vec::new(),
            weights: Vec::new(),
            indices: Vec::new(),
            vertex_dirty: false,
            index_dirty: false,
            vertex_data: Vec::new(),
            index_data: Vec::new(),
            bounds: Aabb::new(),
            events: Vec::new(),
        }
    }

    /// Vertex positions, one per vertex
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Joint influence indices, four per vertex
    pub fn joints(&self) -> &[i32] {
        &self.joints
    }

    /// Influence weights, four per vertex
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Triangle indices into the position list
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Replace the position list. No-op when equal to the current value.
    pub fn set_positions(&mut self, positions: Vec<Vec3>) {
        if positions == self.positions {
            return;
        }
        self.positions = positions;
        self.events.push(GeometryEvent::PositionsChanged);
        self.vertex_dirty = true;
    }

    /// Replace the joint influence list. No-op when equal to the current value.
    pub fn set_joints(&mut self, joints: Vec<i32>) {
        if joints == self.joints {
            return;
        }
        self.joints = joints;
        self.events.push(GeometryEvent::JointsChanged);
        self.vertex_dirty = true;
    }

    /// Replace the influence weight list. No-op when equal to the current value.
    pub fn set_weights(&mut self, weights: Vec<f32>) {
        if weights == self.weights {
            return;
        }
        self.weights = weights;
        self.events.push(GeometryEvent::WeightsChanged);
        self.vertex_dirty = true;
    }

    /// Replace the triangle index list. No-op when equal to the current value.
    pub fn set_indices(&mut self, indices: Vec<u32>) {
        if indices == self.indices {
            return;
        }
        self.indices = indices;
        self.events.push(GeometryEvent::IndicesChanged);
        self.index_dirty = true;
    }

    /// Drain pending change events in emission order.
    pub fn take_events(&mut self) -> Vec<GeometryEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for SkinGeometry {
    fn default() -> Self {
        Self::new()
    }
}
