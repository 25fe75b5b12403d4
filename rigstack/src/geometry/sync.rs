//! Render-sync buffer packing
//!
//! The [`GeometrySource`] implementation the host adapter drives. Each
//! derived buffer rebuilds only while its dirty flag is set, and always
//! from the full current list state - no history, no incremental diffing.

use bytemuck::cast_slice;
use rigstack_common::{
    Aabb, INFLUENCES_PER_VERTEX, PrimitiveTopology, SKINNED_VERTEX_ATTRIBUTES, SkinnedVertex,
    VERTEX_STRIDE, VertexAttribute,
};
use tracing::debug;

use super::SkinGeometry;
use crate::source::GeometrySource;

impl GeometrySource for SkinGeometry {
    fn synchronize(&mut self) {
        if self.vertex_dirty {
            self.vertex_dirty = false;
            self.rebuild_vertex_data();
        }
        if self.index_dirty {
            self.index_dirty = false;
            self.rebuild_index_data();
        }
    }

    fn vertex_data(&self) -> &[u8] {
        &self.vertex_data
    }

    fn index_data(&self) -> &[u8] {
        &self.index_data
    }

    fn vertex_stride(&self) -> u32 {
        VERTEX_STRIDE
    }

    fn topology(&self) -> PrimitiveTopology {
        PrimitiveTopology::TriangleList
    }

    fn attributes(&self) -> &'static [VertexAttribute] {
        &SKINNED_VERTEX_ATTRIBUTES
    }

    fn bounds(&self) -> Aabb {
        self.bounds
    }
}

impl SkinGeometry {
    /// Pack the parallel lists into 48-byte records and refresh the bounds.
    ///
    /// A vertex whose influence 4-tuple is not fully present in the joint
    /// or weight list packs as all zeros for that field. This is distinct
    /// from the append-time default binding of (1,0,0,0) on joint 0.
    fn rebuild_vertex_data(&mut self) {
        debug!(
            "rebuilding vertex data: {} vertices, {} indices, {} weights, {} joints",
            self.positions.len(),
            self.indices.len(),
            self.weights.len(),
            self.joints.len(),
        );

        let mut bounds = Aabb::new();
        let mut records = Vec::with_capacity(self.positions.len());

        for (i, position) in self.positions.iter().enumerate() {
            let span = INFLUENCES_PER_VERTEX * i..INFLUENCES_PER_VERTEX * (i + 1);

            let mut joints = [0i32; INFLUENCES_PER_VERTEX];
            if self.joints.len() >= span.end {
                joints.copy_from_slice(&self.joints[span.clone()]);
            }

            let mut weights = [0.0f32; INFLUENCES_PER_VERTEX];
            if self.weights.len() >= span.end {
                weights.copy_from_slice(&self.weights[span]);
            }

            bounds.update(*position);

            records.push(SkinnedVertex {
                position: position.to_array(),
                joints,
                weights,
                _pad: 0.0,
            });
        }

        self.vertex_data = cast_slice(&records).to_vec();
        self.bounds = bounds;
    }

    /// Reinterpret the triangle-index list as raw bytes (native order).
    fn rebuild_index_data(&mut self) {
        debug!("rebuilding index data: {} indices", self.indices.len());
        self.index_data = cast_slice(&self.indices).to_vec();
    }
}
