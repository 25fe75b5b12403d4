//! Host-facing geometry capability
//!
//! A host adapter consumes geometry through this trait rather than the
//! geometry inheriting from an engine base type. The adapter decides how to
//! upload and draw; the geometry only describes its buffers.

use rigstack_common::{Aabb, PrimitiveTopology, VertexAttribute};

/// A source of packed geometry data, consumed by a host renderer adapter.
///
/// The host calls [`synchronize`](GeometrySource::synchronize) at its
/// render-sync point, once per frame that might render this geometry (never
/// concurrently with property mutation), then reads whichever accessors it
/// needs. Accessors return cached data and are only guaranteed fresh after
/// a `synchronize` call.
pub trait GeometrySource {
    /// Rebuild whatever derived buffers are stale. Cheap when nothing changed.
    fn synchronize(&mut self);

    /// Packed vertex records, [`vertex_stride`](GeometrySource::vertex_stride) bytes each
    fn vertex_data(&self) -> &[u8];

    /// Triangle indices as raw bytes (4 bytes per index, native order)
    fn index_data(&self) -> &[u8];

    /// Byte distance between consecutive vertex records
    fn vertex_stride(&self) -> u32;

    /// How the index stream assembles into primitives
    fn topology(&self) -> PrimitiveTopology;

    /// Attribute-to-offset declarations for the vertex record
    fn attributes(&self) -> &'static [VertexAttribute];

    /// Axis-aligned bounds from the most recent vertex rebuild
    fn bounds(&self) -> Aabb;
}
