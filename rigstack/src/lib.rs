//! rigstack - procedural skinned geometry source
//!
//! Builds a skinned mesh (stacked cubes, each rigged fully to one joint) as
//! the tightly packed vertex and index buffers a host renderer consumes at
//! its frame-sync point.
//!
//! # Modules
//!
//! - [`geometry`] - the [`SkinGeometry`] builder: cube appends, list
//!   mutators, render-sync buffer packing
//! - [`events`] - change notifications for the scene-description layer
//! - [`source`] - the [`GeometrySource`] capability trait a host adapter
//!   consumes

pub mod events;
pub mod geometry;
pub mod source;

pub use events::GeometryEvent;
pub use geometry::SkinGeometry;
pub use source::GeometrySource;

// Re-export the wire contract for host adapters
pub use rigstack_common::{
    Aabb, AttributeSemantic, ComponentType, INFLUENCES_PER_VERTEX, PrimitiveTopology,
    SKINNED_VERTEX_ATTRIBUTES, SkinnedVertex, VERTEX_STRIDE, VertexAttribute,
};
