//! Shared wire-format contract for rigstack geometry
//!
//! This crate defines the byte layout the geometry builder hands to a host
//! renderer:
//!
//! - [`vertex`] - The packed 48-byte skinned vertex record and its field offsets
//! - [`attributes`] - Attribute semantic → byte offset declarations
//! - [`topology`] - Primitive topology declaration
//! - [`bounds`] - Axis-aligned bounds published alongside the vertex data
//!
//! Everything here is plain data shared between the builder crate
//! (`rigstack`) and a host adapter; no builder logic lives in this crate.

pub mod attributes;
pub mod bounds;
pub mod topology;
pub mod vertex;

// Re-export the full contract surface
pub use attributes::{
    AttributeSemantic, ComponentType, SKINNED_VERTEX_ATTRIBUTES, VertexAttribute,
};
pub use bounds::Aabb;
pub use topology::PrimitiveTopology;
pub use vertex::{
    INFLUENCES_PER_VERTEX, JOINTS_OFFSET, POSITION_OFFSET, SkinnedVertex, VERTEX_STRIDE,
    WEIGHTS_OFFSET,
};
