//! Attribute semantic → byte offset declarations
//!
//! The host renderer consumes these once, when a geometry is registered, to
//! map its vertex-input semantics onto byte offsets within the packed
//! [`SkinnedVertex`](crate::vertex::SkinnedVertex) record.

use crate::vertex::{JOINTS_OFFSET, POSITION_OFFSET, WEIGHTS_OFFSET};

/// Shader-facing meaning of a declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeSemantic {
    /// Vertex position (3 × F32, record start)
    Position,
    /// Triangle index stream (reads the index buffer, not a vertex field)
    Index,
    /// Joint influence indices (4 × I32)
    Joint,
    /// Influence weights (4 × F32)
    Weight,
}

/// Component type of a declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    F32,
    I32,
    U32,
}

/// A single attribute-to-offset declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub semantic: AttributeSemantic,
    /// Byte offset within the vertex record (0 for the index stream)
    pub offset: u32,
    pub component: ComponentType,
}

/// Creates the position declaration at the record start (F32x3)
const fn attr_position() -> VertexAttribute {
    VertexAttribute {
        semantic: AttributeSemantic::Position,
        offset: POSITION_OFFSET,
        component: ComponentType::F32,
    }
}

/// Creates the index-stream declaration (U32 triangle indices)
const fn attr_index() -> VertexAttribute {
    VertexAttribute {
        semantic: AttributeSemantic::Index,
        offset: 0,
        component: ComponentType::U32,
    }
}

/// Creates the joint-indices declaration (I32x4)
const fn attr_joints() -> VertexAttribute {
    VertexAttribute {
        semantic: AttributeSemantic::Joint,
        offset: JOINTS_OFFSET,
        component: ComponentType::I32,
    }
}

/// Creates the influence-weights declaration (F32x4)
const fn attr_weights() -> VertexAttribute {
    VertexAttribute {
        semantic: AttributeSemantic::Weight,
        offset: WEIGHTS_OFFSET,
        component: ComponentType::F32,
    }
}

/// Attribute declarations for the skinned vertex record.
///
/// Offsets are taken from the record layout in [`crate::vertex`].
pub static SKINNED_VERTEX_ATTRIBUTES: [VertexAttribute; 4] = [
    attr_position(),
    attr_index(),
    attr_joints(),
    attr_weights(),
];
