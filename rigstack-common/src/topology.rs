//! Primitive topology declaration

/// How the host assembles the index stream into primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrimitiveTopology {
    PointList,
    LineList,
    LineStrip,
    /// Every three indices form an independent triangle
    #[default]
    TriangleList,
    TriangleStrip,
}
