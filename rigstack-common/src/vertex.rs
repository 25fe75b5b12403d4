//! Packed skinned vertex record
//!
//! GPU-ready vertex layout for skinned geometry. The record is POD; its
//! field offsets are part of the wire contract and the host's attribute
//! declarations are derived from them (see [`crate::attributes`]).

use bytemuck::{Pod, Zeroable};

/// Number of joint/weight influences per vertex.
pub const INFLUENCES_PER_VERTEX: usize = 4;

/// Skinned vertex record (48 bytes, POD)
///
/// # Layout
/// ```text
/// 0x00: position [f32; 3]
/// 0x0C: joints   [i32; 4]  (influence indices into the host skeleton)
/// 0x1C: weights  [f32; 4]  (influence weights, expected to sum to 1.0)
/// 0x2C: padding  f32
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SkinnedVertex {
    pub position: [f32; 3],
    pub joints: [i32; 4],
    pub weights: [f32; 4],
    pub _pad: f32,
}

// Compile-time layout verification
const _: () = assert!(core::mem::size_of::<SkinnedVertex>() == 48);
const _: () = assert!(core::mem::align_of::<SkinnedVertex>() == 4);

/// Byte distance between consecutive vertex records.
pub const VERTEX_STRIDE: u32 = core::mem::size_of::<SkinnedVertex>() as u32;

/// Byte offset of the vertex position within the record.
pub const POSITION_OFFSET: u32 = core::mem::offset_of!(SkinnedVertex, position) as u32;

/// Byte offset of the joint influence indices within the record.
pub const JOINTS_OFFSET: u32 = core::mem::offset_of!(SkinnedVertex, joints) as u32;

/// Byte offset of the influence weights within the record.
pub const WEIGHTS_OFFSET: u32 = core::mem::offset_of!(SkinnedVertex, weights) as u32;
