//! Tests for the skinned geometry builder

use glam::Vec3;
use rigstack_common::{Aabb, PrimitiveTopology, SkinnedVertex, VERTEX_STRIDE};

use super::SkinGeometry;
use crate::events::GeometryEvent;
use crate::source::GeometrySource;

const CUBE_DIMS: Vec3 = Vec3::new(10.0, 10.0, 10.0);

/// One cube's indices in append order (corner indices before offsetting).
const CUBE_INDICES: [u32; 36] = [
    1, 2, 0, 2, 3, 1, // bottom
    4, 6, 7, 5, 4, 7, // top
    5, 0, 4, 1, 0, 5, // back
    6, 2, 3, 6, 3, 7, // front
    6, 4, 2, 0, 2, 4, // left
    7, 5, 1, 1, 3, 7, // right
];

fn packed_records(geometry: &SkinGeometry) -> Vec<SkinnedVertex> {
    geometry
        .vertex_data()
        .chunks_exact(VERTEX_STRIDE as usize)
        .map(bytemuck::pod_read_unaligned)
        .collect()
}

#[test]
fn test_influence_lists_track_vertex_count() {
    let mut geometry = SkinGeometry::empty();
    for i in 0..3 {
        geometry.add_cube(Vec3::new(0.0, i as f32 * 10.1, 0.0), CUBE_DIMS, &[], &[]);
        let vertices = geometry.positions().len();
        assert_eq!(geometry.joints().len(), 4 * vertices);
        assert_eq!(geometry.weights().len(), 4 * vertices);
    }
}

#[test]
fn test_cube_append_counts() {
    let mut geometry = SkinGeometry::empty();
    geometry.add_cube(Vec3::ZERO, CUBE_DIMS, &[], &[]);
    assert_eq!(geometry.positions().len(), 8);
    assert_eq!(geometry.indices().len(), 36);
    let vertices = geometry.positions().len() as u32;
    assert!(geometry.indices().iter().all(|&index| index < vertices));
}

#[test]
fn test_cube_corner_positions() {
    let mut geometry = SkinGeometry::empty();
    geometry.add_cube(Vec3::ZERO, CUBE_DIMS, &[], &[]);
    // All eight (±5, ±5, ±5) combinations, x fastest, then z, then y
    assert_eq!(geometry.positions()[0], Vec3::new(-5.0, -5.0, -5.0));
    assert_eq!(geometry.positions()[1], Vec3::new(5.0, -5.0, -5.0));
    assert_eq!(geometry.positions()[2], Vec3::new(-5.0, -5.0, 5.0));
    assert_eq!(geometry.positions()[3], Vec3::new(5.0, -5.0, 5.0));
    assert_eq!(geometry.positions()[4], Vec3::new(-5.0, 5.0, -5.0));
    assert_eq!(geometry.positions()[5], Vec3::new(5.0, 5.0, -5.0));
    assert_eq!(geometry.positions()[6], Vec3::new(-5.0, 5.0, 5.0));
    assert_eq!(geometry.positions()[7], Vec3::new(5.0, 5.0, 5.0));
}

#[test]
fn test_cube_winding_is_fixed() {
    let mut geometry = SkinGeometry::empty();
    geometry.add_cube(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 2.0, 2.0), &[], &[]);
    assert_eq!(geometry.indices(), &CUBE_INDICES);
}

#[test]
fn test_multi_cube_indices_concatenate() {
    let mut geometry = SkinGeometry::empty();
    geometry.add_cube(Vec3::ZERO, CUBE_DIMS, &[], &[]);
    geometry.add_cube(Vec3::new(0.0, 10.1, 0.0), CUBE_DIMS, &[], &[]);
    assert_eq!(geometry.positions().len(), 16);
    assert_eq!(geometry.indices().len(), 72);

    let second: Vec<u32> = geometry.indices()[36..].to_vec();
    let expected: Vec<u32> = CUBE_INDICES.iter().map(|corner| corner + 8).collect();
    assert_eq!(second, expected);
    assert!(second.iter().all(|&index| (8..16).contains(&index)));
}

#[test]
fn test_default_binding() {
    let mut geometry = SkinGeometry::empty();
    geometry.add_cube(Vec3::ZERO, CUBE_DIMS, &[], &[]);
    for tuple in geometry.joints().chunks_exact(4) {
        assert_eq!(tuple, &[0, 0, 0, 0]);
    }
    for tuple in geometry.weights().chunks_exact(4) {
        assert_eq!(tuple, &[1.0, 0.0, 0.0, 0.0]);
    }
}

#[test]
fn test_single_joint_binding() {
    let mut geometry = SkinGeometry::empty();
    geometry.add_cube_with_joint(Vec3::ZERO, CUBE_DIMS, 5);
    for tuple in geometry.joints().chunks_exact(4) {
        assert_eq!(tuple, &[5, 0, 0, 0]);
    }
    for tuple in geometry.weights().chunks_exact(4) {
        assert_eq!(tuple, &[1.0, 0.0, 0.0, 0.0]);
    }
}

#[test]
fn test_default_stack() {
    let geometry = SkinGeometry::new();
    assert_eq!(geometry.positions().len(), 24);
    assert_eq!(geometry.indices().len(), 108);
    // One cube per joint, bottom to top
    assert_eq!(geometry.joints()[0], 0);
    assert_eq!(geometry.joints()[8 * 4], 1);
    assert_eq!(geometry.joints()[16 * 4], 2);
    assert!(geometry.vertex_dirty);
    assert!(geometry.index_dirty);
}

#[test]
#[should_panic(expected = "joint/weight count does not match vertex count")]
fn test_mismatched_binding_is_fatal() {
    let mut geometry = SkinGeometry::empty();
    // 3 influence tuples for 8 vertices
    geometry.add_cube(Vec3::ZERO, CUBE_DIMS, &[0; 12], &[1.0; 12]);
}

#[test]
#[should_panic(expected = "joint/weight count does not match vertex count")]
fn test_uneven_binding_is_fatal() {
    let mut geometry = SkinGeometry::empty();
    geometry.add_cube(Vec3::ZERO, CUBE_DIMS, &[0; 32], &[1.0; 16]);
}

#[test]
fn test_sync_packs_records() {
    let mut geometry = SkinGeometry::empty();
    geometry.add_cube_with_joint(Vec3::ZERO, CUBE_DIMS, 2);
    geometry.synchronize();

    assert_eq!(geometry.vertex_data().len(), 8 * VERTEX_STRIDE as usize);
    let records = packed_records(&geometry);
    for (record, position) in records.iter().zip(geometry.positions()) {
        assert_eq!(record.position, position.to_array());
        assert_eq!(record.joints, [2, 0, 0, 0]);
        assert_eq!(record.weights, [1.0, 0.0, 0.0, 0.0]);
    }
}

#[test]
fn test_index_data_is_native_order_bytes() {
    let mut geometry = SkinGeometry::empty();
    geometry.set_indices(vec![1, 258, 70000]);
    geometry.synchronize();

    let mut expected = Vec::new();
    for index in [1u32, 258, 70000] {
        expected.extend_from_slice(&index.to_ne_bytes());
    }
    assert_eq!(geometry.index_data(), expected.as_slice());
}

#[test]
fn test_truncated_joints_zero_fill() {
    let mut geometry = SkinGeometry::empty();
    geometry.add_cube_with_joint(Vec3::ZERO, CUBE_DIMS, 3);
    // Full tuple for vertex 0, half a tuple for vertex 1
    geometry.set_joints(vec![3, 0, 0, 0, 3, 0]);
    geometry.synchronize();

    let records = packed_records(&geometry);
    assert_eq!(records[0].joints, [3, 0, 0, 0]);
    assert_eq!(records[0].weights, [1.0, 0.0, 0.0, 0.0]);
    for record in &records[1..] {
        // Partial or missing tuples pack as zeros; weights stay intact
        assert_eq!(record.joints, [0, 0, 0, 0]);
        assert_eq!(record.weights, [1.0, 0.0, 0.0, 0.0]);
    }
}

#[test]
fn test_truncated_weights_zero_fill() {
    let mut geometry = SkinGeometry::empty();
    geometry.add_cube_with_joint(Vec3::ZERO, CUBE_DIMS, 3);
    geometry.set_weights(vec![1.0, 0.0, 0.0, 0.0]);
    geometry.synchronize();

    let records = packed_records(&geometry);
    assert_eq!(records[0].weights, [1.0, 0.0, 0.0, 0.0]);
    for record in &records[1..] {
        // Zero weights, not the append-time (1,0,0,0) default
        assert_eq!(record.weights, [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(record.joints, [3, 0, 0, 0]);
    }
}

#[test]
fn test_bounds_of_default_stack() {
    let mut geometry = SkinGeometry::new();
    geometry.synchronize();

    let bounds = geometry.bounds();
    assert_eq!(bounds.min, Vec3::new(-5.0, -5.0, -5.0));
    assert_eq!(bounds.max, Vec3::new(5.0, 25.2, 5.0));

    // Exact componentwise fold over all 24 vertices
    let mut expected = Aabb::new();
    for position in geometry.positions() {
        expected.update(*position);
    }
    assert_eq!(bounds, expected);
}

#[test]
fn test_equal_value_set_is_noop() {
    let mut geometry = SkinGeometry::new();
    geometry.synchronize();
    assert!(geometry.take_events().is_empty());

    geometry.set_positions(geometry.positions().to_vec());
    geometry.set_joints(geometry.joints().to_vec());
    geometry.set_weights(geometry.weights().to_vec());
    geometry.set_indices(geometry.indices().to_vec());

    assert!(geometry.take_events().is_empty());
    assert!(!geometry.vertex_dirty);
    assert!(!geometry.index_dirty);
}

#[test]
fn test_effective_set_marks_only_its_buffer() {
    let mut geometry = SkinGeometry::new();
    geometry.synchronize();

    geometry.set_indices(vec![0, 1, 2]);
    assert_eq!(geometry.take_events(), vec![GeometryEvent::IndicesChanged]);
    assert!(geometry.index_dirty);
    assert!(!geometry.vertex_dirty);

    geometry.synchronize();
    assert_eq!(geometry.index_data().len(), 3 * 4);
    // Vertex buffer untouched by an index-only mutation
    assert_eq!(geometry.vertex_data().len(), 24 * VERTEX_STRIDE as usize);
}

#[test]
fn test_events_drain_in_order() {
    let mut geometry = SkinGeometry::new();
    geometry.set_positions(Vec::new());
    geometry.set_weights(Vec::new());
    assert_eq!(
        geometry.take_events(),
        vec![GeometryEvent::PositionsChanged, GeometryEvent::WeightsChanged]
    );
    assert!(geometry.take_events().is_empty());
}

#[test]
fn test_sync_clears_dirty_flags() {
    let mut geometry = SkinGeometry::new();
    geometry.synchronize();
    assert!(!geometry.vertex_dirty);
    assert!(!geometry.index_dirty);
}

#[test]
fn test_empty_geometry_syncs_to_empty_buffers() {
    let mut geometry = SkinGeometry::empty();
    assert!(!geometry.vertex_dirty);
    assert!(!geometry.index_dirty);
    geometry.synchronize();
    assert!(geometry.vertex_data().is_empty());
    assert!(geometry.index_data().is_empty());
    assert!(!geometry.bounds().is_valid());
}

#[test]
fn test_contract_declarations() {
    let geometry = SkinGeometry::new();
    assert_eq!(geometry.vertex_stride(), 48);
    assert_eq!(geometry.topology(), PrimitiveTopology::TriangleList);
    assert_eq!(geometry.attributes().len(), 4);
}
