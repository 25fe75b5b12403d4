//! Builds the default cube stack and drives it through frame syncs, the way
//! a host adapter would.
//!
//! Run with `RUST_LOG=debug` to see the per-sync diagnostics.

use rigstack::{GeometrySource, SkinGeometry};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut geometry = SkinGeometry::new();
    geometry.synchronize();

    println!("vertices:     {}", geometry.positions().len());
    println!("triangles:    {}", geometry.indices().len() / 3);
    println!(
        "vertex bytes: {} (stride {})",
        geometry.vertex_data().len(),
        geometry.vertex_stride()
    );
    println!("index bytes:  {}", geometry.index_data().len());

    let bounds = geometry.bounds();
    println!("bounds min:   {:?}", bounds.min);
    println!("bounds max:   {:?}", bounds.max);

    for attribute in geometry.attributes() {
        println!(
            "attribute:    {:?} ({:?}) at byte {}",
            attribute.semantic, attribute.component, attribute.offset
        );
    }

    // Re-rig the top cube from joint 2 onto joint 1 and sync again; only the
    // vertex buffer rebuilds, the index buffer stays cached.
    let mut joints = geometry.joints().to_vec();
    for tuple in joints[2 * 8 * 4..].chunks_mut(4) {
        tuple[0] = 1;
    }
    geometry.set_joints(joints);

    for event in geometry.take_events() {
        println!("event:        {event:?}");
    }
    geometry.synchronize();
    println!("re-rigged top cube onto joint 1");
}
