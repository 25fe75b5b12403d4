//! Geometry change events
//!
//! Change notifications emitted by the list mutators, for the declarative
//! scene-description layer that binds to the geometry's list properties.

/// Notification that one of the observable list properties was replaced
///
/// Emitted only for effective mutations: setting a list to a value equal to
/// the current one produces no event. Drained in emission order via
/// [`SkinGeometry::take_events`](crate::SkinGeometry::take_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryEvent {
    /// The vertex position list was replaced
    PositionsChanged,
    /// The joint influence list was replaced
    JointsChanged,
    /// The influence weight list was replaced
    WeightsChanged,
    /// The triangle index list was replaced
    IndicesChanged,
}
