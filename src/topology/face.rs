use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the mesh.
    pub struct FaceId;
}

/// Data associated with a mesh face.
///
/// Walking `next` from `outer_component` until it repeats traces the face
/// boundary counterclockwise when viewed from outside the solid, so the
/// face normal given by the right-hand rule points outward.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Monotonically assigned label, unique within the mesh.
    pub label: u64,
    /// One half-edge of the boundary cycle.
    pub outer_component: HalfEdgeId,
}

impl FaceData {
    /// Creates a face with the given label and boundary entry point.
    #[must_use]
    pub fn new(label: u64, outer_component: HalfEdgeId) -> Self {
        Self {
            label,
            outer_component,
        }
    }
}
