use crate::math::Point3;

use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the mesh.
    pub struct VertexId;
}

/// Data associated with a mesh vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
    /// One outgoing half-edge, if any.
    ///
    /// A convenience anchor only: it is overwritten every time the vertex
    /// gains a new outgoing half-edge and is never authoritative for
    /// adjacency.
    pub incident_edge: Option<HalfEdgeId>,
}

impl VertexData {
    /// Creates a new vertex at the given point, with no incident edge.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self {
            point,
            incident_edge: None,
        }
    }
}
