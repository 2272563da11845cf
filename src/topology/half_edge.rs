use super::face::FaceId;
use super::key::EdgeKey;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the mesh.
    pub struct HalfEdgeId;
}

/// Data associated with a directed half-edge `origin -> end`.
///
/// A half-edge is one of the two directed sides of an undirected edge.
/// Its `twin` is the oppositely directed half-edge completing that edge;
/// `next`/`prev` chain it into its face's boundary cycle. All links are
/// optional because a half-edge is created unlinked and wired up as the
/// surrounding faces are built.
#[derive(Debug, Clone)]
pub struct HalfEdgeData {
    /// Start vertex.
    pub origin: VertexId,
    /// End vertex.
    pub end: VertexId,
    /// Canonical identity of this half-edge in the registry.
    pub key: EdgeKey,
    /// The oppositely directed half-edge of the same undirected edge.
    pub twin: Option<HalfEdgeId>,
    /// Next half-edge along the incident face's boundary.
    pub next: Option<HalfEdgeId>,
    /// Previous half-edge along the incident face's boundary.
    pub prev: Option<HalfEdgeId>,
    /// The face this half-edge bounds.
    pub face: Option<FaceId>,
}

impl HalfEdgeData {
    /// Creates an unlinked half-edge `origin -> end`.
    #[must_use]
    pub fn new(origin: VertexId, end: VertexId, key: EdgeKey) -> Self {
        Self {
            origin,
            end,
            key,
            twin: None,
            next: None,
            prev: None,
            face: None,
        }
    }
}
