pub mod face;
pub mod half_edge;
pub mod key;
pub mod vertex;

pub use face::{FaceData, FaceId};
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use key::{EdgeKey, PointKey};
pub use vertex::{VertexData, VertexId};

use std::collections::HashMap;

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Half-edge mesh (doubly connected edge list).
///
/// Central arena that owns all vertices, half-edges and faces. Entities
/// reference each other via typed IDs (generational indices), avoiding
/// self-referential structures and enabling safe mutation.
///
/// Alongside the arenas the mesh maintains canonical-identity indexes:
/// vertices are keyed by exact coordinates, half-edges by their ordered
/// endpoint pair, faces by a monotonically assigned label. All `add_*`
/// operations are idempotent on those keys — re-adding an existing key is
/// a no-op that hands back the existing entity — which is what lets an
/// incremental construction re-discover entities without special-casing.
#[derive(Debug, Default)]
pub struct Mesh {
    vertices: SlotMap<VertexId, VertexData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
    faces: SlotMap<FaceId, FaceData>,

    vertex_index: HashMap<PointKey, VertexId>,
    edge_index: HashMap<EdgeKey, HalfEdgeId>,
    face_index: HashMap<u64, FaceId>,
    next_face_label: u64,
}

impl Mesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex at the given point and returns its ID.
    ///
    /// Idempotent: if a vertex with exactly these coordinates already
    /// exists, its ID is returned and the mesh is left unchanged.
    pub fn add_vertex(&mut self, point: Point3) -> VertexId {
        let key = PointKey::of(&point);
        if let Some(&existing) = self.vertex_index.get(&key) {
            return existing;
        }

        let id = self.vertices.insert(VertexData::new(point));
        self.vertex_index.insert(key, id);
        id
    }

    /// Looks up the vertex with exactly these coordinates.
    #[must_use]
    pub fn find_vertex(&self, point: &Point3) -> Option<VertexId> {
        self.vertex_index.get(&PointKey::of(point)).copied()
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Removes a vertex and returns its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn delete_vertex(&mut self, id: VertexId) -> Result<VertexData, TopologyError> {
        let data = self
            .vertices
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))?;
        self.vertex_index.remove(&PointKey::of(&data.point));
        Ok(data)
    }

    // --- Half-edge operations ---

    /// Inserts the directed half-edge `origin -> end` and returns its ID.
    ///
    /// Idempotent: if a half-edge with this endpoint pair is already
    /// registered, its ID is returned instead. Either way the origin
    /// vertex's incident-edge anchor is re-pointed at the returned
    /// half-edge.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint vertex is not in the mesh.
    pub fn add_half_edge(
        &mut self,
        origin: VertexId,
        end: VertexId,
    ) -> Result<HalfEdgeId, TopologyError> {
        let key = self.edge_key(origin, end)?;

        let id = if let Some(&existing) = self.edge_index.get(&key) {
            existing
        } else {
            let id = self.half_edges.insert(HalfEdgeData::new(origin, end, key));
            self.edge_index.insert(key, id);
            id
        };

        self.vertex_mut(origin)?.incident_edge = Some(id);
        Ok(id)
    }

    /// Looks up the half-edge `origin -> end`, if registered.
    #[must_use]
    pub fn find_half_edge(&self, origin: VertexId, end: VertexId) -> Option<HalfEdgeId> {
        let key = self.edge_key(origin, end).ok()?;
        self.edge_index.get(&key).copied()
    }

    /// Looks up a half-edge by its canonical key.
    #[must_use]
    pub fn find_half_edge_by_key(&self, key: EdgeKey) -> Option<HalfEdgeId> {
        self.edge_index.get(&key).copied()
    }

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData, TopologyError> {
        self.half_edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// Returns a mutable reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn half_edge_mut(&mut self, id: HalfEdgeId) -> Result<&mut HalfEdgeData, TopologyError> {
        self.half_edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))
    }

    /// Removes a half-edge and returns its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn delete_half_edge(&mut self, id: HalfEdgeId) -> Result<HalfEdgeData, TopologyError> {
        let data = self
            .half_edges
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("half-edge".into()))?;
        self.edge_index.remove(&data.key);
        Ok(data)
    }

    // --- Face operations ---

    /// Inserts a face with the given label and boundary entry point.
    ///
    /// Idempotent: if a face with this label is already registered, its
    /// ID is returned and the mesh is left unchanged.
    pub fn add_face(&mut self, label: u64, outer_component: HalfEdgeId) -> FaceId {
        if let Some(&existing) = self.face_index.get(&label) {
            return existing;
        }

        let id = self.faces.insert(FaceData::new(label, outer_component));
        self.face_index.insert(label, id);
        self.next_face_label = self.next_face_label.max(label + 1);
        id
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Returns a mutable reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, TopologyError> {
        self.faces
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Removes a face and returns its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn delete_face(&mut self, id: FaceId) -> Result<FaceData, TopologyError> {
        let data = self
            .faces
            .remove(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))?;
        self.face_index.remove(&data.label);
        Ok(data)
    }

    // --- Face construction ---

    /// Builds a triangular face over the vertices `(a, b, c)`.
    ///
    /// Allocates the half-edges `a -> b`, `b -> c`, `c -> a` (idempotently),
    /// links them into a `next`/`prev` 3-cycle, stamps all three with the
    /// newly registered face, and sets the face's `outer_component` to
    /// `a -> b`. The boundary order must wind counterclockwise seen from
    /// outside for the face normal to point outward.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the vertices is not in the mesh.
    pub fn add_triangle(
        &mut self,
        a: VertexId,
        b: VertexId,
        c: VertexId,
    ) -> Result<FaceId, TopologyError> {
        let he_ab = self.add_half_edge(a, b)?;
        let he_bc = self.add_half_edge(b, c)?;
        let he_ca = self.add_half_edge(c, a)?;

        let face = self.add_face(self.next_face_label, he_ab);

        let cycle = [he_ab, he_bc, he_ca];
        for i in 0..3 {
            let he = cycle[i];
            let next = cycle[(i + 1) % 3];

            let data = self.half_edge_mut(he)?;
            data.next = Some(next);
            data.face = Some(face);
            self.half_edge_mut(next)?.prev = Some(he);
        }

        Ok(face)
    }

    // --- Traversal ---

    /// Iterates over all faces of the mesh.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &FaceData)> {
        self.faces.iter()
    }

    /// Iterates over all half-edges of the mesh.
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdgeData)> {
        self.half_edges.iter()
    }

    /// Iterates over all vertices of the mesh.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    /// Walks a face boundary by chasing `next` from `outer_component`
    /// until it repeats, returning the half-edges in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not in the mesh, if a boundary
    /// half-edge has no `next`, or if the walk fails to close.
    pub fn face_boundary(&self, id: FaceId) -> Result<Vec<HalfEdgeId>, TopologyError> {
        let start = self.face(id)?.outer_component;

        let mut boundary = Vec::new();
        let mut current = start;
        loop {
            boundary.push(current);
            if boundary.len() > self.half_edges.len() {
                return Err(TopologyError::InvalidTopology(
                    "face boundary does not close".into(),
                ));
            }

            let next = self.half_edge(current)?.next.ok_or_else(|| {
                TopologyError::InvalidTopology("boundary half-edge has no next".into())
            })?;
            if next == start {
                break;
            }
            current = next;
        }

        Ok(boundary)
    }

    /// Returns the boundary vertex positions of a face, in outward
    /// counterclockwise order.
    ///
    /// This is the whole contract a rendering collaborator consumes: one
    /// call per face yields the triangle's corner coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or its boundary entities are not in
    /// the mesh.
    pub fn face_points(&self, id: FaceId) -> Result<Vec<Point3>, TopologyError> {
        let boundary = self.face_boundary(id)?;
        let mut points = Vec::with_capacity(boundary.len());
        for he in boundary {
            let origin = self.half_edge(he)?.origin;
            points.push(self.vertex(origin)?.point);
        }
        Ok(points)
    }

    // --- Diagnostics ---

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of half-edges.
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Number of undirected edges (half-edges / 2).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.half_edges.len() / 2
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Euler characteristic `V - E + F`. Equals 2 for a closed
    /// polyhedral mesh.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn euler_characteristic(&self) -> i64 {
        let v = self.vertex_count() as i64;
        let e = self.edge_count() as i64;
        let f = self.face_count() as i64;
        v - e + f
    }

    fn edge_key(&self, origin: VertexId, end: VertexId) -> Result<EdgeKey, TopologyError> {
        let origin_key = PointKey::of(&self.vertex(origin)?.point);
        let end_key = PointKey::of(&self.vertex(end)?.point);
        Ok(EdgeKey::new(origin_key, end_key))
    }
}
