//! Slicing a 4D mesh with a hyperplane
//!
//! The result is a mesh of vertices, edges and faces lying in the
//! hyperplane (a 3D boundary surface); it has no cells.
//!
//! Each source edge is classified once: it misses the hyperplane, touches
//! it at one point, or lies entirely inside it. Each source face then
//! yields either nothing, one whole face (every edge inside the
//! hyperplane), or a set of edges. Within a cell, edges are accumulated
//! face by face until every vertex has even degree, at which point they
//! close into one or more new faces.

use std::collections::{HashMap, HashSet};

use log::debug;
use polychora_math::{Hyperplane4, Line4, Vec4};

use crate::edge_loop::{reorder_edge_cycles, reorder_edges};
use crate::mesh4::EdgeTable;
use crate::{EdgeId, Face, FaceId, FacetKey, Mesh4, MeshError, VertId};

#[derive(Clone, Copy, Debug, PartialEq)]
enum EdgeSlice {
    Miss,
    Point(VertId),
    Whole(EdgeId),
}

#[derive(Clone, Debug, PartialEq)]
enum FaceSlice {
    Miss,
    Whole(FaceId),
    Partial(Vec<EdgeId>),
}

impl Mesh4 {
    /// Intersect with the w = 0 hyperplane
    pub fn cross_section(&self) -> Result<Mesh4, MeshError> {
        self.cross_section_with(&Hyperplane4::W_ZERO)
    }

    /// Intersect with an arbitrary hyperplane
    pub fn cross_section_with(&self, plane: &Hyperplane4) -> Result<Mesh4, MeshError> {
        Slicer::new(self, *plane).run()
    }
}

struct Slicer<'a> {
    source: &'a Mesh4,
    plane: Hyperplane4,
    verts: Vec<Vec4>,
    /// Output vertex created for a source vertex lying in the hyperplane
    vert_map: HashMap<VertId, VertId>,
    edges: EdgeTable,
    faces: Vec<Face>,
    face_keys: HashMap<FacetKey, FaceId>,
    edge_slices: Vec<Option<EdgeSlice>>,
    face_slices: Vec<Option<FaceSlice>>,
}

impl<'a> Slicer<'a> {
    fn new(source: &'a Mesh4, plane: Hyperplane4) -> Self {
        Self {
            source,
            plane,
            verts: Vec::new(),
            vert_map: HashMap::new(),
            edges: EdgeTable::default(),
            faces: Vec::new(),
            face_keys: HashMap::new(),
            edge_slices: vec![None; source.edges().len()],
            face_slices: vec![None; source.faces().len()],
        }
    }

    fn run(mut self) -> Result<Mesh4, MeshError> {
        let source = self.source;

        for cell in source.cells() {
            let mut ring: Vec<EdgeId> = Vec::new();
            let mut seen: HashSet<EdgeId> = HashSet::new();
            let mut odd: HashSet<VertId> = HashSet::new();

            for &face in &cell.faces {
                let FaceSlice::Partial(found) = self.slice_face(face)? else {
                    continue;
                };

                for edge in found {
                    if !seen.insert(edge) {
                        continue;
                    }
                    ring.push(edge);
                    for v in self.edges.edges()[edge.0].verts {
                        if !odd.remove(&v) {
                            odd.insert(v);
                        }
                    }
                }

                if !odd.is_empty() {
                    continue;
                }

                for face in reorder_edge_cycles(&ring, self.edges.edges())? {
                    self.add_face(face);
                }
                ring.clear();
                seen.clear();
            }
        }

        let mesh = Mesh4::from_parts(self.verts, self.edges.into_edges(), self.faces, Vec::new());
        debug!(
            "Cross-section: {} verts, {} edges, {} faces",
            mesh.verts().len(),
            mesh.edges().len(),
            mesh.faces().len()
        );
        Ok(mesh)
    }

    /// Output vertex standing for a source vertex that lies in the hyperplane
    fn mapped_vert(&mut self, v: VertId) -> VertId {
        if let Some(&out) = self.vert_map.get(&v) {
            return out;
        }
        let out = self.push_vert(self.source.vert(v));
        self.vert_map.insert(v, out);
        out
    }

    fn push_vert(&mut self, p: Vec4) -> VertId {
        self.verts.push(p);
        VertId(self.verts.len() - 1)
    }

    /// Store a face unless one over the same vertices exists
    fn add_face(&mut self, face: Face) -> FaceId {
        let key = FacetKey::from_ids(face.verts());
        if let Some(&id) = self.face_keys.get(&key) {
            return id;
        }
        let id = FaceId(self.faces.len());
        self.faces.push(face);
        self.face_keys.insert(key, id);
        id
    }

    fn slice_edge(&mut self, id: EdgeId) -> EdgeSlice {
        if let Some(slice) = self.edge_slices[id.0] {
            return slice;
        }

        let [a, b] = self.source.edge(id).verts;
        let line = Line4::through(self.source.vert(a), self.source.vert(b));
        let t = self.plane.intersect_line(&line);

        let slice = if t.is_nan() {
            let (va, vb) = (self.mapped_vert(a), self.mapped_vert(b));
            EdgeSlice::Whole(self.edges.insert(va, vb).0)
        } else if !(0.0..=1.0).contains(&t) {
            EdgeSlice::Miss
        } else if t == 0.0 {
            EdgeSlice::Point(self.mapped_vert(a))
        } else if t == 1.0 {
            EdgeSlice::Point(self.mapped_vert(b))
        } else {
            EdgeSlice::Point(self.push_vert(line.evaluate(t)))
        };

        self.edge_slices[id.0] = Some(slice);
        slice
    }

    fn slice_face(&mut self, id: FaceId) -> Result<FaceSlice, MeshError> {
        if let Some(slice) = &self.face_slices[id.0] {
            return Ok(slice.clone());
        }

        let source = self.source;
        let face = source.face(id);

        let mut found: Vec<EdgeId> = Vec::new();
        let mut whole: Vec<EdgeId> = Vec::new();
        let mut pending: Vec<VertId> = Vec::new();
        // A point right after an in-plane edge is that edge's endpoint
        let mut skip_point = false;

        for edge in face.edges() {
            match self.slice_edge(edge) {
                EdgeSlice::Miss => {}
                EdgeSlice::Point(v) => {
                    if skip_point {
                        skip_point = false;
                        continue;
                    }
                    if pending.first() == Some(&v) {
                        continue;
                    }
                    pending.push(v);
                    if pending.len() < 2 {
                        continue;
                    }
                    let (e, _) = self.edges.insert(pending[0], pending[1]);
                    if !found.contains(&e) {
                        found.push(e);
                    }
                    pending.clear();
                }
                EdgeSlice::Whole(e) => {
                    whole.push(e);
                    if !found.contains(&e) {
                        found.push(e);
                    }
                    pending.clear();
                    skip_point = true;
                }
            }
        }

        let slice = if found.is_empty() {
            FaceSlice::Miss
        } else if whole.len() == face.len() {
            let loops = reorder_edges(&whole, self.edges.edges())?;
            FaceSlice::Whole(self.add_face(loops))
        } else {
            FaceSlice::Partial(found)
        };

        self.face_slices[id.0] = Some(slice.clone());
        Ok(slice)
    }
}
