//! Arena-backed 4D mesh topology
//!
//! A [`Mesh4`] owns flat lists of vertices, edges, faces and cells. Higher
//! facets refer to lower ones by typed index ([`VertId`], [`EdgeId`],
//! [`FaceId`]) rather than by reference, so identity of a facet is its
//! position in the owning mesh. Two vertices at the same coordinates are
//! still distinct vertices.
//!
//! Every edge has exactly two [`EdgeLoop`]s, one starting at each endpoint.
//! A face is a closed cycle of edge loops: the end vertex of each loop is
//! the start vertex of the next.

use std::collections::HashMap;

use polychora_math::{Matrix5, Rotor4, Transform4, Vec4};

use crate::{FacetKey, MeshError};

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);

        impl $name {
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(id: $name) -> usize {
                id.0
            }
        }
    };
}

arena_id!(
    /// Index into [`Mesh4::verts`]
    VertId
);
arena_id!(
    /// Index into [`Mesh4::edges`]
    EdgeId
);
arena_id!(
    /// Index into [`Mesh4::faces`]
    FaceId
);
arena_id!(
    /// Index into [`Mesh4::cells`]
    CellId
);

/// Line segment between two vertices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub verts: [VertId; 2],
}

impl Edge {
    #[inline]
    pub fn new(a: VertId, b: VertId) -> Self {
        Self { verts: [a, b] }
    }

    #[inline]
    pub fn contains(&self, v: VertId) -> bool {
        self.verts[0] == v || self.verts[1] == v
    }

    /// The endpoint that is not `v` (or `v` itself for a degenerate edge)
    #[inline]
    pub fn other(&self, v: VertId) -> VertId {
        if self.verts[0] == v {
            self.verts[1]
        } else {
            self.verts[0]
        }
    }

    /// The two loops over this edge, starting at the first and second endpoint
    #[inline]
    pub fn loops(&self, id: EdgeId) -> [EdgeLoop; 2] {
        [
            EdgeLoop { vert: self.verts[0], edge: id },
            EdgeLoop { vert: self.verts[1], edge: id },
        ]
    }
}

/// An edge traversed from a chosen starting vertex
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeLoop {
    pub vert: VertId,
    pub edge: EdgeId,
}

/// Polygon: a closed cycle of edge loops
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Face {
    pub loops: Vec<EdgeLoop>,
}

impl Face {
    pub fn new(loops: Vec<EdgeLoop>) -> Self {
        Self { loops }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.loops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    /// Start vertices in cycle order
    pub fn verts(&self) -> impl Iterator<Item = VertId> + '_ {
        self.loops.iter().map(|l| l.vert)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.loops.iter().map(|l| l.edge)
    }

    /// Fan triangulation around the first vertex
    pub fn triangulate(&self) -> impl Iterator<Item = [VertId; 3]> + '_ {
        let n = self.loops.len();
        (1..n.saturating_sub(1)).map(move |i| {
            [self.loops[0].vert, self.loops[i].vert, self.loops[i + 1].vert]
        })
    }
}

/// Polyhedron: a set of faces
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub faces: Vec<FaceId>,
}

impl Cell {
    pub fn new(faces: Vec<FaceId>) -> Self {
        Self { faces }
    }
}

/// Edge list that hands back the existing edge for a repeated vertex pair
#[derive(Debug, Default)]
pub(crate) struct EdgeTable {
    edges: Vec<Edge>,
    keys: HashMap<FacetKey, EdgeId>,
}

impl EdgeTable {
    /// Id of the edge between `a` and `b`, and whether it was just created
    pub fn insert(&mut self, a: VertId, b: VertId) -> (EdgeId, bool) {
        let key = FacetKey::from_ids([a, b]);
        if let Some(&id) = self.keys.get(&key) {
            return (id, false);
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(a, b));
        self.keys.insert(key, id);
        (id, true)
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// 4D polytope mesh
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh4 {
    verts: Vec<Vec4>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
    cells: Vec<Cell>,
    edge_loops: Vec<EdgeLoop>,
}

impl Mesh4 {
    /// Assemble a mesh from finished arenas. Edge loops are derived from the
    /// edge list; references are trusted to be in range.
    pub(crate) fn from_parts(verts: Vec<Vec4>, edges: Vec<Edge>, faces: Vec<Face>, cells: Vec<Cell>) -> Self {
        let edge_loops = edges
            .iter()
            .enumerate()
            .flat_map(|(i, e)| e.loops(EdgeId(i)))
            .collect();
        Self { verts, edges, faces, cells, edge_loops }
    }

    /// Build a mesh from vertex positions, faces given as cyclic vertex
    /// index lists, and cells given as face index lists.
    ///
    /// Each consecutive index pair of a face (wrapping around) becomes an
    /// edge; pairs already seen in any order reuse the existing edge.
    pub fn from_verts_faces_cells<F, C>(verts: Vec<Vec4>, faces: &[F], cells: &[C]) -> Result<Self, MeshError>
    where
        F: AsRef<[usize]>,
        C: AsRef<[usize]>,
    {
        let mut table = EdgeTable::default();
        let mut new_faces = Vec::with_capacity(faces.len());

        for face in faces {
            let indices = face.as_ref();
            if let Some(&index) = indices.iter().find(|&&i| i >= verts.len()) {
                return Err(MeshError::VertIndexOutOfRange { index, len: verts.len() });
            }

            let loops = indices
                .iter()
                .zip(indices.iter().cycle().skip(1))
                .map(|(&a, &b)| {
                    let (edge, _) = table.insert(VertId(a), VertId(b));
                    EdgeLoop { vert: VertId(a), edge }
                })
                .collect();
            new_faces.push(Face::new(loops));
        }

        let mut new_cells = Vec::with_capacity(cells.len());
        for cell in cells {
            let indices = cell.as_ref();
            if let Some(&index) = indices.iter().find(|&&i| i >= new_faces.len()) {
                return Err(MeshError::FaceIndexOutOfRange { index, len: new_faces.len() });
            }
            new_cells.push(Cell::new(indices.iter().map(|&i| FaceId(i)).collect()));
        }

        Ok(Self::from_parts(verts, table.into_edges(), new_faces, new_cells))
    }

    /// Build a mesh without cells
    pub fn from_verts_faces<F>(verts: Vec<Vec4>, faces: &[F]) -> Result<Self, MeshError>
    where
        F: AsRef<[usize]>,
    {
        Self::from_verts_faces_cells::<F, [usize; 0]>(verts, faces, &[])
    }

    /// Append a cell over existing faces
    pub fn add_cell(&mut self, faces: Vec<FaceId>) -> Result<CellId, MeshError> {
        if let Some(face) = faces.iter().find(|f| f.0 >= self.faces.len()) {
            return Err(MeshError::FaceIndexOutOfRange { index: face.0, len: self.faces.len() });
        }
        self.cells.push(Cell::new(faces));
        Ok(CellId(self.cells.len() - 1))
    }

    #[inline]
    pub fn verts(&self) -> &[Vec4] {
        &self.verts
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Both loops of every edge, in edge order
    #[inline]
    pub fn edge_loops(&self) -> &[EdgeLoop] {
        &self.edge_loops
    }

    #[inline]
    pub fn vert(&self, id: VertId) -> Vec4 {
        self.verts[id.0]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.0]
    }

    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.faces.len()).map(FaceId)
    }

    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> {
        (0..self.cells.len()).map(CellId)
    }

    /// Positions of a face's corners in loop order
    pub fn face_verts(&self, id: FaceId) -> Vec<Vec4> {
        self.face(id).verts().map(|v| self.vert(v)).collect()
    }

    /// Distinct vertices of a cell, in first-seen order
    pub fn cell_verts(&self, id: CellId) -> Vec<VertId> {
        let mut out: Vec<VertId> = Vec::new();
        for &face in &self.cell(id).faces {
            for v in self.face(face).verts() {
                if !out.contains(&v) {
                    out.push(v);
                }
            }
        }
        out
    }

    /// Mean of a cell's distinct vertices.
    ///
    /// Only simplices (at most 4 distinct vertices) are supported; for them
    /// the vertex mean is the true centroid.
    pub fn cell_centroid(&self, id: CellId) -> Result<Vec4, MeshError> {
        let verts = self.cell_verts(id);
        if verts.len() > 4 {
            return Err(MeshError::UnsupportedCentroid { cell: id.0, vert_count: verts.len() });
        }
        let sum = verts.iter().fold(Vec4::ZERO, |acc, &v| acc + self.vert(v));
        Ok(sum / verts.len() as f64)
    }

    /// Flat `x, y, z, w` coordinates of a triangle fan over every face
    pub fn triangle_coords(&self) -> Vec<f32> {
        let mut coords = Vec::new();
        for face in &self.faces {
            for tri in face.triangulate() {
                for v in tri {
                    push_coords(&mut coords, self.vert(v));
                }
            }
        }
        coords
    }

    /// Flat `x, y, z, w` coordinates of both endpoints of every edge
    pub fn lines_coords(&self) -> Vec<f32> {
        let mut coords = Vec::with_capacity(self.edges.len() * 8);
        for edge in &self.edges {
            push_coords(&mut coords, self.vert(edge.verts[0]));
            push_coords(&mut coords, self.vert(edge.verts[1]));
        }
        coords
    }

    /// Uniformly scale every vertex about the origin
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.verts {
            *v *= factor;
        }
    }

    /// Scale every vertex per axis
    pub fn scale_components(&mut self, factors: Vec4) {
        for v in &mut self.verts {
            *v = v.component_mul(factors);
        }
    }

    pub fn translate(&mut self, offset: Vec4) {
        for v in &mut self.verts {
            *v += offset;
        }
    }

    pub fn rotate(&mut self, rotor: &Rotor4) {
        for v in &mut self.verts {
            *v = rotor.rotate(*v);
        }
    }

    pub fn transform(&mut self, transform: &Transform4) {
        for v in &mut self.verts {
            *v = transform.transform_point(*v);
        }
    }

    pub fn apply_matrix(&mut self, matrix: &Matrix5) {
        for v in &mut self.verts {
            *v = matrix.transform_point(*v);
        }
    }

    /// Disjoint union: `other`'s facets follow this mesh's, with ids shifted
    pub fn join(&self, other: &Mesh4) -> Mesh4 {
        let (dv, de, df) = (self.verts.len(), self.edges.len(), self.faces.len());

        let verts = self.verts.iter().chain(&other.verts).copied().collect();
        let edges = self
            .edges
            .iter()
            .copied()
            .chain(other.edges.iter().map(|e| Edge::new(VertId(e.verts[0].0 + dv), VertId(e.verts[1].0 + dv))))
            .collect();
        let faces = self
            .faces
            .iter()
            .cloned()
            .chain(other.faces.iter().map(|f| {
                Face::new(
                    f.loops
                        .iter()
                        .map(|l| EdgeLoop { vert: VertId(l.vert.0 + dv), edge: EdgeId(l.edge.0 + de) })
                        .collect(),
                )
            }))
            .collect();
        let cells = self
            .cells
            .iter()
            .cloned()
            .chain(other.cells.iter().map(|c| Cell::new(c.faces.iter().map(|f| FaceId(f.0 + df)).collect())))
            .collect();

        Mesh4::from_parts(verts, edges, faces, cells)
    }
}

fn push_coords(coords: &mut Vec<f32>, v: Vec4) {
    coords.extend([v.x as f32, v.y as f32, v.z as f32, v.w as f32]);
}
