//! Incremental construction of polytopes from cell templates
//!
//! Cells are added as a list of source vertex indices plus a face template
//! that indexes into that list. Vertices are renumbered in order of first
//! appearance, and faces shared between cells are stored once.

use std::collections::HashMap;

use polychora_math::Vec4;

use crate::{FacetKey, Mesh4, MeshError};

/// Faces of a tetrahedron over 4 vertices
pub const TETRAHEDRON_FACES: [&[usize]; 4] = [&[0, 1, 2], &[0, 1, 3], &[0, 2, 3], &[1, 2, 3]];

/// Faces of a hexahedron over 8 vertices in binary (x, y, z bit) order
pub const HEXAHEDRON_FACES: [&[usize]; 6] = [
    &[0, 1, 3, 2],
    &[4, 5, 7, 6],
    &[0, 1, 5, 4],
    &[2, 3, 7, 6],
    &[0, 2, 6, 4],
    &[1, 3, 7, 5],
];

/// Faces of an octahedron over 3 antipodal vertex pairs `(0, 1), (2, 3), (4, 5)`
pub const OCTAHEDRON_FACES: [&[usize]; 8] = [
    &[0, 2, 4],
    &[0, 2, 5],
    &[0, 3, 4],
    &[0, 3, 5],
    &[1, 2, 4],
    &[1, 2, 5],
    &[1, 3, 4],
    &[1, 3, 5],
];

/// Collects cells over a shared vertex pool
#[derive(Debug)]
pub struct CellBuilder<'a> {
    source: &'a [Vec4],
    vert_ids: HashMap<usize, usize>,
    verts: Vec<Vec4>,
    face_ids: HashMap<FacetKey, usize>,
    faces: Vec<Vec<usize>>,
    cells: Vec<Vec<usize>>,
}

impl<'a> CellBuilder<'a> {
    pub fn new(source: &'a [Vec4]) -> Self {
        Self {
            source,
            vert_ids: HashMap::new(),
            verts: Vec::new(),
            face_ids: HashMap::new(),
            faces: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Add a cell. `verts` indexes the source vertices; `faces` indexes
    /// into `verts`. Returns each face as renumbered vertex indices.
    pub fn add_cell(&mut self, verts: &[usize], faces: &[&[usize]]) -> Result<Vec<Vec<usize>>, MeshError> {
        let mut local = Vec::with_capacity(verts.len());
        for &v in verts {
            local.push(self.vert_id(v)?);
        }

        let mut cell = Vec::with_capacity(faces.len());
        let mut face_verts = Vec::with_capacity(faces.len());
        for face in faces {
            let mut indices = Vec::with_capacity(face.len());
            for &i in face.iter() {
                let id = *local
                    .get(i)
                    .ok_or(MeshError::VertIndexOutOfRange { index: i, len: local.len() })?;
                indices.push(id);
            }

            let key = FacetKey::new(&indices);
            let face_id = match self.face_ids.get(&key) {
                Some(&id) => id,
                None => {
                    let id = self.faces.len();
                    self.faces.push(indices.clone());
                    self.face_ids.insert(key, id);
                    id
                }
            };
            cell.push(face_id);
            face_verts.push(indices);
        }

        self.cells.push(cell);
        Ok(face_verts)
    }

    pub fn add_tetrahedron_cell(&mut self, verts: [usize; 4]) -> Result<Vec<Vec<usize>>, MeshError> {
        self.add_cell(&verts, &TETRAHEDRON_FACES)
    }

    pub fn add_hexahedron_cell(&mut self, verts: [usize; 8]) -> Result<Vec<Vec<usize>>, MeshError> {
        self.add_cell(&verts, &HEXAHEDRON_FACES)
    }

    pub fn add_octahedron_cell(&mut self, verts: [usize; 6]) -> Result<Vec<Vec<usize>>, MeshError> {
        self.add_cell(&verts, &OCTAHEDRON_FACES)
    }

    /// Vertices used so far, in first-appearance order
    pub fn verts(&self) -> &[Vec4] {
        &self.verts
    }

    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    pub fn cells(&self) -> &[Vec<usize>] {
        &self.cells
    }

    /// Mesh of the collected faces without cells (a 3D boundary surface)
    pub fn mesh3(&self) -> Result<Mesh4, MeshError> {
        Mesh4::from_verts_faces(self.verts.clone(), &self.faces)
    }

    pub fn mesh(&self) -> Result<Mesh4, MeshError> {
        Mesh4::from_verts_faces_cells(self.verts.clone(), &self.faces, &self.cells)
    }

    fn vert_id(&mut self, source_index: usize) -> Result<usize, MeshError> {
        if let Some(&id) = self.vert_ids.get(&source_index) {
            return Ok(id);
        }
        let v = *self
            .source
            .get(source_index)
            .ok_or(MeshError::VertIndexOutOfRange { index: source_index, len: self.source.len() })?;
        let id = self.verts.len();
        self.verts.push(v);
        self.vert_ids.insert(source_index, id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_verts() -> Vec<Vec4> {
        (0..8)
            .map(|i| {
                let bit = |b: usize| if i & (1 << b) != 0 { 1.0 } else { 0.0 };
                Vec4::new(bit(0), bit(1), bit(2), 0.0)
            })
            .collect()
    }

    #[test]
    fn test_single_tetrahedron() {
        let source = vec![Vec4::ZERO, Vec4::X, Vec4::Y, Vec4::Z, Vec4::W];
        let mut builder = CellBuilder::new(&source);
        let faces = builder.add_tetrahedron_cell([4, 1, 2, 3]).unwrap();
        assert_eq!(faces[0], vec![0, 1, 2]);
        assert_eq!(builder.verts()[0], Vec4::W);
        assert_eq!(builder.verts().len(), 4);
        assert_eq!(builder.faces().len(), 4);
        assert_eq!(builder.cells(), &[vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_shared_faces_are_stored_once() {
        let source = vec![Vec4::ZERO, Vec4::X, Vec4::Y, Vec4::Z, Vec4::W];
        let mut builder = CellBuilder::new(&source);
        builder.add_tetrahedron_cell([0, 1, 2, 3]).unwrap();
        builder.add_tetrahedron_cell([0, 1, 2, 4]).unwrap();
        // Triangle 0-1-2 is shared
        assert_eq!(builder.faces().len(), 7);
        assert_eq!(builder.cells()[0][0], builder.cells()[1][0]);

        let mesh = builder.mesh().unwrap();
        assert_eq!(mesh.verts().len(), 5);
        assert_eq!(mesh.edges().len(), 9);
        assert_eq!(mesh.cells().len(), 2);
    }

    #[test]
    fn test_hexahedron_surface() {
        let source = cube_verts();
        let mut builder = CellBuilder::new(&source);
        builder.add_hexahedron_cell([0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        let surface = builder.mesh3().unwrap();
        assert_eq!(surface.verts().len(), 8);
        assert_eq!(surface.edges().len(), 12);
        assert_eq!(surface.faces().len(), 6);
        assert!(surface.cells().is_empty());
    }

    #[test]
    fn test_octahedron_cell() {
        let source = vec![Vec4::X, -Vec4::X, Vec4::Y, -Vec4::Y, Vec4::Z, -Vec4::Z];
        let mut builder = CellBuilder::new(&source);
        builder.add_octahedron_cell([0, 1, 2, 3, 4, 5]).unwrap();
        let mesh = builder.mesh().unwrap();
        assert_eq!(mesh.edges().len(), 12);
        assert_eq!(mesh.faces().len(), 8);
    }

    #[test]
    fn test_bad_indices() {
        let source = vec![Vec4::ZERO, Vec4::X];
        let mut builder = CellBuilder::new(&source);
        assert_eq!(
            builder.add_cell(&[0, 5], &[&[0, 1]]),
            Err(MeshError::VertIndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(
            builder.add_cell(&[0, 1], &[&[0, 2]]),
            Err(MeshError::VertIndexOutOfRange { index: 2, len: 2 })
        );
    }
}
