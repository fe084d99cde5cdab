//! Polytope duality
//!
//! The dual swaps facet ranks: cells become vertices (at their centroids),
//! faces become edges, edges become faces and vertices become cells.

use log::{debug, warn};

use crate::edge_loop::reorder_edges;
use crate::{Cell, CellId, Edge, EdgeId, FaceId, Mesh4, MeshError, VertId};

impl Mesh4 {
    /// Build the dual mesh.
    ///
    /// Requires every cell to be a simplex (for the centroid) and every face
    /// to bound at least one cell. A face bounded by one cell, or by more
    /// than two, becomes an edge between the first and last of them.
    pub fn dual(&self) -> Result<Mesh4, MeshError> {
        let mut face_cells: Vec<Vec<CellId>> = vec![Vec::new(); self.faces().len()];
        for cell_id in self.cell_ids() {
            for &face in &self.cell(cell_id).faces {
                let cells = &mut face_cells[face.0];
                if !cells.contains(&cell_id) {
                    cells.push(cell_id);
                }
            }
        }

        let mut edge_faces: Vec<Vec<EdgeId>> = vec![Vec::new(); self.edges().len()];
        for face_id in self.face_ids() {
            // Dual edge ids coincide with source face ids
            let dual_edge = EdgeId(face_id.0);
            for edge in self.face(face_id).edges() {
                let faces = &mut edge_faces[edge.0];
                if !faces.contains(&dual_edge) {
                    faces.push(dual_edge);
                }
            }
        }

        let mut vert_edges: Vec<Vec<FaceId>> = vec![Vec::new(); self.verts().len()];
        for (i, edge) in self.edges().iter().enumerate() {
            for v in edge.verts {
                vert_edges[v.0].push(FaceId(i));
            }
        }

        let verts = self
            .cell_ids()
            .map(|c| self.cell_centroid(c))
            .collect::<Result<Vec<_>, _>>()?;

        let mut edges = Vec::with_capacity(face_cells.len());
        for (face, cells) in face_cells.iter().enumerate() {
            let (Some(first), Some(last)) = (cells.first(), cells.last()) else {
                return Err(MeshError::FaceWithoutCell { face });
            };
            if cells.len() != 2 {
                warn!("Face {} bounds {} cells; dual edge joins the first and last", face, cells.len());
            }
            edges.push(Edge::new(VertId(first.0), VertId(last.0)));
        }

        let faces = edge_faces
            .iter()
            .map(|ring| reorder_edges(ring, &edges))
            .collect::<Result<Vec<_>, _>>()?;

        let cells = vert_edges.into_iter().map(Cell::new).collect();

        let dual = Mesh4::from_parts(verts, edges, faces, cells);
        debug!(
            "Dual mesh: {} verts, {} edges, {} faces, {} cells",
            dual.verts().len(),
            dual.edges().len(),
            dual.faces().len(),
            dual.cells().len()
        );
        Ok(dual)
    }
}
