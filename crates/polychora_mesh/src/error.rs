//! Mesh error types
//!
//! Provides error handling for mesh construction and topology operations.

use std::fmt;

/// Error type for mesh operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A face refers to a vertex index past the end of the vertex list
    VertIndexOutOfRange { index: usize, len: usize },
    /// A cell refers to a face index past the end of the face list
    FaceIndexOutOfRange { index: usize, len: usize },
    /// Centroid requested for a cell with more than 4 distinct vertices
    UnsupportedCentroid { cell: usize, vert_count: usize },
    /// No remaining edge continues the loop from this vertex
    OpenEdgeLoop { vert: usize },
    /// The edges form several closed loops where one was expected
    MultipleEdgeLoops { loops: usize },
    /// The face is not bounded by any cell
    FaceWithoutCell { face: usize },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::VertIndexOutOfRange { index, len } => {
                write!(f, "Vertex index {} out of range ({} vertices)", index, len)
            }
            MeshError::FaceIndexOutOfRange { index, len } => {
                write!(f, "Face index {} out of range ({} faces)", index, len)
            }
            MeshError::UnsupportedCentroid { cell, vert_count } => write!(
                f,
                "Cannot take centroid of cell {}: {} distinct vertices (at most 4 supported)",
                cell, vert_count
            ),
            MeshError::OpenEdgeLoop { vert } => {
                write!(f, "Edge loop is open: no edge continues from vertex {}", vert)
            }
            MeshError::MultipleEdgeLoops { loops } => {
                write!(f, "Expected a single edge loop, found {}", loops)
            }
            MeshError::FaceWithoutCell { face } => {
                write!(f, "Face {} is not bounded by any cell", face)
            }
        }
    }
}

impl std::error::Error for MeshError {}
