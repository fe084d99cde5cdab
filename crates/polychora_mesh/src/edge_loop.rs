//! Turning an unordered bag of edges into closed edge-loop cycles

use crate::{Edge, EdgeId, EdgeLoop, Face, MeshError};

/// Order a bag of edges that forms exactly one closed loop.
///
/// The first loop starts at the first endpoint of `edges[0]`; each following
/// loop is the earliest remaining edge touching the current end vertex.
pub fn reorder_edges(edges: &[EdgeId], arena: &[Edge]) -> Result<Face, MeshError> {
    let mut cycles = reorder_edge_cycles(edges, arena)?;
    match cycles.len() {
        1 => Ok(cycles.remove(0)),
        loops => Err(MeshError::MultipleEdgeLoops { loops }),
    }
}

/// Split a bag of edges into all of its closed loops, in discovery order
pub fn reorder_edge_cycles(edges: &[EdgeId], arena: &[Edge]) -> Result<Vec<Face>, MeshError> {
    let mut remaining: Vec<EdgeId> = edges.to_vec();
    let mut cycles = Vec::new();

    while !remaining.is_empty() {
        let first = remaining.remove(0);
        let [start, mut next] = arena[first.0].verts;
        let mut loops = vec![EdgeLoop { vert: start, edge: first }];

        while next != start {
            let pos = remaining
                .iter()
                .position(|e| arena[e.0].contains(next))
                .ok_or(MeshError::OpenEdgeLoop { vert: next.0 })?;
            let edge = remaining.remove(pos);
            loops.push(EdgeLoop { vert: next, edge });
            next = arena[edge.0].other(next);
        }

        cycles.push(Face::new(loops));
    }

    Ok(cycles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VertId;

    fn edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
        pairs.iter().map(|&(a, b)| Edge::new(VertId(a), VertId(b))).collect()
    }

    fn ids(indices: &[usize]) -> Vec<EdgeId> {
        indices.iter().map(|&i| EdgeId(i)).collect()
    }

    #[test]
    fn test_reorders_scrambled_square() {
        let arena = edges(&[(0, 1), (2, 3), (3, 0), (1, 2)]);
        let face = reorder_edges(&ids(&[0, 1, 2, 3]), &arena).unwrap();
        let verts: Vec<usize> = face.verts().map(|v| v.0).collect();
        let order: Vec<usize> = face.edges().map(|e| e.0).collect();
        assert_eq!(verts, vec![0, 1, 2, 3]);
        assert_eq!(order, vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_walks_reversed_edges() {
        // Every edge after the first is stored against the walk direction
        let arena = edges(&[(0, 1), (2, 1), (0, 2)]);
        let face = reorder_edges(&ids(&[0, 1, 2]), &arena).unwrap();
        let verts: Vec<usize> = face.verts().map(|v| v.0).collect();
        assert_eq!(verts, vec![0, 1, 2]);
    }

    #[test]
    fn test_open_chain_is_an_error() {
        let arena = edges(&[(0, 1), (1, 2)]);
        let err = reorder_edges(&ids(&[0, 1]), &arena).unwrap_err();
        assert_eq!(err, MeshError::OpenEdgeLoop { vert: 2 });
    }

    #[test]
    fn test_two_triangles() {
        let arena = edges(&[(0, 1), (3, 4), (1, 2), (4, 5), (2, 0), (5, 3)]);
        let cycles = reorder_edge_cycles(&ids(&[0, 1, 2, 3, 4, 5]), &arena).unwrap();
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0].len(), 3);
        assert_eq!(cycles[1].verts().next(), Some(VertId(3)));

        let err = reorder_edges(&ids(&[0, 1, 2, 3, 4, 5]), &arena).unwrap_err();
        assert_eq!(err, MeshError::MultipleEdgeLoops { loops: 2 });
    }

    #[test]
    fn test_empty_bag() {
        assert!(reorder_edge_cycles(&[], &[]).unwrap().is_empty());
        assert_eq!(reorder_edges(&[], &[]), Err(MeshError::MultipleEdgeLoops { loops: 0 }));
    }
}
