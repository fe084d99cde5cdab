//! Integration tests for cross-sections
//!
//! These tests slice hand-built meshes and the regular polychora with the
//! w = 0 hyperplane and check the facet counts of the resulting surfaces:
//! 1. Degenerate cells touching the hyperplane in a point, edge or face
//! 2. Cells lying entirely inside the hyperplane
//! 3. The regular polychora in their construction orientation
//! 4. Rotated and translated polychora

use polychora_math::{Euler4, Hyperplane4, Rotor4, RotationPlane, Transform4, Vec4};
use polychora_mesh::{
    regular_hecatonicosachoron, regular_hexacosichoron, regular_hexadecachoron, regular_hexahedron,
    regular_icositetrachoron, regular_octachoron, regular_pentachoron, FaceId, Mesh4,
};

const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

fn counts(mesh: &Mesh4) -> (usize, usize, usize) {
    (mesh.verts().len(), mesh.edges().len(), mesh.faces().len())
}

fn euler_characteristic(mesh: &Mesh4) -> i64 {
    mesh.verts().len() as i64 - mesh.edges().len() as i64 + mesh.faces().len() as i64
}

/// Every face must be a closed cycle of edge loops
fn assert_faces_closed(mesh: &Mesh4) {
    for (f, face) in mesh.faces().iter().enumerate() {
        for (i, l) in face.loops.iter().enumerate() {
            let next = face.loops[(i + 1) % face.len()];
            assert_eq!(
                mesh.edge(l.edge).other(l.vert),
                next.vert,
                "Face {} is not a closed loop",
                f
            );
        }
    }
}

fn tetrahedron(verts: [Vec4; 4]) -> Mesh4 {
    Mesh4::from_verts_faces_cells(verts.to_vec(), &TETRAHEDRON_FACES, &[[0usize, 1, 2, 3]]).unwrap()
}

// ==================== Hand-built Meshes ====================

/// A solid lying in the hyperplane comes back as its own surface
#[test]
fn test_cube_in_plane() {
    let mut cube = regular_hexahedron().unwrap();
    cube.add_cell((0..6).map(FaceId).collect()).unwrap();

    let slice = cube.cross_section().unwrap();
    assert_eq!(counts(&slice), (8, 12, 6));
    assert!(slice.cells().is_empty());
    assert_faces_closed(&slice);
}

/// Three vertices in the plane, one off it: the cut is the base triangle
#[test]
fn test_tetrahedron_with_face_in_plane() {
    let mesh = tetrahedron([
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(-1.0, -1.0, 0.0, 0.0),
        Vec4::new(-2.0, 2.0, -1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    ]);
    let slice = mesh.cross_section().unwrap();
    assert_eq!(counts(&slice), (3, 3, 1));
    assert_faces_closed(&slice);
}

/// Only one vertex touches the plane: a lone point
#[test]
fn test_tetrahedron_touching_plane_at_vertex() {
    let mesh = tetrahedron([
        Vec4::new(0.0, 0.0, 1.0, 2.0),
        Vec4::new(-1.0, -1.0, 0.0, 2.0),
        Vec4::new(-2.0, 2.0, -1.0, 1.0),
        Vec4::new(0.0, 0.0, 0.0, 0.0),
    ]);
    let slice = mesh.cross_section().unwrap();
    assert_eq!(counts(&slice), (1, 0, 0));
    assert_eq!(slice.verts()[0], Vec4::ZERO);
}

/// Two tetrahedra sharing their in-plane face, on opposite sides of it
#[test]
fn test_two_cells_sharing_in_plane_face() {
    let verts = vec![
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(-1.0, -1.0, 0.0, 0.0),
        Vec4::new(-2.0, 2.0, -1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
        Vec4::new(0.0, 0.0, 0.0, -1.0),
    ];
    let faces: Vec<Vec<usize>> = vec![
        vec![0, 1, 2],
        vec![0, 1, 3],
        vec![0, 2, 3],
        vec![1, 2, 3],
        vec![0, 1, 4],
        vec![0, 2, 4],
        vec![1, 2, 4],
    ];
    let cells: Vec<Vec<usize>> = vec![vec![0, 1, 2, 3], vec![0, 4, 5, 6]];
    let mesh = Mesh4::from_verts_faces_cells(verts, &faces, &cells).unwrap();

    let slice = mesh.cross_section().unwrap();
    assert_eq!(counts(&slice), (3, 3, 1));
}

// ==================== Regular Polychora ====================

#[test]
fn test_octachoron_slice_is_cube() {
    let slice = regular_octachoron().unwrap().cross_section().unwrap();
    assert_eq!(counts(&slice), (8, 12, 6));
    assert_faces_closed(&slice);
    for v in slice.verts() {
        assert_eq!(v.w, 0.0);
        assert!((v.x.abs() - 0.5).abs() < 1e-12);
    }
}

/// Shifting by half an edge puts a whole cubic cell in the plane
#[test]
fn test_octachoron_cell_in_plane() {
    let mut mesh = regular_octachoron().unwrap();
    mesh.translate(Vec4::new(0.0, 0.0, 0.0, 0.5));
    let slice = mesh.cross_section().unwrap();
    assert_eq!(counts(&slice), (8, 12, 6));
    assert_faces_closed(&slice);
}

#[test]
fn test_octachoron_slice_along_x() {
    let plane = Hyperplane4::new(Vec4::X, Vec4::ZERO);
    let slice = regular_octachoron().unwrap().cross_section_with(&plane).unwrap();
    assert_eq!(counts(&slice), (8, 12, 6));
    assert!(slice.verts().iter().all(|v| v.x == 0.0));
}

#[test]
fn test_pentachoron_slice_is_tetrahedron() {
    let slice = regular_pentachoron().unwrap().cross_section().unwrap();
    assert_eq!(counts(&slice), (4, 6, 4));
    assert_faces_closed(&slice);
}

#[test]
fn test_hexadecachoron_slice_is_octahedron() {
    let slice = regular_hexadecachoron().unwrap().cross_section().unwrap();
    assert_eq!(counts(&slice), (6, 12, 8));

    let mut shifted = regular_hexadecachoron().unwrap();
    shifted.translate(Vec4::new(0.0, 0.0, 0.0, 0.3));
    let slice = shifted.cross_section().unwrap();
    assert_eq!(counts(&slice), (6, 12, 8));
    assert_faces_closed(&slice);
}

#[test]
fn test_icositetrachoron_slice_is_rhombic_dodecahedron() {
    let slice = regular_icositetrachoron().unwrap().cross_section().unwrap();
    assert_eq!(counts(&slice), (14, 24, 12));
    assert!(slice.faces().iter().all(|f| f.len() == 4));
}

#[test]
fn test_hexacosichoron_slice() {
    let slice = regular_hexacosichoron().unwrap().cross_section().unwrap();
    assert_eq!(counts(&slice), (42, 120, 80));
    assert_eq!(euler_characteristic(&slice), 2);
    assert_faces_closed(&slice);
}

#[test]
fn test_hecatonicosachoron_slice() {
    let slice = regular_hecatonicosachoron().unwrap().cross_section().unwrap();
    assert_eq!(counts(&slice), (80, 120, 42));
    assert_eq!(euler_characteristic(&slice), 2);
}

// ==================== Transformed Polychora ====================

/// A generic orientation keeps vertices off the plane; the cut is a
/// closed convex surface
#[test]
fn test_rotated_icositetrachoron() {
    let euler = Euler4::new([0.3, 0.5, 0.7, 0.2, 0.4, 0.6], Euler4::DEFAULT_ORDERING);
    let mut mesh = regular_icositetrachoron().unwrap();
    mesh.rotate(&euler.as_rotor());

    let slice = mesh.cross_section().unwrap();
    assert_eq!(euler_characteristic(&slice), 2);
    assert!(slice.faces().len() >= 4);
    assert_faces_closed(&slice);
    for v in slice.verts() {
        assert!(v.w.abs() < 1e-12, "vertex off the plane: {:?}", v);
    }
}

#[test]
fn test_transformed_octachoron_matches_matrix_path() {
    let transform = Transform4 {
        translation: Vec4::new(0.1, -0.2, 0.3, 0.05),
        rotation: Rotor4::from_plane_angle(RotationPlane::XW, 0.35)
            .mult(&Rotor4::from_plane_angle(RotationPlane::YZ, 0.2)),
        scale: Vec4::new(1.0, 2.0, 1.0, 1.0),
    };

    let mut by_transform = regular_octachoron().unwrap();
    by_transform.transform(&transform);
    let mut by_matrix = regular_octachoron().unwrap();
    by_matrix.apply_matrix(&transform.matrix());

    let a = by_transform.cross_section().unwrap();
    let b = by_matrix.cross_section().unwrap();
    assert_eq!(counts(&a), counts(&b));
    assert_eq!(euler_characteristic(&a), 2);
}
