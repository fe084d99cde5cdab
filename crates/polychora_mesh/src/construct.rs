//! Regular polytope constructors
//!
//! Vertex layouts follow fixed index patterns so cells can be picked out by
//! index arithmetic:
//!
//! - 16-cell vertices: `(±1, 0, 0, 0)` permutations, index `axis * 2 + negative`
//! - 8-cell vertices: `(±½, ±½, ±½, ±½)`, index bit `k` set means axis `k` is negative

use serde::{Deserialize, Serialize};

use polychora_math::Vec4;

use crate::{CellBuilder, Mesh4, MeshError};

const PHI: f64 = 1.618_033_988_749_895;
const PHI_INV: f64 = PHI - 1.0;
const EPSILON: f64 = 1e-12;

/// Even permutations of four positions
const EVEN_PERMUTATIONS: [[usize; 4]; 12] = [
    [0, 1, 2, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
    [1, 0, 3, 2],
    [1, 2, 0, 3],
    [1, 3, 2, 0],
    [2, 0, 1, 3],
    [2, 1, 3, 0],
    [2, 3, 0, 1],
    [3, 0, 2, 1],
    [3, 1, 0, 2],
    [3, 2, 1, 0],
];

/// Selectable regular shapes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polytope {
    /// Cube in the w = 0 hyperplane, faces only
    Hexahedron,
    #[serde(alias = "5-cell")]
    Pentachoron,
    #[default]
    #[serde(alias = "8-cell", alias = "tesseract")]
    Octachoron,
    #[serde(alias = "16-cell")]
    Hexadecachoron,
    #[serde(alias = "24-cell")]
    Icositetrachoron,
    #[serde(alias = "120-cell")]
    Hecatonicosachoron,
    #[serde(alias = "600-cell")]
    Hexacosichoron,
}

impl Polytope {
    pub const ALL: [Self; 7] = [
        Self::Hexahedron,
        Self::Pentachoron,
        Self::Octachoron,
        Self::Hexadecachoron,
        Self::Icositetrachoron,
        Self::Hecatonicosachoron,
        Self::Hexacosichoron,
    ];

    pub fn build(self) -> Result<Mesh4, MeshError> {
        match self {
            Self::Hexahedron => regular_hexahedron(),
            Self::Pentachoron => regular_pentachoron(),
            Self::Octachoron => regular_octachoron(),
            Self::Hexadecachoron => regular_hexadecachoron(),
            Self::Icositetrachoron => regular_icositetrachoron(),
            Self::Hecatonicosachoron => regular_hecatonicosachoron(),
            Self::Hexacosichoron => regular_hexacosichoron(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hexahedron => "hexahedron",
            Self::Pentachoron => "pentachoron",
            Self::Octachoron => "octachoron",
            Self::Hexadecachoron => "hexadecachoron",
            Self::Icositetrachoron => "icositetrachoron",
            Self::Hecatonicosachoron => "hecatonicosachoron",
            Self::Hexacosichoron => "hexacosichoron",
        }
    }
}

/// `(±½, ±½, ±½, ±½)` in binary sign order
fn octachoron_verts() -> Vec<Vec4> {
    (0..16usize)
        .map(|i| {
            let c = |axis: usize| if i >> axis & 1 == 1 { -0.5 } else { 0.5 };
            Vec4::new(c(0), c(1), c(2), c(3))
        })
        .collect()
}

/// `(±1, 0, 0, 0)` permutations, positive before negative per axis
fn hexadecachoron_verts() -> Vec<Vec4> {
    (0..4)
        .flat_map(|axis| [Vec4::basis(axis), -Vec4::basis(axis)])
        .collect()
}

/// Cube of circumradius 1 in the w = 0 hyperplane, with faces but no cells
pub fn regular_hexahedron() -> Result<Mesh4, MeshError> {
    let c = (1.0f64 / 3.0).sqrt();
    let verts = (0..8usize)
        .map(|i| {
            let v = |axis: usize| if i >> axis & 1 == 1 { -c } else { c };
            Vec4::new(v(0), v(1), v(2), 0.0)
        })
        .collect();

    Mesh4::from_verts_faces(
        verts,
        &[
            [0usize, 1, 3, 2],
            [4, 5, 7, 6],
            [1, 3, 7, 5],
            [0, 2, 6, 4],
            [0, 1, 5, 4],
            [2, 3, 7, 6],
        ],
    )
}

/// 5-cell: 5 tetrahedra, one per 4-subset of the vertices
pub fn regular_pentachoron() -> Result<Mesh4, MeshError> {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let f = (1.0f64 / 5.0).sqrt();
    let verts = [
        Vec4::new(s, s, s, -f),
        Vec4::new(-s, -s, s, -f),
        Vec4::new(-s, s, -s, -f),
        Vec4::new(s, -s, -s, -f),
        Vec4::new(0.0, 0.0, 0.0, 5.0f64.sqrt() - f),
    ]
    .map(Vec4::normalized);

    let mut builder = CellBuilder::new(&verts);
    for cell in [[0, 1, 2, 3], [0, 1, 2, 4], [0, 1, 3, 4], [0, 2, 3, 4], [1, 2, 3, 4]] {
        builder.add_tetrahedron_cell(cell)?;
    }
    builder.mesh()
}

/// 8-cell (tesseract) with edge length 1
pub fn regular_octachoron() -> Result<Mesh4, MeshError> {
    let verts = octachoron_verts();
    let cells = [
        [0, 2, 4, 6, 8, 10, 12, 14],
        [1, 3, 5, 7, 9, 11, 13, 15],
        [0, 1, 4, 5, 8, 9, 12, 13],
        [2, 3, 6, 7, 10, 11, 14, 15],
        [0, 1, 2, 3, 8, 9, 10, 11],
        [4, 5, 6, 7, 12, 13, 14, 15],
        [0, 1, 2, 3, 4, 5, 6, 7],
        [8, 9, 10, 11, 12, 13, 14, 15],
    ];

    let mut builder = CellBuilder::new(&verts);
    for cell in cells {
        builder.add_hexahedron_cell(cell)?;
    }
    builder.mesh()
}

/// 16-cell: one tetrahedron per choice of one vertex from each axis pair
pub fn regular_hexadecachoron() -> Result<Mesh4, MeshError> {
    let verts = hexadecachoron_verts();
    let mut builder = CellBuilder::new(&verts);
    for x in 0..2 {
        for y in 2..4 {
            for z in 4..6 {
                for w in 6..8 {
                    builder.add_tetrahedron_cell([x, y, z, w])?;
                }
            }
        }
    }
    builder.mesh()
}

/// 24-cell: 24 octahedra over the 16-cell and 8-cell vertices combined
pub fn regular_icositetrachoron() -> Result<Mesh4, MeshError> {
    let mut verts = hexadecachoron_verts();
    verts.extend(octachoron_verts());

    let mut builder = CellBuilder::new(&verts);
    for axis0 in 0..3 {
        for axis1 in axis0 + 1..4 {
            let mut rest = (0..4).filter(|a| *a != axis0 && *a != axis1);
            let (Some(r0), Some(r1)) = (rest.next(), rest.next()) else {
                continue;
            };
            let flip0 = 1 << r0;
            let flip1 = 1 << r1;

            for signs in 0..4usize {
                let neg0 = signs >> 1 & 1;
                let neg1 = signs & 1;
                // 8-cell vertex agreeing in sign with both poles
                let base = 8 + (neg0 << axis0) + (neg1 << axis1);
                builder.add_octahedron_cell([
                    axis0 * 2 + neg0,
                    axis1 * 2 + neg1,
                    base,
                    base + flip0 + flip1,
                    base + flip0,
                    base + flip1,
                ])?;
            }
        }
    }
    builder.mesh()
}

/// 600-cell: tetrahedra found among mutually adjacent vertex quadruples
pub fn regular_hexacosichoron() -> Result<Mesh4, MeshError> {
    let mut verts = hexadecachoron_verts();
    verts.extend(octachoron_verts());

    // Even permutations of (±φ, ±1, ±φ⁻¹, 0) / 2
    let magnitudes = [PHI / 2.0, 0.5, PHI_INV / 2.0];
    for signs in 0..8usize {
        let mut values = [0.0; 4];
        for (j, m) in magnitudes.iter().enumerate() {
            values[j] = if signs >> j & 1 == 1 { -m } else { *m };
        }
        for perm in EVEN_PERMUTATIONS {
            verts.push(Vec4::new(values[perm[0]], values[perm[1]], values[perm[2]], values[perm[3]]));
        }
    }

    // Forward adjacency: neighbours with a greater index at edge length φ⁻¹
    let n = verts.len();
    let adjacent: Vec<Vec<usize>> = (0..n)
        .map(|i| {
            (i + 1..n)
                .filter(|&j| (verts[i].dist(verts[j]) - PHI_INV).abs() < EPSILON)
                .collect()
        })
        .collect();
    let linked = |a: usize, b: usize| adjacent[a].binary_search(&b).is_ok();

    let mut builder = CellBuilder::new(&verts);
    for (i, neighbours) in adjacent.iter().enumerate() {
        for (x, &a) in neighbours.iter().enumerate() {
            for (y, &b) in neighbours.iter().enumerate().skip(x + 1) {
                if !linked(a, b) {
                    continue;
                }
                for &c in &neighbours[y + 1..] {
                    if linked(a, c) && linked(b, c) {
                        builder.add_tetrahedron_cell([i, a, b, c])?;
                    }
                }
            }
        }
    }
    builder.mesh()
}

/// 120-cell, built as the dual of the 600-cell
pub fn regular_hecatonicosachoron() -> Result<Mesh4, MeshError> {
    regular_hexacosichoron()?.dual()
}
