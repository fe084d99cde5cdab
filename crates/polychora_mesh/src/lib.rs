//! 4D Mesh Library
//!
//! Topology and construction of 4D polytopes on top of `polychora_math`.
//!
//! ## Core Types
//!
//! - [`Mesh4`] - arena of vertices, edges, faces and cells
//! - [`Edge`], [`EdgeLoop`], [`Face`], [`Cell`] - facets, referring to each other by id
//! - [`FacetKey`] - order-independent identity of a facet's index list
//! - [`CellBuilder`] - assembles polytopes from cell templates
//! - [`Polytope`] - the regular shapes this crate can build
//!
//! ## Operations
//!
//! - [`Mesh4::dual`] - swap cells for vertices, faces for edges
//! - [`Mesh4::cross_section`] - slice with the w = 0 hyperplane
//! - [`reorder_edges`] - order a bag of edges into a face

mod error;
mod facet_key;
mod mesh4;
pub mod edge_loop;
pub mod cell_builder;
pub mod construct;
mod dual;
mod cross_section;

pub use error::MeshError;
pub use facet_key::FacetKey;
pub use mesh4::{Cell, CellId, Edge, EdgeId, EdgeLoop, Face, FaceId, Mesh4, VertId};
pub use edge_loop::{reorder_edge_cycles, reorder_edges};
pub use cell_builder::CellBuilder;
pub use construct::{
    regular_hecatonicosachoron, regular_hexacosichoron, regular_hexadecachoron, regular_hexahedron,
    regular_icositetrachoron, regular_octachoron, regular_pentachoron, Polytope,
};
