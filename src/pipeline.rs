//! Build, place and slice a configured polytope

use std::fmt;

use log::{debug, info};
use polychora_math::{Euler4, EulerFit};
use polychora_mesh::{Mesh4, MeshError};

use crate::config::AppConfig;

/// Element counts of a mesh
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FacetCounts {
    pub verts: usize,
    pub edges: usize,
    pub faces: usize,
    pub cells: usize,
}

impl FacetCounts {
    pub fn of(mesh: &Mesh4) -> Self {
        Self {
            verts: mesh.verts().len(),
            edges: mesh.edges().len(),
            faces: mesh.faces().len(),
            cells: mesh.cells().len(),
        }
    }

    /// V - E + F - C
    pub fn euler_characteristic(&self) -> i64 {
        self.verts as i64 - self.edges as i64 + self.faces as i64 - self.cells as i64
    }
}

impl fmt::Display for FacetCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} verts, {} edges, {} faces, {} cells",
            self.verts, self.edges, self.faces, self.cells
        )
    }
}

/// Outcome of [`run`]
#[derive(Clone, Debug)]
pub struct SliceReport {
    pub shape: &'static str,
    pub source: FacetCounts,
    pub slice: FacetCounts,
    /// Angles recovered from the configured rotation
    pub fit: EulerFit,
    /// Length of the slice's triangle buffer (4 floats per corner)
    pub triangle_floats: usize,
    /// Length of the slice's line buffer (4 floats per endpoint)
    pub line_floats: usize,
}

/// Build the configured polytope, place it and cut it with w = 0
pub fn run(config: &AppConfig) -> Result<SliceReport, MeshError> {
    let shape = config.polytope.shape;
    let mut mesh = shape.build()?;
    if config.polytope.dual {
        mesh = mesh.dual()?;
    }
    debug!("Built {}: {}", shape.name(), FacetCounts::of(&mesh));

    mesh.scale(config.polytope.scale);
    let transform = config.transform.to_transform();
    mesh.transform(&transform);

    let fit = Euler4::fit_rotor(&transform.rotation, config.transform.plane_order, &config.euler);
    if fit.residual > 1e-6 {
        info!("Euler fit settled with residual {:e}", fit.residual);
    }

    let slice = mesh.cross_section()?;
    let report = SliceReport {
        shape: shape.name(),
        source: FacetCounts::of(&mesh),
        slice: FacetCounts::of(&slice),
        fit,
        triangle_floats: slice.triangle_coords().len(),
        line_floats: slice.lines_coords().len(),
    };
    info!("Sliced {}: {}", report.shape, report.slice);
    Ok(report)
}
