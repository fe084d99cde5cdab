//! Polychora - slice a regular 4D polytope with the w = 0 hyperplane
//!
//! Shape, placement and logging come from `config/` and `POLY_*`
//! environment variables.

use polychora::{pipeline, AppConfig};

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // RUST_LOG still takes precedence over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Polychora");

    let report = match pipeline::run(&config) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Failed to slice {}: {}", config.polytope.shape.name(), e);
            std::process::exit(1);
        }
    };

    log::info!("Source {}: {}", report.shape, report.source);
    log::info!("Cross-section: {}", report.slice);
    log::info!(
        "Euler angles {:?} (residual {:e})",
        report.fit.euler.angles,
        report.fit.residual
    );
    log::info!(
        "Buffers: {} triangle floats, {} line floats",
        report.triangle_floats,
        report.line_floats
    );
}
