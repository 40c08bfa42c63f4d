//! wire4d - rotating tesseract wireframe driver
//!
//! Computes the wireframe of a rotating 4D hypercube one frame at a time
//! and writes the resulting segment sequence to disk for an external
//! renderer or encoder to consume.

use std::path::Path;

use wire4d::config::AppConfig;
use wire4d::writer::{self, FrameRecord};
use wire4d_geom::FrameBuilder;

fn main() {
    // Load configuration first so the log filter default can come from it
    let (config, load_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_err {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    log::info!("Starting wire4d");
    log::info!(
        "Computing {} frames at {} deg/frame in planes {:?}",
        config.rotation.frames,
        config.rotation.angle_step,
        config.rotation.planes
    );

    let builder = FrameBuilder::new()
        .with_base_scale(config.projection.base_scale)
        .with_edge_threshold(config.wireframe.edge_threshold);

    let mut records = Vec::with_capacity(config.rotation.frames as usize);
    for frame in 0..config.rotation.frames {
        let angle = frame as f64 * config.rotation.angle_step;
        let segments = builder
            .build(&config.rotation.planes, angle)
            .unwrap_or_else(|e| panic!("Failed to build frame {}: {}", frame, e));
        records.push(FrameRecord {
            angle_degrees: angle,
            segments,
        });
    }

    writer::write_frames(Path::new(&config.output.path), config.output.format, &records)
        .unwrap_or_else(|e| panic!("Failed to write '{}': {}", config.output.path, e));

    log::info!("Wrote {} frames to {}", records.len(), config.output.path);
}
