//! 2D grid fluid and shallow-wave simulation.
//!
//! Two solver engines share one pipeline shape: a fixed-size grid of float
//! fields advanced by local-stencil passes with boundary enforcement after
//! each pass. [`FluidSim`] is an incompressible velocity/density solver
//! (diffuse, project, advect); [`WaveSim`] is a damped height-field wave
//! solver with a fractal obstacle mask. Both implement [`GridSimulation`],
//! which is all the rendering and input glue is allowed to see.

pub mod app;
pub mod boundary;
pub mod error;
pub mod export;
pub mod fluid;
pub mod grid;
pub mod metrics;
pub mod render;
pub mod rng;
pub mod snapshot;
pub mod solver;
pub mod wave;

/// A steppable grid simulation: advance one frame, force one cell, and map
/// cells to colors for whoever draws them.
pub trait GridSimulation {
    fn step(&mut self);
    fn splash(&mut self, x: usize, y: usize);
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn cell_rgba(&self, x: usize, y: usize) -> [u8; 4];
}

pub use app::SimApp;
pub use boundary::FieldKind;
pub use error::{ConfigError, Result};
pub use export::ImageExporter;
pub use fluid::FluidSim;
pub use grid::Grid;
pub use metrics::{FluidMetrics, MetricsRecorder, WaveMetrics};
pub use render::Renderer;
pub use rng::SmoothRandom;
pub use snapshot::{FieldSnapshot, SnapshotPublisher, snapshot_channel};
pub use wave::WaveSim;
