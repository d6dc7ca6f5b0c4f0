use crate::fluid::FluidSim;
use crate::wave::WaveSim;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// Per-frame diagnostics for the velocity/density engine.
#[derive(Debug, Clone, Serialize)]
pub struct FluidMetrics {
    pub frame: usize,
    pub total_mass: f32,
    pub max_density: f32,
    pub total_kinetic_energy: f32,
    pub max_velocity: f32,
    pub divergence_norm: f32,
}

impl FluidMetrics {
    pub fn analyze(sim: &FluidSim, frame: usize) -> Self {
        let n = sim.size();
        let density = sim.density().as_slice();
        let vx = sim.velocity_x().as_slice();
        let vy = sim.velocity_y().as_slice();

        let (total_mass, max_density) = density
            .par_iter()
            .map(|&d| (d, d))
            .reduce(|| (0.0, f32::MIN), |(s1, m1), (s2, m2)| (s1 + s2, m1.max(m2)));

        let (total_kinetic_energy, max_velocity) = vx
            .par_iter()
            .zip(vy)
            .map(|(&x, &y)| {
                let mag_sq = x * x + y * y;
                (0.5 * mag_sq, mag_sq.sqrt())
            })
            .reduce(|| (0.0, 0.0), |(e1, m1), (e2, m2)| (e1 + e2, m1.max(m2)));

        let mut divergence_norm = 0.0;
        for y in 1..n - 1 {
            for x in 1..n - 1 {
                let idx = y * n + x;
                let div = (vx[idx + 1] - vx[idx - 1] + vy[idx + n] - vy[idx - n]) / 2.0;
                divergence_norm += div.abs();
            }
        }
        divergence_norm /= ((n - 2) * (n - 2)) as f32;

        Self {
            frame,
            total_mass,
            max_density,
            total_kinetic_energy,
            max_velocity,
            divergence_norm,
        }
    }

    pub fn print_summary(&self) {
        println!("Frame {} metrics:", self.frame);
        println!("  Total mass: {:.6}", self.total_mass);
        println!("  Max density: {:.6}", self.max_density);
        println!("  Kinetic energy: {:.6}", self.total_kinetic_energy);
        println!("  Max velocity: {:.6}", self.max_velocity);
        println!("  Divergence norm: {:.6}", self.divergence_norm);
        println!();
    }
}

/// Per-frame diagnostics for the wave engine.
#[derive(Debug, Clone, Serialize)]
pub struct WaveMetrics {
    pub frame: usize,
    pub surface_energy: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub wet_cells: usize,
}

impl WaveMetrics {
    pub fn analyze(sim: &WaveSim, frame: usize) -> Self {
        let heights = sim.height_field().as_slice();
        let wet = sim.wetness().as_slice();

        let (surface_energy, min_height, max_height, wet_cells) = heights
            .par_iter()
            .zip(wet)
            .map(|(&h, &w)| {
                if w > 0.0 {
                    (h * h, h, h, 1usize)
                } else {
                    (0.0, f32::MAX, f32::MIN, 0)
                }
            })
            .reduce(
                || (0.0, f32::MAX, f32::MIN, 0),
                |(e1, lo1, hi1, c1), (e2, lo2, hi2, c2)| {
                    (e1 + e2, lo1.min(lo2), hi1.max(hi2), c1 + c2)
                },
            );

        Self {
            frame,
            surface_energy,
            min_height,
            max_height,
            wet_cells,
        }
    }

    pub fn print_summary(&self) {
        println!("Frame {} metrics:", self.frame);
        println!("  Surface energy: {:.6}", self.surface_energy);
        println!(
            "  Height range: {:.6} .. {:.6}",
            self.min_height, self.max_height
        );
        println!("  Wet cells: {}", self.wet_cells);
        println!();
    }
}

/// Collects frame metrics and dumps trends and a JSON report afterwards.
pub struct MetricsRecorder {
    pub history: Vec<FluidMetrics>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    pub fn record(&mut self, sim: &FluidSim, frame: usize) {
        self.history.push(FluidMetrics::analyze(sim, frame));
    }

    pub fn print_trends(&self) {
        let (Some(first), Some(last)) = (self.history.first(), self.history.last()) else {
            return;
        };
        if self.history.len() < 2 {
            return;
        }

        println!("=== TREND ANALYSIS ===");
        println!(
            "Mass: {:.6} -> {:.6} ({:+.3}%)",
            first.total_mass,
            last.total_mass,
            (last.total_mass - first.total_mass) / first.total_mass.max(0.001) * 100.0
        );
        println!(
            "Kinetic energy: {:.6} -> {:.6} ({:+.3}%)",
            first.total_kinetic_energy,
            last.total_kinetic_energy,
            (last.total_kinetic_energy - first.total_kinetic_energy)
                / first.total_kinetic_energy.max(0.001)
                * 100.0
        );
        println!(
            "Divergence norm: {:.6} -> {:.6}",
            first.divergence_norm, last.divergence_norm
        );
    }

    pub fn write_json(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.history)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
