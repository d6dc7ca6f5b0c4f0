use crate::GridSimulation;
use crate::fluid::FluidSim;
use crate::render::Renderer;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

/// PNG export for headless runs.
pub struct ImageExporter {
    renderer: Renderer,
    width: u32,
    height: u32,
}

impl ImageExporter {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            renderer: Renderer::new(width, height),
            width,
            height,
        }
    }

    /// Writes the simulation's own color mapping as a PNG.
    pub fn export_png(
        &self,
        sim: &impl GridSimulation,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let img = self.renderer.render_to_image(sim);
        img.save(path)?;
        Ok(())
    }

    /// Writes a velocity-magnitude view of the fluid engine: x-speed in the
    /// red channel, y-speed in green.
    pub fn export_velocity_png(
        &self,
        sim: &FluidSim,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut img: RgbImage = ImageBuffer::new(self.width, self.height);
        let n = sim.size();

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let sim_x = (x as f32 / self.width as f32 * n as f32) as usize;
            let sim_y = (y as f32 / self.height as f32 * n as f32) as usize;

            if sim_x < n && sim_y < n {
                let vx = sim.velocity_x().get(sim_x, sim_y);
                let vy = sim.velocity_y().get(sim_x, sim_y);
                let r = (vx.abs() * 255.0).min(255.0) as u8;
                let g = (vy.abs() * 255.0).min(255.0) as u8;
                *pixel = Rgb([r, g, 128]);
            } else {
                *pixel = Rgb([0, 0, 0]);
            }
        }

        img.save(path)?;
        Ok(())
    }
}
