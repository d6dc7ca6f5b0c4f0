use crate::GridSimulation;
use image::{ImageBuffer, Rgba, RgbaImage};

/// Rasterizes a simulation to an RGBA image at a fixed output resolution.
pub struct Renderer {
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Nearest-cell upscale of the simulation's own color mapping.
    pub fn render_to_image(&self, sim: &impl GridSimulation) -> RgbaImage {
        let mut img = ImageBuffer::new(self.width, self.height);

        let scale_x = self.width as f32 / sim.width() as f32;
        let scale_y = self.height as f32 / sim.height() as f32;

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let sim_x = (x as f32 / scale_x) as usize;
            let sim_y = (y as f32 / scale_y) as usize;

            if sim_x < sim.width() && sim_y < sim.height() {
                *pixel = Rgba(sim.cell_rgba(sim_x, sim_y));
            } else {
                *pixel = Rgba([0, 0, 0, 255]);
            }
        }

        img
    }
}
