use crate::GridSimulation;
use crate::boundary::{self, FieldKind};
use crate::error::{ConfigError, Result};
use crate::grid::Grid;
use crate::solver::{self, RELAX_ITERATIONS};
use glam::Vec2;

/// Incompressible velocity/density solver on a square grid.
///
/// Classic splitting scheme: implicit diffusion, pressure projection, and
/// semi-Lagrangian advection, each followed by boundary enforcement. The
/// density field is what gets rendered; `s` and the `v*0` fields are scratch
/// reused across passes.
#[derive(Debug, Clone)]
pub struct FluidSim {
    size: usize,
    dt: f32,
    diffusion: f32,
    viscosity: f32,
    s: Grid,
    density: Grid,
    vx: Grid,
    vy: Grid,
    vx0: Grid,
    vy0: Grid,
}

impl FluidSim {
    /// Density injected by a pointer-down splash.
    pub const SPLASH_DENSITY: f32 = 100.0;

    pub fn new(size: usize, dt: f32, diffusion: f32, viscosity: f32) -> Result<Self> {
        if size < 3 {
            return Err(ConfigError::GridTooSmall(size));
        }
        if dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(dt));
        }
        if diffusion < 0.0 {
            return Err(ConfigError::NegativeRate {
                name: "diffusion",
                value: diffusion,
            });
        }
        if viscosity < 0.0 {
            return Err(ConfigError::NegativeRate {
                name: "viscosity",
                value: viscosity,
            });
        }

        Ok(Self {
            size,
            dt,
            diffusion,
            viscosity,
            s: Grid::new(size, size),
            density: Grid::new(size, size),
            vx: Grid::new(size, size),
            vy: Grid::new(size, size),
            vx0: Grid::new(size, size),
            vy0: Grid::new(size, size),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn density(&self) -> &Grid {
        &self.density
    }

    pub fn velocity_x(&self) -> &Grid {
        &self.vx
    }

    pub fn velocity_y(&self) -> &Grid {
        &self.vy
    }

    /// Adds `amount` of density at one cell (accumulates with what is
    /// already there). Out-of-range coordinates are ignored.
    pub fn add_density(&mut self, x: usize, y: usize, amount: f32) {
        if x < self.size && y < self.size {
            self.density.add(x, y, amount);
        }
    }

    /// Adds a velocity impulse at one cell (accumulates). Out-of-range
    /// coordinates are ignored.
    pub fn add_velocity(&mut self, x: usize, y: usize, amount: Vec2) {
        if x < self.size && y < self.size {
            self.vx.add(x, y, amount.x);
            self.vy.add(x, y, amount.y);
        }
    }

    /// Advances the simulation one frame.
    ///
    /// Pass order is fixed: velocity diffusion, projection, velocity
    /// self-advection, a second projection to clean up divergence introduced
    /// by advection, then density diffusion and transport.
    pub fn step(&mut self) {
        let dt = self.dt;
        let visc = self.viscosity;
        let diff = self.diffusion;

        solver::diffuse(
            &mut self.vx0,
            &self.vx,
            FieldKind::VelocityX,
            visc,
            dt,
            RELAX_ITERATIONS,
        );
        solver::diffuse(
            &mut self.vy0,
            &self.vy,
            FieldKind::VelocityY,
            visc,
            dt,
            RELAX_ITERATIONS,
        );

        Self::project(&mut self.vx0, &mut self.vy0, &mut self.vx, &mut self.vy);

        Self::advect(
            &mut self.vx,
            &self.vx0,
            FieldKind::VelocityX,
            &self.vx0,
            &self.vy0,
            dt,
        );
        Self::advect(
            &mut self.vy,
            &self.vy0,
            FieldKind::VelocityY,
            &self.vx0,
            &self.vy0,
            dt,
        );

        Self::project(&mut self.vx, &mut self.vy, &mut self.vx0, &mut self.vy0);

        solver::diffuse(
            &mut self.s,
            &self.density,
            FieldKind::Scalar,
            diff,
            dt,
            RELAX_ITERATIONS,
        );
        Self::advect(
            &mut self.density,
            &self.s,
            FieldKind::Scalar,
            &self.vx,
            &self.vy,
            dt,
        );
    }

    /// Removes the compressive component of the velocity field.
    ///
    /// Solves a pressure Poisson equation against the divergence and
    /// subtracts the pressure gradient, leaving the field approximately
    /// divergence-free. `pressure` and `div` are scratch and are fully
    /// overwritten.
    fn project(veloc_x: &mut Grid, veloc_y: &mut Grid, pressure: &mut Grid, div: &mut Grid) {
        let n = veloc_x.width();
        let nf = n as f32;

        for y in 1..n - 1 {
            for x in 1..n - 1 {
                let d = -0.5
                    * (veloc_x.get(x + 1, y) - veloc_x.get(x - 1, y) + veloc_y.get(x, y + 1)
                        - veloc_y.get(x, y - 1))
                    / nf;
                div.set(x, y, d);
                pressure.set(x, y, 0.0);
            }
        }
        boundary::enforce(div, FieldKind::Scalar);
        boundary::enforce(pressure, FieldKind::Scalar);

        solver::relax(pressure, div, FieldKind::Scalar, 1.0, 6.0, RELAX_ITERATIONS);

        for y in 1..n - 1 {
            for x in 1..n - 1 {
                let gx = 0.5 * (pressure.get(x + 1, y) - pressure.get(x - 1, y)) * nf;
                let gy = 0.5 * (pressure.get(x, y + 1) - pressure.get(x, y - 1)) * nf;
                veloc_x.add(x, y, -gx);
                veloc_y.add(x, y, -gy);
            }
        }

        boundary::enforce(veloc_x, FieldKind::VelocityX);
        boundary::enforce(veloc_y, FieldKind::VelocityY);
    }

    /// Semi-Lagrangian transport of `source` along `(veloc_x, veloc_y)`.
    ///
    /// Each interior cell traces backward to find where its value came from
    /// and samples the source field there with bilinear interpolation. The
    /// traced position is clamped to `[0.5, n - 1.5]` so all four sample
    /// points stay in bounds. Unconditionally stable for any velocity.
    fn advect(
        dest: &mut Grid,
        source: &Grid,
        kind: FieldKind,
        veloc_x: &Grid,
        veloc_y: &Grid,
        dt: f32,
    ) {
        let n = dest.width();
        let dt0 = dt * (n - 2) as f32;
        let clamp_max = n as f32 - 1.5;

        for y in 1..n - 1 {
            for x in 1..n - 1 {
                let src_x = (x as f32 - dt0 * veloc_x.get(x, y)).clamp(0.5, clamp_max);
                let src_y = (y as f32 - dt0 * veloc_y.get(x, y)).clamp(0.5, clamp_max);

                let x0 = src_x.floor() as usize;
                let y0 = src_y.floor() as usize;
                let x1 = x0 + 1;
                let y1 = y0 + 1;

                let s1 = src_x - x0 as f32;
                let s0 = 1.0 - s1;
                let t1 = src_y - y0 as f32;
                let t0 = 1.0 - t1;

                let value = s0 * (t0 * source.get(x0, y0) + t1 * source.get(x0, y1))
                    + s1 * (t0 * source.get(x1, y0) + t1 * source.get(x1, y1));
                dest.set(x, y, value);
            }
        }

        boundary::enforce(dest, kind);
    }

    /// Color for one cell: hue drifts with density, density drives both
    /// brightness and alpha, so thin smoke fades out instead of popping.
    pub fn density_rgba(&self, x: usize, y: usize) -> [u8; 4] {
        let d = self.density.get(x, y);
        if d <= 0.0 {
            return [0, 0, 0, 255];
        }
        let hue = (d + 50.0) % 255.0 * (360.0 / 255.0);
        let value = (d / 100.0).min(1.0);
        let (r, g, b) = hsv_to_rgb(hue, 0.8, value);
        let alpha = ((d * 0.2).min(255.0) as u8).max(10);
        [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8, alpha]
    }
}

/// Hue in degrees, saturation and value in `[0, 1]`.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let i = ((h / 60.0) as i32).rem_euclid(6);
    let f = h / 60.0 - (h / 60.0).floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match i {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

impl GridSimulation for FluidSim {
    fn step(&mut self) {
        self.step();
    }

    /// Pointer splash: injects a fixed slug of density at the cell.
    fn splash(&mut self, x: usize, y: usize) {
        self.add_density(x, y, Self::SPLASH_DENSITY);
    }

    fn width(&self) -> usize {
        self.size
    }

    fn height(&self) -> usize {
        self.size
    }

    fn cell_rgba(&self, x: usize, y: usize) -> [u8; 4] {
        self.density_rgba(x, y)
    }
}
