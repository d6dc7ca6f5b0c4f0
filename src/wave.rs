use crate::GridSimulation;
use crate::error::{ConfigError, Result};
use crate::grid::Grid;

/// Shallow-wave height-field solver with a static obstacle mask.
///
/// A discrete wave equation: the Laplacian of the height field accelerates a
/// per-cell vertical velocity, velocity decays with a configurable kinetic
/// half-life, and height integrates velocity. The wetness mask scales every
/// update so solid cells act as zero-height, no-flow boundaries. The mask is
/// carved once at construction and read-only afterwards.
#[derive(Debug, Clone)]
pub struct WaveSim {
    width: usize,
    height: usize,
    dt: f32,
    wave_speed: f32,
    grid_spacing: f32,
    halflife: f32,
    screen_width: usize,
    screen_height: usize,
    height_field: Grid,
    velocity: Grid,
    wetness: Grid,
    scratch: Grid,
}

/// Recursion depth of the obstacle carve at construction.
const OBSTACLE_DEPTH: u32 = 3;
/// Fraction of the smaller grid extent covered by the carved region.
const OBSTACLE_EXTENT: f32 = 0.95;
/// Peak of the splash velocity profile.
const SPLASH_STRENGTH: f32 = 20000.0;

impl WaveSim {
    /// Creates a wave tank. `screen_width`/`screen_height` define the fixed
    /// integer downscale used to map pointer coordinates onto grid cells.
    ///
    /// Fails when `dt * wave_speed >= grid_spacing`: the explicit integration
    /// would be Courant-unstable and blow up within a few frames.
    pub fn new(
        height: usize,
        width: usize,
        dt: f32,
        wave_speed: f32,
        grid_spacing: f32,
        halflife: f32,
        screen_height: usize,
        screen_width: usize,
    ) -> Result<Self> {
        if width < 3 {
            return Err(ConfigError::GridTooSmall(width));
        }
        if height < 3 {
            return Err(ConfigError::GridTooSmall(height));
        }
        if dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(dt));
        }
        for (name, value) in [
            ("wave_speed", wave_speed),
            ("grid_spacing", grid_spacing),
            ("halflife", halflife),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveParameter { name, value });
            }
        }
        if screen_width == 0 || screen_height == 0 {
            return Err(ConfigError::EmptyScreen);
        }
        if dt * wave_speed >= grid_spacing {
            return Err(ConfigError::CourantViolation(dt * wave_speed, grid_spacing));
        }

        let mut wetness = Grid::new(width, height);
        wetness.fill(1.0);

        let extent = (width.min(height) as f32 * OBSTACLE_EXTENT) as usize;
        let x0 = (width - extent) / 2;
        let y0 = (height - extent) / 2;
        carve_obstacles(&mut wetness, x0, y0, extent, OBSTACLE_DEPTH);

        Ok(Self {
            width,
            height,
            dt,
            wave_speed,
            grid_spacing,
            halflife,
            screen_width,
            screen_height,
            height_field: Grid::new(width, height),
            velocity: Grid::new(width, height),
            wetness,
            scratch: Grid::new(width, height),
        })
    }

    pub fn height_field(&self) -> &Grid {
        &self.height_field
    }

    pub fn velocity(&self) -> &Grid {
        &self.velocity
    }

    pub fn wetness(&self) -> &Grid {
        &self.wetness
    }

    /// Advances the tank one frame.
    ///
    /// `halflife` is the exponential decay time of kinetic energy. The
    /// velocity update reads the height field from before this step in full
    /// (`scratch` holds the frozen copy) so the stencil never mixes old and
    /// new heights, then the outer ring is pinned to zero velocity, and only
    /// then does height integrate.
    pub fn step(&mut self, halflife: f32) {
        let damp = 0.5_f32.powf(self.dt / halflife);
        let k = (self.wave_speed / self.grid_spacing).powi(2);
        let (w, h) = (self.width, self.height);

        self.scratch.copy_from(&self.height_field);
        let heights = &self.scratch;

        for y in 1..h - 1 {
            for x in 1..w - 1 {
                if self.wetness.get(x, y) <= 0.0 {
                    continue;
                }
                let here = heights.get(x, y);
                let mut accel = 0.0;
                for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                    accel += self.wetness.get(nx, ny) * (heights.get(nx, ny) - here);
                }
                let v = damp * self.velocity.get(x, y) + self.dt * k * accel;
                self.velocity.set(x, y, v);
            }
        }

        // Hard reflecting boundary: the full outer ring carries no velocity.
        for x in 0..w {
            self.velocity.set(x, 0, 0.0);
            self.velocity.set(x, h - 1, 0.0);
        }
        for y in 0..h {
            self.velocity.set(0, y, 0.0);
            self.velocity.set(w - 1, y, 0.0);
        }

        for y in 0..h {
            for x in 0..w {
                if self.wetness.get(x, y) > 0.0 {
                    self.height_field.add(x, y, self.dt * self.velocity.get(x, y));
                }
            }
        }
    }

    /// Pointer splash from screen coordinates.
    ///
    /// Maps the screen position onto a grid cell via fixed integer downscale,
    /// then overwrites (not accumulates) a 3x3 neighborhood's velocity with a
    /// decaying profile. Positions mapping outside the grid are ignored.
    pub fn add_velocity_at_point(&mut self, screen_x: usize, screen_y: usize) {
        let cell_w = (self.screen_width / self.width).max(1);
        let cell_h = (self.screen_height / self.height).max(1);
        self.splash_cell(screen_x / cell_w, screen_y / cell_h);
    }

    fn splash_cell(&mut self, gx: usize, gy: usize) {
        if gx >= self.width || gy >= self.height {
            return;
        }
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                let px = gx as i32 + dx;
                let py = gy as i32 + dy;
                if px < 0 || py < 0 || px as usize >= self.width || py as usize >= self.height {
                    continue;
                }
                let profile = SPLASH_STRENGTH / (1.0 + (dx * dx + dy * dy) as f32);
                self.velocity.set(px as usize, py as usize, profile);
            }
        }
    }

    /// Color for one cell: solid obstacles get a fixed sand color, water is
    /// shaded by mapping height linearly into the blue channel.
    pub fn wave_rgba(&self, x: usize, y: usize) -> [u8; 4] {
        if self.wetness.get(x, y) <= 0.0 {
            return [140, 110, 70, 255];
        }
        let blue = (128.0 + self.height_field.get(x, y)).clamp(0.0, 255.0) as u8;
        [20, 60, blue, 255]
    }
}

/// Sierpinski-carpet carve of the wetness mask.
///
/// Splits `(x, y, size)` into a 3x3 grid of sub-squares, zeroes the center
/// one, and recurses into the 8 others at `level - 1`. Stops when the level
/// runs out or the region can no longer be subdivided.
pub fn carve_obstacles(wetness: &mut Grid, x: usize, y: usize, size: usize, level: u32) {
    if level == 0 || size < 3 {
        return;
    }
    let third = size / 3;

    for cy in y + third..y + 2 * third {
        for cx in x + third..x + 2 * third {
            wetness.set(cx, cy, 0.0);
        }
    }

    for sy in 0..3 {
        for sx in 0..3 {
            if sx == 1 && sy == 1 {
                continue;
            }
            carve_obstacles(wetness, x + sx * third, y + sy * third, third, level - 1);
        }
    }
}

impl GridSimulation for WaveSim {
    fn step(&mut self) {
        self.step(self.halflife);
    }

    fn splash(&mut self, x: usize, y: usize) {
        self.splash_cell(x, y);
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell_rgba(&self, x: usize, y: usize) -> [u8; 4] {
        self.wave_rgba(x, y)
    }
}
