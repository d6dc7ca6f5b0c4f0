use crate::GridSimulation;
use crate::fluid::FluidSim;
use crate::rng::SmoothRandom;
use crate::wave::WaveSim;
use eframe::egui;
use glam::Vec2;

const GRID_SIZE: usize = 100;
const SCREEN_EXTENT: usize = 500;

/// Which solver the app is currently driving.
enum Engine {
    Fluid(FluidSim),
    Wave(WaveSim),
}

impl Engine {
    fn fluid() -> Self {
        // Stam-style defaults: slow dye diffusion, nearly inviscid.
        Engine::Fluid(
            FluidSim::new(GRID_SIZE, 0.1, 0.0001, 0.0000001)
                .expect("fixed fluid configuration is valid"),
        )
    }

    fn wave() -> Self {
        Engine::Wave(
            WaveSim::new(
                GRID_SIZE,
                GRID_SIZE,
                0.05,
                4.0,
                1.0,
                0.5,
                SCREEN_EXTENT,
                SCREEN_EXTENT,
            )
            .expect("fixed wave configuration is valid"),
        )
    }

    fn sim(&self) -> &dyn GridSimulation {
        match self {
            Engine::Fluid(f) => f,
            Engine::Wave(w) => w,
        }
    }

    fn sim_mut(&mut self) -> &mut dyn GridSimulation {
        match self {
            Engine::Fluid(f) => f,
            Engine::Wave(w) => w,
        }
    }
}

/// Interactive desktop app: drag to stir the fluid, click to splash the
/// wave tank. The window glue only ever touches the `GridSimulation`
/// surface plus the fluid forcing calls.
pub struct SimApp {
    engine: Engine,
    paused: bool,
    ambient_forcing: bool,
    frame_count: usize,
    cell_size: f32,
    drag_start: Option<egui::Pos2>,
    forcing_x: SmoothRandom,
    forcing_y: SmoothRandom,
}

impl SimApp {
    pub fn new_fluid(seed: u64) -> Self {
        Self::with_engine(Engine::fluid(), seed)
    }

    pub fn new_wave(seed: u64) -> Self {
        Self::with_engine(Engine::wave(), seed)
    }

    fn with_engine(engine: Engine, seed: u64) -> Self {
        Self {
            engine,
            paused: false,
            ambient_forcing: true,
            frame_count: 0,
            cell_size: 5.0,
            drag_start: None,
            forcing_x: SmoothRandom::from_seed(-1.0, 1.0, SmoothRandom::DEFAULT_SMOOTHING, seed),
            forcing_y: SmoothRandom::from_seed(
                -1.0,
                1.0,
                SmoothRandom::DEFAULT_SMOOTHING,
                seed.wrapping_add(1),
            ),
        }
    }

    fn grid_cell(&self, pos: egui::Pos2, canvas: egui::Rect) -> Option<(usize, usize)> {
        let x = ((pos.x - canvas.left()) / self.cell_size) as isize;
        let y = ((pos.y - canvas.top()) / self.cell_size) as isize;
        let sim = self.engine.sim();
        if x >= 0 && y >= 0 && (x as usize) < sim.width() && (y as usize) < sim.height() {
            Some((x as usize, y as usize))
        } else {
            None
        }
    }

    /// Keeps the fluid alive without input: a slug of density at the center
    /// pushed in a smoothly wandering direction.
    fn apply_ambient_forcing(&mut self) {
        let dir = Vec2::new(self.forcing_x.next_value(), self.forcing_y.next_value());
        if let Engine::Fluid(fluid) = &mut self.engine {
            let c = GRID_SIZE / 2;
            fluid.add_density(c, c, 50.0);
            fluid.add_velocity(c, c, dir * 2.0);
        }
    }
}

impl eframe::App for SimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("wavetank");

            ui.horizontal(|ui| {
                if ui.button("Pause/Resume").clicked() {
                    self.paused = !self.paused;
                }

                let is_fluid = matches!(self.engine, Engine::Fluid(_));
                if ui.selectable_label(is_fluid, "Fluid").clicked() && !is_fluid {
                    self.engine = Engine::fluid();
                    self.frame_count = 0;
                }
                if ui.selectable_label(!is_fluid, "Wave tank").clicked() && is_fluid {
                    self.engine = Engine::wave();
                    self.frame_count = 0;
                }

                ui.checkbox(&mut self.ambient_forcing, "Ambient forcing");
                ui.add(egui::Slider::new(&mut self.cell_size, 1.0..=10.0).text("Cell size"));
            });

            ui.separator();

            let sim_w = self.engine.sim().width();
            let sim_h = self.engine.sim().height();
            let canvas_size =
                egui::Vec2::new(sim_w as f32 * self.cell_size, sim_h as f32 * self.cell_size);
            let (canvas, response) =
                ui.allocate_exact_size(canvas_size, egui::Sense::click_and_drag());

            // Drag stirs the fluid along the drag direction; on the wave tank
            // any press is a splash.
            if response.dragged_by(egui::PointerButton::Primary) {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((gx, gy)) = self.grid_cell(pos, canvas) {
                        let start = *self.drag_start.get_or_insert(pos);
                        match &mut self.engine {
                            Engine::Fluid(fluid) => {
                                let drag = pos - start;
                                fluid.add_density(gx, gy, 30.0);
                                fluid.add_velocity(gx, gy, Vec2::new(drag.x, drag.y) * 0.5);
                            }
                            Engine::Wave(wave) => wave.splash(gx, gy),
                        }
                    }
                }
            } else {
                self.drag_start = None;
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((gx, gy)) = self.grid_cell(pos, canvas) {
                        self.engine.sim_mut().splash(gx, gy);
                    }
                }
            }

            if !self.paused {
                if self.ambient_forcing {
                    self.apply_ambient_forcing();
                }
                self.engine.sim_mut().step();
                self.frame_count += 1;
            }

            let painter = ui.painter();
            let sim = self.engine.sim();
            for y in 0..sim_h {
                for x in 0..sim_w {
                    let [r, g, b, a] = sim.cell_rgba(x, y);
                    let rect = egui::Rect::from_min_size(
                        egui::Pos2::new(
                            canvas.left() + x as f32 * self.cell_size,
                            canvas.top() + y as f32 * self.cell_size,
                        ),
                        egui::Vec2::splat(self.cell_size),
                    );
                    painter.rect_filled(
                        rect,
                        0.0,
                        egui::Color32::from_rgba_unmultiplied(r, g, b, a),
                    );
                }
            }

            ui.label(format!(
                "Frame: {} | {}x{} cells | Drag: stir | Click: splash",
                self.frame_count, sim_w, sim_h
            ));
        });

        ctx.request_repaint();
    }
}
