use std::path::Path;
use wavetank::{FluidMetrics, FluidSim, ImageExporter, MetricsRecorder, SimApp, WaveMetrics, WaveSim};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("test") => run_headless_test()?,
        Some("wave") => run_gui(SimApp::new_wave(42)),
        _ => run_gui(SimApp::new_fluid(42)),
    }

    Ok(())
}

fn run_headless_test() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running headless simulation test with quantitative analysis...");

    let mut fluid = FluidSim::new(200, 0.1, 0.0001, 0.0000001)?;
    let exporter = ImageExporter::new(800, 800);
    let mut recorder = MetricsRecorder::new();

    // Horizontal line of dense fluid moving right.
    for i in 0..40 {
        fluid.add_density(80 + i, 100, 100.0);
        fluid.add_velocity(80 + i, 100, glam::Vec2::new(3.0, 0.0));
    }

    recorder.record(&fluid, 0);
    FluidMetrics::analyze(&fluid, 0).print_summary();
    exporter.export_png(&fluid, Path::new("fluid_frame_0000.png"))?;
    exporter.export_velocity_png(&fluid, Path::new("fluid_velocity_0000.png"))?;

    for frame in 1..=20 {
        fluid.step();
        recorder.record(&fluid, frame);

        exporter.export_png(&fluid, Path::new(&format!("fluid_frame_{frame:04}.png")))?;
        exporter.export_velocity_png(
            &fluid,
            Path::new(&format!("fluid_velocity_{frame:04}.png")),
        )?;

        if frame % 5 == 0 {
            FluidMetrics::analyze(&fluid, frame).print_summary();
        }
    }

    recorder.print_trends();
    recorder.write_json(Path::new("fluid_metrics.json"))?;

    println!("Running wave tank...");
    let mut wave = WaveSim::new(200, 200, 0.05, 4.0, 1.0, 0.5, 800, 800)?;
    wave.add_velocity_at_point(400, 400);

    for frame in 1..=20 {
        wave.step(0.5);
        if frame % 5 == 0 {
            WaveMetrics::analyze(&wave, frame).print_summary();
            exporter.export_png(&wave, Path::new(&format!("wave_frame_{frame:04}.png")))?;
        }
    }

    println!("Test completed.");
    Ok(())
}

fn run_gui(app: SimApp) {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 800.0])
            .with_title("wavetank"),
        ..Default::default()
    };

    eframe::run_native("wavetank", options, Box::new(|_cc| Box::new(app))).unwrap();
}
