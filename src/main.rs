#![warn(clippy::all)]

fn main() -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    torus_life::init_logging("info");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1100., 720.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Toroidal Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(torus_life::App::new(&cc.egui_ctx)?))),
    )
}
