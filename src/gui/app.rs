use super::Config;
use crate::{Palette, Result, Rules, Settings, Simulation};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
};
use std::time::{Duration, Instant};
use tracing::warn;

pub struct App {
    pub(super) simulation: Simulation,   // Owner of the field, the image and the tick loop.
    pub(super) texture: TextureHandle,   // Texture handle of the rendered field.
    pub(super) texture_outdated: bool,   // The image changed since the last upload.
    pub(super) grid_size: usize,         // Value of the grid size slider.
    pub(super) tick_interval_ms: u64,    // Value of the tick interval slider.
    pub(super) density: f64,             // Value of the density slider.
}

impl App {
    pub fn new(ctx: &Context) -> Result<Self> {
        let simulation =
            Simulation::new(Settings::default(), Rules::default(), Palette::default())?;
        let settings = simulation.settings();
        Ok(Self {
            grid_size: settings.grid_size,
            tick_interval_ms: settings.tick_interval.as_millis() as u64,
            density: settings.density,
            texture: ctx.load_texture("Field", ColorImage::default(), TextureOptions::NEAREST),
            texture_outdated: true,
            simulation,
        })
    }

    pub(super) fn resize(&mut self) {
        if let Err(e) = self.simulation.resize(self.grid_size) {
            warn!(error = %e, "resize ignored");
            self.grid_size = self.simulation.settings().grid_size;
        }
        self.texture_outdated = true;
    }

    pub(super) fn reseed(&mut self, fill_mode: bool) {
        self.simulation.reseed(fill_mode);
        self.texture_outdated = true;
    }

    pub(super) fn next_step(&mut self) {
        self.simulation.tick();
        self.texture_outdated = true;
    }

    pub(super) fn apply_tick_interval(&mut self) {
        let interval = Duration::from_millis(self.tick_interval_ms);
        if let Err(e) = self.simulation.set_tick_interval(interval) {
            warn!(error = %e, "tick interval ignored");
        }
    }

    pub(super) fn apply_density(&mut self) {
        if let Err(e) = self.simulation.set_density(self.density) {
            warn!(error = %e, "density ignored");
        }
    }

    pub(super) fn upload_texture(&mut self) {
        if !self.texture_outdated {
            return;
        }
        let pixels = self.simulation.pixels();
        let image = ColorImage::from_rgba_unmultiplied([pixels.side(); 2], &pixels.to_rgba());
        self.texture.set(image, TextureOptions::NEAREST);
        self.texture_outdated = false;
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (toggle, step) = ctx.input(|input| {
            (
                input.key_pressed(Key::E) && !input.modifiers.ctrl,
                input.key_pressed(Key::Space),
            )
        });
        if toggle {
            self.simulation.toggle();
        }
        if step && !self.simulation.is_running() {
            self.next_step();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        if self.simulation.poll(Instant::now()) {
            self.texture_outdated = true;
        }

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                self.draw(ui);
            });

        if self.simulation.is_running() {
            ctx.request_repaint_after(self.simulation.time_to_next_tick(Instant::now()));
        }
    }
}
