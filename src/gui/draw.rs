use super::{App, Config};
use eframe::egui::{
    load::SizedTexture, Button, Image, RichText, Sense, Slider, Stroke, Ui,
};
use tracing::debug;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_loop_controls(&mut self, ui: &mut Ui) {
        let text = if self.simulation.is_running() {
            "Pause"
        } else {
            "Play"
        };
        if ui.add(Self::new_button(text)).clicked() {
            self.simulation.toggle();
        }

        ui.add_enabled_ui(!self.simulation.is_running(), |ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.next_step();
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Tick interval, ms: "));
            if ui
                .add(Slider::new(
                    &mut self.tick_interval_ms,
                    Config::TICK_INTERVAL_RANGE_MS,
                ))
                .changed()
            {
                self.apply_tick_interval();
            }
        });
    }

    fn draw_field_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Generate")).clicked() {
                self.reseed(false);
            }
            if ui.add(Self::new_button("Clear")).clicked() {
                self.reseed(true);
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Grid size: "));
            if ui
                .add(Slider::new(&mut self.grid_size, Config::GRID_SIZE_RANGE))
                .changed()
            {
                self.resize();
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Density: "));
            if ui
                .add(Slider::new(&mut self.density, 0.0..=1.0))
                .changed()
            {
                self.apply_density();
            }
        });
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.simulation.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.simulation.population()
        )));
        ui.label(Self::new_text(&format!(
            "Last tick: {:.2} ms",
            self.simulation.last_tick_duration().as_secs_f64() * 1e3
        )));
        if self.simulation.is_running() {
            ui.label(Self::new_text(&format!(
                "Ticks per second: {:.1}",
                self.simulation.tick_rate()
            )));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_loop_controls(ui);
                    self.draw_field_controls(ui);

                    ui.add_space(Config::GAP_ABOVE_STATS);

                    self.draw_stats(ui);
                });

                // to adjust the bounds
                ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
            });
        });
    }

    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        self.upload_texture();

        let source = SizedTexture::new(self.texture.id(), [size_px; 2]);
        let image = Image::from_texture(source).sense(Sense::click_and_drag());
        let response = ui.add(image);

        if !(response.clicked() || response.dragged()) {
            return;
        }
        if let Some(pos) = response.interact_pointer_pos() {
            // pointer position in canvas pixels
            let canvas = self.simulation.settings().canvas_size as f32;
            let p = (pos - response.rect.left_top()) / response.rect.size() * canvas;
            if p.x < 0. || p.y < 0. {
                return;
            }
            match self.simulation.set_cell_alive_at_pixel(p.x as usize, p.y as usize) {
                Ok(_) => self.texture_outdated = true,
                Err(e) => debug!(error = %e, "click outside of the field"),
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            .max(1.);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(ui.available_width() - size_px);

            ui.vertical_centered(|ui| {
                self.draw_field(ui, size_px);
            });
        });
    }
}
