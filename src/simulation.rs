use crate::{
    utils::{validate_density, validate_grid_size, validate_tick_interval},
    Grid, GridEngine, Palette, PixelBuffer, Rasterizer, Result, Rules, Settings, TickTimer,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Whether the driver should keep issuing ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Controller owning the whole state of a run: settings, rules, field, image and tick loop.
pub struct Simulation {
    settings: Settings,
    engine: GridEngine,
    rasterizer: Rasterizer,
    pixels: PixelBuffer,
    rng: ChaCha8Rng,
    state: LoopState,
    timer: TickTimer,
    generation: u64,              // Current generation number.
    last_tick_duration: Duration, // Duration of the last step + render.
}

impl Simulation {
    /// Validates the configuration and builds an initialized (blank and rendered) simulation.
    pub fn new(settings: Settings, rules: Rules, palette: Palette) -> Result<Self> {
        if let Err(e) = settings.validate().and_then(|_| rules.validate()) {
            warn!(error = %e, "rejected configuration");
            return Err(e.into());
        }
        let rng = if let Some(x) = settings.seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut simulation = Self {
            engine: GridEngine::new(settings.grid_size, rules)?,
            rasterizer: Rasterizer::new(settings.canvas_size, palette)?,
            pixels: PixelBuffer::default(),
            rng,
            state: LoopState::Stopped,
            timer: TickTimer::new(settings.tick_interval, Instant::now()),
            generation: 0,
            last_tick_duration: Duration::ZERO,
            settings,
        };
        simulation.initialize();
        Ok(simulation)
    }

    /// Clears the field and renders it.
    pub fn initialize(&mut self) {
        self.reseed_with(self.settings.grid_size, true);
        info!(
            grid_size = self.settings.grid_size,
            canvas_size = self.settings.canvas_size,
            cell_size = self.settings.cell_size(),
            "simulation initialized"
        );
    }

    /// Replaces the field with a blank (`fill_mode`) or a randomly seeded one of the same size.
    pub fn reseed(&mut self, fill_mode: bool) {
        self.reseed_with(self.settings.grid_size, fill_mode);
        info!(
            fill_mode,
            population = self.engine.population(),
            "field reseeded"
        );
    }

    /// Switches to a blank `new_size x new_size` field; the old field is discarded.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        if let Err(e) = validate_grid_size(new_size) {
            warn!(new_size, "rejected grid size");
            return Err(e.into());
        }
        self.settings.grid_size = new_size;
        self.reseed_with(new_size, true);
        info!(
            grid_size = new_size,
            cell_size = self.settings.cell_size(),
            "field resized"
        );
        Ok(())
    }

    fn reseed_with(&mut self, size: usize, fill_mode: bool) {
        // the size and density are validated at this point
        if let Err(e) = self
            .engine
            .seed(size, self.settings.density, fill_mode, &mut self.rng)
        {
            warn!(error = %e, "failed to seed the field");
            return;
        }
        self.generation = 0;
        self.render();
    }

    /// Advances the field by one generation without rendering.
    pub fn step(&mut self) -> &Grid {
        self.generation += 1;
        self.engine.step()
    }

    /// Redraws the whole image from the current field.
    pub fn render(&mut self) -> &PixelBuffer {
        self.rasterizer.render_into(self.engine.grid(), &mut self.pixels);
        &self.pixels
    }

    /// One tick of the loop: step, then render; the elapsed time is kept for display.
    pub fn tick(&mut self) -> &PixelBuffer {
        let timer = Instant::now();
        self.step();
        self.render();
        self.last_tick_duration = timer.elapsed();
        debug!(
            generation = self.generation,
            duration_ms = self.last_tick_duration.as_secs_f64() * 1e3,
            "tick"
        );
        &self.pixels
    }

    /// Runs a tick if the loop is running and the tick interval has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state == LoopState::Stopped || !self.timer.poll(now) {
            return false;
        }
        self.tick();
        true
    }

    /// Marks a cell alive and redraws the image.
    pub fn set_cell_alive(&mut self, row: usize, column: usize) -> Result<()> {
        self.engine.set_cell_alive(row, column)?;
        self.render();
        Ok(())
    }

    /// Marks alive the cell under canvas pixel `(x, y)`.
    pub fn set_cell_alive_at_pixel(&mut self, x: usize, y: usize) -> Result<(usize, usize)> {
        let (row, column) = self
            .rasterizer
            .cell_at_pixel(self.engine.size(), x, y)?;
        self.set_cell_alive(row, column)?;
        Ok((row, column))
    }

    /// Returns `false` if the loop was already running.
    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    /// Starts the loop with the first tick due one interval after `now`.
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.state == LoopState::Running {
            return false;
        }
        self.state = LoopState::Running;
        self.timer.reset(now);
        info!(interval_ms = self.timer.interval().as_millis() as u64, "loop started");
        true
    }

    /// Returns `false` if the loop was already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.state = LoopState::Stopped;
        info!(generation = self.generation, "loop stopped");
        true
    }

    /// Play/pause button.
    pub fn toggle(&mut self) -> LoopState {
        match self.state {
            LoopState::Stopped => self.start(),
            LoopState::Running => self.stop(),
        };
        self.state
    }

    pub fn set_tick_interval(&mut self, interval: Duration) -> Result<()> {
        validate_tick_interval(interval)?;
        self.settings.tick_interval = interval;
        self.timer.set_interval(interval);
        Ok(())
    }

    /// Density used by the following random reseeds.
    pub fn set_density(&mut self, density: f64) -> Result<()> {
        validate_density(density)?;
        self.settings.density = density;
        Ok(())
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn rules(&self) -> &Rules {
        self.engine.rules()
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.engine.population()
    }

    pub fn last_tick_duration(&self) -> Duration {
        self.last_tick_duration
    }

    /// Measured ticks per second while running.
    pub fn tick_rate(&self) -> f64 {
        self.timer.tick_rate()
    }

    /// Time left until the next tick.
    pub fn time_to_next_tick(&self, now: Instant) -> Duration {
        self.timer.remaining(now)
    }
}
