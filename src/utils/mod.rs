mod config;
mod error;
mod logging;
mod tick_timer;

pub use config::{validate_density, validate_grid_size, validate_tick_interval, Settings};
pub use error::{ConfigError, Error, Result};
pub use logging::init_logging;
pub use tick_timer::TickTimer;
