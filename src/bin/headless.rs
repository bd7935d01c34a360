use std::{thread::sleep, time::Instant};
use torus_life::{Palette, Rules, Settings, Simulation};
use tracing::{info, warn};

const GENERATIONS: u64 = 100;
const REPORT_EVERY: u64 = 10;
const SEED: u64 = 42;

/// Number of generations to run; an unparsable argument falls back to the default.
fn generations_from_arg(arg: Option<String>) -> u64 {
    match arg {
        Some(arg) => arg.parse().unwrap_or_else(|e| {
            warn!(arg = %arg, error = %e, default = GENERATIONS, "bad generation count");
            GENERATIONS
        }),
        None => GENERATIONS,
    }
}

/// Runs the tick loop without a window: the thread sleeps until every tick is due.
fn main() -> torus_life::Result<()> {
    torus_life::init_logging("info");

    let generations = generations_from_arg(std::env::args().nth(1));

    let settings = Settings {
        seed: Some(SEED),
        ..Default::default()
    };
    let mut simulation = Simulation::new(settings, Rules::default(), Palette::default())?;
    simulation.reseed(false);

    let timer = Instant::now();
    simulation.start();
    while simulation.generation() < generations {
        sleep(simulation.time_to_next_tick(Instant::now()));
        if simulation.poll(Instant::now()) && simulation.generation() % REPORT_EVERY == 0 {
            info!(
                generation = simulation.generation(),
                population = simulation.population(),
                tick_ms = simulation.last_tick_duration().as_secs_f64() * 1e3,
                "progress"
            );
        }
    }
    simulation.stop();

    info!(
        generations,
        elapsed_s = timer.elapsed().as_secs_f64(),
        ticks_per_second = simulation.tick_rate(),
        "done"
    );
    Ok(())
}
