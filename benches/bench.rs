use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use torus_life::{Grid, GridEngine, Palette, Rasterizer, Rules};

const SEED: u64 = 42;
const DENSITY: f64 = 0.8;

fn random_grid(n: usize) -> Grid {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    Grid::random(n, DENSITY, &mut rng).unwrap()
}

fn bench_step(c: &mut Criterion) {
    for n in [100, 1 << 10] {
        let mut engine = GridEngine::from_grid(random_grid(n), Rules::default()).unwrap();
        c.bench_function(&format!("step_{}", n), |b| b.iter(|| engine.step().size()));
    }
}

fn bench_render(c: &mut Criterion) {
    const CANVAS: usize = 600;
    let rasterizer = Rasterizer::new(CANVAS, Palette::default()).unwrap();
    let grid = random_grid(100);
    let mut pixels = rasterizer.render(&grid);
    c.bench_function("render_600", |b| {
        b.iter(|| rasterizer.render_into(&grid, &mut pixels))
    });
}

criterion_group!(benches, bench_step, bench_render);
criterion_main!(benches);
