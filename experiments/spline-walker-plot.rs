// Build a random spline, walk it back and forth, and plot everything on the XY plane.
//
// usage: spline-walker-plot [seed]
//
// Writes `spline-walker-plot.svg` into the current directory.

use bezier_spline::modules::decorate::decorate;
use bezier_spline::modules::export::json::to_json;
use bezier_spline::modules::sample::{direction_lines, polyline, SampleOptions};
use bezier_spline::modules::walker::{SplineWalker, WalkerConfig, WalkerMode};
use bezier_spline::{pt, BezierSpline, JointMode, Point};
use log::{debug, info};
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::error::Error;

const OUTPUT: &str = "spline-walker-plot.svg";
const SEGMENTS: usize = 4;
const WALK_STEPS: usize = 60;
const DECORATIONS: usize = 8;
const DEFAULT_SEED: u64 = 7;

fn random_spline(rng: &mut StdRng) -> Result<BezierSpline, Box<dyn Error>> {
    let jitter = Normal::new(0.0, 1.5)?;

    let mut spline = BezierSpline::new();
    for _ in 1..SEGMENTS {
        spline.add_segment();
    }

    // cycle through the modes so every kind of joint shows up in the plot
    let mut mode = JointMode::Free;
    for i in 0..spline.point_count() {
        let base = spline.point(i)?;
        spline.set_point(i, pt!(base.x, base.y + jitter.sample(rng), 0))?;
        if i % 3 == 0 {
            spline.set_joint_mode(i, mode)?;
            mode = mode.next();
        }
    }

    if rng.gen_bool(0.5) {
        spline.set_loop(true);
    }
    Ok(spline)
}

fn bounds(points: &[Point]) -> ((f64, f64), (f64, f64)) {
    let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
    let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    ((min_x - 1.0, max_x + 1.0), (min_y - 1.0, max_y + 1.0))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let mut rng = StdRng::seed_from_u64(seed);

    let spline = random_spline(&mut rng)?;
    info!(
        "seed {}: {} segments, loop = {}",
        seed,
        spline.segment_count(),
        spline.is_loop()
    );
    debug!("{}", to_json(&spline)?);

    let options = SampleOptions::default();
    let curve = polyline(&spline, options.steps_per_curve);
    let directions = direction_lines(&spline, &options);

    let mut walker = SplineWalker::new(WalkerConfig {
        duration: 2.0,
        look_forward: true,
        mode: WalkerMode::PingPong,
    })?;
    let dt = 3.0 * walker.config().duration / WALK_STEPS as f64;
    let trail: Vec<_> = (0..WALK_STEPS)
        .map(|_| walker.step(&spline, dt).position)
        .collect();

    let placements = decorate(&spline, 2, DECORATIONS / 2);

    let ((min_x, max_x), (min_y, max_y)) = bounds(spline.points());
    let root = SVGBackend::new(OUTPUT, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("spline, seed {}", seed), ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;
    chart.configure_mesh().draw()?;

    // control polygon
    chart.draw_series(LineSeries::new(
        spline.points().iter().map(|p| (p.x, p.y)),
        &RGBColor(200, 200, 200),
    ))?;
    chart.draw_series(
        spline
            .points()
            .iter()
            .map(|p| Circle::new((p.x, p.y), 2, BLACK.filled())),
    )?;

    chart.draw_series(LineSeries::new(curve.iter().map(|p| (p.x, p.y)), &BLUE))?;
    chart.draw_series(
        directions
            .iter()
            .map(|(a, b)| PathElement::new(vec![(a.x, a.y), (b.x, b.y)], GREEN)),
    )?;
    chart.draw_series(
        trail
            .iter()
            .map(|p| Circle::new((p.x, p.y), 3, RED.filled())),
    )?;
    chart.draw_series(
        placements
            .iter()
            .map(|p| Cross::new((p.position.x, p.position.y), 5, MAGENTA)),
    )?;

    root.present()?;
    info!("wrote {}", OUTPUT);
    Ok(())
}
