//! Reports how many ULPs `f32` results are away from the same computation done in `f64`.
//!
//! Usage: `cargo run --example ulp_report [SAMPLES]`

use anyhow::Context;
use glmath::{func, ulp::float_distance, vec3, Quatd, Quatf, Vec4f, Vector};
use log::LevelFilter;

const DEFAULT_SAMPLES: u32 = 10_000;

#[derive(Default)]
struct Stats {
    max: u32,
    max_at: f64,
    sum: u64,
    count: u64,
}

impl Stats {
    fn record(&mut self, distance: u32, input: f64) {
        if distance > self.max {
            self.max = distance;
            self.max_at = input;
        }
        self.sum += u64::from(distance);
        self.count += 1;
    }

    fn report(&self, name: &str) {
        let mean = self.sum as f64 / self.count.max(1) as f64;
        log::info!(
            "{name:>10}: max {} ULPs (at {:.6}), mean {mean:.3} ULPs over {} values",
            self.max,
            self.max_at,
            self.count,
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .filter(Some("glmath"), LevelFilter::Info)
        .parse_default_env()
        .try_init()
        .ok();

    let samples = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid sample count `{arg}`"))?,
        None => DEFAULT_SAMPLES,
    };
    if samples < 2 {
        anyhow::bail!("need at least 2 samples, got {samples}");
    }
    log::debug!("sweeping {samples} inputs");

    let inputs = (0..samples).map(|i| {
        let t = f64::from(i) / f64::from(samples - 1);
        -std::f64::consts::PI + t * 2.0 * std::f64::consts::PI
    });

    let (mut sin, mut cos) = (Stats::default(), Stats::default());
    for x in inputs {
        // Both precisions get the same input, so only the evaluation error is measured.
        let x32 = x as f32;
        let x = f64::from(x32);
        let xs = Vector::from([x32]);
        sin.record(float_distance(func::sin(xs)[0], x.sin() as f32), x);
        cos.record(float_distance(func::cos(xs)[0], x.cos() as f32), x);
    }
    sin.report("sin");
    cos.report("cos");

    let (from, to) = (
        (vec3(0.3, -1.0, 0.2), 0.4),
        (vec3(1.0, 0.5, -0.7), 2.9),
    );
    let from32 = Quatf::from_axis_angle(from.1, from.0.normalize());
    let to32 = Quatf::from_axis_angle(to.1, to.0.normalize());
    let from64 = Quatd::from_axis_angle(from.1.into(), from.0.cast::<f64>().normalize());
    let to64 = Quatd::from_axis_angle(to.1.into(), to.0.cast::<f64>().normalize());

    let mut slerp = Stats::default();
    for i in 0..samples {
        let a = i as f32 / (samples - 1) as f32;
        let single = Vec4f::from(from32.slerp(to32, a));
        let double = from64.slerp(to64, a.into()).into_vec().cast::<f32>();
        let distance = float_distance(single, double);
        for component in distance.into_array() {
            slerp.record(component, a.into());
        }
    }
    slerp.report("slerp");

    Ok(())
}
