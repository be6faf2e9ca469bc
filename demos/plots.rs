use gnuplot::{AxesCommon, Caption, Color, Figure};
use tracing_subscriber::EnvFilter;

use rated::{Direction, Linear, Looped, UpdateMethod};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut plots = Plots { plots: Vec::new() };
    plots.add(
        "increase at 0.5/s",
        1.0,
        &Linear::moving(0.5, Direction::Increasing),
    );
    plots.add("towards 10 at 0.5/s", 1.0, &Linear::towards(0.5, 10.0));
    plots.add(
        "angle from 350 towards 10, shortest way",
        350.0,
        &Looped::towards(4.0, 10.0, 0.0, 360.0),
    );
    plots.add(
        "angle from 10 towards 20, forced decreasing",
        10.0,
        &Looped::with_override(40.0, 20.0, Direction::Decreasing, 0.0, 360.0),
    );
    plots.add(
        "spin decreasing in [0, 100]",
        50.0,
        &Looped::moving(25.0, Direction::Decreasing, 0.0, 100.0),
    );

    plots.show_gnuplot();
}

fn sample(
    n: usize,
    max_t: f32,
    start: f32,
    method: &dyn UpdateMethod<f32>,
) -> (Vec<f32>, Vec<f32>) {
    let mut ts = Vec::new();
    let mut vs = Vec::new();

    let dt = max_t / n as f32;
    let mut value = start;

    for i in 0..n {
        ts.push(i as f32 * dt);
        vs.push(value);

        value = method.advance(value, dt);
    }

    (ts, vs)
}

struct Plot {
    name: &'static str,
    ts: Vec<f32>,
    vs: Vec<f32>,

    /// Only set for methods with a target value.
    target: Option<f32>,
}

struct Plots {
    plots: Vec<Plot>,
}

impl Plots {
    fn add(&mut self, name: &'static str, start: f32, method: &dyn UpdateMethod<f32>) {
        let (ts, vs) = sample(200, 20.0, start, method);

        self.plots.push(Plot {
            name,
            ts,
            vs,
            target: method.target_value(),
        });
    }

    fn show_gnuplot(&self) {
        let mut figure = Figure::new();

        // Square rows/columns layout
        let square_size = (self.plots.len() as f32).sqrt().ceil() as u32;

        for (i, plot) in self.plots.iter().enumerate() {
            let axes = figure.axes2d();

            axes.points(&plot.ts, &plot.vs, &[Caption("value"), Color("blue")]);

            if let Some(target) = plot.target {
                let line = vec![target; plot.ts.len()];
                axes.lines(&plot.ts, &line, &[Caption("target"), Color("red")]);
            }

            axes.set_title(plot.name, &[])
                .set_x_label("time", &[])
                .set_y_label("value", &[])
                .set_pos_grid(square_size, square_size, i as u32);
        }

        figure.show().unwrap();
    }
}
