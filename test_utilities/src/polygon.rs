use std::f64::consts::TAU;

use simplicial::{Chain, Point, Simplex};

/// `n` points evenly spaced on the unit circle.
pub fn polygon_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            Point::from([angle.cos(), angle.sin()])
        })
        .collect()
}

fn edge(points: &[Point], i: usize, j: usize) -> Simplex {
    Simplex::new([points[i].clone(), points[j].clone()]).expect("polygon edge")
}

/// The closed polygon on `n >= 3` points: a 1-cycle.
pub fn polygon_cycle(n: usize) -> Chain {
    let points = polygon_points(n);
    Chain::new((0..n).map(|i| edge(&points, i, (i + 1) % n))).expect("polygon cycle")
}

/// The polygon on `n >= 2` points with its closing edge removed.
pub fn polygon_path(n: usize) -> Chain {
    let points = polygon_points(n);
    Chain::new((0..n - 1).map(|i| edge(&points, i, i + 1))).expect("polygon path")
}
