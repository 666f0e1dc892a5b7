use simplicial::{Chain, Point, Simplex};

/// The vertices `(i, j)` of an `n` by `n` grid, with index `i * n + j`.
pub fn torus_grid_points(n: usize) -> Vec<Point> {
    (0..n)
        .flat_map(|i| (0..n).map(move |j| Point::from([i as f64, j as f64])))
        .collect()
}

/// One of the two triangles of the grid square at `(i, j)`, with indices
/// wrapping around so that opposite sides of the grid are identified.
pub fn torus_triangle(n: usize, i: usize, j: usize, upper: bool) -> Simplex {
    let points = torus_grid_points(n);
    torus_triangle_of(&points, n, i, j, upper)
}

fn torus_triangle_of(points: &[Point], n: usize, i: usize, j: usize, upper: bool) -> Simplex {
    let vertex = |di: usize, dj: usize| points[((i + di) % n) * n + (j + dj) % n].clone();
    let middle = if upper { vertex(0, 1) } else { vertex(1, 0) };
    Simplex::new([vertex(0, 0), middle, vertex(1, 1)]).expect("torus triangle")
}

/// The torus triangulated by splitting each square of an `n` by `n` grid
/// (`n >= 3`) along its diagonal, with opposite sides identified. Every edge
/// lies in exactly two triangles, so the chain is a 2-cycle.
pub fn triangulated_torus(n: usize) -> Chain {
    let points = torus_grid_points(n);
    let triangles = (0..n).flat_map(|i| (0..n).flat_map(move |j| [(i, j, false), (i, j, true)]));
    Chain::new(
        triangles
            .map(|(i, j, upper)| torus_triangle_of(&points, n, i, j, upper))
            .collect::<Vec<_>>(),
    )
    .expect("triangulated torus")
}
