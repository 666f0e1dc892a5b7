use simplicial::{Chain, Point, Simplex};

/// The standard basis vectors of `count`-dimensional space.
pub fn standard_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|axis| {
            (0..count)
                .map(|i| if i == axis { 1.0 } else { 0.0 })
                .collect::<Point>()
        })
        .collect()
}

/// The simplex spanned by `count` standard basis vectors.
pub fn standard_simplex(count: usize) -> Simplex {
    Simplex::new(standard_points(count)).expect("standard simplex")
}

/// The `n`-sphere triangulated as the hollow standard simplex on `n + 2`
/// points, built explicitly (without the boundary operator) as the chain of
/// all `n + 1`-point subsets.
pub fn simplex_sphere(n: usize) -> Chain {
    let points = standard_points(n + 2);
    Chain::new((0..points.len()).map(|omitted| {
        let face = points
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != omitted)
            .map(|(_, point)| point.clone());
        Simplex::new(face).expect("sphere facet")
    }))
    .expect("simplex sphere")
}
