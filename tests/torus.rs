use simplicial::Chain;
use test_utilities::{torus_triangle, triangulated_torus};

const SIZES: [usize; 4] = [3, 4, 5, 6];

#[test]
fn torus_is_cycle() {
    for n in SIZES {
        let torus = triangulated_torus(n);
        assert_eq!(torus.len(), 2 * n * n);
        assert_eq!(torus.dimension(), Ok(3));
        assert!(torus.is_cycle());
    }
}

#[test]
fn punctured_torus_has_triangle_boundary() {
    for n in SIZES {
        let triangle = Chain::from(torus_triangle(n, 1, 2, true));
        let punctured = triangulated_torus(n) + triangle.clone();

        assert_eq!(punctured.len(), 2 * n * n - 1);
        assert_eq!(punctured.boundary(), triangle.boundary());
        assert_eq!(punctured.boundary().len(), 3);
        assert!(punctured.boundary().is_cycle());
    }
}

#[test]
fn boundary_of_boundary_vanishes_on_partial_torus() {
    for n in SIZES {
        let torus = triangulated_torus(n);
        let strip = Chain::new(
            torus
                .simplices()
                .into_iter()
                .take(n * n)
                .cloned()
                .collect::<Vec<_>>(),
        )
        .unwrap();

        assert!(!strip.boundary().is_empty());
        assert!(strip.boundary().boundary().is_empty());
    }
}

#[test]
fn torus_is_its_own_inverse() {
    let torus = triangulated_torus(4);
    assert!((torus.clone() + torus.clone()).is_empty());
    assert_eq!(torus.clone() + Chain::empty(), torus);
}
