//! Fixture generators shared by the integration tests and benchmarks.

pub use polygon::{polygon_cycle, polygon_path, polygon_points};
pub use simplex_sphere::{simplex_sphere, standard_points, standard_simplex};
pub use torus::{torus_grid_points, torus_triangle, triangulated_torus};

mod polygon;
mod simplex_sphere;
mod torus;
