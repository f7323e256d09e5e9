//! Uniform random points inside vector geometries.
//!
//! [`random_point_in_triangle`] is the primitive: two uniform scalars are
//! folded into the unit simplex and mapped onto the triangle. Polygons are
//! handled by [`random_points_in_polygon`], which triangulates and picks
//! triangles by area.
//!
//! # Quick start
//!
//! ```
//! use geo::{Triangle, coord};
//! use geosample_triangle::random_point_in_triangle;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let triangle = Triangle::new(
//!     coord! { x: 0.0, y: 0.0 },
//!     coord! { x: 15.0, y: 4.0 },
//!     coord! { x: 5.0, y: 12.0 },
//! );
//! let mut rng = StdRng::seed_from_u64(42);
//! let point = random_point_in_triangle(&triangle, &mut rng).unwrap();
//! assert!(point.x() >= 0.0 && point.x() <= 15.0);
//! ```

pub mod error;

mod polygon;
mod triangle;

pub use error::TriangleError;
pub use polygon::random_points_in_polygon;
pub use triangle::{random_point_in_triangle, random_point_in_triangle_default, triangle_from_polygon};
