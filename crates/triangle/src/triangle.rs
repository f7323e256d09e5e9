//! Uniform point draws inside a single triangle.

use geo::{Coord, LineString, Point, Polygon, Triangle};
use rand::Rng;

use crate::error::TriangleError;

/// Twice the signed area of the triangle `(a, b, c)`.
pub(crate) fn doubled_area(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

/// Rejects non-finite and zero-area triangles.
fn check_triangle(triangle: &Triangle<f64>) -> Result<[Coord<f64>; 3], TriangleError> {
    let [a, b, c] = triangle.to_array();
    if [a, b, c].iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
        return Err(TriangleError::NonFiniteCoordinate { input: "triangle" });
    }
    if doubled_area(a, b, c) == 0.0 {
        return Err(TriangleError::DegenerateTriangle);
    }
    Ok([a, b, c])
}

/// Draws a point uniformly distributed over the triangle.
///
/// Two uniform scalars `u, v` are drawn; if `u + v > 1` both are reflected
/// to `1 - u, 1 - v`. The point is `v0 + u·(v1 - v0) + v·(v2 - v0)`.
///
/// # Errors
///
/// [`TriangleError::NonFiniteCoordinate`] if a vertex is NaN or infinite,
/// [`TriangleError::DegenerateTriangle`] if the area is exactly zero.
pub fn random_point_in_triangle(
    triangle: &Triangle<f64>,
    rng: &mut impl Rng,
) -> Result<Point<f64>, TriangleError> {
    let [v0, v1, v2] = check_triangle(triangle)?;

    let mut u: f64 = rng.random();
    let mut v: f64 = rng.random();
    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }

    Ok(Point::new(
        v0.x + u * (v1.x - v0.x) + v * (v2.x - v0.x),
        v0.y + u * (v1.y - v0.y) + v * (v2.y - v0.y),
    ))
}

/// Like [`random_point_in_triangle`], drawing from the thread-local generator.
///
/// Results are not reproducible.
pub fn random_point_in_triangle_default(
    triangle: &Triangle<f64>,
) -> Result<Point<f64>, TriangleError> {
    random_point_in_triangle(triangle, &mut rand::rng())
}

/// Converts a three-vertex polygon into a [`Triangle`].
///
/// The exterior ring must hold exactly three distinct vertices (plus the
/// closing coordinate) and the polygon must have no holes.
pub fn triangle_from_polygon(polygon: &Polygon<f64>) -> Result<Triangle<f64>, TriangleError> {
    let vertices = open_ring(polygon.exterior());
    let interiors = polygon.interiors().len();
    if vertices.len() != 3 || interiors != 0 {
        return Err(TriangleError::NotATriangle {
            vertices: vertices.len(),
            interiors,
        });
    }
    Ok(Triangle::new(vertices[0], vertices[1], vertices[2]))
}

/// Returns the ring's coordinates without the repeated closing coordinate.
fn open_ring(ring: &LineString<f64>) -> Vec<Coord<f64>> {
    let mut coords: Vec<Coord<f64>> = ring.coords().copied().collect();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    coords
}
