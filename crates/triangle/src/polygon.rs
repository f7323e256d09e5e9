//! Area-weighted point draws inside polygons.

use geo::{Point, Polygon, Triangle, TriangulateEarcut};
use rand::Rng;
use tracing::debug;

use crate::error::TriangleError;
use crate::triangle::{doubled_area, random_point_in_triangle};

/// Draws `n` points uniformly distributed over a polygon, holes excluded.
///
/// The polygon is split into triangles by ear clipping. Each draw picks a
/// triangle with probability proportional to its area (CDF + binary search)
/// and then a uniform point inside it.
///
/// # Errors
///
/// [`TriangleError::InvalidN`] for `n == 0`,
/// [`TriangleError::NonFiniteCoordinate`] for NaN or infinite coordinates,
/// [`TriangleError::EmptyPolygon`] when the polygon has no area.
pub fn random_points_in_polygon(
    polygon: &Polygon<f64>,
    n: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Point<f64>>, TriangleError> {
    if n == 0 {
        return Err(TriangleError::InvalidN { n });
    }
    let all_finite = polygon
        .exterior()
        .coords()
        .chain(polygon.interiors().iter().flat_map(|ring| ring.coords()))
        .all(|c| c.x.is_finite() && c.y.is_finite());
    if !all_finite {
        return Err(TriangleError::NonFiniteCoordinate { input: "polygon" });
    }

    let (triangles, cdf) = area_cdf(polygon.earcut_triangles());
    if triangles.is_empty() {
        return Err(TriangleError::EmptyPolygon);
    }
    debug!(n_triangles = triangles.len(), n, "triangulated polygon");

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let u: f64 = rng.random();
        let idx = cdf.partition_point(|&c| c < u).min(triangles.len() - 1);
        points.push(random_point_in_triangle(&triangles[idx], rng)?);
    }
    Ok(points)
}

/// Drops zero-area triangles and builds the normalised cumulative area.
///
/// The last CDF entry is forced to exactly 1.0.
fn area_cdf(triangles: Vec<Triangle<f64>>) -> (Vec<Triangle<f64>>, Vec<f64>) {
    let mut kept = Vec::with_capacity(triangles.len());
    let mut cdf = Vec::with_capacity(triangles.len());
    let mut acc = 0.0;
    for t in triangles {
        let [a, b, c] = t.to_array();
        let area = doubled_area(a, b, c).abs();
        if area > 0.0 {
            acc += area;
            cdf.push(acc);
            kept.push(t);
        }
    }
    for c in cdf.iter_mut() {
        *c /= acc;
    }
    if let Some(last) = cdf.last_mut() {
        *last = 1.0;
    }
    (kept, cdf)
}
