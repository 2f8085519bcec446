use crate::error::PlotterError::InvalidGeometry;
use crate::error::PlotterResult;
use crate::geometry::is_finite;
use crate::geometry::Float;
use crate::geometry::Move;
use crate::geometry::Point;

#[allow(unused_imports)]
use num_traits::real::Real;

use core::f32::consts::TAU;
use alloc::vec::Vec;

/// Samples `count` points evenly on a circle, counter-clockwise
/// starting at `center + (radius, 0)`.
pub fn generate_circle_points(count: usize, center: Point, radius: Float) -> PlotterResult<Vec<Point>> {
    if !is_finite(center) || !radius.is_finite() || radius <= 0.0 {
        return Err(InvalidGeometry);
    }

    let step = TAU / (count as Float);
    log::debug!("sampling {} points, step is {}", count, step);

    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let (y, x) = (step * (i as Float)).sin_cos();
        points.push(center + Point::new(x, y) * radius);
    }

    Ok(points)
}

/// Walks `points` with a fixed `stride`, wrapping around, for exactly
/// `points.len()` pen-down moves. The pen is expected to rest on
/// `points[0]` beforehand.
///
/// When `stride` and `points.len()` share a factor the walk cycles over a
/// subset of the points; repeated indices are kept.
pub fn generate_string_path(points: &[Point], stride: usize) -> Vec<Move> {
    let len = points.len();
    let mut moves = Vec::with_capacity(len);
    let mut index = 0;

    for _ in 0..len {
        index = (index + stride % len) % len;
        log::trace!("moving to {} ({:?})", index, points[index]);
        moves.push(Move::draw(points[index]));
    }

    moves
}

/// Complete plotting program: travel to the first circle point, then
/// the string path.
pub fn string_art(count: usize, stride: usize, center: Point, radius: Float) -> PlotterResult<Vec<Move>> {
    let points = generate_circle_points(count, center, radius)?;
    let mut moves = Vec::with_capacity(count + 1);

    if let Some(first) = points.first() {
        moves.push(Move::travel(*first));
        moves.extend(generate_string_path(&points, stride));
    }

    Ok(moves)
}
