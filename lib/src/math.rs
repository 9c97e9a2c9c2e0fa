//! Pure geometry helpers shared by the resize pipeline.

use glam::DVec2;
use std::f64::consts::TAU;

/// Returns the angle of `vector` measured counterclockwise from the positive x-axis, normalized to `[0, 2π)`.
pub fn vector_angle(vector: DVec2) -> f64 {
	let angle = f64::atan2(vector.y, vector.x);
	if angle < 0. { angle + TAU } else { angle }
}

/// Rotates `vector` counterclockwise by `angle` radians.
pub fn rotate(vector: DVec2, angle: f64) -> DVec2 {
	DVec2::from_angle(angle).rotate(vector)
}

/// Quantizes `value` to the nearest multiple of `step`. A step of zero leaves the value untouched.
pub fn quantize(value: f64, step: f64) -> f64 {
	if step == 0. { value } else { (value / step).round() * step }
}

/// Clamps `size` to `[min_size, max_size]` per axis.
///
/// With `keep_ratio`, width is clamped against both axes' bounds mapped through the current width/height
/// proportion and height is recomputed from the result, so the pair stays on the locked ratio even when
/// only one axis hits a bound. Degenerate sizes fall back to independent per-axis clamping.
pub fn calculate_bound_size(size: DVec2, min_size: DVec2, max_size: DVec2, keep_ratio: bool) -> DVec2 {
	if !keep_ratio || size.x == 0. || size.y == 0. {
		return size.clamp(min_size, max_size);
	}
	let ratio = size.x / size.y;
	let width = size.x.clamp(min_size.x.max(min_size.y * ratio), max_size.x.min(max_size.y * ratio));
	DVec2::new(width, width / ratio)
}

/// Compare two `f64`s within `max_abs_diff`.
pub fn f64_compare(f1: f64, f2: f64, max_abs_diff: f64) -> bool {
	(f1 - f2).abs() < max_abs_diff
}

/// Compare the components of two `DVec2`s within `max_abs_diff`.
pub fn dvec2_compare(a: DVec2, b: DVec2, max_abs_diff: f64) -> bool {
	(a.x - b.x).abs() < max_abs_diff && (a.y - b.y).abs() < max_abs_diff
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn vector_angle_normalizes_to_positive_range() {
		assert!(f64_compare(vector_angle(DVec2::new(1., 0.)), 0., 1e-12));
		assert!(f64_compare(vector_angle(DVec2::new(0., 1.)), TAU / 4., 1e-12));
		assert!(f64_compare(vector_angle(DVec2::new(-1., 0.)), TAU / 2., 1e-12));
		// Negative atan2 results wrap around instead of staying negative.
		assert!(f64_compare(vector_angle(DVec2::new(0., -1.)), 3. * TAU / 4., 1e-12));
		assert!(f64_compare(vector_angle(DVec2::new(1., -1.)), 7. * TAU / 8., 1e-12));
	}

	#[test]
	fn rotate_quarter_turn() {
		let rotated = rotate(DVec2::new(3., 0.), TAU / 4.);
		assert!(dvec2_compare(rotated, DVec2::new(0., 3.), 1e-12));
	}

	#[test]
	fn quantize_rounds_to_step() {
		assert_eq!(quantize(123.4, 0.), 123.4);
		assert_eq!(quantize(123.4, 10.), 120.);
		assert_eq!(quantize(125., 10.), 130.);
		assert_eq!(quantize(-7., 5.), -5.);
	}

	#[test]
	fn bound_size_clamps_axes_independently() {
		let clamped = calculate_bound_size(DVec2::new(500., 5.), DVec2::splat(10.), DVec2::splat(300.), false);
		assert_eq!(clamped, DVec2::new(300., 10.));
	}

	#[test]
	fn bound_size_keeps_ratio_through_clamp() {
		// 2:1 proportion, max height 40 limits width to 80.
		let clamped = calculate_bound_size(DVec2::new(200., 100.), DVec2::ZERO, DVec2::new(500., 40.), true);
		assert!(dvec2_compare(clamped, DVec2::new(80., 40.), 1e-12));

		// Minimum width 50 pushes height up to hold the proportion.
		let clamped = calculate_bound_size(DVec2::new(20., 10.), DVec2::new(50., 0.), DVec2::splat(f64::INFINITY), true);
		assert!(dvec2_compare(clamped, DVec2::new(50., 25.), 1e-12));
	}
}
