//! Contract for the external snapping collaborator. The engine never computes guidelines itself;
//! it asks the provider once per frame for an advisory per-axis correction and reconciles the
//! answer with ratio lock, throttling, and the collapse guard.

use crate::utility_types::Direction;
use glam::DVec2;

/// Geometry handed to the snap collaborator, at most once per compute call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapRequest {
	/// Tentative size before snapping, throttling, clamping, and rounding.
	pub size: DVec2,
	/// Direction the frame is computed with (post-inference).
	pub direction: Direction,
	/// Anchor that stays stationary for the frame.
	pub fixed_position: DVec2,
	/// Driving axis under ratio lock.
	pub is_width: bool,
}

/// Advisory snapping: the returned vector is the per-axis distance to the nearest guideline, zero
/// for no snap. Implementations must be idempotent for identical requests within a frame.
pub trait SnapProvider {
	fn snap_resize(&mut self, request: &SnapRequest) -> DVec2;
}

/// Disables snapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSnap;

impl SnapProvider for NoSnap {
	fn snap_resize(&mut self, _request: &SnapRequest) -> DVec2 {
		DVec2::ZERO
	}
}
