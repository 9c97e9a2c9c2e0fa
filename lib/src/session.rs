//! The owned per-gesture record. Created by [`crate::ResizeEngine::start`], adjusted through its
//! setters during the start callback, then mutated exclusively by engine calls until the gesture ends.

use crate::math;
use crate::utility_types::{Direction, ElementMetrics};
use glam::DVec2;

/// Mutable state for one resize gesture.
///
/// The session stays inert until [`ResizeSession::activate`] is called: this is the caller's veto
/// point. A session that is never activated (or has been ended) turns every engine call into a no-op,
/// so declining a gesture is simply dropping the value unactivated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeSession {
	/// Measured border-box size at gesture start; the basis every delta is applied to.
	pub(crate) start_offset_size: DVec2,
	/// Reported size basis, taken from the content box; event width/height measure from here.
	pub(crate) start_size: DVec2,
	/// Size delta actually applied in the previous frame (post-snap, post-clamp, post-round).
	pub(crate) prev_dist: DVec2,
	pub(crate) direction: Direction,
	pub(crate) fixed_direction: Direction,
	pub(crate) fixed_position: DVec2,
	/// Locked width/height proportion; zero disables ratio lock.
	pub(crate) ratio: f64,
	pub(crate) is_width: bool,
	pub(crate) min_size: DVec2,
	pub(crate) max_size: DVec2,
	/// Fractional pivot of the un-rotated box.
	pub(crate) transform_origin: DVec2,
	pub(crate) start_rad: f64,
	pub(crate) start_deg: f64,
	/// Screen-space rebase added to incoming pointer travel so post-flip frames measure from the crossed anchor.
	pub(crate) flip_offsets: DVec2,
	pub(crate) flip_x_count: u32,
	pub(crate) flip_y_count: u32,
	/// Absolute position of the transform-origin pivot, maintained across flips.
	pub(crate) absolute_origin: DVec2,
	/// Accumulated translation rebase owed to an external drag sibling by the flip transitions.
	pub(crate) drag_compensation: DVec2,
	/// Absolute position of the un-rotated top-left corner at gesture start; translation is measured from here.
	pub(crate) start_top_left: DVec2,
	pub(crate) prev_translation: DVec2,
	pub(crate) is_resize: bool,
	pub(crate) has_resized: bool,
}

impl ResizeSession {
	pub(crate) fn from_metrics(metrics: &ElementMetrics, direction: Direction, group_member: bool) -> Self {
		let offset_size = metrics.offset_size;
		let padding = metrics.padding_size();
		// Declared bounds describe the content box while the engine clamps the border box, so
		// padding widens both. Group members are constrained by the group's uniform scale, not
		// their own styled bounds.
		let (min_size, max_size) = if group_member {
			(padding, DVec2::INFINITY)
		} else {
			(padding + metrics.min_size.unwrap_or(DVec2::ZERO), metrics.max_size.unwrap_or(DVec2::INFINITY) + padding)
		};
		let start_rad = metrics.rotation.to_radians();
		let fixed_direction = direction.opposite();

		let mut session = Self {
			start_offset_size: offset_size,
			start_size: metrics.css_size,
			prev_dist: DVec2::ZERO,
			direction,
			fixed_direction,
			fixed_position: DVec2::ZERO,
			ratio: 0.,
			is_width: direction.is_width_driven(),
			min_size,
			max_size,
			transform_origin: metrics.transform_origin,
			start_rad,
			start_deg: metrics.rotation,
			flip_offsets: DVec2::ZERO,
			flip_x_count: 0,
			flip_y_count: 0,
			absolute_origin: metrics.position + metrics.transform_origin * offset_size,
			drag_compensation: DVec2::ZERO,
			start_top_left: metrics.position,
			prev_translation: DVec2::ZERO,
			is_resize: false,
			has_resized: false,
		};
		session.set_ratio(if offset_size.y == 0. { 0. } else { offset_size.x / offset_size.y });
		session.fixed_position = session.absolute_position_of(fixed_direction);
		session
	}

	/// Absolute position of the handle point `direction` on the starting box, accounting for rotation
	/// about the transform origin.
	pub fn absolute_position_of(&self, direction: Direction) -> DVec2 {
		let local = (direction.as_dvec2() + DVec2::ONE) / 2. * self.start_offset_size;
		let origin_local = self.transform_origin * self.start_offset_size;
		self.absolute_origin + math::rotate(local - origin_local, self.start_rad)
	}

	/// Arms the session. Until this is called every compute and end call is a no-op.
	pub fn activate(&mut self) {
		self.is_resize = true;
	}

	/// Overrides the reported size basis without touching the measured one.
	pub fn set_start_size(&mut self, size: DVec2) {
		self.start_size = size;
	}

	/// Overrides the locked width/height proportion. Zero or a non-finite value disables the lock.
	pub fn set_ratio(&mut self, ratio: f64) {
		self.ratio = if ratio.is_finite() && ratio != 0. { ratio } else { 0. };
	}

	/// Re-anchors the gesture on a different handle and recomputes that handle's absolute position.
	pub fn set_fixed_direction(&mut self, fixed_direction: Direction) {
		self.fixed_direction = fixed_direction;
		self.fixed_position = self.absolute_position_of(fixed_direction);
	}

	/// Overrides the minimum size clamp.
	pub fn set_min(&mut self, min_size: DVec2) {
		self.min_size = min_size;
	}

	/// Overrides the maximum size clamp. Axes given a non-positive maximum are unbounded.
	pub fn set_max(&mut self, max_size: DVec2) {
		self.max_size = DVec2::new(
			if max_size.x > 0. { max_size.x } else { f64::INFINITY },
			if max_size.y > 0. { max_size.y } else { f64::INFINITY },
		);
	}

	/// Overrides the fractional transform-origin pivot, shifting the tracked pivot position with it.
	pub fn set_origin(&mut self, origin: DVec2) {
		self.transform_origin = origin;
		self.absolute_origin = self.start_top_left + origin * self.start_offset_size;
	}

	pub fn is_active(&self) -> bool {
		self.is_resize
	}

	/// Whether any resize or flip frame has been emitted so far.
	pub fn has_resized(&self) -> bool {
		self.has_resized
	}

	pub fn direction(&self) -> Direction {
		self.direction
	}

	pub fn fixed_direction(&self) -> Direction {
		self.fixed_direction
	}

	/// Absolute position of the anchor that stays stationary while the gesture runs.
	pub fn fixed_position(&self) -> DVec2 {
		self.fixed_position
	}

	pub fn ratio(&self) -> f64 {
		self.ratio
	}

	/// Size delta applied in the previous frame.
	pub fn prev_dist(&self) -> DVec2 {
		self.prev_dist
	}

	/// Border-box size the engine believes is currently rendered.
	pub fn current_size(&self) -> DVec2 {
		self.start_offset_size + self.prev_dist
	}

	/// Accumulated translation rebase owed to an external drag sibling by flips.
	pub fn drag_compensation(&self) -> DVec2 {
		self.drag_compensation
	}

	/// How many times each axis has flipped during this gesture.
	pub fn flip_counts(&self) -> (u32, u32) {
		(self.flip_x_count, self.flip_y_count)
	}
}
