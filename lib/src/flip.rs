//! Flip transition: when a dragged edge crosses the opposite edge, the direction inverts and the
//! session's bookkeeping is rebased so the next frame grows the box outward from the crossed anchor
//! without a position jump.

use crate::session::ResizeSession;
use crate::utility_types::FlipEvent;
use glam::DVec2;

/// Executes the flip for the flagged axes and returns the event emitted in place of a resize.
///
/// Y is handled before X, and each axis's offset is built with the direction sign *after* inversion.
/// The offset is the screen-space vector from the crossed edge's old span: on the first flip of an
/// axis it rebases `flip_offsets` (subsequent flips of the same axis must not reapply the baseline),
/// and its halves move the tracked pivot and the drag-compensation accumulator.
///
/// Rotations on the 90° grid keep the two screen axes independent, so only the flipped axis's
/// compensation moves. Any other rotation cross-couples the axes: the pivot also shifts on the
/// cross axis and the compensation must be projected through the rotation's cosine to stay correct
/// in rotated space.
pub(crate) fn execute(session: &mut ResizeSession, swap_x: bool, swap_y: bool) -> FlipEvent {
	let start_rad = session.start_rad;
	let on_90_grid = session.start_deg % 90. == 0.;
	let mut offsets = DVec2::ZERO;

	if swap_y {
		session.direction.y = -session.direction.y;
		session.fixed_direction.y = -session.fixed_direction.y;

		let sign = session.direction.y as f64;
		let offset = session.start_offset_size.y * DVec2::new(-start_rad.sin(), start_rad.cos()) * sign;

		if session.flip_y_count == 0 {
			session.flip_offsets -= offset;
		}

		session.start_size.y = 0.;
		session.start_offset_size.y = 0.;
		session.prev_dist.y = 0.;

		session.absolute_origin.y += offset.y / 2.;
		if on_90_grid {
			session.drag_compensation.y += offset.y / 2.;
		} else {
			session.absolute_origin.x += offset.x / 2.;
			session.drag_compensation.y += offset.y / 2. / start_rad.cos();
		}

		session.flip_y_count += 1;
		offsets += offset;
	}

	if swap_x {
		session.direction.x = -session.direction.x;
		session.fixed_direction.x = -session.fixed_direction.x;

		let sign = session.direction.x as f64;
		let offset = session.start_offset_size.x * DVec2::new(start_rad.cos(), start_rad.sin()) * sign;

		if session.flip_x_count == 0 {
			session.flip_offsets -= offset;
		}

		session.start_size.x = 0.;
		session.start_offset_size.x = 0.;
		session.prev_dist.x = 0.;

		session.absolute_origin.x += offset.x / 2.;
		if on_90_grid {
			session.drag_compensation.x += offset.x / 2.;
		} else {
			session.absolute_origin.y += offset.y / 2.;
			session.drag_compensation.x += offset.x / 2. / start_rad.cos();
		}

		session.flip_x_count += 1;
		offsets += offset;
	}

	log::trace!("Resize flip: x={swap_x} y={swap_y} direction=({}, {}) offsets={offsets}", session.direction.x, session.direction.y);

	FlipEvent {
		flipped_x: swap_x,
		flipped_y: swap_y,
		direction: session.direction,
		offsets,
		drag_compensation: session.drag_compensation,
	}
}
