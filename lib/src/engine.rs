//! The per-frame resize computation: start/compute/correct/end for a single element. Converts
//! mode-specific input into a validated target size plus the translation that holds the fixed
//! anchor stationary, applying ratio lock, snapping, throttling, bound clamping, and flips in a
//! fixed order.

use crate::consts::{SIZE_CORRECTION_TOLERANCE, SIZE_EPSILON};
use crate::flip;
use crate::math;
use crate::session::ResizeSession;
use crate::snap::{SnapProvider, SnapRequest};
use crate::utility_types::{ComputeOverrides, Direction, ElementMetrics, ResizeEvent, ResizeInput, ResizeOptions, ResizeResponse, StartError};
use glam::DVec2;

/// Stateless driver for resize gestures. Behavior switches live in [`ResizeOptions`]; per-gesture
/// state lives in the [`ResizeSession`] values this engine creates and advances.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResizeEngine {
	pub options: ResizeOptions,
}

impl ResizeEngine {
	pub fn new(options: ResizeOptions) -> Self {
		Self { options }
	}

	/// Begins a gesture on `metrics`. `direction` identifies the grabbed handle; a pinch may omit it
	/// and anchors on the element center instead.
	///
	/// The returned session is inert until [`ResizeSession::activate`] is called, which is the
	/// caller's opt-in point: to veto the gesture, drop the session unactivated.
	pub fn start(&self, metrics: &ElementMetrics, direction: Option<Direction>, is_pinch: bool) -> Result<ResizeSession, StartError> {
		let direction = match direction {
			Some(direction) => direction,
			None if is_pinch => Direction::CENTER,
			None => {
				log::warn!("Resize start rejected: no handle direction and the gesture is not a pinch");
				return Err(StartError::NoDirection);
			}
		};
		Ok(ResizeSession::from_metrics(metrics, direction, false))
	}

	/// Advances an active session by one frame.
	///
	/// Returns `None` while the session is inactive and for frames that change nothing observable
	/// (zero size delta and zero translation delta, unless the computation is nested).
	pub fn compute(&self, session: &mut ResizeSession, input: ResizeInput, overrides: ComputeOverrides, snap: &mut dyn SnapProvider) -> Option<ResizeResponse> {
		if !session.is_resize {
			return None;
		}

		let options = self.options;
		let start_offset = session.start_offset_size;
		let ratio = session.ratio;
		let keep_ratio = ratio != 0. && (options.keep_ratio || overrides.keep_ratio);
		let is_pinch = matches!(input, ResizeInput::Pinch { .. });

		// The handle driving this frame; sign inference below may rebind it for the frame without
		// touching the session's own direction.
		let mut direction = session.direction;
		let mut size_direction = if direction == Direction::CENTER { Direction::new(1, 1) } else { direction };

		// The anchor for this frame: a group member is pulled toward its projected target, a pinch
		// scales about the element center, everything else holds the handle chosen at start.
		let fixed_position = overrides
			.fixed_position
			.unwrap_or_else(|| if is_pinch { session.absolute_position_of(Direction::CENTER) } else { session.fixed_position });

		let dist = match input {
			ResizeInput::Delta { dist } => {
				let mut dist = dist;
				if keep_ratio {
					if dist.x == 0. && dist.y != 0. {
						dist.x = dist.y * ratio;
					} else if dist.x != 0. && dist.y == 0. {
						dist.y = dist.x / ratio;
					}
				}
				dist
			}
			ResizeInput::Scale { factor } => (factor - DVec2::ONE) * start_offset,
			ResizeInput::Pinch { distance } => {
				if start_offset.x == 0. {
					DVec2::ZERO
				} else {
					DVec2::new(distance, distance * start_offset.y / start_offset.x)
				}
			}
			ResizeInput::Pointer { dist: pointer } => {
				// Past flips rebase incoming travel so it measures from the crossed anchor.
				let pointer = if options.can_flip { pointer + session.flip_offsets } else { pointer };
				let local = math::rotate(pointer, -session.start_rad);
				let mut dist = size_direction.as_dvec2() * local;

				if keep_ratio && start_offset.x != 0. && start_offset.y != 0. {
					dist = Self::project_ratio_dist(local, size_direction, start_offset, ratio);
				} else if !keep_ratio && !options.can_flip {
					// An unset axis whose start size is zero takes its growth sign from the drag
					// itself, so a collapsed element under a plain edge handle can grow out in
					// either direction.
					if direction.x == 0 && start_offset.x == 0. && local.x != 0. {
						direction.x = if local.x < 0. { -1 } else { 1 };
					}
					if direction.y == 0 && start_offset.y == 0. && local.y != 0. {
						direction.y = if local.y < 0. { -1 } else { 1 };
					}
					size_direction = direction;
					dist = size_direction.as_dvec2() * local;
				}
				dist
			}
		};

		// Tentative size: driven axes move by dist and never collapse past the epsilon floor.
		let mut next = DVec2::new(
			if size_direction.x != 0 || keep_ratio { (start_offset.x + dist.x).max(SIZE_EPSILON) } else { start_offset.x },
			if size_direction.y != 0 || keep_ratio { (start_offset.y + dist.y).max(SIZE_EPSILON) } else { start_offset.y },
		);

		let swap_x = start_offset.x + dist.x < 0. && direction.x != 0;
		let swap_y = start_offset.y + dist.y < 0. && direction.y != 0;

		// Under ratio lock only the driving axis is authoritative.
		if keep_ratio && start_offset.x != 0. && start_offset.y != 0. {
			if session.is_width {
				next.y = next.x / ratio;
			} else {
				next.x = next.y * ratio;
			}
		}

		let mut snap_dist = DVec2::ZERO;
		if !is_pinch {
			snap_dist = snap.snap_resize(&SnapRequest {
				size: next,
				direction,
				fixed_position,
				is_width: session.is_width,
			});
		}
		if let ResizeInput::Delta { dist: requested } = input {
			// An axis the request leaves untouched must not get pulled onto a guideline.
			if requested.x == 0. {
				snap_dist.x = 0.;
			}
			if requested.y == 0. {
				snap_dist.y = 0.;
			}
		}

		if keep_ratio {
			if size_direction.x != 0 && size_direction.y != 0 && snap_dist.x != 0. && snap_dist.y != 0. {
				// Two corrections under ratio lock would fight; keep the larger, width on ties.
				if snap_dist.x.abs() >= snap_dist.y.abs() {
					snap_dist.y = 0.;
				} else {
					snap_dist.x = 0.;
				}
			}
			let no_snap = snap_dist.x == 0. && snap_dist.y == 0.;
			if no_snap {
				if session.is_width {
					next.x = math::quantize(next.x, options.throttle_resize);
				} else {
					next.y = math::quantize(next.y, options.throttle_resize);
				}
			}
			if (size_direction.x != 0 && size_direction.y == 0) || (snap_dist.x != 0. && snap_dist.y == 0.) || (no_snap && session.is_width) {
				next.x += snap_dist.x;
				next.y = next.x / ratio;
			} else if (size_direction.x == 0 && size_direction.y != 0) || (snap_dist.x == 0. && snap_dist.y != 0.) || (no_snap && !session.is_width) {
				next.y += snap_dist.y;
				next.x = next.y * ratio;
			}
		} else {
			// Collapse guard: an axis already dragged past zero is not pulled back onto a guideline.
			if start_offset.x + dist.x < -options.snap_threshold {
				snap_dist.x = 0.;
			}
			if start_offset.y + dist.y < -options.snap_threshold {
				snap_dist.y = 0.;
			}
			next += snap_dist;
			if snap_dist.x == 0. {
				next.x = math::quantize(next.x, options.throttle_resize);
			}
			if snap_dist.y == 0. {
				next.y = math::quantize(next.y, options.throttle_resize);
			}
		}

		// A crossed edge becomes a flip frame instead of a resize when flipping is enabled; this
		// frame's snap result is discarded.
		if (swap_x || swap_y) && options.can_flip {
			let event = flip::execute(session, swap_x, swap_y);
			session.has_resized = true;
			return Some(ResizeResponse::Flip(event));
		}

		next = math::calculate_bound_size(next, session.min_size, session.max_size, keep_ratio);
		next = next.round();

		let dist = next - start_offset;
		let delta = dist - session.prev_dist;
		session.prev_dist = dist;

		let top_left = Self::top_left_for(session, fixed_position, next);
		let translation = top_left - session.start_top_left;
		let translation_delta = translation - session.prev_translation;
		session.prev_translation = translation;

		if !overrides.nested && delta == DVec2::ZERO && translation_delta == DVec2::ZERO {
			return None;
		}

		session.has_resized = true;
		let reported = session.start_size + dist;
		Some(ResizeResponse::Resize(ResizeEvent {
			direction,
			width: reported.x,
			height: reported.y,
			offset_size: next,
			dist,
			delta,
			translation,
			translation_delta,
			is_pinch,
		}))
	}

	/// Reconciles the session after the caller applied a size the engine did not predict (an
	/// external clamp, for example). Divergence above the tolerance folds into the start/prev
	/// bookkeeping per axis and recomputes the frame once; anything within tolerance returns `None`
	/// and leaves the session untouched.
	pub fn correct(&self, session: &mut ResizeSession, applied_size: DVec2, input: ResizeInput, overrides: ComputeOverrides, snap: &mut dyn SnapProvider) -> Option<ResizeResponse> {
		if !session.is_resize {
			return None;
		}

		let error = applied_size - (session.start_offset_size + session.prev_dist);
		let diverged_x = error.x.abs() > SIZE_CORRECTION_TOLERANCE;
		let diverged_y = error.y.abs() > SIZE_CORRECTION_TOLERANCE;
		if !diverged_x && !diverged_y {
			return None;
		}

		if diverged_x {
			session.start_size.x += error.x;
			session.start_offset_size.x += error.x;
			session.prev_dist.x += error.x;
		}
		if diverged_y {
			session.start_size.y += error.y;
			session.start_offset_size.y += error.y;
			session.prev_dist.y += error.y;
		}
		log::trace!("Resize correction: folded divergence ({}, {}) into the session", error.x, error.y);

		self.compute(session, input, overrides, snap)
	}

	/// Ends the gesture. Returns whether any resize or flip frame was emitted. Ending a session
	/// that was never activated (or already ended) is a no-op reporting `false`.
	pub fn end(&self, session: &mut ResizeSession) -> bool {
		if !session.is_resize {
			return false;
		}
		session.is_resize = false;
		session.has_resized
	}

	// Projects a pointer drag onto the locked ratio. A corner handle uses the combined-diagonal
	// measure: the size delta is the difference between the new and the original doubled-extent
	// diagonal, split between the axes by the ratio's angle. An edge handle takes the drag's
	// projection onto the handle direction as the driving distance.
	fn project_ratio_dist(local: DVec2, size_direction: Direction, start_offset: DVec2, ratio: f64) -> DVec2 {
		if size_direction.x != 0 && size_direction.y != 0 {
			let start_size = size_direction.as_dvec2() * 2. * start_offset;
			let dist_size = (start_size + local).length() - start_size.length();
			let ratio_rad = math::vector_angle(DVec2::new(ratio, 1.));
			DVec2::new(ratio_rad.cos(), ratio_rad.sin()) * dist_size
		} else {
			let angle = math::vector_angle(local);
			let standard_angle = math::vector_angle(size_direction.as_dvec2());
			let sign_size = (angle - standard_angle).cos() * local.length();
			if size_direction.x != 0 {
				DVec2::new(sign_size, sign_size / ratio)
			} else {
				DVec2::new(sign_size * ratio, sign_size)
			}
		}
	}

	// Positions the un-rotated top-left corner so the fixed handle stays at `fixed_position` when
	// the box has size `size` and rotates by the session's angle about its transform origin.
	pub(crate) fn top_left_for(session: &ResizeSession, fixed_position: DVec2, size: DVec2) -> DVec2 {
		let origin_local = session.transform_origin * size;
		let fixed_local = (session.fixed_direction.as_dvec2() + DVec2::ONE) / 2. * size;
		fixed_position - math::rotate(fixed_local - origin_local, session.start_rad) - origin_local
	}
}
