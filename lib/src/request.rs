//! Programmatic resizing without a pointer: a requester wraps one session and converts absolute
//! or relative size requests into the same per-frame pipeline a drag goes through, so snapping,
//! bounds, and event bookkeeping behave identically.

use crate::engine::ResizeEngine;
use crate::session::ResizeSession;
use crate::snap::SnapProvider;
use crate::utility_types::{ComputeOverrides, Direction, ElementMetrics, ResizeInput, ResizeResponse};
use glam::DVec2;

/// One step of a programmatic resize. Axes are independent; an axis with no entry holds its
/// accumulated value. An absolute entry takes precedence over the same axis's relative entry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeRequest {
	/// Target width, replacing whatever was accumulated so far.
	pub offset_width: Option<f64>,
	/// Target height, replacing whatever was accumulated so far.
	pub offset_height: Option<f64>,
	/// Width change added onto the accumulator.
	pub delta_width: Option<f64>,
	/// Height change added onto the accumulator.
	pub delta_height: Option<f64>,
	/// Locks this step to the session's starting proportions.
	pub keep_ratio: bool,
}

/// Drives a session from code. Construction starts the gesture immediately; requests accumulate
/// into a running size delta and each one computes a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeRequester {
	engine: ResizeEngine,
	session: ResizeSession,
	original_size: DVec2,
	accumulated: DVec2,
}

impl ResizeRequester {
	/// Starts a programmatic gesture on `metrics`. Without an explicit handle the bottom-right
	/// corner is assumed, which grows the element rightward and downward.
	pub fn new(engine: ResizeEngine, metrics: &ElementMetrics, direction: Option<Direction>) -> Self {
		let direction = direction.unwrap_or(Direction::BOTTOM_RIGHT);
		let mut session = ResizeSession::from_metrics(metrics, direction, false);
		session.activate();
		Self {
			engine,
			session,
			original_size: metrics.offset_size,
			accumulated: DVec2::ZERO,
		}
	}

	/// Applies one step and computes the resulting frame.
	pub fn request(&mut self, request: SizeRequest, snap: &mut dyn SnapProvider) -> Option<ResizeResponse> {
		if let Some(target) = request.offset_width {
			self.accumulated.x = target - self.original_size.x;
		} else if let Some(delta) = request.delta_width {
			self.accumulated.x += delta;
		}
		if let Some(target) = request.offset_height {
			self.accumulated.y = target - self.original_size.y;
		} else if let Some(delta) = request.delta_height {
			self.accumulated.y += delta;
		}

		let overrides = ComputeOverrides {
			keep_ratio: request.keep_ratio,
			..Default::default()
		};
		self.engine.compute(&mut self.session, ResizeInput::Delta { dist: self.accumulated }, overrides, snap)
	}

	/// Finishes the sequence, reporting whether any step changed the element.
	pub fn end(mut self) -> bool {
		self.engine.end(&mut self.session)
	}

	pub fn session(&self) -> &ResizeSession {
		&self.session
	}

	pub fn session_mut(&mut self) -> &mut ResizeSession {
		&mut self.session
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::snap::NoSnap;
	use pretty_assertions::assert_eq;

	fn sizes(requester: &mut ResizeRequester, request: SizeRequest) -> DVec2 {
		let response = requester.request(request, &mut NoSnap).unwrap();
		response.resize().unwrap().offset_size
	}

	#[test]
	fn absolute_entries_rebase_and_relative_entries_accumulate() {
		let metrics = ElementMetrics::new(DVec2::ZERO, DVec2::splat(100.));
		let mut requester = ResizeRequester::new(ResizeEngine::default(), &metrics, None);

		let request = SizeRequest { offset_width: Some(150.), ..Default::default() };
		assert_eq!(sizes(&mut requester, request), DVec2::new(150., 100.));

		let request = SizeRequest { delta_width: Some(10.), ..Default::default() };
		assert_eq!(sizes(&mut requester, request), DVec2::new(160., 100.));

		let request = SizeRequest { offset_height: Some(80.), ..Default::default() };
		assert_eq!(sizes(&mut requester, request), DVec2::new(160., 80.));

		// An absolute width entry overrides the relative one in the same step.
		let request = SizeRequest { offset_width: Some(120.), delta_width: Some(999.), ..Default::default() };
		assert_eq!(sizes(&mut requester, request), DVec2::new(120., 80.));

		assert!(requester.end());
	}

	#[test]
	fn keep_ratio_fills_the_unnamed_axis() {
		let metrics = ElementMetrics::new(DVec2::ZERO, DVec2::new(200., 100.));
		let mut requester = ResizeRequester::new(ResizeEngine::default(), &metrics, None);

		let request = SizeRequest { delta_width: Some(50.), keep_ratio: true, ..Default::default() };
		assert_eq!(sizes(&mut requester, request), DVec2::new(250., 125.));
	}

	#[test]
	fn empty_requests_stay_silent() {
		let metrics = ElementMetrics::new(DVec2::ZERO, DVec2::splat(100.));
		let mut requester = ResizeRequester::new(ResizeEngine::default(), &metrics, None);

		assert_eq!(requester.request(SizeRequest::default(), &mut NoSnap), None);
		assert!(!requester.end());
	}

	#[test]
	fn anchored_direction_applies_to_requests() {
		let metrics = ElementMetrics::new(DVec2::ZERO, DVec2::splat(100.));
		let mut requester = ResizeRequester::new(ResizeEngine::default(), &metrics, Some(Direction::TOP_LEFT));

		let request = SizeRequest { delta_width: Some(20.), delta_height: Some(20.), ..Default::default() };
		let response = requester.request(request, &mut NoSnap).unwrap();
		let event = *response.resize().unwrap();
		assert_eq!(event.offset_size, DVec2::splat(120.));
		// Growing from the top-left handle shifts the box up and left to hold the bottom-right.
		assert_eq!(event.translation, DVec2::splat(-20.));
	}
}
