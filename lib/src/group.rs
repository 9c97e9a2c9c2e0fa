//! Group resize: one representative session computed over the group's bounding rectangle drives
//! every member by a rigid scale about the group's fixed anchor. Members are re-derived from the
//! representative each frame, so the group never drifts apart under rounding.

use crate::engine::ResizeEngine;
use crate::math;
use crate::session::ResizeSession;
use crate::snap::{NoSnap, SnapProvider};
use crate::utility_types::{ComputeOverrides, Direction, ElementMetrics, ResizeEvent, ResizeInput, ResizeResponse, StartError};
use glam::DVec2;

/// One element inside a group gesture.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupMember {
	pub session: ResizeSession,
	/// The member's handle position at the group's fixed direction, expressed in the group's
	/// un-rotated frame relative to the group anchor. Scaling this vector gives the member's
	/// per-frame drag target.
	original: DVec2,
}

impl GroupMember {
	pub fn original(&self) -> DVec2 {
		self.original
	}
}

/// State for a group gesture: the representative session over the group rectangle plus a session
/// and projection vector per member.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSession {
	pub representative: ResizeSession,
	pub members: Vec<GroupMember>,
	group_rad: f64,
}

impl GroupSession {
	/// Arms the representative and every member. Same opt-in contract as
	/// [`ResizeSession::activate`]: drop the unactivated group to veto the gesture.
	pub fn activate(&mut self) {
		self.representative.activate();
		for member in &mut self.members {
			member.session.activate();
		}
	}

	/// Re-anchors the representative and every member session on `direction`, then re-projects the
	/// members against the new anchor.
	pub fn set_fixed_direction(&mut self, direction: Direction) {
		self.representative.set_fixed_direction(direction);
		for member in &mut self.members {
			member.session.set_fixed_direction(direction);
		}
		self.project_members();
	}

	fn project_members(&mut self) {
		let fixed_position = self.representative.fixed_position();
		let fixed_direction = self.representative.fixed_direction();
		for member in &mut self.members {
			let handle = member.session.absolute_position_of(fixed_direction);
			member.original = math::rotate(handle - fixed_position, -self.group_rad);
		}
	}
}

/// The representative's response for a frame plus the member events derived from it. A flip frame
/// carries no member events; members pick the new orientation up from the next resize frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupResizeResponse {
	pub response: ResizeResponse,
	pub events: Vec<ResizeEvent>,
}

impl ResizeEngine {
	/// Begins a group gesture over `group_metrics` (the rotated bounding rectangle of the members)
	/// with one session per member.
	///
	/// Members are bounded only by their own padding: the group clamps as a whole through the
	/// representative, so member-level minimums and maximums are ignored.
	pub fn group_start(&self, group_metrics: &ElementMetrics, member_metrics: &[ElementMetrics], direction: Option<Direction>, is_pinch: bool) -> Result<GroupSession, StartError> {
		let representative = self.start(group_metrics, direction, is_pinch)?;
		let direction = representative.direction();

		let members = member_metrics
			.iter()
			.map(|metrics| GroupMember {
				session: ResizeSession::from_metrics(metrics, direction, true),
				original: DVec2::ZERO,
			})
			.collect();

		let mut group = GroupSession {
			representative,
			members,
			group_rad: group_metrics.rotation.to_radians(),
		};
		group.project_members();
		Ok(group)
	}

	/// Advances a group gesture by one frame.
	///
	/// The representative computes first, with the gesture's own snapping; each member is then
	/// scaled by the representative's size change and dragged toward its projected target. Members
	/// never snap on their own, and their computations are nested so none of them goes silent.
	pub fn group_compute(&self, group: &mut GroupSession, input: ResizeInput, snap: &mut dyn SnapProvider) -> Option<GroupResizeResponse> {
		let response = self.compute(&mut group.representative, input, ComputeOverrides::default(), snap)?;

		let ResizeResponse::Resize(event) = response else {
			return Some(GroupResizeResponse { response, events: Vec::new() });
		};

		let start = event.offset_size - event.dist;
		let scale = DVec2::new(
			if start.x != 0. { event.offset_size.x / start.x } else { 1. },
			if start.y != 0. { event.offset_size.y / start.y } else { 1. },
		);
		let fixed_position = group.representative.fixed_position();
		let keep_ratio = self.options.keep_ratio;

		let mut events = Vec::with_capacity(group.members.len());
		for member in &mut group.members {
			let target = fixed_position + math::rotate(member.original * scale, group.group_rad);
			let overrides = ComputeOverrides {
				keep_ratio,
				fixed_position: Some(target),
				nested: true,
			};
			if let Some(ResizeResponse::Resize(event)) = self.compute(&mut member.session, ResizeInput::Scale { factor: scale }, overrides, &mut NoSnap) {
				events.push(event);
			}
		}

		Some(GroupResizeResponse { response, events })
	}

	/// Ends a group gesture. Returns whether the representative emitted anything.
	pub fn group_end(&self, group: &mut GroupSession) -> bool {
		for member in &mut group.members {
			self.end(&mut member.session);
		}
		self.end(&mut group.representative)
	}
}
