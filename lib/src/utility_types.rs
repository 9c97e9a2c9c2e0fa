//! Shared types for the resize pipeline: handle directions, element measurements, gesture
//! configuration, per-frame inputs, and the emitted events.

use crate::consts::{DEFAULT_SNAP_THRESHOLD, DEFAULT_THROTTLE_RESIZE};
use glam::DVec2;
use thiserror::Error;

/// Per-axis handle encoding: -1 grows the box toward negative, 0 leaves the axis alone, 1 grows toward positive.
///
/// Supplied at gesture start from the grabbed handle; the flip transition negates components in place
/// when a dragged edge crosses the opposite edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
	pub x: i8,
	pub y: i8,
}

impl Direction {
	pub const CENTER: Self = Self { x: 0, y: 0 };
	pub const TOP: Self = Self { x: 0, y: -1 };
	pub const BOTTOM: Self = Self { x: 0, y: 1 };
	pub const LEFT: Self = Self { x: -1, y: 0 };
	pub const RIGHT: Self = Self { x: 1, y: 0 };
	pub const TOP_LEFT: Self = Self { x: -1, y: -1 };
	pub const TOP_RIGHT: Self = Self { x: 1, y: -1 };
	pub const BOTTOM_LEFT: Self = Self { x: -1, y: 1 };
	pub const BOTTOM_RIGHT: Self = Self { x: 1, y: 1 };

	/// Components of any magnitude are collapsed to their sign.
	pub const fn new(x: i8, y: i8) -> Self {
		Self { x: x.signum(), y: y.signum() }
	}

	/// Parses a compass handle name as used by control box handle markup: `"n"`, `"ne"`, `"e"`, `"se"`, `"s"`, `"sw"`, `"w"`, or `"nw"`.
	pub fn from_compass(name: &str) -> Option<Self> {
		match name {
			"n" => Some(Self::TOP),
			"ne" => Some(Self::TOP_RIGHT),
			"e" => Some(Self::RIGHT),
			"se" => Some(Self::BOTTOM_RIGHT),
			"s" => Some(Self::BOTTOM),
			"sw" => Some(Self::BOTTOM_LEFT),
			"w" => Some(Self::LEFT),
			"nw" => Some(Self::TOP_LEFT),
			_ => None,
		}
	}

	/// The handle diagonally opposite this one, which stays stationary while this one is dragged.
	pub const fn opposite(self) -> Self {
		Self { x: -self.x, y: -self.y }
	}

	pub fn as_dvec2(self) -> DVec2 {
		DVec2::new(self.x as f64, self.y as f64)
	}

	/// Width is the driving axis for every handle except a pure vertical edge.
	pub const fn is_width_driven(self) -> bool {
		!(self.x == 0 && self.y != 0)
	}
}

/// Snapshot of the target element taken from the measurement layer at gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementMetrics {
	/// Rendered border-box size, the authoritative starting size.
	pub offset_size: DVec2,
	/// Styled size. Any excess of the rendered size over this is border or padding that can never be resized away.
	pub css_size: DVec2,
	/// Absolute position of the un-rotated top-left corner.
	pub position: DVec2,
	/// Rotation about the transform origin, in degrees.
	pub rotation: f64,
	/// Fractional pivot of the un-rotated box; (0.5, 0.5) is the center.
	pub transform_origin: DVec2,
	/// Author-declared minimum size, already resolved to pixels.
	pub min_size: Option<DVec2>,
	/// Author-declared maximum size, already resolved to pixels.
	pub max_size: Option<DVec2>,
}

impl ElementMetrics {
	/// Metrics for an unrotated, unconstrained element whose rendered and styled sizes agree.
	pub fn new(position: DVec2, size: DVec2) -> Self {
		Self {
			offset_size: size,
			css_size: size,
			position,
			rotation: 0.,
			transform_origin: DVec2::splat(0.5),
			min_size: None,
			max_size: None,
		}
	}

	/// Border/padding span that survives any resize.
	pub fn padding_size(&self) -> DVec2 {
		(self.offset_size - self.css_size).max(DVec2::ZERO)
	}
}

/// Behavior switches for a gesture, fixed for the lifetime of its session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeOptions {
	/// Locks width/height to the starting proportion.
	pub keep_ratio: bool,
	/// Dragging an edge past the opposite edge flips the direction instead of clamping at zero size.
	pub can_flip: bool,
	/// Quantization step applied to axes that received no snap correction. Zero disables.
	pub throttle_resize: f64,
	/// A snap correction is dropped once the unsnapped size has collapsed this far past zero.
	pub snap_threshold: f64,
}

impl Default for ResizeOptions {
	fn default() -> Self {
		Self {
			keep_ratio: false,
			can_flip: false,
			throttle_resize: DEFAULT_THROTTLE_RESIZE,
			snap_threshold: DEFAULT_SNAP_THRESHOLD,
		}
	}
}

/// Per-frame input resolved by the caller's gesture layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeInput {
	/// Raw screen-space pointer travel since gesture start.
	Pointer { dist: DVec2 },
	/// Externally supplied absolute (width, height) delta from the starting size.
	Delta { dist: DVec2 },
	/// Per-axis proportional scale relative to the starting size.
	Scale { factor: DVec2 },
	/// Two-finger pinch travel; width follows the travel directly and height follows the starting aspect.
	Pinch { distance: f64 },
}

/// Per-call adjustments a coordinating layer applies over a session's own configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputeOverrides {
	/// OR-ed with the engine's own ratio lock (a group's lock applied to its members).
	pub keep_ratio: bool,
	/// Replaces the session's fixed anchor position for this frame (a group member's drag target).
	pub fixed_position: Option<DVec2>,
	/// Marks a nested (group member) computation, which skips zero-delta event suppression.
	pub nested: bool,
}

/// A validated size change for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeEvent {
	/// Direction the frame was computed with; reflects zero-size sign inference, unlike the session's own direction.
	pub direction: Direction,
	/// Reported width, measured from the (possibly overridden) starting basis.
	pub width: f64,
	/// Reported height, measured from the (possibly overridden) starting basis.
	pub height: f64,
	/// Border-box target size after snapping, clamping, and rounding.
	pub offset_size: DVec2,
	/// Total size change from the starting size.
	pub dist: DVec2,
	/// Incremental size change since the previous frame.
	pub delta: DVec2,
	/// Total screen-space translation that keeps the fixed anchor stationary.
	pub translation: DVec2,
	/// Incremental translation since the previous frame.
	pub translation_delta: DVec2,
	pub is_pinch: bool,
}

/// A direction inversion emitted in place of a resize for the frame in which an axis crosses zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlipEvent {
	pub flipped_x: bool,
	pub flipped_y: bool,
	/// Direction after the inversion.
	pub direction: Direction,
	/// Screen-space anchor shift applied by this flip.
	pub offsets: DVec2,
	/// Accumulated translation rebase owed to an external drag sibling, after this flip.
	pub drag_compensation: DVec2,
}

/// Outcome of one compute call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeResponse {
	Resize(ResizeEvent),
	Flip(FlipEvent),
}

impl ResizeResponse {
	/// The resize event, if this frame produced one.
	pub fn resize(&self) -> Option<&ResizeEvent> {
		match self {
			Self::Resize(event) => Some(event),
			Self::Flip(_) => None,
		}
	}

	/// The flip event, if this frame produced one.
	pub fn flip(&self) -> Option<&FlipEvent> {
		match self {
			Self::Resize(_) => None,
			Self::Flip(event) => Some(event),
		}
	}
}

/// Reasons a gesture start is rejected before any session exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
	#[error("resize start requires a handle direction unless the gesture is a pinch")]
	NoDirection,
}
