//! Transform-cage: resize gesture computation for interactive editors.
//!
//! Feed pointer travel, pinch distances, or programmatic size requests into a [`ResizeEngine`] and
//! get back validated sizes plus the translation that keeps the grabbed handle's opposite point
//! pinned, with ratio locking, snapping, throttling, flip transitions, and group fan-out applied
//! in one fixed per-frame pipeline.

pub mod consts;
pub mod math;

mod engine;
mod flip;
mod group;
mod request;
mod session;
mod snap;
mod utility_types;

pub use engine::ResizeEngine;
pub use group::{GroupMember, GroupResizeResponse, GroupSession};
pub use request::{ResizeRequester, SizeRequest};
pub use session::ResizeSession;
pub use snap::{NoSnap, SnapProvider, SnapRequest};
pub use utility_types::*;
