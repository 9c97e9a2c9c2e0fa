// RESIZE PIPELINE
/// Floor applied to every tentative size so a collapsing axis never reaches zero or goes negative.
pub const SIZE_EPSILON: f64 = 1e-7;
/// Default quantization step for axes that received no snap correction. Zero leaves sizes unquantized.
pub const DEFAULT_THROTTLE_RESIZE: f64 = 0.;
/// Default negative excursion past zero beyond which a snap correction is dropped for an axis.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 5.;

// CORRECTION PASS
/// Divergence (in pixels, per axis) between the engine's model and the externally applied size that triggers reconciliation.
pub const SIZE_CORRECTION_TOLERANCE: f64 = 3.;
