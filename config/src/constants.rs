//! # Configuration Constants
//!
//! Centralized constants for the MatrixFlow duct generator. All geometry
//! calculations, resolution parameters, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default and limit values for facet counts and stations
//! - **Fit**: Mating-clearance allowance for non-standard fit modes
//! - **Limits**: Safety bounds on angles and resolution

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for degenerate-triangle detection.
///
/// A triangle whose cross-product area falls below this value is treated
/// as degenerate during mesh validation. Slightly larger than `EPSILON`
/// to absorb numerical noise from frame rotations.
pub const AREA_EPSILON: f64 = 1e-8;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default facet count for cross-section sampling and path stations.
///
/// Matches the resolution the generator uses when the caller does not
/// override `segments`. Higher values produce smoother transitions at the
/// cost of more triangles.
pub const DEFAULT_SEGMENTS: u32 = 64;

/// Minimum facet count for a closed cross-section polygon.
///
/// A polygon needs at least three vertices to enclose area.
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum facet count accepted by parameter validation.
///
/// Safety bound so a typo in the resolution parameter cannot request a
/// multi-gigabyte mesh.
pub const MAX_SEGMENTS: u32 = 1024;

// =============================================================================
// FIT CONSTANTS
// =============================================================================

/// Mating clearance per side, in model units (millimeters).
///
/// Applied by the non-standard fit modes: `Inside` shrinks each nominal
/// dimension by twice this value so the opening slides into a duct of the
/// nominal size, `Outside` grows it by the same amount so a nominal duct
/// slides into the opening. The `Standard` mode ignores it and matches
/// the nominal dimension exactly.
pub const FIT_CLEARANCE: f64 = 0.4;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum exit-angle magnitude in degrees.
///
/// Beyond this tilt the top rim would approach a vertical face and the
/// lateral surface can fold through itself, so validation rejects it.
pub const MAX_EXIT_ANGLE: f64 = 80.0;

/// Maximum curve tension accepted by parameter validation.
///
/// Tension blends the lateral ramp between linear (0.0) and a fully eased
/// cubic (1.0).
pub const MAX_CURVE_TENSION: f64 = 1.0;
