//! # Generation Parameters
//!
//! The immutable input record for one generation request, plus its
//! validation. The field names match the knobs the external harness
//! marshals (serde handles the JSON boundary), and `segments` carries the
//! facet-resolution parameter traditionally called `fn`.

use config::constants::{DEFAULT_SEGMENTS, MAX_CURVE_TENSION, MAX_EXIT_ANGLE, MAX_SEGMENTS, MIN_SEGMENTS};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Supported cross-section shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Circular opening; `width` is the outer diameter
    Circle,
    /// Rectangular opening; `width` × `depth` outer dimensions
    Rectangle,
}

/// Policy for matching an opening against its mating part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Outer boundary matches the nominal dimension exactly
    Standard,
    /// Shrunk by the mating clearance so the opening slides into a
    /// nominal-size duct
    Inside,
    /// Grown by the mating clearance so a nominal-size duct slides in
    Outside,
}

/// Immutable parameter set for one generation request.
///
/// Constructed once per request; every derived artifact (path, sections,
/// mesh) is a pure function of this record. Unset fields take the
/// defaults below when deserialized, mirroring how the harness overrides
/// only the knobs a test cares about.
///
/// # Example
///
/// ```rust
/// use matrixflow_core::Params;
///
/// let params = Params {
///     transition_height: 120.0,
///     offset_x: 60.0,
///     ..Params::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Height of the pure transition segment (z = 0 to z = height)
    pub transition_height: f64,
    /// Length of the straight prismatic segment below z = 0
    pub bottom_extension: f64,
    /// Length of the straight prismatic segment above the transition
    pub top_extension: f64,
    /// Lateral shift of the top opening along X
    pub offset_x: f64,
    /// Lateral shift of the top opening along Y
    pub offset_y: f64,
    /// Exit tilt of the top opening about the X axis, in degrees
    pub angle_x: f64,
    /// Exit tilt of the top opening about the Y axis, in degrees
    pub angle_y: f64,
    /// Shape of the bottom opening
    pub bottom_shape: ShapeKind,
    /// Outer width (diameter for circles) of the bottom opening
    pub bottom_width: f64,
    /// Shape of the top opening
    pub top_shape: ShapeKind,
    /// Outer width (diameter for circles) of the top opening
    pub top_width: f64,
    /// Outer depth of the top opening (rectangles; ignored for circles)
    pub top_depth: f64,
    /// Wall thickness of the hollow shell
    pub wall_thickness: f64,
    /// Fit policy for the bottom opening
    pub bottom_fit: FitMode,
    /// Fit policy for the top opening
    pub top_fit: FitMode,
    /// Blend sharpness of the lateral ramp, 0.0 (linear) to 1.0 (eased)
    pub curve_tension: f64,
    /// Force a linear lateral ramp regardless of tension
    pub straighten_path: bool,
    /// Facet resolution: vertices per cross-section and path stations
    #[serde(rename = "fn")]
    pub segments: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            transition_height: 100.0,
            bottom_extension: 0.0,
            top_extension: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            angle_x: 0.0,
            angle_y: 0.0,
            bottom_shape: ShapeKind::Circle,
            bottom_width: 50.0,
            top_shape: ShapeKind::Circle,
            top_width: 50.0,
            top_depth: 50.0,
            wall_thickness: 2.0,
            bottom_fit: FitMode::Standard,
            top_fit: FitMode::Standard,
            curve_tension: 0.5,
            straighten_path: false,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl Params {
    /// Validates the parameter set before any construction starts.
    ///
    /// Every check names the offending parameter so the caller can fix
    /// its input; nothing is silently corrected.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_finite("transition_height", self.transition_height)?;
        require_finite("bottom_extension", self.bottom_extension)?;
        require_finite("top_extension", self.top_extension)?;
        require_finite("offset_x", self.offset_x)?;
        require_finite("offset_y", self.offset_y)?;
        require_finite("angle_x", self.angle_x)?;
        require_finite("angle_y", self.angle_y)?;
        require_finite("bottom_width", self.bottom_width)?;
        require_finite("top_width", self.top_width)?;
        require_finite("top_depth", self.top_depth)?;
        require_finite("wall_thickness", self.wall_thickness)?;
        require_finite("curve_tension", self.curve_tension)?;

        require_positive("transition_height", self.transition_height)?;
        require_positive("bottom_width", self.bottom_width)?;
        require_positive("top_width", self.top_width)?;
        require_positive("top_depth", self.top_depth)?;
        require_positive("wall_thickness", self.wall_thickness)?;

        require_non_negative("bottom_extension", self.bottom_extension)?;
        require_non_negative("top_extension", self.top_extension)?;

        if self.angle_x.abs() > MAX_EXIT_ANGLE {
            return Err(CoreError::invalid_parameter(
                "angle_x",
                format!("magnitude must not exceed {MAX_EXIT_ANGLE} degrees"),
            ));
        }
        if self.angle_y.abs() > MAX_EXIT_ANGLE {
            return Err(CoreError::invalid_parameter(
                "angle_y",
                format!("magnitude must not exceed {MAX_EXIT_ANGLE} degrees"),
            ));
        }

        if !(0.0..=MAX_CURVE_TENSION).contains(&self.curve_tension) {
            return Err(CoreError::invalid_parameter(
                "curve_tension",
                format!("must lie in [0, {MAX_CURVE_TENSION}]"),
            ));
        }

        if self.segments < MIN_SEGMENTS {
            return Err(CoreError::invalid_parameter(
                "fn",
                format!("must be at least {MIN_SEGMENTS}"),
            ));
        }
        if self.segments > MAX_SEGMENTS {
            return Err(CoreError::invalid_parameter(
                "fn",
                format!("must not exceed {MAX_SEGMENTS}"),
            ));
        }

        Ok(())
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::invalid_parameter(name, "must be a finite number"))
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), CoreError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::invalid_parameter(name, "must be strictly positive"))
    }
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), CoreError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::invalid_parameter(name, "must not be negative"))
    }
}
