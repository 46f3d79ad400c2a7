//! # Cross-Section Synthesis
//!
//! Produces the closed planar polygons the loft interpolates between.
//!
//! Every shape generator honors one canonical contract so that
//! index-aligned vertex correspondence holds across dissimilar shapes:
//!
//! - exactly `samples` vertices, counter-clockwise winding
//! - the first vertex is the boundary point on the +X axis
//! - vertices advance monotonically in polar angle
//!
//! A generator that reordered points would silently corrupt the loft, so
//! the contract lives in one trait ([`SectionProfile`]) instead of
//! per-shape ad hoc code.

use config::constants::{EPSILON, FIT_CLEARANCE, MIN_SEGMENTS};
use glam::DVec2;

use crate::error::CoreError;
use crate::params::{FitMode, Params, ShapeKind};

/// A closed cross-section polygon in the local section plane.
///
/// Simple, convex for the supported shapes, counter-clockwise.
#[derive(Debug, Clone)]
pub struct Profile {
    points: Vec<DVec2>,
}

impl Profile {
    /// Wraps an ordered vertex list. Callers guarantee the canonical
    /// winding contract.
    pub(crate) fn from_points(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Returns the polygon vertices.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Shoelace area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    /// Vertex-average center of the polygon.
    pub fn centroid(&self) -> DVec2 {
        let mut sum = DVec2::ZERO;
        for p in &self.points {
            sum += *p;
        }
        sum / self.points.len() as f64
    }

    /// Minimum distance from the centroid to any edge.
    ///
    /// This is the material locally available for the wall: an inward
    /// offset of this magnitude or more folds the polygon through itself.
    pub fn inradius(&self) -> f64 {
        let c = self.centroid();
        let n = self.points.len();
        let mut min = f64::INFINITY;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let edge = b - a;
            let len = edge.length();
            if len < EPSILON {
                continue;
            }
            let dist = (edge.x * (c.y - a.y) - edge.y * (c.x - a.x)).abs() / len;
            min = min.min(dist);
        }
        min
    }

    /// Inward offset by `distance` with miter joins.
    ///
    /// Each edge moves inward along its normal; vertices land on the
    /// intersection of their two shifted edges, so vertex count and order
    /// are preserved (the loft correspondence survives the offset).
    ///
    /// Returns `None` when the offset degenerates: opposing edge normals,
    /// or a result that is no longer counter-clockwise.
    pub fn inset(&self, distance: f64) -> Option<Profile> {
        let n = self.points.len();
        if n < 3 {
            return None;
        }

        let mut inner = Vec::with_capacity(n);
        for i in 0..n {
            let prev = self.points[(i + n - 1) % n];
            let curr = self.points[i];
            let next = self.points[(i + 1) % n];

            // Outward edge normals for a CCW polygon
            let n1 = outward_normal(curr - prev)?;
            let n2 = outward_normal(next - curr)?;

            let bisector = n1 + n2;
            let len = bisector.length();
            if len < EPSILON {
                return None;
            }
            let bisector = bisector / len;

            let dot = n1.dot(n2);
            if dot <= -1.0 + EPSILON {
                return None;
            }
            // Miter length: 1 / cos(half the turn angle)
            let scale = (2.0 / (1.0 + dot)).sqrt();

            inner.push(curr - bisector * distance * scale);
        }

        let profile = Profile::from_points(inner);
        if profile.signed_area() <= EPSILON {
            return None;
        }
        Some(profile)
    }
}

fn outward_normal(edge: DVec2) -> Option<DVec2> {
    let len = edge.length();
    if len < EPSILON {
        return None;
    }
    Some(DVec2::new(edge.y, -edge.x) / len)
}

/// A shape generator emitting vertices under the canonical contract.
pub trait SectionProfile {
    /// Emits `samples` boundary points, CCW, starting on the +X axis.
    fn emit(&self, samples: usize) -> Result<Profile, CoreError>;
}

/// Circular opening.
#[derive(Debug, Clone, Copy)]
pub struct CircleSection {
    /// Outer diameter
    pub diameter: f64,
}

impl SectionProfile for CircleSection {
    fn emit(&self, samples: usize) -> Result<Profile, CoreError> {
        if samples < MIN_SEGMENTS as usize {
            return Err(CoreError::invalid_parameter(
                "fn",
                format!("circle sections need at least {MIN_SEGMENTS} samples"),
            ));
        }

        let radius = self.diameter / 2.0;
        let mut points = Vec::with_capacity(samples);
        for i in 0..samples {
            let angle = std::f64::consts::TAU * (i as f64) / (samples as f64);
            points.push(DVec2::new(radius * angle.cos(), radius * angle.sin()));
        }
        Ok(Profile::from_points(points))
    }
}

/// Rectangular opening, axis-aligned and centered.
#[derive(Debug, Clone, Copy)]
pub struct RectangleSection {
    /// Outer extent along X
    pub width: f64,
    /// Outer extent along Y
    pub depth: f64,
}

impl SectionProfile for RectangleSection {
    /// The four corners are always emitted so the bounding box matches
    /// the nominal dimensions exactly; the remaining samples spread over
    /// the perimeter proportionally to edge length (largest-remainder
    /// apportionment, deterministic).
    fn emit(&self, samples: usize) -> Result<Profile, CoreError> {
        // Start point on the +X axis plus four corners
        if samples < 5 {
            return Err(CoreError::invalid_parameter(
                "fn",
                "rectangle sections need at least 5 samples",
            ));
        }

        let hw = self.width / 2.0;
        let hd = self.depth / 2.0;

        // CCW walk: right edge upward, top, left, bottom, right edge back
        let anchors = [
            DVec2::new(hw, 0.0),
            DVec2::new(hw, hd),
            DVec2::new(-hw, hd),
            DVec2::new(-hw, -hd),
            DVec2::new(hw, -hd),
        ];
        let lengths = [hd, self.width, self.depth, self.width, hd];
        let counts = apportion(samples - anchors.len(), &lengths);

        let mut points = Vec::with_capacity(samples);
        for i in 0..anchors.len() {
            let start = anchors[i];
            let end = anchors[(i + 1) % anchors.len()];
            points.push(start);
            for j in 0..counts[i] {
                let s = (j + 1) as f64 / (counts[i] + 1) as f64;
                points.push(start.lerp(end, s));
            }
        }
        Ok(Profile::from_points(points))
    }
}

/// Splits `extra` samples across segments proportionally to their length.
///
/// Largest-remainder apportionment; ties break toward the earlier
/// segment so the result is deterministic.
fn apportion(extra: usize, lengths: &[f64; 5]) -> [usize; 5] {
    let total: f64 = lengths.iter().sum();
    let mut counts = [0usize; 5];
    let mut fractions: Vec<(usize, f64)> = Vec::with_capacity(5);
    let mut assigned = 0;

    for (i, &len) in lengths.iter().enumerate() {
        let quota = extra as f64 * len / total;
        let base = quota.floor();
        counts[i] = base as usize;
        assigned += counts[i];
        fractions.push((i, quota - base));
    }

    let mut remaining = extra - assigned;
    fractions.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    for (i, _) in fractions {
        if remaining == 0 {
            break;
        }
        counts[i] += 1;
        remaining -= 1;
    }

    counts
}

/// One opening's shape, dimensions, and fit policy.
///
/// The factory face of section synthesis: resolves the fit mode into
/// concrete dimensions and dispatches to the matching generator.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    /// Shape tag
    pub shape: ShapeKind,
    /// Nominal outer width (diameter for circles)
    pub width: f64,
    /// Nominal outer depth (rectangles only)
    pub depth: f64,
    /// Fit policy applied to the nominal dimensions
    pub fit: FitMode,
    /// Which opening this spec describes, for error context
    end: &'static str,
}

impl SectionSpec {
    /// Spec for the bottom opening. Rectangular bottoms are square:
    /// the depth reuses `bottom_width`.
    pub fn bottom(params: &Params) -> Self {
        Self {
            shape: params.bottom_shape,
            width: params.bottom_width,
            depth: params.bottom_width,
            fit: params.bottom_fit,
            end: "bottom",
        }
    }

    /// Spec for the top opening.
    pub fn top(params: &Params) -> Self {
        Self {
            shape: params.top_shape,
            width: params.top_width,
            depth: params.top_depth,
            fit: params.top_fit,
            end: "top",
        }
    }

    /// Generates the profile polygon at the requested resolution.
    pub fn profile(&self, samples: usize) -> Result<Profile, CoreError> {
        let width = self.fitted(self.width);
        let depth = self.fitted(self.depth);
        if width <= 0.0 || depth <= 0.0 {
            return Err(CoreError::invalid_parameter(
                "fit",
                format!(
                    "{} fit clearance consumes the whole {}x{} opening",
                    self.end, self.width, self.depth
                ),
            ));
        }

        match self.shape {
            ShapeKind::Circle => CircleSection { diameter: width }.emit(samples),
            ShapeKind::Rectangle => RectangleSection { width, depth }.emit(samples),
        }
    }

    /// Applies the fit policy to one nominal dimension.
    ///
    /// `Standard` matches the nominal value exactly (the load-bearing
    /// contract); the mating modes move it by twice the configured
    /// clearance.
    fn fitted(&self, nominal: f64) -> f64 {
        match self.fit {
            FitMode::Standard => nominal,
            FitMode::Inside => nominal - 2.0 * FIT_CLEARANCE,
            FitMode::Outside => nominal + 2.0 * FIT_CLEARANCE,
        }
    }
}
