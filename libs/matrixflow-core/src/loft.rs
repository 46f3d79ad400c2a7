//! # Loft Engine
//!
//! Interpolates the bottom and top cross-sections along the path,
//! producing the ordered family of placed sections that the shell stage
//! triangulates. Vertex correspondence is strictly positional: index `i`
//! of every ring blends index `i` of both profiles, which is why the
//! section generators share one canonical ordering contract.
//!
//! The per-station blend is embarrassingly parallel; rayon splits it by
//! station and the collect preserves index order, so the output is
//! deterministic.

use glam::{DQuat, DVec2, DVec3};
use rayon::prelude::*;

use crate::error::CoreError;
use crate::path::{ease, Path, SegmentKind, Station};
use crate::section::Profile;

/// A cross-section placed on the path: 2D profile plus local frame.
#[derive(Debug, Clone)]
pub struct PlacedSection {
    /// Centerline position of the section plane
    pub center: DVec3,
    /// Orientation of the section plane
    pub rotation: DQuat,
    /// Segment the source station belongs to
    pub kind: SegmentKind,
    /// The interpolated 2D polygon
    pub profile: Profile,
}

impl PlacedSection {
    /// Lifts the 2D profile into world space.
    pub fn ring(&self) -> Vec<DVec3> {
        self.profile
            .points()
            .iter()
            .map(|p| self.center + self.rotation * DVec3::new(p.x, p.y, 0.0))
            .collect()
    }
}

/// The lofted outer boundary: one placed section per station.
///
/// The lateral surface between consecutive sections is implied; end
/// rings stay open until the shell stage seals them.
#[derive(Debug, Clone)]
pub struct SweptSections {
    /// Sections in path order (strictly increasing centerline z)
    pub sections: Vec<PlacedSection>,
}

impl SweptSections {
    /// Vertex count shared by every section ring.
    pub fn ring_size(&self) -> usize {
        self.sections[0].profile.vertex_count()
    }
}

/// Lofts the two profiles along the path.
///
/// # Arguments
///
/// * `path` - Stations of the pure transition
/// * `bottom` - Profile at t = 0
/// * `top` - Profile at t = 1
/// * `tension` - Blend sharpness for the shape morph
///
/// # Errors
///
/// Mismatched profile vertex counts are fatal; the loft never truncates
/// one profile to fit the other.
pub fn loft(
    path: &Path,
    bottom: &Profile,
    top: &Profile,
    tension: f64,
) -> Result<SweptSections, CoreError> {
    if bottom.vertex_count() != top.vertex_count() {
        return Err(CoreError::SectionMismatch {
            bottom: bottom.vertex_count(),
            top: top.vertex_count(),
        });
    }

    let sections: Vec<PlacedSection> = path
        .stations
        .par_iter()
        .map(|station| place_station(station, bottom, top, tension))
        .collect();

    Ok(SweptSections { sections })
}

fn place_station(
    station: &Station,
    bottom: &Profile,
    top: &Profile,
    tension: f64,
) -> PlacedSection {
    let s = ease(station.t, tension);
    let points: Vec<DVec2> = bottom
        .points()
        .iter()
        .zip(top.points())
        .map(|(b, t)| b.lerp(*t, s))
        .collect();

    PlacedSection {
        center: station.center,
        rotation: station.rotation,
        kind: station.kind,
        profile: Profile::from_points(points),
    }
}
