//! # Extension Appender
//!
//! Splices the straight prismatic extensions onto the lofted body. Each
//! extension duplicates the rim section and pushes it along the rim
//! frame's normal, so cross-section continuity at the splice is exact:
//! the extension ring and the rim ring are the same polygon.
//!
//! The bottom extension grows downward into negative z with the bottom
//! (untilted) frame; the top extension continues along the rotated top
//! frame. Zero-length extensions add nothing, leaving the lofted rim as
//! the outermost ring.

use glam::DVec3;

use crate::loft::{PlacedSection, SweptSections};
use crate::path::SegmentKind;

/// Appends the prismatic extension sections to the swept body.
///
/// # Arguments
///
/// * `swept` - The lofted sections, modified in place
/// * `bottom_len` - Length of the bottom extension (≥ 0)
/// * `top_len` - Length of the top extension (≥ 0)
pub fn append_extensions(swept: &mut SweptSections, bottom_len: f64, top_len: f64) {
    if bottom_len > 0.0 {
        let rim = &swept.sections[0];
        let section = PlacedSection {
            center: rim.center - rim.rotation * DVec3::Z * bottom_len,
            rotation: rim.rotation,
            kind: SegmentKind::BottomExtension,
            profile: rim.profile.clone(),
        };
        swept.sections.insert(0, section);
    }

    if top_len > 0.0 {
        let rim = &swept.sections[swept.sections.len() - 1];
        let section = PlacedSection {
            center: rim.center + rim.rotation * DVec3::Z * top_len,
            rotation: rim.rotation,
            kind: SegmentKind::TopExtension,
            profile: rim.profile.clone(),
        };
        swept.sections.push(section);
    }
}
