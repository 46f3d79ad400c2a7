//! # Path Construction
//!
//! Computes the 3D centerline and local orientation frames of the
//! transition sweep. Stations run from the bottom opening at the origin
//! to the top opening at `(offset_x, offset_y, transition_height)`, with
//! the terminal frame tilted by the exit angles.
//!
//! The lateral ramp and the angle ramp both follow the tension blend:
//! tension 0 gives a straight linear sweep, tension 1 a fully eased cubic
//! that departs and arrives vertically. `straighten_path` forces the
//! lateral ramp to linear while leaving the angle ramp eased.

use glam::{DQuat, DVec3};

use crate::error::CoreError;
use crate::params::Params;

/// Which segment of the sweep a station belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Straight prismatic run below z = 0
    BottomExtension,
    /// The lofted transition between the two openings
    Transition,
    /// Straight prismatic run beyond the (possibly tilted) top rim
    TopExtension,
}

/// One sample point of the sweep path.
#[derive(Debug, Clone, Copy)]
pub struct Station {
    /// Centerline position
    pub center: DVec3,
    /// Local frame: rotates the section plane out of XY
    pub rotation: DQuat,
    /// Arc-length coordinate over the pure transition, in [0, 1].
    /// Extension stations are pinned to 0 or 1.
    pub t: f64,
    /// Segment this station belongs to
    pub kind: SegmentKind,
}

impl Station {
    /// Direction the section plane faces (the local +Z axis).
    pub fn normal(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }
}

/// Ordered station sequence from bottom to top.
#[derive(Debug, Clone)]
pub struct Path {
    /// Stations in order of strictly increasing centerline z
    pub stations: Vec<Station>,
}

impl Path {
    /// First (lowest) station.
    pub fn bottom(&self) -> &Station {
        &self.stations[0]
    }

    /// Last (highest) station.
    pub fn top(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }
}

/// Tension-weighted blend between a linear ramp and a cubic ease.
///
/// At `tension = 0` this is the identity; at `tension = 1` it is the
/// smoothstep cubic `t²(3 − 2t)` with horizontal tangents at both ends.
pub(crate) fn ease(t: f64, tension: f64) -> f64 {
    let smooth = t * t * (3.0 - 2.0 * t);
    (1.0 - tension) * t + tension * smooth
}

/// Builds the pure-transition centerline.
///
/// # Arguments
///
/// * `params` - The validated parameter set
/// * `station_count` - Number of transition intervals (≥ 2)
///
/// # Returns
///
/// A path of `station_count + 1` stations spanning z = 0 to
/// z = `transition_height`. Extensions are appended later by the
/// extension stage.
///
/// # Errors
///
/// Rejects `station_count < 2` and non-positive heights.
pub fn build_path(params: &Params, station_count: u32) -> Result<Path, CoreError> {
    if station_count < 2 {
        return Err(CoreError::invalid_parameter(
            "fn",
            "path needs at least 2 stations",
        ));
    }
    if params.transition_height <= 0.0 {
        return Err(CoreError::invalid_parameter(
            "transition_height",
            "must be strictly positive",
        ));
    }

    let angle_x = params.angle_x.to_radians();
    let angle_y = params.angle_y.to_radians();

    let mut stations = Vec::with_capacity(station_count as usize + 1);
    for i in 0..=station_count {
        let t = f64::from(i) / f64::from(station_count);
        let eased = ease(t, params.curve_tension);

        // Lateral ramp: linear when straightened, eased otherwise
        let lateral = if params.straighten_path { t } else { eased };

        // The frame rotation chains toward the terminal tilt along the
        // same blend, so intermediate sections bank smoothly into the
        // exit angle.
        let rotation = DQuat::from_rotation_x(angle_x * eased)
            * DQuat::from_rotation_y(angle_y * eased);

        stations.push(Station {
            center: DVec3::new(
                params.offset_x * lateral,
                params.offset_y * lateral,
                params.transition_height * t,
            ),
            rotation,
            t,
            kind: SegmentKind::Transition,
        });
    }

    Ok(Path { stations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_ease_endpoints_fixed() {
        for tension in [0.0, 0.25, 0.5, 1.0] {
            assert_abs_diff_eq!(ease(0.0, tension), 0.0);
            assert_abs_diff_eq!(ease(1.0, tension), 1.0);
        }
    }

    #[test]
    fn test_ease_zero_tension_is_linear() {
        assert_abs_diff_eq!(ease(0.3, 0.0), 0.3);
        assert_abs_diff_eq!(ease(0.7, 0.0), 0.7);
    }

    #[test]
    fn test_path_endpoints() {
        let params = Params {
            transition_height: 100.0,
            offset_x: 60.0,
            offset_y: -30.0,
            ..Params::default()
        };
        let path = build_path(&params, 16).unwrap();

        let bottom = path.bottom();
        assert_abs_diff_eq!(bottom.center.x, 0.0);
        assert_abs_diff_eq!(bottom.center.y, 0.0);
        assert_abs_diff_eq!(bottom.center.z, 0.0);

        let top = path.top();
        assert_abs_diff_eq!(top.center.x, 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(top.center.y, -30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(top.center.z, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_path_z_monotonic() {
        let params = Params {
            offset_x: 75.0,
            curve_tension: 1.0,
            ..Params::default()
        };
        let path = build_path(&params, 32).unwrap();
        for pair in path.stations.windows(2) {
            assert!(pair[1].center.z > pair[0].center.z);
        }
    }

    #[test]
    fn test_terminal_normal_matches_y_tilt() {
        let params = Params {
            angle_y: 45.0,
            ..Params::default()
        };
        let path = build_path(&params, 8).unwrap();
        let normal = path.top().normal();
        let expected = 45.0f64.to_radians();
        assert_abs_diff_eq!(normal.x, expected.sin(), epsilon = 1e-9);
        assert_abs_diff_eq!(normal.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(normal.z, expected.cos(), epsilon = 1e-9);
    }

    #[test]
    fn test_bottom_frame_untilted() {
        let params = Params {
            angle_x: 30.0,
            angle_y: 20.0,
            ..Params::default()
        };
        let path = build_path(&params, 8).unwrap();
        let normal = path.bottom().normal();
        assert_abs_diff_eq!(normal.z, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_straighten_path_forces_linear_ramp() {
        let params = Params {
            offset_x: 80.0,
            curve_tension: 1.0,
            straighten_path: true,
            ..Params::default()
        };
        let path = build_path(&params, 4).unwrap();
        // Midway station sits at exactly half the offset
        let mid = &path.stations[2];
        assert_abs_diff_eq!(mid.center.x, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_too_few_stations_rejected() {
        let params = Params::default();
        assert!(build_path(&params, 1).is_err());
    }
}
