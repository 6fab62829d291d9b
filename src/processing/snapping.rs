//! Snapping drag offsets to a fixed set of directions

use bevy::prelude::{Reflect, Vec2};
use serde::{Deserialize, Serialize};

/// Restricts offsets to `directions` directions, symmetric around `symmetry_angle`.
///
/// The half-turn on each side of the symmetry axis is divided into sectors of `180° / directions`.
/// An offset's sector index is truncated toward zero, and odd indices are pushed one step further out,
/// so every snapped direction is an even multiple of the sector width away from the symmetry axis.
/// This centers a direction on the symmetry axis itself.
///
/// The magnitude of the offset is preserved.
///
/// ```rust
/// use bevy::prelude::*;
/// use leafwing_virtual_joystick::prelude::*;
///
/// // Four directions, centered on "up"
/// let snap = DirectionalSnap::new(4, 90.0);
///
/// let snapped = snap.snap(Vec2::new(20.0, 50.0));
/// let expected = Vec2::new(0.0, Vec2::new(20.0, 50.0).length());
/// assert!((snapped - expected).length() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[must_use]
pub struct DirectionalSnap {
    /// The number of directions, never zero.
    pub(crate) directions: u8,

    /// The symmetry axis, in degrees.
    pub(crate) symmetry_angle: f32,
}

impl DirectionalSnap {
    /// Creates a [`DirectionalSnap`] with `directions` directions around `symmetry_angle` degrees.
    ///
    /// # Requirements
    ///
    /// - `directions` > `0`.
    ///
    /// # Panics
    ///
    /// Panics if the requirements aren't met.
    #[inline]
    pub fn new(directions: u8, symmetry_angle: f32) -> Self {
        assert!(directions > 0);
        Self {
            directions,
            symmetry_angle,
        }
    }

    /// Returns the number of directions.
    #[must_use]
    #[inline]
    pub fn directions(&self) -> u8 {
        self.directions
    }

    /// Returns the symmetry axis, in degrees.
    #[must_use]
    #[inline]
    pub fn symmetry_angle(&self) -> f32 {
        self.symmetry_angle
    }

    /// Returns the width of a single sector, in degrees.
    #[must_use]
    #[inline]
    pub fn sector_width(&self) -> f32 {
        180.0 / self.directions as f32
    }

    /// Rotates `offset` onto the closest allowed direction, keeping its length.
    #[must_use]
    pub fn snap(&self, offset: Vec2) -> Vec2 {
        let symmetry = self.symmetry_angle.to_radians();
        let axis = Vec2::from_angle(symmetry);
        let sector_width = self.sector_width();

        let mut sector = (signed_angle_degrees(axis, offset) / sector_width).trunc();
        if sector.abs() as u32 % 2 == 1 {
            sector += sector.signum();
        }

        let snapped = (sector * sector_width).to_radians();
        Vec2::from_angle(snapped + symmetry) * offset.length()
    }
}

/// The signed angle from `from` to `to`, in degrees, within `[-180, 180]`.
///
/// Counterclockwise is positive.
#[must_use]
#[inline]
pub(crate) fn signed_angle_degrees(from: Vec2, to: Vec2) -> f32 {
    from.perp_dot(to).atan2(from.dot(to)).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx_eq(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 0.001,
            "{actual} was not close to {expected}"
        );
    }

    fn at_degrees(degrees: f32, length: f32) -> Vec2 {
        Vec2::from_angle(degrees.to_radians()) * length
    }

    #[test]
    fn test_signed_angle() {
        assert!((signed_angle_degrees(Vec2::X, Vec2::Y) - 90.0).abs() < 0.001);
        assert!((signed_angle_degrees(Vec2::X, Vec2::NEG_Y) + 90.0).abs() < 0.001);
        assert!((signed_angle_degrees(Vec2::Y, Vec2::new(1.0, 1.0)) + 45.0).abs() < 0.001);
    }

    #[test]
    fn test_four_directions_around_up() {
        let snap = DirectionalSnap::new(4, 90.0);

        // Anything within 45° of "up" snaps to "up"
        for degrees in -44..=44 {
            let offset = at_degrees(90.0 + degrees as f32, 30.0);
            assert_approx_eq(snap.snap(offset), Vec2::new(0.0, 30.0));
        }

        assert_approx_eq(snap.snap(at_degrees(140.0, 10.0)), Vec2::new(-10.0, 0.0));
        assert_approx_eq(snap.snap(at_degrees(40.0, 10.0)), Vec2::new(10.0, 0.0));
        assert_approx_eq(snap.snap(at_degrees(-80.0, 10.0)), Vec2::new(0.0, -10.0));
    }

    #[test]
    fn test_odd_sectors_are_pushed_outward() {
        let snap = DirectionalSnap::new(4, 90.0);

        // 50° from the axis is sector 1, which is pushed out to sector 2 (90°)
        assert_approx_eq(snap.snap(at_degrees(140.0, 1.0)), Vec2::NEG_X);
        // 100° from the axis is sector 2, which stays put
        assert_approx_eq(snap.snap(at_degrees(190.0, 1.0)), Vec2::NEG_X);
        // 140° from the axis is sector 3, which is pushed out to sector 4 (180°)
        assert_approx_eq(snap.snap(at_degrees(230.0, 1.0)), Vec2::NEG_Y);
    }

    #[test]
    fn test_two_directions_around_right() {
        let snap = DirectionalSnap::new(2, 0.0);

        for (offset, expected) in [
            (Vec2::new(3.0, 2.0), Vec2::X),
            (Vec2::new(0.5, -4.0), Vec2::X),
            (Vec2::new(-1.0, 0.2), Vec2::NEG_X),
        ] {
            assert_approx_eq(snap.snap(offset), expected * offset.length());
        }
    }

    #[test]
    fn test_snap_preserves_length() {
        let snap = DirectionalSnap::new(7, -30.0);

        for x in -20..20 {
            for y in -20..20 {
                let offset = Vec2::new(x as f32, y as f32);
                let snapped = snap.snap(offset);
                assert!((snapped.length() - offset.length()).abs() < 0.001);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_zero_directions_panics() {
        let _ = DirectionalSnap::new(0, 90.0);
    }
}
