//! Dead zone and clamp ring for drag offsets

use bevy::prelude::{Reflect, Vec2};
use serde::{Deserialize, Serialize};

use crate::settings::VectorMode;

/// The ring between a dead radius and a clamp radius, in the same units as the drag offset.
///
/// Offsets shorter than the dead radius are excluded.
/// Beyond that, the output magnitude ramps linearly up to `1.0` at the clamp radius,
/// and stays there for longer offsets.
///
/// ```rust
/// use bevy::prelude::*;
/// use leafwing_virtual_joystick::prelude::*;
///
/// let live_zone = LiveZone::new(20.0, 100.0);
///
/// assert!(live_zone.excludes(10.0));
/// assert_eq!(live_zone.ramp(60.0), 0.5);
/// assert_eq!(live_zone.ramp(150.0), 1.0);
///
/// let offset = Vec2::new(60.0, 0.0);
/// assert_eq!(live_zone.output(offset, offset.length(), VectorMode::Real), Vec2::new(0.5, 0.0));
/// assert_eq!(live_zone.output(offset, offset.length(), VectorMode::Normalized), Vec2::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[must_use]
pub struct LiveZone {
    /// Offsets shorter than this produce no output.
    pub(crate) dead_radius: f32,

    /// Offsets at least this long produce a saturated output.
    pub(crate) clamp_radius: f32,

    /// Pre-calculated reciprocal of the live zone width, preventing division while dragging.
    pub(crate) livezone_recip: f32,
}

impl LiveZone {
    /// Creates a [`LiveZone`] from its inner and outer radii.
    ///
    /// # Requirements
    ///
    /// - `0.0 <= dead_radius < clamp_radius`.
    ///
    /// # Panics
    ///
    /// Panics if the requirements aren't met.
    #[inline]
    pub fn new(dead_radius: f32, clamp_radius: f32) -> Self {
        assert!(0.0 <= dead_radius && dead_radius < clamp_radius);
        Self {
            dead_radius,
            clamp_radius,
            livezone_recip: (clamp_radius - dead_radius).recip(),
        }
    }

    /// Returns the radius of the dead zone.
    #[must_use]
    #[inline]
    pub fn dead_radius(&self) -> f32 {
        self.dead_radius
    }

    /// Returns the radius at which the output saturates.
    #[must_use]
    #[inline]
    pub fn clamp_radius(&self) -> f32 {
        self.clamp_radius
    }

    /// Is an offset of this `magnitude` inside the dead zone?
    #[must_use]
    #[inline]
    pub fn excludes(&self, magnitude: f32) -> bool {
        magnitude < self.dead_radius
    }

    /// Maps a `magnitude` outside the dead zone onto `[0.0, 1.0]`.
    ///
    /// Magnitudes inside the dead zone must be filtered with [`LiveZone::excludes`] first.
    #[must_use]
    #[inline]
    pub fn ramp(&self, magnitude: f32) -> f32 {
        debug_assert!(magnitude >= self.dead_radius);
        if magnitude < self.clamp_radius {
            (magnitude - self.dead_radius) * self.livezone_recip
        } else {
            1.0
        }
    }

    /// Computes the output for a `direction` whose drag offset was `magnitude` long.
    ///
    /// The `direction` may differ from the raw offset, e.g. after directional snapping,
    /// so the magnitude is passed separately.
    #[must_use]
    #[inline]
    pub fn output(&self, direction: Vec2, magnitude: f32, vector_mode: VectorMode) -> Vec2 {
        let unit = direction.normalize_or_zero();
        match vector_mode {
            VectorMode::Real => unit * self.ramp(magnitude),
            VectorMode::Normalized => unit,
        }
    }
}
