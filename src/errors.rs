//! Errors that may occur when configuring a virtual joystick

use derive_more::{Display, Error};

/// A [`JoystickSettings`](crate::settings::JoystickSettings) or
/// [`JoystickGeometry`](crate::geometry::JoystickGeometry) that cannot produce a well-defined output.
///
/// These are rejected when a [`JoystickEngine`](crate::engine::JoystickEngine) is created,
/// so that every later pointer event is guaranteed to produce a finite output.
#[derive(Debug, Clone, Copy, Error, Display, PartialEq)]
pub enum JoystickSettingsError {
    /// The dead zone must lie within `[0.0, 0.5]` of the background radius.
    #[display(fmt = "dead zone {} is outside of [0, 0.5]", dead_zone)]
    DeadZoneOutOfRange {
        /// The rejected value.
        dead_zone: f32,
    },

    /// The clamp zone must lie within `[0.5, 2.0]` of the background radius.
    #[display(fmt = "clamp zone {} is outside of [0.5, 2]", clamp_zone)]
    ClampZoneOutOfRange {
        /// The rejected value.
        clamp_zone: f32,
    },

    /// At most 12 snapping directions are supported.
    #[display(fmt = "{} directions requested, but at most 12 are supported", directions)]
    TooManyDirections {
        /// The rejected value.
        directions: u8,
    },

    /// The symmetry angle must lie within `[-180, 180]` degrees.
    #[display(fmt = "symmetry angle {}° is outside of [-180°, 180°]", degrees)]
    SymmetryAngleOutOfRange {
        /// The rejected value, in degrees.
        degrees: f32,
    },

    /// The clamp zone must be strictly larger than the dead zone,
    /// otherwise there is no room left to ramp the output up.
    #[display(fmt = "clamp zone {} does not exceed dead zone {}", clamp_zone, dead_zone)]
    EmptyLiveZone {
        /// The configured dead zone.
        dead_zone: f32,
        /// The configured clamp zone.
        clamp_zone: f32,
    },

    /// The background radius must be finite and positive.
    #[display(fmt = "background radius {} must be finite and positive", radius)]
    InvalidBackgroundRadius {
        /// The rejected value.
        radius: f32,
    },

    /// The background half extents must be finite and non-negative on both axes.
    #[display(fmt = "background half extents ({}, {}) must be finite and non-negative", x, y)]
    InvalidBackgroundExtents {
        /// The rejected horizontal half extent.
        x: f32,
        /// The rejected vertical half extent.
        y: f32,
    },

    /// The container half extents must be finite and non-negative on both axes.
    #[display(fmt = "container half extents ({}, {}) must be finite and non-negative", x, y)]
    InvalidContainerExtents {
        /// The rejected horizontal half extent.
        x: f32,
        /// The rejected vertical half extent.
        y: f32,
    },
}
