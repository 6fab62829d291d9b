//! Configuration of a virtual joystick

use bevy::color::Color;
use bevy::prelude::Reflect;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::errors::JoystickSettingsError;
use crate::processing::{DirectionalSnap, LiveZone};

/// How the joystick background reacts to the pointer.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, Reflect, Serialize, Deserialize,
)]
pub enum JoystickMode {
    /// The background never moves.
    #[default]
    Fixed,

    /// Every press moves the background under the pointer,
    /// where it stays until released.
    Dynamic,

    /// Like [`JoystickMode::Dynamic`], but if the pointer is dragged past the clamp ring,
    /// the background chases it, staying within the container.
    Following,
}

/// The shape of the output vector.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, Reflect, Serialize, Deserialize,
)]
pub enum VectorMode {
    /// The output magnitude ramps linearly from `0.0` at the dead zone edge
    /// to `1.0` at the clamp ring.
    #[default]
    Real,

    /// The output is always a unit vector once outside the dead zone.
    Normalized,
}

/// Settings for a [`JoystickEngine`](crate::engine::JoystickEngine).
///
/// Zones are expressed as fractions of the background radius.
/// Missing fields take their [`Default`] value when deserializing.
///
/// ```rust
/// use leafwing_virtual_joystick::prelude::*;
///
/// let settings = JoystickSettings::default()
///     .with_mode(JoystickMode::Following)
///     .with_dead_zone(0.1)
///     .with_directions(8);
///
/// assert!(settings.validate().is_ok());
/// assert!(settings.with_clamp_zone(5.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
#[must_use]
pub struct JoystickSettings {
    /// How the background follows the pointer.
    pub mode: JoystickMode,

    /// Whether the output ramps up or is always normalized.
    pub vector_mode: VectorMode,

    /// Inside this fraction of the background radius, the output is zero.
    pub dead_zone: f32,

    /// The fraction of the background radius at which the output saturates.
    pub clamp_zone: f32,

    /// Number of directions the output snaps to, or `0` for a free joystick.
    pub directions: u8,

    /// The angle, in degrees, that the snapping directions are symmetric around.
    pub symmetry_angle: f32,

    /// Tint of the handle while the joystick is pressed.
    pub pressed_color: Color,
}

impl JoystickSettings {
    /// The largest supported number of snapping directions.
    pub const MAX_DIRECTIONS: u8 = 12;

    /// Sets the [`JoystickMode`].
    #[inline]
    pub fn with_mode(mut self, mode: JoystickMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the [`VectorMode`].
    #[inline]
    pub fn with_vector_mode(mut self, vector_mode: VectorMode) -> Self {
        self.vector_mode = vector_mode;
        self
    }

    /// Sets the dead zone, as a fraction of the background radius.
    #[inline]
    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    /// Sets the clamp zone, as a fraction of the background radius.
    #[inline]
    pub fn with_clamp_zone(mut self, clamp_zone: f32) -> Self {
        self.clamp_zone = clamp_zone;
        self
    }

    /// Sets the number of snapping directions. `0` disables snapping.
    #[inline]
    pub fn with_directions(mut self, directions: u8) -> Self {
        self.directions = directions;
        self
    }

    /// Sets the symmetry angle of the snapping directions, in degrees.
    #[inline]
    pub fn with_symmetry_angle(mut self, degrees: f32) -> Self {
        self.symmetry_angle = degrees;
        self
    }

    /// Sets the tint of the handle while pressed.
    #[inline]
    pub fn with_pressed_color(mut self, color: Color) -> Self {
        self.pressed_color = color;
        self
    }

    /// Checks that these settings describe a joystick with a well-defined output.
    ///
    /// The first violated constraint is reported.
    pub fn validate(&self) -> Result<(), JoystickSettingsError> {
        if !(0.0..=0.5).contains(&self.dead_zone) {
            return Err(JoystickSettingsError::DeadZoneOutOfRange {
                dead_zone: self.dead_zone,
            });
        }

        if !(0.5..=2.0).contains(&self.clamp_zone) {
            return Err(JoystickSettingsError::ClampZoneOutOfRange {
                clamp_zone: self.clamp_zone,
            });
        }

        if self.directions > Self::MAX_DIRECTIONS {
            return Err(JoystickSettingsError::TooManyDirections {
                directions: self.directions,
            });
        }

        if !(-180.0..=180.0).contains(&self.symmetry_angle) {
            return Err(JoystickSettingsError::SymmetryAngleOutOfRange {
                degrees: self.symmetry_angle,
            });
        }

        if self.clamp_zone <= self.dead_zone {
            return Err(JoystickSettingsError::EmptyLiveZone {
                dead_zone: self.dead_zone,
                clamp_zone: self.clamp_zone,
            });
        }

        Ok(())
    }

    /// Scales the zones by the given background radius.
    ///
    /// # Errors
    ///
    /// Returns [`JoystickSettingsError::InvalidBackgroundRadius`] if the scaled radii overflow,
    /// and [`JoystickSettingsError::EmptyLiveZone`] if they collapse onto each other.
    pub fn live_zone(&self, background_radius: f32) -> Result<LiveZone, JoystickSettingsError> {
        let dead_radius = self.dead_zone * background_radius;
        let clamp_radius = self.clamp_zone * background_radius;

        if !dead_radius.is_finite() || !clamp_radius.is_finite() {
            return Err(JoystickSettingsError::InvalidBackgroundRadius {
                radius: background_radius,
            });
        }

        if !(0.0 <= dead_radius && dead_radius < clamp_radius)
            || !(clamp_radius - dead_radius).recip().is_finite()
        {
            return Err(JoystickSettingsError::EmptyLiveZone {
                dead_zone: self.dead_zone,
                clamp_zone: self.clamp_zone,
            });
        }

        Ok(LiveZone::new(dead_radius, clamp_radius))
    }

    /// Returns the directional snapping, if enabled.
    #[must_use]
    #[inline]
    pub fn directional_snap(&self) -> Option<DirectionalSnap> {
        (self.directions > 0).then(|| DirectionalSnap::new(self.directions, self.symmetry_angle))
    }
}

impl Default for JoystickSettings {
    /// A fixed, free joystick with a 20% dead zone that saturates at the background edge.
    fn default() -> Self {
        Self {
            mode: JoystickMode::Fixed,
            vector_mode: VectorMode::Real,
            dead_zone: 0.2,
            clamp_zone: 1.0,
            directions: 0,
            symmetry_angle: 90.0,
            pressed_color: Color::srgba(0.5, 0.5, 0.5, 0.7),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens, Token};

    #[test]
    fn test_default_settings_are_valid() {
        assert_eq!(JoystickSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_zone_ranges_are_inclusive() {
        let settings = JoystickSettings::default()
            .with_dead_zone(0.0)
            .with_clamp_zone(2.0);
        assert!(settings.validate().is_ok());

        let settings = JoystickSettings::default()
            .with_dead_zone(0.4)
            .with_clamp_zone(0.5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let base = JoystickSettings::default();

        assert_eq!(
            base.with_dead_zone(0.6).validate(),
            Err(JoystickSettingsError::DeadZoneOutOfRange { dead_zone: 0.6 })
        );
        assert_eq!(
            base.with_dead_zone(-0.1).validate(),
            Err(JoystickSettingsError::DeadZoneOutOfRange { dead_zone: -0.1 })
        );
        assert_eq!(
            base.with_clamp_zone(0.4).validate(),
            Err(JoystickSettingsError::ClampZoneOutOfRange { clamp_zone: 0.4 })
        );
        assert_eq!(
            base.with_directions(13).validate(),
            Err(JoystickSettingsError::TooManyDirections { directions: 13 })
        );
        assert_eq!(
            base.with_symmetry_angle(181.0).validate(),
            Err(JoystickSettingsError::SymmetryAngleOutOfRange { degrees: 181.0 })
        );
        assert_eq!(
            base.with_dead_zone(0.5).with_clamp_zone(0.5).validate(),
            Err(JoystickSettingsError::EmptyLiveZone {
                dead_zone: 0.5,
                clamp_zone: 0.5
            })
        );
    }

    #[test]
    fn test_nan_settings_are_rejected() {
        let base = JoystickSettings::default();
        assert!(base.with_dead_zone(f32::NAN).validate().is_err());
        assert!(base.with_clamp_zone(f32::NAN).validate().is_err());
        assert!(base.with_symmetry_angle(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_directional_snap_is_disabled_at_zero() {
        assert!(JoystickSettings::default().directional_snap().is_none());
        assert_eq!(
            JoystickSettings::default()
                .with_directions(4)
                .directional_snap(),
            Some(DirectionalSnap::new(4, 90.0))
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let expected = JoystickSettings::default()
            .with_mode(JoystickMode::Dynamic)
            .with_directions(4);

        assert_de_tokens(
            &expected,
            &[
                Token::Struct {
                    name: "JoystickSettings",
                    len: 2,
                },
                Token::Str("mode"),
                Token::UnitVariant {
                    name: "JoystickMode",
                    variant: "Dynamic",
                },
                Token::Str("directions"),
                Token::U8(4),
                Token::StructEnd,
            ],
        );
    }
}
