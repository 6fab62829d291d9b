//! Where the joystick background sits, and how large it is

use bevy::prelude::{Reflect, Vec2};
use serde::{Deserialize, Serialize};

use crate::errors::JoystickSettingsError;

/// The positional state of a joystick.
///
/// All positions share one coordinate space: the local space of the container
/// that holds the joystick, with its origin at the container's center.
/// Pointer positions passed to the [`JoystickEngine`](crate::engine::JoystickEngine)
/// must be expressed in this same space.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct JoystickGeometry {
    /// The home position of the background, captured when the joystick is initialized.
    pub(crate) background_origin: Vec2,

    /// The current center of the background.
    pub(crate) background_position: Vec2,

    /// Half the width of the background.
    pub(crate) background_radius: f32,

    /// Half the size of the background rectangle, used to tell whether a pointer is on it.
    pub(crate) background_half_extents: Vec2,

    /// The background center is kept within `[-container_half_extents, container_half_extents]`
    /// while following the pointer.
    pub(crate) container_half_extents: Vec2,
}

impl JoystickGeometry {
    /// Creates a [`JoystickGeometry`] with a square background resting at `background_position`.
    pub fn new(background_position: Vec2, background_radius: f32, container_half_extents: Vec2) -> Self {
        Self {
            background_origin: background_position,
            background_position,
            background_radius,
            background_half_extents: Vec2::splat(background_radius),
            container_half_extents,
        }
    }

    /// Creates a [`JoystickGeometry`] from the on-screen sizes of the background and its container.
    ///
    /// The background radius is taken from its width,
    /// while pointer hits are tested against the full background rectangle.
    pub fn from_sizes(background_position: Vec2, background_size: Vec2, container_size: Vec2) -> Self {
        Self {
            background_half_extents: background_size * 0.5,
            ..Self::new(
                background_position,
                background_size.x * 0.5,
                container_size * 0.5,
            )
        }
    }

    /// Checks that the background has a usable size and the container bounds are well-formed.
    pub fn validate(&self) -> Result<(), JoystickSettingsError> {
        let radius = self.background_radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(JoystickSettingsError::InvalidBackgroundRadius { radius });
        }

        let Vec2 { x, y } = self.background_half_extents;
        if !self.background_half_extents.is_finite() || x < 0.0 || y < 0.0 {
            return Err(JoystickSettingsError::InvalidBackgroundExtents { x, y });
        }

        let Vec2 { x, y } = self.container_half_extents;
        if !self.container_half_extents.is_finite() || x < 0.0 || y < 0.0 {
            return Err(JoystickSettingsError::InvalidContainerExtents { x, y });
        }

        Ok(())
    }

    /// Returns the home position of the background.
    #[must_use]
    #[inline]
    pub fn background_origin(&self) -> Vec2 {
        self.background_origin
    }

    /// Returns the current center of the background.
    #[must_use]
    #[inline]
    pub fn background_position(&self) -> Vec2 {
        self.background_position
    }

    /// Returns half the width of the background.
    #[must_use]
    #[inline]
    pub fn background_radius(&self) -> f32 {
        self.background_radius
    }

    /// Returns the half extents of the background rectangle.
    #[must_use]
    #[inline]
    pub fn background_half_extents(&self) -> Vec2 {
        self.background_half_extents
    }

    /// Returns the half extents of the container.
    #[must_use]
    #[inline]
    pub fn container_half_extents(&self) -> Vec2 {
        self.container_half_extents
    }

    /// Is `point` within the rectangle covered by the background?
    #[must_use]
    #[inline]
    pub fn background_contains(&self, point: Vec2) -> bool {
        (point - self.background_position)
            .abs()
            .cmple(self.background_half_extents)
            .all()
    }

    /// Makes the current background position the new home position.
    #[inline]
    pub(crate) fn capture_origin(&mut self) {
        self.background_origin = self.background_position;
    }

    /// Moves the background back to its home position.
    #[inline]
    pub(crate) fn reset_to_origin(&mut self) {
        self.background_position = self.background_origin;
    }
}
