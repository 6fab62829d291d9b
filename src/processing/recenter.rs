//! Background placement for each joystick mode

use bevy::prelude::Vec2;

use crate::geometry::JoystickGeometry;
use crate::settings::JoystickMode;

impl JoystickMode {
    /// Where the background should sit after a drag `offset` from its current center.
    ///
    /// Only [`JoystickMode::Following`] moves during a drag:
    /// once the offset leaves the clamp ring, the background is pulled along by the excess,
    /// with each axis kept within the container half extents.
    ///
    /// ```rust
    /// use bevy::prelude::*;
    /// use leafwing_virtual_joystick::prelude::*;
    ///
    /// let geometry = JoystickGeometry::new(Vec2::ZERO, 100.0, Vec2::new(300.0, 200.0));
    /// let offset = Vec2::new(250.0, 0.0);
    ///
    /// assert_eq!(JoystickMode::Fixed.recenter(&geometry, offset, 100.0), Vec2::ZERO);
    /// assert_eq!(JoystickMode::Dynamic.recenter(&geometry, offset, 100.0), Vec2::ZERO);
    /// assert_eq!(JoystickMode::Following.recenter(&geometry, offset, 100.0), Vec2::new(150.0, 0.0));
    /// ```
    #[must_use]
    pub fn recenter(self, geometry: &JoystickGeometry, offset: Vec2, clamp_radius: f32) -> Vec2 {
        let position = geometry.background_position;
        match self {
            Self::Fixed | Self::Dynamic => position,
            Self::Following => {
                let magnitude = offset.length();
                if magnitude <= clamp_radius {
                    return position;
                }

                let excess = offset - offset / magnitude * clamp_radius;
                let bounds = geometry.container_half_extents;
                (position + excess).clamp(-bounds, bounds)
            }
        }
    }
}
