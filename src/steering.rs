//! Moving and turning entities with a joystick

use bevy::prelude::{Component, Entity, Quat, Reflect, Transform, Vec2, Vec3};

/// Drives the [`Transform`] of this entity from the joystick on another entity.
///
/// Nothing happens while the joystick is not working.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct JoystickSteering {
    /// The entity holding the [`JoystickEngine`](crate::engine::JoystickEngine).
    pub joystick: Entity,

    /// How the output is applied.
    pub behavior: SteeringBehavior,
}

/// How a [`JoystickSteering`] applies the joystick output to a [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum SteeringBehavior {
    /// Moves along the XY plane by `output * speed` units per second.
    Translate {
        /// Units per second at full deflection.
        speed: f32,
    },

    /// Turns so that the local +Y axis points along the output.
    Look,
}

impl SteeringBehavior {
    /// Applies a working joystick's `output` to `transform` over `delta_seconds`.
    ///
    /// ```rust
    /// use bevy::prelude::*;
    /// use leafwing_virtual_joystick::prelude::*;
    ///
    /// let mut transform = Transform::default();
    /// SteeringBehavior::Translate { speed: 10.0 }.apply(Vec2::new(0.5, 0.0), 2.0, &mut transform);
    /// assert_eq!(transform.translation, Vec3::new(10.0, 0.0, 0.0));
    /// ```
    pub fn apply(&self, output: Vec2, delta_seconds: f32, transform: &mut Transform) {
        match *self {
            Self::Translate { speed } => {
                transform.translation += output.extend(0.0) * speed * delta_seconds;
            }
            Self::Look => {
                // A working Real joystick may still sit exactly on the dead zone edge
                if let Some(direction) = output.try_normalize() {
                    transform.rotation = Quat::from_rotation_arc(Vec3::Y, direction.extend(0.0));
                }
            }
        }
    }
}
