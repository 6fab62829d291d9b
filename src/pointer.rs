//! Pointer events that drive joysticks

use bevy::prelude::{Entity, Event, Reflect, Vec2};

use crate::engine::JoystickEngine;

/// The stage of a pointer gesture on a joystick.
///
/// Positions are in the local space of the joystick's container,
/// as described by [`JoystickGeometry`](crate::geometry::JoystickGeometry).
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum PointerPhase {
    /// The pointer went down at this position.
    Pressed(Vec2),

    /// The pointer moved to this position while down.
    Dragged(Vec2),

    /// The pointer was lifted.
    Released,
}

/// A pointer gesture aimed at the [`JoystickEngine`] on `joystick`.
///
/// Send these from whatever touch or mouse handling your app uses;
/// [`VirtualJoystickPlugin`](crate::plugin::VirtualJoystickPlugin) delivers them in order.
#[derive(Event, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct JoystickPointerEvent {
    /// The entity holding the [`JoystickEngine`].
    pub joystick: Entity,

    /// What the pointer did.
    pub phase: PointerPhase,
}

impl JoystickEngine {
    /// Applies a single pointer `phase` to this joystick.
    pub fn handle(&mut self, phase: PointerPhase) {
        match phase {
            PointerPhase::Pressed(position) => self.on_press(position),
            PointerPhase::Dragged(position) => self.on_drag(position),
            PointerPhase::Released => self.on_release(),
        }
    }
}
