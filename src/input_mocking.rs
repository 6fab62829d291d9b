//! Helpful utilities for testing joysticks by sending mock pointer events

use bevy::app::App;
use bevy::ecs::entity::Entity;
use bevy::ecs::world::World;
use bevy::math::Vec2;

use crate::pointer::{JoystickPointerEvent, PointerPhase};

/// Send fake pointer events to a joystick for testing purposes
///
/// The events are picked up by [`VirtualJoystickPlugin`](crate::plugin::VirtualJoystickPlugin)
/// on the next update.
///
/// # Examples
/// ```rust
/// use bevy::prelude::*;
/// use leafwing_virtual_joystick::prelude::*;
///
/// let mut app = App::new();
/// app.add_plugins(MinimalPlugins).add_plugins(VirtualJoystickPlugin);
///
/// let geometry = JoystickGeometry::new(Vec2::ZERO, 100.0, Vec2::splat(400.0));
/// let engine = JoystickEngine::new(JoystickSettings::default(), geometry).unwrap();
/// let joystick = app.world_mut().spawn(engine).id();
///
/// app.press_joystick(joystick, Vec2::ZERO);
/// app.drag_joystick(joystick, Vec2::new(0.0, 90.0));
/// app.update();
///
/// let engine = app.world().get::<JoystickEngine>(joystick).unwrap();
/// assert!(engine.is_working());
/// ```
pub trait MockJoystickPointer {
    /// Send a single pointer `phase` to the `joystick` entity
    fn send_pointer(&mut self, joystick: Entity, phase: PointerPhase);

    /// Press the pointer down on the `joystick` entity at `position`
    fn press_joystick(&mut self, joystick: Entity, position: Vec2) {
        self.send_pointer(joystick, PointerPhase::Pressed(position));
    }

    /// Drag the pointer on the `joystick` entity to `position`
    fn drag_joystick(&mut self, joystick: Entity, position: Vec2) {
        self.send_pointer(joystick, PointerPhase::Dragged(position));
    }

    /// Lift the pointer from the `joystick` entity
    fn release_joystick(&mut self, joystick: Entity) {
        self.send_pointer(joystick, PointerPhase::Released);
    }
}

impl MockJoystickPointer for World {
    fn send_pointer(&mut self, joystick: Entity, phase: PointerPhase) {
        self.send_event(JoystickPointerEvent { joystick, phase });
    }
}

impl MockJoystickPointer for App {
    fn send_pointer(&mut self, joystick: Entity, phase: PointerPhase) {
        self.world_mut().send_pointer(joystick, phase);
    }
}
