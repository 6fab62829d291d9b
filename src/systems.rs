//! The systems that power each [`VirtualJoystickPlugin`](crate::plugin::VirtualJoystickPlugin).

use bevy::ecs::prelude::*;
use bevy::log::warn;
use bevy::prelude::{Time, Transform};

use crate::engine::JoystickEngine;
use crate::pointer::JoystickPointerEvent;
use crate::steering::JoystickSteering;

/// Feeds every [`JoystickPointerEvent`] to its [`JoystickEngine`], in the order they were sent.
pub fn dispatch_pointer_events(
    mut events: EventReader<JoystickPointerEvent>,
    mut joysticks: Query<&mut JoystickEngine>,
) {
    for event in events.read() {
        let Ok(mut joystick) = joysticks.get_mut(event.joystick) else {
            warn!(
                "Pointer event sent to {:?}, which has no JoystickEngine: was it despawned?",
                event.joystick
            );
            continue;
        };

        joystick.handle(event.phase);
    }
}

/// Moves or turns every [`JoystickSteering`] entity according to its joystick.
pub fn steer_transforms(
    time: Res<Time>,
    joysticks: Query<&JoystickEngine>,
    mut steered: Query<(&JoystickSteering, &mut Transform)>,
) {
    let delta_seconds = time.delta_seconds();

    for (steering, mut transform) in steered.iter_mut() {
        let Ok(joystick) = joysticks.get(steering.joystick) else {
            continue;
        };

        if joystick.is_working() {
            steering
                .behavior
                .apply(joystick.output(), delta_seconds, &mut transform);
        }
    }
}
