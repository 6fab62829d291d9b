//! Contains the main plugin exported by this crate.

use bevy::app::{App, Plugin, PreUpdate, Update};
use bevy::ecs::prelude::*;
use bevy::input::InputSystem;

use crate::engine::JoystickEngine;
use crate::geometry::JoystickGeometry;
use crate::pointer::{JoystickPointerEvent, PointerPhase};
use crate::settings::{JoystickMode, JoystickSettings, VectorMode};
use crate::steering::{JoystickSteering, SteeringBehavior};

/// A [`Plugin`] that routes [`JoystickPointerEvent`]s to [`JoystickEngine`] components.
///
/// Spawn a [`JoystickEngine`] on an entity, and send [`JoystickPointerEvent`]s
/// addressed to that entity from your own touch or mouse handling.
/// The engine's output is up to date by the time [`Update`] runs.
///
/// ## Systems
///
/// - [`dispatch_pointer_events`](crate::systems::dispatch_pointer_events), which feeds pointer events
///   to their joysticks during [`PreUpdate`]
///     - labeled [`JoystickSystem::Dispatch`]
/// - [`steer_transforms`](crate::systems::steer_transforms), which applies joystick outputs to
///   [`JoystickSteering`] entities during [`Update`]
///     - labeled [`JoystickSystem::Steer`]
#[derive(Debug, Default, Clone, Copy)]
pub struct VirtualJoystickPlugin;

impl Plugin for VirtualJoystickPlugin {
    fn build(&self, app: &mut App) {
        use crate::systems::*;

        app.add_event::<JoystickPointerEvent>()
            .add_systems(
                PreUpdate,
                dispatch_pointer_events
                    .in_set(JoystickSystem::Dispatch)
                    .after(InputSystem),
            )
            .add_systems(Update, steer_transforms.in_set(JoystickSystem::Steer));

        app.register_type::<JoystickEngine>()
            .register_type::<JoystickSettings>()
            .register_type::<JoystickGeometry>()
            .register_type::<JoystickMode>()
            .register_type::<VectorMode>()
            .register_type::<JoystickPointerEvent>()
            .register_type::<PointerPhase>()
            .register_type::<JoystickSteering>()
            .register_type::<SteeringBehavior>();
    }
}

/// [`SystemSet`]s for the systems added by [`VirtualJoystickPlugin`]
#[derive(SystemSet, Clone, Copy, Hash, Debug, PartialEq, Eq)]
pub enum JoystickSystem {
    /// Pointer events are applied to joysticks
    Dispatch,
    /// Joystick outputs are applied to steered transforms
    Steer,
}
