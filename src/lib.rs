#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod engine;
pub mod errors;
pub mod geometry;
mod input_mocking;
pub mod plugin;
pub mod pointer;
pub mod processing;
pub mod settings;
pub mod steering;
pub mod systems;

// Re-export this at the root level
pub use input_mocking::MockJoystickPointer;

/// Everything you need to get started
pub mod prelude {
    pub use crate::engine::JoystickEngine;
    pub use crate::errors::JoystickSettingsError;
    pub use crate::geometry::JoystickGeometry;
    pub use crate::input_mocking::MockJoystickPointer;
    pub use crate::plugin::{JoystickSystem, VirtualJoystickPlugin};
    pub use crate::pointer::{JoystickPointerEvent, PointerPhase};
    pub use crate::processing::{DirectionalSnap, LiveZone};
    pub use crate::settings::{JoystickMode, JoystickSettings, VectorMode};
    pub use crate::steering::{JoystickSteering, SteeringBehavior};
}
