//! The pure vector math behind a virtual joystick
//!
//! Each step of turning a drag offset into an output is a small value type,
//! composed by [`JoystickEngine`](crate::engine::JoystickEngine) on every drag event.
//!
//! ## Live Zone
//!
//! [`LiveZone`] describes the ring between the dead radius and the clamp radius.
//! Offsets inside the dead radius produce no output,
//! offsets past the clamp radius saturate,
//! and offsets in between are either ramped linearly ([`VectorMode::Real`](crate::settings::VectorMode::Real))
//! or normalized ([`VectorMode::Normalized`](crate::settings::VectorMode::Normalized)).
//!
//! ## Directional Snapping
//!
//! [`DirectionalSnap`] restricts the output to a fixed number of directions,
//! arranged symmetrically around a configurable axis.
//!
//! ## Recentering
//!
//! [`JoystickMode::recenter`](crate::settings::JoystickMode::recenter) computes
//! where the background should sit after a drag, depending on the joystick mode.

pub use self::live_zone::*;
pub use self::snapping::*;

mod live_zone;
mod recenter;
mod snapping;
