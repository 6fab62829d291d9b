//! The stateful core of a virtual joystick

use bevy::color::Color;
use bevy::log::{debug, trace};
use bevy::prelude::{Component, Reflect, Vec2};

use crate::errors::JoystickSettingsError;
use crate::geometry::JoystickGeometry;
use crate::processing::LiveZone;
use crate::settings::{JoystickMode, JoystickSettings};

/// Turns pointer presses, drags and releases into a joystick output.
///
/// Consumers should read [`JoystickEngine::is_working`] and [`JoystickEngine::output`] once per frame.
/// While the joystick is not working, the output is always [`Vec2::ZERO`].
///
/// Every event is handled synchronously: the output is up to date as soon as the call returns.
///
/// ```rust
/// use bevy::prelude::*;
/// use leafwing_virtual_joystick::prelude::*;
///
/// let geometry = JoystickGeometry::new(Vec2::ZERO, 100.0, Vec2::new(400.0, 300.0));
/// let mut joystick = JoystickEngine::new(JoystickSettings::default(), geometry).unwrap();
///
/// joystick.on_press(Vec2::new(5.0, 0.0));
/// joystick.on_drag(Vec2::new(60.0, 0.0));
/// assert!(joystick.is_working());
/// assert!((joystick.output() - Vec2::new(0.5, 0.0)).length() < 0.0001);
///
/// joystick.on_release();
/// assert!(!joystick.is_working());
/// assert_eq!(joystick.output(), Vec2::ZERO);
/// ```
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
pub struct JoystickEngine {
    settings: JoystickSettings,
    geometry: JoystickGeometry,
    live_zone: LiveZone,
    is_pressed: bool,
    is_working: bool,
    output: Vec2,
}

impl JoystickEngine {
    /// Creates an initialized [`JoystickEngine`], with its home position at the
    /// background position of `geometry`.
    ///
    /// # Errors
    ///
    /// Returns the first problem found in `settings` or `geometry`.
    pub fn new(
        settings: JoystickSettings,
        geometry: JoystickGeometry,
    ) -> Result<Self, JoystickSettingsError> {
        settings.validate()?;
        geometry.validate()?;

        let mut engine = Self {
            live_zone: settings.live_zone(geometry.background_radius)?,
            settings,
            geometry,
            is_pressed: false,
            is_working: false,
            output: Vec2::ZERO,
        };
        engine.initialize();
        Ok(engine)
    }

    /// Captures the current background position as the home position,
    /// and resets the joystick to neutral.
    pub fn initialize(&mut self) {
        self.geometry.capture_origin();
        self.geometry.reset_to_origin();
        self.reset_session();

        debug!(
            "Initialized {} joystick at {} with a radius of {}",
            self.settings.mode, self.geometry.background_origin, self.geometry.background_radius
        );
    }

    /// Handles a pointer going down at `position`.
    ///
    /// Outside of [`JoystickMode::Fixed`], the background jumps under the pointer.
    pub fn on_press(&mut self, position: Vec2) {
        self.is_pressed = true;

        if self.settings.mode != JoystickMode::Fixed {
            self.geometry.background_position = position;
            self.is_working = false;
            self.output = Vec2::ZERO;
        }

        trace!(
            "Joystick pressed at {position}, background at {}",
            self.geometry.background_position
        );
    }

    /// Handles the pointer moving to `position`.
    ///
    /// Drags are only picked up while the joystick is working,
    /// or when they land on the background,
    /// so that stray drags after a release are ignored while an active gesture may leave the background.
    pub fn on_drag(&mut self, position: Vec2) {
        if !self.is_working && !self.geometry.background_contains(position) {
            trace!("Ignoring drag at {position} outside of the idle joystick");
            return;
        }

        let mut offset = position - self.geometry.background_position;
        let magnitude = offset.length();

        if self.live_zone.excludes(magnitude) {
            self.is_working = false;
            self.output = Vec2::ZERO;
            return;
        }

        let mode = self.settings.mode;
        self.geometry.background_position =
            mode.recenter(&self.geometry, offset, self.live_zone.clamp_radius);

        if let Some(snap) = self.settings.directional_snap() {
            offset = snap.snap(offset);
        }

        self.output = self
            .live_zone
            .output(offset, magnitude, self.settings.vector_mode);
        self.is_working = true;

        trace!("Joystick dragged to {position}, output {}", self.output);
    }

    /// Handles the pointer being lifted.
    ///
    /// Outside of [`JoystickMode::Fixed`], the background returns to its home position.
    pub fn on_release(&mut self) {
        self.reset_session();

        if self.settings.mode != JoystickMode::Fixed {
            self.geometry.reset_to_origin();
        }

        trace!("Joystick released");
    }

    /// Is a drag outside of the dead zone currently in progress?
    #[must_use]
    #[inline]
    pub fn is_working(&self) -> bool {
        self.is_working
    }

    /// The current output.
    ///
    /// Its length is within `[0.0, 1.0]` for [`VectorMode::Real`](crate::settings::VectorMode::Real),
    /// and exactly `1.0` while working for [`VectorMode::Normalized`](crate::settings::VectorMode::Normalized).
    #[must_use]
    #[inline]
    pub fn output(&self) -> Vec2 {
        self.output
    }

    /// Is the pointer currently down on this joystick?
    #[must_use]
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Where the handle should be drawn, relative to the background center.
    #[must_use]
    #[inline]
    pub fn handle_position(&self) -> Vec2 {
        self.output * self.live_zone.clamp_radius
    }

    /// The tint of the handle: the pressed color while pressed, `idle` otherwise.
    #[must_use]
    #[inline]
    pub fn handle_tint(&self, idle: Color) -> Color {
        if self.is_pressed {
            self.settings.pressed_color
        } else {
            idle
        }
    }

    /// The current center of the background.
    #[must_use]
    #[inline]
    pub fn background_position(&self) -> Vec2 {
        self.geometry.background_position
    }

    /// The offsets shorter than this produce no output.
    #[must_use]
    #[inline]
    pub fn dead_radius(&self) -> f32 {
        self.live_zone.dead_radius
    }

    /// The offsets at least this long produce a saturated output.
    #[must_use]
    #[inline]
    pub fn clamp_radius(&self) -> f32 {
        self.live_zone.clamp_radius
    }

    /// The settings this joystick was created with.
    #[inline]
    pub fn settings(&self) -> &JoystickSettings {
        &self.settings
    }

    /// The positional state of this joystick.
    #[inline]
    pub fn geometry(&self) -> &JoystickGeometry {
        &self.geometry
    }

    fn reset_session(&mut self) {
        self.is_pressed = false;
        self.is_working = false;
        self.output = Vec2::ZERO;
    }
}
