use bevy::prelude::*;

use crate::bodies::PLANETS;

// --- Simulation Defaults ---
/// Per-frame angle coefficient at the reference frame rate.
pub const TICK_SCALE: f32 = 0.01;
/// Frame rate the tick scale was tuned against; elapsed time is normalized
/// to this so motion is identical across refresh rates.
pub const REFERENCE_FPS: f32 = 60.0;
/// Axial spin increment applied per frame while paused.
pub const PAUSED_SPIN_STEP: f32 = 0.01;
/// Semi-minor axis as a fraction of the semi-major axis.
pub const MINOR_AXIS_RATIO: f32 = 0.85;
/// Points in each sampled orbit-ring polyline (closed, first == last).
pub const ORBIT_RING_POINTS: usize = 129;
/// Maximum stored points per trail.
pub const TRAIL_CAPACITY: usize = 100;
/// Upper bound of the speed multiplier sliders.
pub const MAX_SPEED_MULTIPLIER: f32 = 5.0;
/// Default per-planet speed multipliers, in orbit order.
pub const DEFAULT_SPEEDS: [f32; 8] = [2.3, 1.0, 1.0, 1.0, 1.0, 1.5, 1.0, 1.0];

// --- Scene ---
/// Number of background stars scattered at startup.
pub const STAR_COUNT: usize = 400;
/// Inner and outer radius of the starfield shell.
pub const STARFIELD_SHELL: (f32, f32) = (60.0, 95.0);
/// Scale applied to a planet while the pointer hovers it.
pub const HIGHLIGHT_SCALE: f32 = 1.25;

// --- Camera ---
pub const CAMERA_MIN_RADIUS: f32 = 10.0;
pub const CAMERA_MAX_RADIUS: f32 = 150.0;
pub const CAMERA_DRAG_SENSITIVITY: f32 = 0.005;
pub const CAMERA_ZOOM_FACTOR: f32 = 1.1;

// --- Layout ---
/// Window width below which the controls panel collapses behind a floating
/// toggle button.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// User-facing simulation parameters, the single source of mutable state.
/// Mutated only by the UI; read by the update and render systems each frame.
#[derive(Resource)]
pub struct SimSettings {
    /// One multiplier per planet, index-aligned with `bodies::PLANETS`.
    pub speed_multipliers: [f32; PLANETS.len()],
    pub paused: bool,
    pub show_labels: bool,
    pub show_stars: bool,
    pub show_trails: bool,
    pub dark_mode: bool,
    /// Tracked window state, written only by the fullscreen readback system.
    pub fullscreen: bool,
    /// Whether axial spin keeps advancing while the simulation is paused.
    pub spin_while_paused: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            speed_multipliers: DEFAULT_SPEEDS,
            paused: false,
            show_labels: true,
            show_stars: true,
            show_trails: false,
            dark_mode: true,
            fullscreen: false,
            spin_while_paused: true,
        }
    }
}

impl SimSettings {
    pub fn set_speed(&mut self, index: usize, value: f32) {
        self.speed_multipliers[index] = value;
    }

    pub fn reset_speeds(&mut self) {
        self.speed_multipliers = DEFAULT_SPEEDS;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
    }

    pub fn toggle_stars(&mut self) {
        self.show_stars = !self.show_stars;
    }

    pub fn toggle_trails(&mut self) {
        self.show_trails = !self.show_trails;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

/// Planet index currently under the pointer, if any.
#[derive(Resource, Default)]
pub struct HoveredBody(pub Option<usize>);

/// Transient UI layout state.
#[derive(Resource)]
pub struct UiState {
    pub panel_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { panel_open: true }
    }
}
