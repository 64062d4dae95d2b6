use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::bodies::BodyInfo;
use crate::resources::{
    MINOR_AXIS_RATIO, ORBIT_RING_POINTS, PAUSED_SPIN_STEP, REFERENCE_FPS, TICK_SCALE,
    TRAIL_CAPACITY,
};

/// Per-planet orbital phase, accumulated frame over frame. Angles are not a
/// function of wall-clock time; pausing and resuming is lossless.
#[derive(Component, Clone, Copy, Default)]
pub struct OrbitState {
    /// Orbital angle along the ellipse, wraps mod tau.
    pub angle: f32,
    /// Axial spin angle, wraps mod tau.
    pub spin: f32,
}

/// Advances one body's orbital angle and axial spin across a frame.
///
/// The angle increment is the original per-frame coefficient scaled by the
/// elapsed time against the reference frame rate, so an identical arc is
/// covered per wall-clock second at any refresh rate. While paused the orbit
/// freezes; spin keeps creeping by a fixed per-frame step unless the
/// spin-while-paused policy is off.
pub fn advance_orbit(
    state: &mut OrbitState,
    body: &BodyInfo,
    multiplier: f32,
    paused: bool,
    spin_while_paused: bool,
    dt: f32,
) {
    if paused {
        if spin_while_paused {
            state.spin = (state.spin + PAUSED_SPIN_STEP).rem_euclid(TAU);
        }
        return;
    }

    let frames = dt * REFERENCE_FPS;
    state.angle = (state.angle + body.base_speed * multiplier * TICK_SCALE * frames).rem_euclid(TAU);
    state.spin = (state.spin + body.spin_speed * TICK_SCALE * frames).rem_euclid(TAU);
}

/// Position on the orbit ellipse for a given semi-major axis and angle.
/// All orbits are coplanar in the y = 0 plane.
pub fn ellipse_position(distance: f32, angle: f32) -> Vec3 {
    Vec3::new(
        distance * angle.cos(),
        0.0,
        distance * MINOR_AXIS_RATIO * angle.sin(),
    )
}

/// Samples the closed orbit-ring polyline for a body. Computed once at
/// scene-build time; independent of the current angle.
pub fn orbit_ring_points(distance: f32) -> Vec<Vec3> {
    let segments = (ORBIT_RING_POINTS - 1) as f32;
    (0..ORBIT_RING_POINTS)
        .map(|i| ellipse_position(distance, i as f32 / segments * TAU))
        .collect()
}

/// Fixed-capacity position history with a monotonically increasing write
/// cursor; insertion overwrites the oldest slot once full.
#[derive(Default, Clone)]
pub struct TrailBuffer {
    points: Vec<Vec3>,
    cursor: usize,
}

impl TrailBuffer {
    pub fn push(&mut self, position: Vec3) {
        if self.points.len() < TRAIL_CAPACITY {
            self.points.push(position);
        } else {
            self.points[self.cursor % TRAIL_CAPACITY] = position;
        }
        self.cursor += 1;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.cursor = 0;
    }

    /// Iterates stored positions from the most recent to the oldest.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = Vec3> + '_ {
        let len = self.points.len();
        (0..len).map(move |age| {
            let slot = (self.cursor - 1 - age) % TRAIL_CAPACITY;
            self.points[slot]
        })
    }
}
