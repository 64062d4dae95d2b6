use bevy::prelude::*;

use crate::orbit::TrailBuffer;

/// Marks a planet entity; the index points into `bodies::PLANETS` and into
/// the speed multiplier array.
#[derive(Component, Deref)]
pub struct Planet(pub usize);

/// Marks the sun sphere at the origin.
#[derive(Component)]
pub struct Sun;

/// Marks one background star of the starfield.
#[derive(Component)]
pub struct StarPoint;

/// Precomputed orbit-ring polyline for one planet, sampled at scene build.
#[derive(Component)]
pub struct OrbitRing {
    pub planet: usize,
    pub points: Vec<Vec3>,
}

/// Trail history for rendering fading motion points.
#[derive(Component, Default, Deref, DerefMut)]
pub struct Trail(pub TrailBuffer);

/// Spherical-coordinate state of the orbiting viewer camera.
#[derive(Component)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.55,
            radius: 70.0,
        }
    }
}

impl OrbitCamera {
    /// Camera translation for the current spherical coordinates, looking at
    /// the origin.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(
            self.radius * self.yaw.cos() * self.pitch.cos(),
            self.radius * self.pitch.sin(),
            self.radius * self.yaw.sin() * self.pitch.cos(),
        )
    }
}
