use bevy::prelude::*;

/// Static description of one celestial body. The table below is fixed at
/// compile time; nothing is created or destroyed at runtime.
pub struct BodyInfo {
    pub name: &'static str,
    /// Display color as sRGB components.
    pub color: [f32; 3],
    /// Render-scale radius, not physical.
    pub radius: f32,
    /// Semi-major axis of the orbit in scene units.
    pub distance: f32,
    /// Base angular speed, in radians per reference frame before the tick
    /// scale is applied. Chosen for visual pacing, not orbital mechanics.
    pub base_speed: f32,
    /// Axial spin speed on the same scale as `base_speed`.
    pub spin_speed: f32,
    pub blurb: &'static str,
}

impl BodyInfo {
    pub fn color(&self) -> Color {
        Color::srgb(self.color[0], self.color[1], self.color[2])
    }
}

/// The eight planets, in orbit order. Array position is the join key to the
/// per-planet speed multipliers; the order must never change.
pub const PLANETS: [BodyInfo; 8] = [
    BodyInfo {
        name: "Mercury",
        color: [0.70, 0.62, 0.50],
        radius: 0.38,
        distance: 8.0,
        base_speed: 2.4,
        spin_speed: 0.4,
        blurb: "Smallest planet, closest to the Sun.",
    },
    BodyInfo {
        name: "Venus",
        color: [0.90, 0.75, 0.40],
        radius: 0.72,
        distance: 11.0,
        base_speed: 1.8,
        spin_speed: 0.2,
        blurb: "Hottest planet, wrapped in dense clouds.",
    },
    BodyInfo {
        name: "Earth",
        color: [0.25, 0.45, 0.85],
        radius: 0.75,
        distance: 14.0,
        base_speed: 1.5,
        spin_speed: 1.0,
        blurb: "Our home, the only known world with life.",
    },
    BodyInfo {
        name: "Mars",
        color: [0.80, 0.35, 0.20],
        radius: 0.55,
        distance: 17.0,
        base_speed: 1.2,
        spin_speed: 0.97,
        blurb: "The red planet, home to Olympus Mons.",
    },
    BodyInfo {
        name: "Jupiter",
        color: [0.82, 0.64, 0.42],
        radius: 1.60,
        distance: 22.0,
        base_speed: 0.8,
        spin_speed: 2.4,
        blurb: "Largest planet, a gas giant with the Great Red Spot.",
    },
    BodyInfo {
        name: "Saturn",
        color: [0.90, 0.82, 0.55],
        radius: 1.35,
        distance: 27.0,
        base_speed: 0.6,
        spin_speed: 2.2,
        blurb: "Famous for its spectacular ring system.",
    },
    BodyInfo {
        name: "Uranus",
        color: [0.60, 0.82, 0.88],
        radius: 1.00,
        distance: 32.0,
        base_speed: 0.4,
        spin_speed: 1.4,
        blurb: "An ice giant tilted on its side.",
    },
    BodyInfo {
        name: "Neptune",
        color: [0.30, 0.42, 0.88],
        radius: 0.95,
        distance: 36.0,
        base_speed: 0.3,
        spin_speed: 1.5,
        blurb: "The windiest planet, farthest from the Sun.",
    },
];

/// Render radius of the sun sphere at the origin.
pub const SUN_RADIUS: f32 = 3.0;
pub const SUN_COLOR: [f32; 3] = [1.0, 0.85, 0.30];
