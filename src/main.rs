mod bodies;
mod components;
mod orbit;
mod resources;
mod systems;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

use crate::resources::{HoveredBody, SimSettings, UiState};
use crate::systems::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System".into(),
                resolution: WindowResolution::new(1280, 800),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::srgb(0.004, 0.004, 0.02)))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 80.0,
            ..default()
        })
        .init_resource::<SimSettings>()
        .init_resource::<HoveredBody>()
        .init_resource::<UiState>()
        .add_systems(EguiPrimaryContextPass, (ui_controls, draw_labels).chain())
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                (advance_orbits, record_trails, draw_trails).chain(),
                draw_orbit_rings,
                update_hover,
                highlight_hovered.after(advance_orbits),
                camera_controls,
                sync_star_visibility,
                sync_dark_mode,
                sync_fullscreen_flag,
            ),
        )
        .run();
}
