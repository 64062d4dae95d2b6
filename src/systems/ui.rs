use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};
use bevy_egui::EguiContexts;
use bevy_egui::egui;

use crate::bodies::PLANETS;
use crate::components::Planet;
use crate::resources::{
    HoveredBody, MAX_SPEED_MULTIPLIER, MOBILE_BREAKPOINT, SimSettings, UiState,
};

fn body_color32(color: [f32; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
    )
}

pub fn ui_controls(
    mut contexts: EguiContexts,
    mut settings: ResMut<SimSettings>,
    mut ui_state: ResMut<UiState>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut frames_rendered: Local<usize>,
) {
    if *frames_rendered < 5 {
        *frames_rendered += 1;
        return;
    }

    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    ctx.set_visuals(if settings.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    // Narrow windows collapse the panel behind a floating toggle button.
    let compact = window.width() < MOBILE_BREAKPOINT;
    if compact {
        egui::Area::new(egui::Id::new("panel-toggle"))
            .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
            .show(ctx, |ui| {
                let icon = if ui_state.panel_open { "✕" } else { "☰" };
                if ui.button(icon).clicked() {
                    ui_state.panel_open = !ui_state.panel_open;
                }
            });
        if !ui_state.panel_open {
            return;
        }
    }

    egui::Window::new("Solar System Controls")
        .default_pos(egui::pos2(10.0, if compact { 48.0 } else { 10.0 }))
        .max_size([320.0, 560.0])
        .vscroll(true)
        .show(ctx, |ui| {
            ui.heading("Playback");
            ui.horizontal(|ui| {
                let label = if settings.paused { "Resume" } else { "Pause" };
                if ui.button(label).clicked() {
                    settings.toggle_pause();
                }
                if ui.button("Reset Speeds").clicked() {
                    settings.reset_speeds();
                }
            });
            ui.horizontal(|ui| {
                let label = if settings.fullscreen {
                    "Exit Fullscreen"
                } else {
                    "Fullscreen"
                };
                if ui.button(label).clicked() {
                    // Request only; the tracked flag follows the window's
                    // actual mode via the readback system.
                    window.mode = if matches!(window.mode, WindowMode::Windowed) {
                        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
                    } else {
                        WindowMode::Windowed
                    };
                }
                let theme = if settings.dark_mode { "Light Mode" } else { "Dark Mode" };
                if ui.button(theme).clicked() {
                    settings.toggle_dark_mode();
                }
            });

            ui.separator();
            ui.heading("Display");
            let mut labels = settings.show_labels;
            if ui.checkbox(&mut labels, "Show Labels").changed() {
                settings.toggle_labels();
            }
            let mut stars = settings.show_stars;
            if ui.checkbox(&mut stars, "Show Stars").changed() {
                settings.toggle_stars();
            }
            let mut trails = settings.show_trails;
            if ui.checkbox(&mut trails, "Show Trails").changed() {
                settings.toggle_trails();
            }
            let mut spin = settings.spin_while_paused;
            if ui.checkbox(&mut spin, "Spin While Paused").changed() {
                settings.spin_while_paused = spin;
            }

            ui.separator();
            ui.heading("Orbital Speeds");
            for (index, body) in PLANETS.iter().enumerate() {
                let mut value = settings.speed_multipliers[index];
                let slider = egui::Slider::new(&mut value, 0.0..=MAX_SPEED_MULTIPLIER)
                    .step_by(0.1)
                    .text(body.name);
                if ui.add(slider).changed() {
                    settings.set_speed(index, value);
                }
            }

            ui.separator();
            ui.label("Drag to orbit the camera, scroll to zoom.");
            ui.label("Hover a planet for details.");
        });
}

/// Draws planet name labels at their projected screen positions, plus a
/// detail card for the hovered planet.
pub fn draw_labels(
    mut contexts: EguiContexts,
    settings: Res<SimSettings>,
    hovered: Res<HoveredBody>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    planets: Query<(&Planet, &GlobalTransform)>,
) {
    if !settings.show_labels && hovered.0.is_none() {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (planet, transform) in planets.iter() {
        let index = **planet;
        let is_hovered = hovered.0 == Some(index);
        if !settings.show_labels && !is_hovered {
            continue;
        }

        let body = &PLANETS[index];
        let anchor = transform.translation() + Vec3::Y * (body.radius + 0.6);
        let Ok(screen) = camera.world_to_viewport(camera_transform, anchor) else {
            continue;
        };

        egui::Area::new(egui::Id::new(("planet-label", index)))
            .fixed_pos(egui::pos2(screen.x, screen.y))
            .pivot(egui::Align2::CENTER_BOTTOM)
            .show(ctx, |ui| {
                let text = egui::RichText::new(body.name).color(body_color32(body.color));
                ui.label(if is_hovered { text.strong() } else { text });
            });

        if is_hovered {
            egui::Area::new(egui::Id::new("hover-card"))
                .fixed_pos(egui::pos2(screen.x + 16.0, screen.y + 16.0))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.strong(body.name);
                        ui.label(body.blurb);
                    });
                });
        }
    }
}
