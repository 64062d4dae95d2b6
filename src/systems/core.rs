use std::f32::consts::TAU;

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::MessageReader;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowMode};
use bevy_egui::input::EguiWantsInput;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::bodies::{PLANETS, SUN_COLOR, SUN_RADIUS};
use crate::components::*;
use crate::orbit::{self, OrbitState};
use crate::resources::*;

/// Scatters unlit background stars on a random shell around the system.
pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mesh = meshes.add(Sphere::new(0.12));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.90, 0.90, 1.0),
        unlit: true,
        ..default()
    });

    let mut rng = StdRng::from_os_rng();
    let (inner, outer) = STARFIELD_SHELL;

    for _ in 0..STAR_COUNT {
        let yaw = rng.random_range(0.0..TAU);
        let pitch = rng.random_range(-1.0_f32..1.0).asin();
        let radius = rng.random_range(inner..outer);
        let position = Vec3::new(
            radius * yaw.cos() * pitch.cos(),
            radius * pitch.sin(),
            radius * yaw.sin() * pitch.cos(),
        );

        commands.spawn((
            StarPoint,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
        ));
    }
}

/// Sets up the camera, lighting, sun, planets, orbit rings, and starfield.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let camera = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(camera.translation()).looking_at(Vec3::ZERO, Vec3::Y),
        camera,
    ));

    commands.spawn((
        Sun,
        Mesh3d(meshes.add(Sphere::new(SUN_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(SUN_COLOR[0], SUN_COLOR[1], SUN_COLOR[2]),
            emissive: LinearRgba::rgb(8.0, 5.5, 1.6),
            unlit: true,
            ..default()
        })),
        Transform::default(),
    ));
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            range: 400.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    for (index, body) in PLANETS.iter().enumerate() {
        // Stagger start angles so the planets do not launch in a line.
        let state = OrbitState {
            angle: index as f32 * 0.9,
            spin: 0.0,
        };

        commands.spawn((
            Planet(index),
            Mesh3d(meshes.add(Sphere::new(body.radius))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: body.color(),
                perceptual_roughness: 0.9,
                ..default()
            })),
            Transform::from_translation(orbit::ellipse_position(body.distance, state.angle)),
            state,
            Trail::default(),
        ));

        commands.spawn(OrbitRing {
            planet: index,
            points: orbit::orbit_ring_points(body.distance),
        });
    }

    spawn_starfield(&mut commands, &mut meshes, &mut materials);
    info!("scene ready: {} planets, {} stars", PLANETS.len(), STAR_COUNT);
}

/// Advances every planet's orbital angle and spin, then writes the transform.
pub fn advance_orbits(
    settings: Res<SimSettings>,
    time: Res<Time>,
    mut query: Query<(&Planet, &mut OrbitState, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (planet, mut state, mut transform) in query.iter_mut() {
        let body = &PLANETS[**planet];
        orbit::advance_orbit(
            &mut state,
            body,
            settings.speed_multipliers[**planet],
            settings.paused,
            settings.spin_while_paused,
            dt,
        );
        transform.translation = orbit::ellipse_position(body.distance, state.angle);
        transform.rotation = Quat::from_rotation_y(state.spin);
    }
}

/// Appends the current position of each planet to its trail. Paused frames
/// emit no points; disabling trails drops the stored history.
pub fn record_trails(
    settings: Res<SimSettings>,
    mut query: Query<(&Transform, &mut Trail), With<Planet>>,
) {
    if !settings.show_trails {
        for (_, mut trail) in query.iter_mut() {
            if !trail.is_empty() {
                trail.clear();
            }
        }
        return;
    }

    if settings.paused {
        return;
    }

    for (transform, mut trail) in query.iter_mut() {
        trail.push(transform.translation);
    }
}

/// Renders trails as points fading with age, newest brightest.
pub fn draw_trails(
    mut gizmos: Gizmos,
    settings: Res<SimSettings>,
    query: Query<(&Planet, &Trail)>,
) {
    if !settings.show_trails {
        return;
    }

    for (planet, trail) in query.iter() {
        if trail.is_empty() {
            continue;
        }
        let [r, g, b] = PLANETS[**planet].color;
        let len = trail.len() as f32;
        for (age, point) in trail.iter_newest_first().enumerate() {
            let alpha = 0.8 * (1.0 - age as f32 / len);
            gizmos.sphere(
                Isometry3d::from_translation(point),
                0.06,
                Color::srgba(r, g, b, alpha),
            );
        }
    }
}

/// Draws the static orbit-ring polylines.
pub fn draw_orbit_rings(mut gizmos: Gizmos, query: Query<&OrbitRing>) {
    for ring in query.iter() {
        let [r, g, b] = PLANETS[ring.planet].color;
        gizmos.linestrip(
            ring.points.iter().copied(),
            Color::srgba(r * 0.6, g * 0.6, b * 0.6, 0.35),
        );
    }
}

/// Picks the planet under the cursor by comparing the projected screen
/// position of each body against the pointer, within its apparent radius.
pub fn update_hover(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    planets: Query<(&Planet, &GlobalTransform)>,
    mut hovered: ResMut<HoveredBody>,
    egui_input: Res<EguiWantsInput>,
) {
    let mut next = None;

    if !egui_input.wants_any_pointer_input()
        && let Ok(window) = windows.single()
        && let Some(cursor) = window.cursor_position()
        && let Ok((camera, camera_transform)) = cameras.single()
    {
        let mut best = f32::INFINITY;
        for (planet, transform) in planets.iter() {
            let center = transform.translation();
            let Ok(screen) = camera.world_to_viewport(camera_transform, center) else {
                continue;
            };
            let rim = center + camera_transform.right() * PLANETS[**planet].radius;
            let apparent = camera
                .world_to_viewport(camera_transform, rim)
                .map(|r| r.distance(screen))
                .unwrap_or(0.0);

            let distance = cursor.distance(screen);
            if distance < apparent.max(8.0) + 4.0 && distance < best {
                best = distance;
                next = Some(**planet);
            }
        }
    }

    if hovered.0 != next {
        hovered.0 = next;
    }
}

/// Scales the hovered planet up slightly as a highlight.
pub fn highlight_hovered(
    hovered: Res<HoveredBody>,
    mut query: Query<(&Planet, &mut Transform)>,
) {
    for (planet, mut transform) in query.iter_mut() {
        let scale = if hovered.0 == Some(**planet) {
            HIGHLIGHT_SCALE
        } else {
            1.0
        };
        transform.scale = Vec3::splat(scale);
    }
}

/// Handles drag-to-orbit and scroll-to-zoom unless blocked by UI focus.
pub fn camera_controls(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut query: Query<(&mut OrbitCamera, &mut Transform), With<Camera>>,
    egui_input: Res<EguiWantsInput>,
) {
    let Ok((mut orbit, mut transform)) = query.single_mut() else {
        return;
    };

    if !egui_input.wants_any_pointer_input() {
        if mouse_button.pressed(MouseButton::Left) {
            for event in mouse_motion.read() {
                orbit.yaw += event.delta.x * CAMERA_DRAG_SENSITIVITY;
                orbit.pitch = (orbit.pitch + event.delta.y * CAMERA_DRAG_SENSITIVITY)
                    .clamp(-1.45, 1.45);
            }
        } else {
            mouse_motion.clear();
        }

        for event in mouse_wheel.read() {
            if event.y > 0.0 {
                orbit.radius /= CAMERA_ZOOM_FACTOR;
            } else if event.y < 0.0 {
                orbit.radius *= CAMERA_ZOOM_FACTOR;
            }
        }
        orbit.radius = orbit.radius.clamp(CAMERA_MIN_RADIUS, CAMERA_MAX_RADIUS);
    }

    *transform =
        Transform::from_translation(orbit.translation()).looking_at(Vec3::ZERO, Vec3::Y);
}

/// Shows or hides the starfield when the toggle changes.
pub fn sync_star_visibility(
    settings: Res<SimSettings>,
    mut query: Query<&mut Visibility, With<StarPoint>>,
) {
    if !settings.is_changed() {
        return;
    }

    let target = if settings.show_stars {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in query.iter_mut() {
        *visibility = target;
    }
}

/// Applies the dark-mode palette to the clear color and ambient light.
pub fn sync_dark_mode(
    settings: Res<SimSettings>,
    mut clear_color: ResMut<ClearColor>,
    mut ambient: ResMut<AmbientLight>,
) {
    if !settings.is_changed() {
        return;
    }

    if settings.dark_mode {
        clear_color.0 = Color::srgb(0.004, 0.004, 0.02);
        ambient.brightness = 80.0;
    } else {
        clear_color.0 = Color::srgb(0.82, 0.85, 0.92);
        ambient.brightness = 400.0;
    }
}

/// Mirrors the actual window mode into the tracked fullscreen flag. The flag
/// is never set optimistically; only this readback writes it.
pub fn sync_fullscreen_flag(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut settings: ResMut<SimSettings>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let active = !matches!(window.mode, WindowMode::Windowed);
    if settings.fullscreen != active {
        settings.fullscreen = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::SystemState;
    use std::time::Duration;

    const REFERENCE_DT: f32 = 1.0 / 60.0;

    fn test_world() -> World {
        let mut world = World::new();
        world.insert_resource(SimSettings::default());
        let mut time: Time = Time::default();
        time.advance_by(Duration::from_secs_f32(REFERENCE_DT));
        world.insert_resource(time);
        world
    }

    fn spawn_planets(world: &mut World) -> Vec<Entity> {
        PLANETS
            .iter()
            .enumerate()
            .map(|(index, body)| {
                world
                    .spawn((
                        Planet(index),
                        OrbitState::default(),
                        Transform::from_translation(orbit::ellipse_position(body.distance, 0.0)),
                        Trail::default(),
                    ))
                    .id()
            })
            .collect()
    }

    fn run_advance(world: &mut World, frames: usize) {
        let mut system_state: SystemState<(
            Res<SimSettings>,
            Res<Time>,
            Query<(&Planet, &mut OrbitState, &mut Transform)>,
        )> = SystemState::new(world);

        for _ in 0..frames {
            let (settings, time, query) = system_state.get_mut(world);
            advance_orbits(settings, time, query);
            system_state.apply(world);
        }
    }

    #[test]
    fn zeroed_jupiter_stays_put_while_the_rest_advance() {
        let mut world = test_world();
        world.resource_mut::<SimSettings>().set_speed(4, 0.0);
        let entities = spawn_planets(&mut world);

        run_advance(&mut world, 10);

        for (index, entity) in entities.iter().enumerate() {
            let state = world.get::<OrbitState>(*entity).expect("orbit state");
            let expected =
                PLANETS[index].base_speed * DEFAULT_SPEEDS[index] * TICK_SCALE * 10.0;
            if index == 4 {
                assert_eq!(state.angle, 0.0, "Jupiter must not move");
            } else {
                assert!(
                    (state.angle - expected).abs() < 1e-4,
                    "{}: expected {expected}, got {}",
                    PLANETS[index].name,
                    state.angle
                );
            }
        }
    }

    #[test]
    fn paused_frames_leave_orbits_and_transforms_unchanged() {
        let mut world = test_world();
        world.resource_mut::<SimSettings>().paused = true;
        let entities = spawn_planets(&mut world);

        run_advance(&mut world, 10);

        for entity in &entities {
            let state = world.get::<OrbitState>(*entity).expect("orbit state");
            assert_eq!(state.angle, 0.0);
            assert!((state.spin - 10.0 * PAUSED_SPIN_STEP).abs() < 1e-5);
        }
    }

    #[test]
    fn transforms_follow_the_ellipse() {
        let mut world = test_world();
        let entities = spawn_planets(&mut world);

        run_advance(&mut world, 25);

        for (index, entity) in entities.iter().enumerate() {
            let body = &PLANETS[index];
            let translation = world.get::<Transform>(*entity).expect("transform").translation;
            let a = body.distance;
            let b = a * MINOR_AXIS_RATIO;
            let lhs = (translation.x / a).powi(2) + (translation.z / b).powi(2);
            assert!((lhs - 1.0).abs() < 1e-4, "{}: {lhs}", body.name);
        }
    }

    #[test]
    fn trails_cap_respect_pause_and_clear_on_disable() {
        let mut world = test_world();
        world.resource_mut::<SimSettings>().show_trails = true;
        let entity = world
            .spawn((Planet(0), Transform::default(), Trail::default()))
            .id();

        let mut system_state: SystemState<(
            Res<SimSettings>,
            Query<(&Transform, &mut Trail), With<Planet>>,
        )> = SystemState::new(&mut world);

        for i in 0..150 {
            world.get_mut::<Transform>(entity).expect("transform").translation =
                Vec3::new(i as f32, 0.0, 0.0);
            let (settings, query) = system_state.get_mut(&mut world);
            record_trails(settings, query);
            system_state.apply(&mut world);
        }

        {
            let trail = world.get::<Trail>(entity).expect("trail");
            assert_eq!(trail.len(), TRAIL_CAPACITY);
            let newest = trail.iter_newest_first().next().expect("newest point");
            assert_eq!(newest.x, 149.0);
        }

        // Paused frames must not append.
        world.resource_mut::<SimSettings>().paused = true;
        world.get_mut::<Transform>(entity).expect("transform").translation =
            Vec3::new(999.0, 0.0, 0.0);
        {
            let (settings, query) = system_state.get_mut(&mut world);
            record_trails(settings, query);
            system_state.apply(&mut world);
        }
        {
            let trail = world.get::<Trail>(entity).expect("trail");
            let newest = trail.iter_newest_first().next().expect("newest point");
            assert_eq!(newest.x, 149.0);
        }

        // Disabling trails drops the history.
        world.resource_mut::<SimSettings>().show_trails = false;
        {
            let (settings, query) = system_state.get_mut(&mut world);
            record_trails(settings, query);
            system_state.apply(&mut world);
        }
        assert!(world.get::<Trail>(entity).expect("trail").is_empty());
    }
}
