use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::ecs::system::SystemParam;
use bevy::input::mouse::MouseWheel;
use bevy::prelude::MessageReader;
use bevy::prelude::*;
use bevy_egui::input::EguiWantsInput;

use crate::components::*;
use crate::resources::*;
use crate::simulation::Simulation;

/// Bundled system params used when rebuilding the simulation.
#[derive(SystemParam)]
pub struct ResetParams<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub meshes: ResMut<'w, Assets<Mesh>>,
    pub materials: ResMut<'w, Assets<StandardMaterial>>,
    pub settings: ResMut<'w, SimSettings>,
    pub config: Res<'w, SimConfig>,
    pub exit: MessageWriter<'w, AppExit>,
}

/// Smoothed frame rate from the frame time diagnostics, if measured yet.
pub fn measured_fps(diagnostics: &DiagnosticsStore) -> Option<f64> {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
}

fn unlit_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        unlit: true,
        alpha_mode: if color.alpha() < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        },
        ..default()
    }
}

/// Sphere radius for a core body: log-scaled, never smaller than an asteroid
/// marker.
fn core_render_radius(radius: f32) -> f32 {
    (radius.ln() * CORE_RADIUS_SCALE).max(ASTEROID_RENDER_RADIUS)
}

/// Spawns one render entity per body: spheres for core bodies, small shared
/// markers for asteroids.
pub fn spawn_simulation_bodies(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    simulation: &Simulation,
) {
    for (index, body) in simulation.core_bodies().iter().enumerate() {
        let radius = core_render_radius(body.radius);
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(radius))),
            MeshMaterial3d(materials.add(unlit_material(body.color))),
            Transform::from_translation(body.position * RENDER_SCALE),
            BodyIndex(index),
            CoreBody,
        ));
    }

    let asteroid_mesh = meshes.add(Sphere::new(ASTEROID_RENDER_RADIUS).mesh().uv(6, 4));
    let mut material: Option<(Color, Handle<StandardMaterial>)> = None;

    for (offset, body) in simulation.asteroids().iter().enumerate() {
        // Gray asteroids all share one material; party colors get their own.
        let handle = match &material {
            Some((color, handle)) if *color == body.color => handle.clone(),
            _ => {
                let handle = materials.add(unlit_material(body.color));
                material = Some((body.color, handle.clone()));
                handle
            }
        };

        commands.spawn((
            Mesh3d(asteroid_mesh.clone()),
            MeshMaterial3d(handle),
            Transform::from_translation(body.position * RENDER_SCALE),
            BodyIndex(simulation.body_num_core() + offset),
        ));
    }
}

/// Builds the configured simulation and its render entities, or requests an
/// exit if it cannot be built.
fn build_simulation(params: &mut ResetParams) {
    match Simulation::new(&params.config) {
        Ok(simulation) => {
            spawn_simulation_bodies(
                &mut params.commands,
                &mut params.meshes,
                &mut params.materials,
                &simulation,
            );
            params.commands.insert_resource(simulation);
        }
        Err(err) => {
            error!("simulation failed to initialize: {err}");
            params.commands.remove_resource::<Simulation>();
            params.exit.write(AppExit::error());
        }
    }
}

/// Sets up the camera and populates the scene from the configured scenario.
pub fn setup_scene(mut params: ResetParams) {
    params.commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 8.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    build_simulation(&mut params);
}

/// Advances the simulation one step, scaled to the measured frame rate.
pub fn advance_simulation(
    simulation: Option<ResMut<Simulation>>,
    settings: Res<SimSettings>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let Some(mut simulation) = simulation else {
        return;
    };
    if settings.paused {
        return;
    }

    // Without a measurement the clock keeps its current step.
    let fps = measured_fps(&diagnostics).unwrap_or(0.0);
    simulation.advance(fps as f32);
}

/// Copies body positions into the render transforms.
pub fn sync_body_transforms(
    simulation: Option<Res<Simulation>>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    let Some(simulation) = simulation else {
        return;
    };
    let bodies = simulation.bodies();

    for (index, mut transform) in query.iter_mut() {
        if let Some(body) = bodies.get(**index) {
            transform.translation = body.position * RENDER_SCALE;
        }
    }
}

/// Orbits and zooms the camera around the origin unless the UI has focus.
pub fn camera_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut query: Query<&mut Transform, With<Camera>>,
    time: Res<Time>,
    egui_input: Res<EguiWantsInput>,
) {
    if egui_input.wants_any_pointer_input() {
        return;
    }

    if let Ok(mut transform) = query.single_mut() {
        let mut distance = transform.translation.length().max(0.5);

        let mut direction = Vec3::ZERO;
        if keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA) {
            direction -= *transform.right();
        }
        if keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD) {
            direction += *transform.right();
        }
        if keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW) {
            direction += *transform.up();
        }
        if keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::KeyS) {
            direction -= *transform.up();
        }

        if direction.length_squared() > 0.0 {
            transform.translation += direction.normalize() * distance * time.delta_secs();
        }

        for event in mouse_wheel.read() {
            if event.y.abs() == 0.0 {
                continue;
            }
            let zoom_factor = 1.1;
            if event.y > 0.0 {
                distance /= zoom_factor;
            } else {
                distance *= zoom_factor;
            }
        }

        let zoom_speed = 1.0 * time.delta_secs();
        if keyboard.pressed(KeyCode::KeyZ) {
            distance *= 1.0 - zoom_speed;
        }
        if keyboard.pressed(KeyCode::KeyX) {
            distance *= 1.0 + zoom_speed;
        }

        distance = distance.clamp(0.5, 500.0);
        let heading = transform.translation.normalize_or(Vec3::Z);
        transform.translation = heading * distance;
        transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}

/// Responds to a pending reset: despawns the render entities and rebuilds the
/// simulation from the current configuration.
pub fn apply_reset_request(
    mut params: ResetParams,
    mut reset: ResMut<ResetSimulation>,
    query: Query<Entity, With<BodyIndex>>,
) {
    if !reset.pending {
        return;
    }
    reset.pending = false;

    *params.settings = SimSettings::default();
    for entity in query.iter() {
        params.commands.entity(entity).despawn();
    }

    build_simulation(&mut params);
}
