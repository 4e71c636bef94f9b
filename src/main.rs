mod components;
mod ephemerides;
mod error;
mod resources;
mod simulation;
mod systems;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

use crate::ephemerides::PlanetarySystem;
use crate::resources::{ResetSimulation, SimConfig, SimSettings};
use crate::systems::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orbital Simulation".into(),
            resolution: WindowResolution::new(1280, 720),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(EguiPlugin::default())
    .add_plugins(FrameTimeDiagnosticsPlugin::default());

    // Resolved after the plugins so an unknown name is logged.
    let mut config = SimConfig::default();
    if let Some(name) = std::env::args().nth(1) {
        config.system = PlanetarySystem::from_name(&name);
    }

    app.insert_resource(ClearColor(Color::BLACK))
        .insert_resource(config)
        .init_resource::<SimSettings>()
        .init_resource::<ResetSimulation>()
        .add_systems(EguiPrimaryContextPass, ui_controls)
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                apply_reset_request,
                advance_simulation,
                sync_body_transforms,
                camera_controls,
            )
                .chain(),
        )
        .run();
}
