use bevy::prelude::*;

use crate::ephemerides::PlanetarySystem;

// --- Physical Constants ---
/// Newtonian gravitational constant (m³·kg⁻¹·s⁻²).
pub const GRAVITATIONAL_CONSTANT: f32 = 6.6743e-11;
/// Seconds in one simulated day.
pub const SECONDS_PER_DAY: f32 = 86_400.0;
/// Mean orbital radius of the procedurally placed asteroid belt (m).
pub const ASTEROIDS_MEAN_RADIUS: f32 = 4e11;
/// Typical asteroid mass: one billion tons.
pub const ASTEROID_MASS: f32 = 1e12;
/// Typical asteroid radius: 2 km.
pub const ASTEROID_RADIUS: f32 = 2e3;
/// Separations below this are clamped before computing gravity (m).
pub const MIN_SEPARATION: f32 = 1.0;

// --- Scenario Factors ---
/// Multiplier applied to the system's giant planet when the mass tweak is on.
pub const MASS_TWEAK_FACTOR: f32 = 1_000.0;
/// Black hole mass as a multiple of the dominant body's mass.
pub const BLACK_HOLE_MASS_FACTOR: f32 = 100_000.0;

// --- Simulation Defaults ---
/// Default simulated days per real second.
pub const DEFAULT_DAYS_PER_SECOND: f32 = 100.0;
/// Frame rate used to derive the timestep before a real one is measured.
pub const DEFAULT_REFERENCE_FPS: f32 = 60.0;
/// Frame rates at or below this are ignored when recomputing the timestep.
pub const MIN_FRAME_RATE: f32 = 5.0;
/// Number of asteroids spawned at reset.
pub const DEFAULT_ASTEROID_COUNT: usize = 1000;
/// Upper bound offered by the asteroid slider.
pub const MAX_ASTEROID_COUNT: usize = 50_000;

// --- Rendering ---
/// Simulation metres to world units.
pub const RENDER_SCALE: f32 = 1e-11;
/// Scale applied to `ln(radius)` for core body spheres.
pub const CORE_RADIUS_SCALE: f32 = 0.005;
/// World-space radius of an asteroid marker.
pub const ASTEROID_RENDER_RADIUS: f32 = 0.01;

/// How asteroid colors are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AsteroidColors {
    #[default]
    Gray,
    /// Uniform random RGB with a translucent alpha.
    Party,
}

/// How asteroid orbital phases are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AsteroidSpawn {
    #[default]
    Scattered,
    /// Every asteroid starts at `phi = 0`, lined up along +x.
    Aligned,
}

/// Construction parameters for a simulation run.
#[derive(Resource, Clone, Debug)]
pub struct SimConfig {
    pub system: PlanetarySystem,
    pub days_per_second: f32,
    pub reference_fps: f32,
    pub asteroid_count: usize,
    pub black_hole: bool,
    pub mass_tweak: bool,
    pub asteroid_colors: AsteroidColors,
    pub asteroid_spawn: AsteroidSpawn,
    /// Fixed RNG seed for reproducible scenarios; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            system: PlanetarySystem::default(),
            days_per_second: DEFAULT_DAYS_PER_SECOND,
            reference_fps: DEFAULT_REFERENCE_FPS,
            asteroid_count: DEFAULT_ASTEROID_COUNT,
            black_hole: false,
            mass_tweak: false,
            asteroid_colors: AsteroidColors::default(),
            asteroid_spawn: AsteroidSpawn::default(),
            seed: None,
        }
    }
}

/// User-facing toggles that only affect the running app.
#[derive(Resource, Default)]
pub struct SimSettings {
    pub paused: bool,
}

/// Marker resource to request a simulation rebuild from the UI.
#[derive(Resource, Default)]
pub struct ResetSimulation {
    pub pending: bool,
}
