//! The simulation core: body store, scenario building, gravity and time.
//!
//! Nothing here draws or reads input. The Bevy systems in `crate::systems`
//! drive [`Simulation::advance`] once per frame and read the body store back.

pub mod asteroids;
pub mod clock;
pub mod physics;
pub mod scenario;

use bevy::prelude::*;

use crate::components::Body;
use crate::ephemerides::PlanetarySystem;
use crate::simulation::clock::Clock;

/// A planetary system plus its asteroids, advanced one step per frame.
///
/// `bodies[..body_num_core]` are core bodies (stars, planets, black hole) that
/// act as gravitational sources; the rest are asteroids that only feel them.
/// Bodies are never added or removed after construction.
#[derive(Resource, Debug)]
pub struct Simulation {
    bodies: Vec<Body>,
    body_num_core: usize,
    clock: Clock,
    system: PlanetarySystem,
    black_hole: bool,
    mass_tweak: bool,
}

/// Display-only facts about a running simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationSummary {
    pub system: PlanetarySystem,
    pub body_num: usize,
    pub body_num_core: usize,
    pub asteroid_count: usize,
    pub black_hole: bool,
    pub mass_tweak: bool,
    pub time: f64,
}

impl Simulation {
    /// Every body, core bodies first.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Stars, planets and the optional black hole.
    pub fn core_bodies(&self) -> &[Body] {
        &self.bodies[..self.body_num_core]
    }

    /// Massless bodies after the core prefix.
    pub fn asteroids(&self) -> &[Body] {
        &self.bodies[self.body_num_core..]
    }

    /// Total body count.
    pub fn body_num(&self) -> usize {
        self.bodies.len()
    }

    /// Length of the gravitating prefix of [`Self::bodies`].
    pub fn body_num_core(&self) -> usize {
        self.body_num_core
    }

    /// Number of bodies in [`Self::asteroids`].
    pub fn asteroid_count(&self) -> usize {
        self.body_num() - self.body_num_core
    }

    /// Simulated seconds since the scenario epoch.
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    /// Seconds advanced by the next step.
    pub fn time_step(&self) -> f32 {
        self.clock.time_step()
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            system: self.system,
            body_num: self.body_num(),
            body_num_core: self.body_num_core,
            asteroid_count: self.asteroid_count(),
            black_hole: self.black_hole,
            mass_tweak: self.mass_tweak,
            time: self.time(),
        }
    }

    /// Advances one step with the current timestep.
    pub fn step(&mut self) {
        physics::step(&mut self.bodies, self.body_num_core, self.clock.time_step());
        self.clock.tick();
    }

    /// Rescales the timestep for `real_frame_rate`, then advances one step.
    /// Implausible frame rates keep the previous timestep.
    pub fn advance(&mut self, real_frame_rate: f32) {
        if !self.clock.sync_to_frame_rate(real_frame_rate) {
            debug!(
                "ignoring frame rate {real_frame_rate}, keeping {} s step",
                self.clock.time_step()
            );
        }
        self.step();
    }
}
