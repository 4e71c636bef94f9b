use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use crate::components::Body;
use crate::ephemerides::{EphemeridesBody, SystemInfo};
use crate::error::SimulationError;
use crate::resources::{BLACK_HOLE_MASS_FACTOR, MASS_TWEAK_FACTOR, SimConfig};
use crate::simulation::Simulation;
use crate::simulation::asteroids::place_asteroid;
use crate::simulation::clock::Clock;

const BLACK_HOLE_COLOR: Color = Color::srgb(80.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0);

impl From<&EphemeridesBody> for Body {
    fn from(entry: &EphemeridesBody) -> Self {
        let [r, g, b] = entry.color;
        Self {
            position: entry.position,
            velocity: entry.velocity,
            acceleration: Vec3::ZERO,
            mass: entry.mass,
            radius: entry.radius,
            color: Color::srgb_u8(r, g, b),
        }
    }
}

/// Synthesizes the optional supermassive core body for `info`.
fn black_hole(info: &SystemInfo) -> Body {
    let (a, b) = info.black_hole_anchors;
    let (anchor, reference) = (&info.bodies[a], &info.bodies[b]);
    let dominant = &info.bodies[0];

    Body {
        position: anchor.position - reference.position,
        velocity: anchor.velocity - reference.velocity,
        acceleration: Vec3::ZERO,
        mass: dominant.mass * BLACK_HOLE_MASS_FACTOR,
        radius: dominant.radius,
        color: BLACK_HOLE_COLOR,
    }
}

impl Simulation {
    /// Builds a fully populated simulation from `config`.
    ///
    /// Core bodies come first: the system's ephemerides (with the giant
    /// planet's mass tweaked if requested), then the black hole if requested.
    /// Asteroids fill the rest, orbiting the mass of body 0.
    pub fn new(config: &SimConfig) -> Result<Self, SimulationError> {
        if !(config.days_per_second > 0.0 && config.days_per_second.is_finite()) {
            return Err(SimulationError::InvalidConfig("days per second must be positive"));
        }
        if !(config.reference_fps > 0.0 && config.reference_fps.is_finite()) {
            return Err(SimulationError::InvalidConfig("reference frame rate must be positive"));
        }

        let info = config.system.info();
        let body_num_core = info.body_num() + usize::from(config.black_hole);
        let body_num = body_num_core.saturating_add(config.asteroid_count);

        let mut bodies = Vec::new();
        bodies
            .try_reserve_exact(body_num)
            .map_err(|source| SimulationError::Allocation {
                requested: body_num,
                source,
            })?;

        for (index, entry) in info.bodies.iter().enumerate() {
            debug!("core body {index}: {}", entry.name);
            bodies.push(Body::from(entry));
        }

        let mass_tweak = match (config.mass_tweak, info.giant_planet) {
            (true, Some(giant)) => {
                bodies[giant].mass *= MASS_TWEAK_FACTOR;
                true
            }
            (true, None) => {
                warn!(
                    "{} has no giant planet, ignoring mass tweak",
                    config.system.name()
                );
                false
            }
            (false, _) => false,
        };

        if config.black_hole {
            bodies.push(black_hole(info));
        }

        let center_mass = bodies[0].mass;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        bodies.extend((0..config.asteroid_count).map(|_| {
            place_asteroid(
                &mut rng,
                center_mass,
                config.asteroid_colors,
                config.asteroid_spawn,
            )
        }));

        info!(
            "built {} system: {} core bodies, {} asteroids, black hole {}, mass tweak {}",
            config.system.name(),
            body_num_core,
            config.asteroid_count,
            config.black_hole,
            mass_tweak
        );

        Ok(Self {
            bodies,
            body_num_core,
            clock: Clock::new(config.days_per_second, config.reference_fps),
            system: config.system,
            black_hole: config.black_hole,
            mass_tweak,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::DVec3;

    use crate::ephemerides::PlanetarySystem;
    use crate::resources::{AsteroidSpawn, GRAVITATIONAL_CONSTANT};

    fn config(asteroid_count: usize) -> SimConfig {
        SimConfig {
            asteroid_count,
            seed: Some(42),
            ..default()
        }
    }

    fn total_momentum(bodies: &[Body]) -> (DVec3, f64) {
        bodies.iter().fold((DVec3::ZERO, 0.0), |(sum, scale), body| {
            let p = body.velocity.as_dvec3() * f64::from(body.mass);
            (sum + p, scale + p.length())
        })
    }

    #[test]
    fn solar_without_options_has_nine_core_bodies() {
        let sim = Simulation::new(&config(0)).expect("solar system builds");
        assert_eq!(sim.body_num(), 9);
        assert_eq!(sim.body_num_core(), 9);
        assert_eq!(sim.asteroid_count(), 0);

        let table = PlanetarySystem::Solar.info().bodies;
        for (body, entry) in sim.bodies().iter().zip(table) {
            assert_eq!(body.position, entry.position);
            assert_eq!(body.velocity, entry.velocity);
            assert_eq!(body.mass, entry.mass);
            assert_eq!(body.acceleration, Vec3::ZERO);
        }
    }

    #[test]
    fn asteroids_follow_the_core_prefix() {
        let sim = Simulation::new(&config(250)).expect("solar system builds");
        assert_eq!(sim.body_num(), 259);
        assert_eq!(sim.body_num_core(), 9);
        assert_eq!(sim.asteroids().len(), 250);
        assert!(sim.asteroids().iter().all(|a| a.position.y == 0.0));
    }

    #[test]
    fn same_seed_builds_identical_stores() {
        let cfg = SimConfig {
            black_hole: true,
            asteroid_colors: crate::resources::AsteroidColors::Party,
            ..config(500)
        };
        let a = Simulation::new(&cfg).expect("first build");
        let b = Simulation::new(&cfg).expect("second build");
        assert_eq!(a.bodies(), b.bodies());

        let c = Simulation::new(&SimConfig {
            seed: Some(43),
            ..cfg
        })
        .expect("third build");
        assert_ne!(a.bodies(), c.bodies());
    }

    #[test]
    fn black_hole_is_the_last_core_body() {
        let sim = Simulation::new(&SimConfig {
            black_hole: true,
            ..config(10)
        })
        .expect("solar system builds");
        assert_eq!(sim.body_num_core(), 10);
        assert_eq!(sim.body_num(), 20);
        assert!(sim.summary().black_hole);

        let table = PlanetarySystem::Solar.info().bodies;
        let hole = &sim.bodies()[sim.body_num_core() - 1];
        assert_eq!(hole.mass, table[0].mass * BLACK_HOLE_MASS_FACTOR);
        assert_eq!(hole.radius, table[0].radius);
        assert_eq!(hole.position, table[3].position - table[6].position);
        assert_eq!(hole.color, BLACK_HOLE_COLOR);
    }

    #[test]
    fn black_hole_does_not_change_asteroid_center_mass() {
        let cfg = SimConfig {
            asteroid_spawn: AsteroidSpawn::Aligned,
            ..config(50)
        };
        let plain = Simulation::new(&cfg).expect("plain build");
        let with_hole = Simulation::new(&SimConfig {
            black_hole: true,
            ..cfg
        })
        .expect("black hole build");
        assert_eq!(plain.asteroids(), with_hole.asteroids());
    }

    #[test]
    fn mass_tweak_scales_jupiter_without_touching_the_table() {
        let tweaked = Simulation::new(&SimConfig {
            mass_tweak: true,
            ..config(0)
        })
        .expect("solar system builds");
        let table = PlanetarySystem::Solar.info().bodies;
        assert!(tweaked.summary().mass_tweak);
        assert_eq!(tweaked.bodies()[5].mass, table[5].mass * MASS_TWEAK_FACTOR);

        let plain = Simulation::new(&config(0)).expect("solar system builds");
        assert_eq!(plain.bodies()[5].mass, table[5].mass);
    }

    #[test]
    fn mass_tweak_is_ignored_without_a_giant_planet() {
        let sim = Simulation::new(&SimConfig {
            system: PlanetarySystem::AlphaCentauri,
            mass_tweak: true,
            ..config(0)
        })
        .expect("alpha centauri builds");
        assert!(!sim.summary().mass_tweak);
        let table = PlanetarySystem::AlphaCentauri.info().bodies;
        for (body, entry) in sim.bodies().iter().zip(table) {
            assert_eq!(body.mass, entry.mass);
        }
    }

    #[test]
    fn unknown_system_name_builds_the_solar_system() {
        let sim = Simulation::new(&SimConfig {
            system: PlanetarySystem::from_name("ORION"),
            ..config(0)
        })
        .expect("fallback builds");
        assert_eq!(sim.summary().system, PlanetarySystem::Solar);
        assert_eq!(sim.body_num_core(), 9);
    }

    #[test]
    fn impossible_allocation_is_an_error() {
        let result = Simulation::new(&config(usize::MAX));
        assert!(matches!(
            result,
            Err(SimulationError::Allocation { requested: usize::MAX, .. })
        ));
    }

    #[test]
    fn invalid_rates_are_rejected() {
        let result = Simulation::new(&SimConfig {
            days_per_second: 0.0,
            ..config(0)
        });
        assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));

        let result = Simulation::new(&SimConfig {
            reference_fps: f32::NAN,
            ..config(0)
        });
        assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn core_momentum_is_conserved_without_asteroids() {
        let mut sim = Simulation::new(&config(0)).expect("solar system builds");
        let (before, scale) = total_momentum(sim.core_bodies());
        sim.step();
        let (after, _) = total_momentum(sim.core_bodies());
        assert!(
            (after - before).length() <= scale * 1e-5,
            "momentum drifted from {before:?} to {after:?}"
        );
    }

    #[test]
    fn total_momentum_is_conserved_with_asteroids() {
        let mut sim = Simulation::new(&SimConfig {
            black_hole: true,
            ..config(300)
        })
        .expect("solar system builds");
        let (before, scale) = total_momentum(sim.bodies());
        sim.step();
        let (after, _) = total_momentum(sim.bodies());
        assert!(
            (after - before).length() <= scale * 1e-5,
            "momentum drifted from {before:?} to {after:?}"
        );
    }

    #[test]
    fn earth_step_matches_two_body_reduction() {
        let mut sim = Simulation::new(&config(0)).expect("solar system builds");
        let dt = sim.time_step();
        assert_eq!(dt, 100.0 * 86_400.0 / 60.0);

        let sun = sim.bodies()[0];
        let earth = sim.bodies()[3];
        let offset = (earth.position - sun.position).as_dvec3();
        let accel = -offset * (f64::from(GRAVITATIONAL_CONSTANT) * f64::from(sun.mass))
            / offset.length().powi(3);
        let dt64 = f64::from(dt);
        let expected_velocity = earth.velocity.as_dvec3() + accel * dt64;
        let expected_position = earth.position.as_dvec3() + expected_velocity * dt64;

        sim.step();
        let stepped = sim.bodies()[3];

        let dv = (stepped.velocity.as_dvec3() - earth.velocity.as_dvec3()).length();
        let dv_error = (stepped.velocity.as_dvec3() - expected_velocity).length();
        assert!(dv_error <= dv * 1e-2, "velocity off by {dv_error} of {dv}");

        let displacement = (expected_position - earth.position.as_dvec3()).length();
        let error = (stepped.position.as_dvec3() - expected_position).length();
        assert!(error <= displacement * 1e-3, "position off by {error} of {displacement}");
        assert_eq!(sim.time(), f64::from(dt));
    }

    #[test]
    fn steps_never_change_the_body_counts() {
        let mut sim = Simulation::new(&SimConfig {
            black_hole: true,
            ..config(100)
        })
        .expect("solar system builds");
        for _ in 0..5 {
            sim.advance(30.0);
            assert_eq!(sim.body_num(), 110);
            assert_eq!(sim.body_num_core(), 10);
            assert!(sim.body_num_core() <= sim.body_num());
        }
    }
}
