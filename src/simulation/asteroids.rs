use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::components::Body;
use crate::resources::{
    ASTEROID_MASS, ASTEROID_RADIUS, ASTEROIDS_MEAN_RADIUS, AsteroidColors, AsteroidSpawn,
    GRAVITATIONAL_CONSTANT, MIN_SEPARATION,
};

/// Gray used for asteroids outside party mode.
const ASTEROID_GRAY: Color = Color::srgb(130.0 / 255.0, 130.0 / 255.0, 130.0 / 255.0);
/// Alpha of party-mode asteroids.
const PARTY_ALPHA: u8 = 126;

/// Places one asteroid on a roughly circular orbit around `center_mass`.
///
/// The radius follows a logit distribution mapped through disk point picking
/// (<https://mathworld.wolfram.com/DiskPointPicking.html>), so asteroids crowd
/// around [`ASTEROIDS_MEAN_RADIUS`] with a heavy tail. The tangential speed is
/// the circular orbit speed for that radius scaled by `U(0.6, 1.2)`, plus a
/// small out-of-plane component.
pub fn place_asteroid<R: Rng>(
    rng: &mut R,
    center_mass: f32,
    colors: AsteroidColors,
    spawn: AsteroidSpawn,
) -> Body {
    // Zero is excluded so ln(x) stays finite.
    let x: f32 = rng.random_range(f32::MIN_POSITIVE..1.0);
    let l = x.ln() - (1.0 - x).ln() + 1.0;

    let r = (ASTEROIDS_MEAN_RADIUS * l.abs().sqrt()).max(MIN_SEPARATION);
    let mut phi: f32 = rng.random_range(0.0..TAU);
    if spawn == AsteroidSpawn::Aligned {
        phi = 0.0;
    }

    let v = (GRAVITATIONAL_CONSTANT * center_mass / r).sqrt() * rng.random_range(0.6..1.2);
    let vy = rng.random_range(-1e2..1e2);

    let color = match colors {
        AsteroidColors::Gray => ASTEROID_GRAY,
        AsteroidColors::Party => {
            Color::srgba_u8(rng.random(), rng.random(), rng.random(), PARTY_ALPHA)
        }
    };

    let (sin_phi, cos_phi) = phi.sin_cos();
    Body {
        position: Vec3::new(r * cos_phi, 0.0, r * sin_phi),
        velocity: Vec3::new(-v * sin_phi, vy, v * cos_phi),
        acceleration: Vec3::ZERO,
        mass: ASTEROID_MASS,
        radius: ASTEROID_RADIUS,
        color,
    }
}
