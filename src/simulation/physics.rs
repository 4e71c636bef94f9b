use bevy::prelude::*;

use crate::components::Body;
use crate::resources::{GRAVITATIONAL_CONSTANT, MIN_SEPARATION};

/// Recomputes every body's acceleration with core bodies as the only sources.
///
/// Bodies `[0, body_num_core)` pull on everything after them and receive the
/// equal and opposite pull back, so each pair is visited once and the cost is
/// `O(body_num_core * bodies.len())`. Asteroid-asteroid pairs are skipped.
pub fn accumulate_gravity(bodies: &mut [Body], body_num_core: usize) {
    for body in bodies.iter_mut() {
        body.acceleration = Vec3::ZERO;
    }

    for i in 0..body_num_core.min(bodies.len()) {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let source = &mut head[i];

        for target in tail {
            let delta = source.position - target.position;
            let len = delta.length().max(MIN_SEPARATION);
            let direction = delta / len;
            // G / len first keeps intermediates out of f32 subnormals at interstellar range.
            let pull = GRAVITATIONAL_CONSTANT / len;

            source.acceleration -= direction * (pull * target.mass / len);
            target.acceleration += direction * (pull * source.mass / len);
        }
    }
}

/// Semi-implicit Euler: velocity first, then position with the new velocity.
pub fn integrate(bodies: &mut [Body], dt: f32) {
    for body in bodies.iter_mut() {
        body.velocity += body.acceleration * dt;
        body.position += body.velocity * dt;
    }
}

/// Advances all bodies by `dt` seconds.
pub fn step(bodies: &mut [Body], body_num_core: usize, dt: f32) {
    accumulate_gravity(bodies, body_num_core);
    integrate(bodies, dt);
}
