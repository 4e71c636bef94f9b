use bevy::prelude::*;

/// One simulated mass point.
///
/// Plain data: the physics stepper mutates `position`, `velocity` and
/// `acceleration`; everything else is fixed once the scenario is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Kilograms, always positive.
    pub mass: f32,
    /// Metres. Only used to scale the rendered sphere.
    pub radius: f32,
    pub color: Color,
}

/// Links a rendered entity to its index in the simulation's body store.
#[derive(Component, Clone, Copy, Deref)]
pub struct BodyIndex(pub usize);

/// Marks entities drawn as full spheres (stars, planets, black hole).
#[derive(Component)]
pub struct CoreBody;
