//! Compiled-in initial states for the selectable planetary systems.
//!
//! Positions and velocities are in metres and metres per second, expressed in
//! simulation space where `y` is "up" and orbits run in the `x`/`z` plane.
//! The solar system table is the state at 2022-01-01 00:00 UTC.

use bevy::prelude::*;

/// Initial state of one celestial body.
#[derive(Clone, Copy, Debug)]
pub struct EphemeridesBody {
    pub name: &'static str,
    pub mass: f32,
    pub radius: f32,
    /// sRGB display color.
    pub color: [u8; 3],
    pub position: Vec3,
    pub velocity: Vec3,
}

/// A named planetary system that can be simulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlanetarySystem {
    #[default]
    Solar,
    AlphaCentauri,
}

impl PlanetarySystem {
    pub const ALL: [PlanetarySystem; 2] = [PlanetarySystem::Solar, PlanetarySystem::AlphaCentauri];

    /// Resolves a system by name. Unknown names fall back to [`PlanetarySystem::Solar`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "solar" => PlanetarySystem::Solar,
            "alphacentauri" => PlanetarySystem::AlphaCentauri,
            other => {
                warn!("unknown planetary system {other:?}, falling back to Solar");
                PlanetarySystem::default()
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlanetarySystem::Solar => "Solar",
            PlanetarySystem::AlphaCentauri => "Alpha Centauri",
        }
    }

    pub fn info(self) -> &'static SystemInfo {
        match self {
            PlanetarySystem::Solar => &SOLAR_SYSTEM,
            PlanetarySystem::AlphaCentauri => &ALPHA_CENTAURI_SYSTEM,
        }
    }
}

/// Static description of a planetary system.
#[derive(Debug)]
pub struct SystemInfo {
    /// Bodies in core order. Index 0 is the dominant mass.
    pub bodies: &'static [EphemeridesBody],
    /// Index of the body affected by the mass tweak, if the system has one.
    pub giant_planet: Option<usize>,
    /// A black hole is placed at `bodies[a] - bodies[b]` (position and velocity).
    pub black_hole_anchors: (usize, usize),
}

impl SystemInfo {
    pub fn body_num(&self) -> usize {
        self.bodies.len()
    }
}

pub static SOLAR_SYSTEM: SystemInfo = SystemInfo {
    bodies: &SOLAR_BODIES,
    giant_planet: Some(5),
    black_hole_anchors: (3, 6),
};

pub static ALPHA_CENTAURI_SYSTEM: SystemInfo = SystemInfo {
    bodies: &ALPHA_CENTAURI_BODIES,
    giant_planet: None,
    black_hole_anchors: (0, 1),
};

static SOLAR_BODIES: [EphemeridesBody; 9] = [
    EphemeridesBody {
        name: "Sun",
        mass: 1.988470e30,
        radius: 6.9570e8,
        color: [255, 203, 0],
        position: Vec3::new(-1.284824e9, 2.590829e7, 5.011527e8),
        velocity: Vec3::new(-5.817954, 2.514913e-1, -1.462580e1),
    },
    EphemeridesBody {
        name: "Mercury",
        mass: 3.301100e23,
        radius: 2.4397e6,
        color: [130, 130, 130],
        position: Vec3::new(5.370249e10, -5.427002e9, -6.095028e9),
        velocity: Vec3::new(-3.925984e3, 4.492858e3, 5.058807e4),
    },
    EphemeridesBody {
        name: "Venus",
        mass: 4.867500e24,
        radius: 6.0518e6,
        color: [211, 176, 131],
        position: Vec3::new(-1.014726e10, 2.049610e9, 1.071166e11),
        velocity: Vec3::new(-3.498470e4, 1.971654e3, -3.492549e3),
    },
    EphemeridesBody {
        name: "Earth",
        mass: 5.972370e24,
        radius: 6.3710e6,
        color: [0, 121, 241],
        position: Vec3::new(-2.614386e10, -3.868106e4, 1.447591e11),
        velocity: Vec3::new(-2.980023e4, 1.444492e-3, -5.405831e3),
    },
    EphemeridesBody {
        name: "Mars",
        mass: 6.417100e23,
        radius: 3.3895e6,
        color: [230, 41, 55],
        position: Vec3::new(-1.296320e11, -7.892623e8, -1.897765e11),
        velocity: Vec3::new(2.092229e4, -7.570757e2, -1.159221e4),
    },
    EphemeridesBody {
        name: "Jupiter",
        mass: 1.898190e27,
        radius: 6.9911e7,
        color: [255, 161, 0],
        position: Vec3::new(6.968912e11, -1.448959e10, -2.691753e11),
        velocity: Vec3::new(4.548635e3, -1.548848e2, 1.281336e4),
    },
    EphemeridesBody {
        name: "Saturn",
        mass: 5.683400e26,
        radius: 5.8232e7,
        color: [127, 106, 79],
        position: Vec3::new(1.040781e12, -2.301299e10, -1.054501e12),
        velocity: Vec3::new(6.346215e3, -3.701790e2, 6.761393e3),
    },
    EphemeridesBody {
        name: "Uranus",
        mass: 8.681300e25,
        radius: 2.5362e7,
        color: [102, 191, 255],
        position: Vec3::new(2.152496e12, -2.041726e10, 2.016737e12),
        velocity: Vec3::new(-4.704065e3, 7.825287e1, 4.649851e3),
    },
    EphemeridesBody {
        name: "Neptune",
        mass: 1.024130e26,
        radius: 2.4622e7,
        color: [0, 82, 172],
        position: Vec3::new(4.431967e12, -8.953800e10, -6.113241e11),
        velocity: Vec3::new(7.065232e2, -1.277407e2, 5.412939e3),
    },
];

static ALPHA_CENTAURI_BODIES: [EphemeridesBody; 3] = [
    EphemeridesBody {
        name: "Alpha Centauri A",
        mass: 2.145161e30,
        radius: 8.5140e8,
        color: [253, 249, 0],
        position: Vec3::new(2.377513e12, 3.062469e11, 5.841973e10),
        velocity: Vec3::new(-6.047708e2, 2.163932e3, 4.127920e2),
    },
    EphemeridesBody {
        name: "Alpha Centauri B",
        mass: 1.807917e30,
        radius: 6.0190e8,
        color: [255, 161, 0],
        position: Vec3::new(-2.821009e12, -3.633735e11, -6.931720e10),
        velocity: Vec3::new(7.175833e2, -2.567586e3, -4.897933e2),
    },
    EphemeridesBody {
        name: "Proxima Centauri",
        mass: 2.427922e29,
        radius: 1.0737e8,
        color: [190, 33, 55],
        position: Vec3::new(1.050765e15, 0.0, 1.636469e15),
        velocity: Vec3::new(-3.099384e2, 0.0, 1.990091e2),
    },
];
