use glam::Vec3;

// Shared tuning constants for the hero particle field, used by the web and native frontends.

// Field layout
pub const FIELD_COUNT: usize = 900;
pub const MAX_FIELD_COUNT: usize = 20_000; // pair scan is quadratic and runs on the UI thread
pub const RADIUS_MIN: f32 = 80.0; // inner shell radius
pub const RADIUS_SPREAD: f32 = 380.0; // shell thickness, so radii land in [80, 460)
pub const FIELD_Z_PULL: f32 = 100.0; // subtracted from z to pull the cloud toward the camera

// Particle sizing
pub const SCALE_MIN: f32 = 0.4;
pub const SCALE_SPAN: f32 = 2.2;

// Proximity graph
pub const CONNECT_DISTANCE: f32 = 60.0;
pub const MAX_EDGES: usize = 200;

// Animation rates (radians or units per second of elapsed time)
pub const YAW_RATE: f32 = 0.04;
pub const PITCH_RATE: f32 = 0.015;
pub const BOB_FREQUENCY: f32 = 0.3;
pub const BOB_AMPLITUDE: f32 = 5.0;

// Parallax
pub const CAMERA_SMOOTHING: f32 = 0.04; // per frame, not time-normalized
pub const PARALLAX_RANGE_X: f32 = 25.0;
pub const PARALLAX_RANGE_Y: f32 = 20.0;

// Environment gating
pub const MIN_VIEWPORT_WIDTH: f64 = 768.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Camera
pub const CAMERA_Z: f32 = 400.0;
pub const CAMERA_FOVY_DEGREES: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 2000.0;

// Materials
pub const POINT_WORLD_SIZE: f32 = 2.4; // world units per unit of particle scale
pub const POINT_OPACITY: f32 = 0.85;
pub const LINE_OPACITY: f32 = 0.35;

/// A palette entry. Colors are normalized linear RGB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hue {
    pub name: &'static str,
    pub rgb: [f32; 3],
}

pub const PRIMARY_HUE: Hue = Hue {
    name: "indigo",
    rgb: [0.39, 0.40, 0.95],
};

// The primary hue appears twice so it is drawn twice as often as the others.
pub const FIELD_PALETTE: &[Hue] = &[
    PRIMARY_HUE,
    PRIMARY_HUE,
    Hue {
        name: "violet",
        rgb: [0.55, 0.36, 0.96],
    },
    Hue {
        name: "cyan",
        rgb: [0.02, 0.71, 0.83],
    },
    Hue {
        name: "sky",
        rgb: [0.22, 0.74, 0.97],
    },
    Hue {
        name: "fuchsia",
        rgb: [0.85, 0.27, 0.94],
    },
    Hue {
        name: "slate",
        rgb: [0.80, 0.84, 0.90],
    },
];

#[inline]
pub fn field_center() -> Vec3 {
    Vec3::new(0.0, 0.0, -FIELD_Z_PULL)
}
