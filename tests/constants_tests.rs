// Host-side checks for tuning constants and their relationships.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use field_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn shell_and_camera_are_consistent() {
    assert!(RADIUS_MIN > 0.0 && RADIUS_SPREAD > 0.0);
    // The whole shell sits in front of the camera and inside the far plane.
    let nearest = field_center().z + RADIUS_MIN + RADIUS_SPREAD;
    assert!(nearest < CAMERA_Z);
    let farthest = CAMERA_Z - (field_center().z - RADIUS_MIN - RADIUS_SPREAD);
    assert!(farthest < CAMERA_ZFAR);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rates_and_opacities_are_in_range() {
    assert!(CAMERA_SMOOTHING > 0.0 && CAMERA_SMOOTHING <= 1.0);
    assert!(YAW_RATE > PITCH_RATE && PITCH_RATE > 0.0);
    assert!(POINT_OPACITY > 0.0 && POINT_OPACITY <= 1.0);
    assert!(LINE_OPACITY > 0.0 && LINE_OPACITY < POINT_OPACITY);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
fn palette_weights_primary_hue_double() {
    assert_eq!(FIELD_PALETTE.len(), 7);
    let primary = FIELD_PALETTE.iter().filter(|h| **h == PRIMARY_HUE).count();
    assert_eq!(primary, 2);
    for h in FIELD_PALETTE {
        assert!(h.rgb.iter().all(|c| (0.0..=1.0).contains(c)), "{}", h.name);
    }
}

#[test]
fn default_config_validates() {
    let c = FieldConfig::default();
    assert_eq!(c.validate(), Ok(()));
    assert_eq!(c.count, 900);
    assert_eq!(c.max_edges, 200);
}

#[test]
fn validation_rejects_bad_values() {
    let base = FieldConfig::default();
    let cases = [
        (FieldConfig { palette: &[], ..base.clone() }, FieldError::EmptyPalette),
        (
            FieldConfig { radius_spread: 0.0, ..base.clone() },
            FieldError::InvalidSpread(0.0),
        ),
        (
            FieldConfig { camera_smoothing: 1.5, ..base.clone() },
            FieldError::InvalidSmoothing(1.5),
        ),
        (
            FieldConfig { radius_min: -1.0, ..base.clone() },
            FieldError::InvalidRadius(-1.0),
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
    }
}

#[test]
fn page_contract_names() {
    assert_eq!(CANVAS_ID, "hero-particles");
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
    assert!(!HOST_SELECTOR.is_empty());
}
