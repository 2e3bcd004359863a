use crate::constants::*;
use crate::error::FieldError;

/// Tunables for one field instance. `Default` uses the reference values.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub palette: &'static [Hue],
    pub radius_min: f32,
    pub radius_spread: f32,
    pub connect_distance: f32,
    pub max_edges: usize,
    pub camera_smoothing: f32,
    pub min_viewport_width: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: FIELD_COUNT,
            palette: FIELD_PALETTE,
            radius_min: RADIUS_MIN,
            radius_spread: RADIUS_SPREAD,
            connect_distance: CONNECT_DISTANCE,
            max_edges: MAX_EDGES,
            camera_smoothing: CAMERA_SMOOTHING,
            min_viewport_width: MIN_VIEWPORT_WIDTH,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.count == 0 {
            return Err(FieldError::EmptyField);
        }
        if self.count > MAX_FIELD_COUNT {
            return Err(FieldError::FieldTooLarge(self.count, MAX_FIELD_COUNT));
        }
        if self.palette.is_empty() {
            return Err(FieldError::EmptyPalette);
        }
        if !self.radius_min.is_finite() || self.radius_min < 0.0 {
            return Err(FieldError::InvalidRadius(self.radius_min));
        }
        if !self.radius_spread.is_finite() || self.radius_spread <= 0.0 {
            return Err(FieldError::InvalidSpread(self.radius_spread));
        }
        if !self.connect_distance.is_finite() || self.connect_distance <= 0.0 {
            return Err(FieldError::InvalidConnectDistance(self.connect_distance));
        }
        if !(self.camera_smoothing > 0.0 && self.camera_smoothing <= 1.0) {
            return Err(FieldError::InvalidSmoothing(self.camera_smoothing));
        }
        if !self.min_viewport_width.is_finite() || self.min_viewport_width < 0.0 {
            return Err(FieldError::InvalidMinWidth(self.min_viewport_width));
        }
        Ok(())
    }
}
