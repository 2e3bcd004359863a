//! Optional `data-*` overrides read from the canvas element.
//!
//! Each override is applied only if the resulting configuration still
//! validates; anything else is logged and the previous value kept.

use field_core::FieldConfig;
use std::str::FromStr;

pub const ATTR_COUNT: &str = "data-count";
pub const ATTR_MAX_EDGES: &str = "data-max-edges";
pub const ATTR_CONNECT_DISTANCE: &str = "data-connect-distance";
pub const ATTR_MIN_WIDTH: &str = "data-min-width";

pub fn apply_overrides(
    config: FieldConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> FieldConfig {
    let mut config = config;
    if let Some(v) = parse_attr::<usize>(&lookup, ATTR_COUNT) {
        config = accept(config, ATTR_COUNT, |c| c.count = v);
    }
    if let Some(v) = parse_attr::<usize>(&lookup, ATTR_MAX_EDGES) {
        config = accept(config, ATTR_MAX_EDGES, |c| c.max_edges = v);
    }
    if let Some(v) = parse_attr::<f32>(&lookup, ATTR_CONNECT_DISTANCE) {
        config = accept(config, ATTR_CONNECT_DISTANCE, |c| c.connect_distance = v);
    }
    if let Some(v) = parse_attr::<f64>(&lookup, ATTR_MIN_WIDTH) {
        config = accept(config, ATTR_MIN_WIDTH, |c| c.min_viewport_width = v);
    }
    config
}

fn parse_attr<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, attr: &str) -> Option<T> {
    let raw = lookup(attr)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {}={:?}: not a number", attr, raw);
            None
        }
    }
}

fn accept(config: FieldConfig, attr: &str, edit: impl FnOnce(&mut FieldConfig)) -> FieldConfig {
    let mut candidate = config.clone();
    edit(&mut candidate);
    match candidate.validate() {
        Ok(()) => candidate,
        Err(e) => {
            log::warn!("[config] ignoring {}: {}", attr, e);
            config
        }
    }
}
