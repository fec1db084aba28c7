//! Runtime knobs for the engine.
//!
//! Every field defaults to the matching entry in [`crate::constants`]. The
//! frontend may override them from string pairs (it reads `data-fx-*`
//! attributes), which is why parsing lives here rather than in the DOM code.

use crate::constants::*;
use crate::error::ConfigError;
use std::str::FromStr;

/// Keys understood by [`EngineConfig::from_pairs`].
pub const CONFIG_KEYS: &[&str] = &[
    "burst",
    "drag",
    "glow-throttle-ms",
    "glow-diameter",
    "resize-debounce-ms",
    "max-particles",
];

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Particles spawned by a single pointer-down.
    pub burst_count: usize,
    /// Particles spawned per pointer-move while pressed.
    pub drag_count: usize,
    pub glow_throttle_ms: f64,
    pub glow_diameter: f32,
    pub resize_debounce_ms: f64,
    /// Hard cap on live particles. `None` keeps growth bounded only by decay.
    pub max_particles: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            burst_count: BURST_COUNT,
            drag_count: DRAG_COUNT,
            glow_throttle_ms: GLOW_THROTTLE_MS,
            glow_diameter: GLOW_DIAMETER,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            max_particles: None,
        }
    }
}

impl EngineConfig {
    /// Build a config from `(key, value)` overrides applied over the defaults.
    ///
    /// Unknown keys are ignored so the page can carry unrelated `data-fx-*`
    /// attributes. The result is validated before it is returned.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = Self::default();
        for (key, value) in pairs {
            match key {
                "burst" => cfg.burst_count = parse_value(key, value)?,
                "drag" => cfg.drag_count = parse_value(key, value)?,
                "glow-throttle-ms" => cfg.glow_throttle_ms = parse_value(key, value)?,
                "glow-diameter" => cfg.glow_diameter = parse_value(key, value)?,
                "resize-debounce-ms" => cfg.resize_debounce_ms = parse_value(key, value)?,
                "max-particles" => {
                    cfg.max_particles = match value.trim() {
                        "" | "none" => None,
                        _ => Some(parse_value(key, value)?),
                    }
                }
                _ => log::debug!("[config] ignoring unknown key {}", key),
            }
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_max_particles(mut self, max: usize) -> Self {
        self.max_particles = Some(max);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.glow_throttle_ms.is_finite() && self.glow_throttle_ms > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "glow-throttle-ms",
                reason: "must be a positive number of milliseconds",
            });
        }
        if !(self.resize_debounce_ms.is_finite() && self.resize_debounce_ms >= 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "resize-debounce-ms",
                reason: "must be zero or a positive number of milliseconds",
            });
        }
        if !(self.glow_diameter.is_finite() && self.glow_diameter > 0.0) {
            return Err(ConfigError::OutOfRange {
                key: "glow-diameter",
                reason: "must be a positive number of pixels",
            });
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Parse a CSS-ish number the way the page's `parseFloat(x) || default` does.
///
/// The longest leading numeric prefix wins (`"40%"` is 40, `"1.5px"` is 1.5).
/// Missing, unparsable, zero and non-finite values all yield `None`.
pub fn parse_css_number(raw: &str) -> Option<f32> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end == digits_start || &s[digits_start..end] == "." {
        return None;
    }
    // optional exponent, only taken when it is complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    s[..end]
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v != 0.0)
}
