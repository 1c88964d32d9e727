//! Centralized interaction options with TOML preset support.
//!
//! Every tweakable constant (drag sensitivity, friction, idle motion,
//! breakpoints, scroll effects) is consolidated here. Options serialize
//! to/from TOML so a page can ship tuned presets next to its model asset.

mod controller;
mod idle;
mod layout;
mod page;

use std::path::Path;

pub use controller::ControllerOptions;
pub use idle::IdleOptions;
pub use layout::{LayoutOptions, Placement};
pub use page::PageOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ToqueError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controller]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Drag rotation and inertia parameters.
    pub controller: ControllerOptions,
    /// Idle bob, pulse and wobble parameters.
    pub idle: IdleOptions,
    /// Responsive placement buckets.
    pub layout: LayoutOptions,
    /// Intro overlay and parallax parameters.
    pub page: PageOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// The parsed values are checked with [`Options::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self, ToqueError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| ToqueError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values the interaction math cannot run with: NaN or
    /// infinite numbers, a negative scroll ratio, friction outside
    /// `[0, 1]` and negative thresholds or scales.
    pub fn validate(&self) -> Result<(), ToqueError> {
        let c = &self.controller;
        let i = &self.idle;
        let l = &self.layout;
        let floats = [
            ("controller.rotate_speed", c.rotate_speed),
            ("controller.pitch_limit", c.pitch_limit),
            ("controller.scroll_ratio", c.scroll_ratio),
            ("controller.friction", c.friction),
            ("controller.rest_epsilon", c.rest_epsilon),
            ("controller.auto_rotate_speed", c.auto_rotate_speed),
            ("controller.auto_rotate_threshold", c.auto_rotate_threshold),
            ("idle.bob_amplitude", i.bob_amplitude),
            ("idle.bob_frequency", i.bob_frequency),
            ("idle.pulse_amplitude", i.pulse_amplitude),
            ("idle.pulse_frequency", i.pulse_frequency),
            ("idle.wobble_amplitude", i.wobble_amplitude),
            ("idle.wobble_frequency", i.wobble_frequency),
            ("layout.breakpoint_px", l.breakpoint_px),
            ("layout.narrow.scale", l.narrow.scale),
            ("layout.narrow.base_offset_y", l.narrow.base_offset_y),
            ("layout.wide.scale", l.wide.scale),
            ("layout.wide.base_offset_y", l.wide.base_offset_y),
        ];
        for (name, value) in floats {
            check_finite(name, f64::from(value))?;
        }
        let p = &self.page;
        check_finite("page.fade_start_px", p.fade_start_px)?;
        check_finite("page.dismiss_fraction", p.dismiss_fraction)?;
        check_finite("page.parallax_factor", p.parallax_factor)?;

        if !(0.0..=1.0).contains(&c.friction) {
            return Err(invalid("controller.friction", "must be within [0, 1]"));
        }
        let non_negative = [
            ("controller.scroll_ratio", c.scroll_ratio),
            ("controller.rest_epsilon", c.rest_epsilon),
            ("controller.auto_rotate_threshold", c.auto_rotate_threshold),
            ("layout.narrow.scale", l.narrow.scale),
            ("layout.wide.scale", l.wide.scale),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(invalid(name, "must not be negative"));
            }
        }
        if p.dismiss_fraction <= 0.0 {
            return Err(invalid("page.dismiss_fraction", "must be positive"));
        }
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ToqueError> {
        let content = std::fs::read_to_string(path).map_err(ToqueError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ToqueError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ToqueError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ToqueError::Io)?;
        }
        std::fs::write(path, content).map_err(ToqueError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), ToqueError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, "must be a finite number"))
    }
}

fn invalid(name: &str, reason: &str) -> ToqueError {
    ToqueError::OptionsParse(format!("{name} {reason}"))
}
