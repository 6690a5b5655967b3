use crate::consts::{ORBIT_RADIUS, PROFILE_PAGE_SIZE, VERTICAL_JITTER};
use crate::error::{GalaxyError, GxResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Orbit parameters for the galaxy view. Defaults are the production values.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    #[arg(long, default_value_t = ORBIT_RADIUS)]
    pub orbit_radius: f64,

    /// Planets are lifted or sunk by up to this much on the y axis.
    #[arg(long, default_value_t = VERTICAL_JITTER)]
    pub vertical_jitter: f64,

    /// Rendering cost cap; records past this index are dropped, not ranked.
    #[arg(long, default_value_t = PROFILE_PAGE_SIZE)]
    pub max_planets: usize,

    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            orbit_radius: ORBIT_RADIUS,
            vertical_jitter: VERTICAL_JITTER,
            max_planets: PROFILE_PAGE_SIZE,
            seed: None,
        }
    }
}

impl GalaxyConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GxResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GalaxyError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects parameters that can only come from a programming error.
    pub fn validate(&self) -> GxResult<()> {
        if !self.orbit_radius.is_finite() || self.orbit_radius < 0.0 {
            return Err(GalaxyError::InvalidParameter {
                name: "orbit_radius",
                value: self.orbit_radius.to_string(),
            });
        }
        if !self.vertical_jitter.is_finite() || self.vertical_jitter < 0.0 {
            return Err(GalaxyError::InvalidParameter {
                name: "vertical_jitter",
                value: self.vertical_jitter.to_string(),
            });
        }
        Ok(())
    }

    /// Applies only the flags the user actually typed, so file values win over clap defaults.
    pub fn merge_from_cli(&mut self, cli: &GalaxyConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(orbit_radius, "orbit_radius");
        update_if_present!(vertical_jitter, "vertical_jitter");
        update_if_present!(max_planets, "max_planets");
        update_if_present!(seed, "seed");
    }
}
