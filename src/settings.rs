//! Game settings
//!
//! Loaded from a JSON file named by `WORM_WARS_SETTINGS`; every field is
//! optional and falls back to the stock arcade values.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::consts::TICK_PERIOD_MS;
use crate::sim::{Color, Field, Rules, Spawn, default_spawns};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub field: Field,
    pub spawns: [Spawn; 2],
    /// Worm color while immune
    pub immune_color: Color,
    pub rules: Rules,

    // === Loop ===
    /// Nominal tick period; also the minimum gap between ticks
    pub tick_period_ms: u64,
    /// RNG seed for bonus placement
    pub seed: u64,

    // === Demo binary ===
    /// Stop the autopilot session after this many ticks (`null` runs forever)
    pub demo_ticks: Option<u64>,
    /// Scoreboard log interval in frames
    pub log_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field: Field::default(),
            spawns: default_spawns(),
            immune_color: Color::GREEN,
            rules: Rules::default(),

            tick_period_ms: TICK_PERIOD_MS,
            seed: 0x5eed,

            // One minute at the nominal rate
            demo_ticks: Some(1500),
            log_every: 25,
        }
    }
}

impl Settings {
    /// Environment variable holding the settings file path
    pub const PATH_ENV: &'static str = "WORM_WARS_SETTINGS";

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.field.width == 0 || self.field.height == 0 {
            bail!(
                "field must be non-empty, got {}x{}",
                self.field.width,
                self.field.height
            );
        }
        let rules = &self.rules;
        if !rules.max_speed.is_finite() || rules.max_speed <= 0.0 {
            bail!("max_speed must be positive, got {}", rules.max_speed);
        }
        for (name, value) in [
            ("acceleration", rules.acceleration),
            ("deceleration", rules.deceleration),
            ("turn_rate_deg", rules.turn_rate_deg),
            ("trail_sample_distance", rules.trail_sample_distance),
            ("pickup_tolerance", rules.pickup_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be finite and >= 0, got {}", name, value);
            }
        }
        for (name, secs) in [
            ("bonus_lifetime_secs", rules.bonus_lifetime_secs),
            ("immunity_secs", rules.immunity_secs),
        ] {
            if secs < 0.0 || Duration::try_from_secs_f64(secs).is_err() {
                bail!("{} must be a representable duration, got {}", name, secs);
            }
        }
        if self.tick_period_ms == 0 {
            bail!("tick_period_ms must be positive");
        }
        Ok(())
    }

    /// Parse and validate a settings file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&json)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        Ok(settings)
    }

    /// Load settings from the file named by `WORM_WARS_SETTINGS`
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(Self::PATH_ENV) {
            match Self::from_path(&path) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    return settings;
                }
                Err(err) => log::warn!("{:#}; using default settings", err),
            }
        } else {
            log::info!("Using default settings");
        }
        Self::default()
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing settings to {}", path.display()))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
