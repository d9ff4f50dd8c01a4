use crate::load_json;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BUDGET: u32 = 500;
pub const DEFAULT_MIN_DEFENSE: f64 = 1.0;
pub const DEFAULT_LIMIT: usize = 70;

/// Parameters for filtering a catalog and solving it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolveSettings {
    #[serde(default = "default_budget")]
    pub budget: u32,
    #[serde(default = "default_min_defense")]
    pub min_defense: f64,
    /// Falls back to the budget when unset.
    #[serde(default)]
    pub max_defense: Option<f64>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_budget() -> u32 {
    DEFAULT_BUDGET
}

fn default_min_defense() -> f64 {
    DEFAULT_MIN_DEFENSE
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for SolveSettings {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            min_defense: DEFAULT_MIN_DEFENSE,
            max_defense: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SolveSettings {
    pub fn max_defense(&self) -> f64 {
        self.max_defense.unwrap_or(self.budget as f64)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_defense.is_finite() || !self.max_defense().is_finite() {
            return Err(anyhow!("Defense range must be finite"));
        }
        if self.min_defense > self.max_defense() {
            return Err(anyhow!(
                "min_defense ({}) is greater than max_defense ({})",
                self.min_defense,
                self.max_defense()
            ));
        }
        Ok(())
    }
}

pub fn load_settings(source: &str) -> Result<SolveSettings> {
    let settings: SolveSettings = load_json(source)?;
    settings.validate()?;
    Ok(settings)
}
