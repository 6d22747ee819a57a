//! Scenario configuration
//!
//! Scenario defaults come from a YAML file holding a `ScenarioInputs`
//! (fractions, not percent), optionally overridden from the command line.
//! Files are only ever read: nothing is written back.

use std::fs;
use std::path::{Path, PathBuf};

use splitsim_core::ScenarioInputs;

/// Name of the scenario file inside the data directory
pub const SCENARIO_FILE: &str = "scenario.yaml";

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Default scenario file location for a data directory
pub fn scenario_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SCENARIO_FILE)
}

/// Parse scenario inputs from YAML. Missing fields take their defaults.
pub fn parse_scenario(yaml: &str) -> Result<ScenarioInputs, ConfigError> {
    if yaml.trim().is_empty() {
        return Ok(ScenarioInputs::default());
    }
    serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Load scenario inputs from `path`, or the defaults if it does not exist.
///
/// Values are not range-checked here.
pub fn load_scenario(path: &Path) -> Result<ScenarioInputs, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No scenario file, using defaults");
        return Ok(ScenarioInputs::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let inputs = parse_scenario(&content)?;
    tracing::info!(path = %path.display(), ?inputs, "Loaded scenario");
    Ok(inputs)
}

/// Command-line overrides, in the same units as the sliders
/// (dominance, fee and highlight in percent).
#[derive(Debug, Clone, Default)]
pub struct ScenarioOverrides {
    pub primary_holdings: Option<f64>,
    pub total_supply: Option<f64>,
    pub pool_dominance_pct: Option<f64>,
    pub venue_fee_pct: Option<f64>,
    pub highlight_split_pct: Option<f64>,
    pub resolution: Option<usize>,
}

impl ScenarioOverrides {
    #[must_use]
    pub fn apply(&self, inputs: &ScenarioInputs) -> ScenarioInputs {
        let mut inputs = *inputs;
        if let Some(value) = self.primary_holdings {
            inputs.primary_holdings = value;
        }
        if let Some(value) = self.total_supply {
            inputs.total_supply = value;
        }
        if let Some(pct) = self.pool_dominance_pct {
            inputs.pool_dominance = pct / 100.0;
        }
        if let Some(pct) = self.venue_fee_pct {
            inputs.venue_fee = pct / 100.0;
        }
        if let Some(pct) = self.highlight_split_pct {
            inputs.highlight_split = pct / 100.0;
        }
        if let Some(resolution) = self.resolution {
            inputs.resolution = resolution;
        }
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let inputs = load_scenario(&scenario_path(dir.path())).unwrap();
        assert_eq!(inputs, ScenarioInputs::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = scenario_path(dir.path());
        fs::write(&path, "pool_dominance: 0.5\nvenue_fee: 0.1\n").unwrap();

        let inputs = load_scenario(&path).unwrap();
        assert_eq!(inputs.pool_dominance, 0.5);
        assert_eq!(inputs.venue_fee, 0.1);
        assert_eq!(inputs.primary_holdings, 118.0);
        assert_eq!(inputs.resolution, 2000);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse_scenario("").unwrap(), ScenarioInputs::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let result = parse_scenario("venue_fee: [not, a, number]\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides_convert_percent() {
        let overrides = ScenarioOverrides {
            pool_dominance_pct: Some(50.0),
            venue_fee_pct: Some(10.0),
            highlight_split_pct: Some(25.0),
            resolution: Some(100),
            ..Default::default()
        };
        let inputs = overrides.apply(&ScenarioInputs::default());

        assert_eq!(inputs.pool_dominance, 0.5);
        assert_eq!(inputs.venue_fee, 0.1);
        assert_eq!(inputs.highlight_split, 0.25);
        assert_eq!(inputs.resolution, 100);
        assert_eq!(inputs.total_supply, 794.0);
    }
}
