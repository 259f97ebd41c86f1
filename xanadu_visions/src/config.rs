// Run configuration.
//
// `VisionConfig` holds the handful of knobs a run has: the seed, how many
// chain transitions to take, which concepts open the piece, and the range
// of the Poisson-process rate. Templates are compiled in and are not part
// of the configuration. Every field has a default, so an empty JSON object
// is a valid config and a run with no config file at all behaves the same
// as one with `{}`.
//
// Loaded by `main.rs` from `--config PATH`; consumed by `assembly.rs`.

use crate::concept::Concept;
use crate::error::{Result, VisionError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Seed for the run's `DreamRng`. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Number of Markov chain transitions to narrate.
    pub chain_steps: usize,
    /// Concepts described before the Poisson summary, in order.
    pub opening_concepts: Vec<String>,
    /// Lower bound (inclusive) of the Poisson-process rate.
    pub poisson_rate_min: f64,
    /// Upper bound (exclusive) of the Poisson-process rate.
    pub poisson_rate_max: f64,
}

impl Default for VisionConfig {
    fn default() -> Self {
        VisionConfig {
            seed: None,
            chain_steps: 5,
            opening_concepts: [Concept::Chaotic, Concept::Eigenvector, Concept::Homotopy]
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
            poisson_rate_min: 0.1,
            poisson_rate_max: 5.0,
        }
    }
}

impl VisionConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: VisionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn validate(&self) -> Result<()> {
        let (min, max) = (self.poisson_rate_min, self.poisson_rate_max);
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min >= max {
            return Err(VisionError::InvalidConfig(format!(
                "poisson rate range [{min}, {max}) must be finite, non-negative and non-empty"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_run() {
        let config = VisionConfig::default();
        assert_eq!(config.chain_steps, 5);
        assert_eq!(config.opening_concepts, ["chaotic", "eigenvector", "homotopy"]);
        assert!(config.seed.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(VisionConfig::from_json("{}").unwrap(), VisionConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = VisionConfig::from_json(r#"{"seed": 9, "chain_steps": 12}"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.chain_steps, 12);
        assert_eq!(config.poisson_rate_max, 5.0);
    }

    #[test]
    fn test_inverted_rate_range_rejected() {
        let err = VisionConfig::from_json(r#"{"poisson_rate_min": 3.0, "poisson_rate_max": 1.0}"#);
        assert!(matches!(err, Err(VisionError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            VisionConfig::from_json("{not json"),
            Err(VisionError::Json(_))
        ));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = VisionConfig {
            seed: Some(123),
            ..VisionConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(VisionConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = VisionConfig::load(Path::new("/nonexistent/xanadu/config.json"));
        assert!(matches!(err, Err(VisionError::Io(_))));
    }
}
