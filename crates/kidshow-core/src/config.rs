//! Tunable defaults for classification and catalog browsing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::age_bucket::AgeBucket;
use crate::classifier::Classifier;
use crate::error::{CatalogError, Result};
use crate::show::{StimulationLevel, TraitDefaults};

/// Default number of shows in the homepage sample.
pub const DEFAULT_HOMEPAGE_SAMPLE_SIZE: usize = 6;

/// Catalog configuration.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoutConfig {
    /// Number of shows in the homepage sample.
    pub homepage_sample_size: usize,
    /// Fallbacks for missing show attributes.
    pub defaults: TraitDefaults,
    /// Age buckets offered for filtering.
    pub age_buckets: Vec<AgeBucket>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            homepage_sample_size: DEFAULT_HOMEPAGE_SAMPLE_SIZE,
            defaults: TraitDefaults::default(),
            age_buckets: AgeBucket::defaults(),
        }
    }
}

impl ScoutConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Self::from_json_str(&json)
    }

    /// Sets the homepage sample size.
    pub fn with_homepage_sample_size(mut self, size: usize) -> Self {
        self.homepage_sample_size = size;
        self
    }

    /// Sets the default safe-above age.
    pub fn with_safe_above_age(mut self, age: f64) -> Self {
        self.defaults.safe_above_age = age;
        self
    }

    /// Sets the default stimulation level.
    pub fn with_stimulation(mut self, level: StimulationLevel) -> Self {
        self.defaults.stimulation = level;
        self
    }

    /// Replaces the age bucket table.
    pub fn with_age_buckets(mut self, buckets: Vec<AgeBucket>) -> Self {
        self.age_buckets = buckets;
        self
    }

    /// Returns a classifier using these defaults.
    pub fn classifier(&self) -> Classifier {
        Classifier::with_defaults(self.defaults)
    }

    /// Finds an age bucket by label.
    pub fn bucket(&self, label: &str) -> Option<&AgeBucket> {
        AgeBucket::find(&self.age_buckets, label)
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        let age = self.defaults.safe_above_age;
        if !age.is_finite() || age < 0.0 {
            return Err(CatalogError::Config(format!(
                "safe-above age must be a non-negative number, got {age}"
            )));
        }

        for (i, bucket) in self.age_buckets.iter().enumerate() {
            if bucket.label.trim().is_empty() {
                return Err(CatalogError::Config(format!("age bucket {i} has an empty label")));
            }
            if bucket.min.is_nan() || bucket.max.is_nan() || bucket.min > bucket.max {
                return Err(CatalogError::Config(format!(
                    "age bucket '{}' has min {} above max {}",
                    bucket.label, bucket.min, bucket.max
                )));
            }
            if self.age_buckets[..i].iter().any(|b| b.label == bucket.label) {
                return Err(CatalogError::Config(format!(
                    "duplicate age bucket '{}'",
                    bucket.label
                )));
            }
        }

        Ok(())
    }
}
