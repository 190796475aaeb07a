//! Named age ranges used for coarse catalog filtering.

use serde::{Deserialize, Serialize};

/// Label of the bucket that disables age filtering.
pub const ALL_AGES_LABEL: &str = "All Ages";

/// Upper age that marks an open-ended range.
pub const OPEN_ENDED_MAX_AGE: f64 = 99.0;

/// A named inclusive age range in years.
///
/// Sub-year ages are fractions of a year (0.5 is six months).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBucket {
    /// Display label.
    pub label: String,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl AgeBucket {
    /// Creates a bucket.
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
        }
    }

    /// The bucket that matches every show.
    pub fn all_ages() -> Self {
        Self::new(ALL_AGES_LABEL, 0.0, OPEN_ENDED_MAX_AGE)
    }

    /// Returns true if this bucket disables age filtering.
    pub fn is_all_ages(&self) -> bool {
        self.label == ALL_AGES_LABEL
    }

    /// Returns true if `[min_age, max_age]` overlaps this bucket.
    pub fn overlaps(&self, min_age: f64, max_age: f64) -> bool {
        min_age <= self.max && max_age >= self.min
    }

    /// The standard bucket table, "All Ages" first.
    pub fn defaults() -> Vec<AgeBucket> {
        vec![
            Self::all_ages(),
            Self::new("3–5 mo", 0.25, 0.45),
            Self::new("6–8 mo", 0.5, 0.7),
            Self::new("9–12 mo", 0.75, 1.0),
            Self::new("1–2 yr", 1.0, 2.0),
            Self::new("2–3 yr", 2.0, 3.0),
            Self::new("3–4 yr", 3.0, 4.0),
            Self::new("5–6 yr", 5.0, 6.9),
            Self::new("7–9 yr", 7.0, 9.9),
            Self::new("10–12 yr", 10.0, 12.9),
        ]
    }

    /// Finds a bucket by label.
    pub fn find<'a>(buckets: &'a [AgeBucket], label: &str) -> Option<&'a AgeBucket> {
        buckets.iter().find(|b| b.label == label)
    }
}

impl Default for AgeBucket {
    fn default() -> Self {
        Self::all_ages()
    }
}
