//! Catalog filtering by search term, age bucket, and stimulation level.
//!
//! ## Evaluation Order
//!
//! 1. Every show is classified once, with the viewer age passed through
//! 2. Search term: case-insensitive substring of the title (title only)
//! 3. Age bucket: show range must overlap the bucket, skipped for "All Ages"
//! 4. Stimulation: resolved level must equal the requested one, skipped for All
//!
//! Output keeps catalog order. The unfiltered homepage view is handled by
//! [`crate::Catalog::filter`].

use serde::{Deserialize, Serialize};

use crate::age_bucket::AgeBucket;
use crate::classifier::{ClassifiedShow, Classifier};
use crate::show::{Show, StimulationLevel};

/// Stimulation selection, "All" disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StimulationFilter {
    /// Any stimulation level.
    #[default]
    All,
    /// Only shows at this level.
    #[serde(untagged)]
    Level(StimulationLevel),
}

impl StimulationFilter {
    /// Returns the selectable options in display order.
    pub fn options() -> Vec<StimulationFilter> {
        std::iter::once(StimulationFilter::All)
            .chain(StimulationLevel::all().iter().copied().map(StimulationFilter::Level))
            .collect()
    }

    /// Returns true if this filter restricts results.
    pub fn is_active(&self) -> bool {
        !matches!(self, StimulationFilter::All)
    }

    /// Returns true if a show at `level` passes.
    pub fn matches(&self, level: StimulationLevel) -> bool {
        match self {
            StimulationFilter::All => true,
            StimulationFilter::Level(wanted) => *wanted == level,
        }
    }

    /// Returns the option name.
    pub fn name(&self) -> &'static str {
        match self {
            StimulationFilter::All => "All",
            StimulationFilter::Level(level) => level.name(),
        }
    }

    /// Returns the pill label, e.g. "All Stimulation".
    pub fn label(&self) -> String {
        format!("{} Stimulation", self.name())
    }
}

impl From<StimulationLevel> for StimulationFilter {
    fn from(level: StimulationLevel) -> Self {
        StimulationFilter::Level(level)
    }
}

/// Filter state for one catalog query.
///
/// Rebuilt by the caller on every interaction and passed by reference; the
/// core keeps no filter state of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Title search text; empty disables the search filter.
    pub search_term: String,
    /// Selected age bucket; `None` behaves like "All Ages".
    pub age_bucket: Option<AgeBucket>,
    /// Selected stimulation level.
    pub stimulation: StimulationFilter,
    /// Age of the viewer, used to lift Caution on intense shows.
    pub viewer_age: Option<f64>,
}

impl FilterCriteria {
    /// Creates criteria that match the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Sets the age bucket.
    pub fn with_age_bucket(mut self, bucket: AgeBucket) -> Self {
        self.age_bucket = Some(bucket);
        self
    }

    /// Sets the stimulation filter.
    pub fn with_stimulation(mut self, stimulation: impl Into<StimulationFilter>) -> Self {
        self.stimulation = stimulation.into();
        self
    }

    /// Sets the viewer age.
    pub fn with_viewer_age(mut self, age: f64) -> Self {
        self.viewer_age = Some(age);
        self
    }

    /// Returns the search term, or `None` when empty.
    pub fn search(&self) -> Option<&str> {
        (!self.search_term.is_empty()).then_some(self.search_term.as_str())
    }

    /// Returns the age bucket if it restricts results.
    pub fn active_bucket(&self) -> Option<&AgeBucket> {
        self.age_bucket.as_ref().filter(|b| !b.is_all_ages())
    }

    /// Returns true when no filter is active (the homepage view).
    pub fn is_homepage(&self) -> bool {
        self.search().is_none() && self.active_bucket().is_none() && !self.stimulation.is_active()
    }
}

/// Applies [`FilterCriteria`] to a list of shows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CatalogFilter {
    classifier: Classifier,
}

impl CatalogFilter {
    /// Creates a filter with the standard classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter around a configured classifier.
    pub fn with_classifier(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Returns the classifier used for every show.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classifies `shows` and keeps those matching every active criterion.
    pub fn apply(&self, shows: &[Show], criteria: &FilterCriteria) -> Vec<ClassifiedShow> {
        let needle = criteria.search().map(str::to_lowercase);
        let bucket = criteria.active_bucket();

        let results: Vec<ClassifiedShow> = shows
            .iter()
            .map(|show| self.classifier.classify(show, criteria.viewer_age))
            .filter(|c| match &needle {
                Some(needle) => c.show.title.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .filter(|c| bucket.map_or(true, |b| b.overlaps(c.show.min_age, c.show.max_age)))
            .filter(|c| criteria.stimulation.matches(self.classifier.resolve(&c.show).stimulation))
            .collect();

        tracing::debug!(
            "Filtered {} shows to {} (search: {:?}, bucket: {:?}, stimulation: {})",
            shows.len(),
            results.len(),
            criteria.search(),
            bucket.map(|b| b.label.as_str()),
            criteria.stimulation.name()
        );

        results
    }
}

/// Classifies `shows` and filters them by `criteria` with standard defaults.
pub fn filter_catalog(shows: &[Show], criteria: &FilterCriteria) -> Vec<ClassifiedShow> {
    CatalogFilter::new().apply(shows, criteria)
}
