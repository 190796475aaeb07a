//! Loaded show catalog with a stable homepage sample.
//!
//! ## Homepage Sample
//!
//! When no filter is active the catalog shows a random selection of
//! non-Unsafe shows. The selection is drawn once when the catalog is
//! loaded and again only after an import changes the catalog, so repeated
//! queries return the same shows in the same order.
//!
//! ## Import
//!
//! Incoming records are matched to existing shows by id, then by
//! normalized title when exactly one existing show has that title. Matches
//! are replaced or skipped depending on `overwrite`; ambiguous titles are
//! skipped; everything else is appended.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classifier::ClassifiedShow;
use crate::config::ScoutConfig;
use crate::error::Result;
use crate::filter::{CatalogFilter, FilterCriteria};
use crate::show::Show;

/// Counts from a catalog import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Records appended as new shows.
    pub added: usize,
    /// Existing shows overwritten.
    pub replaced: usize,
    /// Records left out (existing match without overwrite, or ambiguous title).
    pub skipped: usize,
}

impl ImportSummary {
    /// Returns true if the catalog was modified.
    pub fn changed(&self) -> bool {
        self.added > 0 || self.replaced > 0
    }
}

/// Where an incoming record lands.
enum ImportTarget {
    Existing(usize),
    Ambiguous,
    New,
}

static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid title pattern"));

/// Lowercases a title and strips everything but ASCII letters and digits.
///
/// "Paw Patrol: The Movie" and "paw-patrol the movie" normalize the same.
pub fn normalize_title(title: &str) -> String {
    TITLE_PATTERN
        .replace_all(&title.to_lowercase(), "")
        .into_owned()
}

/// An in-memory show catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    shows: Vec<Show>,
    config: ScoutConfig,
    filter: CatalogFilter,
    /// Indices into `shows`, in sampled order.
    homepage: Vec<usize>,
}

impl Catalog {
    /// Creates a catalog and draws its homepage sample.
    ///
    /// `config` is used as given; call [`ScoutConfig::validate`] first for
    /// configs built in code. [`Catalog::from_json_str`] and
    /// [`Catalog::from_path`] validate it.
    pub fn new(shows: Vec<Show>, config: ScoutConfig) -> Self {
        Self::with_rng(shows, config, &mut rand::thread_rng())
    }

    /// Creates a catalog, drawing the homepage sample from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(shows: Vec<Show>, config: ScoutConfig, rng: &mut R) -> Self {
        let filter = CatalogFilter::with_classifier(config.classifier());
        let mut catalog = Self {
            shows,
            config,
            filter,
            homepage: Vec::new(),
        };
        catalog.resample(rng);
        catalog
    }

    /// Parses a `shows.json` array after validating `config`.
    pub fn from_json_str(json: &str, config: ScoutConfig) -> Result<Self> {
        config.validate()?;
        let shows: Vec<Show> = serde_json::from_str(json)?;
        Ok(Self::new(shows, config))
    }

    /// Reads a `shows.json` file.
    pub fn from_path(path: impl AsRef<Path>, config: ScoutConfig) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json, config)?;
        tracing::info!("Loaded {} shows from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Serializes the catalog back to the `shows.json` shape.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.shows)?)
    }

    /// Writes the catalog to `path` as `shows.json`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_string()?)?;
        tracing::info!("Saved {} shows to {:?}", self.len(), path);
        Ok(())
    }

    /// Returns the shows in catalog order.
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    /// Returns the number of shows.
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    /// Returns true if the catalog has no shows.
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    /// Returns the configuration the catalog was loaded with.
    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Looks up a show by id.
    pub fn get(&self, id: &str) -> Option<&Show> {
        self.shows.iter().find(|s| s.id == id)
    }

    /// Classifies a single show for the detail view.
    pub fn classify(&self, id: &str, viewer_age: Option<f64>) -> Option<ClassifiedShow> {
        self.get(id)
            .map(|show| self.filter.classifier().classify(show, viewer_age))
    }

    /// Returns the homepage sample, classified for `viewer_age`.
    pub fn homepage(&self, viewer_age: Option<f64>) -> Vec<ClassifiedShow> {
        let classifier = self.filter.classifier();
        self.homepage
            .iter()
            .map(|&i| classifier.classify(&self.shows[i], viewer_age))
            .collect()
    }

    /// Returns the shows matching `criteria`, or the homepage sample when no
    /// filter is active.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<ClassifiedShow> {
        if criteria.is_homepage() {
            return self.homepage(criteria.viewer_age);
        }
        self.filter.apply(&self.shows, criteria)
    }

    /// Merges `incoming` into the catalog.
    pub fn import(&mut self, incoming: Vec<Show>, overwrite: bool) -> ImportSummary {
        self.import_with_rng(incoming, overwrite, &mut rand::thread_rng())
    }

    /// Merges `incoming`, redrawing the homepage sample from `rng` if the
    /// catalog changed.
    pub fn import_with_rng<R: Rng + ?Sized>(
        &mut self,
        incoming: Vec<Show>,
        overwrite: bool,
        rng: &mut R,
    ) -> ImportSummary {
        let mut by_id: HashMap<String, usize> = HashMap::new();
        let mut by_title: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, show) in self.shows.iter().enumerate() {
            by_id.insert(show.id.clone(), i);
            let key = normalize_title(&show.title);
            if !key.is_empty() {
                by_title.entry(key).or_default().push(i);
            }
        }

        let mut summary = ImportSummary::default();
        for show in incoming {
            let target = match by_id.get(&show.id) {
                Some(&i) => ImportTarget::Existing(i),
                None => match by_title.get(&normalize_title(&show.title)).map(Vec::as_slice) {
                    Some([i]) => ImportTarget::Existing(*i),
                    Some([_, _, ..]) => ImportTarget::Ambiguous,
                    _ => ImportTarget::New,
                },
            };

            match target {
                ImportTarget::Existing(i) if overwrite => {
                    if self.shows[i].id != show.id {
                        by_id.remove(&self.shows[i].id);
                        by_id.insert(show.id.clone(), i);
                    }
                    tracing::debug!("Replacing show {} at {}", show.id, i);
                    self.shows[i] = show;
                    summary.replaced += 1;
                }
                ImportTarget::Existing(_) => summary.skipped += 1,
                ImportTarget::Ambiguous => {
                    tracing::debug!("Skipping {}: ambiguous title {:?}", show.id, show.title);
                    summary.skipped += 1;
                }
                ImportTarget::New => {
                    by_id.insert(show.id.clone(), self.shows.len());
                    self.shows.push(show);
                    summary.added += 1;
                }
            }
        }

        if summary.changed() {
            self.resample(rng);
        }

        tracing::info!(
            "Imported shows: {} added, {} replaced, {} skipped ({} total)",
            summary.added,
            summary.replaced,
            summary.skipped,
            self.shows.len()
        );
        summary
    }

    fn resample<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let classifier = self.filter.classifier();
        let mut eligible: Vec<usize> = self
            .shows
            .iter()
            .enumerate()
            .filter(|(_, show)| !classifier.classify(show, None).is_unsafe())
            .map(|(i, _)| i)
            .collect();

        eligible.shuffle(rng);
        eligible.truncate(self.config.homepage_sample_size);

        tracing::debug!(
            "Drew homepage sample of {} from {} shows",
            eligible.len(),
            self.shows.len()
        );
        self.homepage = eligible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age_bucket::AgeBucket;
    use crate::show::{ContentTag, SafetyRating, StimulationLevel};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn safe(id: &str, title: &str) -> Show {
        Show::new(id, title, 2.0, 6.0).with_rating(SafetyRating::Safe)
    }

    fn unsafe_show(id: &str) -> Show {
        Show::new(id, id, 6.0, 12.0).with_tags([ContentTag::LgbtqThemes])
    }

    fn catalog_of(shows: Vec<Show>) -> Catalog {
        Catalog::with_rng(shows, ScoutConfig::default(), &mut rng())
    }

    fn mixed_catalog() -> Catalog {
        let mut shows: Vec<Show> = (0..8)
            .map(|i| safe(&format!("safe-{i}"), &format!("Safe {i}")))
            .collect();
        shows.extend((0..4).map(|i| unsafe_show(&format!("unsafe-{i}"))));
        catalog_of(shows)
    }

    fn ids(results: &[ClassifiedShow]) -> Vec<String> {
        results.iter().map(|c| c.id().to_string()).collect()
    }

    // === Homepage ===

    #[test]
    fn homepage_excludes_unsafe_and_caps_size() {
        let catalog = mixed_catalog();
        let results = catalog.filter(&FilterCriteria::new());
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|c| !c.is_unsafe()));
        assert!(results.iter().all(|c| c.id().starts_with("safe-")));
    }

    #[test]
    fn homepage_has_no_duplicates() {
        let catalog = mixed_catalog();
        let mut seen = ids(&catalog.homepage(None));
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn homepage_is_stable_across_queries() {
        let catalog = mixed_catalog();
        let first = ids(&catalog.filter(&FilterCriteria::new()));
        let _ = catalog.filter(&FilterCriteria::new().with_search("safe"));
        let second = ids(&catalog.filter(&FilterCriteria::new()));
        assert_eq!(first, second);
    }

    #[test]
    fn small_catalog_returns_every_eligible_show() {
        let shows = vec![safe("a", "A"), unsafe_show("b"), safe("c", "C")];
        let catalog = catalog_of(shows);
        let mut result = ids(&catalog.homepage(None));
        result.sort();
        assert_eq!(result, vec!["a", "c"]);
    }

    #[test]
    fn empty_catalog_has_empty_homepage() {
        let catalog = catalog_of(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.filter(&FilterCriteria::new()).is_empty());
    }

    #[test]
    fn homepage_sample_size_is_configurable() {
        let shows = (0..10).map(|i| safe(&i.to_string(), "Show")).collect();
        let config = ScoutConfig::default().with_homepage_sample_size(3);
        let catalog = Catalog::with_rng(shows, config, &mut rng());
        assert_eq!(catalog.homepage(None).len(), 3);
    }

    #[test]
    fn homepage_is_classified_for_viewer_age() {
        let scary = Show::new("scary", "Scary", 5.0, 10.0).with_tags([ContentTag::ScaryImagery]);
        let catalog = catalog_of(vec![scary]);

        let young = catalog.filter(&FilterCriteria::new().with_viewer_age(5.0));
        assert_eq!(young[0].rating, Some(SafetyRating::Caution));

        let older = catalog.filter(&FilterCriteria::new().with_viewer_age(9.0));
        assert_eq!(older[0].rating, Some(SafetyRating::Safe));
    }

    #[test]
    fn active_filters_bypass_homepage() {
        let catalog = mixed_catalog();

        let criteria = FilterCriteria::new().with_age_bucket(AgeBucket::new("7–9 yr", 7.0, 9.9));
        assert_eq!(
            ids(&catalog.filter(&criteria)),
            vec!["unsafe-0", "unsafe-1", "unsafe-2", "unsafe-3"]
        );

        let criteria = FilterCriteria::new().with_stimulation(StimulationLevel::Medium);
        assert_eq!(catalog.filter(&criteria).len(), 12);
    }

    #[test]
    fn whitespace_search_is_not_homepage() {
        let shows = (0..8)
            .map(|i| match i % 2 {
                0 => safe(&format!("paw-{i}"), &format!("Paw {i}")),
                _ => safe(&format!("bluey-{i}"), &format!("Bluey{i}")),
            })
            .collect();
        let catalog = catalog_of(shows);

        let results = catalog.filter(&FilterCriteria::new().with_search(" "));
        assert_eq!(ids(&results), vec!["paw-0", "paw-2", "paw-4", "paw-6"]);
    }

    // === Lookup ===

    #[test]
    fn get_and_classify_by_id() {
        let catalog = mixed_catalog();
        assert_eq!(catalog.get("safe-3").map(|s| s.title.as_str()), Some("Safe 3"));
        assert!(catalog.get("missing").is_none());

        let detail = catalog.classify("unsafe-0", Some(10.0)).unwrap();
        assert_eq!(detail.rating, Some(SafetyRating::Unsafe));
    }

    // === Loading ===

    #[test]
    fn loads_and_round_trips_json() {
        let json = r#"[
            {"id": "bluey", "title": "Bluey", "minAge": 2, "maxAge": 99, "rating": "Safe"},
            {"id": "ghosts", "title": "Ghosts", "minAge": 6, "maxAge": 10,
             "tags": ["Scary Imagery"]}
        ]"#;
        let catalog = Catalog::from_json_str(json, ScoutConfig::default()).unwrap();
        assert_eq!(catalog.len(), 2);

        let json = catalog.to_json_string().unwrap();
        let reloaded = Catalog::from_json_str(&json, ScoutConfig::default()).unwrap();
        assert_eq!(reloaded.shows(), catalog.shows());
    }

    #[test]
    fn rejects_unknown_tags() {
        let json = r#"[{"id": "x", "title": "X", "minAge": 2, "maxAge": 5, "tags": ["Sparkles"]}]"#;
        assert!(Catalog::from_json_str(json, ScoutConfig::default()).is_err());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = ScoutConfig::default().with_safe_above_age(f64::NAN);
        let result = Catalog::from_json_str("[]", config);
        assert!(matches!(result, Err(crate::error::CatalogError::Config(_))));

        let config = ScoutConfig::default().with_safe_above_age(-1.0);
        assert!(Catalog::from_json_str("[]", config).is_err());
    }

    // === Import ===

    #[test]
    fn normalize_title_strips_punctuation_and_case() {
        assert_eq!(normalize_title("Paw Patrol: The Movie"), "pawpatrolthemovie");
        assert_eq!(normalize_title("paw-patrol the movie"), "pawpatrolthemovie");
        assert_eq!(normalize_title("!!!"), "");
    }

    #[test]
    fn import_appends_new_shows() {
        let mut catalog = catalog_of(vec![safe("a", "Alpha")]);
        let summary = catalog.import_with_rng(vec![safe("b", "Beta")], true, &mut rng());
        assert_eq!(summary, ImportSummary { added: 1, replaced: 0, skipped: 0 });
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.shows()[1].id, "b");
    }

    #[test]
    fn import_replaces_by_id() {
        let mut catalog = catalog_of(vec![safe("a", "Alpha")]);
        let updated = safe("a", "Alpha (Remastered)").with_reasoning("Refreshed.");
        let summary = catalog.import_with_rng(vec![updated], true, &mut rng());
        assert_eq!(summary.replaced, 1);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().reasoning, "Refreshed.");
    }

    #[test]
    fn import_matches_unique_normalized_title() {
        let mut catalog = catalog_of(vec![safe("old-id", "Hey Duggee!")]);
        let summary = catalog.import_with_rng(vec![safe("new-id", "hey duggee")], true, &mut rng());
        assert_eq!(summary.replaced, 1);
        assert!(catalog.get("old-id").is_none());
        assert!(catalog.get("new-id").is_some());
    }

    #[test]
    fn import_skips_ambiguous_titles() {
        let shows = vec![safe("a", "Bluey"), safe("b", "BLUEY")];
        let mut catalog = catalog_of(shows);
        let summary = catalog.import_with_rng(vec![safe("c", "bluey")], true, &mut rng());
        assert_eq!(summary, ImportSummary { added: 0, replaced: 0, skipped: 1 });
        assert!(!summary.changed());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn import_without_overwrite_skips_matches() {
        let mut catalog = catalog_of(vec![safe("a", "Alpha")]);
        let summary = catalog.import_with_rng(
            vec![safe("a", "Alpha").with_reasoning("Changed."), safe("b", "Beta")],
            false,
            &mut rng(),
        );
        assert_eq!(summary, ImportSummary { added: 1, replaced: 0, skipped: 1 });
        assert_eq!(catalog.get("a").unwrap().reasoning, "");
    }

    #[test]
    fn import_matches_last_duplicate_id() {
        let shows = vec![safe("dup", "First"), safe("dup", "Second")];
        let mut catalog = catalog_of(shows);
        let updated = safe("dup", "Updated");
        let summary = catalog.import_with_rng(vec![updated], true, &mut rng());
        assert_eq!(summary.replaced, 1);
        assert_eq!(catalog.shows()[0].title, "First");
        assert_eq!(catalog.shows()[1].title, "Updated");
    }

    #[test]
    fn import_refreshes_homepage_sample() {
        let mut catalog = catalog_of(vec![unsafe_show("u")]);
        assert!(catalog.homepage(None).is_empty());

        catalog.import_with_rng(vec![safe("s", "Safe")], true, &mut rng());
        assert_eq!(ids(&catalog.homepage(None)), vec!["s"]);
    }
}
