//! Rule pipeline that turns a show into a [`ClassifiedShow`].
//!
//! ## Evaluation Order
//!
//! 1. Family-values policy ([`super::policy`]); an Unsafe verdict is final
//! 2. Intensity rule for Violence / Scary Imagery, gated on viewer age
//! 3. Otherwise the record's own rating passes through

use crate::show::{ResolvedTraits, SafetyRating, Show, TraitDefaults};

use super::policy::apply_theme_policy;
use super::{ClassifiedShow, Verdict};

/// Applies the intensity rule for violent or scary content.
///
/// Viewers at or above the show's safe-above age see it as Safe; everyone
/// else, including an unknown viewer, gets Caution. An Unsafe verdict is
/// never softened to Caution. Returns true if the show has intense tags.
pub fn apply_intensity_rule(
    show: &Show,
    traits: &ResolvedTraits,
    viewer_age: Option<f64>,
    verdict: &mut Verdict,
) -> bool {
    if !show.tags.iter().any(|tag| tag.is_intense()) {
        return false;
    }

    match viewer_age {
        Some(age) if age >= traits.safe_above_age => {
            verdict.rating = Some(SafetyRating::Safe);
        }
        _ => {
            if verdict.rating != Some(SafetyRating::Unsafe) {
                verdict.rating = Some(SafetyRating::Caution);
            }
        }
    }
    true
}

/// Classifies shows with a fixed set of attribute defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Classifier {
    defaults: TraitDefaults,
}

impl Classifier {
    /// Creates a classifier with the standard defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier with custom attribute defaults.
    pub fn with_defaults(defaults: TraitDefaults) -> Self {
        Self { defaults }
    }

    /// Returns the attribute defaults in use.
    pub fn defaults(&self) -> &TraitDefaults {
        &self.defaults
    }

    /// Resolves missing attributes on `show`.
    pub fn resolve(&self, show: &Show) -> ResolvedTraits {
        show.resolve(&self.defaults)
    }

    /// Computes the rating and reasoning for `show` as seen by a viewer of
    /// `viewer_age` (unknown when `None`). The input is not modified.
    pub fn classify(&self, show: &Show, viewer_age: Option<f64>) -> ClassifiedShow {
        let traits = self.resolve(show);
        let mut verdict = Verdict::from_show(show);

        if !apply_theme_policy(show, &traits, &mut verdict).is_terminal() {
            apply_intensity_rule(show, &traits, viewer_age, &mut verdict);
        }

        ClassifiedShow::new(show.clone(), verdict)
    }
}

/// Classifies `show` with the standard defaults.
pub fn classify(show: &Show, viewer_age: Option<f64>) -> ClassifiedShow {
    Classifier::new().classify(show, viewer_age)
}
