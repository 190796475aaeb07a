//! Classification output types.

use serde::Serialize;

use crate::show::{ContentTag, SafetyRating, Show};

/// Minimum reasoning length before a verdict is considered under-explained.
pub const MIN_REASONING_LEN: usize = 50;

/// Youngest viewer age at which violence does not warrant a review on its own.
pub const VIOLENCE_REVIEW_AGE: f64 = 7.0;

/// Rating and reasoning being built up while rules are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Current rating, `None` when neither the record nor a rule set one.
    pub rating: Option<SafetyRating>,
    /// Current reasoning text.
    pub reasoning: String,
}

impl Verdict {
    /// Starts from the rating and reasoning supplied on the record.
    pub fn from_show(show: &Show) -> Self {
        Self {
            rating: show.base_rating,
            reasoning: show.reasoning.clone(),
        }
    }
}

/// A show together with its computed rating and reasoning.
///
/// The wrapped [`Show`] is an untouched copy of the input; the computed
/// values live alongside it. Serializes in the catalog shape with the
/// computed rating and reasoning in place of the originals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "Show")]
pub struct ClassifiedShow {
    /// The input record.
    pub show: Show,
    /// Computed rating.
    pub rating: Option<SafetyRating>,
    /// Computed reasoning.
    pub reasoning: String,
}

impl ClassifiedShow {
    pub(crate) fn new(show: Show, verdict: Verdict) -> Self {
        Self {
            show,
            rating: verdict.rating,
            reasoning: verdict.reasoning,
        }
    }

    /// Returns the show id.
    pub fn id(&self) -> &str {
        &self.show.id
    }

    /// Returns the show title.
    pub fn title(&self) -> &str {
        &self.show.title
    }

    /// Returns true if the computed rating is Unsafe.
    pub fn is_unsafe(&self) -> bool {
        self.rating == Some(SafetyRating::Unsafe)
    }

    /// Returns true if this show should be looked at by a human reviewer.
    ///
    /// Flags LGBTQ+ themes, violence aimed at viewers under 7, any
    /// Unsafe or Caution rating, and reasoning too short to be useful.
    pub fn needs_review(&self) -> bool {
        self.show.has_tag(ContentTag::LgbtqThemes)
            || (self.show.has_tag(ContentTag::Violence) && self.show.min_age < VIOLENCE_REVIEW_AGE)
            || matches!(
                self.rating,
                Some(SafetyRating::Unsafe) | Some(SafetyRating::Caution)
            )
            || self.reasoning.chars().count() < MIN_REASONING_LEN
    }

    /// Folds the computed rating and reasoning back into a plain record.
    pub fn into_show(self) -> Show {
        let mut show = self.show;
        show.base_rating = self.rating;
        show.reasoning = self.reasoning;
        show
    }
}

impl From<ClassifiedShow> for Show {
    fn from(classified: ClassifiedShow) -> Self {
        classified.into_show()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_REASONING: &str =
        "Gentle pacing, kind characters, and no frightening scenes in any episode.";

    fn classified(show: Show, rating: Option<SafetyRating>, reasoning: &str) -> ClassifiedShow {
        ClassifiedShow::new(
            show,
            Verdict {
                rating,
                reasoning: reasoning.to_string(),
            },
        )
    }

    #[test]
    fn into_show_replaces_rating_and_reasoning() {
        let show = Show::new("a", "A", 2.0, 5.0).with_reasoning("old");
        let out = classified(show, Some(SafetyRating::Caution), "new").into_show();
        assert_eq!(out.base_rating, Some(SafetyRating::Caution));
        assert_eq!(out.reasoning, "new");
        assert_eq!(out.title, "A");
    }

    #[test]
    fn serializes_in_catalog_shape() {
        let show = Show::new("a", "A", 2.0, 5.0).with_rating(SafetyRating::Safe);
        let value =
            serde_json::to_value(classified(show, Some(SafetyRating::Caution), "why")).unwrap();
        assert_eq!(value["rating"], "Caution");
        assert_eq!(value["reasoning"], "why");
        assert_eq!(value["minAge"], 2.0);
        assert!(value.get("show").is_none());
    }

    #[test]
    fn safe_well_explained_show_needs_no_review() {
        let show = Show::new("a", "A", 2.0, 5.0).with_tags([ContentTag::Educational]);
        assert!(!classified(show, Some(SafetyRating::Safe), LONG_REASONING).needs_review());
    }

    #[test]
    fn review_flags() {
        let lgbtq = Show::new("a", "A", 8.0, 12.0).with_tags([ContentTag::LgbtqThemes]);
        assert!(classified(lgbtq, Some(SafetyRating::Safe), LONG_REASONING).needs_review());

        let young_violence = Show::new("b", "B", 4.0, 8.0).with_tags([ContentTag::Violence]);
        let result = classified(young_violence, Some(SafetyRating::Safe), LONG_REASONING);
        assert!(result.needs_review());

        let older_violence = Show::new("c", "C", 8.0, 12.0).with_tags([ContentTag::Violence]);
        let result = classified(older_violence, Some(SafetyRating::Safe), LONG_REASONING);
        assert!(!result.needs_review());

        let caution = Show::new("d", "D", 2.0, 5.0);
        assert!(classified(caution, Some(SafetyRating::Caution), LONG_REASONING).needs_review());

        let terse = Show::new("e", "E", 2.0, 5.0);
        assert!(classified(terse, Some(SafetyRating::Safe), "Fine.").needs_review());
    }
}
