//! Family-values policy rule.
//!
//! Shows with LGBTQ+ themes are rated Unsafe unless the themes are confined
//! to isolated episodes, in which case they are softened to Caution and a
//! note is appended to the reasoning. Kept separate from the age and
//! stimulation logic so the policy can be revised on its own.

use crate::show::{ContentTag, ResolvedTraits, SafetyRating, Show};

use super::Verdict;

/// Reasoning used when the policy rates a show Unsafe.
pub const POLICY_REASONING: &str = "Contains themes that do not align with family-friendly values.";

/// Note appended to the reasoning of episodic matches.
pub const EPISODIC_NOTE: &str = " (Note: Contains isolated episodes with LGBTQ+ themes)";

/// What the policy rule did to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyOutcome {
    /// The show has no policy-relevant tags.
    NotApplicable,
    /// Themes are episodic; rating lowered to Caution, later rules still run.
    Softened,
    /// Rating is Unsafe and final.
    Enforced,
}

impl PolicyOutcome {
    /// Returns true if no further rules may change the verdict.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PolicyOutcome::Enforced)
    }
}

/// Applies the family-values policy to `verdict`.
pub fn apply_theme_policy(
    show: &Show,
    traits: &ResolvedTraits,
    verdict: &mut Verdict,
) -> PolicyOutcome {
    if !show.has_tag(ContentTag::LgbtqThemes) {
        return PolicyOutcome::NotApplicable;
    }

    if traits.episodic_issue {
        verdict.rating = Some(SafetyRating::Caution);
        verdict.reasoning.push_str(EPISODIC_NOTE);
        PolicyOutcome::Softened
    } else {
        verdict.rating = Some(SafetyRating::Unsafe);
        verdict.reasoning = POLICY_REASONING.to_string();
        PolicyOutcome::Enforced
    }
}
