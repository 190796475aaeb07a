//! Show records and the enums that describe them.
//!
//! A [`Show`] mirrors one entry of the `shows.json` catalog. Descriptive
//! fields (title, synopsis, cast, platforms, images) are opaque to the core
//! and are carried through classification unchanged.

use serde::{Deserialize, Serialize};

/// Safe-above age used when a show does not set its own threshold.
pub const DEFAULT_SAFE_ABOVE_AGE: f64 = 7.0;

/// Content tags attached to a show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentTag {
    /// Teaches skills or knowledge.
    Educational,
    /// Magical or imaginary settings.
    Fantasy,
    /// Action-driven storylines.
    Action,
    /// LGBTQ+ themes or characters.
    #[serde(rename = "LGBTQ+ Themes")]
    LgbtqThemes,
    /// Depictions of violence.
    Violence,
    /// Frightening imagery.
    #[serde(rename = "Scary Imagery")]
    ScaryImagery,
    /// Stories built around friendship.
    #[serde(rename = "Values: Friendship")]
    ValuesFriendship,
    /// Stories built around family.
    #[serde(rename = "Values: Family")]
    ValuesFamily,
}

impl ContentTag {
    /// Returns all available tags.
    pub fn all() -> &'static [ContentTag] {
        &[
            ContentTag::Educational,
            ContentTag::Fantasy,
            ContentTag::Action,
            ContentTag::LgbtqThemes,
            ContentTag::Violence,
            ContentTag::ScaryImagery,
            ContentTag::ValuesFriendship,
            ContentTag::ValuesFamily,
        ]
    }

    /// Returns the display name, identical to the catalog spelling.
    pub fn name(&self) -> &'static str {
        match self {
            ContentTag::Educational => "Educational",
            ContentTag::Fantasy => "Fantasy",
            ContentTag::Action => "Action",
            ContentTag::LgbtqThemes => "LGBTQ+ Themes",
            ContentTag::Violence => "Violence",
            ContentTag::ScaryImagery => "Scary Imagery",
            ContentTag::ValuesFriendship => "Values: Friendship",
            ContentTag::ValuesFamily => "Values: Family",
        }
    }

    /// Returns true for tags that make a show intense for young viewers.
    pub fn is_intense(&self) -> bool {
        matches!(self, ContentTag::Violence | ContentTag::ScaryImagery)
    }
}

impl std::fmt::Display for ContentTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Safety verdict for a show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyRating {
    /// Suitable for the intended audience.
    Safe,
    /// Suitable with parental judgement.
    Caution,
    /// Not recommended.
    Unsafe,
}

impl SafetyRating {
    /// Returns a human-readable name for this rating.
    pub fn name(&self) -> &'static str {
        match self {
            SafetyRating::Safe => "Safe",
            SafetyRating::Caution => "Caution",
            SafetyRating::Unsafe => "Unsafe",
        }
    }
}

impl std::fmt::Display for SafetyRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coarse sensory intensity of a show, independent of its safety rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StimulationLevel {
    /// Calm pacing, soft audio.
    Low,
    /// Typical pacing.
    #[default]
    Medium,
    /// Fast cuts, loud audio, bright colors.
    High,
}

impl StimulationLevel {
    /// Returns all levels from calmest to most intense.
    pub fn all() -> &'static [StimulationLevel] {
        &[
            StimulationLevel::Low,
            StimulationLevel::Medium,
            StimulationLevel::High,
        ]
    }

    /// Returns the level name.
    pub fn name(&self) -> &'static str {
        match self {
            StimulationLevel::Low => "Low",
            StimulationLevel::Medium => "Medium",
            StimulationLevel::High => "High",
        }
    }

    /// Returns the badge label, e.g. "Low Stimulation".
    pub fn label(&self) -> String {
        format!("{} Stimulation", self.name())
    }
}

impl std::fmt::Display for StimulationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fallback values for the optional show attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TraitDefaults {
    /// Threshold used when a show has no `safeAboveAge`.
    pub safe_above_age: f64,
    /// Level used when a show has no `stimulationLevel`.
    pub stimulation: StimulationLevel,
}

impl Default for TraitDefaults {
    fn default() -> Self {
        Self {
            safe_above_age: DEFAULT_SAFE_ABOVE_AGE,
            stimulation: StimulationLevel::default(),
        }
    }
}

/// Optional show attributes with their defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTraits {
    /// Stimulation level, never missing.
    pub stimulation: StimulationLevel,
    /// Viewer age from which intense content is considered safe.
    pub safe_above_age: f64,
    /// Whether flagged themes are confined to isolated episodes.
    pub episodic_issue: bool,
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    /// Unique identifier.
    pub id: String,
    /// TMDB identifier, kept for later metadata refreshes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<String>,
    /// Display title.
    pub title: String,
    /// Plot summary.
    #[serde(default)]
    pub synopsis: String,
    /// Poster URL.
    #[serde(default)]
    pub cover_image: String,
    /// Principal cast members.
    #[serde(default)]
    pub cast: Vec<String>,
    /// Content tags.
    #[serde(default)]
    pub tags: Vec<ContentTag>,
    /// Streaming platform names, as sourced.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
    /// Whether the show is featured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    /// Pre-set rating supplied with the record.
    #[serde(rename = "rating", default, skip_serializing_if = "Option::is_none")]
    pub base_rating: Option<SafetyRating>,
    /// Explanation of the rating.
    #[serde(default)]
    pub reasoning: String,
    /// Free-form age recommendation text.
    #[serde(default)]
    pub age_recommendation: String,
    /// Youngest intended age in years (fractions below 1 encode months).
    pub min_age: f64,
    /// Oldest intended age in years; 99 means open-ended.
    pub max_age: f64,
    /// Release year or span, e.g. "2018–Present".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<String>,
    /// Episode runtime, e.g. "7 min".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    /// Sensory intensity, Medium when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stimulation_level: Option<StimulationLevel>,
    /// True when a flagged theme only appears in isolated episodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_episodic_issue: Option<bool>,
    /// Viewer age from which violent or scary content is considered safe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_above_age: Option<f64>,
}

impl Show {
    /// Creates a show with the required fields and everything else empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        min_age: f64,
        max_age: f64,
    ) -> Self {
        Self {
            id: id.into(),
            tmdb_id: None,
            title: title.into(),
            synopsis: String::new(),
            cover_image: String::new(),
            cast: Vec::new(),
            tags: Vec::new(),
            platforms: Vec::new(),
            featured: None,
            base_rating: None,
            reasoning: String::new(),
            age_recommendation: String::new(),
            min_age,
            max_age,
            release_year: None,
            runtime: None,
            stimulation_level: None,
            is_episodic_issue: None,
            safe_above_age: None,
        }
    }

    /// Sets the content tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = ContentTag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets the pre-set rating.
    pub fn with_rating(mut self, rating: SafetyRating) -> Self {
        self.base_rating = Some(rating);
        self
    }

    /// Sets the reasoning text.
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// Sets the stimulation level.
    pub fn with_stimulation(mut self, level: StimulationLevel) -> Self {
        self.stimulation_level = Some(level);
        self
    }

    /// Marks flagged themes as confined to isolated episodes.
    pub fn with_episodic_issue(mut self, episodic: bool) -> Self {
        self.is_episodic_issue = Some(episodic);
        self
    }

    /// Sets the safe-above age threshold.
    pub fn with_safe_above_age(mut self, age: f64) -> Self {
        self.safe_above_age = Some(age);
        self
    }

    /// Sets the streaming platforms.
    pub fn with_platforms<S>(mut self, platforms: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the show carries the given tag.
    pub fn has_tag(&self, tag: ContentTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Returns true if the show's age range overlaps `[min, max]`.
    pub fn overlaps_ages(&self, min: f64, max: f64) -> bool {
        self.min_age <= max && self.max_age >= min
    }

    /// Fills in missing optional attributes from `defaults`.
    pub fn resolve(&self, defaults: &TraitDefaults) -> ResolvedTraits {
        ResolvedTraits {
            stimulation: self.stimulation_level.unwrap_or(defaults.stimulation),
            safe_above_age: self.safe_above_age.unwrap_or(defaults.safe_above_age),
            episodic_issue: self.is_episodic_issue.unwrap_or(false),
        }
    }
}
