//! KidShow Scout Core - Show classification and catalog filtering.
//!
//! This crate provides the logic behind the KidShow Scout catalog:
//!
//! - Safety classification of shows from their tags and the viewer's age
//! - Catalog filtering by title search, age bucket, and stimulation level
//! - A stable random homepage sample of non-Unsafe shows
//! - Age and age-range labels
//! - Loading, saving, and merging `shows.json` catalogs
//!
//! # Example
//!
//! ```
//! use kidshow_core::{AgeBucket, Catalog, FilterCriteria, ScoutConfig, Show, ContentTag};
//!
//! let shows = vec![
//!     Show::new("bluey", "Bluey", 2.0, 99.0),
//!     Show::new("ghosts", "Friendly Ghosts", 5.0, 9.0).with_tags([ContentTag::ScaryImagery]),
//! ];
//! let catalog = Catalog::new(shows, ScoutConfig::default());
//!
//! let criteria = FilterCriteria::new()
//!     .with_age_bucket(AgeBucket::new("5–6 yr", 5.0, 6.9))
//!     .with_viewer_age(6.0);
//! let results = catalog.filter(&criteria);
//! assert_eq!(results.len(), 2);
//! ```

pub mod age_bucket;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod show;

pub use age_bucket::{AgeBucket, ALL_AGES_LABEL};
pub use catalog::{normalize_title, Catalog, ImportSummary};
pub use classifier::{classify, ClassifiedShow, Classifier};
pub use config::ScoutConfig;
pub use error::{CatalogError, Result};
pub use filter::{filter_catalog, CatalogFilter, FilterCriteria, StimulationFilter};
pub use format::{format_age, format_age_range};
pub use show::{ContentTag, ResolvedTraits, SafetyRating, Show, StimulationLevel, TraitDefaults};
