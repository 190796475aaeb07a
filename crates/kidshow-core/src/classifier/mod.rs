//! Safety classification for catalog shows.
//!
//! This module assigns a safety rating and reasoning to a show from its
//! tags and an optional viewer age.

pub mod policy;
mod rules;
mod verdict;

pub use policy::{apply_theme_policy, PolicyOutcome};
pub use rules::{apply_intensity_rule, classify, Classifier};
pub use verdict::{ClassifiedShow, Verdict};
