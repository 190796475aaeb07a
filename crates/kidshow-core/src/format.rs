//! Age and age-range labels.
//!
//! Ages below one year are shown in months, computed as
//! `round(age * 12)`; 0.5 renders as "6 mo".

use crate::age_bucket::OPEN_ENDED_MAX_AGE;

/// Formats a single age, e.g. "6 mo" or "3 yo".
pub fn format_age(age: f64) -> String {
    if age < 1.0 {
        let months = (age * 12.0).round() as i32;
        return format!("{} mo", months);
    }
    format!("{} yo", age)
}

/// Formats an age range, e.g. "1 yo - 2 yo", or "2 yo+" when open-ended.
pub fn format_age_range(min: f64, max: f64) -> String {
    if max == OPEN_ENDED_MAX_AGE {
        return format!("{}+", format_age(min));
    }
    format!("{} - {}", format_age(min), format_age(max))
}
