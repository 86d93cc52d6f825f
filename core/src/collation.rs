#![deny(missing_docs)]

//! # Locale Collation
//!
//! Orders navigation labels the way readers of a locale expect
//! (ICU root collation tailored to the locale, tertiary strength).

use crate::error::{AppError, AppResult};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;
use std::fmt;

/// A collator bound to one locale.
pub struct Collation {
    tag: String,
    collator: Collator,
}

impl Collation {
    /// Builds a collator for a BCP-47 tag such as `en` or `ja`.
    pub fn new(tag: &str) -> AppResult<Self> {
        let locale: Locale = tag
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid locale tag '{}': {}", tag, e)))?;

        let collator = Collator::try_new(&(&locale).into(), CollatorOptions::new()).map_err(
            |e| AppError::Config(format!("No collation data for locale '{}': {}", tag, e)),
        )?;

        Ok(Self {
            tag: tag.to_string(),
            collator,
        })
    }

    /// The locale tag this collator was built for.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Compares two strings.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
