//! Locale-aware string comparison used by the field sort

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

/// Unicode collator for the root locale.
///
/// Accents and case only break ties after the base letters compare equal,
/// so `"éa" < "eb"` and `"Émile" < "Zoe"`. Falls back to code-point order
/// if collation data cannot be loaded.
pub struct LocaleCollator {
    inner: Option<Collator>,
}

impl LocaleCollator {
    pub fn new() -> Self {
        let inner = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!("Root collation unavailable, using code-point order: {}", e);
                None
            }
        };
        Self { inner }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.inner {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

impl Default for LocaleCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison; build a [`LocaleCollator`] when comparing many pairs
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    LocaleCollator::new().compare(a, b)
}
