//! Shape mismatch detection rule.
//!
//! Detects keys whose value shape differs across locales: a string in one
//! locale and a list in another, or lists of different lengths. Either way
//! the same dot-path key resolves in one locale and falls back in another,
//! which diverges silently at render time.

use std::collections::BTreeMap;

use crate::issues::{LocaleShapeMismatch, ShapeMismatchIssue};
use crate::store::LocaleCatalog;

/// Check for keys with diverging value shapes.
///
/// Keys missing from a locale are not reported here; the missing rule owns
/// those.
pub fn check_shape_mismatches(
    reference: &str,
    catalogs: &BTreeMap<String, LocaleCatalog>,
) -> Vec<ShapeMismatchIssue> {
    let Some(reference_catalog) = catalogs.get(reference) else {
        return Vec::new();
    };

    reference_catalog
        .entries
        .iter()
        .filter_map(|(key, value)| {
            let expected = value.shape();
            let mismatches: Vec<LocaleShapeMismatch> = catalogs
                .iter()
                .filter(|(tag, _)| tag.as_str() != reference)
                .filter_map(|(tag, catalog)| {
                    let actual = catalog.entries.get(key)?.shape();
                    (actual != expected).then(|| LocaleShapeMismatch {
                        locale: tag.clone(),
                        actual,
                    })
                })
                .collect();

            (!mismatches.is_empty()).then(|| ShapeMismatchIssue {
                key: key.clone(),
                reference: reference.to_string(),
                source: reference_catalog.source.clone(),
                expected,
                mismatches,
            })
        })
        .collect()
}
