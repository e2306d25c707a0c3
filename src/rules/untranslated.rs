//! Untranslated value detection rule.
//!
//! Detects text values that are identical to the reference locale's value
//! for the same key, which may indicate the string was never translated.
//! List values are exempt: the page's lists are technology and link names
//! that legitimately repeat across locales. Values without any alphabetic
//! character (pure numbers, symbols) are skipped as well.

use std::collections::BTreeMap;

use crate::issues::UntranslatedIssue;
use crate::store::{FlatValue, LocaleCatalog};
use crate::utils::contains_alphabetic;

/// Check for values copied verbatim from the reference locale.
pub fn check_untranslated(
    reference: &str,
    catalogs: &BTreeMap<String, LocaleCatalog>,
) -> Vec<UntranslatedIssue> {
    let Some(reference_catalog) = catalogs.get(reference) else {
        return Vec::new();
    };

    reference_catalog
        .entries
        .iter()
        .filter_map(|(key, value)| {
            let FlatValue::Text(text) = value else {
                return None;
            };
            if !contains_alphabetic(text) {
                return None;
            }

            let identical_in: Vec<String> = catalogs
                .iter()
                .filter(|(tag, catalog)| {
                    tag.as_str() != reference
                        && matches!(
                            catalog.entries.get(key),
                            Some(FlatValue::Text(other)) if other == text
                        )
                })
                .map(|(tag, _)| tag.clone())
                .collect();

            (!identical_in.is_empty()).then(|| UntranslatedIssue {
                key: key.clone(),
                value: text.clone(),
                reference: reference.to_string(),
                source: reference_catalog.source.clone(),
                identical_in,
            })
        })
        .collect()
}
