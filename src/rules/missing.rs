//! Missing key detection rule.
//!
//! Detects keys that exist in the reference locale but are missing in one
//! or more other locales, where the page would show the raw key as
//! fallback.

use std::collections::BTreeMap;

use crate::issues::MissingKeyIssue;
use crate::store::LocaleCatalog;

/// Check for keys missing from non-reference locales.
///
/// # Arguments
/// * `reference` - The reference locale tag (e.g., "pt-BR")
/// * `catalogs` - All catalogs, keyed by locale tag
///
/// # Returns
/// One issue per reference key that is absent somewhere, listing the
/// locales that lack it.
pub fn check_missing_keys(
    reference: &str,
    catalogs: &BTreeMap<String, LocaleCatalog>,
) -> Vec<MissingKeyIssue> {
    let Some(reference_catalog) = catalogs.get(reference) else {
        return Vec::new();
    };

    reference_catalog
        .entries
        .iter()
        .filter_map(|(key, value)| {
            let missing_in: Vec<String> = catalogs
                .iter()
                .filter(|(tag, catalog)| {
                    tag.as_str() != reference && !catalog.entries.contains_key(key)
                })
                .map(|(tag, _)| tag.clone())
                .collect();

            (!missing_in.is_empty()).then(|| MissingKeyIssue {
                key: key.clone(),
                value: value.preview(),
                reference: reference.to_string(),
                source: reference_catalog.source.clone(),
                missing_in,
            })
        })
        .collect()
}
