//! Orphan key detection rule.
//!
//! Detects keys that exist in non-reference locales but are missing from
//! the reference locale. These are typically leftovers from a removed page
//! section that was cleaned up in the reference catalog only.

use std::collections::BTreeMap;

use crate::issues::OrphanKeyIssue;
use crate::store::LocaleCatalog;

/// Check for keys absent from the reference locale.
///
/// # Arguments
/// * `reference` - The reference locale tag (e.g., "pt-BR")
/// * `catalogs` - All catalogs, keyed by locale tag
///
/// # Returns
/// One issue per (locale, key) pair where the key has no reference
/// counterpart.
pub fn check_orphan_keys(
    reference: &str,
    catalogs: &BTreeMap<String, LocaleCatalog>,
) -> Vec<OrphanKeyIssue> {
    let Some(reference_catalog) = catalogs.get(reference) else {
        return Vec::new();
    };

    catalogs
        .iter()
        .filter(|(tag, _)| tag.as_str() != reference)
        .flat_map(|(tag, catalog)| {
            catalog
                .entries
                .iter()
                .filter(|(key, _)| !reference_catalog.entries.contains_key(*key))
                .map(|(key, value)| OrphanKeyIssue {
                    key: key.clone(),
                    value: value.preview(),
                    locale: tag.clone(),
                    source: catalog.source.clone(),
                    reference: reference.to_string(),
                })
        })
        .collect()
}
