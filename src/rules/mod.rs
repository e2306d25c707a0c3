//! Catalog parity rules.
//!
//! Every rule is a pure function over a reference locale tag and the
//! tag-keyed catalogs ([`LocaleCatalog`](crate::store::LocaleCatalog)),
//! returning issue structs. Catalogs and their entries are `BTreeMap`s, so
//! rule output is deterministic without explicit sorting; the command layer
//! sorts the combined issue list once before reporting.

pub mod missing;
pub mod orphan;
pub mod shape;
pub mod untranslated;

pub use missing::check_missing_keys;
pub use orphan::check_orphan_keys;
pub use shape::check_shape_mismatches;
pub use untranslated::check_untranslated;
