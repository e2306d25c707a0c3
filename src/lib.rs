//! Glossa - embedded i18n for a bilingual portfolio page
//!
//! Glossa is the string catalog and translator behind a two-locale
//! (en-US / pt-BR) portfolio page. The page hands the [`Translator`]
//! dot-path keys on every render and reads back display strings; a toggle
//! switches the active locale at runtime. The same crate ships a CLI that
//! keeps the locale catalogs honest: missing keys, orphans, shape
//! mismatches and untranslated values.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `issues`: Issue type definitions and severities
//! - `locale`: Supported locales and tag parsing
//! - `rules`: Catalog parity rules
//! - `store`: Resource Store (dictionaries, embedded catalogs, dir scan)
//! - `translator`: Dot-path lookup and locale switching
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod issues;
pub mod locale;
pub mod rules;
pub mod store;
pub mod translator;
pub mod utils;

pub use locale::{Locale, UnsupportedLocale};
pub use store::TranslationTable;
pub use translator::{Subscription, Translator};
