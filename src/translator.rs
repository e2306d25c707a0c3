//! Dot-path lookup against the active locale, with runtime locale switching.
//!
//! The [`Translator`] is the only i18n surface the page consumes: layout
//! code hands it dot-path keys on every render and reads back display
//! strings. Switching the locale notifies subscribers so bound UI re-renders
//! with the new locale's strings. Everything runs on the single UI thread:
//! one writer path (`set_locale`), many readers (`translate`).

use anyhow::Result;

use crate::locale::{Locale, UnsupportedLocale};
use crate::store::TranslationTable;

/// Handle for a registered locale-change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Callback = Box<dyn FnMut(Locale)>;

/// Resolves translation keys against the currently active locale.
pub struct Translator {
    table: TranslationTable,
    active: Locale,
    subscribers: Vec<(Subscription, Callback)>,
    next_id: u64,
}

impl Translator {
    /// Build a translator over the embedded catalogs, starting in the
    /// default locale.
    ///
    /// Fails only when an embedded resource is malformed; callers abort
    /// startup on error.
    pub fn new() -> Result<Translator> {
        Ok(Self::with_table(TranslationTable::load()?, Locale::DEFAULT))
    }

    /// Build a translator over an explicit table and initial locale.
    pub fn with_table(table: TranslationTable, initial: Locale) -> Translator {
        Self {
            table,
            active: initial,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// The currently active locale.
    pub fn active(&self) -> Locale {
        self.active
    }

    /// Resolve a dot-path key against the active locale.
    ///
    /// Returns the raw key itself when the path does not resolve, a visible
    /// fallback instead of a crash, matching conventional end-user facing
    /// localization. Pure read; repeated calls without an intervening
    /// locale switch return identical results.
    ///
    /// # Examples
    ///
    /// ```
    /// let t = glossa::Translator::new().unwrap();
    /// assert_eq!(t.translate("nav.home"), "Início");
    /// assert_eq!(t.translate("nav.missing"), "nav.missing");
    /// ```
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.try_translate(key).unwrap_or(key)
    }

    /// Resolve a dot-path key, reporting a miss as `None`.
    pub fn try_translate(&self, key: &str) -> Option<&str> {
        self.table.get(self.active).resolve(key)
    }

    /// Switch the active locale.
    ///
    /// Every subsequent [`translate`](Self::translate) observes the new
    /// locale. Subscribers are notified unconditionally, even when the
    /// locale did not change; an idempotent re-render is harmless.
    pub fn set_locale(&mut self, locale: Locale) {
        self.active = locale;
        for (_, callback) in &mut self.subscribers {
            callback(locale);
        }
    }

    /// Switch the active locale from a string tag, the form a UI toggle
    /// produces.
    ///
    /// An unsupported tag is rejected: the active locale stays unchanged,
    /// no subscriber is notified, and the error is returned to the caller
    /// rather than swallowed.
    pub fn set_locale_tag(&mut self, tag: &str) -> Result<Locale, UnsupportedLocale> {
        let locale = Locale::from_tag(tag)?;
        self.set_locale(locale);
        Ok(locale)
    }

    /// Register a callback invoked with the new locale on every switch.
    pub fn subscribe(&mut self, callback: impl FnMut(Locale) + 'static) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.subscribers.push((subscription, Box::new(callback)));
        subscription
    }

    /// Remove a previously registered callback. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.retain(|(id, _)| *id != subscription);
    }
}
