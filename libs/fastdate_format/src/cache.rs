// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Memoization of compiled format instances.
//!
//! A [`FormatCache`] can be constructed explicitly so tests get isolated,
//! disposable caches; the crate-level convenience constructors share one
//! process-wide instance. Lookups never hold a lock across compilation:
//! concurrent callers may compile the same pattern redundantly, but exactly
//! one compiled instance is installed and every caller converges on it.
//!
//! Entries are retained for the process lifetime; there is no eviction.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use fastdate_locale::get_locale_data;
use once_cell::sync::Lazy;
use tracing::trace;

use crate::compile::normalize_locale;
use crate::error::PatternError;
use crate::zone::Zone;
use crate::FastDateFormat;

/// One of the four canned date/time format styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Full,
    Long,
    Medium,
    Short,
}

impl Style {
    fn select(&self, patterns: &fastdate_locale::StylePatterns) -> &'static str {
        match self {
            Style::Full => patterns.full,
            Style::Long => patterns.long,
            Style::Medium => patterns.medium,
            Style::Short => patterns.short,
        }
    }
}

type InstanceKey = (String, String, String);
type StyleKey = (Option<Style>, Option<Style>, String);

/// Cache of compiled formats keyed by (pattern, zone id, locale tag), with
/// a second map of locale-driven pattern strings for the canned styles.
pub struct FormatCache {
    instances: RwLock<HashMap<InstanceKey, Arc<FastDateFormat>>>,
    style_patterns: RwLock<HashMap<StyleKey, Arc<str>>>,
}

impl FormatCache {
    pub fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            style_patterns: RwLock::new(HashMap::new()),
        }
    }

    /// Get or compile the format for a pattern. Concurrent misses may
    /// compile redundantly; all callers receive the one installed instance.
    pub fn instance(
        &self,
        pattern: &str,
        zone: Zone,
        locale: &str,
    ) -> Result<Arc<FastDateFormat>, PatternError> {
        let key = (pattern.to_string(), zone.id(), normalize_locale(locale));
        if let Ok(cache) = self.instances.read() {
            if let Some(instance) = cache.get(&key) {
                return Ok(instance.clone());
            }
        }

        trace!("compiling format instance for pattern {:?}", pattern);
        let built = Arc::new(FastDateFormat::new(pattern, zone, locale)?);
        Ok(match self.instances.write() {
            Ok(mut cache) => cache.entry(key).or_insert(built).clone(),
            Err(_) => built,
        })
    }

    /// Format for a canned date style in the given locale.
    pub fn date_instance(
        &self,
        style: Style,
        zone: Zone,
        locale: &str,
    ) -> Result<Arc<FastDateFormat>, PatternError> {
        let pattern = self.style_pattern(Some(style), None, locale);
        self.instance(&pattern, zone, locale)
    }

    /// Format for a canned time style in the given locale.
    pub fn time_instance(
        &self,
        style: Style,
        zone: Zone,
        locale: &str,
    ) -> Result<Arc<FastDateFormat>, PatternError> {
        let pattern = self.style_pattern(None, Some(style), locale);
        self.instance(&pattern, zone, locale)
    }

    /// Format combining a canned date style and time style.
    pub fn date_time_instance(
        &self,
        date_style: Style,
        time_style: Style,
        zone: Zone,
        locale: &str,
    ) -> Result<Arc<FastDateFormat>, PatternError> {
        let pattern = self.style_pattern(Some(date_style), Some(time_style), locale);
        self.instance(&pattern, zone, locale)
    }

    /// Resolve (date style, time style, locale) to its canonical pattern,
    /// memoized with the same install-if-absent discipline as instances.
    fn style_pattern(&self, date: Option<Style>, time: Option<Style>, locale: &str) -> Arc<str> {
        let key = (date, time, normalize_locale(locale));
        if let Ok(cache) = self.style_patterns.read() {
            if let Some(pattern) = cache.get(&key) {
                return pattern.clone();
            }
        }

        let data = get_locale_data(locale);
        let pattern: Arc<str> = match (date, time) {
            (Some(d), None) => Arc::from(d.select(&data.date_formats)),
            (None, Some(t)) => Arc::from(t.select(&data.time_formats)),
            (Some(d), Some(t)) => Arc::from(
                data.datetime_pattern
                    .replace("{1}", d.select(&data.date_formats))
                    .replace("{0}", t.select(&data.time_formats)),
            ),
            (None, None) => Arc::from(""),
        };
        match self.style_patterns.write() {
            Ok(mut cache) => cache.entry(key).or_insert(pattern).clone(),
            Err(_) => pattern,
        }
    }
}

impl Default for FormatCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide cache backing the `FastDateFormat::get_*` constructors.
pub(crate) static DEFAULT_CACHE: Lazy<FormatCache> = Lazy::new(FormatCache::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_identity() {
        let cache = FormatCache::new();
        let first = cache.instance("yyyy", Zone::UTC, "en-US").unwrap();
        let second = cache.instance("yyyy", Zone::UTC, "en-US").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_keys_distinct_instances() {
        let cache = FormatCache::new();
        let a = cache.instance("yyyy", Zone::UTC, "en-US").unwrap();
        let b = cache.instance("yyyy", Zone::UTC, "de").unwrap();
        let c = cache
            .instance("yyyy", Zone::lookup("Asia/Tokyo").unwrap(), "en-US")
            .unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn test_locale_key_normalized() {
        let cache = FormatCache::new();
        let a = cache.instance("yyyy", Zone::UTC, "en_US").unwrap();
        let b = cache.instance("yyyy", Zone::UTC, "en-us").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_compile_error_propagates() {
        let cache = FormatCache::new();
        assert!(cache.instance("Q", Zone::UTC, "en-US").is_err());
    }

    #[test]
    fn test_date_instance_uses_locale_pattern() {
        let cache = FormatCache::new();
        let format = cache
            .date_instance(Style::Short, Zone::UTC, "en-US")
            .unwrap();
        assert_eq!(format.pattern(), "M/d/yy");

        let format = cache.date_instance(Style::Short, Zone::UTC, "de").unwrap();
        assert_eq!(format.pattern(), "dd.MM.yy");
    }

    #[test]
    fn test_date_time_instance_combines() {
        let cache = FormatCache::new();
        let format = cache
            .date_time_instance(Style::Short, Style::Short, Zone::UTC, "en-US")
            .unwrap();
        assert_eq!(format.pattern(), "M/d/yy, h:mm a");
    }

    #[test]
    fn test_style_pattern_memoized() {
        let cache = FormatCache::new();
        let a = cache.style_pattern(Some(Style::Short), None, "en-US");
        let b = cache.style_pattern(Some(Style::Short), None, "en-US");
        assert!(Arc::ptr_eq(&a, &b));
    }
}
