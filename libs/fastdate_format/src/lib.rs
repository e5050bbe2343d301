// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Fast, thread-safe date/time pattern formatter and parser.
//!
//! A format pattern (e.g. `yyyy-MM-dd'T'HH:mm:ssZZ`) is compiled once into
//! an immutable sequence of executable steps, then reused to format field
//! snapshots to text and to parse text back into field values, without
//! per-call pattern re-analysis.
//!
//! # Architecture
//!
//! 1. **Lexer** - splits the pattern into directive runs and literal runs.
//! 2. **Compiler** - resolves each directive into a formatting rule and a
//!    parsing strategy in one pass, producing an immutable
//!    [`FastDateFormat`].
//! 3. **Printer** - walks the rule sequence, appending into a buffer
//!    presized from the rules' worst-case lengths.
//! 4. **Parser** - walks the strategy sequence with one shared cursor,
//!    bounding adjacent numeric fields by their declared widths and
//!    recognizing locale text with longest-first alternations.
//! 5. **Cache** - memoizes compiled instances by (pattern, zone, locale)
//!    and locale-driven patterns for the canned styles.
//!
//! Compiled formats are immutable and safe to share across threads; the
//! field snapshot passed to each call is the only per-call mutable state.
//!
//! # Example
//!
//! ```
//! use fastdate_format::{FastDateFormat, Zone};
//!
//! let format = FastDateFormat::get_instance("yyyy-MM-dd", Zone::UTC, "en-US").unwrap();
//! let fields = format.parse("2024-03-15").unwrap();
//! assert_eq!(fields.year, 2024);
//! assert_eq!(fields.month, 3);
//! assert_eq!(format.format(&fields), "2024-03-15");
//! ```

mod cache;
mod compile;
mod error;
mod parser;
mod pattern;
mod printer;
mod temporal;
mod zone;

pub use cache::{FormatCache, Style};
pub use error::{ParseError, PatternError};
pub use parser::CenturyWindow;
pub use temporal::{DateTimeFields, Field, Temporal};
pub use zone::{FixedZone, Zone};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::cache::DEFAULT_CACHE;
use crate::compile::CompiledFormat;
use crate::parser::run_strategies;
use crate::printer::{format_rules, format_rules_into};

/// A compiled date/time format: paired printer and parser for one
/// (pattern, zone, locale) triple.
///
/// Instances are immutable after construction and safe for unsynchronized
/// concurrent use. Prefer the `get_*` constructors, which share compiled
/// instances through a process-wide cache.
pub struct FastDateFormat {
    compiled: CompiledFormat,
}

impl FastDateFormat {
    /// Compile a pattern without caching.
    pub fn new(pattern: &str, zone: Zone, locale: &str) -> Result<Self, PatternError> {
        Ok(Self {
            compiled: CompiledFormat::compile(pattern, zone, locale, None)?,
        })
    }

    /// Compile a pattern with an explicit two-digit-year century window.
    pub fn new_with_century(
        pattern: &str,
        zone: Zone,
        locale: &str,
        century: CenturyWindow,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            compiled: CompiledFormat::compile(pattern, zone, locale, Some(century))?,
        })
    }

    /// Get a cached instance for the pattern, compiling on first use.
    pub fn get_instance(
        pattern: &str,
        zone: Zone,
        locale: &str,
    ) -> Result<Arc<Self>, PatternError> {
        DEFAULT_CACHE.instance(pattern, zone, locale)
    }

    /// Get a cached instance for a canned date style.
    pub fn get_date_instance(
        style: Style,
        zone: Zone,
        locale: &str,
    ) -> Result<Arc<Self>, PatternError> {
        DEFAULT_CACHE.date_instance(style, zone, locale)
    }

    /// Get a cached instance for a canned time style.
    pub fn get_time_instance(
        style: Style,
        zone: Zone,
        locale: &str,
    ) -> Result<Arc<Self>, PatternError> {
        DEFAULT_CACHE.time_instance(style, zone, locale)
    }

    /// Get a cached instance combining a date style and a time style.
    pub fn get_date_time_instance(
        date_style: Style,
        time_style: Style,
        zone: Zone,
        locale: &str,
    ) -> Result<Arc<Self>, PatternError> {
        DEFAULT_CACHE.date_time_instance(date_style, time_style, zone, locale)
    }

    /// The pattern this format was compiled from.
    pub fn pattern(&self) -> &str {
        &self.compiled.pattern
    }

    /// The zone this format is bound to.
    pub fn zone(&self) -> Zone {
        self.compiled.zone
    }

    /// The normalized locale tag this format was compiled for.
    pub fn locale(&self) -> &str {
        &self.compiled.locale_tag
    }

    /// Worst-case formatted length, usable to presize external buffers.
    pub fn max_length_estimate(&self) -> usize {
        self.compiled.estimate
    }

    /// Format a field snapshot.
    pub fn format<T: Temporal>(&self, value: &T) -> String {
        format_rules(&self.compiled.rules, self.compiled.estimate, value)
    }

    /// Format a field snapshot into an existing buffer.
    pub fn format_into<T: Temporal>(&self, value: &T, out: &mut String) {
        format_rules_into(&self.compiled.rules, value, out);
    }

    /// Format a chrono datetime by snapshotting its fields.
    pub fn format_datetime(&self, datetime: &DateTime<Tz>) -> String {
        self.format(&DateTimeFields::from_datetime(datetime))
    }

    /// Parse text into a fresh field snapshot bound to this format's zone.
    ///
    /// The whole input need not be consumed; trailing text after the final
    /// strategy is ignored. The first strategy mismatch aborts with an
    /// error carrying the source text and failure index.
    pub fn parse(&self, text: &str) -> Result<DateTimeFields, ParseError> {
        let mut fields = DateTimeFields::new();
        fields.set_zone(self.compiled.zone);
        fields.set(Field::ZoneOffset, self.compiled.zone.raw_offset_millis());

        let mut pos = 0;
        match run_strategies(
            &self.compiled.strategies,
            &self.compiled.century,
            text,
            &mut pos,
            &mut fields,
        ) {
            Ok(()) => Ok(fields),
            Err(index) => Err(ParseError::new(
                text,
                index,
                self.compiled.locale.restricted_range,
            )),
        }
    }

    /// Parse into a caller-supplied snapshot, advancing `pos` past the
    /// consumed text. Returns false on the first strategy mismatch, leaving
    /// `pos` at the failure index.
    pub fn parse_into<T: Temporal>(&self, text: &str, pos: &mut usize, value: &mut T) -> bool {
        run_strategies(
            &self.compiled.strategies,
            &self.compiled.century,
            text,
            pos,
            value,
        )
        .is_ok()
    }
}

impl PartialEq for FastDateFormat {
    fn eq(&self, other: &Self) -> bool {
        self.compiled.pattern == other.compiled.pattern
            && self.compiled.zone == other.compiled.zone
            && self.compiled.locale_tag == other.compiled.locale_tag
    }
}

impl Eq for FastDateFormat {}

impl Hash for FastDateFormat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.compiled.pattern.hash(state);
        self.compiled.zone.hash(state);
        self.compiled.locale_tag.hash(state);
    }
}

impl fmt::Display for FastDateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compiled.pattern)
    }
}

impl fmt::Debug for FastDateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastDateFormat")
            .field("pattern", &self.compiled.pattern)
            .field("zone", &self.compiled.zone.id())
            .field("locale", &self.compiled.locale_tag)
            .finish()
    }
}
