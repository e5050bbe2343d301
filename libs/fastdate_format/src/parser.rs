// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Compiled parsing strategies.
//!
//! Each directive of a pattern compiles to one [`Strategy`]. Parsing walks
//! the strategy sequence with a single shared cursor; the first strategy
//! that fails aborts the whole parse at that cursor. There is no
//! backtracking between strategies.
//!
//! Locale text (eras, months, weekdays, am/pm, zone names) is recognized
//! with one case-insensitive regex alternation per field, built from the
//! locale's display-name table sorted longest-first so the alternation
//! prefers the longest valid match. Built alternations are memoized
//! per (locale, field) with the usual install-if-absent discipline.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{Datelike, Utc};
use fastdate_locale::LocaleData;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::printer::IsoStyle;
use crate::temporal::{Field, Temporal};
use crate::zone::{FixedZone, Zone, MILLIS_PER_HOUR, MILLIS_PER_MINUTE};

/// Anchor range for resolving two-digit years to full years.
///
/// A parsed value `v` in 0-99 resolves to `century_base + v`, moved forward
/// one century when `v` falls below `start_year`, so every resolved year
/// lands inside `[century_base + start_year, century_base + start_year + 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenturyWindow {
    century_base: i32,
    start_year: i32,
}

impl CenturyWindow {
    /// Window with an explicit century anchor, e.g. `(1900, 50)` resolves
    /// two-digit years into 1950-2049.
    pub fn new(century_base: i32, start_year: i32) -> Self {
        Self {
            century_base,
            start_year,
        }
    }

    /// Window starting 80 years before the given year.
    pub fn around_year(year: i32) -> Self {
        let start = year - 80;
        Self {
            century_base: start.div_euclid(100) * 100,
            start_year: start.rem_euclid(100),
        }
    }

    /// Window starting 80 years before now.
    pub fn current() -> Self {
        Self::around_year(Utc::now().year())
    }

    /// Fixed epoch window used by the Japanese imperial calendar locale.
    pub fn fixed_epoch() -> Self {
        Self {
            century_base: 0,
            start_year: 0,
        }
    }

    pub(crate) fn expand(&self, value: i32) -> i32 {
        let mut year = self.century_base + value;
        if value < self.start_year {
            year += 100;
        }
        year
    }
}

/// Value adjustment applied after a numeric field is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberKind {
    Plain,
    /// Century expansion when the consumed digit run is exactly two long
    TwoDigitYear,
    /// Displayed 12 is internal hour 0
    TwelveHour,
    /// Displayed 24 is internal hour-of-day 0
    TwentyFourHour,
    /// ISO Monday=1..Sunday=7 back to 0=Sunday..6=Saturday
    IsoWeekday,
}

impl NumberKind {
    fn apply(&self, raw: i32, digits: usize, century: &CenturyWindow) -> i32 {
        match self {
            NumberKind::Plain => raw,
            NumberKind::TwoDigitYear => {
                if digits == 2 {
                    century.expand(raw)
                } else {
                    raw
                }
            },
            NumberKind::TwelveHour => {
                if raw == 12 {
                    0
                } else {
                    raw
                }
            },
            NumberKind::TwentyFourHour => {
                if raw == 24 {
                    0
                } else {
                    raw
                }
            },
            NumberKind::IsoWeekday => {
                if raw == 7 {
                    0
                } else {
                    raw
                }
            },
        }
    }
}

/// One compiled parsing step.
#[derive(Debug, Clone)]
pub(crate) enum Strategy {
    /// Exact character match, no case folding
    Literal(String),
    Number {
        field: Field,
        kind: NumberKind,
    },
    /// Locale display-name alternation
    Text {
        field: Field,
        matcher: Arc<TextMatcher>,
    },
    /// RFC-822 offset, GMT-style offset, or locale zone name
    ZoneText {
        matcher: Arc<ZoneMatcher>,
    },
    /// ISO-8601 offset with literal `Z`
    IsoZone {
        style: IsoStyle,
    },
}

impl Strategy {
    pub(crate) fn is_numeric(&self) -> bool {
        matches!(self, Strategy::Number { .. })
    }

    pub(crate) fn parse<T: Temporal>(
        &self,
        value: &mut T,
        input: &str,
        pos: &mut usize,
        max_width: usize,
        century: &CenturyWindow,
    ) -> bool {
        match self {
            Strategy::Literal(expected) => {
                if input[*pos..].starts_with(expected.as_str()) {
                    *pos += expected.len();
                    true
                } else {
                    false
                }
            },
            Strategy::Number { field, kind } => match scan_digits(input, pos, max_width) {
                Some((raw, digits)) => {
                    value.set(*field, kind.apply(raw, digits, century));
                    true
                },
                None => false,
            },
            Strategy::Text { field, matcher } => match matcher.matches(input, pos) {
                Some(v) => {
                    value.set(*field, v);
                    true
                },
                None => false,
            },
            Strategy::ZoneText { matcher } => matcher.matches(value, input, pos),
            Strategy::IsoZone { style } => parse_iso_zone(*style, value, input, pos),
        }
    }
}

/// Walk the strategy sequence over the input with one shared cursor.
///
/// A numeric strategy is bounded to its declared pattern width only while
/// it touches another numeric strategy; in isolation it consumes every
/// consecutive digit available. On failure the error index is the cursor
/// position where the failing strategy started.
pub(crate) fn run_strategies<T: Temporal>(
    sequence: &[(Strategy, usize)],
    century: &CenturyWindow,
    input: &str,
    pos: &mut usize,
    value: &mut T,
) -> Result<(), usize> {
    let mut prev_numeric = false;
    let mut steps = sequence.iter().peekable();
    while let Some((strategy, width)) = steps.next() {
        let next_numeric = matches!(steps.peek(), Some((next, _)) if next.is_numeric());
        let max_width = if strategy.is_numeric() && (prev_numeric || next_numeric) {
            *width
        } else {
            0
        };
        if !strategy.parse(value, input, pos, max_width, century) {
            return Err(*pos);
        }
        prev_numeric = strategy.is_numeric();
    }
    Ok(())
}

/// Consume up to `max_width` consecutive ASCII digits (unbounded when 0).
fn scan_digits(input: &str, pos: &mut usize, max_width: usize) -> Option<(i32, usize)> {
    let bytes = input.as_bytes();
    let start = *pos;
    let limit = if max_width == 0 {
        bytes.len()
    } else {
        bytes.len().min(start + max_width)
    };

    let mut end = start;
    let mut value: i64 = 0;
    while end < limit && bytes[end].is_ascii_digit() {
        value = value * 10 + (bytes[end] - b'0') as i64;
        if value > i32::MAX as i64 {
            return None;
        }
        end += 1;
    }
    if end == start {
        return None;
    }
    *pos = end;
    Some((value as i32, end - start))
}

/// Case-insensitive display-name recognizer for one locale field.
#[derive(Debug)]
pub(crate) struct TextMatcher {
    regex: Regex,
    values: HashMap<String, i32>,
}

impl TextMatcher {
    fn build(locale: &'static LocaleData, field: Field) -> Self {
        let mut entries: Vec<(&'static str, i32)> = Vec::new();
        match field {
            Field::Era => {
                for (i, name) in locale.eras.iter().enumerate() {
                    entries.push((*name, i as i32));
                }
            },
            Field::AmPm => {
                entries.push((locale.am, 0));
                entries.push((locale.pm, 1));
            },
            Field::Month => {
                // Both display widths parse regardless of the declared one
                for (i, name) in locale.months_wide.iter().enumerate() {
                    entries.push((*name, i as i32 + 1));
                }
                for (i, name) in locale.months_abbr.iter().enumerate() {
                    entries.push((*name, i as i32 + 1));
                }
            },
            Field::DayOfWeek => {
                for (i, name) in locale.days_wide.iter().enumerate() {
                    entries.push((*name, i as i32));
                }
                for (i, name) in locale.days_abbr.iter().enumerate() {
                    entries.push((*name, i as i32));
                }
            },
            _ => {},
        }

        let mut values = HashMap::with_capacity(entries.len());
        let mut names: Vec<&str> = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            let lower = name.to_lowercase();
            if !values.contains_key(&lower) {
                values.insert(lower, value);
                names.push(name);
            }
        }

        TextMatcher {
            regex: alternation(&names, &[]),
            values,
        }
    }

    fn matches(&self, input: &str, pos: &mut usize) -> Option<i32> {
        let found = self.regex.find(&input[*pos..])?;
        if found.end() == 0 {
            return None;
        }
        let matched = &input[*pos..*pos + found.end()];
        let value = *self.values.get(&matched.to_lowercase())?;
        *pos += found.end();
        Some(value)
    }
}

/// Timezone recognizer: RFC-822 `±HHMM`, GMT-style offsets, or zone
/// display names from the locale table.
#[derive(Debug)]
pub(crate) struct ZoneMatcher {
    regex: Regex,
    names: HashMap<String, ZoneEntry>,
}

#[derive(Debug, Clone, Copy)]
struct ZoneEntry {
    zone: Zone,
    daylight: bool,
}

impl ZoneMatcher {
    fn build(locale: &'static LocaleData) -> Self {
        let mut entries: Vec<(&'static str, ZoneEntry)> = vec![
            (
                "UTC",
                ZoneEntry {
                    zone: Zone::UTC,
                    daylight: false,
                },
            ),
            (
                "GMT",
                ZoneEntry {
                    zone: Zone::UTC,
                    daylight: false,
                },
            ),
        ];
        for zone_names in locale.zones {
            let Some(zone) = Zone::lookup(zone_names.id) else {
                continue;
            };
            let std = ZoneEntry {
                zone,
                daylight: false,
            };
            let dst = ZoneEntry {
                zone,
                daylight: true,
            };
            entries.push((zone_names.id, std));
            entries.push((zone_names.std_long, std));
            entries.push((zone_names.std_short, std));
            entries.push((zone_names.dst_long, dst));
            entries.push((zone_names.dst_short, dst));
        }

        let mut names = HashMap::with_capacity(entries.len());
        let mut surface: Vec<&str> = Vec::with_capacity(entries.len());
        for (name, entry) in entries {
            let lower = name.to_lowercase();
            if !names.contains_key(&lower) {
                names.insert(lower, entry);
                surface.push(name);
            }
        }

        // Offset forms take precedence over display names
        let regex = alternation(&surface, &[r"GMT[+-]\d{1,2}(?::\d{2})?", r"[+-]\d{4}"]);
        ZoneMatcher { regex, names }
    }

    fn matches<T: Temporal>(&self, value: &mut T, input: &str, pos: &mut usize) -> bool {
        let found = match self.regex.find(&input[*pos..]) {
            Some(found) if found.end() > 0 => found,
            _ => return false,
        };
        let matched = &input[*pos..*pos + found.end()];

        let bytes = matched.as_bytes();
        if bytes[0] == b'+' || bytes[0] == b'-' {
            apply_zone(value, Zone::Fixed(rfc822_offset(bytes)), false);
        } else if let Some(entry) = self.names.get(&matched.to_lowercase()) {
            apply_zone(value, entry.zone, entry.daylight);
        } else if matched.len() > 3 && matched[..3].eq_ignore_ascii_case("GMT") {
            match FixedZone::parse(&["GMT", &matched[3..]].concat()) {
                Some(fixed) => apply_zone(value, Zone::Fixed(fixed), false),
                None => return false,
            }
        } else {
            return false;
        }
        *pos += found.end();
        true
    }
}

/// `±HHMM` with exactly four digits, already validated by the regex.
fn rfc822_offset(bytes: &[u8]) -> FixedZone {
    let sign = if bytes[0] == b'-' { -1 } else { 1 };
    let hours = ((bytes[1] - b'0') * 10 + (bytes[2] - b'0')) as i32;
    let minutes = ((bytes[3] - b'0') * 10 + (bytes[4] - b'0')) as i32;
    FixedZone::from_millis(sign * (hours * MILLIS_PER_HOUR + minutes * MILLIS_PER_MINUTE))
}

fn apply_zone<T: Temporal>(value: &mut T, zone: Zone, daylight: bool) {
    value.set(Field::ZoneOffset, zone.raw_offset_millis());
    value.set(
        Field::DstOffset,
        if daylight { zone.dst_savings_millis() } else { 0 },
    );
    value.set_zone(zone);
}

static ISO_HOURS: Lazy<Regex> = Lazy::new(|| iso_regex(r"^(?:Z|[+-]\d{2})"));
static ISO_HOURS_MINUTES: Lazy<Regex> = Lazy::new(|| iso_regex(r"^(?:Z|[+-]\d{2}\d{2})"));
static ISO_HOURS_COLON_MINUTES: Lazy<Regex> = Lazy::new(|| iso_regex(r"^(?:Z|[+-]\d{2}:\d{2})"));

fn iso_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("fixed offset pattern is a valid regex")
}

fn parse_iso_zone<T: Temporal>(
    style: IsoStyle,
    value: &mut T,
    input: &str,
    pos: &mut usize,
) -> bool {
    let regex = match style {
        IsoStyle::Hours => &ISO_HOURS,
        IsoStyle::HoursMinutes => &ISO_HOURS_MINUTES,
        IsoStyle::HoursColonMinutes => &ISO_HOURS_COLON_MINUTES,
    };
    let found = match regex.find(&input[*pos..]) {
        Some(found) => found,
        None => return false,
    };
    let matched = &input[*pos..*pos + found.end()];

    if matched == "Z" {
        apply_zone(value, Zone::UTC, false);
        *pos += 1;
        return true;
    }

    let bytes = matched.as_bytes();
    let sign = if bytes[0] == b'-' { -1 } else { 1 };
    let hours = ((bytes[1] - b'0') * 10 + (bytes[2] - b'0')) as i32;
    let minutes = match style {
        IsoStyle::Hours => 0,
        IsoStyle::HoursMinutes => ((bytes[3] - b'0') * 10 + (bytes[4] - b'0')) as i32,
        IsoStyle::HoursColonMinutes => ((bytes[4] - b'0') * 10 + (bytes[5] - b'0')) as i32,
    };
    let fixed = FixedZone::from_millis(sign * (hours * MILLIS_PER_HOUR + minutes * MILLIS_PER_MINUTE));
    apply_zone(value, Zone::Fixed(fixed), false);
    *pos += found.end();
    true
}

/// Build an anchored case-insensitive alternation: fixed prefix patterns
/// first, then literal names sorted longest-first so the longest valid
/// match wins.
fn alternation(names: &[&str], prefix_patterns: &[&str]) -> Regex {
    let mut sorted: Vec<&str> = names.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut pattern = String::with_capacity(64);
    pattern.push_str("^(?:");
    let mut first = true;
    for p in prefix_patterns {
        if !first {
            pattern.push('|');
        }
        pattern.push_str(p);
        first = false;
    }
    for name in sorted {
        if !first {
            pattern.push('|');
        }
        pattern.push_str(&regex::escape(name));
        first = false;
    }
    pattern.push(')');

    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped alternation is a valid regex")
}

/// Process-wide memo of built text alternations, keyed by (locale, field).
static TEXT_MATCHERS: Lazy<RwLock<HashMap<(&'static str, Field), Arc<TextMatcher>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Process-wide memo of built zone alternations, keyed by locale.
static ZONE_MATCHERS: Lazy<RwLock<HashMap<&'static str, Arc<ZoneMatcher>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub(crate) fn text_matcher(locale: &'static LocaleData, field: Field) -> Arc<TextMatcher> {
    let key = (locale.tag, field);
    if let Ok(cache) = TEXT_MATCHERS.read() {
        if let Some(matcher) = cache.get(&key) {
            return matcher.clone();
        }
    }
    // Build outside any lock; racers converge on whichever install won
    let built = Arc::new(TextMatcher::build(locale, field));
    match TEXT_MATCHERS.write() {
        Ok(mut cache) => cache.entry(key).or_insert(built).clone(),
        Err(_) => built,
    }
}

pub(crate) fn zone_matcher(locale: &'static LocaleData) -> Arc<ZoneMatcher> {
    if let Ok(cache) = ZONE_MATCHERS.read() {
        if let Some(matcher) = cache.get(locale.tag) {
            return matcher.clone();
        }
    }
    let built = Arc::new(ZoneMatcher::build(locale));
    match ZONE_MATCHERS.write() {
        Ok(mut cache) => cache.entry(locale.tag).or_insert(built).clone(),
        Err(_) => built,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::DateTimeFields;
    use fastdate_locale::get_locale_data;

    #[test]
    fn test_century_window_boundary() {
        let window = CenturyWindow::new(1900, 50);
        assert_eq!(window.expand(49), 2049);
        assert_eq!(window.expand(50), 1950);
        assert_eq!(window.expand(99), 1999);
        assert_eq!(window.expand(0), 2000);
    }

    #[test]
    fn test_century_window_around_year() {
        let window = CenturyWindow::around_year(2024);
        // Window covers 1944-2043
        assert_eq!(window.expand(44), 1944);
        assert_eq!(window.expand(43), 2043);
    }

    #[test]
    fn test_scan_digits_unbounded() {
        let mut pos = 0;
        assert_eq!(scan_digits("19990601", &mut pos, 0), Some((19_990_601, 8)));
        assert_eq!(pos, 8);
    }

    #[test]
    fn test_scan_digits_bounded() {
        let mut pos = 0;
        assert_eq!(scan_digits("19990601", &mut pos, 4), Some((1999, 4)));
        assert_eq!(pos, 4);
    }

    #[test]
    fn test_scan_digits_no_digits() {
        let mut pos = 0;
        assert_eq!(scan_digits("abc", &mut pos, 0), None);
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_text_matcher_longest_first() {
        let matcher = text_matcher(get_locale_data("en-US"), Field::Month);
        let mut pos = 0;
        assert_eq!(matcher.matches("February 2", &mut pos), Some(2));
        assert_eq!(pos, "February".len());

        let mut pos = 0;
        assert_eq!(matcher.matches("Feb 2", &mut pos), Some(2));
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_text_matcher_case_insensitive() {
        let matcher = text_matcher(get_locale_data("en-US"), Field::Month);
        let mut pos = 0;
        assert_eq!(matcher.matches("FEBRUARY", &mut pos), Some(2));

        let matcher = text_matcher(get_locale_data("de"), Field::Month);
        let mut pos = 0;
        assert_eq!(matcher.matches("MÄRZ", &mut pos), Some(3));
    }

    #[test]
    fn test_text_matcher_rejects_unknown() {
        let matcher = text_matcher(get_locale_data("en-US"), Field::Month);
        let mut pos = 0;
        assert_eq!(matcher.matches("Smarch", &mut pos), None);
        assert_eq!(pos, 0);
    }

    #[test]
    fn test_zone_matcher_rfc822() {
        let matcher = zone_matcher(get_locale_data("en-US"));
        let mut fields = DateTimeFields::new();
        let mut pos = 0;
        assert!(matcher.matches(&mut fields, "-0430", &mut pos));
        assert_eq!(pos, 5);
        assert_eq!(
            fields.zone_offset_millis,
            -(4 * MILLIS_PER_HOUR + 30 * MILLIS_PER_MINUTE)
        );
        assert_eq!(fields.dst_offset_millis, 0);
    }

    #[test]
    fn test_zone_matcher_gmt_offset() {
        let matcher = zone_matcher(get_locale_data("en-US"));
        let mut fields = DateTimeFields::new();
        let mut pos = 0;
        assert!(matcher.matches(&mut fields, "GMT+2", &mut pos));
        assert_eq!(fields.zone_offset_millis, 2 * MILLIS_PER_HOUR);
    }

    #[test]
    fn test_zone_matcher_daylight_name() {
        let matcher = zone_matcher(get_locale_data("en-US"));
        let mut fields = DateTimeFields::new();
        let mut pos = 0;
        assert!(matcher.matches(&mut fields, "Eastern Daylight Time", &mut pos));
        assert_eq!(fields.zone_offset_millis, -5 * MILLIS_PER_HOUR);
        assert_eq!(fields.dst_offset_millis, MILLIS_PER_HOUR);
        assert_eq!(fields.zone.id(), "America/New_York");
    }

    #[test]
    fn test_iso_zone_z() {
        let mut fields = DateTimeFields::new();
        fields.zone_offset_millis = 123;
        let mut pos = 0;
        assert!(parse_iso_zone(
            IsoStyle::HoursColonMinutes,
            &mut fields,
            "Z",
            &mut pos
        ));
        assert_eq!(fields.zone_offset_millis, 0);
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_iso_zone_styles() {
        let mut fields = DateTimeFields::new();
        let mut pos = 0;
        assert!(parse_iso_zone(IsoStyle::Hours, &mut fields, "+05", &mut pos));
        assert_eq!(fields.zone_offset_millis, 5 * MILLIS_PER_HOUR);

        let mut pos = 0;
        assert!(parse_iso_zone(
            IsoStyle::HoursMinutes,
            &mut fields,
            "-0830",
            &mut pos
        ));
        assert_eq!(
            fields.zone_offset_millis,
            -(8 * MILLIS_PER_HOUR + 30 * MILLIS_PER_MINUTE)
        );

        let mut pos = 0;
        assert!(parse_iso_zone(
            IsoStyle::HoursColonMinutes,
            &mut fields,
            "+09:30",
            &mut pos
        ));
        assert_eq!(
            fields.zone_offset_millis,
            9 * MILLIS_PER_HOUR + 30 * MILLIS_PER_MINUTE
        );
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        let strategy = Strategy::Literal("T".to_string());
        let mut fields = DateTimeFields::new();
        let mut pos = 0;
        assert!(!strategy.parse(&mut fields, "t", &mut pos, 0, &CenturyWindow::fixed_epoch()));
        assert!(strategy.parse(&mut fields, "T", &mut pos, 0, &CenturyWindow::fixed_epoch()));
    }

    #[test]
    fn test_greedy_width_disambiguation() {
        let century = CenturyWindow::fixed_epoch();
        let year_month: Vec<(Strategy, usize)> = vec![
            (
                Strategy::Number {
                    field: Field::Year,
                    kind: NumberKind::Plain,
                },
                4,
            ),
            (
                Strategy::Number {
                    field: Field::Month,
                    kind: NumberKind::Plain,
                },
                2,
            ),
        ];
        let mut fields = DateTimeFields::new();
        let mut pos = 0;
        run_strategies(&year_month, &century, "19990601", &mut pos, &mut fields).unwrap();
        assert_eq!(fields.year, 1999);
        assert_eq!(fields.month, 6);
        // Trailing digits past the bounded month stay unconsumed
        assert_eq!(pos, 6);

        // Nothing numeric follows, so the year absorbs every digit
        let year_only = &year_month[..1];
        let mut fields = DateTimeFields::new();
        let mut pos = 0;
        run_strategies(year_only, &century, "19990601", &mut pos, &mut fields).unwrap();
        assert_eq!(fields.year, 19_990_601);
    }

    #[test]
    fn test_first_failure_aborts_with_index() {
        let century = CenturyWindow::fixed_epoch();
        let sequence: Vec<(Strategy, usize)> = vec![
            (
                Strategy::Number {
                    field: Field::Year,
                    kind: NumberKind::Plain,
                },
                4,
            ),
            (Strategy::Literal("-".to_string()), 1),
            (
                Strategy::Number {
                    field: Field::Month,
                    kind: NumberKind::Plain,
                },
                2,
            ),
        ];
        let mut fields = DateTimeFields::new();
        let mut pos = 0;
        let err = run_strategies(&sequence, &century, "1999/06", &mut pos, &mut fields);
        assert_eq!(err, Err(4));
    }

    #[test]
    fn test_matcher_memoization() {
        let first = text_matcher(get_locale_data("en-US"), Field::Era);
        let second = text_matcher(get_locale_data("en-US"), Field::Era);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
