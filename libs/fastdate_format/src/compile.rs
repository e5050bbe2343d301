// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Pattern compilation.
//!
//! A pattern is tokenized once and each token resolved into a formatting
//! [`Rule`] and a parsing [`Strategy`] in a single pass. The result is an
//! immutable [`CompiledFormat`] that is never mutated after construction
//! and is safe for unsynchronized concurrent reads.

use fastdate_locale::{get_locale_data, LocaleData};

use crate::error::PatternError;
use crate::parser::{text_matcher, zone_matcher, CenturyWindow, NumberKind, Strategy};
use crate::pattern::{tokenize, Token};
use crate::printer::{IsoStyle, Pad, Rule};
use crate::temporal::Field;
use crate::zone::{FixedZone, Zone};

/// The immutable output of compiling one pattern against a zone and locale.
#[derive(Debug)]
pub(crate) struct CompiledFormat {
    pub(crate) pattern: String,
    pub(crate) zone: Zone,
    pub(crate) locale_tag: String,
    pub(crate) locale: &'static LocaleData,
    pub(crate) rules: Vec<Rule>,
    pub(crate) strategies: Vec<(Strategy, usize)>,
    pub(crate) estimate: usize,
    pub(crate) century: CenturyWindow,
}

pub(crate) fn normalize_locale(tag: &str) -> String {
    tag.to_lowercase().replace('_', "-")
}

impl CompiledFormat {
    pub(crate) fn compile(
        pattern: &str,
        zone: Zone,
        locale_tag: &str,
        century: Option<CenturyWindow>,
    ) -> Result<Self, PatternError> {
        let locale = get_locale_data(locale_tag);
        let tokens = tokenize(pattern)?;

        let mut rules = Vec::with_capacity(tokens.len());
        let mut strategies = Vec::with_capacity(tokens.len());
        for token in &tokens {
            match token {
                Token::Literal(text) => {
                    let mut chars = text.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => rules.push(Rule::CharLiteral(c)),
                        _ => rules.push(Rule::StrLiteral(text.clone())),
                    }
                    strategies.push((Strategy::Literal(text.clone()), text.chars().count()));
                },
                Token::Directive {
                    letter,
                    width,
                    index,
                } => {
                    let (rule, strategy) =
                        resolve_directive(*letter, *width, *index, zone, locale)?;
                    rules.push(rule);
                    strategies.push((strategy, *width));
                },
            }
        }

        let estimate = rules.iter().map(Rule::estimate_len).sum();
        let century = century.unwrap_or_else(|| {
            if locale.restricted_range.is_some() {
                CenturyWindow::fixed_epoch()
            } else {
                CenturyWindow::current()
            }
        });

        Ok(Self {
            pattern: pattern.to_string(),
            zone,
            locale_tag: normalize_locale(locale_tag),
            locale,
            rules,
            strategies,
            estimate,
            century,
        })
    }
}

/// Resolve one directive into its print rule and parse strategy.
fn resolve_directive(
    letter: char,
    width: usize,
    index: usize,
    zone: Zone,
    locale: &'static LocaleData,
) -> Result<(Rule, Strategy), PatternError> {
    let resolved = match letter {
        'G' => (
            Rule::Text {
                field: Field::Era,
                names: locale.eras.to_vec(),
            },
            text(locale, Field::Era),
        ),
        'y' => year(Field::Year, width),
        'Y' => year(Field::WeekYear, width),
        'M' => match width {
            1 => numeric(Field::Month, 1),
            2 => numeric(Field::Month, 2),
            3 => (
                Rule::Text {
                    field: Field::Month,
                    names: locale.months_abbr.to_vec(),
                },
                text(locale, Field::Month),
            ),
            _ => (
                Rule::Text {
                    field: Field::Month,
                    names: locale.months_wide.to_vec(),
                },
                text(locale, Field::Month),
            ),
        },
        'd' => numeric(Field::DayOfMonth, width),
        'h' => (
            Rule::TwelveHour {
                pad: Pad::for_width(width),
            },
            Strategy::Number {
                field: Field::Hour,
                kind: NumberKind::TwelveHour,
            },
        ),
        'H' => numeric(Field::HourOfDay, width),
        'k' => (
            Rule::TwentyFourHour {
                pad: Pad::for_width(width),
            },
            Strategy::Number {
                field: Field::HourOfDay,
                kind: NumberKind::TwentyFourHour,
            },
        ),
        'K' => numeric(Field::Hour, width),
        'm' => numeric(Field::Minute, width),
        's' => numeric(Field::Second, width),
        'S' => numeric(Field::Millisecond, width),
        'E' => (
            Rule::Text {
                field: Field::DayOfWeek,
                names: if width < 4 {
                    locale.days_abbr.to_vec()
                } else {
                    locale.days_wide.to_vec()
                },
            },
            text(locale, Field::DayOfWeek),
        ),
        'u' => (
            Rule::IsoWeekday {
                pad: Pad::for_width(width),
            },
            Strategy::Number {
                field: Field::DayOfWeek,
                kind: NumberKind::IsoWeekday,
            },
        ),
        'D' => numeric(Field::DayOfYear, width),
        'F' => numeric(Field::DayOfWeekInMonth, width),
        'w' => numeric(Field::WeekOfYear, width),
        'W' => numeric(Field::WeekOfMonth, width),
        'a' => (
            Rule::Text {
                field: Field::AmPm,
                names: vec![locale.am, locale.pm],
            },
            text(locale, Field::AmPm),
        ),
        'z' => {
            let (standard, daylight) = zone_display_names(zone, locale, width >= 4);
            (
                Rule::ZoneName { standard, daylight },
                Strategy::ZoneText {
                    matcher: zone_matcher(locale),
                },
            )
        },
        'Z' => match width {
            2 => (
                Rule::IsoOffset {
                    style: IsoStyle::HoursColonMinutes,
                },
                Strategy::IsoZone {
                    style: IsoStyle::HoursColonMinutes,
                },
            ),
            _ => (
                Rule::ZoneOffset,
                Strategy::ZoneText {
                    matcher: zone_matcher(locale),
                },
            ),
        },
        'X' => {
            let style = match width {
                1 => IsoStyle::Hours,
                2 => IsoStyle::HoursMinutes,
                3 => IsoStyle::HoursColonMinutes,
                _ => {
                    return Err(PatternError::UnsupportedWidth {
                        letter,
                        width,
                        index,
                    })
                },
            };
            (
                Rule::IsoOffset { style },
                Strategy::IsoZone { style },
            )
        },
        _ => return Err(PatternError::UnsupportedLetter { letter, index }),
    };
    Ok(resolved)
}

fn numeric(field: Field, width: usize) -> (Rule, Strategy) {
    (
        Rule::Number {
            field,
            pad: Pad::for_width(width),
        },
        Strategy::Number {
            field,
            kind: NumberKind::Plain,
        },
    )
}

/// `y`/`Y`: width 2 is the two-digit form with century inference on parse;
/// any other width is a plain numeric field.
fn year(field: Field, width: usize) -> (Rule, Strategy) {
    if width == 2 {
        (
            Rule::TwoDigitYear { field },
            Strategy::Number {
                field,
                kind: NumberKind::TwoDigitYear,
            },
        )
    } else {
        numeric(field, width)
    }
}

fn text(locale: &'static LocaleData, field: Field) -> Strategy {
    Strategy::Text {
        field,
        matcher: text_matcher(locale, field),
    }
}

/// Standard and daylight display strings for the bound zone, falling back
/// to GMT offset strings when the locale has no names for it.
fn zone_display_names(zone: Zone, locale: &LocaleData, long: bool) -> (String, String) {
    let id = zone.id();
    if let Some(names) = locale.zone_names(&id) {
        if long {
            (names.std_long.to_string(), names.dst_long.to_string())
        } else {
            (names.std_short.to_string(), names.dst_short.to_string())
        }
    } else {
        let raw = zone.raw_offset_millis();
        let savings = zone.dst_savings_millis();
        (
            FixedZone::from_millis(raw).to_string(),
            FixedZone::from_millis(raw + savings).to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_counts_tokens() {
        let compiled =
            CompiledFormat::compile("yyyy-MM-dd'T'HH:mm:ss", Zone::UTC, "en-US", None).unwrap();
        // y - M - d T H : m : s
        assert_eq!(compiled.rules.len(), 11);
        assert_eq!(compiled.strategies.len(), 11);
        assert!(compiled.estimate >= 19);
    }

    #[test]
    fn test_unsupported_letter_fails() {
        let err = CompiledFormat::compile("Q", Zone::UTC, "en-US", None).unwrap_err();
        assert_eq!(
            err,
            PatternError::UnsupportedLetter {
                letter: 'Q',
                index: 0
            }
        );

        let err = CompiledFormat::compile("yyyy-qq", Zone::UTC, "en-US", None).unwrap_err();
        assert_eq!(
            err,
            PatternError::UnsupportedLetter {
                letter: 'q',
                index: 5
            }
        );
    }

    #[test]
    fn test_iso_offset_width_limit() {
        assert!(CompiledFormat::compile("XXX", Zone::UTC, "en-US", None).is_ok());
        let err = CompiledFormat::compile("XXXX", Zone::UTC, "en-US", None).unwrap_err();
        assert_eq!(
            err,
            PatternError::UnsupportedWidth {
                letter: 'X',
                width: 4,
                index: 0
            }
        );
    }

    #[test]
    fn test_locale_tag_normalized() {
        let compiled = CompiledFormat::compile("yyyy", Zone::UTC, "EN_us", None).unwrap();
        assert_eq!(compiled.locale_tag, "en-us");
    }

    #[test]
    fn test_imperial_locale_century_epoch() {
        let compiled =
            CompiledFormat::compile("yy", Zone::UTC, "ja-JP-u-ca-japanese", None).unwrap();
        assert_eq!(compiled.century, CenturyWindow::fixed_epoch());
    }

    #[test]
    fn test_zone_display_fallback_is_gmt_string() {
        let zone = Zone::Fixed(FixedZone::from_millis(2 * 3_600_000));
        let locale = get_locale_data("en-US");
        let (standard, daylight) = zone_display_names(zone, locale, true);
        assert_eq!(standard, "GMT+02:00");
        assert_eq!(daylight, "GMT+02:00");
    }

    #[test]
    fn test_zone_display_named() {
        let zone = Zone::lookup("America/New_York").unwrap();
        let locale = get_locale_data("en-US");
        let (standard, daylight) = zone_display_names(zone, locale, false);
        assert_eq!(standard, "EST");
        assert_eq!(daylight, "EDT");
    }
}
