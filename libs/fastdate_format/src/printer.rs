// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Compiled formatting rules.
//!
//! Each directive of a pattern compiles to one [`Rule`]. Formatting walks
//! the rule sequence in order, appending into a presized `String`. The rule
//! set is closed; adding a directive means adding a variant here and in the
//! parser's strategy set.

use crate::temporal::{Field, Temporal};
use crate::zone::{MILLIS_PER_HOUR, MILLIS_PER_MINUTE};

/// Zero-padding behavior of a numeric rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pad {
    /// No padding
    None,
    /// Always exactly two digits (values are < 100 for these fields)
    Two,
    /// Left-pad with zeros to the declared pattern width
    Width(usize),
}

impl Pad {
    pub(crate) fn for_width(width: usize) -> Pad {
        match width {
            1 => Pad::None,
            2 => Pad::Two,
            _ => Pad::Width(width),
        }
    }

    fn estimate(&self) -> usize {
        match self {
            Pad::None => 4,
            Pad::Two => 2,
            Pad::Width(width) => (*width).max(4),
        }
    }
}

/// Output granularity of an ISO-8601 offset rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IsoStyle {
    /// ±HH
    Hours,
    /// ±HHMM
    HoursMinutes,
    /// ±HH:MM
    HoursColonMinutes,
}

/// One compiled formatting step.
#[derive(Debug, Clone)]
pub(crate) enum Rule {
    CharLiteral(char),
    StrLiteral(String),
    /// Locale display name indexed by the field value
    Text {
        field: Field,
        names: Vec<&'static str>,
    },
    Number {
        field: Field,
        pad: Pad,
    },
    /// `year mod 100`, always two digits
    TwoDigitYear {
        field: Field,
    },
    /// Hour in am/pm; 0 displays as 12
    TwelveHour {
        pad: Pad,
    },
    /// Hour in day 1-24; 0 displays as 24
    TwentyFourHour {
        pad: Pad,
    },
    /// ISO weekday number, Monday=1 .. Sunday=7
    IsoWeekday {
        pad: Pad,
    },
    /// Precomputed zone display names, selected by the DST offset
    ZoneName {
        standard: String,
        daylight: String,
    },
    /// ±HHMM from zone offset + DST offset
    ZoneOffset,
    /// ISO-8601 offset with a literal `Z` at exactly zero
    IsoOffset {
        style: IsoStyle,
    },
}

impl Rule {
    /// Worst-case output length, used to presize format buffers.
    pub(crate) fn estimate_len(&self) -> usize {
        match self {
            Rule::CharLiteral(_) => 1,
            Rule::StrLiteral(s) => s.len(),
            Rule::Text { names, .. } => names.iter().map(|n| n.len()).max().unwrap_or(0),
            Rule::Number { pad, .. } => pad.estimate(),
            Rule::TwoDigitYear { .. } => 2,
            Rule::TwelveHour { pad } | Rule::TwentyFourHour { pad } | Rule::IsoWeekday { pad } => {
                pad.estimate()
            },
            Rule::ZoneName { standard, daylight } => standard.len().max(daylight.len()),
            Rule::ZoneOffset => 5,
            Rule::IsoOffset { .. } => 6,
        }
    }

    pub(crate) fn append_to<T: Temporal>(&self, out: &mut String, value: &T) {
        match self {
            Rule::CharLiteral(c) => out.push(*c),
            Rule::StrLiteral(s) => out.push_str(s),
            Rule::Text { field, names } => {
                let index = match field {
                    Field::Month => value.get(Field::Month) - 1,
                    _ => value.get(*field),
                };
                if let Some(name) = usize::try_from(index).ok().and_then(|i| names.get(i)) {
                    out.push_str(name);
                }
            },
            Rule::Number { field, pad } => append_number(out, value.get(*field), *pad),
            Rule::TwoDigitYear { field } => {
                append_two_digits(out, value.get(*field).rem_euclid(100));
            },
            Rule::TwelveHour { pad } => {
                let mut hour = value.get(Field::Hour);
                if hour == 0 {
                    hour = 12;
                }
                append_number(out, hour, *pad);
            },
            Rule::TwentyFourHour { pad } => {
                let mut hour = value.get(Field::HourOfDay);
                if hour == 0 {
                    hour = 24;
                }
                append_number(out, hour, *pad);
            },
            Rule::IsoWeekday { pad } => {
                let dow = value.get(Field::DayOfWeek);
                append_number(out, if dow == 0 { 7 } else { dow }, *pad);
            },
            Rule::ZoneName { standard, daylight } => {
                if value.get(Field::DstOffset) != 0 {
                    out.push_str(daylight);
                } else {
                    out.push_str(standard);
                }
            },
            Rule::ZoneOffset => {
                let offset = value.get(Field::ZoneOffset) + value.get(Field::DstOffset);
                append_offset(out, offset);
            },
            Rule::IsoOffset { style } => {
                let mut offset = value.get(Field::ZoneOffset) + value.get(Field::DstOffset);
                if offset == 0 {
                    out.push('Z');
                    return;
                }
                if offset < 0 {
                    out.push('-');
                    offset = -offset;
                } else {
                    out.push('+');
                }
                append_two_digits(out, offset / MILLIS_PER_HOUR);
                match style {
                    IsoStyle::Hours => {},
                    IsoStyle::HoursMinutes => {
                        append_two_digits(out, offset % MILLIS_PER_HOUR / MILLIS_PER_MINUTE);
                    },
                    IsoStyle::HoursColonMinutes => {
                        out.push(':');
                        append_two_digits(out, offset % MILLIS_PER_HOUR / MILLIS_PER_MINUTE);
                    },
                }
            },
        }
    }
}

/// Append every rule in sequence into a fresh, presized buffer.
pub(crate) fn format_rules<T: Temporal>(rules: &[Rule], estimate: usize, value: &T) -> String {
    let mut out = String::with_capacity(estimate);
    format_rules_into(rules, value, &mut out);
    out
}

pub(crate) fn format_rules_into<T: Temporal>(rules: &[Rule], value: &T, out: &mut String) {
    for rule in rules {
        rule.append_to(out, value);
    }
}

fn append_number(out: &mut String, value: i32, pad: Pad) {
    match pad {
        Pad::None => {
            // Single digit fast path; anything larger takes the itoa path
            if (0..10).contains(&value) {
                out.push((b'0' + value as u8) as char);
            } else {
                let mut buf = itoa::Buffer::new();
                out.push_str(buf.format(value));
            }
        },
        Pad::Two => append_two_digits(out, value),
        Pad::Width(width) => {
            let mut buf = itoa::Buffer::new();
            let digits = buf.format(value);
            for _ in digits.len()..width {
                out.push('0');
            }
            out.push_str(digits);
        },
    }
}

fn append_two_digits(out: &mut String, value: i32) {
    if (0..100).contains(&value) {
        out.push((b'0' + (value / 10) as u8) as char);
        out.push((b'0' + (value % 10) as u8) as char);
    } else {
        let mut buf = itoa::Buffer::new();
        out.push_str(buf.format(value));
    }
}

/// ±HHMM from a total offset in milliseconds.
fn append_offset(out: &mut String, offset_millis: i32) {
    let mut offset = offset_millis;
    if offset < 0 {
        out.push('-');
        offset = -offset;
    } else {
        out.push('+');
    }
    append_two_digits(out, offset / MILLIS_PER_HOUR);
    append_two_digits(out, offset % MILLIS_PER_HOUR / MILLIS_PER_MINUTE);
}
