//! Deadline phrase extraction
//!
//! Turns phrases like "by tomorrow", "next week", "in 3 days", "friday" or
//! "12/25/2024" inside a free-form task description into a concrete calendar
//! date, and strips the phrase from the text. Extraction is pure: the
//! reference date is supplied by the caller, never read from a clock here,
//! so the same input always yields the same result. It is also total — an
//! unrecognized phrase simply yields no deadline.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Result of running the extractor over a description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Description with the deadline phrase removed and whitespace collapsed.
    /// Never empty for non-empty input: if stripping would empty the text,
    /// the original phrase is kept as the description.
    pub cleaned: String,
    /// Resolved deadline date, absent when no phrase was recognized
    pub deadline: Option<NaiveDate>,
}

/// A recognized deadline phrase: its word span and the date it resolves to
struct PhraseMatch {
    start: usize,
    len: usize,
    date: NaiveDate,
}

type MatcherRule = fn(&[&str], NaiveDate) -> Option<PhraseMatch>;

/// Matcher rules in priority order: the most specific pattern wins when
/// phrases could overlap. Each rule scans left-to-right and is independent
/// of the others.
const RULES: [MatcherRule; 4] = [
    match_explicit_date,
    match_relative_days,
    match_named_period,
    match_weekday,
];

/// Connector words tolerated immediately before a deadline phrase;
/// removed together with the phrase.
const CONNECTORS: [&str; 4] = ["by", "on", "due", "at"];

/// Extract a deadline from `text`, resolving relative phrases against `today`
///
/// Only the first phrase by rule priority is consumed; a second date-like
/// phrase later in the text is left untouched in the cleaned description.
pub fn extract(text: &str, today: NaiveDate) -> Extraction {
    let words: Vec<&str> = text.split_whitespace().collect();
    let normalized: Vec<String> = words.iter().map(|w| normalize_word(w)).collect();
    let normalized_refs: Vec<&str> = normalized.iter().map(String::as_str).collect();

    for rule in RULES {
        let Some(matched) = rule(&normalized_refs, today) else {
            continue;
        };

        let mut start = matched.start;
        if start > 0 && CONNECTORS.contains(&normalized_refs[start - 1]) {
            start -= 1;
        }
        let end = matched.start + matched.len;

        let mut kept: Vec<&str> = Vec::with_capacity(words.len());
        kept.extend(&words[..start]);
        kept.extend(&words[end..]);

        let cleaned = if kept.is_empty() {
            // A task description must never be emptied by extraction
            words.join(" ")
        } else {
            kept.join(" ")
        };

        return Extraction {
            cleaned,
            deadline: Some(matched.date),
        };
    }

    Extraction {
        cleaned: words.join(" "),
        deadline: None,
    }
}

/// Lowercase a word and drop trailing punctuation so "Friday." matches
fn normalize_word(word: &str) -> String {
    word.trim_end_matches(['.', ',', '!', '?', ';', ':'])
        .to_lowercase()
}

/// Rule 1: explicit MM/DD/YYYY or MM/DD date
///
/// MM/DD defaults to the current year of the reference date; a month/day that
/// has already passed stays in the current year (no roll-forward). Values
/// outside the month/day range, or combinations invalid for the calendar
/// (e.g. 2/30), are not matched and fall through to later rules.
fn match_explicit_date(words: &[&str], today: NaiveDate) -> Option<PhraseMatch> {
    for (i, word) in words.iter().enumerate() {
        if let Some(date) = parse_slash_date(word, today) {
            return Some(PhraseMatch {
                start: i,
                len: 1,
                date,
            });
        }
    }
    None
}

fn parse_slash_date(word: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = word.split('/').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }

    let month: u32 = parts[0].parse().ok()?;
    let day: u32 = parts[1].parse().ok()?;
    if month == 0 || month > 12 || day == 0 || day > 31 {
        return None;
    }

    let year: i32 = match parts.get(2) {
        Some(y) if y.len() == 4 => y.parse().ok()?,
        Some(_) => return None,
        None => today.year(),
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Rule 2: "in N days" for a positive integer N
fn match_relative_days(words: &[&str], today: NaiveDate) -> Option<PhraseMatch> {
    for i in 0..words.len() {
        if words[i] != "in" {
            continue;
        }
        let Some(count) = words.get(i + 1).and_then(|w| w.parse::<u32>().ok()) else {
            continue;
        };
        if count == 0 {
            continue;
        }
        if let Some(unit) = words.get(i + 2)
            && matches!(*unit, "day" | "days")
            && let Some(date) = today.checked_add_signed(Duration::days(i64::from(count)))
        {
            return Some(PhraseMatch {
                start: i,
                len: 3,
                date,
            });
        }
    }
    None
}

/// Rule 3: named relative periods — "tomorrow", "today", "next week",
/// "next month"
fn match_named_period(words: &[&str], today: NaiveDate) -> Option<PhraseMatch> {
    for i in 0..words.len() {
        match words[i] {
            "tomorrow" => {
                return Some(PhraseMatch {
                    start: i,
                    len: 1,
                    date: today + Duration::days(1),
                });
            }
            "today" => {
                return Some(PhraseMatch {
                    start: i,
                    len: 1,
                    date: today,
                });
            }
            "next" => {
                if let Some(unit) = words.get(i + 1) {
                    match *unit {
                        "week" => {
                            return Some(PhraseMatch {
                                start: i,
                                len: 2,
                                date: today + Duration::days(7),
                            });
                        }
                        "month" => {
                            return Some(PhraseMatch {
                                start: i,
                                len: 2,
                                date: add_one_month(today),
                            });
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
    None
}

/// Advance a date by one calendar month, keeping the day-of-month and
/// clamping to the last valid day when the source day does not exist in the
/// target month (e.g. Jan 31 -> Feb 29/28).
fn add_one_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    // Day 28 always exists, so the probe terminates
    let mut day = date.day();
    loop {
        if let Some(next) = NaiveDate::from_ymd_opt(year, month, day) {
            return next;
        }
        day -= 1;
    }
}

/// Rule 4: day-of-week names, resolving to the next occurrence on/after the
/// reference date — the reference day itself counts, never 7 days later
fn match_weekday(words: &[&str], today: NaiveDate) -> Option<PhraseMatch> {
    for (i, word) in words.iter().enumerate() {
        let target = match *word {
            "monday" => Weekday::Mon,
            "tuesday" => Weekday::Tue,
            "wednesday" => Weekday::Wed,
            "thursday" => Weekday::Thu,
            "friday" => Weekday::Fri,
            "saturday" => Weekday::Sat,
            "sunday" => Weekday::Sun,
            _ => continue,
        };

        let ahead = (target.num_days_from_monday() + 7
            - today.weekday().num_days_from_monday())
            % 7;
        return Some(PhraseMatch {
            start: i,
            len: 1,
            date: today + Duration::days(i64::from(ahead)),
        });
    }
    None
}
