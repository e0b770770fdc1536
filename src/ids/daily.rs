//! Generation and parsing of `{PREFIX}-{NNN}-{DDMMYYYY}` identifiers.

use std::fmt;

use chrono::NaiveDate;

use super::HasIdentifier;

/// `chrono` format of the date segment (`ddMMyyyy`).
pub const DATE_SEGMENT_FORMAT: &str = "%d%m%Y";

const SEPARATOR: char = '-';

/// Renders `date` as an eight-digit `ddMMyyyy` segment.
#[must_use]
pub fn date_segment(date: NaiveDate) -> String {
    date.format(DATE_SEGMENT_FORMAT).to_string()
}

/// Counts the records issued under `prefix` on `date`.
///
/// A record counts only when its id splits on `-` into exactly three
/// segments, the first equals `prefix` (case-sensitive) and the last equals
/// the date segment. The middle segment is never inspected. Anything else is
/// skipped silently.
#[must_use]
pub fn count_for_day<I>(prefix: &str, items: I, date: NaiveDate) -> usize
where
    I: IntoIterator,
    I::Item: HasIdentifier,
{
    let day = date_segment(date);
    items
        .into_iter()
        .filter(|item| {
            let matched = matches_day(item.id(), prefix, &day);
            if !matched {
                log::trace!("not counted toward {prefix}/{day}: {}", item.id());
            }
            matched
        })
        .count()
}

/// Produces the next identifier for `prefix` on `date`.
///
/// The sequence is one more than [`count_for_day`], zero-padded to three
/// digits. Past 999 the padding simply stops applying, so the segment grows
/// to four digits. The input is only read; inserting the result is up to the
/// caller.
///
/// ```
/// use chrono::NaiveDate;
/// use alma::ids::generate_daily_id;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let existing = ["LOSS-001-01012024", "LOSS-002-01012024", "REQ-001-01012024"];
/// assert_eq!(generate_daily_id("LOSS", existing, day), "LOSS-003-01012024");
/// ```
#[must_use]
pub fn generate_daily_id<I>(prefix: &str, items: I, date: NaiveDate) -> String
where
    I: IntoIterator,
    I::Item: HasIdentifier,
{
    let sequence = count_for_day(prefix, items, date) + 1;
    format!("{prefix}{SEPARATOR}{sequence:03}{SEPARATOR}{}", date_segment(date))
}

fn matches_day(id: &str, prefix: &str, day: &str) -> bool {
    let mut segments = id.split(SEPARATOR);
    match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(head), Some(_), Some(tail), None) => head == prefix && tail == day,
        _ => false,
    }
}

/// A well-formed daily identifier broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyId {
    /// Category tag, e.g. `REQ`.
    pub prefix: String,
    /// One-based position within the day.
    pub sequence: u32,
    /// Calendar day the identifier was issued on.
    pub date: NaiveDate,
}

impl DailyId {
    /// Parses `id`, returning `None` unless it has exactly three segments, a
    /// non-empty prefix, an all-digit sequence and a valid `ddMMyyyy` date.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        let mut segments = id.split(SEPARATOR);
        let (prefix, sequence, date) =
            match (segments.next(), segments.next(), segments.next(), segments.next()) {
                (Some(p), Some(s), Some(d), None) => (p, s, d),
                _ => return None,
            };
        if prefix.is_empty()
            || sequence.is_empty()
            || !sequence.bytes().all(|b| b.is_ascii_digit())
            || date.len() != 8
            || !date.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        Some(Self {
            prefix: prefix.to_string(),
            sequence: sequence.parse().ok()?,
            date: NaiveDate::parse_from_str(date, DATE_SEGMENT_FORMAT).ok()?,
        })
    }
}

impl fmt::Display for DailyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{:03}{SEPARATOR}{}",
            self.prefix,
            self.sequence,
            date_segment(self.date)
        )
    }
}
