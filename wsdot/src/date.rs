//! WSDOT embedded-epoch date handling.
//!
//! The ferries APIs serialize timestamps as `/Date(1742713200000-0700)/`:
//! milliseconds since the Unix epoch followed by the publisher's UTC offset.
//! The millisecond value is already an absolute instant, so the offset is
//! informational and is never applied when normalizing.

use chrono::{DateTime, Utc};
use tracing::warn;

const PREFIX: &str = "/Date(";
const SUFFIX: &str = ")/";

/// Length of a `±HHMM` offset.
const OFFSET_LEN: usize = 5;

/// Error returned when a WSDOT date string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The string is not of the form `/Date(<digits>±HHMM)/`
    #[error("malformed WSDOT timestamp: {0:?}")]
    MalformedTimestamp(String),

    /// The offset is not a valid `±HHMM` value
    #[error("invalid offset {offset:?}: {reason}")]
    InvalidOffset {
        offset: String,
        reason: &'static str,
    },
}

impl DateError {
    fn offset(offset: &str, reason: &'static str) -> Self {
        Self::InvalidOffset {
            offset: offset.to_string(),
            reason,
        }
    }
}

/// Parse a WSDOT embedded-epoch date string into a UTC instant.
///
/// The trailing offset must be syntactically present but does not shift
/// the result.
///
/// # Examples
///
/// ```
/// use wsdot::date::parse_embedded_date;
///
/// let t = parse_embedded_date("/Date(1742713200000-0700)/").unwrap();
/// assert_eq!(t.timestamp_millis(), 1742713200000);
///
/// assert!(parse_embedded_date("/Date(1742713200000-0700)").is_err());
/// assert!(parse_embedded_date("/Date(17427132000a0-0700)/").is_err());
/// assert!(parse_embedded_date("/Date(1742713200000-070)/").is_err());
/// ```
pub fn parse_embedded_date(s: &str) -> Result<DateTime<Utc>, DateError> {
    let malformed = || DateError::MalformedTimestamp(s.to_string());

    let inner = s
        .strip_prefix(PREFIX)
        .and_then(|rest| rest.strip_suffix(SUFFIX))
        .ok_or_else(malformed)?;

    let split = inner.len().checked_sub(OFFSET_LEN).ok_or_else(malformed)?;
    if !inner.is_char_boundary(split) {
        return Err(malformed());
    }
    let (millis, offset) = inner.split_at(split);

    let offset = offset.as_bytes();
    if !matches!(offset[0], b'+' | b'-') || !offset[1..].iter().all(u8::is_ascii_digit) {
        return Err(malformed());
    }

    if millis.is_empty() || !millis.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let millis: i64 = millis.parse().map_err(|_| malformed())?;

    DateTime::from_timestamp_millis(millis).ok_or_else(malformed)
}

/// Parse a `±HHMM` offset into signed milliseconds.
///
/// # Examples
///
/// ```
/// use wsdot::date::parse_offset_millis;
///
/// assert_eq!(parse_offset_millis("+0700"), Ok(25_200_000));
/// assert_eq!(parse_offset_millis("-0530"), Ok(-19_800_000));
/// assert!(parse_offset_millis("+2500").is_err());
/// ```
pub fn parse_offset_millis(offset: &str) -> Result<i32, DateError> {
    let bytes = offset.as_bytes();
    if bytes.len() != OFFSET_LEN {
        return Err(DateError::offset(offset, "expected ±HHMM"));
    }

    let hours = parse_two_digits(&bytes[1..3])
        .ok_or_else(|| DateError::offset(offset, "invalid hour digits"))?;
    if hours > 23 {
        return Err(DateError::offset(offset, "hour must be 0-23"));
    }

    let minutes = parse_two_digits(&bytes[3..5])
        .ok_or_else(|| DateError::offset(offset, "invalid minute digits"))?;
    if minutes > 59 {
        return Err(DateError::offset(offset, "minute must be 0-59"));
    }

    let total = (hours * 60 + minutes) * 60 * 1000;

    match bytes[0] {
        b'+' => Ok(total),
        b'-' => Ok(-total),
        _ => Err(DateError::offset(offset, "sign must be + or -")),
    }
}

/// Normalize an optional timestamp field.
///
/// Absent stays absent. A malformed value is logged and treated as absent
/// so one bad field never fails the enclosing decode.
pub(crate) fn normalize_optional(raw: Option<&str>, field: &'static str) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match parse_embedded_date(raw) {
        Ok(instant) => Some(instant),
        Err(e) => {
            warn!(field, error = %e, "ignoring malformed timestamp");
            None
        }
    }
}

fn parse_two_digits(bytes: &[u8]) -> Option<i32> {
    match bytes {
        [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => {
            Some(i32::from(tens - b'0') * 10 + i32::from(ones - b'0'))
        }
        _ => None,
    }
}
