use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::AxisValue;

use super::AxisFormatter;

const NORMALIZED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// How a dimension tick, delivered as text by the renderer, is decoded before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionTickDecoding {
    /// Normalize to a `YYYY-MM-DDTHH:MM:SS` UTC timestamp string.
    Timestamp,
    /// Re-parse the leading integer of the text.
    ///
    /// A tick with no integer prefix reaches the formatter as the raw text,
    /// not as a NaN number, so a numeric formatter never renders "NaN" for
    /// a category the renderer inserted itself.
    Integer,
    /// Pass the text through unchanged.
    Text,
}

/// Label formatter installed on the dimension axis.
///
/// The renderer serializes every tick value to text, including numeric and
/// time ticks, so the value is decoded back before the user formatter runs.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLabelFormatter {
    pub decoding: DimensionTickDecoding,
    pub formatter: AxisFormatter,
}

impl DimensionLabelFormatter {
    #[must_use]
    pub fn new(decoding: DimensionTickDecoding, formatter: AxisFormatter) -> Self {
        Self {
            decoding,
            formatter,
        }
    }

    /// Formats a raw tick, padded with one space on each side so adjacent
    /// labels never touch.
    #[must_use]
    pub fn format(&self, tick: &str) -> String {
        let value = self.decode(tick);
        format!(" {} ", self.formatter.format(&value))
    }

    #[must_use]
    pub fn decode(&self, tick: &str) -> AxisValue {
        match self.decoding {
            DimensionTickDecoding::Timestamp => match normalize_timestamp(tick) {
                Some(normalized) => AxisValue::Text(normalized),
                None => {
                    trace!(tick, "dimension tick is not a recognizable timestamp");
                    AxisValue::Text(tick.to_owned())
                }
            },
            DimensionTickDecoding::Integer => match parse_leading_integer(tick) {
                Some(value) => AxisValue::Number(value as f64),
                None => AxisValue::Text(tick.to_owned()),
            },
            DimensionTickDecoding::Text => AxisValue::Text(tick.to_owned()),
        }
    }
}

/// Accepts epoch milliseconds, RFC 3339, `YYYY-MM-DD[ T]HH:MM[:SS]`,
/// `YYYY-MM-DD` and `YYYY-MM`.
pub(crate) fn normalize_timestamp(tick: &str) -> Option<String> {
    let tick = tick.trim();

    let datetime = if let Ok(millis) = tick.parse::<i64>() {
        DateTime::<Utc>::from_timestamp_millis(millis)?.naive_utc()
    } else if let Ok(millis) = tick.parse::<f64>() {
        if !millis.is_finite() {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)?.naive_utc()
    } else if let Ok(parsed) = DateTime::parse_from_rfc3339(tick) {
        parsed.with_timezone(&Utc).naive_utc()
    } else if let Ok(parsed) = NaiveDateTime::parse_from_str(tick, "%Y-%m-%dT%H:%M:%S%.f") {
        parsed
    } else if let Ok(parsed) = NaiveDateTime::parse_from_str(tick, "%Y-%m-%d %H:%M:%S%.f") {
        parsed
    } else if let Ok(parsed) = NaiveDateTime::parse_from_str(tick, "%Y-%m-%dT%H:%M") {
        parsed
    } else if let Ok(parsed) = NaiveDateTime::parse_from_str(tick, "%Y-%m-%d %H:%M") {
        parsed
    } else if let Ok(date) = NaiveDate::parse_from_str(tick, "%Y-%m-%d") {
        date.and_hms_opt(0, 0, 0)?
    } else {
        NaiveDate::parse_from_str(&format!("{tick}-01"), "%Y-%m-%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?
    };

    Some(datetime.format(NORMALIZED_TIMESTAMP_FORMAT).to_string())
}

/// Base-10 integer prefix of `text`: leading whitespace and an optional sign
/// are skipped, parsing stops at the first non-digit.
pub(crate) fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
