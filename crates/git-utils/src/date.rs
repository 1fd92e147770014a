use bstr::{BStr, BString, ByteSlice};
use chrono::{DateTime, FixedOffset};

use crate::error::UtilError;
use crate::Result;

/// A git timestamp: seconds since the epoch plus the recorded UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GitDate {
    /// Seconds since Unix epoch.
    pub timestamp: i64,
    /// Timezone offset in minutes from UTC (e.g., -300 for EST).
    pub tz_offset: i32,
}

/// Convert git's "decimal" offset (`-0130` parses as -130) to minutes.
fn tz_offset_to_minutes(tz: i32) -> i32 {
    let sign = if tz < 0 { -1 } else { 1 };
    let abs = tz.abs();
    sign * ((abs / 100) * 60 + abs % 100)
}

impl GitDate {
    pub fn new(timestamp: i64, tz_offset_minutes: i32) -> Self {
        Self {
            timestamp,
            tz_offset: tz_offset_minutes,
        }
    }

    /// Parse the raw form stored in commits: `"<epoch-seconds> <+|-HHMM>"`.
    ///
    /// The offset must be a sign followed by exactly four digits and must
    /// describe a real UTC offset; otherwise the date is rejected.
    pub fn parse_raw(input: &str) -> Result<Self> {
        let mut parts = input.split_ascii_whitespace();
        let (Some(ts), Some(tz), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(UtilError::DateParse(format!(
                "expected '<seconds> <offset>', got '{input}'"
            )));
        };

        let timestamp: i64 = ts
            .parse()
            .map_err(|_| UtilError::DateParse(format!("invalid timestamp: '{ts}'")))?;

        let well_formed = tz.len() == 5
            && matches!(tz.as_bytes()[0], b'+' | b'-')
            && tz.as_bytes()[1..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(UtilError::DateParse(format!("invalid timezone: '{tz}'")));
        }
        let tz_int: i32 = tz
            .parse()
            .map_err(|_| UtilError::DateParse(format!("invalid timezone: '{tz}'")))?;

        let date = Self::new(timestamp, tz_offset_to_minutes(tz_int));
        if date.to_datetime().is_none() {
            return Err(UtilError::DateParse(format!(
                "timestamp out of range: '{input}'"
            )));
        }
        Ok(date)
    }

    /// Convert to a chrono DateTime with the stored timezone.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.tz_offset * 60)?;
        DateTime::from_timestamp(self.timestamp, 0).map(|dt| dt.with_timezone(&offset))
    }

    /// Wall-clock time at the recorded offset: `yyyy-MM-dd HH:mm:ss ±HH:MM`.
    ///
    /// The system timezone is never consulted.
    pub fn format_iso_local(&self) -> String {
        match self.to_datetime() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S %:z").to_string(),
            None => format!("@{} {:+}min", self.timestamp, self.tz_offset),
        }
    }
}

/// Author/committer identity with timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: BString,
    pub email: BString,
    pub date: GitDate,
}

impl Signature {
    /// Parse from git format: `Name <email> timestamp tz`
    ///
    /// Example: "John Doe <john@example.com> 1234567890 +0000"
    pub fn parse(input: &BStr) -> Result<Self> {
        let input = input.as_bytes();

        let gt_pos = input
            .rfind_byte(b'>')
            .ok_or_else(|| UtilError::SignatureParse("missing '>' in signature".into()))?;
        let lt_pos = input[..gt_pos]
            .rfind_byte(b'<')
            .ok_or_else(|| UtilError::SignatureParse("missing '<' in signature".into()))?;

        let name = input[..lt_pos].trim();
        let email = &input[lt_pos + 1..gt_pos];

        let date_str = std::str::from_utf8(input[gt_pos + 1..].trim())
            .map_err(|_| UtilError::SignatureParse("non-UTF-8 date in signature".into()))?;
        let date = GitDate::parse_raw(date_str)?;

        Ok(Self {
            name: BString::from(name),
            email: BString::from(email),
            date,
        })
    }

    /// Human-readable form: `"<name> <email> <label> timestamp: <date>"`.
    ///
    /// The email is shown without its angle brackets.
    pub fn render(&self, label: &str) -> String {
        format!(
            "{} {} {} timestamp: {}",
            self.name.to_str_lossy(),
            self.email.to_str_lossy(),
            label,
            self.date.format_iso_local()
        )
    }
}
