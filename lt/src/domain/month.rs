//! Calendar month keys in canonical `YYYY-MM` form

use chrono::Datelike;
use thiserror::Error;

/// Errors from parsing or building a month key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthKeyError {
    #[error("Month key must look like YYYY-MM, got '{0}'")]
    Format(String),

    #[error("Month {0} is outside 01-12")]
    MonthOutOfRange(u32),

    #[error("Packed month value {0} does not fit YYYYMM")]
    PackedOutOfRange(u32),
}

/// A calendar year-month, four-digit year and month 01-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: u16,
    month: u8,
}

impl MonthKey {
    pub fn new(year: u16, month: u8) -> Result<Self, MonthKeyError> {
        if year > 9999 {
            return Err(MonthKeyError::Format(format!("{}-{:02}", year, month)));
        }
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month as u32));
        }
        Ok(Self { year, month })
    }

    /// The current month in local time
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year().clamp(0, 9999) as u16,
            month: today.month() as u8,
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// The month as the decimal number `YYYYMM` (hyphen stripped)
    pub fn packed(&self) -> u32 {
        self.year as u32 * 100 + self.month as u32
    }

    /// Rebuild from a `YYYYMM` decimal value
    pub fn from_packed(value: u32) -> Result<Self, MonthKeyError> {
        if value > 999_999 {
            return Err(MonthKeyError::PackedOutOfRange(value));
        }
        let month = value % 100;
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        Ok(Self {
            year: (value / 100) as u16,
            month: month as u8,
        })
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || MonthKeyError::Format(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(bad)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(bad());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }

        let year: u16 = year.parse().map_err(|_| bad())?;
        let month: u8 = month.parse().map_err(|_| bad())?;
        Self::new(year, month)
    }
}

impl serde::Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_parse_and_display() {
        let month: MonthKey = "2026-02".parse().unwrap();
        assert_eq!(month.year(), 2026);
        assert_eq!(month.month(), 2);
        assert_eq!(month.to_string(), "2026-02");
    }

    #[test]
    fn test_month_parse_rejects_bad_shapes() {
        for bad in ["2026-2", "26-02", "2026/02", "202602", "2026-0a", "2026-02-01", ""] {
            assert!(bad.parse::<MonthKey>().is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn test_month_parse_rejects_out_of_range() {
        assert_eq!(
            "2026-13".parse::<MonthKey>().unwrap_err(),
            MonthKeyError::MonthOutOfRange(13)
        );
        assert_eq!("2026-00".parse::<MonthKey>().unwrap_err(), MonthKeyError::MonthOutOfRange(0));
    }

    #[test]
    fn test_month_packing() {
        let month: MonthKey = "2026-02".parse().unwrap();
        assert_eq!(month.packed(), 202602);
        assert_eq!(MonthKey::from_packed(202602).unwrap(), month);
        assert_eq!(MonthKey::from_packed(12).unwrap().to_string(), "0000-12");
    }

    #[test]
    fn test_from_packed_rejects_garbage() {
        assert_eq!(MonthKey::from_packed(202613), Err(MonthKeyError::MonthOutOfRange(13)));
        assert_eq!(MonthKey::from_packed(1_000_001), Err(MonthKeyError::PackedOutOfRange(1_000_001)));
    }

    #[test]
    fn test_month_ordering() {
        let a: MonthKey = "2025-12".parse().unwrap();
        let b: MonthKey = "2026-01".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_month_serde() {
        let month: MonthKey = "2026-02".parse().unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"2026-02\"");
        assert!(serde_json::from_str::<MonthKey>("\"2026-14\"").is_err());
    }
}
