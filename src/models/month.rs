use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ProcessingError, Result};

/// Calendar month, named exactly as the monthly CSV column headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Zero-based position in the calendar year
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Month {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self> {
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| ProcessingError::InvalidFormat(format!("Unknown month: '{}'", s)))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names_round_trip() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(month.name().parse::<Month>().unwrap(), *month);
        }
    }

    #[test]
    fn test_month_parse_is_exact() {
        assert!("january".parse::<Month>().is_err());
        assert!("Jan".parse::<Month>().is_err());
        assert!(" March".parse::<Month>().is_err());
    }
}
