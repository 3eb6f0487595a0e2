//! Parsing date strings into Dreamspell readings.

use std::str::FromStr;

use strptime::Parser;

use crate::DreamspellDay;
use crate::KinError;

impl DreamspellDay {
  /// Parse a date from a string, according to the provided format string, and
  /// compute its Dreamspell reading.
  ///
  /// ## Examples
  ///
  /// ```
  /// use dreamspell::{DreamspellDay, kin};
  ///
  /// let day = DreamspellDay::parse("01/06/2026", "%m/%d/%Y")?;
  /// assert_eq!(day, DreamspellDay::Kin(kin! { 28 }));
  /// # Ok::<(), dreamspell::ParseKinError>(())
  /// ```
  pub fn parse(date_str: impl AsRef<str>, date_fmt: &'static str) -> Result<Self, ParseKinError> {
    let parser = Parser::new(date_fmt);
    let raw_date = parser.parse(date_str)?.date()?;
    Ok(Self::from_ymd(raw_date.year(), raw_date.month(), raw_date.day())?)
  }
}

impl FromStr for DreamspellDay {
  type Err = ParseKinError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s, "%Y-%m-%d")
  }
}

/// Error type for parsing a date string into a Dreamspell reading: either the
/// string is not a date in the requested format, or the date itself is
/// rejected by the kin calculation.
#[derive(Debug, thiserror::Error)]
pub enum ParseKinError {
  /// The string could not be parsed as a date.
  #[error(transparent)]
  Parse(#[from] strptime::ParseError),
  /// The parsed date could not be mapped to a kin.
  #[error(transparent)]
  Kin(#[from] KinError),
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_from_str() -> Result<(), ParseKinError> {
    check!("2026-01-06".parse::<DreamspellDay>()? == DreamspellDay::Kin(kin! { 28 }));
    check!("2024-02-29".parse::<DreamspellDay>()? == DreamspellDay::HunabKu);
    check!("2026-1-6".parse::<DreamspellDay>().is_err());
    check!("01/06/2026".parse::<DreamspellDay>().is_err());
    check!("foo".parse::<DreamspellDay>().is_err());
    Ok(())
  }

  #[test]
  fn test_parse_formats() -> Result<(), ParseKinError> {
    check!(DreamspellDay::parse("07/26/13", "%m/%d/%y")? == DreamspellDay::Kin(kin! { 164 }));
    let day = DreamspellDay::parse("Saturday, July 26, 2014", "%A, %B %-d, %Y")?;
    check!(day == DreamspellDay::Kin(kin! { 9 }));
    Ok(())
  }

  #[test]
  fn test_parse_unsupported_year() {
    let err = "1899-01-01".parse::<DreamspellDay>().unwrap_err();
    check!(matches!(err, ParseKinError::Kin(KinError::UnsupportedYear { year: 1899 })));
  }
}
