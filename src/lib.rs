//! The `dreamspell` crate maps Gregorian calendar dates onto the Dreamspell
//! (13-Moon) count: a fixed 260-day cycle whose positions are called kins.
//! Each kin carries a seal from a 20-name cycle and a tone from a 13-name
//! cycle, and the two names together form the kin's display name.
//!
//! ## Examples
//!
//! Computing the kin for a date:
//!
//! ```rs
//! use dreamspell::DreamspellDay;
//!
//! let day = DreamspellDay::from_ymd(2026, 1, 6)?;
//! ```
//!
//! Naming a kin directly with the `kin!` macro:
//!
//! ```rs
//! use dreamspell::kin;
//!
//! let kin = kin! { 28 };
//! assert_eq!(kin.name(), "月亮的黃星星");
//! ```
//!
//! February 29 is the one date outside the count: it always yields the
//! Hunab Ku sentinel instead of a kin. Years outside the offset table
//! (1900..=2099) yield [`KinError::UnsupportedYear`]; the table is a finite
//! list and offsets for unlisted years are never computed.

use std::fmt;

/// Construct a [`Kin`] from a `1..=260` literal.
///
/// ## Examples
///
/// ```
/// # use dreamspell::kin;
/// let k = kin! { 164 };
/// assert_eq!(k.number(), 164);
/// ```
#[macro_export]
macro_rules! kin {
  ($n:literal) => {{ $crate::Kin::new($n) }};
}

mod error;
pub mod iter;
mod parse;
mod seal;
#[cfg(feature = "serde")]
mod serde;
mod tables;
mod tone;

pub use error::KinError;
pub use parse::ParseKinError;
pub use seal::Seal;
pub use tone::Tone;

/// A position in the 260-day Dreamspell cycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Kin(u16);

impl Kin {
  /// Construct a new `Kin` from its cycle number.
  ///
  /// ## Examples
  ///
  /// ```
  /// use dreamspell::Kin;
  /// let kin = Kin::new(28);
  /// assert_eq!(kin.number(), 28);
  /// ```
  ///
  /// ## Panic
  ///
  /// This function panics if the number is outside `1..=260`. When summing
  /// raw cycle arithmetic, use [`Kin::wrapping_new`] instead, which
  /// normalizes any value into the cycle.
  pub const fn new(number: u16) -> Self {
    assert!(number >= 1 && number <= 260, "Kin out-of-bounds");
    Self(number)
  }

  /// Construct a `Kin` from an unnormalized cycle sum.
  ///
  /// The value is wrapped into `1..=260` by modular arithmetic, never
  /// truncated: 260 maps to kin 260, 261 wraps to kin 1, 0 wraps back to
  /// kin 260, and negative values wrap likewise.
  ///
  /// ## Examples
  ///
  /// ```
  /// use dreamspell::Kin;
  /// assert_eq!(Kin::wrapping_new(260).number(), 260);
  /// assert_eq!(Kin::wrapping_new(261).number(), 1);
  /// assert_eq!(Kin::wrapping_new(0).number(), 260);
  /// ```
  pub const fn wrapping_new(raw: i32) -> Self {
    Self(((raw - 1).rem_euclid(260) + 1) as u16)
  }

  /// The kin's number in the cycle. Range: `[1, 260]`.
  #[inline]
  pub const fn number(&self) -> u16 {
    self.0
  }

  /// The kin that follows this one, wrapping from 260 back to 1.
  #[inline]
  pub const fn next(&self) -> Self {
    Self::wrapping_new(self.0 as i32 + 1)
  }

  /// The kin that precedes this one, wrapping from 1 back to 260.
  #[inline]
  pub const fn prev(&self) -> Self {
    Self::wrapping_new(self.0 as i32 - 1)
  }

  /// The composite display name: tone name followed by seal name.
  ///
  /// ## Examples
  ///
  /// ```
  /// # use dreamspell::kin;
  /// assert_eq!(kin! { 28 }.name(), "月亮的黃星星");
  /// ```
  pub fn name(&self) -> String {
    format!("{}{}", self.tone().name(), self.seal().name())
  }

  /// The composite English name: tone followed by seal.
  ///
  /// ## Examples
  ///
  /// ```
  /// # use dreamspell::kin;
  /// assert_eq!(kin! { 164 }.english_name(), "Galactic Yellow Seed");
  /// ```
  pub fn english_name(&self) -> String {
    format!("{} {}", self.tone().english(), self.seal().english())
  }
}

impl Kin {
  /// An iterator of kins beginning with this kin and ending with the provided
  /// end kin (inclusive), wrapping past 260 where necessary.
  pub fn iter_through(&self, end: Kin) -> iter::KinIterator {
    iter::KinIterator::new(self, end)
  }
}

impl Kin {
  /// The first kin of the cycle.
  pub const MIN: Self = Kin::new(1);
  /// The last kin of the cycle.
  pub const MAX: Self = Kin::new(260);
}

impl fmt::Display for Kin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}", self.tone().name(), self.seal().name())
  }
}

/// The Dreamspell reading of a single Gregorian date: either a kin, or the
/// Hunab Ku sentinel for February 29.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DreamspellDay {
  /// A normal date within the 260-day count.
  Kin(Kin),
  /// February 29, the day outside the count.
  HunabKu,
}

impl DreamspellDay {
  /// Compute the Dreamspell reading for the given Gregorian date.
  ///
  /// February 29 of any year yields [`DreamspellDay::HunabKu`] before any
  /// other check runs. Every other date sums the year offset, the month
  /// offset, and the day of the month, adds one on leap years for dates
  /// after February, and wraps the sum into `1..=260`.
  ///
  /// ## Examples
  ///
  /// ```
  /// use dreamspell::{DreamspellDay, kin};
  ///
  /// let day = DreamspellDay::from_ymd(2026, 1, 6)?;
  /// assert_eq!(day, DreamspellDay::Kin(kin! { 28 }));
  ///
  /// let leap_day = DreamspellDay::from_ymd(2024, 2, 29)?;
  /// assert_eq!(leap_day, DreamspellDay::HunabKu);
  /// # Ok::<(), dreamspell::KinError>(())
  /// ```
  ///
  /// ## Errors
  ///
  /// Returns [`KinError::UnsupportedYear`] if the year has no entry in the
  /// offset table, and [`KinError::InvalidMonth`]/[`KinError::InvalidDay`]
  /// for dates that don't exist on the Gregorian calendar.
  pub const fn from_ymd(year: i16, month: u8, day: u8) -> Result<Self, KinError> {
    if month == 2 && day == 29 {
      return Ok(Self::HunabKu);
    }
    if month < 1 || month > 12 {
      return Err(KinError::InvalidMonth { month });
    }
    let max_day = tables::MONTH_DAYS[month as usize - 1];
    if day < 1 || day > max_day {
      return Err(KinError::InvalidDay { day, month, max_day });
    }
    let year_offset = match tables::year_offset(year) {
      Some(offset) => offset,
      None => return Err(KinError::UnsupportedYear { year }),
    };
    let mut raw = year_offset + tables::MONTH_OFFSETS[month as usize - 1] + day as u16;
    // February 29 never reaches this point, so `month > 2` alone covers every
    // date after the inserted leap day.
    if tables::is_leap_year(year) && month > 2 {
      raw += 1;
    }
    Ok(Self::Kin(Kin::wrapping_new(raw as i32)))
  }

  /// The kin for this day, or `None` on Hunab Ku.
  #[inline]
  pub const fn kin(&self) -> Option<Kin> {
    match self {
      Self::Kin(kin) => Some(*kin),
      Self::HunabKu => None,
    }
  }

  /// Whether this day is the February 29 sentinel.
  #[inline]
  pub const fn is_hunab_ku(&self) -> bool {
    matches!(self, Self::HunabKu)
  }
}

impl fmt::Display for DreamspellDay {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Kin(kin) => fmt::Display::fmt(kin, f),
      Self::HunabKu => f.write_str("Hunab Ku"),
    }
  }
}
