//! Error types for kin calculation.

/// Error type for fallible kin calculations.
///
/// The unsupported-year case is the one callers are expected to handle at
/// runtime: the year offset table is a finite list, and dates outside it must
/// surface as a distinguishable failure rather than a silently wrong kin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KinError {
  /// The year has no entry in the year offset table.
  #[error("unsupported year: {year} (offsets are defined for {min}..={max})", min = crate::tables::YEAR_MIN, max = crate::tables::YEAR_MAX)]
  UnsupportedYear {
    /// The year that was requested.
    year: i16,
  },

  /// The month is outside `1..=12`.
  #[error("invalid month: {month} (must be 1..=12)")]
  InvalidMonth {
    /// The invalid month number that was provided.
    month: u8,
  },

  /// The day does not exist in the given month.
  #[error("invalid day: {day} for month {month} (max {max_day})")]
  InvalidDay {
    /// The invalid day number that was provided.
    day: u8,
    /// The month for which the day is invalid.
    month: u8,
    /// The maximum valid day for the given month.
    max_day: u8,
  },
}
