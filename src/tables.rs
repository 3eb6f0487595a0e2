/// The number of days that precede the first of each month in a non-leap
/// year, indexed by `month - 1`.
///
/// Leap-year dates from March 1 onward are one higher; the calculation layer
/// applies that shift itself because February 29 never reaches it.
pub(crate) const MONTH_OFFSETS: [u16; 12] =
  [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// The number of days in each month of a non-leap year, indexed by
/// `month - 1`.
pub(crate) const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// First year with an entry in [`YEAR_OFFSETS`].
pub(crate) const YEAR_MIN: i16 = 1900;
/// Last year with an entry in [`YEAR_OFFSETS`].
pub(crate) const YEAR_MAX: i16 = 2099;

/// Dreamspell year offsets for the years `YEAR_MIN..=YEAR_MAX`, indexed by
/// `year - YEAR_MIN`.
///
/// Each entry is the cycle position of the day before January 1 of that year.
/// Consecutive entries differ by 105 (mod 260), because the Dreamspell count
/// skips February 29 and 365 ≡ 105 (mod 260); the values repeat on a 52-year
/// cycle. Extending the supported range means appending entries here, not
/// computing them on the fly: lookups outside the range are an error.
#[rustfmt::skip]
pub(crate) const YEAR_OFFSETS: [u16; 200] = [
  // 1900-1909
  52, 157, 2, 107, 212, 57, 162, 7, 112, 217,
  62, 167, 12, 117, 222, 67, 172, 17, 122, 227,
  72, 177, 22, 127, 232, 77, 182, 27, 132, 237,
  82, 187, 32, 137, 242, 87, 192, 37, 142, 247,
  92, 197, 42, 147, 252, 97, 202, 47, 152, 257,
  // 1950-1959
  102, 207, 52, 157, 2, 107, 212, 57, 162, 7,
  112, 217, 62, 167, 12, 117, 222, 67, 172, 17,
  122, 227, 72, 177, 22, 127, 232, 77, 182, 27,
  132, 237, 82, 187, 32, 137, 242, 87, 192, 37,
  142, 247, 92, 197, 42, 147, 252, 97, 202, 47,
  // 2000-2009
  152, 257, 102, 207, 52, 157, 2, 107, 212, 57,
  162, 7, 112, 217, 62, 167, 12, 117, 222, 67,
  172, 17, 122, 227, 72, 177, 22, 127, 232, 77,
  182, 27, 132, 237, 82, 187, 32, 137, 242, 87,
  192, 37, 142, 247, 92, 197, 42, 147, 252, 97,
  // 2050-2059
  202, 47, 152, 257, 102, 207, 52, 157, 2, 107,
  212, 57, 162, 7, 112, 217, 62, 167, 12, 117,
  222, 67, 172, 17, 122, 227, 72, 177, 22, 127,
  232, 77, 182, 27, 132, 237, 82, 187, 32, 137,
  242, 87, 192, 37, 142, 247, 92, 197, 42, 147,
];

/// The year offset for the given year, or `None` if the year has no entry.
pub(crate) const fn year_offset(year: i16) -> Option<u16> {
  if year < YEAR_MIN || year > YEAR_MAX {
    return None;
  }
  Some(YEAR_OFFSETS[(year - YEAR_MIN) as usize])
}

/// Return true if this is a leap year, false otherwise.
pub(crate) const fn is_leap_year(year: i16) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_month_offsets() {
    for month in 1..12 {
      let days = MONTH_OFFSETS[month] - MONTH_OFFSETS[month - 1];
      check!(days == MONTH_DAYS[month - 1] as u16);
    }
    check!(MONTH_OFFSETS[11] + MONTH_DAYS[11] as u16 == 365);
  }

  #[test]
  fn test_year_offset_reference_values() {
    check!(year_offset(2024) == Some(72));
    check!(year_offset(2026) == Some(22));
    check!(year_offset(1900) == Some(52));
    check!(year_offset(2099) == Some(147));
  }

  #[test]
  fn test_year_offset_step() {
    // 365 ≡ 105 (mod 260), independent of leap years.
    for year in YEAR_MIN..YEAR_MAX {
      let this = year_offset(year).unwrap() as u32;
      let next = year_offset(year + 1).unwrap() as u32;
      check!(next == (this + 105) % 260, "Broken step at year {}", year);
    }
  }

  #[test]
  fn test_year_offset_52_year_cycle() {
    for year in YEAR_MIN..=(YEAR_MAX - 52) {
      check!(year_offset(year) == year_offset(year + 52));
    }
  }

  #[test]
  fn test_year_offset_out_of_range() {
    check!(year_offset(1899).is_none());
    check!(year_offset(2100).is_none());
    check!(year_offset(0).is_none());
    check!(year_offset(-2024).is_none());
  }

  #[test]
  fn test_leap_year() {
    check!(is_leap_year(2024));
    check!(is_leap_year(2000));
    check!(!is_leap_year(2025));
    check!(!is_leap_year(1900));
    check!(!is_leap_year(2100));
  }
}
