//! Iterator over kins

use std::iter::Iterator;

use crate::Kin;

/// An iterator over a stretch of the 260-kin cycle.
///
/// The cycle has no natural endpoint, so iteration runs forward from the
/// start kin to the end kin inclusive, wrapping from 260 back to 1 along the
/// way. It always yields at least one kin and at most a full cycle of 260.
pub struct KinIterator {
  cursor: Kin,
  end: Kin,
  exhausted: bool,
}

impl KinIterator {
  pub(crate) const fn new(start: &Kin, end: Kin) -> Self {
    Self { cursor: *start, end, exhausted: false }
  }
}

impl Iterator for KinIterator {
  type Item = Kin;

  fn next(&mut self) -> Option<Self::Item> {
    match self.exhausted {
      true => None,
      false => {
        let answer = self.cursor;
        self.exhausted = answer == self.end;
        self.cursor = answer.next();
        Some(answer)
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_iter() {
    let start = kin! { 28 };
    check!(start.iter_through(kin! { 32 }).collect::<Vec<Kin>>().len() == 5);
    check!(start.iter_through(kin! { 28 }).collect::<Vec<Kin>>().len() == 1);
    check!(start.iter_through(Kin::MAX).next().unwrap() == kin! { 28 });
  }

  #[test]
  fn test_iter_wraps() {
    let kins: Vec<Kin> = kin! { 259 }.iter_through(kin! { 2 }).collect();
    check!(kins == vec![kin! { 259 }, kin! { 260 }, kin! { 1 }, kin! { 2 }]);
  }

  #[test]
  fn test_full_cycle() {
    // From any kin, through its predecessor, is the whole cycle.
    let kins: Vec<Kin> = kin! { 100 }.iter_through(kin! { 99 }).collect();
    check!(kins.len() == 260);
  }
}
