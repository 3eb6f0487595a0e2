use std::fmt::Display;

use crate::Kin;

impl Kin {
  /// Return the galactic tone corresponding to this kin.
  ///
  /// Tones repeat on a 13-kin cycle: kin 1 and kin 14 share a tone.
  #[inline]
  pub const fn tone(&self) -> Tone {
    Tone::TONES[self.tone_index() as usize]
  }

  /// The zero-based position of this kin's tone in the 13-tone cycle.
  #[inline]
  pub const fn tone_index(&self) -> u8 {
    ((self.number() - 1) % 13) as u8
  }
}

/// One of the thirteen cyclically-repeating galactic tones.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tone {
  Magnetic = 0,
  Lunar = 1,
  Electric = 2,
  SelfExisting = 3,
  Overtone = 4,
  Rhythmic = 5,
  Resonant = 6,
  Galactic = 7,
  Solar = 8,
  Planetary = 9,
  Spectral = 10,
  Crystal = 11,
  Cosmic = 12,
}

impl Tone {
  /// The full tone cycle, in kin order.
  pub(crate) const TONES: [Tone; 13] = [
    Tone::Magnetic,
    Tone::Lunar,
    Tone::Electric,
    Tone::SelfExisting,
    Tone::Overtone,
    Tone::Rhythmic,
    Tone::Resonant,
    Tone::Galactic,
    Tone::Solar,
    Tone::Planetary,
    Tone::Spectral,
    Tone::Crystal,
    Tone::Cosmic,
  ];

  /// The traditional-Chinese name of the tone, as used in the composite kin
  /// name (it reads as an adjective and precedes the seal name).
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Magnetic => "磁性的",
      Self::Lunar => "月亮的",
      Self::Electric => "電力的",
      Self::SelfExisting => "自我存在的",
      Self::Overtone => "超頻的",
      Self::Rhythmic => "韻律的",
      Self::Resonant => "共振的",
      Self::Galactic => "銀河星系的",
      Self::Solar => "太陽的",
      Self::Planetary => "行星的",
      Self::Spectral => "光譜的",
      Self::Crystal => "水晶的",
      Self::Cosmic => "宇宙的",
    }
  }

  /// The conventional English name of the tone.
  pub const fn english(&self) -> &'static str {
    match self {
      Self::Magnetic => "Magnetic",
      Self::Lunar => "Lunar",
      Self::Electric => "Electric",
      Self::SelfExisting => "Self-Existing",
      Self::Overtone => "Overtone",
      Self::Rhythmic => "Rhythmic",
      Self::Resonant => "Resonant",
      Self::Galactic => "Galactic",
      Self::Solar => "Solar",
      Self::Planetary => "Planetary",
      Self::Spectral => "Spectral",
      Self::Crystal => "Crystal",
      Self::Cosmic => "Cosmic",
    }
  }
}

impl Display for Tone {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_tone_cycle() {
    check!(Kin::new(1).tone() == Tone::Magnetic);
    check!(Kin::new(13).tone() == Tone::Cosmic);
    check!(Kin::new(14).tone() == Tone::Magnetic);
    check!(Kin::new(260).tone() == Tone::Cosmic);
    for n in 1..=247u16 {
      check!(Kin::new(n).tone() == Kin::new(n + 13).tone());
    }
  }

  #[test]
  fn test_tone_index() {
    check!(Kin::new(28).tone_index() == 1);
    check!(Kin::new(28).tone() == Tone::Lunar);
    check!(Kin::new(164).tone_index() == 7);
    check!(Kin::new(164).tone() == Tone::Galactic);
  }

  #[test]
  fn test_names() {
    check!(Tone::Lunar.name() == "月亮的");
    check!(Tone::Lunar.to_string() == "月亮的");
    check!(Tone::Lunar.english() == "Lunar");
    check!(Tone::SelfExisting.name() == "自我存在的");
  }

  #[test]
  fn test_table_order() {
    for (ix, tone) in Tone::TONES.into_iter().enumerate() {
      check!(tone as usize == ix);
    }
  }
}
