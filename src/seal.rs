use std::fmt::Display;

use crate::Kin;

impl Kin {
  /// Return the solar seal corresponding to this kin.
  ///
  /// Seals repeat on a 20-kin cycle: kin 1 and kin 21 share a seal.
  #[inline]
  pub const fn seal(&self) -> Seal {
    Seal::SEALS[self.seal_index() as usize]
  }

  /// The zero-based position of this kin's seal in the 20-seal cycle.
  #[inline]
  pub const fn seal_index(&self) -> u8 {
    ((self.number() - 1) % 20) as u8
  }
}

/// One of the twenty cyclically-repeating solar seals.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Seal {
  Dragon = 0,
  Wind = 1,
  Night = 2,
  Seed = 3,
  Serpent = 4,
  WorldBridger = 5,
  Hand = 6,
  Star = 7,
  Moon = 8,
  Dog = 9,
  Monkey = 10,
  Human = 11,
  Skywalker = 12,
  Wizard = 13,
  Eagle = 14,
  Warrior = 15,
  Earth = 16,
  Mirror = 17,
  Storm = 18,
  Sun = 19,
}

impl Seal {
  /// The full seal cycle, in kin order.
  pub(crate) const SEALS: [Seal; 20] = [
    Seal::Dragon,
    Seal::Wind,
    Seal::Night,
    Seal::Seed,
    Seal::Serpent,
    Seal::WorldBridger,
    Seal::Hand,
    Seal::Star,
    Seal::Moon,
    Seal::Dog,
    Seal::Monkey,
    Seal::Human,
    Seal::Skywalker,
    Seal::Wizard,
    Seal::Eagle,
    Seal::Warrior,
    Seal::Earth,
    Seal::Mirror,
    Seal::Storm,
    Seal::Sun,
  ];

  /// The traditional-Chinese name of the seal, as used in the composite kin
  /// name.
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Dragon => "紅龍",
      Self::Wind => "白風",
      Self::Night => "藍夜",
      Self::Seed => "黃種子",
      Self::Serpent => "紅蛇",
      Self::WorldBridger => "白世界橋",
      Self::Hand => "藍手",
      Self::Star => "黃星星",
      Self::Moon => "紅月",
      Self::Dog => "白狗",
      Self::Monkey => "藍猴",
      Self::Human => "黃人",
      Self::Skywalker => "紅天行者",
      Self::Wizard => "白巫師",
      Self::Eagle => "藍鷹",
      Self::Warrior => "黃戰士",
      Self::Earth => "紅地球",
      Self::Mirror => "白鏡",
      Self::Storm => "藍風暴",
      Self::Sun => "黃太陽",
    }
  }

  /// The conventional English name of the seal, color included.
  pub const fn english(&self) -> &'static str {
    match self {
      Self::Dragon => "Red Dragon",
      Self::Wind => "White Wind",
      Self::Night => "Blue Night",
      Self::Seed => "Yellow Seed",
      Self::Serpent => "Red Serpent",
      Self::WorldBridger => "White World-Bridger",
      Self::Hand => "Blue Hand",
      Self::Star => "Yellow Star",
      Self::Moon => "Red Moon",
      Self::Dog => "White Dog",
      Self::Monkey => "Blue Monkey",
      Self::Human => "Yellow Human",
      Self::Skywalker => "Red Skywalker",
      Self::Wizard => "White Wizard",
      Self::Eagle => "Blue Eagle",
      Self::Warrior => "Yellow Warrior",
      Self::Earth => "Red Earth",
      Self::Mirror => "White Mirror",
      Self::Storm => "Blue Storm",
      Self::Sun => "Yellow Sun",
    }
  }
}

impl Display for Seal {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}
