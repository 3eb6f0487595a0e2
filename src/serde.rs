use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Visitor;

use crate::Kin;

impl Serialize for Kin {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(self.number())
  }
}

struct KinVisitor;

impl Visitor<'_> for KinVisitor {
  type Value = Kin;

  #[cfg(not(tarpaulin_include))]
  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a kin number between 1 and 260")
  }

  fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
    match value {
      1..=260 => Ok(Kin::new(value as u16)),
      _ => Err(E::custom(format!("kin number out of range: {}", value))),
    }
  }

  fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
    match value {
      1..=260 => Ok(Kin::new(value as u16)),
      _ => Err(E::custom(format!("kin number out of range: {}", value))),
    }
  }
}

impl<'de> Deserialize<'de> for Kin {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_u16(KinVisitor)
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_serde() -> Result<(), serde_json::Error> {
    let json = r#"{"kin":28}"#;
    let struct_: TestStruct = serde_json::from_str(json)?;
    check!(struct_.kin == kin! { 28 });
    let json = serde_json::to_string(&struct_)?;
    check!(json == r#"{"kin":28}"#);
    Ok(())
  }

  #[test]
  fn test_deserialize_out_of_range() {
    check!(serde_json::from_str::<TestStruct>(r#"{"kin":0}"#).is_err());
    check!(serde_json::from_str::<TestStruct>(r#"{"kin":261}"#).is_err());
    check!(serde_json::from_str::<TestStruct>(r#"{"kin":-28}"#).is_err());
  }

  #[derive(Deserialize, Serialize)]
  struct TestStruct {
    kin: Kin,
  }
}
