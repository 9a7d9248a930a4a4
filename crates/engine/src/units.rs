use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Measurement unit an ingredient is purchased in.
///
/// `cost_per_amount` prices `amount` of the ingredient expressed in this
/// unit; dividing the two gives the cost of a single unit. Only these four
/// units are accepted, both here and by the check constraint on the
/// `ingredients` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Gram,
    Kilogram,
    Centiliter,
    Liter,
}

impl Unit {
    /// Canonical unit name, as stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Centiliter => "centiliter",
            Unit::Liter => "liter",
        }
    }
}

impl core::fmt::Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Unit {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gram" => Ok(Unit::Gram),
            "kilogram" => Ok(Unit::Kilogram),
            "centiliter" => Ok(Unit::Centiliter),
            "liter" => Ok(Unit::Liter),
            other => Err(EngineError::InvalidName(format!(
                "unsupported unit: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_names() {
        assert_eq!(Unit::try_from("gram").unwrap(), Unit::Gram);
        assert_eq!(Unit::try_from(" LITER ").unwrap(), Unit::Liter);
    }

    #[test]
    fn parse_rejects_unknown_units() {
        assert!(Unit::try_from("ounce").is_err());
        assert!(Unit::try_from("").is_err());
    }
}
