//! Objective value object: whether a criterion is minimized or maximized.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::McdaError;

const MIN_GLYPH: &str = "\u{25bc}";
const MAX_GLYPH: &str = "\u{25b2}";

/// Optimization direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum Objective {
    Min = -1,
    Max = 1,
}

/// Aggregate functions conventionally used to express an objective,
/// e.g. passing `max` to mean "maximize this column".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Min,
    Max,
    NanMin,
    NanMax,
    AMin,
    AMax,
}

/// Anything a caller may use to name an objective.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectiveAlias {
    Objective(Objective),
    Text(String),
    Code(i64),
    Aggregate(Aggregate),
}

static TEXT_ALIASES: Lazy<HashMap<&'static str, Objective>> = Lazy::new(|| {
    let mut aliases = HashMap::new();
    for alias in ["max", "maximize", "+", ">", MAX_GLYPH] {
        aliases.insert(alias, Objective::Max);
    }
    for alias in ["min", "minimize", "-", "<", MIN_GLYPH] {
        aliases.insert(alias, Objective::Min);
    }
    aliases
});

impl Objective {
    /// Resolves an alias into an objective.
    ///
    /// Text aliases are lowercased before lookup. Anything that is neither
    /// a maximization nor a minimization alias is rejected.
    pub fn from_alias(alias: impl Into<ObjectiveAlias>) -> Result<Self, McdaError> {
        match alias.into() {
            ObjectiveAlias::Objective(objective) => Ok(objective),
            ObjectiveAlias::Text(text) => TEXT_ALIASES
                .get(text.to_lowercase().as_str())
                .copied()
                .ok_or_else(|| McdaError::invalid_objective(text)),
            ObjectiveAlias::Code(1) => Ok(Objective::Max),
            ObjectiveAlias::Code(-1) => Ok(Objective::Min),
            ObjectiveAlias::Code(other) => Err(McdaError::invalid_objective(other.to_string())),
            ObjectiveAlias::Aggregate(aggregate) => Ok(match aggregate {
                Aggregate::Max | Aggregate::NanMax | Aggregate::AMax => Objective::Max,
                Aggregate::Min | Aggregate::NanMin | Aggregate::AMin => Objective::Min,
            }),
        }
    }

    /// Returns the numeric code: -1 for MIN, 1 for MAX.
    pub fn code(&self) -> i8 {
        *self as i8
    }

    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Objective::Min => "MIN",
            Objective::Max => "MAX",
        }
    }

    /// Returns the display glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Objective::Min => MIN_GLYPH,
            Objective::Max => MAX_GLYPH,
        }
    }

    /// Returns the opposite direction.
    pub fn inverted(&self) -> Self {
        match self {
            Objective::Min => Objective::Max,
            Objective::Max => Objective::Min,
        }
    }

    pub fn is_max(&self) -> bool {
        *self == Objective::Max
    }

    pub fn is_min(&self) -> bool {
        *self == Objective::Min
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl From<Objective> for ObjectiveAlias {
    fn from(objective: Objective) -> Self {
        ObjectiveAlias::Objective(objective)
    }
}

impl From<&str> for ObjectiveAlias {
    fn from(text: &str) -> Self {
        ObjectiveAlias::Text(text.to_string())
    }
}

impl From<String> for ObjectiveAlias {
    fn from(text: String) -> Self {
        ObjectiveAlias::Text(text)
    }
}

impl From<char> for ObjectiveAlias {
    fn from(symbol: char) -> Self {
        ObjectiveAlias::Text(symbol.to_string())
    }
}

impl From<i32> for ObjectiveAlias {
    fn from(code: i32) -> Self {
        ObjectiveAlias::Code(i64::from(code))
    }
}

impl From<i64> for ObjectiveAlias {
    fn from(code: i64) -> Self {
        ObjectiveAlias::Code(code)
    }
}

impl From<Aggregate> for ObjectiveAlias {
    fn from(aggregate: Aggregate) -> Self {
        ObjectiveAlias::Aggregate(aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objective_resolves_text_aliases() {
        assert_eq!(Objective::from_alias("max").unwrap(), Objective::Max);
        assert_eq!(Objective::from_alias("maximize").unwrap(), Objective::Max);
        assert_eq!(Objective::from_alias("min").unwrap(), Objective::Min);
        assert_eq!(Objective::from_alias("minimize").unwrap(), Objective::Min);
    }

    #[test]
    fn objective_text_aliases_are_case_insensitive() {
        assert_eq!(Objective::from_alias("MAX").unwrap(), Objective::Max);
        assert_eq!(Objective::from_alias("Minimize").unwrap(), Objective::Min);
    }

    #[test]
    fn objective_resolves_symbols_and_glyphs() {
        assert_eq!(Objective::from_alias('+').unwrap(), Objective::Max);
        assert_eq!(Objective::from_alias(">").unwrap(), Objective::Max);
        assert_eq!(Objective::from_alias('-').unwrap(), Objective::Min);
        assert_eq!(Objective::from_alias("<").unwrap(), Objective::Min);
        assert_eq!(Objective::from_alias("▲").unwrap(), Objective::Max);
        assert_eq!(Objective::from_alias("▼").unwrap(), Objective::Min);
    }

    #[test]
    fn objective_resolves_codes_and_aggregates() {
        assert_eq!(Objective::from_alias(1).unwrap(), Objective::Max);
        assert_eq!(Objective::from_alias(-1).unwrap(), Objective::Min);
        assert_eq!(Objective::from_alias(Aggregate::NanMax).unwrap(), Objective::Max);
        assert_eq!(Objective::from_alias(Aggregate::AMin).unwrap(), Objective::Min);
    }

    #[test]
    fn objective_passes_through_itself() {
        assert_eq!(Objective::from_alias(Objective::Min).unwrap(), Objective::Min);
    }

    #[test]
    fn objective_rejects_unknown_aliases() {
        let err = Objective::from_alias("up").unwrap_err();
        assert_eq!(err, McdaError::invalid_objective("up"));
        assert!(Objective::from_alias(0).is_err());
        assert!(Objective::from_alias(2).is_err());
        assert!(Objective::from_alias("").is_err());
    }

    #[test]
    fn objective_code_and_glyph() {
        assert_eq!(Objective::Min.code(), -1);
        assert_eq!(Objective::Max.code(), 1);
        assert_eq!(format!("{}", Objective::Max), "▲");
        assert_eq!(format!("{}", Objective::Min), "▼");
        assert_eq!(Objective::Max.name(), "MAX");
    }

    #[test]
    fn objective_inverted_flips_direction() {
        assert_eq!(Objective::Min.inverted(), Objective::Max);
        assert_eq!(Objective::Max.inverted(), Objective::Min);
    }

    #[test]
    fn objective_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Objective::Max).unwrap(), "\"max\"");
        let parsed: Objective = serde_json::from_str("\"min\"").unwrap();
        assert_eq!(parsed, Objective::Min);
    }
}
