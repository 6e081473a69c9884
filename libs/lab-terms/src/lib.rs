#![forbid(unsafe_code)]

//! Canonical clinical terms shared by the kalium crates.
//!
//! Terms that arrive as free text at system boundaries (forms, CSV loads,
//! HL7 feeds) are parsed here into closed enums, so downstream code matches
//! exhaustively instead of comparing strings. Anything that does not match
//! a canonical term is rejected at the boundary with [`UnrecognizedTerm`].
//!
//! ```
//! use kalium_terms::{Ethnicity, Gender};
//!
//! let gender: Gender = "F".parse()?;
//! assert_eq!(gender, Gender::Female);
//! assert_eq!(Ethnicity::NonBlack.as_str(), "non-black");
//! # Ok::<(), kalium_terms::UnrecognizedTerm>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Analyte label for serum creatinine.
pub const CREATININE: &str = "creatinine";

/// Molecular weight of creatinine in g/mol.
pub const MW_CREATININE: f64 = 113.12;

/// A boundary string that does not match any canonical term.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} term '{value}'")]
pub struct UnrecognizedTerm {
    /// Which vocabulary was being parsed ("gender", "ethnicity", ...).
    pub kind: &'static str,
    /// The offending input, as received.
    pub value: String,
}

impl UnrecognizedTerm {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Administrative sex recorded for a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnrecognizedTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" | "female" => Ok(Gender::Female),
            "m" | "male" => Ok(Gender::Male),
            _ => Err(UnrecognizedTerm::new("gender", s)),
        }
    }
}

/// Ethnicity grouping as used by the CKD-EPI 2009 equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ethnicity {
    Black,
    NonBlack,
}

impl Ethnicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ethnicity::Black => "black",
            Ethnicity::NonBlack => "non-black",
        }
    }
}

impl fmt::Display for Ethnicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ethnicity {
    type Err = UnrecognizedTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Ethnicity::Black),
            "non-black" | "non_black" | "nonblack" => Ok(Ethnicity::NonBlack),
            _ => Err(UnrecognizedTerm::new("ethnicity", s)),
        }
    }
}

/// Units a serum analyte concentration can be reported in.
///
/// The canonical strings are UCUM codes, and UCUM codes are case-sensitive,
/// so parsing is too: `"MG/DL"` does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcentrationUnit {
    /// Mass concentration, `mg/dL`.
    #[serde(rename = "mg/dL")]
    MilligramsPerDeciliter,
    /// Substance (molar) concentration, `umol/L`.
    #[serde(rename = "umol/L")]
    MicromolesPerLiter,
}

impl ConcentrationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConcentrationUnit::MilligramsPerDeciliter => "mg/dL",
            ConcentrationUnit::MicromolesPerLiter => "umol/L",
        }
    }
}

impl fmt::Display for ConcentrationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConcentrationUnit {
    type Err = UnrecognizedTerm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mg/dL" => Ok(ConcentrationUnit::MilligramsPerDeciliter),
            "umol/L" => Ok(ConcentrationUnit::MicromolesPerLiter),
            _ => Err(UnrecognizedTerm::new("concentration unit", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gender_boundary_forms() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
    }

    #[test]
    fn rejects_unknown_gender() {
        let err = "blah".parse::<Gender>().unwrap_err();
        assert_eq!(err.kind, "gender");
        assert_eq!(err.value, "blah");
        assert_eq!(err.to_string(), "unrecognized gender term 'blah'");
    }

    #[test]
    fn parses_ethnicity_variants() {
        assert_eq!("black".parse::<Ethnicity>().unwrap(), Ethnicity::Black);
        assert_eq!("Black".parse::<Ethnicity>().unwrap(), Ethnicity::Black);
        assert_eq!("non-black".parse::<Ethnicity>().unwrap(), Ethnicity::NonBlack);
        assert_eq!("non_black".parse::<Ethnicity>().unwrap(), Ethnicity::NonBlack);
        assert_eq!("nonblack".parse::<Ethnicity>().unwrap(), Ethnicity::NonBlack);
    }

    #[test]
    fn unit_codes_are_case_sensitive() {
        assert_eq!(
            "mg/dL".parse::<ConcentrationUnit>().unwrap(),
            ConcentrationUnit::MilligramsPerDeciliter
        );
        assert_eq!(
            "umol/L".parse::<ConcentrationUnit>().unwrap(),
            ConcentrationUnit::MicromolesPerLiter
        );
        assert!("MG/DL".parse::<ConcentrationUnit>().is_err());
        assert!("Umol/l".parse::<ConcentrationUnit>().is_err());
    }

    #[test]
    fn display_uses_canonical_strings() {
        assert_eq!(Gender::Female.to_string(), "female");
        assert_eq!(Ethnicity::NonBlack.to_string(), "non-black");
        assert_eq!(ConcentrationUnit::MilligramsPerDeciliter.to_string(), "mg/dL");
    }

    #[test]
    fn serde_round_trips_canonical_codes() {
        let json = serde_json::to_string(&ConcentrationUnit::MicromolesPerLiter).unwrap();
        assert_eq!(json, "\"umol/L\"");
        let unit: ConcentrationUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(unit, ConcentrationUnit::MicromolesPerLiter);

        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::to_string(&Ethnicity::NonBlack).unwrap(),
            "\"non-black\""
        );
    }
}
