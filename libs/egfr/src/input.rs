use kalium_terms::{ConcentrationUnit, Ethnicity, Gender, CREATININE, MW_CREATININE};

use crate::error::{Error, Result};

/// Youngest age in years the estimating equations are applied to.
pub const MIN_AGE_YEARS: f64 = 18.0;

/// Demographics and laboratory values shared by the eGFR calculators.
///
/// Each calculator validates the fields it needs; fields a calculator does
/// not use may stay `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct EgfrInput {
    /// Administrative sex.
    pub gender: Gender,

    /// Age in years.
    pub age_in_years: f64,

    /// Serum creatinine result.
    pub creatinine_value: Option<f64>,

    /// Units the creatinine result was reported in.
    pub creatinine_units: Option<ConcentrationUnit>,

    /// Ethnicity grouping; used by CKD-EPI 2009 only.
    pub ethnicity: Option<Ethnicity>,

    /// Body weight in kg; used by Cockcroft-Gault only.
    pub weight: Option<f64>,
}

impl EgfrInput {
    pub fn new(gender: Gender, age_in_years: f64) -> Self {
        Self {
            gender,
            age_in_years,
            creatinine_value: None,
            creatinine_units: None,
            ethnicity: None,
            weight: None,
        }
    }

    /// Attach a serum creatinine result.
    pub fn with_creatinine(mut self, value: f64, units: ConcentrationUnit) -> Self {
        self.creatinine_value = Some(value);
        self.creatinine_units = Some(units);
        self
    }

    /// Attach an ethnicity grouping (required by CKD-EPI 2009).
    pub fn with_ethnicity(mut self, ethnicity: Ethnicity) -> Self {
        self.ethnicity = Some(ethnicity);
        self
    }

    /// Attach a body weight in kg (required by Cockcroft-Gault).
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub(crate) fn validate_adult_age(&self) -> Result<()> {
        // Written so a NaN age also fails the comparison.
        if !(self.age_in_years >= MIN_AGE_YEARS) {
            return Err(Error::InvalidAge {
                age: self.age_in_years,
                min: MIN_AGE_YEARS,
            });
        }
        Ok(())
    }

    /// Creatinine normalized to µmol/L, validating presence and positivity.
    pub(crate) fn creatinine_micromoles_per_liter(&self) -> Result<f64> {
        let value = self.creatinine_value.ok_or(Error::MissingCreatinine)?;
        let units = self.creatinine_units.ok_or(Error::MissingCreatinineUnits)?;
        if !(value.is_finite() && value > 0.0) {
            return Err(Error::InvalidCreatinine { value });
        }
        let micromoles = kalium_units::convert(
            CREATININE,
            value,
            units,
            ConcentrationUnit::MicromolesPerLiter,
            MW_CREATININE,
        )?;
        // A positive raw value can still round to zero at reporting resolution.
        if !(micromoles > 0.0) {
            return Err(Error::InvalidCreatinine { value: micromoles });
        }
        Ok(micromoles)
    }
}
