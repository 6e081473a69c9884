//! Cockcroft-Gault creatinine clearance.

use once_cell::sync::OnceCell;

use kalium_terms::Gender;

use crate::error::{Error, Result};
use crate::input::EgfrInput;

/// Cockcroft-Gault estimate of creatinine clearance in mL/min.
///
/// Uses the SI form of the equation, with serum creatinine in µmol/L:
/// `gender_factor * (140 - age) * weight / creatinine`. Only the
/// demographics are checked at construction; a record still missing its
/// creatinine result or body weight builds fine, exposes its factors, and
/// only [`value`](Self::value) reports the missing field.
#[derive(Debug)]
pub struct EgfrCockcroftGault {
    input: EgfrInput,
    value: OnceCell<f64>,
}

impl EgfrCockcroftGault {
    pub fn new(input: EgfrInput) -> Result<Self> {
        input.validate_adult_age()?;
        Ok(Self {
            input,
            value: OnceCell::new(),
        })
    }

    /// Sex-specific clearance factor of the SI equation.
    pub fn gender_factor(&self) -> f64 {
        match self.input.gender {
            Gender::Female => 1.05,
            Gender::Male => 1.23,
        }
    }

    /// Estimated clearance, computed on first read and cached.
    ///
    /// The creatinine and weight checks run here, not at construction: an
    /// incomplete record errors with [`Error::MissingCreatinine`] or
    /// [`Error::MissingWeight`]. Errors are not cached; every read of an
    /// incomplete record reports the field again.
    pub fn value(&self) -> Result<f64> {
        self.value.get_or_try_init(|| self.compute()).copied()
    }

    fn compute(&self) -> Result<f64> {
        let scr_micromoles = self.input.creatinine_micromoles_per_liter()?;
        let weight = self.input.weight.ok_or(Error::MissingWeight)?;
        if !(weight.is_finite() && weight > 0.0) {
            return Err(Error::InvalidWeight { weight });
        }
        Ok(self.gender_factor() * (140.0 - self.input.age_in_years) * weight
            / scr_micromoles)
    }
}
