//! CKD-EPI estimating equations, 2009 and 2021 revisions.
//!
//! Both take serum creatinine with age and sex and estimate GFR in
//! mL/min/1.73m². Creatinine is stored normalized to µmol/L and converted
//! to mg/dL where the equations expect it.

use once_cell::sync::OnceCell;

use kalium_terms::{ConcentrationUnit, Ethnicity, Gender, CREATININE, MW_CREATININE};

use crate::error::{Error, Result};
use crate::input::EgfrInput;

/// CKD-EPI 2009 creatinine equation, with the ethnicity adjustment.
///
/// Requires gender, adult age, a creatinine result and an ethnicity
/// grouping; construction fails without them.
#[derive(Debug)]
pub struct EgfrCkdEpi2009 {
    input: EgfrInput,
    scr_micromoles: f64,
    value: OnceCell<f64>,
}

impl EgfrCkdEpi2009 {
    pub fn new(input: EgfrInput) -> Result<Self> {
        input.validate_adult_age()?;
        if input.ethnicity.is_none() {
            return Err(Error::MissingEthnicity);
        }
        let scr_micromoles = input.creatinine_micromoles_per_liter()?;
        Ok(Self {
            input,
            scr_micromoles,
            value: OnceCell::new(),
        })
    }

    /// Sex-specific reference creatinine in mg/dL.
    pub fn kappa(&self) -> f64 {
        match self.input.gender {
            Gender::Female => 0.7,
            Gender::Male => 0.9,
        }
    }

    /// Sex-specific exponent applied below the reference creatinine.
    pub fn alpha(&self) -> f64 {
        match self.input.gender {
            Gender::Female => -0.329,
            Gender::Male => -0.411,
        }
    }

    fn gender_factor(&self) -> f64 {
        match self.input.gender {
            Gender::Female => 1.018,
            Gender::Male => 1.0,
        }
    }

    fn ethnicity_factor(&self) -> f64 {
        match self.input.ethnicity {
            Some(Ethnicity::Black) => 1.159,
            Some(Ethnicity::NonBlack) | None => 1.0,
        }
    }

    /// Estimated GFR, computed on first read and cached.
    pub fn value(&self) -> Result<f64> {
        self.value.get_or_try_init(|| self.compute()).copied()
    }

    fn compute(&self) -> Result<f64> {
        let scr = creatinine_milligrams(self.scr_micromoles)?;
        let ratio = scr / self.kappa();
        Ok(141.0
            * ratio.min(1.0).powf(self.alpha())
            * ratio.max(1.0).powf(-1.209)
            * 0.993_f64.powf(self.input.age_in_years)
            * self.gender_factor()
            * self.ethnicity_factor())
    }
}

/// CKD-EPI 2021 creatinine equation, the race-free refit.
///
/// An ethnicity on the input record is accepted and ignored.
#[derive(Debug)]
pub struct EgfrCkdEpi2021 {
    input: EgfrInput,
    scr_micromoles: f64,
    value: OnceCell<f64>,
}

impl EgfrCkdEpi2021 {
    pub fn new(input: EgfrInput) -> Result<Self> {
        input.validate_adult_age()?;
        let scr_micromoles = input.creatinine_micromoles_per_liter()?;
        Ok(Self {
            input,
            scr_micromoles,
            value: OnceCell::new(),
        })
    }

    /// Sex-specific reference creatinine in mg/dL.
    pub fn kappa(&self) -> f64 {
        match self.input.gender {
            Gender::Female => 0.7,
            Gender::Male => 0.9,
        }
    }

    /// Sex-specific exponent applied below the reference creatinine.
    pub fn alpha(&self) -> f64 {
        match self.input.gender {
            Gender::Female => -0.241,
            Gender::Male => -0.302,
        }
    }

    /// Sex factor of the 2021 refit.
    pub fn gender_factor(&self) -> f64 {
        match self.input.gender {
            Gender::Female => 1.012,
            Gender::Male => 1.0,
        }
    }

    /// Age decay term, `0.993^age`.
    pub fn age_factor(&self) -> f64 {
        0.993_f64.powf(self.input.age_in_years)
    }

    /// Estimated GFR, computed on first read and cached.
    pub fn value(&self) -> Result<f64> {
        self.value.get_or_try_init(|| self.compute()).copied()
    }

    fn compute(&self) -> Result<f64> {
        let scr = creatinine_milligrams(self.scr_micromoles)?;
        let ratio = scr / self.kappa();
        Ok(142.0
            * ratio.min(1.0).powf(self.alpha())
            * ratio.max(1.0).powf(-1.200)
            * self.age_factor()
            * self.gender_factor())
    }
}

// The equations take creatinine in mg/dL; inputs are stored in µmol/L.
fn creatinine_milligrams(micromoles: f64) -> Result<f64> {
    let milligrams = kalium_units::micromoles_per_liter_to(
        CREATININE,
        micromoles,
        ConcentrationUnit::MilligramsPerDeciliter,
        MW_CREATININE,
    )?;
    // Tiny values round to zero here, and the power terms diverge at zero.
    if !(milligrams > 0.0) {
        return Err(Error::InvalidCreatinine { value: milligrams });
    }
    Ok(milligrams)
}
