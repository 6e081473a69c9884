use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Validation and computation failures raised by the eGFR calculators.
#[derive(Debug, Error)]
pub enum Error {
    #[error("age {age} is below the adult minimum of {min} years")]
    InvalidAge { age: f64, min: f64 },

    #[error("a serum creatinine value is required")]
    MissingCreatinine,

    #[error("creatinine units are required")]
    MissingCreatinineUnits,

    #[error("creatinine value {value} is not a positive number")]
    InvalidCreatinine { value: f64 },

    #[error("an ethnicity is required")]
    MissingEthnicity,

    #[error("a body weight is required")]
    MissingWeight,

    #[error("body weight {weight} is not a positive number")]
    InvalidWeight { weight: f64 },

    #[error(transparent)]
    UnrecognizedTerm(#[from] kalium_terms::UnrecognizedTerm),

    #[error(transparent)]
    Conversion(#[from] kalium_units::Error),
}
