#![forbid(unsafe_code)]

//! Estimated glomerular filtration rate (eGFR) calculators.
//!
//! Three creatinine-based estimators share one input record:
//!
//! - [`EgfrCkdEpi2009`]: CKD-EPI 2009, with the ethnicity adjustment
//! - [`EgfrCkdEpi2021`]: CKD-EPI 2021, race-free
//! - [`EgfrCockcroftGault`]: Cockcroft-Gault creatinine clearance
//!
//! The CKD-EPI calculators validate demographics and the serum creatinine
//! result at construction. Cockcroft-Gault checks only the demographics
//! there: its creatinine and body weight are validated when the value is
//! first read, because in clinical data entry those fields often arrive
//! after the demographics. Results are computed once per calculator and
//! cached; failed reads are not cached and re-report their error.
//!
//! # Example
//!
//! ```
//! use kalium_egfr::{EgfrCkdEpi2021, EgfrInput};
//! use kalium_terms::{ConcentrationUnit, Gender};
//!
//! let input = EgfrInput::new(Gender::Female, 30.0)
//!     .with_creatinine(53.0, ConcentrationUnit::MicromolesPerLiter);
//! let egfr = EgfrCkdEpi2021::new(input)?;
//! assert!(egfr.value()? > 120.0);
//! # Ok::<(), kalium_egfr::Error>(())
//! ```

mod ckd_epi;
mod cockcroft_gault;
mod error;
mod input;
mod percent_change;

pub use ckd_epi::{EgfrCkdEpi2009, EgfrCkdEpi2021};
pub use cockcroft_gault::EgfrCockcroftGault;
pub use error::{Error, Result};
pub use input::{EgfrInput, MIN_AGE_YEARS};
pub use percent_change::egfr_percent_change;
