#![forbid(unsafe_code)]

mod convert;
mod error;
mod rounding;

pub use convert::{convert, micromoles_per_liter_to, milligrams_per_deciliter_to};
pub use error::{Error, Result};
pub use rounding::{
    round_decimal_half_away_from_zero, round_decimal_half_up, round_half_away_from_zero,
    round_half_up,
};
