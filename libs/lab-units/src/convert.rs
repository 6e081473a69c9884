use kalium_terms::ConcentrationUnit;

use crate::error::{Error, Result};
use crate::rounding::round_half_away_from_zero;

/// Analyte labels with a registered mass/molar conversion path.
const CONVERTIBLE_LABELS: &[&str] = &[kalium_terms::CREATININE];

/// Decimal places a converted concentration is reported at.
const REPORTED_PLACES: u32 = 4;

/// Converts an analyte concentration between reporting units.
///
/// When `units_from` and `units_to` are equal the value is passed through
/// unchanged for any label and `mw` is not inspected. Otherwise `label` must
/// be a registered analyte and `mw` its molecular weight in g/mol; the
/// conversion factor between mg/dL and µmol/L is `10000 / mw`, and the
/// converted result is reported at four decimal places.
pub fn convert(
    label: &str,
    value: f64,
    units_from: ConcentrationUnit,
    units_to: ConcentrationUnit,
    mw: f64,
) -> Result<f64> {
    if units_from == units_to {
        return Ok(value);
    }
    if !CONVERTIBLE_LABELS.contains(&label) {
        return Err(Error::ConversionNotHandled {
            label: label.to_string(),
            from: units_from,
            to: units_to,
        });
    }
    if !(mw.is_finite() && mw > 0.0) {
        return Err(Error::InvalidMolecularWeight {
            label: label.to_string(),
            mw,
        });
    }

    // µmol/L per mg/dL
    let factor = 10_000.0 / mw;
    let converted = match units_from {
        ConcentrationUnit::MilligramsPerDeciliter => value * factor,
        ConcentrationUnit::MicromolesPerLiter => value / factor,
    };
    Ok(round_half_away_from_zero(converted, REPORTED_PLACES))
}

/// [`convert`] from mg/dL.
pub fn milligrams_per_deciliter_to(
    label: &str,
    value: f64,
    units_to: ConcentrationUnit,
    mw: f64,
) -> Result<f64> {
    convert(
        label,
        value,
        ConcentrationUnit::MilligramsPerDeciliter,
        units_to,
        mw,
    )
}

/// [`convert`] from µmol/L.
pub fn micromoles_per_liter_to(
    label: &str,
    value: f64,
    units_to: ConcentrationUnit,
    mw: f64,
) -> Result<f64> {
    convert(
        label,
        value,
        ConcentrationUnit::MicromolesPerLiter,
        units_to,
        mw,
    )
}
