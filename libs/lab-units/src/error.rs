use kalium_terms::ConcentrationUnit;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no conversion handled for '{label}' from {from} to {to}")]
    ConversionNotHandled {
        label: String,
        from: ConcentrationUnit,
        to: ConcentrationUnit,
    },

    #[error("invalid molecular weight {mw} g/mol for '{label}'")]
    InvalidMolecularWeight { label: String, mw: f64 },
}
