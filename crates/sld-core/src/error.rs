use thiserror::Error;

pub type SldResult<T> = Result<T, SldError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SldError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative extent for {what}: {value}")]
    NegativeExtent { what: &'static str, value: f64 },
}
