use evac_core::EvacError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("scenario parse error: {0}")]
    Scenario(#[from] serde_json::Error),

    #[error(transparent)]
    Evac(#[from] EvacError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
