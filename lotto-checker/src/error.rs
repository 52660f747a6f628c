use crate::checker::CaptureOutcome;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckError>;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Lotto core error: {0}")]
    Core(#[from] lotto_core::LottoError),

    #[error("Ticket capture did not complete: {0}")]
    CaptureAborted(CaptureOutcome),

    #[error("Invalid ticket: {0}")]
    InvalidTicket(String),
}

impl CheckError {
    pub fn invalid_ticket(msg: impl Into<String>) -> Self {
        Self::InvalidTicket(msg.into())
    }
}
