use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    TransportFailure,
    InvalidStatus,
    DecodeFailure,
}

/// Failure raised while fetching the listing. Carried unmodified into
/// [`crate::state::PipelineState::Failed`], so it stays cloneable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    TransportFailure(String),
    #[error("invalid status code: {0}")]
    InvalidStatus(u16),
    #[error("failed to decode payload: {0}")]
    DecodeFailure(String),
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportFailure(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeFailure(message.into())
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::TransportFailure(_) => FetchErrorKind::TransportFailure,
            Self::InvalidStatus(_) => FetchErrorKind::InvalidStatus,
            Self::DecodeFailure(_) => FetchErrorKind::DecodeFailure,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::decode(value.to_string())
    }
}
