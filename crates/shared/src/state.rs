use crate::{domain::GroupedRecords, error::FetchError};

/// Observable pipeline state. Exactly one variant is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PipelineState {
    #[default]
    Idle,
    Loading,
    Success(GroupedRecords),
    Failed(FetchError),
}

impl PipelineState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// `Success` and `Failed` are terminal until the next invocation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failed(_))
    }

    pub fn grouped(&self) -> Option<&GroupedRecords> {
        match self {
            Self::Success(grouped) => Some(grouped),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failed(_) => "failed",
        }
    }
}
