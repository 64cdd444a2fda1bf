use crystal_core::{CrystalError, ErrorSeverity, GrowthStage};

use crate::site::Direction;

/// Runtime errors
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Source references a formation missing from the registry
    #[error("formation '{0}' is not registered")]
    UnknownSet(String),

    /// Source index out of range
    #[error("no budding source at index {0}")]
    UnknownSource(usize),

    /// Harvest requested on a site that is not a fully grown cluster
    #[error("site {face} holds {stage}, only clusters can be harvested")]
    NotCluster { face: Direction, stage: GrowthStage },
}

impl CrystalError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::UnknownSet(_) | RuntimeError::UnknownSource(_) => {
                ErrorSeverity::Validation
            }
            RuntimeError::NotCluster { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::UnknownSet(_) => "RUNTIME_UNKNOWN_SET",
            RuntimeError::UnknownSource(_) => "RUNTIME_UNKNOWN_SOURCE",
            RuntimeError::NotCluster { .. } => "RUNTIME_NOT_CLUSTER",
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
