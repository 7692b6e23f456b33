pub mod pivot_service;

pub use pivot_service::PivotService;

use crate::errors::PivotError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Pivot(#[from] PivotError),
    #[error("Preset not found: {0}")]
    PresetNotFound(String),
}
