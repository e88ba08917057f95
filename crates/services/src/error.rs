//! Shared error types for the services crate.

use thiserror::Error;

use sprint_core::model::ProfileError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `FlowService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `IntakeService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IntakeServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProfileService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("profile encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Flow(#[from] FlowServiceError),
}
