use thiserror::Error;

use crate::model::{IntakeError, ProfileError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}
