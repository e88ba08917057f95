use std::str::FromStr;
use std::sync::Arc;

use sprint_core::model::{IntakeAnswers, IntakeError};
use storage::repository::PreferenceRepository;
use tracing::warn;

use crate::error::IntakeServiceError;

#[derive(Clone)]
pub struct IntakeService {
    repo: Arc<dyn PreferenceRepository>,
}

impl IntakeService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    /// Load saved answers. Missing or unreadable values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `IntakeServiceError` on storage failures.
    pub async fn load(&self) -> Result<IntakeAnswers, IntakeServiceError> {
        let defaults = IntakeAnswers::default();
        Ok(IntakeAnswers {
            sat_history: self
                .read_or(IntakeAnswers::SAT_HISTORY_KEY, defaults.sat_history)
                .await?,
            level: self
                .read_or(IntakeAnswers::LEVEL_KEY, defaults.level)
                .await?,
            target_band: self
                .read_or(IntakeAnswers::TARGET_BAND_KEY, defaults.target_band)
                .await?,
        })
    }

    /// Persist all three answers.
    ///
    /// # Errors
    ///
    /// Returns `IntakeServiceError` if any value cannot be stored.
    pub async fn save(&self, answers: IntakeAnswers) -> Result<(), IntakeServiceError> {
        for (key, value) in answers.to_entries() {
            self.repo.set_value(key, value).await?;
        }
        Ok(())
    }

    async fn read_or<T>(&self, key: &str, fallback: T) -> Result<T, IntakeServiceError>
    where
        T: FromStr<Err = IntakeError>,
    {
        let Some(raw) = self.repo.get_value(key).await? else {
            return Ok(fallback);
        };
        match raw.parse::<T>() {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(key, error = %err, "ignoring unreadable intake answer");
                Ok(fallback)
            }
        }
    }
}
