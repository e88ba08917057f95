use std::sync::Arc;

use serde::de::DeserializeOwned;
use sprint_core::model::{Profile, ProfileSettings, ProfileSettingsDraft, ProgressStats};
use sprint_core::session::SessionResult;
use storage::repository::PreferenceRepository;
use tracing::{info, warn};

use crate::error::ProfileServiceError;

const SETTINGS_KEY: &str = "profile_settings";
const PROGRESS_KEY: &str = "profile_progress";

/// Loads and persists the profile tab's settings and progress as JSON blobs.
#[derive(Clone)]
pub struct ProfileService {
    repo: Arc<dyn PreferenceRepository>,
}

impl ProfileService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferenceRepository>) -> Self {
        Self { repo }
    }

    /// Load the profile, falling back to defaults for absent or unreadable blobs.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError::Storage` if the store cannot be read.
    pub async fn load(&self) -> Result<Profile, ProfileServiceError> {
        Ok(Profile {
            settings: self.read_json::<ProfileSettings>(SETTINGS_KEY).await?,
            progress: self.read_json::<ProgressStats>(PROGRESS_KEY).await?,
        })
    }

    /// Validate the draft and persist the resulting settings.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError::Profile` for validation failures.
    /// Returns `ProfileServiceError::Storage` if persistence fails.
    pub async fn save_settings(
        &self,
        draft: ProfileSettingsDraft,
    ) -> Result<ProfileSettings, ProfileServiceError> {
        let settings = draft.validate()?;
        self.write_json(SETTINGS_KEY, &settings).await?;
        info!(name = settings.name(), "profile settings saved");
        Ok(settings)
    }

    /// Zero the progress counters. Milestone flags are left alone.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError` if the progress cannot be read or written.
    pub async fn reset_progress(&self) -> Result<ProgressStats, ProfileServiceError> {
        let progress = self.read_json::<ProgressStats>(PROGRESS_KEY).await?.reset();
        self.write_json(PROGRESS_KEY, &progress).await?;
        info!("progress reset");
        Ok(progress)
    }

    /// Fold a finished practice session into the stored progress.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError` if the progress cannot be read or written.
    pub async fn record_session(
        &self,
        result: &SessionResult,
    ) -> Result<ProgressStats, ProfileServiceError> {
        let progress = self
            .read_json::<ProgressStats>(PROGRESS_KEY)
            .await?
            .record_session(result);
        self.write_json(PROGRESS_KEY, &progress).await?;
        info!(
            answered = result.answered,
            correct = result.correct,
            "session recorded"
        );
        Ok(progress)
    }

    async fn read_json<T>(&self, key: &str) -> Result<T, ProfileServiceError>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.repo.get_value(key).await? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(key, error = %err, "ignoring unreadable profile blob");
                Ok(T::default())
            }
        }
    }

    async fn write_json<T: serde::Serialize>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), ProfileServiceError> {
        let raw = serde_json::to_string(value)?;
        self.repo.set_value(key, &raw).await?;
        Ok(())
    }
}
