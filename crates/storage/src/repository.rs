use async_trait::async_trait;
use sprint_core::{Milestone, Milestones};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Boolean flags under string keys. Absent keys are reported as `None`.
#[async_trait]
pub trait FlagRepository: Send + Sync {
    /// Read a flag.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_flag(&self, key: &str) -> Result<Option<bool>, StorageError>;

    /// Write a flag, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_flag(&self, key: &str, value: bool) -> Result<(), StorageError>;
}

/// String preferences under string keys.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Read a preference.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a preference, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_value(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a preference. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove_value(&self, key: &str) -> Result<(), StorageError>;
}

/// Read all four milestone flags; absent flags read as `false`.
///
/// # Errors
///
/// Returns `StorageError` if any flag cannot be read.
pub async fn load_milestones(flags: &dyn FlagRepository) -> Result<Milestones, StorageError> {
    let mut milestones = Milestones::default();
    for milestone in Milestone::ALL {
        if flags.get_flag(milestone.key()).await?.unwrap_or(false) {
            milestones.mark(milestone);
        }
    }
    Ok(milestones)
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    flags: Arc<Mutex<HashMap<String, bool>>>,
    preferences: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            flags: Arc::new(Mutex::new(HashMap::new())),
            preferences: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl FlagRepository for InMemoryRepository {
    async fn get_flag(&self, key: &str) -> Result<Option<bool>, StorageError> {
        let guard = self
            .flags
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).copied())
    }

    async fn set_flag(&self, key: &str, value: bool) -> Result<(), StorageError> {
        let mut guard = self
            .flags
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value);
        Ok(())
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_value(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .preferences
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the key-value ports behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub flags: Arc<dyn FlagRepository>,
    pub preferences: Arc<dyn PreferenceRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let flags: Arc<dyn FlagRepository> = Arc::new(repo.clone());
        let preferences: Arc<dyn PreferenceRepository> = Arc::new(repo);
        Self { flags, preferences }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprint_core::Stage;

    #[tokio::test]
    async fn missing_flags_read_as_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_flag("onboarding_seen").await.unwrap(), None);

        let milestones = load_milestones(&repo).await.unwrap();
        assert_eq!(milestones, Milestones::default());
        assert_eq!(milestones.resolve(), Stage::Onboarding);
    }

    #[tokio::test]
    async fn load_milestones_reads_every_key() {
        let repo = InMemoryRepository::new();
        repo.set_flag("onboarding_seen", true).await.unwrap();
        repo.set_flag("intake_done", true).await.unwrap();
        repo.set_flag("diagnostic_skipped", true).await.unwrap();
        repo.set_flag("diagnostic_done", false).await.unwrap();

        let milestones = load_milestones(&repo).await.unwrap();
        assert!(milestones.onboarding_seen);
        assert!(milestones.intake_done);
        assert!(!milestones.diagnostic_done);
        assert!(milestones.diagnostic_skipped);
        assert_eq!(milestones.resolve(), Stage::Main);
    }

    #[test]
    fn storage_errors_describe_their_cause() {
        for err in [
            StorageError::Connection("pool closed".to_string()),
            StorageError::Serialization("bad row".to_string()),
        ] {
            let text = err.to_string();
            match err {
                StorageError::Connection(_) => assert_eq!(text, "connection error: pool closed"),
                StorageError::Serialization(_) => assert_eq!(text, "serialization error: bad row"),
            }
        }
    }

    #[tokio::test]
    async fn preferences_set_and_remove() {
        let storage = Storage::in_memory();
        storage
            .preferences
            .set_value("intake_level", "advanced")
            .await
            .unwrap();
        assert_eq!(
            storage.preferences.get_value("intake_level").await.unwrap(),
            Some("advanced".to_string())
        );

        storage.preferences.remove_value("intake_level").await.unwrap();
        storage.preferences.remove_value("intake_level").await.unwrap();
        assert_eq!(
            storage.preferences.get_value("intake_level").await.unwrap(),
            None
        );
    }
}
