use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sprint_core::{FlowSequencer, Milestone, Milestones, Stage, StageChange};
use storage::repository::{FlagRepository, load_milestones};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::FlowServiceError;

/// Owns the first-run funnel state and keeps its flags persisted.
///
/// Each finish/skip call updates the in-memory sequencer first, then writes
/// every flag that is raised but not yet stored. Subscribers are notified
/// through a `watch` channel once that write has been attempted, so a
/// subscriber that tears down the caller cannot cancel the write.
pub struct FlowService {
    state: Mutex<FlowState>,
    stage_tx: watch::Sender<Stage>,
    flags: Arc<dyn FlagRepository>,
}

struct FlowState {
    sequencer: FlowSequencer,
    /// Raised in memory, not yet confirmed by the store.
    unsaved: HashSet<Milestone>,
}

impl FlowService {
    /// Rebuild the sequencer from persisted flags.
    ///
    /// # Errors
    ///
    /// Returns `FlowServiceError` if the flags cannot be read.
    pub async fn load(flags: Arc<dyn FlagRepository>) -> Result<Self, FlowServiceError> {
        let milestones = load_milestones(flags.as_ref()).await?;
        debug!(?milestones, "loaded milestones");
        Ok(Self::from_milestones(milestones, flags))
    }

    #[must_use]
    pub fn from_milestones(milestones: Milestones, flags: Arc<dyn FlagRepository>) -> Self {
        let sequencer = FlowSequencer::from_milestones(milestones);
        let (stage_tx, _) = watch::channel(sequencer.stage());
        Self {
            state: Mutex::new(FlowState {
                sequencer,
                unsaved: HashSet::new(),
            }),
            stage_tx,
            flags,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.lock().sequencer.stage()
    }

    #[must_use]
    pub fn milestones(&self) -> Milestones {
        self.lock().sequencer.milestones()
    }

    /// Receive every stage change from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Stage> {
        self.stage_tx.subscribe()
    }

    /// # Errors
    ///
    /// Returns `FlowServiceError` if the flag cannot be persisted. The
    /// in-memory stage has already advanced; calling again retries the write.
    pub async fn finish_onboarding(&self) -> Result<Stage, FlowServiceError> {
        self.advance(Milestone::OnboardingSeen).await
    }

    /// # Errors
    ///
    /// Returns `FlowServiceError` if the flag cannot be persisted.
    pub async fn finish_intake(&self) -> Result<Stage, FlowServiceError> {
        self.advance(Milestone::IntakeDone).await
    }

    /// # Errors
    ///
    /// Returns `FlowServiceError` if the flag cannot be persisted.
    pub async fn finish_diagnostic(&self) -> Result<Stage, FlowServiceError> {
        self.advance(Milestone::DiagnosticDone).await
    }

    /// # Errors
    ///
    /// Returns `FlowServiceError` if the flag cannot be persisted.
    pub async fn skip_diagnostic(&self) -> Result<Stage, FlowServiceError> {
        self.advance(Milestone::DiagnosticSkipped).await
    }

    async fn advance(&self, milestone: Milestone) -> Result<Stage, FlowServiceError> {
        let (change, pending) = self.apply_in_memory(milestone);
        let persisted = self.persist(&pending).await;
        if change.stage_changed() {
            info!(from = %change.previous, to = %change.current, "stage changed");
            self.stage_tx.send_replace(change.current);
        }
        persisted.map(|()| change.current)
    }

    fn apply_in_memory(&self, milestone: Milestone) -> (StageChange, Vec<Milestone>) {
        let mut state = self.lock();
        let change = state.sequencer.apply(milestone);
        if change.flag_changed {
            state.unsaved.insert(milestone);
        }
        let pending = Milestone::ALL
            .into_iter()
            .filter(|m| state.unsaved.contains(m))
            .collect();
        (change, pending)
    }

    async fn persist(&self, pending: &[Milestone]) -> Result<(), FlowServiceError> {
        for &milestone in pending {
            if let Err(err) = self.flags.set_flag(milestone.key(), true).await {
                warn!(key = milestone.key(), error = %err, "failed to persist milestone");
                return Err(err.into());
            }
            self.lock().unsaved.remove(&milestone);
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use storage::repository::{InMemoryRepository, StorageError};

    struct FailingFlags;

    #[async_trait]
    impl FlagRepository for FailingFlags {
        async fn get_flag(&self, _key: &str) -> Result<Option<bool>, StorageError> {
            Ok(None)
        }

        async fn set_flag(&self, _key: &str, _value: bool) -> Result<(), StorageError> {
            Err(StorageError::Connection("fail".to_string()))
        }
    }

    /// Fails the first write, then delegates.
    #[derive(Default)]
    struct FlakyFlags {
        failed_once: AtomicBool,
        inner: InMemoryRepository,
    }

    #[async_trait]
    impl FlagRepository for FlakyFlags {
        async fn get_flag(&self, key: &str) -> Result<Option<bool>, StorageError> {
            self.inner.get_flag(key).await
        }

        async fn set_flag(&self, key: &str, value: bool) -> Result<(), StorageError> {
            if !self.failed_once.swap(true, Ordering::SeqCst) {
                return Err(StorageError::Connection("disk full".to_string()));
            }
            self.inner.set_flag(key, value).await
        }
    }

    /// Delays every write so callers can be cancelled mid-flight.
    #[derive(Default)]
    struct SlowFlags {
        inner: InMemoryRepository,
    }

    #[async_trait]
    impl FlagRepository for SlowFlags {
        async fn get_flag(&self, key: &str) -> Result<Option<bool>, StorageError> {
            self.inner.get_flag(key).await
        }

        async fn set_flag(&self, key: &str, value: bool) -> Result<(), StorageError> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.inner.set_flag(key, value).await
        }
    }

    #[tokio::test]
    async fn finish_onboarding_persists_and_notifies() {
        let repo = Arc::new(InMemoryRepository::new());
        let flow = FlowService::load(repo.clone()).await.unwrap();
        let mut rx = flow.subscribe();
        assert_eq!(*rx.borrow(), Stage::Onboarding);

        let stage = flow.finish_onboarding().await.unwrap();
        assert_eq!(stage, Stage::Intake);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Stage::Intake);
        assert_eq!(repo.get_flag("onboarding_seen").await.unwrap(), Some(true));
    }

    #[tokio::test]
    async fn repeated_finish_does_not_notify_again() {
        let repo = Arc::new(InMemoryRepository::new());
        let flow = FlowService::load(repo).await.unwrap();
        flow.finish_onboarding().await.unwrap();

        let mut rx = flow.subscribe();
        let _ = rx.borrow_and_update();
        flow.finish_onboarding().await.unwrap();
        assert!(!rx.has_changed().unwrap());
        assert_eq!(flow.stage(), Stage::Intake);
    }

    #[tokio::test]
    async fn persistence_failure_keeps_in_memory_stage() {
        let flow = FlowService::load(Arc::new(FailingFlags)).await.unwrap();
        let err = flow.finish_onboarding().await.unwrap_err();
        assert!(matches!(err, FlowServiceError::Storage(_)));
        assert_eq!(flow.stage(), Stage::Intake);
        assert!(flow.milestones().onboarding_seen);
    }

    #[tokio::test]
    async fn persistence_failure_still_notifies_subscribers() {
        let flow = FlowService::load(Arc::new(FailingFlags)).await.unwrap();
        let rx = flow.subscribe();
        assert!(flow.finish_onboarding().await.is_err());
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow(), Stage::Intake);
    }

    #[tokio::test]
    async fn retry_after_failed_write_reaches_store() {
        let repo = Arc::new(FlakyFlags::default());
        let flow = FlowService::load(repo.clone()).await.unwrap();

        assert!(flow.finish_onboarding().await.is_err());
        assert_eq!(repo.get_flag("onboarding_seen").await.unwrap(), None);

        assert_eq!(flow.finish_onboarding().await.unwrap(), Stage::Intake);
        assert_eq!(repo.get_flag("onboarding_seen").await.unwrap(), Some(true));

        let reloaded = FlowService::load(repo).await.unwrap();
        assert_eq!(reloaded.stage(), Stage::Intake);
    }

    #[tokio::test]
    async fn failed_flag_is_written_with_the_next_milestone() {
        let repo = Arc::new(FlakyFlags::default());
        let flow = FlowService::load(repo.clone()).await.unwrap();

        assert!(flow.finish_onboarding().await.is_err());
        assert_eq!(flow.finish_intake().await.unwrap(), Stage::Diagnostic);

        let reloaded = FlowService::load(repo).await.unwrap();
        assert_eq!(reloaded.stage(), Stage::Diagnostic);
    }

    #[tokio::test]
    async fn caller_cancelled_on_stage_change_still_persists() {
        let repo = Arc::new(SlowFlags::default());
        let flow = Arc::new(FlowService::load(repo.clone()).await.unwrap());
        let mut rx = flow.subscribe();

        // Mirrors a screen whose task is dropped as soon as the stage moves on.
        let task = tokio::spawn({
            let flow = Arc::clone(&flow);
            async move { flow.finish_onboarding().await }
        });
        rx.changed().await.unwrap();
        task.abort();

        assert_eq!(*rx.borrow(), Stage::Intake);
        assert_eq!(
            repo.inner.get_flag("onboarding_seen").await.unwrap(),
            Some(true)
        );
        let reloaded = FlowService::load(repo).await.unwrap();
        assert_eq!(reloaded.stage(), Stage::Intake);
    }

    #[tokio::test]
    async fn skip_and_finish_diagnostic_both_reach_main() {
        let repo = Arc::new(InMemoryRepository::new());
        let flow = FlowService::load(repo.clone()).await.unwrap();
        flow.finish_onboarding().await.unwrap();
        flow.finish_intake().await.unwrap();
        assert_eq!(flow.stage(), Stage::Diagnostic);
        assert_eq!(flow.skip_diagnostic().await.unwrap(), Stage::Main);
        assert_eq!(flow.finish_diagnostic().await.unwrap(), Stage::Main);

        let reloaded = FlowService::load(repo).await.unwrap();
        assert_eq!(reloaded.stage(), Stage::Main);
        let milestones = reloaded.milestones();
        assert!(milestones.diagnostic_done && milestones.diagnostic_skipped);
    }
}
