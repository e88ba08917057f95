use std::sync::Arc;

use storage::repository::Storage;
use tracing::info;

use crate::error::AppServicesError;
use crate::flow_service::FlowService;
use crate::home_service::HomeService;
use crate::intake_service::IntakeService;
use crate::practice_service::PracticeService;
use crate::profile_service::ProfileService;
use crate::stats_service::StatsService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    flow: Arc<FlowService>,
    intake: Arc<IntakeService>,
    profile: Arc<ProfileService>,
    practice: Arc<PracticeService>,
    stats: Arc<StatsService>,
    home: Arc<HomeService>,
}

impl AppServices {
    /// Build services over an existing storage aggregate, restoring the
    /// funnel stage from its flags.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Flow` if the flags cannot be read.
    pub async fn new(storage: Storage) -> Result<Self, AppServicesError> {
        let flow = FlowService::load(Arc::clone(&storage.flags)).await?;
        info!(stage = %flow.stage(), "flow restored");

        Ok(Self {
            flow: Arc::new(flow),
            intake: Arc::new(IntakeService::new(Arc::clone(&storage.preferences))),
            profile: Arc::new(ProfileService::new(Arc::clone(&storage.preferences))),
            practice: Arc::new(PracticeService::new()),
            stats: Arc::new(StatsService::new()),
            home: Arc::new(HomeService::new()),
        })
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or flag loading fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::new(storage).await
    }

    /// Build services over a fresh in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if flag loading fails.
    pub async fn in_memory() -> Result<Self, AppServicesError> {
        Self::new(Storage::in_memory()).await
    }

    #[must_use]
    pub fn flow(&self) -> Arc<FlowService> {
        Arc::clone(&self.flow)
    }

    #[must_use]
    pub fn intake(&self) -> Arc<IntakeService> {
        Arc::clone(&self.intake)
    }

    #[must_use]
    pub fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn stats(&self) -> Arc<StatsService> {
        Arc::clone(&self.stats)
    }

    #[must_use]
    pub fn home(&self) -> Arc<HomeService> {
        Arc::clone(&self.home)
    }
}
