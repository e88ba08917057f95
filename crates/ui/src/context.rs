use std::sync::Arc;

use services::{
    FlowService, HomeService, IntakeService, PracticeService, ProfileService, StatsService,
};

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn flow(&self) -> Arc<FlowService>;
    fn intake(&self) -> Arc<IntakeService>;
    fn profile(&self) -> Arc<ProfileService>;
    fn practice(&self) -> Arc<PracticeService>;
    fn stats(&self) -> Arc<StatsService>;
    fn home(&self) -> Arc<HomeService>;
}

#[derive(Clone)]
pub struct AppContext {
    flow: Arc<FlowService>,
    intake: Arc<IntakeService>,
    profile: Arc<ProfileService>,
    practice: Arc<PracticeService>,
    stats: Arc<StatsService>,
    home: Arc<HomeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            flow: app.flow(),
            intake: app.intake(),
            profile: app.profile(),
            practice: app.practice(),
            stats: app.stats(),
            home: app.home(),
        }
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

// Provided by the composition root (`crates/app`) through `LaunchBuilder::with_context`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
