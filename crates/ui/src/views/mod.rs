mod diagnostic;
mod home;
mod intake;
mod onboarding;
mod practice;
mod profile;
mod session;
mod state;
mod stats;

pub use diagnostic::DiagnosticView;
pub use home::HomeView;
pub use intake::IntakeView;
pub use onboarding::OnboardingView;
pub use practice::PracticeView;
pub use profile::ProfileView;
pub use session::PracticeSessionPanel;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use stats::StatsView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
