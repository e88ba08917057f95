mod onboarding_vm;
mod session_vm;
mod stats_vm;

pub use onboarding_vm::{ONBOARDING_PAGES, OnboardingPage, OnboardingPager, PagerStep};
pub use session_vm::{
    ChoiceState, ChoiceVm, SessionResultVm, map_choices, map_session_result,
};
pub use stats_vm::{ActivityBarVm, TopicRowVm, map_activity_bars, map_topic_rows};
