#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnboardingPage {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const ONBOARDING_PAGES: [OnboardingPage; 3] = [
    OnboardingPage {
        image: "onb_1",
        title: "Smart SAT Prep",
        subtitle: "Short practice. Clear progress.",
    },
    OnboardingPage {
        image: "onb_2",
        title: "Practice Modes",
        subtitle: "Drills, timed sets, full sections.",
    },
    OnboardingPage {
        image: "onb_3",
        title: "Build Confidence",
        subtitle: "Start easy. Add timing later.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerStep {
    Moved,
    /// The primary button was pressed on the last page.
    Finished,
}

/// Position within the onboarding pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OnboardingPager {
    index: usize,
}

impl OnboardingPager {
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn page(self) -> OnboardingPage {
        ONBOARDING_PAGES[self.index]
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.index + 1 == ONBOARDING_PAGES.len()
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.index += 1;
        }
    }

    pub fn back(&mut self) {
        if !self.is_first() {
            self.index -= 1;
        }
    }

    /// Primary button: move forward, or report that the pager is done.
    pub fn advance(&mut self) -> PagerStep {
        if self.is_last() {
            return PagerStep::Finished;
        }
        self.next();
        PagerStep::Moved
    }

    #[must_use]
    pub fn primary_title(self) -> &'static str {
        if self.is_last() { "Get started" } else { "Next" }
    }

    /// One entry per page, `true` for the current one.
    #[must_use]
    pub fn dots(self) -> Vec<bool> {
        (0..ONBOARDING_PAGES.len()).map(|i| i == self.index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_back_stop_at_edges() {
        let mut pager = OnboardingPager::default();
        pager.back();
        assert_eq!(pager.index(), 0);

        pager.next();
        pager.next();
        pager.next();
        assert_eq!(pager.index(), 2);
        assert!(pager.is_last());
        assert_eq!(pager.page().title, "Build Confidence");
    }

    #[test]
    fn advance_finishes_on_last_page() {
        let mut pager = OnboardingPager::default();
        assert_eq!(pager.primary_title(), "Next");
        assert_eq!(pager.advance(), PagerStep::Moved);
        assert_eq!(pager.advance(), PagerStep::Moved);
        assert_eq!(pager.primary_title(), "Get started");
        assert_eq!(pager.advance(), PagerStep::Finished);
        assert_eq!(pager.index(), 2);
    }

    #[test]
    fn dots_mark_current_page() {
        let mut pager = OnboardingPager::default();
        pager.next();
        assert_eq!(pager.dots(), vec![false, true, false]);
    }
}
