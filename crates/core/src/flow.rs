//! First-run funnel: onboarding, intake, diagnostic, then the main app.
//!
//! The current [`Stage`] is never stored. It is resolved from four one-way
//! milestone flags by checking each gate in order; the first unmet gate wins.

use std::fmt;

/// The single current step of the first-run funnel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stage {
    #[default]
    Onboarding,
    Intake,
    Diagnostic,
    Main,
}

impl Stage {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::Intake => "intake",
            Self::Diagnostic => "diagnostic",
            Self::Main => "main",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four persisted milestone flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Milestone {
    OnboardingSeen,
    IntakeDone,
    DiagnosticDone,
    DiagnosticSkipped,
}

impl Milestone {
    pub const ALL: [Milestone; 4] = [
        Milestone::OnboardingSeen,
        Milestone::IntakeDone,
        Milestone::DiagnosticDone,
        Milestone::DiagnosticSkipped,
    ];

    /// Key under which the flag is persisted.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::OnboardingSeen => "onboarding_seen",
            Self::IntakeDone => "intake_done",
            Self::DiagnosticDone => "diagnostic_done",
            Self::DiagnosticSkipped => "diagnostic_skipped",
        }
    }
}

/// The four milestone flags. Absent values are `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Milestones {
    pub onboarding_seen: bool,
    pub intake_done: bool,
    pub diagnostic_done: bool,
    pub diagnostic_skipped: bool,
}

impl Milestones {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, milestone: Milestone) -> bool {
        match milestone {
            Milestone::OnboardingSeen => self.onboarding_seen,
            Milestone::IntakeDone => self.intake_done,
            Milestone::DiagnosticDone => self.diagnostic_done,
            Milestone::DiagnosticSkipped => self.diagnostic_skipped,
        }
    }

    /// Raise a flag. Flags never go back to `false`.
    pub fn mark(&mut self, milestone: Milestone) {
        match milestone {
            Milestone::OnboardingSeen => self.onboarding_seen = true,
            Milestone::IntakeDone => self.intake_done = true,
            Milestone::DiagnosticDone => self.diagnostic_done = true,
            Milestone::DiagnosticSkipped => self.diagnostic_skipped = true,
        }
    }

    /// Resolve the stage: the first unmet gate wins.
    #[must_use]
    pub fn resolve(&self) -> Stage {
        if !self.onboarding_seen {
            Stage::Onboarding
        } else if !self.intake_done {
            Stage::Intake
        } else if !(self.diagnostic_done || self.diagnostic_skipped) {
            Stage::Diagnostic
        } else {
            Stage::Main
        }
    }
}

/// Outcome of a finish/skip call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageChange {
    pub milestone: Milestone,
    /// `false` when the flag was already raised.
    pub flag_changed: bool,
    pub previous: Stage,
    pub current: Stage,
}

impl StageChange {
    #[must_use]
    pub fn stage_changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Holds the milestone flags and the stage derived from them.
#[derive(Clone, Debug, Default)]
pub struct FlowSequencer {
    milestones: Milestones,
    stage: Stage,
}

impl FlowSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::from_milestones(Milestones::default())
    }

    /// Rebuild from flags read at startup.
    #[must_use]
    pub fn from_milestones(milestones: Milestones) -> Self {
        Self {
            milestones,
            stage: milestones.resolve(),
        }
    }

    #[must_use]
    pub fn milestones(&self) -> Milestones {
        self.milestones
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn recompute_stage(&mut self) -> Stage {
        self.stage = self.milestones.resolve();
        self.stage
    }

    pub fn finish_onboarding(&mut self) -> StageChange {
        self.apply(Milestone::OnboardingSeen)
    }

    pub fn finish_intake(&mut self) -> StageChange {
        self.apply(Milestone::IntakeDone)
    }

    pub fn finish_diagnostic(&mut self) -> StageChange {
        self.apply(Milestone::DiagnosticDone)
    }

    pub fn skip_diagnostic(&mut self) -> StageChange {
        self.apply(Milestone::DiagnosticSkipped)
    }

    pub fn apply(&mut self, milestone: Milestone) -> StageChange {
        let previous = self.stage;
        let flag_changed = !self.milestones.get(milestone);
        self.milestones.mark(milestone);
        let current = self.recompute_stage();
        StageChange {
            milestone,
            flag_changed,
            previous,
            current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(onb: bool, intake: bool, done: bool, skipped: bool) -> Milestones {
        Milestones {
            onboarding_seen: onb,
            intake_done: intake,
            diagnostic_done: done,
            diagnostic_skipped: skipped,
        }
    }

    #[test]
    fn resolves_all_sixteen_combinations() {
        use Stage::{Diagnostic, Intake, Main, Onboarding};
        // (onboarding_seen, intake_done, diagnostic_done, diagnostic_skipped) -> stage
        let table = [
            ((false, false, false, false), Onboarding),
            ((false, false, false, true), Onboarding),
            ((false, false, true, false), Onboarding),
            ((false, false, true, true), Onboarding),
            ((false, true, false, false), Onboarding),
            ((false, true, false, true), Onboarding),
            ((false, true, true, false), Onboarding),
            ((false, true, true, true), Onboarding),
            ((true, false, false, false), Intake),
            ((true, false, false, true), Intake),
            ((true, false, true, false), Intake),
            ((true, false, true, true), Intake),
            ((true, true, false, false), Diagnostic),
            ((true, true, false, true), Main),
            ((true, true, true, false), Main),
            ((true, true, true, true), Main),
        ];
        assert_eq!(table.len(), 16);
        for ((a, b, c, d), expected) in table {
            let mut seq = FlowSequencer::from_milestones(flags(a, b, c, d));
            assert_eq!(seq.stage(), expected, "flags {a} {b} {c} {d}");
            assert_eq!(seq.recompute_stage(), expected);
            assert_eq!(seq.recompute_stage(), expected);
        }
    }

    #[test]
    fn fresh_state_starts_at_onboarding() {
        let seq = FlowSequencer::new();
        assert_eq!(seq.stage(), Stage::Onboarding);
        assert_eq!(seq.milestones(), Milestones::default());
    }

    #[test]
    fn funnel_walks_through_every_stage() {
        let mut seq = FlowSequencer::new();
        assert_eq!(seq.finish_onboarding().current, Stage::Intake);
        assert_eq!(seq.finish_intake().current, Stage::Diagnostic);
        assert_eq!(seq.skip_diagnostic().current, Stage::Main);
    }

    #[test]
    fn done_and_skipped_together_resolve_to_main() {
        let mut seq = FlowSequencer::from_milestones(flags(true, true, false, true));
        let change = seq.finish_diagnostic();
        assert!(change.flag_changed);
        assert!(!change.stage_changed());
        assert_eq!(seq.stage(), Stage::Main);
    }

    #[test]
    fn finish_onboarding_is_idempotent() {
        let mut once = FlowSequencer::new();
        once.finish_onboarding();

        let mut twice = FlowSequencer::new();
        let first = twice.finish_onboarding();
        let second = twice.finish_onboarding();

        assert!(first.flag_changed);
        assert!(first.stage_changed());
        assert!(!second.flag_changed);
        assert!(!second.stage_changed());
        assert_eq!(once.milestones(), twice.milestones());
        assert_eq!(once.stage(), twice.stage());
    }

    #[test]
    fn repeated_finish_calls_are_idempotent() {
        let mut seq = FlowSequencer::new();
        seq.finish_onboarding();
        seq.finish_intake();
        seq.finish_intake();
        seq.skip_diagnostic();
        seq.skip_diagnostic();
        seq.finish_diagnostic();
        seq.finish_diagnostic();
        assert_eq!(seq.milestones(), flags(true, true, true, true));
        assert_eq!(seq.stage(), Stage::Main);
    }

    #[test]
    fn intake_before_onboarding_still_follows_gates() {
        let mut seq = FlowSequencer::new();
        let change = seq.finish_intake();
        assert_eq!(change.current, Stage::Onboarding);
        assert!(!change.stage_changed());
        assert_eq!(seq.finish_onboarding().current, Stage::Diagnostic);
    }

    #[test]
    fn order_of_finishing_does_not_matter() {
        let ops: [fn(&mut FlowSequencer) -> StageChange; 4] = [
            FlowSequencer::finish_onboarding,
            FlowSequencer::finish_intake,
            FlowSequencer::finish_diagnostic,
            FlowSequencer::skip_diagnostic,
        ];

        // Every subset of operations, every permutation of that subset.
        for mask in 0u8..16 {
            let chosen: Vec<usize> = (0..4).filter(|i| mask & (1 << i) != 0).collect();
            let mut expected = Milestones::default();
            for &i in &chosen {
                expected.mark(Milestone::ALL[i]);
            }
            let canonical = expected.resolve();

            for order in permutations(&chosen) {
                let mut seq = FlowSequencer::new();
                for i in order {
                    ops[i](&mut seq);
                }
                assert_eq!(seq.milestones(), expected);
                assert_eq!(seq.recompute_stage(), canonical);
            }
        }
    }

    fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for (idx, &head) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(idx);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn milestone_keys_are_distinct() {
        let keys: std::collections::HashSet<_> = Milestone::ALL.iter().map(|m| m.key()).collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(Milestone::OnboardingSeen.key(), "onboarding_seen");
    }
}
