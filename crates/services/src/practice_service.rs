use rand::seq::SliceRandom;
use rand::{Rng, rng};
use sprint_core::model::PracticeSessionConfig;
use sprint_core::session::{DEMO_BANK, PracticeSession};
use tracing::debug;

/// Starts practice sessions, shuffling the question bank when asked to.
#[derive(Clone, Copy, Debug, Default)]
pub struct PracticeService;

impl PracticeService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn start(&self, config: PracticeSessionConfig) -> PracticeSession {
        self.start_with_rng(config, &mut rng())
    }

    /// Same as [`PracticeService::start`] with a caller-supplied RNG.
    #[must_use]
    pub fn start_with_rng<R: Rng + ?Sized>(
        &self,
        config: PracticeSessionConfig,
        rng: &mut R,
    ) -> PracticeSession {
        let mut order: Vec<usize> = (0..DEMO_BANK.len()).collect();
        if config.shuffle {
            order.shuffle(rng);
        }
        debug!(
            title = %config.title,
            questions = config.question_count,
            timed = config.time_limit_secs.is_some(),
            "starting practice session"
        );
        PracticeSession::with_bank_order(config, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sprint_core::model::PracticeTopic;

    #[test]
    fn unshuffled_session_keeps_bank_order() {
        let mut config = PracticeSessionConfig::topic_drill(PracticeTopic::Algebra, 5);
        config.shuffle = false;
        let session = PracticeService::new().start(config);
        assert_eq!(session.question().prompt, DEMO_BANK[0].prompt);
        assert_eq!(session.total(), 5);
        assert_eq!(session.time_remaining(), None);
    }

    #[test]
    fn shuffled_session_uses_every_bank_question() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = PracticeService::new()
            .start_with_rng(PracticeSessionConfig::diagnostic(), &mut rng);
        assert_eq!(session.total(), 8);
        assert_eq!(session.time_remaining(), Some(480));

        let mut prompts = Vec::new();
        for _ in 0..DEMO_BANK.len() {
            prompts.push(session.question().prompt);
            session.next_or_finish();
        }
        prompts.sort_unstable();
        let mut expected: Vec<_> = DEMO_BANK.iter().map(|q| q.prompt).collect();
        expected.sort_unstable();
        assert_eq!(prompts, expected);
    }
}
