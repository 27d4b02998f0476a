// SPDX-License-Identifier: MPL-2.0
//! Close vote across the shell's collaborators.

/// Answer of a collaborator asked whether the window may close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Allow,
    Veto,
}

/// A collaborator that gets a say before the main window closes.
pub trait CloseGuard {
    /// Name used in logs when the guard vetoes.
    fn name(&self) -> &str;

    /// Asked once per close attempt.
    fn may_close(&mut self) -> CloseDecision;
}

/// Aggregated result of a close vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Every guard allowed the close.
    Proceed,
    /// At least one guard vetoed; lists the vetoing guards in asking order.
    Vetoed(Vec<String>),
}

impl CloseOutcome {
    #[must_use]
    pub fn is_vetoed(&self) -> bool {
        matches!(self, CloseOutcome::Vetoed(_))
    }
}

/// Asks every guard, then combines the answers. A single veto blocks the
/// close; every guard is still asked.
pub fn vote<'a, I>(guards: I) -> CloseOutcome
where
    I: IntoIterator<Item = &'a mut dyn CloseGuard>,
{
    let vetoes: Vec<String> = guards
        .into_iter()
        .filter_map(|guard| match guard.may_close() {
            CloseDecision::Allow => None,
            CloseDecision::Veto => Some(guard.name().to_string()),
        })
        .collect();

    if vetoes.is_empty() {
        CloseOutcome::Proceed
    } else {
        CloseOutcome::Vetoed(vetoes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        name: &'static str,
        decision: CloseDecision,
        asked: usize,
    }

    impl CloseGuard for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn may_close(&mut self) -> CloseDecision {
            self.asked += 1;
            self.decision
        }
    }

    #[test]
    fn no_guards_means_proceed() {
        assert_eq!(vote(std::iter::empty()), CloseOutcome::Proceed);
    }

    #[test]
    fn every_guard_is_asked_even_after_a_veto() {
        let mut first = Recorder {
            name: "first",
            decision: CloseDecision::Veto,
            asked: 0,
        };
        let mut second = Recorder {
            name: "second",
            decision: CloseDecision::Allow,
            asked: 0,
        };

        let outcome = vote([
            &mut first as &mut dyn CloseGuard,
            &mut second as &mut dyn CloseGuard,
        ]);

        assert_eq!(outcome, CloseOutcome::Vetoed(vec!["first".to_string()]));
        assert_eq!(first.asked, 1);
        assert_eq!(second.asked, 1);
    }
}
