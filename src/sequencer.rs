//! Generic forward-only phase engine behind the victory/defeat screens.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One advance step, decided by a panel's plan.
///
/// Plans fork only on data fixed at construction, so a branch decision is
/// made once, at the moment the preceding phase is left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<P> {
    /// Enter the next phase; the in-phase cue resets.
    Next(P),
    /// Stay in this phase and move the cue to the next element.
    Cue,
    /// The sequence is complete.
    Finish,
}

/// Phase holder for a linear, mostly-forward progression.
///
/// `cue` is the element index for phases that walk a sub-list one item per
/// trigger; it only ever increases within a phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Sequencer<P> {
    phase: P,
    cue: usize,
}

impl<P: Copy> Sequencer<P> {
    pub fn new(initial: P) -> Self {
        Self {
            phase: initial,
            cue: 0,
        }
    }

    pub fn phase(&self) -> P {
        self.phase
    }

    pub fn cue(&self) -> usize {
        self.cue
    }

    /// Advance one step through `plan`. Returns `true` when the plan
    /// finished; the caller turns that into its terminal outcome.
    pub fn advance(&mut self, plan: impl FnOnce(P, usize) -> Step<P>) -> bool {
        match plan(self.phase, self.cue) {
            Step::Next(next) => {
                self.phase = next;
                self.cue = 0;
                false
            }
            Step::Cue => {
                self.cue += 1;
                false
            }
            Step::Finish => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Demo {
        First,
        Second,
    }

    fn plan(items: usize) -> impl Fn(Demo, usize) -> Step<Demo> {
        move |phase, cue| match phase {
            Demo::First => Step::Next(Demo::Second),
            Demo::Second if cue + 1 < items => Step::Cue,
            Demo::Second => Step::Finish,
        }
    }

    #[test]
    fn walks_phases_then_finishes() {
        let mut seq = Sequencer::new(Demo::First);
        assert!(!seq.advance(plan(1)));
        assert_eq!(seq.phase(), Demo::Second);
        assert!(seq.advance(plan(1)));
    }

    #[test]
    fn cue_steps_through_a_sub_list() {
        let mut seq = Sequencer::new(Demo::Second);
        assert!(!seq.advance(plan(3)));
        assert_eq!(seq.cue(), 1);
        assert!(!seq.advance(plan(3)));
        assert_eq!(seq.cue(), 2);
        assert!(seq.advance(plan(3)));
        assert_eq!(seq.cue(), 2);
    }

    #[test]
    fn cue_resets_on_phase_change() {
        let mut seq = Sequencer::new(Demo::First);
        seq.advance(plan(3));
        assert_eq!(seq.cue(), 0);
    }
}
