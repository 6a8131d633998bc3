//! Defeat sequence: the faint message, then the trip back to safety.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::input::InputKey;
use crate::sequencer::{Sequencer, Step};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DefeatPhase {
    /// "Your ghost dispersed!"
    Fainted,
    /// The party is restored off-screen.
    Recovery,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DefeatPanel {
    /// The party ghost that dispersed.
    pub ghost_name: String,
    seq: Sequencer<DefeatPhase>,
}

impl DefeatPanel {
    pub fn new(ghost_name: String) -> Self {
        Self {
            ghost_name,
            seq: Sequencer::new(DefeatPhase::Fainted),
        }
    }

    pub fn phase(&self) -> DefeatPhase {
        self.seq.phase()
    }

    pub fn handle(&mut self, key: InputKey) -> Option<Effect> {
        if key != InputKey::Confirm {
            return None;
        }
        self.advance()
    }

    pub fn activate(&mut self) -> Option<Effect> {
        self.advance()
    }

    fn advance(&mut self) -> Option<Effect> {
        let done = self.seq.advance(|phase, _| match phase {
            DefeatPhase::Fainted => Step::Next(DefeatPhase::Recovery),
            DefeatPhase::Recovery => Step::Finish,
        });
        done.then_some(Effect::BattleContinue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_advances_then_terminal() {
        let mut panel = DefeatPanel::new("Willow".into());
        assert_eq!(panel.phase(), DefeatPhase::Fainted);
        assert_eq!(panel.handle(InputKey::Confirm), None);
        assert_eq!(panel.phase(), DefeatPhase::Recovery);
        assert_eq!(panel.handle(InputKey::Confirm), Some(Effect::BattleContinue));
    }

    #[test]
    fn cancel_does_not_regress() {
        let mut panel = DefeatPanel::new("Willow".into());
        panel.handle(InputKey::Confirm);
        assert_eq!(panel.handle(InputKey::Cancel), None);
        assert_eq!(panel.phase(), DefeatPhase::Recovery);
    }
}
