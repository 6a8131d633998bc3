//! Victory sequence: win message, experience, then the level-up payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::input::InputKey;
use crate::sequencer::{Sequencer, Step};
use crate::state::LevelUpReport;

/// Phases of the victory sequence, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum VictoryPhase {
    /// "The wild ghost was subdued!"
    Won,
    /// Experience gained.
    Exp,
    /// The level jump, old to new.
    LevelUp,
    /// The new stat block.
    Stats,
    /// Newly learnable moves, announced one per advance.
    NewMoves,
}

/// Drives the end-of-battle victory screen. The whole level-up branch is
/// decided by the report handed in at construction; without one the
/// sequence ends right after the experience phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VictoryPanel {
    /// The party ghost that won.
    pub ghost_name: String,
    /// The wild ghost that went down.
    pub defeated: String,
    pub exp_gained: u32,
    pub level_up: Option<LevelUpReport>,
    seq: Sequencer<VictoryPhase>,
}

impl VictoryPanel {
    pub fn new(
        ghost_name: String,
        defeated: String,
        exp_gained: u32,
        level_up: Option<LevelUpReport>,
    ) -> Self {
        Self {
            ghost_name,
            defeated,
            exp_gained,
            level_up,
            seq: Sequencer::new(VictoryPhase::Won),
        }
    }

    pub fn phase(&self) -> VictoryPhase {
        self.seq.phase()
    }

    /// The move currently being announced, while in the new-moves phase.
    pub fn current_new_move(&self) -> Option<&str> {
        self.level_up
            .as_ref()
            .and_then(|report| report.new_moves.get(self.seq.cue()))
            .map(String::as_str)
    }

    /// Confirm advances the sequence; every other key is inert.
    pub fn handle(&mut self, key: InputKey) -> Option<Effect> {
        if key != InputKey::Confirm {
            return None;
        }
        self.advance()
    }

    /// A pointer press anywhere on the card is the same advance trigger.
    pub fn activate(&mut self) -> Option<Effect> {
        self.advance()
    }

    fn advance(&mut self) -> Option<Effect> {
        let leveled = self.level_up.is_some();
        let new_moves = self
            .level_up
            .as_ref()
            .map(|report| report.new_moves.len())
            .unwrap_or(0);
        let done = self.seq.advance(|phase, cue| match phase {
            VictoryPhase::Won => Step::Next(VictoryPhase::Exp),
            VictoryPhase::Exp if leveled => Step::Next(VictoryPhase::LevelUp),
            VictoryPhase::Exp => Step::Finish,
            VictoryPhase::LevelUp => Step::Next(VictoryPhase::Stats),
            VictoryPhase::Stats if new_moves > 0 => Step::Next(VictoryPhase::NewMoves),
            VictoryPhase::Stats => Step::Finish,
            VictoryPhase::NewMoves if cue + 1 < new_moves => Step::Cue,
            VictoryPhase::NewMoves => Step::Finish,
        });
        done.then_some(Effect::BattleContinue)
    }
}
