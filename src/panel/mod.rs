//! Battle-resolution panel state machines.
//!
//! Each panel is constructed fresh for one battle event, consumes canonical
//! inputs one at a time, and emits at most one outcome signal per confirm.
//! Panels never talk to each other; mounting and replacing them is the
//! host's job.

pub mod capture;
pub mod defeat;
pub mod moves;
pub mod swap;
pub mod victory;

pub use capture::{CaptureItemPanel, CaptureMode, CaptureSuccessPanel};
pub use defeat::{DefeatPanel, DefeatPhase};
pub use moves::{LearnStage, MoveLearnPanel, MoveSelectPanel};
pub use swap::GhostSwapPanel;
pub use victory::{VictoryPanel, VictoryPhase};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::input::InputKey;

/// The mounted battle-resolution panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum PanelState {
    Victory(VictoryPanel),
    Defeat(DefeatPanel),
    CaptureItem(CaptureItemPanel),
    CaptureSuccess(CaptureSuccessPanel),
    GhostSwap(GhostSwapPanel),
    MoveSelect(MoveSelectPanel),
    MoveLearn(MoveLearnPanel),
}

impl PanelState {
    pub fn label(&self) -> &'static str {
        match self {
            PanelState::Victory(_) => "victory",
            PanelState::Defeat(_) => "defeat",
            PanelState::CaptureItem(_) => "capture_item",
            PanelState::CaptureSuccess(_) => "capture_success",
            PanelState::GhostSwap(_) => "ghost_swap",
            PanelState::MoveSelect(_) => "move_select",
            PanelState::MoveLearn(_) => "move_learn",
        }
    }

    /// Route one canonical input into the mounted panel.
    pub fn handle(&mut self, key: InputKey) -> Option<Effect> {
        match self {
            PanelState::Victory(panel) => panel.handle(key),
            PanelState::Defeat(panel) => panel.handle(key),
            PanelState::CaptureItem(panel) => panel.handle(key),
            PanelState::CaptureSuccess(panel) => panel.handle(key),
            PanelState::GhostSwap(panel) => panel.handle(key),
            PanelState::MoveSelect(panel) => panel.handle(key),
            PanelState::MoveLearn(panel) => panel.handle(key),
        }
    }

    /// Pointer activation. List rows behave as "move there, then confirm";
    /// the sequencer cards treat any press as their advance trigger.
    pub fn activate(&mut self, index: usize) -> Option<Effect> {
        match self {
            PanelState::Victory(panel) => panel.activate(),
            PanelState::Defeat(panel) => panel.activate(),
            PanelState::CaptureItem(panel) => panel.activate(index),
            PanelState::CaptureSuccess(panel) => panel.activate(index),
            PanelState::GhostSwap(panel) => panel.activate(index),
            PanelState::MoveSelect(panel) => panel.activate(index),
            PanelState::MoveLearn(panel) => panel.activate(index),
        }
    }
}
