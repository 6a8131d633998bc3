//! Party swap list: pick the ghost to send out next.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cursor::{Pick, SelectCursor};
use crate::effect::Effect;
use crate::input::InputKey;
use crate::state::PartyMember;

/// The in-battle switch list. The active combatant and fainted members are
/// listed but cannot be confirmed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GhostSwapPanel {
    pub party: Vec<PartyMember>,
    pub active: usize,
    cursor: SelectCursor,
}

impl GhostSwapPanel {
    pub fn new(party: Vec<PartyMember>, active: usize, initial: usize) -> Self {
        let cursor = SelectCursor::with_back(party.len(), initial);
        Self {
            party,
            active,
            cursor,
        }
    }

    pub fn cursor(&self) -> SelectCursor {
        self.cursor
    }

    pub fn is_enabled(&self, index: usize) -> bool {
        index != self.active
            && self
                .party
                .get(index)
                .is_some_and(|member| !member.is_fainted())
    }

    pub fn handle(&mut self, key: InputKey) -> Option<Effect> {
        match key {
            InputKey::Up => {
                self.cursor.up();
                None
            }
            InputKey::Down => {
                self.cursor.down();
                None
            }
            InputKey::Confirm => self.confirm(),
            InputKey::Cancel => Some(Effect::PanelBack),
        }
    }

    pub fn activate(&mut self, index: usize) -> Option<Effect> {
        if index >= self.cursor.len() {
            return None;
        }
        self.cursor.set(index);
        self.confirm()
    }

    fn confirm(&self) -> Option<Effect> {
        match self.cursor.pick(|index| self.is_enabled(index))? {
            Pick::Back => Some(Effect::PanelBack),
            Pick::Entry(index) => Some(Effect::SwapActive { index }),
        }
    }
}
