//! Capture flow: trap selection, then placement of the captured ghost.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cursor::{Pick, SelectCursor};
use crate::effect::Effect;
use crate::input::InputKey;
use crate::state::{GhostInfo, ItemStack, PanelConfig, PartyMember};

/// Trap list shown when the player tries a capture. Out-of-stock traps stay
/// visible but cannot be confirmed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CaptureItemPanel {
    pub items: Vec<ItemStack>,
    cursor: SelectCursor,
}

impl CaptureItemPanel {
    pub fn new(items: Vec<ItemStack>, initial: usize) -> Self {
        let cursor = SelectCursor::with_back(items.len(), initial);
        Self { items, cursor }
    }

    pub fn cursor(&self) -> SelectCursor {
        self.cursor
    }

    pub fn is_enabled(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|stack| stack.qty > 0)
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
            Pick::Entry(index) => Some(Effect::UseCaptureItem {
                kind: self.items[index].kind,
            }),
        }
    }
}

/// Modes of the capture-success screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CaptureMode {
    /// Room in the party: a single confirm keeps the ghost.
    Success,
    /// Party full: choose between the box and a swap.
    Choice,
    /// Pick the party member the captured ghost replaces.
    Swap,
}

/// Row labels of the choice mode, in cursor order.
pub const CHOICE_LABELS: [&str; 2] = ["Send to the box", "Swap with a party member"];

/// Placement screen after a successful capture. Starts in `Choice` when the
/// party is already at its configured limit, otherwise in `Success`; the
/// captured ghost context is kept across the mode switches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CaptureSuccessPanel {
    pub ghost: GhostInfo,
    pub party: Vec<PartyMember>,
    mode: CaptureMode,
    choice: SelectCursor,
    swap: SelectCursor,
}

impl CaptureSuccessPanel {
    pub fn new(ghost: GhostInfo, party: Vec<PartyMember>, config: &PanelConfig) -> Self {
        let mode = if party.len() >= config.party_limit {
            CaptureMode::Choice
        } else {
            CaptureMode::Success
        };
        Self {
            swap: SelectCursor::with_back(party.len(), 0),
            choice: SelectCursor::bare(CHOICE_LABELS.len(), 0),
            ghost,
            party,
            mode,
        }
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    pub fn choice_cursor(&self) -> SelectCursor {
        self.choice
    }

    pub fn swap_cursor(&self) -> SelectCursor {
        self.swap
    }

    pub fn handle(&mut self, key: InputKey) -> Option<Effect> {
        match self.mode {
            CaptureMode::Success => match key {
                InputKey::Confirm => Some(Effect::AddToParty),
                _ => None,
            },
            CaptureMode::Choice => match key {
                InputKey::Up => {
                    self.choice.up();
                    None
                }
                InputKey::Down => {
                    self.choice.down();
                    None
                }
                InputKey::Confirm => self.confirm_choice(),
                InputKey::Cancel => None,
            },
            CaptureMode::Swap => match key {
                InputKey::Up => {
                    self.swap.up();
                    None
                }
                InputKey::Down => {
                    self.swap.down();
                    None
                }
                InputKey::Confirm => self.confirm_swap(),
                InputKey::Cancel => {
                    self.leave_swap();
                    None
                }
            },
        }
    }

    pub fn activate(&mut self, index: usize) -> Option<Effect> {
        match self.mode {
            CaptureMode::Success => Some(Effect::AddToParty),
            CaptureMode::Choice => {
                if index >= self.choice.len() {
                    return None;
                }
                self.choice.set(index);
                self.confirm_choice()
            }
            CaptureMode::Swap => {
                if index >= self.swap.len() {
                    return None;
                }
                self.swap.set(index);
                self.confirm_swap()
            }
        }
    }

    fn confirm_choice(&mut self) -> Option<Effect> {
        match self.choice.index() {
            0 => Some(Effect::SendToBox),
            _ => {
                self.mode = CaptureMode::Swap;
                self.swap = SelectCursor::with_back(self.party.len(), 0);
                None
            }
        }
    }

    fn confirm_swap(&mut self) -> Option<Effect> {
        match self.swap.pick(|_| true)? {
            Pick::Back => {
                self.leave_swap();
                None
            }
            Pick::Entry(index) => Some(Effect::SwapIntoParty { index }),
        }
    }

    fn leave_swap(&mut self) {
        self.mode = CaptureMode::Choice;
        self.choice = SelectCursor::bare(CHOICE_LABELS.len(), 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario;

    fn full_party(config: &PanelConfig) -> Vec<PartyMember> {
        let mut party = scenario::starter_party();
        while party.len() < config.party_limit {
            let mut extra = party[0].clone();
            extra.info.name = format!("Echo {}", party.len());
            party.push(extra);
        }
        party
    }

    #[test]
    fn starts_in_success_with_room() {
        let config = PanelConfig::default();
        let panel =
            CaptureSuccessPanel::new(scenario::wild_ghost(), scenario::starter_party(), &config);
        assert_eq!(panel.mode(), CaptureMode::Success);
    }

    #[test]
    fn starts_in_choice_at_capacity() {
        let config = PanelConfig::default();
        let panel =
            CaptureSuccessPanel::new(scenario::wild_ghost(), full_party(&config), &config);
        assert_eq!(panel.mode(), CaptureMode::Choice);
        assert_eq!(panel.choice_cursor().index(), 0);
    }

    #[test]
    fn swap_cancel_returns_to_choice_reset() {
        let config = PanelConfig::default();
        let mut panel =
            CaptureSuccessPanel::new(scenario::wild_ghost(), full_party(&config), &config);
        panel.handle(InputKey::Down);
        assert_eq!(panel.handle(InputKey::Confirm), None);
        assert_eq!(panel.mode(), CaptureMode::Swap);

        panel.handle(InputKey::Down);
        panel.handle(InputKey::Down);
        assert_eq!(panel.handle(InputKey::Cancel), None);
        assert_eq!(panel.mode(), CaptureMode::Choice);
        assert_eq!(panel.choice_cursor().index(), 0);
    }

    #[test]
    fn swap_back_slot_matches_cancel_key() {
        let config = PanelConfig::default();
        let mut panel =
            CaptureSuccessPanel::new(scenario::wild_ghost(), full_party(&config), &config);
        panel.handle(InputKey::Down);
        panel.handle(InputKey::Confirm);
        panel.handle(InputKey::Up); // wrap straight to the back slot
        assert_eq!(panel.handle(InputKey::Confirm), None);
        assert_eq!(panel.mode(), CaptureMode::Choice);
    }

    #[test]
    fn swap_selection_carries_the_index() {
        let config = PanelConfig::default();
        let mut panel =
            CaptureSuccessPanel::new(scenario::wild_ghost(), full_party(&config), &config);
        panel.handle(InputKey::Down);
        panel.handle(InputKey::Confirm);
        panel.handle(InputKey::Down);
        panel.handle(InputKey::Down);
        assert_eq!(
            panel.handle(InputKey::Confirm),
            Some(Effect::SwapIntoParty { index: 2 })
        );
    }

    #[test]
    fn success_mode_has_single_action() {
        let config = PanelConfig::default();
        let mut panel =
            CaptureSuccessPanel::new(scenario::wild_ghost(), scenario::starter_party(), &config);
        assert_eq!(panel.handle(InputKey::Down), None);
        assert_eq!(panel.handle(InputKey::Cancel), None);
        assert_eq!(panel.handle(InputKey::Confirm), Some(Effect::AddToParty));
    }
}
