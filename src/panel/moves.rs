//! Move screens: the in-battle move list and the learn/replace dialog.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cursor::{Pick, SelectCursor};
use crate::effect::Effect;
use crate::input::InputKey;
use crate::state::{MoveSlot, PanelConfig};

/// The fight menu's move list. A move with no uses left stays visible but
/// cannot be confirmed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MoveSelectPanel {
    pub moves: Vec<MoveSlot>,
    cursor: SelectCursor,
}

impl MoveSelectPanel {
    pub fn new(moves: Vec<MoveSlot>, initial: usize) -> Self {
        let cursor = SelectCursor::with_back(moves.len(), initial);
        Self { moves, cursor }
    }

    pub fn cursor(&self) -> SelectCursor {
        self.cursor
    }

    pub fn is_enabled(&self, index: usize) -> bool {
        self.moves.get(index).is_some_and(|slot| slot.uses > 0)
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
            Pick::Entry(index) => Some(Effect::ChooseMove {
                id: self.moves[index].id.clone(),
            }),
        }
    }
}

/// Stages of the learn dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LearnStage {
    /// Binary learn-or-decline question.
    Confirm,
    /// Pick the known move to forget, or give up.
    Replace,
}

/// Row labels of the confirm stage, in cursor order.
pub const LEARN_LABELS: [&str; 2] = ["Learn it", "Skip this move"];

/// Two-stage move-learn dialog. With a free slot the learn confirms
/// straight to an append; with a full moveset it detours through the
/// replacement list. Declining anywhere emits the same empty-slot outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MoveLearnPanel {
    /// The ghost that is being offered the move.
    pub ghost_name: String,
    /// Identity of the offered move.
    pub incoming: String,
    pub known: Vec<MoveSlot>,
    pub slot_limit: usize,
    stage: LearnStage,
    confirm: SelectCursor,
    replace: SelectCursor,
}

impl MoveLearnPanel {
    pub fn new(
        ghost_name: String,
        incoming: String,
        known: Vec<MoveSlot>,
        config: &PanelConfig,
    ) -> Self {
        Self {
            confirm: SelectCursor::bare(LEARN_LABELS.len(), 0),
            replace: SelectCursor::with_back(known.len(), 0),
            ghost_name,
            incoming,
            known,
            slot_limit: config.move_slot_limit,
            stage: LearnStage::Confirm,
        }
    }

    pub fn stage(&self) -> LearnStage {
        self.stage
    }

    pub fn confirm_cursor(&self) -> SelectCursor {
        self.confirm
    }

    pub fn replace_cursor(&self) -> SelectCursor {
        self.replace
    }

    pub fn handle(&mut self, key: InputKey) -> Option<Effect> {
        match self.stage {
            LearnStage::Confirm => match key {
                InputKey::Up => {
                    self.confirm.up();
                    None
                }
                InputKey::Down => {
                    self.confirm.down();
                    None
                }
                InputKey::Confirm => self.resolve_confirm(),
                InputKey::Cancel => None,
            },
            LearnStage::Replace => match key {
                InputKey::Up => {
                    self.replace.up();
                    None
                }
                InputKey::Down => {
                    self.replace.down();
                    None
                }
                InputKey::Confirm => self.resolve_replace(),
                InputKey::Cancel => {
                    self.leave_replace();
                    None
                }
            },
        }
    }

    pub fn activate(&mut self, index: usize) -> Option<Effect> {
        match self.stage {
            LearnStage::Confirm => {
                if index >= self.confirm.len() {
                    return None;
                }
                self.confirm.set(index);
                self.resolve_confirm()
            }
            LearnStage::Replace => {
                if index >= self.replace.len() {
                    return None;
                }
                self.replace.set(index);
                self.resolve_replace()
            }
        }
    }

    fn resolve_confirm(&mut self) -> Option<Effect> {
        if self.confirm.index() != 0 {
            return Some(Effect::LearnMove { slot: None });
        }
        if self.known.len() < self.slot_limit {
            // Free slot: the move appends at the next open index.
            return Some(Effect::LearnMove {
                slot: Some(self.known.len()),
            });
        }
        self.stage = LearnStage::Replace;
        self.replace = SelectCursor::with_back(self.known.len(), 0);
        None
    }

    fn resolve_replace(&mut self) -> Option<Effect> {
        match self.replace.pick(|_| true)? {
            Pick::Back => Some(Effect::LearnMove { slot: None }),
            Pick::Entry(index) => Some(Effect::LearnMove { slot: Some(index) }),
        }
    }

    fn leave_replace(&mut self) {
        self.stage = LearnStage::Confirm;
        self.confirm = SelectCursor::bare(LEARN_LABELS.len(), 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(ids: &[&str]) -> Vec<MoveSlot> {
        ids.iter()
            .map(|id| MoveSlot {
                id: id.to_string(),
                uses: 5,
                uses_max: 10,
            })
            .collect()
    }

    fn config() -> PanelConfig {
        PanelConfig::default()
    }

    #[test]
    fn free_slot_appends_immediately() {
        let mut panel = MoveLearnPanel::new(
            "Willow".into(),
            "possess".into(),
            slots(&["ember-gaze", "chill-touch"]),
            &config(),
        );
        assert_eq!(
            panel.handle(InputKey::Confirm),
            Some(Effect::LearnMove { slot: Some(2) })
        );
    }

    #[test]
    fn full_moveset_detours_through_replace() {
        let mut panel = MoveLearnPanel::new(
            "Willow".into(),
            "possess".into(),
            slots(&["ember-gaze", "chill-touch", "wail", "haunt"]),
            &config(),
        );
        assert_eq!(panel.handle(InputKey::Confirm), None);
        assert_eq!(panel.stage(), LearnStage::Replace);
        panel.handle(InputKey::Down);
        assert_eq!(
            panel.handle(InputKey::Confirm),
            Some(Effect::LearnMove { slot: Some(1) })
        );
    }

    #[test]
    fn decline_is_identical_from_both_stages() {
        let known = slots(&["ember-gaze", "chill-touch", "wail", "haunt"]);
        let mut first = MoveLearnPanel::new("Willow".into(), "possess".into(), known.clone(), &config());
        first.handle(InputKey::Down);
        let from_confirm = first.handle(InputKey::Confirm);

        let mut second = MoveLearnPanel::new("Willow".into(), "possess".into(), known, &config());
        second.handle(InputKey::Confirm); // into the replacement list
        second.handle(InputKey::Up); // wrap to the give-up row
        let from_replace = second.handle(InputKey::Confirm);

        assert_eq!(from_confirm, Some(Effect::LearnMove { slot: None }));
        assert_eq!(from_confirm, from_replace);
    }

    #[test]
    fn replace_cancel_returns_to_learn_option() {
        let mut panel = MoveLearnPanel::new(
            "Willow".into(),
            "possess".into(),
            slots(&["ember-gaze", "chill-touch", "wail", "haunt"]),
            &config(),
        );
        panel.handle(InputKey::Confirm);
        panel.handle(InputKey::Down);
        assert_eq!(panel.handle(InputKey::Cancel), None);
        assert_eq!(panel.stage(), LearnStage::Confirm);
        assert_eq!(panel.confirm_cursor().index(), 0);
    }
}
