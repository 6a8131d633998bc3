//! Outcome signals the panels emit.
//!
//! A panel produces at most one of these per confirm; once the host has seen
//! one, that panel has done its job and gets replaced or unmounted.

use crate::state::TrapKind;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// A victory or defeat sequence ran to completion.
    BattleContinue,
    /// A list panel was dismissed without a selection.
    PanelBack,
    /// Throw this trap at the wild ghost.
    UseCaptureItem { kind: TrapKind },
    /// Fight with this move.
    ChooseMove { id: String },
    /// Send out the party member at this index.
    SwapActive { index: usize },
    /// Keep the captured ghost in the party.
    AddToParty,
    /// Store the captured ghost in the box.
    SendToBox,
    /// The captured ghost takes the place of the party member at this index.
    SwapIntoParty { index: usize },
    /// Place the offered move at `slot`; `None` declines the learn.
    LearnMove { slot: Option<usize> },
}
