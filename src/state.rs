//! Application state: descriptor records, the mounted panel, and the demo
//! roster the gallery scenarios draw from.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

use crate::cursor::SelectCursor;
use crate::input::TokenGate;
use crate::panel::PanelState;
use crate::scenario::{self, Demo};

/// Categorical type tag for a ghost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GhostKind {
    Wisp,
    Shade,
    Phantom,
    Poltergeist,
    Banshee,
}

impl GhostKind {
    pub fn label(self) -> &'static str {
        match self {
            GhostKind::Wisp => "Wisp",
            GhostKind::Shade => "Shade",
            GhostKind::Phantom => "Phantom",
            GhostKind::Poltergeist => "Poltergeist",
            GhostKind::Banshee => "Banshee",
        }
    }
}

/// Species record for a ghost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GhostInfo {
    pub name: String,
    pub kind: GhostKind,
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
}

/// A ghost in the tamer's party.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PartyMember {
    pub info: GhostInfo,
    pub level: u8,
    pub hp: u16,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

impl PartyMember {
    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }
}

/// Trap items thrown to capture wild ghosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TrapKind {
    WispJar,
    CharmLantern,
    SpiritSnare,
}

impl TrapKind {
    pub fn label(self) -> &'static str {
        match self {
            TrapKind::WispJar => "Wisp Jar",
            TrapKind::CharmLantern => "Charm Lantern",
            TrapKind::SpiritSnare => "Spirit Snare",
        }
    }
}

/// Owned quantity of one trap kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ItemStack {
    pub kind: TrapKind,
    pub qty: u16,
}

/// A learned move with its remaining uses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MoveSlot {
    pub id: String,
    pub uses: u16,
    pub uses_max: u16,
}

/// Display record for a move, resolved through the move lookup. A slot whose
/// id has no entry here is left out of the rendered list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MoveInfo {
    pub name: String,
    pub power: u16,
    pub kind: GhostKind,
    pub uses_max: u16,
}

/// Stat block reported by a level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
}

/// Everything a single battle's level-up produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LevelUpReport {
    pub previous_level: u8,
    pub level: u8,
    pub stats: StatBlock,
    /// Identities of moves that became learnable, in announcement order.
    pub new_moves: Vec<String>,
}

/// Limits the panels treat as configuration rather than embedded literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PanelConfig {
    pub party_limit: usize,
    pub move_slot_limit: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            party_limit: 6,
            move_slot_limit: 4,
        }
    }
}

/// Application state. The gallery menu is active whenever `panel` is empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    pub terminal_size: (u16, u16),
    pub config: PanelConfig,
    pub gallery: SelectCursor,
    pub panel: Option<PanelState>,
    /// Gate for the virtualized keyboard channel.
    pub gate: TokenGate,
    pub party: Vec<PartyMember>,
    pub active_index: usize,
    pub bag: Vec<ItemStack>,
    pub movedex: HashMap<String, MoveInfo>,
    pub wild: GhostInfo,
    /// Outcome log, newest entry last.
    pub log: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl AppState {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            terminal_size: (80, 24),
            config,
            gallery: SelectCursor::bare(Demo::ALL.len(), 0),
            panel: None,
            gate: TokenGate::new(),
            party: scenario::starter_party(),
            active_index: 0,
            bag: scenario::starter_bag(),
            movedex: scenario::movedex(),
            wild: scenario::wild_ghost(),
            log: Vec::new(),
        }
    }

    pub fn active_member(&self) -> Option<&PartyMember> {
        self.party.get(self.active_index)
    }

    pub fn active_member_mut(&mut self) -> Option<&mut PartyMember> {
        self.party.get_mut(self.active_index)
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        let mut sections = vec![
            DebugSection::new("Screen")
                .entry("panel", ron_string(&self.panel.as_ref().map(PanelState::label)))
                .entry("gallery_index", ron_string(&self.gallery.index())),
            DebugSection::new("Roster")
                .entry("party", ron_string(&self.party.len()))
                .entry("active", ron_string(&self.active_index))
                .entry("bag", ron_string(&self.bag.len())),
        ];

        if let Some(line) = self.log.last() {
            sections.push(DebugSection::new("Log").entry("last", ron_string(line)));
        }

        sections
    }
}
