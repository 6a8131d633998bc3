//! Gallery scenarios and the fixture roster behind them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::panel::{
    CaptureItemPanel, CaptureSuccessPanel, DefeatPanel, GhostSwapPanel, MoveLearnPanel,
    MoveSelectPanel, PanelState, VictoryPanel,
};
use crate::state::{
    AppState, GhostInfo, GhostKind, ItemStack, LevelUpReport, MoveInfo, MoveSlot, PartyMember,
    StatBlock, TrapKind,
};

/// One gallery entry: a battle event to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Demo {
    Victory,
    Defeat,
    Capture,
    CaptureFullParty,
    GhostSwap,
    MoveSelect,
    MoveLearn,
}

impl Demo {
    pub const ALL: [Demo; 7] = [
        Demo::Victory,
        Demo::Defeat,
        Demo::Capture,
        Demo::CaptureFullParty,
        Demo::GhostSwap,
        Demo::MoveSelect,
        Demo::MoveLearn,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Demo::Victory => "Victory (level up)",
            Demo::Defeat => "Defeat",
            Demo::Capture => "Wild capture",
            Demo::CaptureFullParty => "Capture with a full party",
            Demo::GhostSwap => "Switch ghosts",
            Demo::MoveSelect => "Pick a move",
            Demo::MoveLearn => "Learn a move",
        }
    }

    /// Build the panel for this entry from the current roster.
    pub fn build(self, state: &AppState) -> PanelState {
        let active_name = state
            .active_member()
            .map(|member| member.info.name.clone())
            .unwrap_or_else(|| "Willow".to_string());
        match self {
            Demo::Victory => {
                let level = state.active_member().map(|member| member.level).unwrap_or(12);
                PanelState::Victory(VictoryPanel::new(
                    active_name,
                    state.wild.name.clone(),
                    84,
                    Some(LevelUpReport {
                        previous_level: level,
                        level: level.saturating_add(1),
                        stats: StatBlock {
                            hp: 41,
                            attack: 23,
                            defense: 19,
                            speed: 28,
                        },
                        new_moves: vec!["haunt".to_string(), "grave-chill".to_string()],
                    }),
                ))
            }
            Demo::Defeat => PanelState::Defeat(DefeatPanel::new(active_name)),
            Demo::Capture => {
                PanelState::CaptureItem(CaptureItemPanel::new(state.bag.clone(), 0))
            }
            Demo::CaptureFullParty => PanelState::CaptureSuccess(CaptureSuccessPanel::new(
                state.wild.clone(),
                capacity_party(state.config.party_limit),
                &state.config,
            )),
            Demo::GhostSwap => PanelState::GhostSwap(GhostSwapPanel::new(
                state.party.clone(),
                state.active_index,
                0,
            )),
            Demo::MoveSelect => {
                let moves = state
                    .active_member()
                    .map(|member| member.moves.clone())
                    .unwrap_or_default();
                PanelState::MoveSelect(MoveSelectPanel::new(moves, 0))
            }
            Demo::MoveLearn => {
                let known = state
                    .active_member()
                    .map(|member| member.moves.clone())
                    .unwrap_or_default();
                PanelState::MoveLearn(MoveLearnPanel::new(
                    active_name,
                    "possess".to_string(),
                    known,
                    &state.config,
                ))
            }
        }
    }
}

fn ghost(name: &str, kind: GhostKind, hp: u16, attack: u16, defense: u16, speed: u16) -> GhostInfo {
    GhostInfo {
        name: name.to_string(),
        kind,
        hp,
        attack,
        defense,
        speed,
    }
}

fn slot(id: &str, uses: u16, uses_max: u16) -> MoveSlot {
    MoveSlot {
        id: id.to_string(),
        uses,
        uses_max,
    }
}

/// Three tamed ghosts; the last one is down so the swap list has a
/// disabled row to show off.
pub fn starter_party() -> Vec<PartyMember> {
    vec![
        PartyMember {
            info: ghost("Willow", GhostKind::Wisp, 38, 22, 18, 27),
            level: 12,
            hp: 31,
            moves: vec![
                slot("ember-gaze", 8, 10),
                slot("chill-touch", 0, 15),
                slot("wail", 3, 5),
                slot("flicker", 12, 20),
            ],
        },
        PartyMember {
            info: ghost("Marrow", GhostKind::Poltergeist, 45, 26, 24, 14),
            level: 10,
            hp: 45,
            moves: vec![slot("rattle", 10, 10), slot("haunt", 4, 5)],
        },
        PartyMember {
            info: ghost("Sorrel", GhostKind::Shade, 33, 19, 15, 31),
            level: 9,
            hp: 0,
            moves: vec![slot("flicker", 20, 20)],
        },
    ]
}

/// The trap bag: the snare is out of stock, so its row is a dead end.
pub fn starter_bag() -> Vec<ItemStack> {
    vec![
        ItemStack {
            kind: TrapKind::WispJar,
            qty: 3,
        },
        ItemStack {
            kind: TrapKind::CharmLantern,
            qty: 1,
        },
        ItemStack {
            kind: TrapKind::SpiritSnare,
            qty: 0,
        },
    ]
}

pub fn movedex() -> HashMap<String, MoveInfo> {
    let mut dex = HashMap::new();
    let mut add = |id: &str, name: &str, power: u16, kind: GhostKind, uses_max: u16| {
        dex.insert(
            id.to_string(),
            MoveInfo {
                name: name.to_string(),
                power,
                kind,
                uses_max,
            },
        );
    };
    add("ember-gaze", "Ember Gaze", 40, GhostKind::Wisp, 10);
    add("chill-touch", "Chill Touch", 35, GhostKind::Shade, 15);
    add("wail", "Wail", 55, GhostKind::Banshee, 5);
    add("flicker", "Flicker", 25, GhostKind::Wisp, 20);
    add("rattle", "Rattle", 30, GhostKind::Poltergeist, 10);
    add("haunt", "Haunt", 50, GhostKind::Phantom, 5);
    add("grave-chill", "Grave Chill", 60, GhostKind::Shade, 5);
    add("possess", "Possess", 70, GhostKind::Phantom, 8);
    dex
}

pub fn wild_ghost() -> GhostInfo {
    ghost("Moss Shade", GhostKind::Shade, 29, 17, 13, 22)
}

/// A party already at the configured limit, for the placement-choice entry.
fn capacity_party(limit: usize) -> Vec<PartyMember> {
    let base = starter_party();
    let extras = [
        ("Bramble", GhostKind::Phantom),
        ("Tallow", GhostKind::Wisp),
        ("Vesper", GhostKind::Banshee),
        ("Mourne", GhostKind::Shade),
        ("Cinder", GhostKind::Wisp),
        ("Hollow", GhostKind::Poltergeist),
    ];
    let mut party = base;
    for (name, kind) in extras {
        if party.len() >= limit {
            break;
        }
        party.push(PartyMember {
            info: ghost(name, kind, 30, 18, 16, 20),
            level: 8,
            hp: 30,
            moves: vec![slot("flicker", 20, 20)],
        });
    }
    let mut counter = 0;
    while party.len() < limit {
        counter += 1;
        party.push(PartyMember {
            info: ghost(&format!("Echo {counter}"), GhostKind::Shade, 28, 16, 14, 18),
            level: 7,
            hp: 28,
            moves: vec![slot("flicker", 20, 20)],
        });
    }
    party.truncate(limit.max(1));
    party
}
