//! Reducer: routes inputs into the mounted panel, surfaces its outcome
//! signals as effects, and plays the host that reacts to them.

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::input::InputKey;
use crate::panel::{CaptureSuccessPanel, PanelState};
use crate::scenario::Demo;
use crate::state::{AppState, MoveSlot, PartyMember};

/// Level a freshly caught wild ghost joins at.
const WILD_LEVEL: u8 = 8;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => DispatchResult::changed(),
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }
        Action::PanelKey(key) => handle_key(state, key),
        Action::PanelActivate(index) => handle_activate(state, index),
        Action::PanelToken(token) => {
            let admitted = state.gate.feed(token.as_deref(), InputKey::parse);
            match admitted {
                Some(Some(key)) => handle_key(state, key),
                // Unknown token, a replay of the held one, or a clear.
                Some(None) | None => DispatchResult::unchanged(),
            }
        }
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn handle_key(state: &mut AppState, key: InputKey) -> DispatchResult<Effect> {
    if state.panel.is_none() {
        return gallery_key(state, key);
    }
    let outcome = state.panel.as_mut().and_then(|panel| panel.handle(key));
    resolve(state, outcome)
}

fn handle_activate(state: &mut AppState, index: usize) -> DispatchResult<Effect> {
    if state.panel.is_none() {
        // Gallery: jump to the entry and open it.
        if index >= state.gallery.len() {
            return DispatchResult::unchanged();
        }
        state.gallery.set(index);
        let panel = Demo::ALL[index].build(state);
        state.panel = Some(panel);
        return DispatchResult::changed();
    }
    let outcome = state
        .panel
        .as_mut()
        .and_then(|panel| panel.activate(index));
    resolve(state, outcome)
}

fn gallery_key(state: &mut AppState, key: InputKey) -> DispatchResult<Effect> {
    match key {
        InputKey::Up => {
            state.gallery.up();
            DispatchResult::changed()
        }
        InputKey::Down => {
            state.gallery.down();
            DispatchResult::changed()
        }
        InputKey::Confirm => {
            let panel = Demo::ALL[state.gallery.index()].build(state);
            state.panel = Some(panel);
            DispatchResult::changed()
        }
        InputKey::Cancel => DispatchResult::unchanged(),
    }
}

fn resolve(state: &mut AppState, outcome: Option<Effect>) -> DispatchResult<Effect> {
    match outcome {
        None => DispatchResult::changed(),
        Some(effect) => {
            apply_outcome(state, &effect);
            DispatchResult::changed_with(effect)
        }
    }
}

/// The demo's downstream game logic: log the signal, apply its consequence
/// to the roster, and mount whatever the flow calls for next.
fn apply_outcome(state: &mut AppState, effect: &Effect) {
    match effect {
        Effect::BattleContinue => {
            state.push_log("The battle wraps up.");
            state.panel = None;
        }
        Effect::PanelBack => {
            state.push_log("Backed out.");
            state.panel = None;
        }
        Effect::UseCaptureItem { kind } => {
            if let Some(stack) = state.bag.iter_mut().find(|stack| stack.kind == *kind) {
                stack.qty = stack.qty.saturating_sub(1);
            }
            state.push_log(format!(
                "Threw the {}! {} was caught!",
                kind.label(),
                state.wild.name
            ));
            // The placement choice comes straight after a successful throw.
            let next =
                CaptureSuccessPanel::new(state.wild.clone(), state.party.clone(), &state.config);
            state.panel = Some(PanelState::CaptureSuccess(next));
        }
        Effect::ChooseMove { id } => {
            let caster = state
                .active_member()
                .map(|member| member.info.name.clone())
                .unwrap_or_default();
            let name = move_name(state, id);
            if let Some(member) = state.active_member_mut() {
                if let Some(slot) = member.moves.iter_mut().find(|slot| slot.id == *id) {
                    slot.uses = slot.uses.saturating_sub(1);
                }
            }
            state.push_log(format!("{} used {}!", caster, name));
            state.panel = None;
        }
        Effect::SwapActive { index } => {
            state.active_index = *index;
            let name = state
                .party
                .get(*index)
                .map(|member| member.info.name.clone())
                .unwrap_or_default();
            state.push_log(format!("{} floats forward!", name));
            state.panel = None;
        }
        Effect::AddToParty => {
            let member = wild_member(state);
            state.push_log(format!("{} joins the party!", member.info.name));
            state.party.push(member);
            state.panel = None;
        }
        Effect::SendToBox => {
            state.push_log(format!("{} was sent to the box.", state.wild.name));
            state.panel = None;
        }
        Effect::SwapIntoParty { index } => {
            let incoming = wild_member(state);
            if let Some(slotted) = state.party.get_mut(*index) {
                let outgoing = std::mem::replace(slotted, incoming);
                state.push_log(format!(
                    "{} was sent to the box; {} joins the party!",
                    outgoing.info.name, state.wild.name
                ));
            }
            state.panel = None;
        }
        Effect::LearnMove { slot } => {
            let incoming = match &state.panel {
                Some(PanelState::MoveLearn(panel)) => panel.incoming.clone(),
                _ => String::new(),
            };
            apply_learn(state, &incoming, *slot);
            state.panel = None;
        }
    }
}

fn apply_learn(state: &mut AppState, incoming: &str, slot: Option<usize>) {
    let Some(slot) = slot else {
        state.push_log("The new move was not learned.");
        return;
    };
    let name = move_name(state, incoming);
    let uses_max = state
        .movedex
        .get(incoming)
        .map(|info| info.uses_max)
        .unwrap_or(10);
    let learned = MoveSlot {
        id: incoming.to_string(),
        uses: uses_max,
        uses_max,
    };
    let mut forgotten = None;
    if let Some(member) = state.active_member_mut() {
        if slot < member.moves.len() {
            forgotten = Some(std::mem::replace(&mut member.moves[slot], learned).id);
        } else {
            member.moves.push(learned);
        }
    }
    match forgotten {
        Some(old_id) => {
            let old_name = move_name(state, &old_id);
            state.push_log(format!("Forgot {} and learned {}!", old_name, name));
        }
        None => state.push_log(format!("Learned {}!", name)),
    }
}

fn wild_member(state: &AppState) -> PartyMember {
    PartyMember {
        info: state.wild.clone(),
        level: WILD_LEVEL,
        hp: state.wild.hp,
        moves: vec![MoveSlot {
            id: "flicker".to_string(),
            uses: 20,
            uses_max: 20,
        }],
    }
}

fn move_name(state: &AppState, id: &str) -> String {
    state
        .movedex
        .get(id)
        .map(|info| info.name.clone())
        .unwrap_or_else(|| id.to_string())
}
