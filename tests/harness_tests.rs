//! Store-level flow tests using EffectStoreTestHarness.

use tui_dispatch::testing::*;
use wisptui::{
    action::Action,
    effect::Effect,
    input::InputKey,
    panel::{LearnStage, PanelState},
    reducer::reducer,
    state::{AppState, TrapKind},
};

fn key(input: InputKey) -> Action {
    Action::PanelKey(input)
}

#[test]
fn test_capture_throw_chains_into_placement() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::PanelActivate(2));
    harness.assert_state(|s| matches!(s.panel, Some(PanelState::CaptureItem(_))));

    // Confirm the default trap.
    harness.dispatch_collect(key(InputKey::Confirm));
    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::UseCaptureItem { kind } if *kind == TrapKind::WispJar),
    );

    // The host decrements the stock and moves straight to placement.
    harness.assert_state(|s| s.bag[0].qty == 2);
    harness.assert_state(|s| matches!(s.panel, Some(PanelState::CaptureSuccess(_))));
}

#[test]
fn test_capture_placement_add_to_party() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::PanelActivate(2));
    harness.dispatch_collect(key(InputKey::Confirm));
    harness.drain_effects();

    // Party has room, so the placement screen is a single confirm.
    harness.assert_state(|s| s.party.len() == 3);
    harness.dispatch_collect(key(InputKey::Confirm));
    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::AddToParty));

    harness.assert_state(|s| s.party.len() == 4);
    harness.assert_state(|s| s.panel.is_none());
    harness.assert_state(|s| s.log.iter().any(|line| line.contains("joins the party")));
}

#[test]
fn test_capture_swap_places_the_wild_ghost() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::PanelActivate(3)); // full-party placement
    harness.dispatch_collect(key(InputKey::Down));
    harness.dispatch_collect(key(InputKey::Confirm)); // into swap mode
    harness.dispatch_collect(key(InputKey::Down));
    harness.dispatch_collect(key(InputKey::Confirm)); // swap with member 1

    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::SwapIntoParty { index: 1 }));

    harness.assert_state(|s| s.party[1].info.name == s.wild.name);
    harness.assert_state(|s| s.panel.is_none());
}

#[test]
fn test_learn_flow_replaces_the_chosen_slot() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::PanelActivate(6));
    harness.assert_state(|s| match s.panel.as_ref() {
        Some(PanelState::MoveLearn(panel)) => panel.stage() == LearnStage::Confirm,
        _ => false,
    });

    // The active ghost already knows four moves, so learning detours
    // through the replacement list.
    harness.dispatch_collect(key(InputKey::Confirm));
    harness.assert_state(|s| match s.panel.as_ref() {
        Some(PanelState::MoveLearn(panel)) => panel.stage() == LearnStage::Replace,
        _ => false,
    });

    harness.dispatch_collect(key(InputKey::Confirm)); // forget slot 0
    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::LearnMove { slot: Some(0) }));

    harness.assert_state(|s| s.party[0].moves[0].id == "possess");
    harness.assert_state(|s| s.panel.is_none());
}

#[test]
fn test_learn_decline_leaves_moves_untouched() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::PanelActivate(6));
    harness.dispatch_collect(key(InputKey::Down)); // onto "skip"
    harness.dispatch_collect(key(InputKey::Confirm));

    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::LearnMove { slot: None }));

    harness.assert_state(|s| s.party[0].moves.iter().all(|slot| slot.id != "possess"));
    harness.assert_state(|s| s.panel.is_none());
}

#[test]
fn test_ghost_swap_updates_active_slot() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::PanelActivate(4));

    // The active member itself is a dead row.
    harness.dispatch_collect(key(InputKey::Confirm));
    let effects = harness.drain_effects();
    effects.effects_empty();

    harness.dispatch_collect(key(InputKey::Down));
    harness.dispatch_collect(key(InputKey::Confirm));
    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::SwapActive { index: 1 }));

    harness.assert_state(|s| s.active_index == 1);
}

#[test]
fn test_move_select_spends_a_use() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::PanelActivate(5));
    harness.assert_state(|s| s.party[0].moves[0].uses == 8);
    harness.dispatch_collect(key(InputKey::Confirm));

    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::ChooseMove { id } if id == "ember-gaze"));

    harness.assert_state(|s| s.party[0].moves[0].uses == 7);
}

#[test]
fn test_dispatch_all_walks_the_gallery() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    let results = harness.dispatch_all([
        key(InputKey::Down),
        key(InputKey::Down),
        key(InputKey::Up),
    ]);
    assert_eq!(results, vec![true, true, true]);
    harness.assert_state(|s| s.gallery.index() == 1);
}

#[test]
fn test_render_capture_list_through_harness() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    harness.dispatch_collect(Action::PanelActivate(2));

    let output = harness.render_plain(70, 24, |frame, area, state| {
        wisptui::ui::render(frame, area, state);
    });

    assert!(output.contains("Wisp Jar"), "trap rows should render:\n{output}");
    assert!(output.contains("Back"), "back row should render:\n{output}");
}
