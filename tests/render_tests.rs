//! Render smoke tests using RenderHarness.

use tui_dispatch::testing::*;
use wisptui::{
    input::InputKey,
    panel::{MoveSelectPanel, PanelState},
    scenario::Demo,
    state::{AppState, MoveSlot},
    ui,
};

fn render_state(state: &AppState) -> String {
    let mut render = RenderHarness::new(70, 24);
    render.render_to_string_plain(|frame| {
        ui::render(frame, frame.area(), state);
    })
}

#[test]
fn test_render_gallery_lists_every_entry() {
    let state = AppState::default();
    let output = render_state(&state);
    for demo in Demo::ALL {
        assert!(
            output.contains(demo.title()),
            "missing gallery entry {:?}:\n{}",
            demo,
            output
        );
    }
}

#[test]
fn test_render_victory_phases() {
    let mut state = AppState::default();
    let panel = Demo::Victory.build(&state);
    state.panel = Some(panel);

    let output = render_state(&state);
    assert!(output.contains("subdued"), "win message:\n{output}");

    // Advance to the experience phase.
    if let Some(panel) = state.panel.as_mut() {
        panel.handle(InputKey::Confirm);
    }
    let output = render_state(&state);
    assert!(output.contains("XP"), "exp payload:\n{output}");
}

#[test]
fn test_render_defeat_message() {
    let mut state = AppState::default();
    let panel = Demo::Defeat.build(&state);
    state.panel = Some(panel);

    let output = render_state(&state);
    assert!(output.contains("dispersed"), "faint message:\n{output}");
}

#[test]
fn test_render_capture_marks_empty_stock() {
    let mut state = AppState::default();
    let panel = Demo::Capture.build(&state);
    state.panel = Some(panel);

    let output = render_state(&state);
    assert!(output.contains("Wisp Jar  x3"));
    assert!(output.contains("Spirit Snare  x0"));
    assert!(output.contains("Back"));
}

#[test]
fn test_render_full_party_choice() {
    let mut state = AppState::default();
    let panel = Demo::CaptureFullParty.build(&state);
    state.panel = Some(panel);

    let output = render_state(&state);
    assert!(output.contains("party is full"), "choice headline:\n{output}");
    assert!(output.contains("Send to the box"));
    assert!(output.contains("Swap with a party member"));
}

#[test]
fn test_render_swap_shows_party_rows() {
    let mut state = AppState::default();
    let panel = Demo::GhostSwap.build(&state);
    state.panel = Some(panel);

    let output = render_state(&state);
    assert!(output.contains("Willow"));
    assert!(output.contains("Marrow"));
    assert!(output.contains("Sorrel"));
}

#[test]
fn test_render_omits_unknown_move_rows() {
    let mut state = AppState::default();
    let moves = vec![
        MoveSlot {
            id: "wail".to_string(),
            uses: 3,
            uses_max: 5,
        },
        MoveSlot {
            id: "forgotten-hymn".to_string(),
            uses: 1,
            uses_max: 1,
        },
    ];
    state.panel = Some(PanelState::MoveSelect(MoveSelectPanel::new(moves, 0)));

    let output = render_state(&state);
    assert!(output.contains("Wail"), "known move renders:\n{output}");
    assert!(
        !output.contains("forgotten-hymn"),
        "unknown id must be left out:\n{output}"
    );
}

#[test]
fn test_render_log_after_an_outcome() {
    let mut state = AppState::default();
    state.push_log("Backed out.");

    let output = render_state(&state);
    assert!(output.contains("Backed out."), "log pane:\n{output}");
}
