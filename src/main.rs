use std::io;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui_dispatch::{EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventOutcome};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use wisptui::action::Action;
use wisptui::effect::Effect;
use wisptui::reducer::reducer;
use wisptui::state::{AppState, PanelConfig};
use wisptui::ui;

#[derive(Parser, Debug)]
#[command(name = "wisptui")]
#[command(about = "Ghost-taming battle resolution screens")]
struct Args {
    /// Party size limit used by the capture screens
    #[arg(long, default_value_t = 6)]
    party_limit: usize,

    /// Learnable move slots per ghost
    #[arg(long, default_value_t = 4)]
    move_slots: usize,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        party_limit,
        move_slots,
        debug: debug_args,
    } = Args::parse();

    let debug = DebugSession::new(debug_args);

    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let config = PanelConfig {
        party_limit: party_limit.max(1),
        move_slot_limit: move_slots.max(1),
    };
    let state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(AppState::new(config)) })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    debug
        .run_effect_app(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |_runtime| {
                // No intervals and no background tasks: the screens are
                // strictly input-driven.
            },
            |frame, area, state, _render_ctx| {
                ui::render(frame, area, state);
            },
            |event, state| -> EventOutcome<Action> { ui::handle_event(event, state) },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

fn handle_effect(_effect: Effect, _ctx: &mut EffectContext<Action>) {
    // Outcome signals are consumed by the reducer's host logic; nothing
    // runs out of band.
}
