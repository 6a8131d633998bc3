use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{block::Title, Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use tui_dispatch::{Component, EventKind, EventOutcome};
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use crate::action::Action;
use crate::cursor::SelectCursor;
use crate::input::InputKey;
use crate::panel::{
    capture::CHOICE_LABELS, moves::LEARN_LABELS, CaptureItemPanel, CaptureMode,
    CaptureSuccessPanel, DefeatPanel, DefeatPhase, GhostSwapPanel, LearnStage, MoveLearnPanel,
    MoveSelectPanel, PanelState, VictoryPanel, VictoryPhase,
};
use crate::scenario::Demo;
use crate::state::{AppState, PartyMember};

const BG_BASE: Color = Color::Rgb(22, 20, 34);
const BG_PANEL: Color = Color::Rgb(36, 32, 56);
const BG_PANEL_ALT: Color = Color::Rgb(30, 27, 46);
const TEXT_MAIN: Color = Color::Rgb(226, 222, 240);
const TEXT_DIM: Color = Color::Rgb(158, 152, 182);
const TEXT_DISABLED: Color = Color::Rgb(104, 98, 128);
const ACCENT_VIOLET: Color = Color::Rgb(168, 136, 232);
const ACCENT_GOLD: Color = Color::Rgb(222, 196, 120);
const HIGHLIGHT_BG: Color = ACCENT_VIOLET;
const HIGHLIGHT_TEXT: Color = Color::Rgb(20, 16, 30);
const BORDER_ACCENT: Color = Color::Rgb(86, 76, 122);

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Block::default().style(Style::default().bg(BG_BASE)), area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

    match state.panel.as_ref() {
        None => render_gallery(frame, chunks[0], state),
        Some(PanelState::Victory(panel)) => render_victory(frame, chunks[0], state, panel),
        Some(PanelState::Defeat(panel)) => render_defeat(frame, chunks[0], panel),
        Some(PanelState::CaptureItem(panel)) => render_capture_item(frame, chunks[0], panel),
        Some(PanelState::CaptureSuccess(panel)) => render_capture_success(frame, chunks[0], panel),
        Some(PanelState::GhostSwap(panel)) => render_ghost_swap(frame, chunks[0], panel),
        Some(PanelState::MoveSelect(panel)) => render_move_select(frame, chunks[0], state, panel),
        Some(PanelState::MoveLearn(panel)) => render_move_learn(frame, chunks[0], state, panel),
    }

    render_status_bar(frame, chunks[1], state);
}

pub fn handle_event(event: &EventKind, state: &AppState) -> EventOutcome<Action> {
    match event {
        EventKind::Resize(width, height) => {
            EventOutcome::action(Action::UiTerminalResize(*width, *height)).with_render()
        }
        EventKind::Key(key) => handle_key(*key, state),
        _ => EventOutcome::ignored(),
    }
}

fn handle_key(key: KeyEvent, state: &AppState) -> EventOutcome<Action> {
    if matches!(key.code, KeyCode::Char('q')) {
        return EventOutcome::action(Action::Quit);
    }
    if state.panel.is_none() && matches!(key.code, KeyCode::Esc) {
        return EventOutcome::action(Action::Quit);
    }
    EventOutcome::from(key_to_input(key.code).map(Action::PanelKey))
}

/// Terminal keys map onto the same canonical inputs the token channel uses.
pub fn key_to_input(code: KeyCode) -> Option<InputKey> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(InputKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputKey::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputKey::Confirm),
        KeyCode::Esc => Some(InputKey::Cancel),
        _ => None,
    }
}

fn render_gallery(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = panel_block(" WISPTUI ", BG_PANEL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(20)])
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            "BATTLE RESOLUTION",
            Style::default()
                .fg(ACCENT_VIOLET)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (idx, demo) in Demo::ALL.iter().enumerate() {
        lines.push(menu_line(demo.title(), idx == state.gallery.index()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Party {}/{}  ·  Active: {}",
            state.party.len(),
            state.config.party_limit,
            state
                .active_member()
                .map(|member| member.info.name.as_str())
                .unwrap_or("-")
        ),
        Style::default().fg(TEXT_DIM),
    )));
    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, pad(layout[0]));

    render_log(frame, layout[1], state);
}

fn render_log(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Field notes")
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(BG_PANEL_ALT).fg(TEXT_MAIN))
        .border_style(Style::default().fg(BORDER_ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let start = state.log.len().saturating_sub(visible);
    let lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| Line::from(Span::styled(entry.clone(), Style::default().fg(TEXT_DIM))))
        .collect();
    frame.render_widget(Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }), inner);
}

fn render_victory(frame: &mut Frame, area: Rect, state: &AppState, panel: &VictoryPanel) {
    let block = panel_block(" VICTORY ", BG_PANEL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    match panel.phase() {
        VictoryPhase::Won => {
            lines.push(headline(&format!("The wild {} was subdued!", panel.defeated)));
        }
        VictoryPhase::Exp => {
            lines.push(headline(&format!(
                "{} gained {} XP.",
                panel.ghost_name, panel.exp_gained
            )));
        }
        VictoryPhase::LevelUp => {
            if let Some(report) = panel.level_up.as_ref() {
                lines.push(headline(&format!(
                    "{} grew to Lv{}!",
                    panel.ghost_name, report.level
                )));
                lines.push(Line::from(Span::styled(
                    format!("Lv{} -> Lv{}", report.previous_level, report.level),
                    Style::default().fg(ACCENT_GOLD),
                )));
            }
        }
        VictoryPhase::Stats => {
            if let Some(report) = panel.level_up.as_ref() {
                lines.push(headline("New stats"));
                lines.push(stat_line("HP", report.stats.hp));
                lines.push(stat_line("Attack", report.stats.attack));
                lines.push(stat_line("Defense", report.stats.defense));
                lines.push(stat_line("Speed", report.stats.speed));
            }
        }
        VictoryPhase::NewMoves => {
            if let Some(id) = panel.current_new_move() {
                let name = state
                    .movedex
                    .get(id)
                    .map(|info| info.name.as_str())
                    .unwrap_or(id);
                lines.push(headline(&format!("{} can learn {}!", panel.ghost_name, name)));
            }
        }
    }
    lines.push(Line::from(""));
    lines.push(hint_line("Enter: continue"));
    render_card(frame, inner, lines);
}

fn render_defeat(frame: &mut Frame, area: Rect, panel: &DefeatPanel) {
    let block = panel_block(" DEFEAT ", BG_PANEL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    match panel.phase() {
        DefeatPhase::Fainted => {
            lines.push(headline(&format!("{} dispersed!", panel.ghost_name)));
        }
        DefeatPhase::Recovery => {
            lines.push(headline("You scurry back to the shrine."));
            lines.push(Line::from(Span::styled(
                "Your ghosts re-form by the lantern light.",
                Style::default().fg(TEXT_DIM),
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(hint_line("Enter: continue"));
    render_card(frame, inner, lines);
}

fn render_capture_item(frame: &mut Frame, area: Rect, panel: &CaptureItemPanel) {
    let block = panel_block(" CHOOSE A TRAP ", BG_PANEL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![headline("Which trap do you throw?"), Line::from("")];
    for (idx, stack) in panel.items.iter().enumerate() {
        lines.push(entry_line(
            &format!("{}  x{}", stack.kind.label(), stack.qty),
            panel.cursor().index() == idx,
            panel.is_enabled(idx),
        ));
    }
    lines.push(back_line("Back", panel.cursor().on_back()));
    render_card(frame, inner, lines);
}

fn render_capture_success(frame: &mut Frame, area: Rect, panel: &CaptureSuccessPanel) {
    let block = panel_block(" GOTCHA ", BG_PANEL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    match panel.mode() {
        CaptureMode::Success => {
            lines.push(headline(&format!("{} was caught!", panel.ghost.name)));
            lines.push(Line::from(Span::styled(
                format!("A {} drifts into your lantern.", panel.ghost.kind.label()),
                Style::default().fg(TEXT_DIM),
            )));
            lines.push(Line::from(""));
            lines.push(hint_line("Enter: add to party"));
        }
        CaptureMode::Choice => {
            lines.push(headline(&format!(
                "{} was caught, but the party is full.",
                panel.ghost.name
            )));
            lines.push(Line::from(""));
            for (idx, label) in CHOICE_LABELS.iter().enumerate() {
                lines.push(menu_line(label, panel.choice_cursor().index() == idx));
            }
        }
        CaptureMode::Swap => {
            lines.push(headline(&format!("Swap whom out for {}?", panel.ghost.name)));
            lines.push(Line::from(""));
            push_party_rows(&mut lines, &panel.party, panel.swap_cursor(), |_| true);
            lines.push(back_line("Back", panel.swap_cursor().on_back()));
        }
    }
    render_card(frame, inner, lines);
}

fn render_ghost_swap(frame: &mut Frame, area: Rect, panel: &GhostSwapPanel) {
    let block = panel_block(" SWITCH GHOSTS ", BG_PANEL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![headline("Who floats forward?"), Line::from("")];
    push_party_rows(&mut lines, &panel.party, panel.cursor(), |idx| {
        panel.is_enabled(idx)
    });
    lines.push(back_line("Back", panel.cursor().on_back()));
    render_card(frame, inner, lines);
}

fn render_move_select(frame: &mut Frame, area: Rect, state: &AppState, panel: &MoveSelectPanel) {
    let block = panel_block(" PICK A MOVE ", BG_PANEL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![headline("Which move?"), Line::from("")];
    for (idx, slot) in panel.moves.iter().enumerate() {
        // Unknown identities are left out of the list entirely.
        let Some(info) = state.movedex.get(&slot.id) else {
            continue;
        };
        lines.push(entry_line(
            &format!(
                "{}  {}/{}  pow {}",
                info.name, slot.uses, slot.uses_max, info.power
            ),
            panel.cursor().index() == idx,
            panel.is_enabled(idx),
        ));
    }
    lines.push(back_line("Back", panel.cursor().on_back()));
    render_card(frame, inner, lines);
}

fn render_move_learn(frame: &mut Frame, area: Rect, state: &AppState, panel: &MoveLearnPanel) {
    let block = panel_block(" LEARN A MOVE ", BG_PANEL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let incoming = state
        .movedex
        .get(&panel.incoming)
        .map(|info| info.name.as_str())
        .unwrap_or(panel.incoming.as_str());

    let mut lines = Vec::new();
    match panel.stage() {
        LearnStage::Confirm => {
            lines.push(headline(&format!(
                "{} wants to learn {}.",
                panel.ghost_name, incoming
            )));
            if panel.known.len() >= panel.slot_limit {
                lines.push(Line::from(Span::styled(
                    format!("But it already knows {} moves.", panel.known.len()),
                    Style::default().fg(TEXT_DIM),
                )));
            }
            lines.push(Line::from(""));
            for (idx, label) in LEARN_LABELS.iter().enumerate() {
                lines.push(menu_line(label, panel.confirm_cursor().index() == idx));
            }
        }
        LearnStage::Replace => {
            lines.push(headline("Which move should be forgotten?"));
            lines.push(Line::from(""));
            for (idx, slot) in panel.known.iter().enumerate() {
                let Some(info) = state.movedex.get(&slot.id) else {
                    continue;
                };
                lines.push(entry_line(
                    &format!("{}  {}/{}", info.name, slot.uses, slot.uses_max),
                    panel.replace_cursor().index() == idx,
                    true,
                ));
            }
            lines.push(back_line(
                &format!("Give up on {}", incoming),
                panel.replace_cursor().on_back(),
            ));
        }
    }
    render_card(frame, inner, lines);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints: Vec<StatusBarHint> = match state.panel.as_ref() {
        None => vec![
            StatusBarHint::new("↑/↓", "choose"),
            StatusBarHint::new("Enter", "open"),
            StatusBarHint::new("q", "quit"),
        ],
        Some(PanelState::Victory(_)) | Some(PanelState::Defeat(_)) => vec![
            StatusBarHint::new("Enter", "continue"),
            StatusBarHint::new("q", "quit"),
        ],
        Some(_) => vec![
            StatusBarHint::new("↑/↓", "move"),
            StatusBarHint::new("Enter", "confirm"),
            StatusBarHint::new("Esc", "back"),
            StatusBarHint::new("q", "quit"),
        ],
    };

    let mut status_bar = StatusBar::new();
    <StatusBar as Component<Action>>::render(
        &mut status_bar,
        frame,
        area,
        StatusBarProps {
            left: StatusBarSection::empty(),
            center: StatusBarSection::hints(&hints),
            right: StatusBarSection::empty(),
            style: StatusBarStyle::default(),
            is_focused: false,
        },
    );
}

fn push_party_rows(
    lines: &mut Vec<Line<'static>>,
    party: &[PartyMember],
    cursor: SelectCursor,
    enabled: impl Fn(usize) -> bool,
) {
    for (idx, member) in party.iter().enumerate() {
        lines.push(entry_line(
            &format!(
                "{}  Lv{}  HP {}/{}",
                member.info.name, member.level, member.hp, member.info.hp
            ),
            cursor.index() == idx,
            enabled(idx),
        ));
    }
}

fn render_card(frame: &mut Frame, inner: Rect, lines: Vec<Line<'static>>) {
    let content_height = lines.len() as u16;
    let y = inner.y + (inner.height.saturating_sub(content_height)) / 2;
    let content_area = Rect::new(inner.x, y, inner.width, content_height.min(inner.height));
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, content_area);
}

fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn panel_block<'a, T>(title: T, bg: Color) -> Block<'a>
where
    T: Into<Title<'a>>,
{
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .style(Style::default().bg(bg).fg(TEXT_MAIN))
        .border_style(Style::default().fg(BORDER_ACCENT))
}

fn headline(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(ACCENT_GOLD)
            .add_modifier(Modifier::BOLD),
    ))
}

fn hint_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(TEXT_DIM)))
}

fn stat_line(label: &str, value: u16) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<8}"), Style::default().fg(TEXT_DIM)),
        Span::styled(value.to_string(), Style::default().fg(TEXT_MAIN)),
    ])
}

fn menu_line(label: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(HIGHLIGHT_TEXT)
            .bg(HIGHLIGHT_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MAIN)
    };
    Line::from(Span::styled(label.to_string(), style))
}

fn entry_line(label: &str, selected: bool, enabled: bool) -> Line<'static> {
    if !enabled {
        let style = if selected {
            Style::default()
                .fg(TEXT_DISABLED)
                .bg(BG_PANEL_ALT)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(TEXT_DISABLED)
        };
        return Line::from(Span::styled(label.to_string(), style));
    }
    menu_line(label, selected)
}

fn back_line(label: &str, selected: bool) -> Line<'static> {
    menu_line(label, selected)
}
