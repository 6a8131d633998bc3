//! Battle-resolution screens for a ghost-taming game.
//!
//! The heart of the crate is a family of panel state machines (`panel`)
//! built on three shared primitives: canonical input parsing plus the
//! once-per-token gate (`input`), a wrap-around selection cursor
//! (`cursor`), and a forward-only phase sequencer (`sequencer`). The
//! reducer wires them into a tui-dispatch store; the binary hosts them in a
//! gallery of battle scenarios.

pub mod action;
pub mod cursor;
pub mod effect;
pub mod input;
pub mod panel;
pub mod reducer;
pub mod scenario;
pub mod sequencer;
pub mod state;
pub mod ui;
