//! Canonical panel input and the token dispatch gate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A canonical input a panel understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum InputKey {
    Up,
    Down,
    Confirm,
    Cancel,
}

impl InputKey {
    /// Map a logical key token to its canonical input.
    ///
    /// Letter aliases are case-sensitive (`w`/`W` up, `s`/`S` down); confirm
    /// is Enter or the space character. Unknown tokens are inert.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "ArrowUp" | "w" | "W" => Some(InputKey::Up),
            "ArrowDown" | "s" | "S" => Some(InputKey::Down),
            "Enter" | " " => Some(InputKey::Confirm),
            "Escape" => Some(InputKey::Cancel),
            _ => None,
        }
    }
}

/// Admits each distinct token value exactly once.
///
/// Hosts that re-deliver the currently held token every cycle route it
/// through this gate: a value already seen is not replayed until a different
/// value, or a clear to absent, arrives in between. Replay is keyed on the
/// token value alone, never on the handler passed in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TokenGate {
    last: Option<String>,
}

impl TokenGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the channel's current token. The handler runs synchronously,
    /// exactly once per newly seen value.
    pub fn feed<T>(&mut self, token: Option<&str>, handler: impl FnOnce(&str) -> T) -> Option<T> {
        match token {
            None => {
                self.last = None;
                None
            }
            Some(value) => {
                if self.last.as_deref() == Some(value) {
                    return None;
                }
                self.last = Some(value.to_string());
                Some(handler(value))
            }
        }
    }
}
