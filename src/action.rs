//! Actions with automatic category inference.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::InputKey;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    Init,
    UiTerminalResize(u16, u16),

    /// A canonical key pressed in the active screen.
    PanelKey(InputKey),
    /// Pointer activation of a row: move the cursor there, then confirm.
    PanelActivate(usize),
    /// The virtualized keyboard channel: the token the host currently
    /// holds, or `None` when the channel is clear. A held value is
    /// processed once, however often it is re-delivered.
    PanelToken(Option<String>),

    Quit,
}
