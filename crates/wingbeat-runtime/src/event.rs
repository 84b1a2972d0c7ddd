//! UI interaction events

use serde::{Deserialize, Serialize};

/// A discrete interaction in the hosting UI that may trigger burst spawns.
///
/// The flight system only ever reacts to these; it knows nothing about the
/// widgets that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEvent {
    /// The "begin" button was pressed
    Began,
    /// A memory tile was opened for the first time
    MemoryOpened,
    /// A reason chip was revealed for the first time
    ReasonRevealed,
    /// The decline button was pressed
    Declined,
    /// The accept button was pressed
    Accepted,
}
