//! Typed MJAI events relevant to the board layout.
//!
//! Only the event shapes the viewer reads are modelled. Every other event
//! type decodes to [`MjaiEvent::Other`] so a full game log can be streamed
//! through without filtering.

use serde::{Deserialize, Serialize};

use crate::errors::ViewResult;
use crate::tile::Tile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MjaiEvent {
    /// Player draws a tile.
    Tsumo { actor: u8, pai: Tile },
    /// Player discards a tile.
    Dahai {
        actor: u8,
        pai: Tile,
        #[serde(default)]
        tsumogiri: bool,
    },
    /// Player declares riichi.
    Reach { actor: u8 },
    /// Chi (sequence) call.
    Chi {
        actor: u8,
        target: u8,
        pai: Tile,
        consumed: [Tile; 2],
    },
    /// Pon (triplet) call.
    Pon {
        actor: u8,
        target: u8,
        pai: Tile,
        consumed: [Tile; 2],
    },
    /// Open kan (daiminkan).
    Daiminkan {
        actor: u8,
        target: u8,
        pai: Tile,
        consumed: [Tile; 3],
    },
    /// Closed kan (ankan).
    Ankan { actor: u8, consumed: [Tile; 4] },
    /// Added kan (kakan).
    Kakan {
        actor: u8,
        pai: Tile,
        consumed: [Tile; 3],
    },
    /// Win declaration. `target == actor` for a self-drawn win.
    Hora { actor: u8, target: u8 },
    /// Exhaustive draw.
    Ryukyoku,
    /// Any event the layout does not need.
    #[serde(other)]
    Other,
}

impl MjaiEvent {
    /// Decodes one JSON log line.
    pub fn from_json(line: &str) -> ViewResult<Self> {
        Ok(serde_json::from_str(line)?)
    }

    pub fn actor(&self) -> Option<u8> {
        match *self {
            MjaiEvent::Tsumo { actor, .. }
            | MjaiEvent::Dahai { actor, .. }
            | MjaiEvent::Reach { actor }
            | MjaiEvent::Chi { actor, .. }
            | MjaiEvent::Pon { actor, .. }
            | MjaiEvent::Daiminkan { actor, .. }
            | MjaiEvent::Ankan { actor, .. }
            | MjaiEvent::Kakan { actor, .. }
            | MjaiEvent::Hora { actor, .. } => Some(actor),
            MjaiEvent::Ryukyoku | MjaiEvent::Other => None,
        }
    }

    /// True for events that expose a meld.
    pub fn is_call(&self) -> bool {
        matches!(
            self,
            MjaiEvent::Chi { .. }
                | MjaiEvent::Pon { .. }
                | MjaiEvent::Daiminkan { .. }
                | MjaiEvent::Ankan { .. }
                | MjaiEvent::Kakan { .. }
        )
    }
}
