//! Whole-board view for one replay step, seen from a chosen seat.
//!
//! The snapshot comes from the replay; this module only places each seat
//! around the table and lays out its tiles. The viewpoint is passed in by
//! the caller on every call.

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::errors::ViewResult;
use crate::face::{resolve, Face};
use crate::hand::HandLayout;
use crate::meld::{relative_seat, Meld, NUM_PLAYERS};
use crate::mjai::MjaiEvent;
use crate::river::{Discard, RiverLayout};
use crate::tile::Tile;

/// Where a seat sits on screen relative to the viewpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Bottom,
    Right,
    Top,
    Left,
}

impl Position {
    pub const fn of(seat: u8, viewpoint: u8) -> Self {
        match relative_seat(seat, viewpoint) {
            0 => Position::Bottom,
            1 => Position::Right,
            2 => Position::Top,
            _ => Position::Left,
        }
    }

    /// Rotation applied to the seat's area so its tiles face the centre.
    pub const fn rotation_degrees(self) -> i32 {
        match self {
            Position::Bottom => 0,
            Position::Right => -90,
            Position::Top => 180,
            Position::Left => 90,
        }
    }
}

/// Declaration announced over a seat's area after the last event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallKind {
    Chi,
    Pon,
    Kan,
    Ankan,
    Kakan,
    Reach,
    Tsumo,
    Ron,
    Ryukyoku,
}

impl CallKind {
    /// What `seat` announces after `event`. Calls, riichi and wins belong to
    /// the event's actor. An exhaustive draw is shown once, on the viewpoint.
    pub fn for_seat(event: &MjaiEvent, seat: u8, viewpoint: u8) -> Option<Self> {
        if let MjaiEvent::Ryukyoku = event {
            return (seat == viewpoint).then_some(CallKind::Ryukyoku);
        }
        if event.actor() != Some(seat) {
            return None;
        }
        match *event {
            MjaiEvent::Chi { .. } => Some(CallKind::Chi),
            MjaiEvent::Pon { .. } => Some(CallKind::Pon),
            MjaiEvent::Daiminkan { .. } => Some(CallKind::Kan),
            MjaiEvent::Ankan { .. } => Some(CallKind::Ankan),
            MjaiEvent::Kakan { .. } => Some(CallKind::Kakan),
            MjaiEvent::Reach { .. } => Some(CallKind::Reach),
            MjaiEvent::Hora { actor, target } if actor == target => Some(CallKind::Tsumo),
            MjaiEvent::Hora { .. } => Some(CallKind::Ron),
            _ => None,
        }
    }
}

/// One seat's state at a replay step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSnapshot {
    pub hand: Vec<Tile>,
    pub melds: Vec<Meld>,
    pub discards: Vec<Discard>,
    pub riichi: bool,
    pub waits: Vec<Tile>,
}

/// Board state at a replay step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub dora_markers: Vec<Tile>,
    pub current_actor: Option<u8>,
    /// Round index: 0-3 east, 4-7 south, and so on.
    pub round: u8,
    pub honba: u8,
    pub kyotaku: u32,
    pub last_event: Option<MjaiEvent>,
}

impl BoardSnapshot {
    pub fn from_json(text: &str) -> ViewResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub seat: u8,
    pub position: Position,
    pub rotation_degrees: i32,
    pub hand: HandLayout,
    pub river: RiverLayout,
    pub waits: Vec<Face>,
    pub riichi: bool,
    pub call: Option<CallKind>,
    pub is_viewpoint: bool,
    pub is_current_actor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub viewpoint: u8,
    pub players: Vec<PlayerView>,
    pub dora_markers: Vec<Face>,
    pub round: u8,
    pub honba: u8,
    pub kyotaku: u32,
}

impl BoardView {
    pub fn new(snapshot: &BoardSnapshot, viewpoint: u8, config: &ViewConfig) -> Self {
        let viewpoint = viewpoint % NUM_PLAYERS;
        if snapshot.players.len() != NUM_PLAYERS as usize {
            log::warn!(
                "snapshot has {} players, expected {}",
                snapshot.players.len(),
                NUM_PLAYERS
            );
        }
        let players = snapshot
            .players
            .iter()
            .take(NUM_PLAYERS as usize)
            .enumerate()
            .map(|(idx, p)| {
                let seat = idx as u8;
                let position = Position::of(seat, viewpoint);
                PlayerView {
                    seat,
                    position,
                    rotation_degrees: position.rotation_degrees(),
                    hand: HandLayout::new(&p.hand, &p.melds, seat, config),
                    river: RiverLayout::new(&p.discards, config),
                    waits: p.waits.iter().map(|&t| resolve(t)).collect(),
                    riichi: p.riichi,
                    call: snapshot
                        .last_event
                        .as_ref()
                        .and_then(|ev| CallKind::for_seat(ev, seat, viewpoint)),
                    is_viewpoint: seat == viewpoint,
                    is_current_actor: snapshot.current_actor == Some(seat),
                }
            })
            .collect();
        Self {
            viewpoint,
            players,
            dora_markers: snapshot.dora_markers.iter().map(|&t| resolve(t)).collect(),
            round: snapshot.round,
            honba: snapshot.honba,
            kyotaku: snapshot.kyotaku,
        }
    }

    pub fn player_at(&self, position: Position) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.position == position)
    }
}
