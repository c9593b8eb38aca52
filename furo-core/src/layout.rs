//! Call layout: how an exposed set is laid out in front of its owner.
//!
//! The output is a left-to-right sequence of [`Slot`]s. The tile taken from
//! an opponent is turned sideways and placed on the side of the player it
//! came from: rightmost for the right player, second for the player across,
//! leftmost for the left player. A kakan keeps its parent pon's layout and
//! stacks the added tile on the sideways one. An ankan shows its two inner
//! tiles and hides the outer two.
//!
//! Layout never fails. A meld whose tile count does not match its kind, or
//! whose source seat is out of range, is drawn upright in its original order.

use serde::Serialize;

use crate::face::{resolve, Face};
use crate::meld::{Meld, MeldKind};
use crate::tile::Tile;

/// One rendering position of a meld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A single tile, upright.
    Upright(Tile),
    /// A single upright tile drawn face-down whatever its identity.
    FaceDown(Tile),
    /// A single tile turned 90 degrees.
    Rotated(Tile),
    /// Two tiles turned 90 degrees, the second stacked on the first.
    Stacked([Tile; 2]),
}

impl Slot {
    /// True identities of the tiles in this slot.
    pub fn tiles(&self) -> &[Tile] {
        match self {
            Slot::Upright(t) | Slot::FaceDown(t) | Slot::Rotated(t) => std::slice::from_ref(t),
            Slot::Stacked(pair) => pair,
        }
    }

    #[inline]
    pub fn is_rotated(&self) -> bool {
        matches!(self, Slot::Rotated(_) | Slot::Stacked(_))
    }

    /// Faces to draw, bottom tile first.
    pub fn faces(&self) -> Vec<Face> {
        match self {
            Slot::FaceDown(_) => vec![Face::Back],
            _ => self.tiles().iter().map(|&t| resolve(t)).collect(),
        }
    }
}

/// A slot as handed to the renderer: resolved faces and the rotation flag.
/// Face-down slots only ever expose the back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeldSlot {
    pub faces: Vec<Face>,
    pub rotated: bool,
}

impl From<&Slot> for MeldSlot {
    fn from(slot: &Slot) -> Self {
        Self {
            faces: slot.faces(),
            rotated: slot.is_rotated(),
        }
    }
}

/// Lays out `meld`, owned by seat `actor`.
pub fn layout(meld: &Meld, actor: u8) -> Vec<Slot> {
    if !meld.is_well_formed() {
        log::warn!(
            "seat {actor}: {:?} with {} tiles (expected {}), drawing upright",
            meld.kind,
            meld.tiles.len(),
            meld.kind.tile_count()
        );
        return upright(&meld.tiles);
    }

    let slots = match meld.kind {
        MeldKind::Ankan => concealed(&meld.tiles),
        MeldKind::Chi | MeldKind::Pon | MeldKind::Daiminkan => {
            claimed(&meld.tiles, meld.source_seat_offset)
        }
        MeldKind::Kakan => added(&meld.tiles, meld.source_seat_offset),
    };

    if meld.kind != MeldKind::Ankan && !slots.iter().any(Slot::is_rotated) {
        log::warn!(
            "seat {actor}: {:?} with source seat offset {}, drawing upright",
            meld.kind,
            meld.source_seat_offset
        );
    }
    slots
}

fn upright(tiles: &[Tile]) -> Vec<Slot> {
    tiles.iter().copied().map(Slot::Upright).collect()
}

/// Outer tiles face-down, inner tiles shown.
fn concealed(tiles: &[Tile]) -> Vec<Slot> {
    let last = tiles.len() - 1;
    tiles
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            if i == 0 || i == last {
                Slot::FaceDown(t)
            } else {
                Slot::Upright(t)
            }
        })
        .collect()
}

/// Chi, pon and daiminkan: the last tile is the stolen one.
fn claimed(tiles: &[Tile], offset: u8) -> Vec<Slot> {
    let Some((&stolen, consumed)) = tiles.split_last() else {
        return Vec::new();
    };
    let mut slots = Vec::with_capacity(tiles.len());
    match offset {
        1 => {
            slots.extend(upright(consumed));
            slots.push(Slot::Rotated(stolen));
        }
        2 if consumed.len() >= 2 => {
            slots.push(Slot::Upright(consumed[0]));
            slots.push(Slot::Rotated(stolen));
            slots.extend(upright(&consumed[1..]));
        }
        2 => {
            slots.extend(upright(consumed));
            slots.push(Slot::Rotated(stolen));
        }
        3 => {
            slots.push(Slot::Rotated(stolen));
            slots.extend(upright(consumed));
        }
        _ => slots.extend(upright(tiles)),
    }
    slots
}

/// Kakan: the parent pon's layout with the added tile stacked on the
/// rotated slot.
fn added(tiles: &[Tile], offset: u8) -> Vec<Slot> {
    let Some((&extra, parent)) = tiles.split_last() else {
        return Vec::new();
    };
    let mut slots = claimed(parent, offset);
    match slots.iter_mut().find(|slot| slot.is_rotated()) {
        Some(slot) => {
            if let Slot::Rotated(stolen) = *slot {
                *slot = Slot::Stacked([stolen, extra]);
            }
        }
        None => slots.push(Slot::Upright(extra)),
    }
    slots
}
