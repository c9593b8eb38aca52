//! Exposed sets (melds) as handed over by the replay.

use serde::{Deserialize, Serialize};

use crate::errors::{ViewError, ViewResult};
use crate::mjai::MjaiEvent;
use crate::tile::Tile;

/// Number of seats at the table.
pub const NUM_PLAYERS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeldKind {
    /// Sequence claimed from the left player's discard.
    Chi,
    /// Triplet claimed from a discard.
    Pon,
    /// Open quad claimed from a discard.
    Daiminkan,
    /// Concealed quad declared from the owner's own tiles.
    Ankan,
    /// Quad formed by adding a drawn tile to an earlier pon.
    Kakan,
}

impl MeldKind {
    /// Tile count a well-formed meld of this kind carries.
    #[inline]
    pub const fn tile_count(self) -> usize {
        match self {
            MeldKind::Chi | MeldKind::Pon => 3,
            MeldKind::Daiminkan | MeldKind::Ankan | MeldKind::Kakan => 4,
        }
    }
}

/// Seats between the discarder and the claimant, counted counter-clockwise:
/// 1 = right (shimocha), 2 = across (toimen), 3 = left (kamicha).
#[inline]
pub const fn relative_seat(target: u8, actor: u8) -> u8 {
    (target % NUM_PLAYERS + NUM_PLAYERS - actor % NUM_PLAYERS) % NUM_PLAYERS
}

/// An exposed set.
///
/// `tiles` is in acquisition order. For chi, pon and daiminkan the last
/// tile is the one taken from an opponent. For kakan the first three tiles
/// are the parent pon, unchanged, and the last is the added tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    pub tiles: Vec<Tile>,
    /// Relative seat (1-3) the stolen tile came from. Unused for ankan.
    #[serde(default)]
    pub source_seat_offset: u8,
}

impl Meld {
    pub fn new(kind: MeldKind, tiles: Vec<Tile>, source_seat_offset: u8) -> Self {
        Self {
            kind,
            tiles,
            source_seat_offset,
        }
    }

    /// Builds a meld from absolute seats: `target` discarded the stolen tile
    /// and `actor` owns the meld.
    pub fn claimed(kind: MeldKind, tiles: Vec<Tile>, target: u8, actor: u8) -> Self {
        Self::new(kind, tiles, relative_seat(target, actor))
    }

    /// Builds the meld exposed by a call event. Tiles are the consumed hand
    /// tiles followed by the called tile.
    ///
    /// Kakan events do not carry the parent pon's order or offset, use
    /// [`Meld::add_kan`] on the parent instead.
    pub fn from_mjai(event: &MjaiEvent) -> ViewResult<Self> {
        match event {
            MjaiEvent::Chi {
                actor,
                target,
                pai,
                consumed,
            } => Ok(Self::claimed(
                MeldKind::Chi,
                with_called(consumed, *pai),
                *target,
                *actor,
            )),
            MjaiEvent::Pon {
                actor,
                target,
                pai,
                consumed,
            } => Ok(Self::claimed(
                MeldKind::Pon,
                with_called(consumed, *pai),
                *target,
                *actor,
            )),
            MjaiEvent::Daiminkan {
                actor,
                target,
                pai,
                consumed,
            } => Ok(Self::claimed(
                MeldKind::Daiminkan,
                with_called(consumed, *pai),
                *target,
                *actor,
            )),
            MjaiEvent::Ankan { consumed, .. } => Ok(Self::new(MeldKind::Ankan, consumed.to_vec(), 0)),
            MjaiEvent::Kakan { .. } => Err(ViewError::InvalidMeld {
                message: "kakan must be derived from its parent pon".to_string(),
            }),
            other => Err(ViewError::InvalidMeld {
                message: format!("event {:?} does not expose a meld", other),
            }),
        }
    }

    /// Extends this pon into a kakan with `added` on top, keeping the
    /// parent's tile order and source seat.
    pub fn add_kan(&self, added: Tile) -> ViewResult<Self> {
        if self.kind != MeldKind::Pon {
            return Err(ViewError::InvalidMeld {
                message: format!("cannot add a tile to {:?}", self.kind),
            });
        }
        let mut tiles = self.tiles.clone();
        tiles.push(added);
        Ok(Self::new(MeldKind::Kakan, tiles, self.source_seat_offset))
    }

    /// True if the tile count matches the kind.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.tiles.len() == self.kind.tile_count()
    }

    /// The tile taken from an opponent, if the meld has one.
    pub fn stolen_tile(&self) -> Option<Tile> {
        match self.kind {
            MeldKind::Chi | MeldKind::Pon | MeldKind::Daiminkan => self.tiles.last().copied(),
            MeldKind::Kakan => self.tiles.get(2).copied(),
            MeldKind::Ankan => None,
        }
    }
}

fn with_called(consumed: &[Tile], called: Tile) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(consumed.len() + 1);
    tiles.extend_from_slice(consumed);
    tiles.push(called);
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Tile {
        Tile::from_mjai(s)
    }

    #[test]
    fn relative_seat_wraps() {
        assert_eq!(relative_seat(1, 0), 1);
        assert_eq!(relative_seat(2, 0), 2);
        assert_eq!(relative_seat(3, 0), 3);
        assert_eq!(relative_seat(0, 1), 3);
        assert_eq!(relative_seat(0, 3), 1);
        assert_eq!(relative_seat(2, 2), 0);
    }

    #[test]
    fn chi_from_event_puts_called_tile_last() {
        let ev = MjaiEvent::Chi {
            actor: 1,
            target: 0,
            pai: t("3m"),
            consumed: [t("4m"), t("5m")],
        };
        let meld = Meld::from_mjai(&ev).unwrap();
        assert_eq!(meld.kind, MeldKind::Chi);
        assert_eq!(meld.tiles, vec![t("4m"), t("5m"), t("3m")]);
        assert_eq!(meld.source_seat_offset, 3);
        assert_eq!(meld.stolen_tile(), Some(t("3m")));
        assert!(meld.is_well_formed());
    }

    #[test]
    fn ankan_from_event_has_no_stolen_tile() {
        let ev = MjaiEvent::Ankan {
            actor: 0,
            consumed: [t("E"), t("E"), t("E"), t("E")],
        };
        let meld = Meld::from_mjai(&ev).unwrap();
        assert_eq!(meld.kind, MeldKind::Ankan);
        assert_eq!(meld.stolen_tile(), None);
        assert!(meld.is_well_formed());
    }

    #[test]
    fn kakan_event_is_rejected() {
        let ev = MjaiEvent::Kakan {
            actor: 0,
            pai: t("P"),
            consumed: [t("P"), t("P"), t("P")],
        };
        assert!(matches!(Meld::from_mjai(&ev), Err(ViewError::InvalidMeld { .. })));
        assert!(Meld::from_mjai(&MjaiEvent::Other).is_err());
    }

    #[test]
    fn add_kan_keeps_parent_order_and_offset() {
        let pon = Meld::new(MeldKind::Pon, vec![t("5p"), t("5p"), t("5pr")], 2);
        let kan = pon.add_kan(t("5p")).unwrap();
        assert_eq!(kan.kind, MeldKind::Kakan);
        assert_eq!(kan.tiles, vec![t("5p"), t("5p"), t("5pr"), t("5p")]);
        assert_eq!(kan.source_seat_offset, 2);
        assert_eq!(kan.stolen_tile(), Some(t("5pr")));
    }

    #[test]
    fn add_kan_requires_a_pon() {
        let chi = Meld::new(MeldKind::Chi, vec![t("1s"), t("2s"), t("3s")], 3);
        assert!(chi.add_kan(t("3s")).is_err());
    }

    #[test]
    fn tile_counts() {
        assert_eq!(MeldKind::Chi.tile_count(), 3);
        assert_eq!(MeldKind::Pon.tile_count(), 3);
        assert_eq!(MeldKind::Daiminkan.tile_count(), 4);
        assert_eq!(MeldKind::Ankan.tile_count(), 4);
        assert_eq!(MeldKind::Kakan.tile_count(), 4);
        let short = Meld::new(MeldKind::Pon, vec![t("1z")], 1);
        assert!(!short.is_well_formed());
    }

    #[test]
    fn meld_json_shape() {
        let meld: Meld = serde_json::from_str(
            r#"{"kind":"daiminkan","tiles":["C","C","C","C"],"source_seat_offset":2}"#,
        )
        .unwrap();
        assert_eq!(meld.kind, MeldKind::Daiminkan);
        assert_eq!(meld.tiles.len(), 4);
        assert_eq!(meld.source_seat_offset, 2);

        let ankan: Meld = serde_json::from_str(r#"{"kind":"ankan","tiles":["1m","1m","1m","1m"]}"#)
            .unwrap();
        assert_eq!(ankan.source_seat_offset, 0);
    }
}
