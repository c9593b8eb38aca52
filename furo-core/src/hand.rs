//! Closed hand plus exposed melds of one player.

use serde::Serialize;

use crate::config::ViewConfig;
use crate::face::{resolve, Face};
use crate::layout::{layout, MeldSlot};
use crate::meld::Meld;
use crate::tile::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandTile {
    pub face: Face,
    /// Drawn apart from the tiles before it (the fresh draw).
    pub gap_before: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HandLayout {
    /// Closed tiles, left to right.
    pub tiles: Vec<HandTile>,
    /// Meld layouts in declaration order. The first meld sits rightmost.
    pub melds: Vec<Vec<MeldSlot>>,
}

impl HandLayout {
    pub fn new(hand: &[Tile], melds: &[Meld], actor: u8, config: &ViewConfig) -> Self {
        let drawn = config.separate_tsumo && holds_drawn_tile(hand.len(), melds.len());
        let last = hand.len().saturating_sub(1);
        let tiles = hand
            .iter()
            .enumerate()
            .map(|(idx, &t)| HandTile {
                face: resolve(t),
                gap_before: drawn && idx == last,
            })
            .collect();
        let melds = melds
            .iter()
            .map(|m| layout(m, actor).iter().map(MeldSlot::from).collect())
            .collect();
        Self { tiles, melds }
    }

    /// Index of the tile set apart as the fresh draw, if any.
    pub fn drawn_index(&self) -> Option<usize> {
        self.tiles.iter().position(|t| t.gap_before)
    }
}

/// Every meld stands for three tiles of the 13-tile hand; a 14th means the
/// player is holding a fresh draw.
#[inline]
fn holds_drawn_tile(closed: usize, melds: usize) -> bool {
    (closed + melds * 3) % 3 == 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meld::MeldKind;

    fn tiles(names: &[&str]) -> Vec<Tile> {
        names.iter().map(|s| Tile::from_mjai(s)).collect()
    }

    #[test]
    fn thirteen_tiles_have_no_gap() {
        let hand = tiles(&["1m"; 13]);
        let layout = HandLayout::new(&hand, &[], 0, &ViewConfig::default());
        assert_eq!(layout.drawn_index(), None);
        assert_eq!(layout.tiles.len(), 13);
    }

    #[test]
    fn fourteenth_tile_is_set_apart() {
        let hand = tiles(&["2p"; 14]);
        let layout = HandLayout::new(&hand, &[], 0, &ViewConfig::default());
        assert_eq!(layout.drawn_index(), Some(13));
    }

    #[test]
    fn melds_count_towards_the_draw() {
        let pon = Meld::new(MeldKind::Pon, tiles(&["E", "E", "E"]), 1);
        let hand = tiles(&["3s"; 11]);
        let layout = HandLayout::new(&hand, &[pon.clone()], 2, &ViewConfig::default());
        assert_eq!(layout.drawn_index(), Some(10));
        assert_eq!(layout.melds.len(), 1);
        assert_eq!(
            layout.melds[0][2],
            MeldSlot {
                faces: vec![Face::Front(Tile::from_mjai("E"))],
                rotated: true,
            }
        );

        let hand = tiles(&["3s"; 10]);
        let layout = HandLayout::new(&hand, &[pon], 2, &ViewConfig::default());
        assert_eq!(layout.drawn_index(), None);
    }

    #[test]
    fn compact_config_keeps_draw_flush() {
        let hand = tiles(&["2p"; 14]);
        let layout = HandLayout::new(&hand, &[], 0, &ViewConfig::default_compact());
        assert_eq!(layout.drawn_index(), None);
    }

    #[test]
    fn hidden_hand_renders_backs_and_blanks() {
        let hand = tiles(&["back", "?"]);
        let layout = HandLayout::new(&hand, &[], 3, &ViewConfig::default());
        assert_eq!(layout.tiles[0].face, Face::Back);
        assert_eq!(layout.tiles[1].face, Face::Blank);
        assert!(HandLayout::new(&[], &[], 0, &ViewConfig::default()).tiles.is_empty());
    }

    #[test]
    fn ankan_json_exposes_only_backs_on_the_outside() {
        let ankan = Meld::new(MeldKind::Ankan, tiles(&["C", "C", "C", "C"]), 0);
        let layout = HandLayout::new(&tiles(&["1m"; 10]), &[ankan], 0, &ViewConfig::default());
        let json = serde_json::to_value(&layout).unwrap();
        let slots = json["melds"][0].as_array().unwrap();
        assert_eq!(slots.len(), 4);
        for outer in [&slots[0], &slots[3]] {
            assert_eq!(outer["faces"], serde_json::json!([{"face": "back"}]));
            assert_eq!(outer["rotated"], false);
        }
        assert_eq!(slots[1]["faces"], serde_json::json!([{"face": "front", "tile": "C"}]));
        assert!(!json.to_string().contains("face_down"));
    }
}
