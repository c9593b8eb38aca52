//! Discard pile (river) layout.

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::face::{resolve, Face};
use crate::tile::Tile;

/// One discard as recorded by the replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discard {
    pub tile: Tile,
    /// Riichi was declared with this discard.
    #[serde(default)]
    pub riichi: bool,
    /// The discard was the tile just drawn.
    #[serde(default)]
    pub tsumogiri: bool,
}

impl Discard {
    pub fn new(tile: Tile) -> Self {
        Self {
            tile,
            riichi: false,
            tsumogiri: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiverTile {
    pub face: Face,
    pub rotated: bool,
    pub dimmed: bool,
}

impl From<&Discard> for RiverTile {
    fn from(d: &Discard) -> Self {
        Self {
            face: resolve(d.tile),
            rotated: d.riichi,
            dimmed: d.tsumogiri,
        }
    }
}

/// Discards split into rows, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RiverLayout {
    pub rows: Vec<Vec<RiverTile>>,
}

impl RiverLayout {
    /// Always yields `config.river_rows` rows, some possibly empty. Rows
    /// before the last hold `config.river_row_len` discards each and the last
    /// row takes the overflow.
    pub fn new(discards: &[Discard], config: &ViewConfig) -> Self {
        let row_len = config.river_row_len.max(1);
        let num_rows = config.river_rows.max(1);
        let mut rows = vec![Vec::new(); num_rows];
        for (idx, d) in discards.iter().enumerate() {
            let row = (idx / row_len).min(num_rows - 1);
            rows[row].push(RiverTile::from(d));
        }
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }
}
