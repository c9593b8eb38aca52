//! Tile identity lookup: which face a token is drawn with.

use serde::Serialize;

use crate::tile::Tile;

/// Sprite key of the tile front background.
pub const FRONT_SPRITE: &str = "front";
/// Sprite key of the tile back.
pub const BACK_SPRITE: &str = "back";
/// Sprite key of the generic placeholder glyph.
pub const BLANK_SPRITE: &str = "blank";

/// A renderable tile face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "face", content = "tile", rename_all = "snake_case")]
pub enum Face {
    /// The back of a tile.
    Back,
    /// Front background with the tile's own glyph.
    Front(Tile),
    /// Front background with a generic placeholder glyph.
    Blank,
}

impl Face {
    /// Atlas key of the glyph that identifies this face.
    pub fn sprite_key(self) -> &'static str {
        match self {
            Face::Back => BACK_SPRITE,
            Face::Front(tile) => tile.as_mjai(),
            Face::Blank => BLANK_SPRITE,
        }
    }

    /// Background sprite and optional foreground glyph, bottom to top.
    pub fn layers(self) -> (&'static str, Option<&'static str>) {
        match self {
            Face::Back => (BACK_SPRITE, None),
            Face::Front(_) | Face::Blank => (FRONT_SPRITE, Some(self.sprite_key())),
        }
    }
}

/// Resolves a token to its face. Never fails: sentinels and anything outside
/// the playable vocabulary fall back to the back or the blank face.
#[inline]
pub fn resolve(tile: Tile) -> Face {
    if tile.is_back() {
        Face::Back
    } else if tile.is_playable() {
        Face::Front(tile)
    } else {
        Face::Blank
    }
}

/// Resolves a raw MJAI token.
pub fn resolve_mjai(token: &str) -> Face {
    resolve(Tile::from_mjai(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_always_resolves_to_back() {
        assert_eq!(resolve(Tile::BACK), Face::Back);
        assert_eq!(resolve_mjai("back"), Face::Back);
        assert_eq!(Face::Back.layers(), ("back", None));
    }

    #[test]
    fn known_tiles_resolve_to_front() {
        let face = resolve_mjai("5pr");
        assert_eq!(face, Face::Front(Tile::from_mjai("5pr")));
        assert_eq!(face.sprite_key(), "5pr");
        assert_eq!(face.layers(), ("front", Some("5pr")));
    }

    #[test]
    fn unknown_tokens_resolve_to_blank() {
        for token in ["?", "", "0z", "11m", "BACK"] {
            assert_eq!(resolve_mjai(token), Face::Blank, "token {token:?}");
        }
        assert_eq!(Face::Blank.layers(), ("front", Some("blank")));
    }

    #[test]
    fn every_playable_tile_has_its_own_glyph() {
        for id in 0..37u8 {
            let tile = Tile::new(id).unwrap();
            assert_eq!(resolve(tile).sprite_key(), tile.as_mjai());
        }
    }
}
