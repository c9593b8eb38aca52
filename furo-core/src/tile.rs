//! Tile tokens shown by the viewer.
//!
//! Covers the 34 tile kinds, the three red fives (aka-dora) and two
//! display-only sentinels: a face-down tile and an unknown/blank tile.
//! On the wire every token uses its MJAI spelling ("1m", "E", "5mr", ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ViewError, ViewResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of tiles per suited category (1-9).
pub const NUM_SUIT_TILES: usize = 9;

/// First honor tile kind index.
pub const JIHAI_START: u8 = 27;

/// Extended indices for the red fives.
pub const AKA_MANZU: u8 = 34;
pub const AKA_PINZU: u8 = 35;
pub const AKA_SOUZU: u8 = 36;

const BACK_ID: u8 = 37;
const UNKNOWN_ID: u8 = 38;

/// Number of token ids, sentinels included.
pub const NUM_TOKENS: usize = 39;

/// MJAI spellings indexed by token id.
const MJAI_NAMES: [&str; NUM_TOKENS] = [
    "1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m", // m
    "1p", "2p", "3p", "4p", "5p", "6p", "7p", "8p", "9p", // p
    "1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", // s
    "E", "S", "W", "N", "P", "F", "C", // z
    "5mr", "5pr", "5sr",  // aka
    "back", // face-down
    "?",    // unknown
];

// ---------------------------------------------------------------------------
// Suit
// ---------------------------------------------------------------------------

/// The four tile categories in Riichi Mahjong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Manzu,
    Pinzu,
    Souzu,
    Jihai,
}

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// A tile token. Wraps a `u8` id in the range 0-38.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u8);

impl Tile {
    /// Tile displayed face-down (concealed-in-display).
    pub const BACK: Tile = Tile(BACK_ID);
    /// Fallback for tokens outside the known vocabulary.
    pub const UNKNOWN: Tile = Tile(UNKNOWN_ID);

    /// Creates a `Tile` if `id` is in range 0..39.
    #[inline]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < NUM_TOKENS {
            Some(Tile(id))
        } else {
            None
        }
    }

    /// Raw numeric id (0-38).
    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// True for the 34 kinds and the red fives, false for sentinels.
    #[inline]
    pub const fn is_playable(self) -> bool {
        self.0 <= AKA_SOUZU
    }

    #[inline]
    pub const fn is_back(self) -> bool {
        self.0 == BACK_ID
    }

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == UNKNOWN_ID
    }

    #[inline]
    pub const fn is_aka(self) -> bool {
        matches!(self.0, AKA_MANZU | AKA_PINZU | AKA_SOUZU)
    }

    /// Strips the red flag (5mr -> 5m). Everything else passes through.
    #[inline]
    pub const fn deaka(self) -> Self {
        match self.0 {
            AKA_MANZU => Tile(4),
            AKA_PINZU => Tile(13),
            AKA_SOUZU => Tile(22),
            _ => self,
        }
    }

    /// Which suit this tile belongs to, or `None` for sentinels.
    #[inline]
    pub const fn suit(self) -> Option<Suit> {
        if !self.is_playable() {
            return None;
        }
        Some(match self.deaka().0 {
            0..9 => Suit::Manzu,
            9..18 => Suit::Pinzu,
            18..27 => Suit::Souzu,
            _ => Suit::Jihai,
        })
    }

    /// 1-based number within the suit (1-9), or `None` for honors and sentinels.
    #[inline]
    pub const fn number(self) -> Option<u8> {
        let base = self.deaka().0;
        if base < JIHAI_START {
            Some((base % NUM_SUIT_TILES as u8) + 1)
        } else {
            None
        }
    }

    /// MJAI spelling of this token.
    #[inline]
    pub fn as_mjai(self) -> &'static str {
        MJAI_NAMES[self.0 as usize]
    }

    /// Lenient conversion from an MJAI token. Anything unrecognized becomes
    /// [`Tile::UNKNOWN`] so a malformed log still renders.
    pub fn from_mjai(s: &str) -> Tile {
        match s.parse() {
            Ok(tile) => tile,
            Err(_) => {
                log::debug!("unrecognized tile token {s:?}, rendering as blank");
                Tile::UNKNOWN
            }
        }
    }
}

impl FromStr for Tile {
    type Err = ViewError;

    fn from_str(s: &str) -> ViewResult<Self> {
        MJAI_NAMES
            .iter()
            .position(|&name| name == s)
            .map(|id| Tile(id as u8))
            .ok_or_else(|| ViewError::Parse {
                input: s.to_string(),
                message: "not a valid tile".to_string(),
            })
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({}={})", self.0, self.as_mjai())
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mjai())
    }
}

impl Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Tile::from_mjai(&s))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
