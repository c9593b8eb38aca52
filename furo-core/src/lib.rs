//! Furo board layout
//!
//! Turns riichi mahjong replay snapshots into render-ready layouts:
//! which face each tile shows, how called sets (furo) are arranged and
//! rotated, and how hands and discard rivers sit around the table.
//! Everything here is a pure function of its inputs.

pub mod board;
pub mod config;
pub mod errors;
pub mod face;
pub mod hand;
pub mod layout;
pub mod meld;
pub mod mjai;
pub mod river;
pub mod tile;

pub use face::{resolve, Face};
pub use layout::{layout, Slot};
pub use meld::{Meld, MeldKind};
pub use tile::Tile;
