//! Layout entry points for Python.
//!
//! Tiles go in and come out as MJAI strings; boards go in and come out as
//! JSON so the replay side can stay in Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use furo_core::board::{BoardSnapshot, BoardView};
use furo_core::config::ViewConfig;
use furo_core::errors::ViewError;
use furo_core::face::resolve_mjai;
use furo_core::layout::layout;
use furo_core::meld::{Meld, MeldKind};
use furo_core::tile::Tile;

/// One slot as seen from Python: sprite keys bottom to top, rotated flag.
type PySlot = (Vec<&'static str>, bool);

fn to_py_err(err: ViewError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_kind(kind: &str) -> PyResult<MeldKind> {
    match kind {
        "chi" => Ok(MeldKind::Chi),
        "pon" => Ok(MeldKind::Pon),
        "daiminkan" => Ok(MeldKind::Daiminkan),
        "ankan" => Ok(MeldKind::Ankan),
        "kakan" => Ok(MeldKind::Kakan),
        other => Err(PyValueError::new_err(format!("unknown meld kind: {other}"))),
    }
}

/// Layout engine with a fixed view configuration.
#[pyclass]
pub struct FuroLayout {
    config: ViewConfig,
}

#[pymethods]
impl FuroLayout {
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(text) => ViewConfig::from_json(text).map_err(to_py_err)?,
            None => ViewConfig::default(),
        };
        Ok(Self { config })
    }

    /// Same as the module-level `layout_meld` function.
    #[pyo3(name = "layout_meld", signature = (kind, tiles, source_seat_offset=0, actor=0))]
    fn layout_meld_method(
        &self,
        kind: &str,
        tiles: Vec<String>,
        source_seat_offset: u8,
        actor: u8,
    ) -> PyResult<Vec<PySlot>> {
        layout_meld(kind, tiles, source_seat_offset, actor)
    }

    /// Lays out a whole board snapshot (JSON) seen from `viewpoint`.
    fn board(&self, snapshot_json: &str, viewpoint: u8) -> PyResult<String> {
        let snapshot = BoardSnapshot::from_json(snapshot_json).map_err(to_py_err)?;
        let view = BoardView::new(&snapshot, viewpoint, &self.config);
        serde_json::to_string(&view)
            .map_err(ViewError::from)
            .map_err(to_py_err)
    }

    #[getter]
    fn river_row_len(&self) -> usize {
        self.config.river_row_len
    }

    #[getter]
    fn river_rows(&self) -> usize {
        self.config.river_rows
    }

    #[getter]
    fn separate_tsumo(&self) -> bool {
        self.config.separate_tsumo
    }
}

/// Lays out one meld owned by `actor`. Layout does not depend on the view
/// configuration.
#[pyfunction]
#[pyo3(signature = (kind, tiles, source_seat_offset=0, actor=0))]
pub fn layout_meld(
    kind: &str,
    tiles: Vec<String>,
    source_seat_offset: u8,
    actor: u8,
) -> PyResult<Vec<PySlot>> {
    let kind = parse_kind(kind)?;
    let tiles = tiles.iter().map(|s| Tile::from_mjai(s)).collect();
    let meld = Meld::new(kind, tiles, source_seat_offset);
    Ok(layout(&meld, actor)
        .iter()
        .map(|slot| {
            let keys = slot.faces().into_iter().map(|f| f.sprite_key()).collect();
            (keys, slot.is_rotated())
        })
        .collect())
}

/// Sprite key for an MJAI tile token ("back" and "blank" for sentinels).
#[pyfunction]
pub fn tile_face(token: &str) -> &'static str {
    resolve_mjai(token).sprite_key()
}
