//! Python bindings for the furo board layout.

use pyo3::prelude::*;

mod view;

#[pymodule]
fn _furo(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<view::FuroLayout>()?;
    m.add_function(wrap_pyfunction!(view::layout_meld, m)?)?;
    m.add_function(wrap_pyfunction!(view::tile_face, m)?)?;
    Ok(())
}
