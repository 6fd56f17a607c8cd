//! Python extension module, built with `--features python`.
//!
//! ```python
//! import deep_mandelbrot
//! rgb = deep_mandelbrot.mandelbrot_set(800, 600, 256, -0.5, 0.0, 1.0)
//! ```

use pyo3::exceptions::{PyMemoryError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::controllers::render::{RenderError, render_viewport};
use crate::core::data::viewport::Viewport;

impl From<RenderError> for PyErr {
    fn from(err: RenderError) -> Self {
        match &err {
            RenderError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
            RenderError::OutOfMemory(_) => PyMemoryError::new_err(err.to_string()),
        }
    }
}

/// Renders the Mandelbrot set and returns `width * height * 3` raw RGB bytes.
///
/// Raises `ValueError` for out-of-range arguments and `MemoryError` when the
/// image cannot be allocated. The GIL is released while rendering.
#[pyfunction]
fn mandelbrot_set<'py>(
    py: Python<'py>,
    width: i64,
    height: i64,
    max_iter: i64,
    center_r: f64,
    center_i: f64,
    zoom: f64,
) -> PyResult<Bound<'py, PyBytes>> {
    let viewport = Viewport::from_host_args(width, height, max_iter, center_r, center_i, zoom)
        .map_err(RenderError::from)?;

    let pixel_buffer = py.allow_threads(|| render_viewport(viewport))?;

    Ok(PyBytes::new(py, pixel_buffer.buffer()))
}

#[pymodule]
fn deep_mandelbrot(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mandelbrot_set, m)?)?;
    Ok(())
}
