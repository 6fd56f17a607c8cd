use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::debug;

use crate::core::actions::render_image::render_image_parallel_rayon::render_image_parallel_rayon;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::band_gradient::MandelbrotBandGradient;

/// Failures surfaced to the host. Both are fatal to the render call and no
/// partial image is ever returned.
#[derive(Debug)]
pub enum RenderError {
    InvalidArgument(ViewportError),
    OutOfMemory(PixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {}", err),
            Self::OutOfMemory(err) => write!(f, "out of memory: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::OutOfMemory(err) => Some(err),
        }
    }
}

impl From<ViewportError> for RenderError {
    fn from(err: ViewportError) -> Self {
        Self::InvalidArgument(err)
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::OutOfMemory(err)
    }
}

/// Renders `viewport` with the band gradient into a freshly allocated buffer.
pub fn render_viewport(viewport: Viewport) -> Result<PixelBuffer, RenderError> {
    debug!(
        "rendering {}x{} around ({}, {}) at zoom {} with {} max iterations",
        viewport.width(),
        viewport.height(),
        viewport.center_real(),
        viewport.center_imag(),
        viewport.zoom(),
        viewport.max_iterations()
    );

    let start = Instant::now();
    let algorithm = MandelbrotAlgorithm::new(viewport);
    let colour_map = MandelbrotBandGradient::new(viewport.max_iterations());
    let pixel_buffer = render_image_parallel_rayon(&algorithm, &colour_map)?;

    debug!(
        "rendered {} bytes in {:?}",
        pixel_buffer.buffer_size(),
        start.elapsed()
    );

    Ok(pixel_buffer)
}

/// Host entry point: validates the six scalars, renders, and hands back the
/// raw row-major RGB bytes (`width * height * 3` of them, no header).
pub fn render(
    width: u32,
    height: u32,
    max_iterations: u32,
    center_real: f64,
    center_imag: f64,
    zoom: f64,
) -> Result<Vec<u8>, RenderError> {
    let viewport = Viewport::new(width, height, max_iterations, center_real, center_imag, zoom)?;

    Ok(render_viewport(viewport)?.into_data())
}
