//! Mandelbrot rendering at extended (113-bit) precision.
//!
//! Every pixel is mapped onto the complex plane and iterated with quad-like
//! precision, so deep zooms keep neighbouring pixels distinct long after
//! `f64` coordinates would collapse. Escape counts are smoothed and coloured
//! with a cyclic band gradient, and the result is a raw row-major RGB buffer.
//!
//! ```no_run
//! let rgb = deep_mandelbrot::render(800, 600, 256, -0.5, 0.0, 1.0)?;
//! assert_eq!(rgb.len(), 800 * 600 * 3);
//! # Ok::<(), deep_mandelbrot::RenderError>(())
//! ```

mod controllers;
mod core;
#[cfg(feature = "python")]
mod python;
mod storage;

pub use controllers::render::{RenderError, render, render_viewport};
pub use crate::core::actions::render_image::ports::colour_map::ColourMap;
pub use crate::core::actions::render_image::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_image::render_image_parallel_rayon::render_image_parallel_rayon;
pub use crate::core::actions::render_image::render_image_serial::render_image_serial;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::extended_complex::ExtendedComplex;
pub use crate::core::data::extended_real::{EXTENDED_PRECISION_BITS, ExtendedReal};
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{
    ESCAPE_RADIUS, MandelbrotAlgorithm, escape_radius_squared, evaluate,
};
pub use crate::core::fractals::mandelbrot::colour_maps::band_gradient::{
    BANDS_PER_RANGE, MandelbrotBandGradient, band_colour, colour_of,
};
pub use crate::core::util::pixel_to_complex_coords::{BASE_VIEW_RADIUS, PixelToComplexCoords};
pub use storage::write_raw_rgb::write_raw_rgb;
