use crate::core::actions::render_image::ports::colour_map::ColourMap;
use crate::core::actions::render_image::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_image::render_row::render_row;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

/// Single-threaded reference renderer, byte-identical to
/// [`render_image_parallel_rayon`](super::render_image_parallel_rayon::render_image_parallel_rayon).
pub fn render_image_serial<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, PixelBufferError>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Output>,
{
    let viewport = algorithm.viewport();
    let mut pixel_buffer = PixelBuffer::try_new(viewport.width(), viewport.height())?;
    let row_size = pixel_buffer.row_size();

    for (y, row) in (0..).zip(pixel_buffer.buffer_mut().chunks_exact_mut(row_size)) {
        render_row(y, row, algorithm, colour_map);
    }

    Ok(pixel_buffer)
}
