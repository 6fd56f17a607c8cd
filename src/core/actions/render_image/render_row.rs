use crate::core::actions::render_image::ports::colour_map::ColourMap;
use crate::core::actions::render_image::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::data::point::Point;

/// Fills one row of RGB bytes. Reads nothing but `algorithm` and
/// `colour_map`, so rows can be rendered in any order.
pub(crate) fn render_row<Alg, CMap>(y: u32, row: &mut [u8], algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Output>,
{
    for (x, pixel) in (0..).zip(row.chunks_exact_mut(BYTES_PER_PIXEL)) {
        let value = algorithm.compute(Point { x, y });

        pixel.copy_from_slice(&colour_map.map(value).to_bytes());
    }
}
