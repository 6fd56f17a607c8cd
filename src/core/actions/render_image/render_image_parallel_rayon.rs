use rayon::prelude::*;

use crate::core::actions::render_image::ports::colour_map::ColourMap;
use crate::core::actions::render_image::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_image::render_row::render_row;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

/// Renders every pixel in parallel using rayon's work-stealing scheduler.
///
/// The buffer is split into one disjoint mutable slice per row before the
/// parallel section starts, so each worker writes only its own rows and no
/// locking is needed. Output does not depend on the number of workers.
pub fn render_image_parallel_rayon<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, PixelBufferError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Output> + Sync,
{
    let viewport = algorithm.viewport();
    let mut pixel_buffer = PixelBuffer::try_new(viewport.width(), viewport.height())?;
    let row_size = pixel_buffer.row_size();

    pixel_buffer
        .buffer_mut()
        .par_chunks_exact_mut(row_size)
        .enumerate()
        .for_each(|(y, row)| {
            // y < height, which came from a u32
            render_row(y as u32, row, algorithm, colour_map);
        });

    Ok(pixel_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_image::render_image_serial::render_image_serial;
    use crate::core::actions::render_image::test_support::{StubAlgorithm, StubColourMap};
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubAlgorithm::new(11, 9);

        let serial = render_image_serial(&algorithm, &StubColourMap).unwrap();
        let parallel = render_image_parallel_rayon(&algorithm, &StubColourMap).unwrap();

        assert_eq!(parallel.buffer(), serial.buffer());
    }

    #[test]
    fn test_rayon_writes_every_byte() {
        let algorithm = StubAlgorithm::new(37, 23);

        let pixel_buffer = render_image_parallel_rayon(&algorithm, &StubColourMap).unwrap();

        assert_eq!(pixel_buffer.buffer_size(), 37 * 23 * 3);
        assert!(pixel_buffer.buffer().iter().all(|&byte| byte != 0));
    }

    #[test]
    fn test_rayon_places_pixels_row_major() {
        let algorithm = StubAlgorithm::new(5, 4);

        let pixel_buffer = render_image_parallel_rayon(&algorithm, &StubColourMap).unwrap();

        assert_eq!(
            pixel_buffer.pixel(Point { x: 3, y: 2 }),
            Some(Colour { r: 4, g: 3, b: 255 })
        );
        assert_eq!(&pixel_buffer.buffer()[(2 * 5 + 3) * 3..(2 * 5 + 3) * 3 + 3], &[4, 3, 255]);
    }

    #[test]
    fn test_rayon_with_smallest_dimensions() {
        let algorithm = StubAlgorithm::new(1, 1);

        let pixel_buffer = render_image_parallel_rayon(&algorithm, &StubColourMap).unwrap();

        assert_eq!(pixel_buffer.buffer(), &[1, 1, 255]);
    }

    #[test]
    fn test_rayon_output_independent_of_worker_count() {
        let algorithm = StubAlgorithm::new(64, 48);
        let render_with = |threads: usize| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap()
                .install(|| render_image_parallel_rayon(&algorithm, &StubColourMap).unwrap())
        };

        let single = render_with(1);
        let many = render_with(4);

        assert_eq!(single.buffer(), many.buffer());
    }
}
