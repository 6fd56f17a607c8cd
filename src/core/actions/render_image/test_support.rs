use crate::core::actions::render_image::ports::colour_map::ColourMap;
use crate::core::actions::render_image::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

#[derive(Debug)]
pub(crate) struct StubAlgorithm {
    viewport: Viewport,
}

impl StubAlgorithm {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height, 1, 0.0, 0.0, 1.0).unwrap(),
        }
    }
}

impl FractalAlgorithm for StubAlgorithm {
    type Output = Point;

    fn compute(&self, pixel: Point) -> Self::Output {
        pixel
    }

    fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

/// Encodes the pixel position into the colour and never produces a zero byte.
#[derive(Debug)]
pub(crate) struct StubColourMap;

impl ColourMap<Point> for StubColourMap {
    fn map(&self, pixel: Point) -> Colour {
        Colour {
            r: (pixel.x % 255) as u8 + 1,
            g: (pixel.y % 255) as u8 + 1,
            b: 255,
        }
    }
}
