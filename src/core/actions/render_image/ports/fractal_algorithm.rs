use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, pixel: Point) -> Self::Output;

    fn viewport(&self) -> &Viewport;
}
