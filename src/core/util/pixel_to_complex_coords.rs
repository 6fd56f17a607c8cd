use crate::core::data::extended_complex::ExtendedComplex;
use crate::core::data::extended_real::ExtendedReal;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Half-extent of the plane visible at zoom 1.
pub const BASE_VIEW_RADIUS: f64 = 2.0;

/// The viewport's pixel-to-plane map, with its constants lifted to extended
/// precision once so the per-pixel work is only extended arithmetic.
#[derive(Debug, Clone)]
pub struct PixelToComplexCoords {
    half_width: ExtendedReal,
    half_height: ExtendedReal,
    base_radius: ExtendedReal,
    inverse_zoom: ExtendedReal,
    center: ExtendedComplex,
}

impl PixelToComplexCoords {
    #[must_use]
    pub fn new(viewport: &Viewport) -> Self {
        // integer halving: odd sizes shift the origin half a pixel right/down
        let half_width = viewport.width() / 2;
        let half_height = viewport.height() / 2;

        Self {
            half_width: ExtendedReal::from(half_width),
            half_height: ExtendedReal::from(half_height),
            base_radius: ExtendedReal::from(BASE_VIEW_RADIUS),
            inverse_zoom: ExtendedReal::from(1.0 / viewport.zoom()),
            center: ExtendedComplex::from_f64(viewport.center_real(), viewport.center_imag()),
        }
    }

    #[must_use]
    pub fn map(&self, pixel: Point) -> ExtendedComplex {
        let real = self.map_axis(pixel.x, &self.half_width, &self.center.real);
        let imag = self.map_axis(pixel.y, &self.half_height, &self.center.imag);

        ExtendedComplex::new(real, imag)
    }

    fn map_axis(&self, position: u32, half_extent: &ExtendedReal, center: &ExtendedReal) -> ExtendedReal {
        let offset = ExtendedReal::from(position) - half_extent;
        let base = (offset / half_extent) * &self.base_radius;

        base * &self.inverse_zoom + center
    }
}
