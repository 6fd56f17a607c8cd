use crate::core::actions::render_image::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Number of full gradient cycles across the normalized iteration range.
pub const BANDS_PER_RANGE: f64 = 20.0;

/// Cyclic dark blue → light blue → white → yellow → orange gradient over
/// smoothed iteration counts.
#[derive(Debug)]
pub struct MandelbrotBandGradient {
    max_iterations: u32,
}

impl ColourMap<f64> for MandelbrotBandGradient {
    fn map(&self, smooth_iterations: f64) -> Colour {
        let max_iterations = f64::from(self.max_iterations);

        // the evaluator returns exactly max_iterations for points that never escaped
        if smooth_iterations == max_iterations {
            return Colour::BLACK;
        }

        colour_of(smooth_iterations / max_iterations)
    }
}

impl MandelbrotBandGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

/// Colour for a normalized iteration count `t`.
#[must_use]
pub fn colour_of(t: f64) -> Colour {
    band_colour((t * BANDS_PER_RANGE) % 1.0)
}

/// Colour at position `u` in `[0, 1)` within a single band. Channels are
/// truncated, never rounded.
#[must_use]
pub fn band_colour(u: f64) -> Colour {
    let (r, g, b) = if u < 0.16 {
        let v = u / 0.16;
        (0.0, 150.0 * v, 255.0 * (0.5 + 0.5 * v))
    } else if u < 0.42 {
        let v = (u - 0.16) / 0.26;
        (255.0 * v, 150.0 + 105.0 * v, 255.0)
    } else if u < 0.6425 {
        let v = (u - 0.42) / 0.2225;
        (255.0, 255.0, 255.0 * (1.0 - v))
    } else if u < 0.8575 {
        let v = (u - 0.6425) / 0.215;
        (255.0, 255.0 * (1.0 - 0.4 * v), 0.0)
    } else {
        let v = (u - 0.8575) / 0.1425;
        (255.0 * (1.0 - v), 153.0 * (1.0 - v), 128.0 * v)
    };

    Colour {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}
