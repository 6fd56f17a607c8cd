use crate::core::actions::render_image::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::extended_complex::ExtendedComplex;
use crate::core::data::extended_real::ExtendedReal;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoords;

/// Orbits that leave this radius are known to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;

// Points far outside the radius escape on the first step with a correction
// above 1; their count is floored here so it stays positive.
const SMALLEST_SMOOTH_ITERATIONS: f64 = f64::MIN_POSITIVE;

#[must_use]
pub fn escape_radius_squared() -> ExtendedReal {
    ExtendedReal::from(ESCAPE_RADIUS * ESCAPE_RADIUS)
}

/// Runs the escape-time iteration `z -> z² + c` from `z = 0`.
///
/// Returns a smoothed iteration count in `(0, max_iterations)` for points
/// that escape `radius_squared`, or exactly `max_iterations` for points that
/// do not escape within the bound.
#[must_use]
pub fn evaluate(c: &ExtendedComplex, max_iterations: u32, radius_squared: &ExtendedReal) -> f64 {
    let mut z = ExtendedComplex::zero();

    for iteration in 0..max_iterations {
        z = &z.square() + c;

        let magnitude_squared = z.magnitude_squared();
        if magnitude_squared > *radius_squared {
            return smooth_iterations(iteration, &magnitude_squared);
        }
    }

    f64::from(max_iterations)
}

fn smooth_iterations(iteration: u32, magnitude_squared: &ExtendedReal) -> f64 {
    let ln_two = ExtendedReal::ln_two();

    // ln|z|, from |z|² without a square root
    let log_zn = magnitude_squared.ln() / ExtendedReal::from(2.0);
    let nu = (log_zn / &ln_two).ln() / &ln_two;

    let ceiling = f64::from(iteration) + 1.0;
    let smooth = ceiling - nu.to_f64();

    // nu > 0 after escape, but narrowing a tiny nu can round it away
    smooth.clamp(SMALLEST_SMOOTH_ITERATIONS, ceiling - ceiling * f64::EPSILON)
}

#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    coords: PixelToComplexCoords,
    radius_squared: ExtendedReal,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = f64;

    fn compute(&self, pixel: Point) -> Self::Output {
        let c = self.coords.map(pixel);

        evaluate(&c, self.viewport.max_iterations(), &self.radius_squared)
    }

    fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            coords: PixelToComplexCoords::new(&viewport),
            radius_squared: escape_radius_squared(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate_at(real: f64, imag: f64, max_iterations: u32) -> f64 {
        evaluate(
            &ExtendedComplex::from_f64(real, imag),
            max_iterations,
            &escape_radius_squared(),
        )
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(evaluate_at(0.0, 0.0, 100), 100.0);
    }

    #[test]
    fn test_main_cardioid_point_never_escapes() {
        assert_eq!(evaluate_at(-0.1, 0.1, 500), 500.0);
    }

    #[test]
    fn test_escape_radius_is_strict() {
        // -2 settles on z = 2, where |z|² == 4 is not an escape
        assert_eq!(evaluate_at(-2.0, 0.0, 50), 50.0);
    }

    #[test]
    fn test_smoothed_count_for_known_orbit() {
        // 0 -> 1 -> 2 -> 5 escapes on the third step (i = 2)
        let smooth = evaluate_at(1.0, 0.0, 100);

        assert!((smooth - 1.784_676_704_263_212).abs() < 1e-12, "{}", smooth);
    }

    #[test]
    fn test_smoothed_count_near_boundary() {
        let smooth = evaluate_at(-0.75, 0.1, 100);

        assert!((smooth - 32.478_615_598_630_70).abs() < 1e-9, "{}", smooth);
    }

    #[test]
    fn test_far_point_stays_positive() {
        let smooth = evaluate_at(-4.0, -2.0, 50);

        assert!(smooth > 0.0);
        assert!(smooth < 1.0);
    }

    #[test]
    fn test_escaped_counts_stay_below_max_iterations() {
        let max_iterations = 40;

        for step_real in 0..=24 {
            for step_imag in 0..=12 {
                let real = -2.5 + f64::from(step_real) * 0.125;
                let imag = f64::from(step_imag) * 0.125;
                let smooth = evaluate_at(real, imag, max_iterations);

                assert!(smooth > 0.0, "{} at ({}, {})", smooth, real, imag);
                assert!(smooth <= f64::from(max_iterations));
            }
        }
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let first = evaluate_at(-0.743_643_887_037_151, 0.131_825_904_205_33, 300);
        let second = evaluate_at(-0.743_643_887_037_151, 0.131_825_904_205_33, 300);

        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_algorithm_maps_pixels_through_viewport() {
        let viewport = Viewport::new(100, 100, 100, 0.0, 0.0, 1.0).unwrap();
        let algorithm = MandelbrotAlgorithm::new(viewport);

        // image center is the plane origin
        assert_eq!(algorithm.compute(Point { x: 50, y: 50 }), 100.0);
        // top-left is (-2, -2), outside the set
        assert!(algorithm.compute(Point { x: 0, y: 0 }) < 100.0);
        assert_eq!(algorithm.viewport(), &viewport);
    }
}
