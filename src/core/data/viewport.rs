use std::error::Error;
use std::fmt;

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_MAX_ITERATIONS: u32 = 256;
const DEFAULT_CENTER_REAL: f64 = -0.5;
const DEFAULT_CENTER_IMAG: f64 = 0.0;
const DEFAULT_ZOOM: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    ZeroWidthError,
    ZeroHeightError,
    ZeroMaxIterationsError,
    InvalidZoom { zoom: f64 },
    NonFiniteCenter { real: f64, imag: f64 },
    OutOfRange { name: &'static str, value: i64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidthError => write!(f, "Width must be greater than zero"),
            Self::ZeroHeightError => write!(f, "Height must be greater than zero"),
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be a finite number greater than zero, got {}", zoom)
            }
            Self::NonFiniteCenter { real, imag } => {
                write!(f, "center must be finite, got ({}, {})", real, imag)
            }
            Self::OutOfRange { name, value } => {
                write!(f, "{} must be between 1 and {}, got {}", name, u32::MAX, value)
            }
        }
    }
}

impl Error for ViewportError {}

/// The region of the complex plane rendered into a `width` x `height` grid.
///
/// Zoom 1 shows the square of radius 2 around `center`. Only constructible
/// through [`Viewport::new`], so every live value is valid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    max_iterations: u32,
    center_real: f64,
    center_imag: f64,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            center_real: DEFAULT_CENTER_REAL,
            center_imag: DEFAULT_CENTER_IMAG,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    pub fn new(
        width: u32,
        height: u32,
        max_iterations: u32,
        center_real: f64,
        center_imag: f64,
        zoom: f64,
    ) -> Result<Self, ViewportError> {
        if width == 0 {
            return Err(ViewportError::ZeroWidthError);
        }

        if height == 0 {
            return Err(ViewportError::ZeroHeightError);
        }

        if max_iterations == 0 {
            return Err(ViewportError::ZeroMaxIterationsError);
        }

        if !center_real.is_finite() || !center_imag.is_finite() {
            return Err(ViewportError::NonFiniteCenter {
                real: center_real,
                imag: center_imag,
            });
        }

        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }

        Ok(Self {
            width,
            height,
            max_iterations,
            center_real,
            center_imag,
            zoom,
        })
    }

    /// Builds a viewport from signed host integers, as handed over by
    /// bindings whose native integer type is wider than `u32`.
    pub fn from_host_args(
        width: i64,
        height: i64,
        max_iterations: i64,
        center_real: f64,
        center_imag: f64,
        zoom: f64,
    ) -> Result<Self, ViewportError> {
        Self::new(
            host_dimension("width", width)?,
            host_dimension("height", height)?,
            host_dimension("max_iter", max_iterations)?,
            center_real,
            center_imag,
            zoom,
        )
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn center_real(&self) -> f64 {
        self.center_real
    }

    #[must_use]
    pub fn center_imag(&self) -> f64 {
        self.center_imag
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

fn host_dimension(name: &'static str, value: i64) -> Result<u32, ViewportError> {
    match u32::try_from(value) {
        Ok(converted) if converted > 0 => Ok(converted),
        _ => Err(ViewportError::OutOfRange { name, value }),
    }
}
