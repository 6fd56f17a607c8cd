pub mod band_gradient;
