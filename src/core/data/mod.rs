pub mod colour;
pub mod extended_complex;
pub mod extended_real;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;
