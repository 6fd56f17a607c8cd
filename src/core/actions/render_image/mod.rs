pub mod ports;
pub mod render_image_parallel_rayon;
pub mod render_image_serial;
mod render_row;

#[cfg(test)]
pub(crate) mod test_support;
