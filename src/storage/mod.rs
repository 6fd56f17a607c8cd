pub mod write_raw_rgb;
