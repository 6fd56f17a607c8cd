use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes the buffer's bytes verbatim: no header, no encoding. Missing parent
/// directories are created.
pub fn write_raw_rgb(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(filepath)?;
    file.write_all(buffer.buffer())?;
    file.flush()?;

    Ok(())
}
