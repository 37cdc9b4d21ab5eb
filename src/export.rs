//! Encoding of the flattened canvas into an image file.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::info;

use crate::error::Result;

/// File name for an export made at `millis` since the Unix epoch
pub fn export_file_name(millis: u128) -> String {
    format!("pixel-art-{}.png", millis)
}

/// Encode an exported buffer as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Write an exported buffer to `path` as PNG
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)?;
    info!(
        "Saved {}x{} PNG to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
