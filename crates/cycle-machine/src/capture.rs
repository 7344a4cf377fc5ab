//! Headless capture: PNG screenshots of the CRT.

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::Screen;

/// Phosphor colour of a lit pixel, RGB.
const LIT_RGB: [u8; 3] = [0xFF, 0xB0, 0x00];
/// Background colour, RGB.
const DARK_RGB: [u8; 3] = [0x10, 0x10, 0x10];

/// Convert the screen to RGBA bytes, each CRT pixel a `scale` x `scale` block.
#[must_use]
pub fn to_rgba(screen: &Screen, scale: u32) -> Vec<u8> {
    let scale = u64::from(scale.max(1));
    let width = screen.width() * scale;
    let height = screen.height() * scale;
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for py in 0..height {
        for px in 0..width {
            let [r, g, b] = if screen.is_lit(px / scale, py / scale) {
                LIT_RGB
            } else {
                DARK_RGB
            };
            rgba.extend_from_slice(&[r, g, b, 0xFF]);
        }
    }
    rgba
}

/// Save the screen as a PNG file.
///
/// # Errors
///
/// Returns an error if the screen is empty or the file cannot be created
/// or written.
pub fn save_screenshot(screen: &Screen, path: &Path, scale: u32) -> Result<(), Box<dyn Error>> {
    if screen.height() == 0 {
        return Err("nothing was drawn".into());
    }
    let scale = scale.max(1);
    let width = u32::try_from(screen.width())? * scale;
    let height = u32::try_from(screen.height())? * scale;

    let file = fs::File::create(path)?;
    let w = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&to_rgba(screen, scale))?;
    Ok(())
}
