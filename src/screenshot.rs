//! PNG export of a rendered frame.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::colors::Color;
use crate::render::FrameBuffer;

/// Copies the frame buffer into an opaque RGBA image.
pub fn to_image(buffer: &FrameBuffer) -> RgbaImage {
    let width = buffer.width();
    let pixels = buffer.pixels();
    RgbaImage::from_fn(width, buffer.height(), |x, y| {
        let c = Color::from_argb(pixels[(y * width + x) as usize]);
        Rgba([c.r, c.g, c.b, 255])
    })
}

/// Writes the frame buffer to `path`. The format follows the extension.
pub fn save_png(buffer: &FrameBuffer, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
    let path = path.as_ref();
    to_image(buffer).save(path)?;
    tracing::info!(path = %path.display(), "saved screenshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_matches_buffer_pixels() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.clear(Color::new(10, 20, 30));
        fb.set_pixel(3, 2, Color::new(200, 100, 50).to_argb());

        let img = to_image(&fb);
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
        assert_eq!(img.get_pixel(3, 2), &Rgba([200, 100, 50, 255]));
    }
}
