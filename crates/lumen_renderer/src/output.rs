//! Output sinks for finished pixels.
//!
//! The renderer announces the image size once, then hands over pixels in
//! scan order: top row first, each row left to right.

use crate::error::{RenderError, RenderResult};
use image::{Rgb, RgbImage};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Consumer of a rendered image, one pixel at a time.
pub trait PixelSink {
    /// Called once before any pixel with the final image dimensions.
    fn begin(&mut self, width: u32, height: u32) -> RenderResult<()>;

    /// Accept the next pixel in scan order.
    fn write_pixel(&mut self, rgb: [u8; 3]) -> RenderResult<()>;

    /// Called once after the last pixel.
    fn finish(&mut self) -> RenderResult<()>;
}

/// Writes plain-text PPM (`P3`) to any writer.
///
/// Output is buffered and flushed once in [`PixelSink::finish`].
pub struct PpmSink<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> PpmSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> RenderResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| RenderError::Io(e.into_error()))
    }
}

impl<W: Write> PixelSink for PpmSink<W> {
    fn begin(&mut self, width: u32, height: u32) -> RenderResult<()> {
        write!(self.writer, "P3\n{width} {height}\n255\n")?;
        Ok(())
    }

    fn write_pixel(&mut self, [r, g, b]: [u8; 3]) -> RenderResult<()> {
        writeln!(self.writer, "{r} {g} {b}")?;
        Ok(())
    }

    fn finish(&mut self) -> RenderResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects pixels into an in-memory RGB image that can be saved in any
/// format the `image` crate supports.
pub struct ImageSink {
    buffer: RgbImage,
    written: u64,
}

impl ImageSink {
    pub fn new() -> Self {
        Self {
            buffer: RgbImage::new(0, 0),
            written: 0,
        }
    }

    /// The image collected so far.
    pub fn image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Encode to `path`, choosing the format from its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        self.buffer.save(path)?;
        Ok(())
    }
}

impl Default for ImageSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSink for ImageSink {
    fn begin(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.buffer = RgbImage::new(width, height);
        self.written = 0;
        Ok(())
    }

    fn write_pixel(&mut self, rgb: [u8; 3]) -> RenderResult<()> {
        let width = u64::from(self.buffer.width());
        let expected = width * u64::from(self.buffer.height());
        if self.written >= expected {
            return Err(RenderError::PixelOverflow { expected });
        }

        let x = (self.written % width) as u32;
        let y = (self.written / width) as u32;
        self.buffer.put_pixel(x, y, Rgb(rgb));
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> RenderResult<()> {
        log::debug!(
            "Collected {} pixels into {}x{} image",
            self.written,
            self.buffer.width(),
            self.buffer.height()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_sink_format() {
        let mut sink = PpmSink::new(Vec::new());
        sink.begin(2, 1).unwrap();
        sink.write_pixel([255, 0, 7]).unwrap();
        sink.write_pixel([0, 128, 255]).unwrap();
        sink.finish().unwrap();

        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 0 7\n0 128 255\n");
    }

    #[test]
    fn test_image_sink_scan_order() {
        let mut sink = ImageSink::new();
        sink.begin(2, 2).unwrap();
        for rgb in [[1, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4]] {
            sink.write_pixel(rgb).unwrap();
        }
        sink.finish().unwrap();

        let img = sink.image();
        assert_eq!(img.get_pixel(0, 0), &Rgb([1, 1, 1]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([2, 2, 2]));
        assert_eq!(img.get_pixel(0, 1), &Rgb([3, 3, 3]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([4, 4, 4]));
    }

    #[test]
    fn test_image_sink_rejects_extra_pixels() {
        let mut sink = ImageSink::new();
        sink.begin(1, 1).unwrap();
        sink.write_pixel([9, 9, 9]).unwrap();

        let err = sink.write_pixel([9, 9, 9]).unwrap_err();
        assert!(matches!(err, RenderError::PixelOverflow { expected: 1 }));
    }

    #[test]
    fn test_image_sink_before_begin_is_empty() {
        let mut sink = ImageSink::default();
        assert!(sink.write_pixel([0, 0, 0]).is_err());
    }
}
