//! 8-bit pixel buffers for faces and atlases.

use crate::color::Color;

/// Pixel layout of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 3 bytes per pixel.
    Rgb8,
    /// 4 bytes per pixel.
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// A row-major 8-bit image; row 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel layout.
    pub format: PixelFormat,
    /// Pixel bytes, `width * height * channels` long.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer (black, and transparent for RGBA).
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let len = width as usize * height as usize * format.channels();
        Self {
            width,
            height,
            format,
            data: vec![0; len],
        }
    }

    /// Wrap existing bytes. Returns `None` when the length does not match.
    pub fn from_raw(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * format.channels();
        if data.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.format.channels()
    }

    #[inline]
    fn row_bytes(&self) -> usize {
        self.width as usize * self.format.channels()
    }

    /// Bytes of the pixel at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> &[u8] {
        let idx = self.offset(x, y);
        &self.data[idx..idx + self.format.channels()]
    }

    /// Write a color at `(x, y)`; alpha is dropped for RGB buffers.
    #[inline]
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.offset(x, y);
        match self.format {
            PixelFormat::Rgb8 => self.data[idx..idx + 3].copy_from_slice(&color.to_rgb8()),
            PixelFormat::Rgba8 => self.data[idx..idx + 4].copy_from_slice(&color.to_rgba8()),
        }
    }

    /// Mirror the image left to right.
    pub fn flip_horizontal(&mut self) {
        let channels = self.format.channels();
        let row_bytes = self.row_bytes();
        let width = self.width as usize;
        for row in self.data.chunks_exact_mut(row_bytes) {
            for x in 0..width / 2 {
                let a = x * channels;
                let b = (width - 1 - x) * channels;
                for c in 0..channels {
                    row.swap(a + c, b + c);
                }
            }
        }
    }

    /// Mirror the image top to bottom.
    pub fn flip_vertical(&mut self) {
        let row_bytes = self.row_bytes();
        let height = self.height as usize;
        for y in 0..height / 2 {
            let (top, bottom) = self.data.split_at_mut((height - 1 - y) * row_bytes);
            top[y * row_bytes..(y + 1) * row_bytes].swap_with_slice(&mut bottom[..row_bytes]);
        }
    }

    /// Rotate the image by 180 degrees.
    pub fn rotate_180(&mut self) {
        self.flip_horizontal();
        self.flip_vertical();
    }

    /// Copy `src` into this buffer with its top-left corner at `(x0, y0)`.
    ///
    /// Both buffers must share a format and `src` must fit.
    pub fn blit(&mut self, src: &PixelBuffer, x0: u32, y0: u32) {
        debug_assert_eq!(self.format, src.format);
        debug_assert!(x0 + src.width <= self.width && y0 + src.height <= self.height);

        let src_row = src.row_bytes();
        for y in 0..src.height {
            let dst = self.offset(x0, y0 + y);
            let s = y as usize * src_row;
            self.data[dst..dst + src_row].copy_from_slice(&src.data[s..s + src_row]);
        }
    }

    /// Copy out the `width x height` region whose top-left corner is `(x0, y0)`.
    pub fn region(&self, x0: u32, y0: u32, width: u32, height: u32) -> PixelBuffer {
        let mut out = PixelBuffer::new(width, height, self.format);
        let out_row = out.row_bytes();
        for y in 0..height {
            let s = self.offset(x0, y0 + y);
            let d = y as usize * out_row;
            out.data[d..d + out_row].copy_from_slice(&self.data[s..s + out_row]);
        }
        out
    }

    /// Bytes with rows in bottom-to-top order, for APIs where the first
    /// row in memory is `v = 0`.
    pub fn to_bottom_up_bytes(&self) -> Vec<u8> {
        let row_bytes = self.row_bytes();
        let mut out = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(row_bytes.max(1)).rev() {
            out.extend_from_slice(row);
        }
        out
    }
}
