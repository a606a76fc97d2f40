//! Deterministic PNG codec.
//!
//! Uses fixed compression settings so identical pixel data always encodes
//! to identical bytes.

use std::io::{Read, Write};

use png::{BitDepth, ColorType, Compression, Decoder, Encoder, FilterType, Transformations};
use thiserror::Error;

use crate::buffer::{PixelBuffer, PixelFormat};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    Decoding(#[from] png::DecodingError),

    #[error("Unsupported PNG layout: {0}")]
    Unsupported(String),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a pixel buffer to any writer.
pub fn write_png_to_writer<W: Write>(
    buffer: &PixelBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let expected = buffer.pixel_count() * buffer.format.channels();
    if buffer.data.len() != expected {
        return Err(PngError::InvalidDimensions(format!(
            "Expected {} bytes for {}x{} {:?}, got {}",
            expected,
            buffer.width,
            buffer.height,
            buffer.format,
            buffer.data.len()
        )));
    }

    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(match buffer.format {
        PixelFormat::Rgb8 => ColorType::Rgb,
        PixelFormat::Rgba8 => ColorType::Rgba,
    });
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate adds no timestamps or other variable metadata.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.data)?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a Vec<u8> and return the hash.
pub fn write_png_to_vec_with_hash(
    buffer: &PixelBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_png_to_writer(buffer, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Read an 8-bit RGB or RGBA PNG from any reader.
///
/// Palette images are expanded; grayscale and 16-bit images are rejected.
pub fn read_png_from_reader<R: Read>(reader: R) -> Result<PixelBuffer, PngError> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut png_reader = decoder.read_info()?;

    let mut data = vec![0; png_reader.output_buffer_size()];
    let info = png_reader.next_frame(&mut data)?;
    data.truncate(info.buffer_size());

    if info.bit_depth != BitDepth::Eight {
        return Err(PngError::Unsupported(format!(
            "bit depth {:?}, expected 8",
            info.bit_depth
        )));
    }
    let format = match info.color_type {
        ColorType::Rgb => PixelFormat::Rgb8,
        ColorType::Rgba => PixelFormat::Rgba8,
        other => {
            return Err(PngError::Unsupported(format!(
                "color type {:?}, expected RGB or RGBA",
                other
            )))
        }
    };

    PixelBuffer::from_raw(info.width, info.height, format, data).ok_or_else(|| {
        PngError::InvalidDimensions(format!(
            "decoded frame does not match {}x{} {:?}",
            info.width, info.height, format
        ))
    })
}
