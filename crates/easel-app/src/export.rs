//! PNG export of the canvas contents.

use thiserror::Error;

/// File name offered for the downloaded image.
pub const EXPORT_FILE_NAME: &str = "canvas_image.png";

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] png::EncodingError),
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("host error: {0}")]
    Host(String),
}

/// Encode straight (non-premultiplied) RGBA8 pixels as a PNG file.
pub fn encode_png(rgba: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or(ExportError::BufferSize {
            expected: usize::MAX,
            actual: rgba.len(),
        })?;
    if rgba.len() != expected {
        return Err(ExportError::BufferSize {
            expected,
            actual: rgba.len(),
        });
    }

    let mut png_data = Vec::new();
    let mut encoder = png::Encoder::new(&mut png_data, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    writer.finish()?;

    log::info!("encoded {}x{} PNG ({} bytes)", width, height, png_data.len());
    Ok(png_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_encode_and_decode() {
        let red = [255u8, 0, 0, 255];
        let pixels: Vec<u8> = red.iter().copied().cycle().take(3 * 2 * 4).collect();
        let data = encode_png(&pixels, 3, 2).unwrap();
        assert_eq!(&data[..8], &PNG_SIGNATURE);

        let decoder = png::Decoder::new(data.as_slice());
        let mut reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 3);
        assert_eq!(reader.info().height, 2);

        let mut buf = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf).unwrap();
        assert_eq!(&buf[..frame.buffer_size()], pixels.as_slice());
    }

    #[test]
    fn test_rejects_short_buffer() {
        let err = encode_png(&[0u8; 10], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            ExportError::BufferSize {
                expected: 16,
                actual: 10
            }
        ));
    }

    #[test]
    fn test_oversized_dimensions() {
        let err = encode_png(&[0u8; 4], u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, ExportError::BufferSize { actual: 4, .. }));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(EXPORT_FILE_NAME, "canvas_image.png");
    }
}
