use std::path::Path;

use base64::Engine as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::codecs::png::PngEncoder;
use image::{Delay, Frame, ImageEncoder, RgbaImage};

use crate::export::sequence::SequenceFrame;
use crate::foundation::error::{ChartError, ChartResult};
use crate::foundation::fs::replace_file;
use crate::render::surface::FrameRGBA;

/// Prefix of the thumbnails stored with saved charts.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// NeuQuant sampling speed for GIF palettes (1 = best, 30 = fastest).
const GIF_SPEED: i32 = 10;

/// Encode one frame as PNG.
#[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn encode_png(frame: &FrameRGBA) -> ChartResult<Vec<u8>> {
    check_frame(frame)?;
    let rgba = frame.to_straight_rgba8();
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            &rgba,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| ChartError::encode(format!("PNG encode: {e}")))?;
    Ok(png)
}

/// Encode one frame as a `data:image/png;base64,` URL.
pub fn encode_png_data_url(frame: &FrameRGBA) -> ChartResult<String> {
    let png = encode_png(frame)?;
    Ok(format!(
        "{PNG_DATA_URL_PREFIX}{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    ))
}

/// Encode a frame sequence as an endlessly looping GIF.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn encode_gif(frames: &[SequenceFrame<FrameRGBA>]) -> ChartResult<Vec<u8>> {
    let first = frames
        .first()
        .ok_or_else(|| ChartError::encode("cannot encode an empty frame sequence"))?;
    let (width, height) = (first.frame.width, first.frame.height);

    let mut gif = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut gif, GIF_SPEED);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| ChartError::encode(format!("GIF header: {e}")))?;

        for (i, f) in frames.iter().enumerate() {
            check_frame(&f.frame)?;
            if (f.frame.width, f.frame.height) != (width, height) {
                return Err(ChartError::encode(format!(
                    "frame {i} is {}x{}, expected {width}x{height}",
                    f.frame.width, f.frame.height
                )));
            }
            let buffer = RgbaImage::from_raw(width, height, f.frame.to_straight_rgba8())
                .ok_or_else(|| ChartError::encode(format!("frame {i} has a short buffer")))?;
            let delay_ms = u32::try_from(f.delay.as_millis()).unwrap_or(u32::MAX);
            let delay = Delay::from_numer_denom_ms(delay_ms, 1);
            encoder
                .encode_frame(Frame::from_parts(buffer, 0, 0, delay))
                .map_err(|e| ChartError::encode(format!("GIF frame {i}: {e}")))?;
        }
    }
    tracing::debug!(bytes = gif.len(), "encoded gif");
    Ok(gif)
}

/// Write `bytes` to `path` via a uniquely named temp file in the same directory and a rename, so
/// `path` is either the previous content or the complete new content.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> ChartResult<()> {
    replace_file(path, bytes)
        .map_err(|e| ChartError::encode(format!("write '{}': {e}", path.display())))
}

fn check_frame(frame: &FrameRGBA) -> ChartResult<()> {
    if frame.width == 0 || frame.height == 0 {
        return Err(ChartError::encode("frame must be non-empty"));
    }
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(ChartError::encode(format!(
            "frame data is {} bytes, expected {expected}",
            frame.data.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/encode.rs"]
mod tests;
