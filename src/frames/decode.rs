use std::sync::Arc;

use crate::foundation::error::{ScrollframeError, ScrollframeResult};

#[derive(Clone, Debug)]
/// Decoded frame image in premultiplied RGBA8 form.
pub struct PreparedFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode fetched frame bytes (any format the `image` crate recognizes, WebP included).
pub fn decode_frame(bytes: &[u8]) -> ScrollframeResult<PreparedFrame> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ScrollframeError::decode(format!("decode frame image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ScrollframeError::decode("frame image has zero size"));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedFrame {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frames/decode.rs"]
mod tests;
