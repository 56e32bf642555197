// this_file: backends/posterline-core/src/surface.rs

//! Conversion of finished canvas pixels into straight RGBA or PNG bytes.

use crate::{PosterlineError, Result};

/// Pixels of a finished canvas, prior to encoding.
#[derive(Debug)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    premultiplied: bool,
    data: Vec<u8>,
}

impl RenderSurface {
    /// Wrap an RGBA buffer; `premultiplied` is true for tiny-skia pixmaps.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>, premultiplied: bool) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(PosterlineError::image(format!(
                "RGBA buffer holds {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            premultiplied,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Straight (non-premultiplied) RGBA bytes.
    pub fn into_rgba(mut self) -> Vec<u8> {
        if self.premultiplied {
            unpremultiply(&mut self.data);
        }
        self.data
    }

    pub fn into_png(self) -> Result<Vec<u8>> {
        let width = self.width;
        let height = self.height;
        let rgba = self.into_rgba();
        encode_png(width, height, &rgba)
    }
}

fn unpremultiply(data: &mut [u8]) {
    for pixel in data.chunks_exact_mut(4) {
        let alpha = u16::from(pixel[3]);
        if alpha == 0 || alpha == 255 {
            continue;
        }
        for channel in &mut pixel[..3] {
            let straight = (u16::from(*channel) * 255 + alpha / 2) / alpha;
            *channel = straight.min(255) as u8;
        }
    }
}

fn encode_png(width: u32, height: u32, data: &[u8]) -> Result<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|err| PosterlineError::image(format!("PNG encoder error: {err}")))?;
        writer
            .write_image_data(data)
            .map_err(|err| PosterlineError::image(format!("PNG write error: {err}")))?;
    }
    Ok(png_data)
}
