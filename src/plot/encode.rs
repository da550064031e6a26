use std::io::Cursor;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, RgbImage};
use serde::Serialize;
use crate::plot::{PlotError, Result};

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// A rendered chart as a self-contained `data:` URI, embeddable as an image
/// source without a separate fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedImage {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    pub fn from_png(png: &[u8], width: u32, height: u32) -> Self {
        Self {
            data_uri: format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(png)),
            width,
            height,
        }
    }

    /// Decodes the payload back into PNG bytes.
    pub fn png_bytes(&self) -> Result<Vec<u8>> {
        let payload = self
            .data_uri
            .strip_prefix(PNG_DATA_URI_PREFIX)
            .ok_or_else(|| PlotError::Encoding("Not a PNG data URI".to_string()))?;

        STANDARD
            .decode(payload)
            .map_err(|e| PlotError::Encoding(e.to_string()))
    }
}

/// Encodes a packed RGB buffer as PNG.
pub fn encode_png(rgb: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>> {
    let image = RgbImage::from_raw(width, height, rgb).ok_or_else(|| {
        PlotError::Encoding(format!("Pixel buffer does not match {}x{}", width, height))
    })?;

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| PlotError::Encoding(e.to_string()))?;

    Ok(png)
}
