use base64::{Engine, engine::general_purpose};
use image::{Rgb, RgbImage, codecs::jpeg::JpegEncoder};

use crate::domain::{common::entities::app_errors::CoreError, food_analysis::ports::ImageEnhancer};

pub const CONTRAST_FACTOR: f32 = 1.2;
pub const BRIGHTNESS_FACTOR: f32 = 1.1;
pub const SHARPNESS_FACTOR: f32 = 1.3;
pub const JPEG_QUALITY: u8 = 95;

const SMOOTH: [[f32; 3]; 3] = [[1.0, 1.0, 1.0], [1.0, 5.0, 1.0], [1.0, 1.0, 1.0]];
const SMOOTH_SCALE: f32 = 13.0;

#[rustfmt::skip]
const SMOOTH_MORE: [[f32; 5]; 5] = [
    [1.0, 1.0,  1.0, 1.0, 1.0],
    [1.0, 5.0,  5.0, 5.0, 1.0],
    [1.0, 5.0, 44.0, 5.0, 1.0],
    [1.0, 5.0,  5.0, 5.0, 1.0],
    [1.0, 1.0,  1.0, 1.0, 1.0],
];
const SMOOTH_MORE_SCALE: f32 = 100.0;

/// Photo clean-up applied before classification: contrast, brightness and
/// sharpness boosts followed by a light smoothing pass, re-encoded as JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhotoEnhancer;

impl PhotoEnhancer {
    pub fn enhance_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>, CoreError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| CoreError::InvalidImage(e.to_string()))?;
        let rgb = decoded.into_rgb8();

        let rgb = adjust_contrast(&rgb, CONTRAST_FACTOR);
        let rgb = adjust_brightness(&rgb, BRIGHTNESS_FACTOR);
        let rgb = adjust_sharpness(&rgb, SHARPNESS_FACTOR);
        let rgb = convolve(&rgb, &SMOOTH_MORE, SMOOTH_MORE_SCALE);

        encode_jpeg(&rgb)
    }
}

impl ImageEnhancer for PhotoEnhancer {
    fn enhance(&self, image_b64: &str) -> Result<String, CoreError> {
        // Line-wrapped (MIME style) payloads are accepted.
        let compact: String = image_b64
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = general_purpose::STANDARD
            .decode(compact)
            .map_err(|e| CoreError::InvalidImage(format!("Invalid base64 payload: {}", e)))?;

        let enhanced = self.enhance_bytes(&bytes)?;
        Ok(general_purpose::STANDARD.encode(enhanced))
    }
}

fn encode_jpeg(image: &RgbImage) -> Result<Vec<u8>, CoreError> {
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)
        .encode_image(image)
        .map_err(|e| CoreError::InvalidImage(format!("Failed to encode JPEG: {}", e)))?;
    Ok(buffer)
}

/// ITU-R 601-2 luma, fixed point.
fn luma(pixel: &Rgb<u8>) -> u32 {
    let [r, g, b] = pixel.0;
    (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16
}

fn truncate_channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

fn round_channel(value: f32) -> u8 {
    (value + 0.5).clamp(0.0, 255.0) as u8
}

/// Interpolates (or extrapolates, for factors above 1) from `degenerate`
/// towards `image`.
fn blend(degenerate: &RgbImage, image: &RgbImage, factor: f32) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());
    for ((dst, &low), &high) in out.iter_mut().zip(degenerate.iter()).zip(image.iter()) {
        let low = low as f32;
        *dst = truncate_channel(low + factor * (high as f32 - low));
    }
    out
}

fn adjust_contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let pixel_count = image.width() as u64 * image.height() as u64;
    if pixel_count == 0 {
        return image.clone();
    }

    let total: u64 = image.pixels().map(|p| luma(p) as u64).sum();
    let mean = (total as f64 / pixel_count as f64 + 0.5) as u8;
    let degenerate = RgbImage::from_pixel(image.width(), image.height(), Rgb([mean; 3]));

    blend(&degenerate, image, factor)
}

fn adjust_brightness(image: &RgbImage, factor: f32) -> RgbImage {
    let black = RgbImage::new(image.width(), image.height());
    blend(&black, image, factor)
}

fn adjust_sharpness(image: &RgbImage, factor: f32) -> RgbImage {
    let smoothed = convolve(image, &SMOOTH, SMOOTH_SCALE);
    blend(&smoothed, image, factor)
}

/// Square-kernel convolution. Pixels closer to the edge than the kernel
/// radius are copied unchanged.
fn convolve<const N: usize>(image: &RgbImage, kernel: &[[f32; N]; N], scale: f32) -> RgbImage {
    let (width, height) = image.dimensions();
    let radius = (N / 2) as u32;
    let mut out = image.clone();

    if width <= 2 * radius || height <= 2 * radius {
        return out;
    }

    for y in radius..height - radius {
        for x in radius..width - radius {
            let mut acc = [0.0f32; 3];
            for (ky, row) in kernel.iter().enumerate() {
                for (kx, weight) in row.iter().enumerate() {
                    let source = image.get_pixel(x + kx as u32 - radius, y + ky as u32 - radius);
                    for (sum, channel) in acc.iter_mut().zip(source.0) {
                        *sum += weight * channel as f32;
                    }
                }
            }
            out.put_pixel(x, y, Rgb(acc.map(|sum| round_channel(sum / scale))));
        }
    }

    out
}
