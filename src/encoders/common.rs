//! Helpers shared between all encoders

use std::borrow::Cow;

use image::{DynamicImage, ImageEncoder, ImageError};
use log::debug;

use crate::{error::ErrorKind, error::ResizeError, image::Image, rz_err};

/// I/O failures are reported as write errors, everything else as encoding errors
pub fn image_error(error: ImageError) -> ResizeError {
    let kind = match &error {
        ImageError::IoError(_) => ErrorKind::Write,
        ImageError::Unsupported(_) => ErrorKind::UnsupportedFormat,
        _ => ErrorKind::Encode,
    };
    rz_err!(kind, "{error}")
}

pub fn write_icc(encoder: &mut impl ImageEncoder, image: &Image) {
    if let Some(icc) = image.icc.clone() {
        // not fatal: the pixels are still written, only the profile is lost
        if let Err(error) = encoder.set_icc_profile(icc) {
            debug!("dropping ICC profile: {error}");
        }
    };
}

#[cfg_attr(not(feature = "webp"), allow(dead_code))]
/// Converts the image to Rgba8 or Rgb8, depending on whether it has an alpha channel.
/// Images that already are in one of these formats are passed through without copying.
pub fn to_8bit_rgb_maybe_a(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use DynamicImage::*;
    match pixels {
        ImageRgb8(_) | ImageRgba8(_) => Cow::Borrowed(pixels),
        _ if pixels.color().has_alpha() => Cow::Owned(ImageRgba8(pixels.to_rgba8())),
        _ => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
    }
}
