use std::borrow::Cow;
use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::encoders::common::{image_error, write_icc};
use crate::{error::ResizeError, image::Image};

pub fn encode<W: Write>(image: &Image, writer: &mut W, quality: u8) -> Result<(), ResizeError> {
    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    write_icc(&mut encoder, image);
    jpeg_compatible(&image.pixels)
        .write_with_encoder(encoder)
        .map_err(image_error)
}

/// JPEG has neither alpha nor more than 8 bits per channel
fn jpeg_compatible(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use DynamicImage::*;
    match pixels {
        ImageLuma8(_) | ImageRgb8(_) => Cow::Borrowed(pixels),
        _ if pixels.color().has_color() => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
        _ => Cow::Owned(ImageLuma8(pixels.to_luma8())),
    }
}
