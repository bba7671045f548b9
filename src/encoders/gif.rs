use std::io::Write;

use image::codecs::gif::GifEncoder;
use image::ExtendedColorType;

use crate::encoders::common::image_error;
use crate::{error::ResizeError, image::Image};

/// Writes a single frame. GIF is palette-based, so there is no quality to apply.
pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ResizeError> {
    let mut encoder = GifEncoder::new_with_speed(writer, 10);
    let frame = image.pixels.to_rgba8();
    encoder
        .encode(
            frame.as_raw(),
            frame.width(),
            frame.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(image_error)
}
