use std::io::Write;

use image::codecs::png::PngEncoder;

use crate::encoders::common::{image_error, write_icc};
use crate::{error::ResizeError, image::Image};

/// PNG is lossless, so there is no quality to apply
pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ResizeError> {
    let mut encoder = PngEncoder::new(writer);
    write_icc(&mut encoder, image);
    image
        .pixels
        .write_with_encoder(encoder)
        .map_err(image_error)
}
