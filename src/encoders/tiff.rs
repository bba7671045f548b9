use std::io::{Seek, Write};

use image::codecs::tiff::TiffEncoder;

use crate::encoders::common::{image_error, write_icc};
use crate::{error::ResizeError, image::Image};

pub fn encode<W: Write + Seek>(image: &Image, writer: &mut W) -> Result<(), ResizeError> {
    let mut encoder = TiffEncoder::new(writer);
    write_icc(&mut encoder, image);
    image
        .pixels
        .write_with_encoder(encoder)
        .map_err(image_error)
}
