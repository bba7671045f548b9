use std::io::Write;

use crate::encoders::common::to_8bit_rgb_maybe_a;
use crate::{error::ErrorKind, error::ResizeError, image::Image, rz_err, rz_try};
use webp::{Encoder, WebPMemory};

pub fn encode<W: Write>(image: &Image, writer: &mut W, quality: u8) -> Result<(), ResizeError> {
    // libwebp only accepts 8-bit RGB(A)
    let pixels = to_8bit_rgb_maybe_a(&image.pixels);
    let encoder: Encoder = Encoder::from_image(&pixels)
        .map_err(|e| rz_err!(ErrorKind::Encode, "WebP encoding failed: {e}"))?;
    // the same convention as imagemagick: quality 100 means lossless
    let lossless = quality == 100;

    let webp: WebPMemory = encoder
        .encode_simple(lossless, f32::from(quality))
        .map_err(|e| rz_err!(ErrorKind::Encode, "WebP encoding failed: {e:?}"))?;
    // TODO: `webp` crate doesn't support setting the ICC profile:
    // https://github.com/jaredforth/webp/issues/41
    Ok(rz_try!(ErrorKind::Write, writer.write_all(&webp)))
}
