use fast_image_resize::{ResizeOptions, Resizer};
use image::{ColorType, DynamicImage, Limits};
use log::debug;

use crate::{
    arg_parsers::{Filter, TargetSize},
    error::{ErrorKind, ResizeError},
    image::Image,
    rz_err,
};

/// Scales both axes independently to exactly fill `target`.
pub fn stretch(image: &mut Image, target: TargetSize, filter: Filter) -> Result<(), ResizeError> {
    resample(&mut image.pixels, target.width(), target.height(), filter)
}

/// Resamples `image` in place. Alpha is premultiplied for the duration of the resize
/// so that transparent pixels don't bleed their color into the neighbors.
pub fn resample(
    image: &mut DynamicImage,
    dst_width: u32,
    dst_height: u32,
    filter: Filter,
) -> Result<(), ResizeError> {
    if dst_width == 0 || dst_height == 0 {
        return Err(rz_err!(
            ErrorKind::InvalidGeometry,
            "cannot resize to {dst_width}x{dst_height}"
        ));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(rz_err!(
            ErrorKind::InvalidGeometry,
            "cannot resize an empty {}x{} image",
            image.width(),
            image.height()
        ));
    }
    if image.width() == dst_width && image.height() == dst_height {
        return Ok(());
    }

    check_buffer_size(dst_width, dst_height, image.color())?;

    debug!(
        "resampling {}x{} to {dst_width}x{dst_height} with {filter}",
        image.width(),
        image.height()
    );
    let mut resizer = Resizer::new();
    let mut dst_image = DynamicImage::new(dst_width, dst_height, image.color());
    let options = ResizeOptions::new().resize_alg(filter.into_resize_alg());
    resizer
        .resize(&*image, &mut dst_image, Some(&options))
        .map_err(|error| rz_err!(ErrorKind::Resample, "resize failed: {error}"))?;
    *image = dst_image;
    Ok(())
}

/// Rejects pixel buffers above `image`'s default allocation limit,
/// the same limit the decoder applies to the input.
pub(super) fn check_buffer_size(
    width: u32,
    height: u32,
    color: ColorType,
) -> Result<(), ResizeError> {
    let max_alloc = Limits::default().max_alloc.unwrap_or(u64::MAX);
    let fits = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|pixels| pixels.checked_mul(u64::from(color.bytes_per_pixel())))
        .is_some_and(|bytes| bytes <= max_alloc && usize::try_from(bytes).is_ok());
    if fits {
        Ok(())
    } else {
        Err(rz_err!(
            ErrorKind::InvalidGeometry,
            "a {width}x{height} {color:?} image exceeds the memory limit of {max_alloc} bytes"
        ))
    }
}
