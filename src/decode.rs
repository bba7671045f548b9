use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageError, ImageReader};
use log::debug;

use crate::{error::ErrorKind, error::ResizeError, image::Image, rz_err};

/// Guesses the format based on file contents, falling back to the extension.
pub fn decode(path: &Path) -> Result<Image, ResizeError> {
    let reader = ImageReader::open(path).map_err(|error| {
        rz_err!(
            ErrorKind::Decode,
            "unable to open image `{}': {error}",
            path.display()
        )
    })?;
    let reader = reader.with_guessed_format().map_err(|error| {
        rz_err!(
            ErrorKind::Decode,
            "unable to read image `{}': {error}",
            path.display()
        )
    })?;
    let Some(format) = reader.format() else {
        return Err(rz_err!(
            ErrorKind::Decode,
            "no decode delegate for this image format `{}'",
            extension_for_display(path)
        ));
    };
    if !format.reading_enabled() {
        return Err(rz_err!(
            ErrorKind::UnsupportedFormat,
            "support for {format:?} images is not enabled in this build"
        ));
    }

    let mut decoder = reader
        .into_decoder()
        .map_err(|error| image_error(path, error))?;
    // not every decoder can extract the profile, and lacking one is not fatal
    let icc = decoder.icc_profile().unwrap_or(None);
    let pixels = DynamicImage::from_decoder(decoder)
        .map_err(|error| image_error(path, error))?;

    debug!(
        "decoded `{}': {format:?} {}x{} {:?}{}",
        path.display(),
        pixels.width(),
        pixels.height(),
        pixels.color(),
        if icc.is_some() { " with ICC profile" } else { "" },
    );

    Ok(Image {
        format,
        icc,
        pixels,
    })
}

fn image_error(path: &Path, error: ImageError) -> ResizeError {
    let kind = match error {
        ImageError::Unsupported(_) => ErrorKind::UnsupportedFormat,
        _ => ErrorKind::Decode,
    };
    rz_err!(
        kind,
        "unable to decode image `{}': {error}",
        path.display()
    )
}

/// Mimics imagemagick, which reports the upper-cased extension
fn extension_for_display(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_uppercase())
        .unwrap_or_default()
}
