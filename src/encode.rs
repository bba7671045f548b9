use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::ImageFormat;
use log::debug;

use crate::{
    encoders,
    error::{ErrorKind, ResizeError},
    image::Image,
    rz_err, rz_try,
};

/// Writes `image` to `path` in the format it was decoded from.
///
/// `quality` is only used by lossy formats.
pub fn encode(image: &Image, path: &Path, quality: u8) -> Result<(), ResizeError> {
    let format = image.format;
    // checked before the file is created, so that an unsupported format leaves nothing behind
    if !format.writing_enabled() {
        return Err(rz_err!(
            ErrorKind::UnsupportedFormat,
            "no encode delegate for this image format `{}'",
            format_name(format)
        ));
    }
    debug!(
        "encoding {}x{} {:?} as {} to `{}'{}",
        image.width(),
        image.height(),
        image.pixels.color(),
        format_name(format),
        path.display(),
        if uses_quality(format) {
            format!(" at quality {quality}")
        } else {
            String::new()
        }
    );

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path).map_err(|error| {
        rz_err!(
            ErrorKind::Write,
            "unable to open image `{}': {error}",
            path.display()
        )
    })?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    match format {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(image, &mut writer, quality)?,
        #[cfg(feature = "webp")]
        ImageFormat::WebP => encoders::webp::encode(image, &mut writer, quality)?,
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(image, &mut writer)?,
        #[cfg(feature = "gif")]
        ImageFormat::Gif => encoders::gif::encode(image, &mut writer)?,
        #[cfg(feature = "tiff")]
        ImageFormat::Tiff => encoders::tiff::encode(image, &mut writer)?,
        _ => image
            .pixels
            .write_to(&mut writer, format)
            .map_err(encoders::common::image_error)?,
    }

    // Flush the buffers to write everything to disk.
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    rz_try!(ErrorKind::Write, writer.flush());
    Ok(())
}

/// Formats whose encoders take a quality setting
pub fn uses_quality(format: ImageFormat) -> bool {
    matches!(format, ImageFormat::Jpeg | ImageFormat::WebP)
}

fn format_name(format: ImageFormat) -> String {
    format
        .extensions_str()
        .first()
        .map(|ext| ext.to_ascii_uppercase())
        .unwrap_or_else(|| format!("{format:?}"))
}
