//! Aspect-preserving resize: scale to fit, then center on a blank canvas.

use image::{
    imageops::{overlay, replace},
    DynamicImage, ImageBuffer, Pixel, Primitive,
};
use log::debug;

use crate::{
    arg_parsers::{Filter, TargetSize},
    error::{ErrorKind, ResizeError},
    image::Image,
    operations::resize::{check_buffer_size, resample},
    rz_err,
    utils::fraction::Fraction,
};

/// Where the scaled image lands on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

/// Largest size with the source's aspect ratio that fits into `target`, centered.
///
/// The ratio is `min(target_w / src_w, target_h / src_h)`, and each side is `floor(side * ratio)`.
/// Offsets are rounded down, so any odd leftover pixel goes to the right and bottom bars.
pub fn fit_within(source: (u32, u32), target: TargetSize) -> Result<Placement, ResizeError> {
    let (src_width, src_height) = source;
    let (dst_width, dst_height) = target.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(rz_err!(
            ErrorKind::InvalidGeometry,
            "cannot fit an empty {src_width}x{src_height} image"
        ));
    }

    let ratio = Fraction::new(dst_width, src_width).min(Fraction::new(dst_height, src_height));
    // cannot exceed the target side, because ratio <= target / source
    let width = u32::try_from(ratio.scale_floor(src_width)).unwrap_or(dst_width);
    let height = u32::try_from(ratio.scale_floor(src_height)).unwrap_or(dst_height);
    if width == 0 || height == 0 {
        return Err(rz_err!(
            ErrorKind::InvalidGeometry,
            "{src_width}x{src_height} scaled by {:.6} to fit {target} is {width}x{height}",
            ratio.to_float()
        ));
    }

    Ok(Placement {
        width,
        height,
        x: (dst_width - width) / 2,
        y: (dst_height - height) / 2,
    })
}

pub fn letterbox(image: &mut Image, target: TargetSize, filter: Filter) -> Result<(), ResizeError> {
    let placement = fit_within((image.width(), image.height()), target)?;
    debug!(
        "fitting {}x{} into {target}: {}x{} at +{}+{}",
        image.width(),
        image.height(),
        placement.width,
        placement.height,
        placement.x,
        placement.y
    );
    resample(&mut image.pixels, placement.width, placement.height, filter)?;
    image.pixels = compose_on_canvas(&image.pixels, target, placement)?;
    Ok(())
}

/// Places `scaled` onto a fresh canvas of the same pixel type.
fn compose_on_canvas(
    scaled: &DynamicImage,
    target: TargetSize,
    placement: Placement,
) -> Result<DynamicImage, ResizeError> {
    let (w, h) = target.dimensions();
    check_buffer_size(w, h, scaled.color())?;
    let at = (placement.x, placement.y);
    use DynamicImage::*;
    let canvas = match scaled {
        ImageLuma8(pixels) => ImageLuma8(compose_inner(pixels, w, h, at)),
        ImageLumaA8(pixels) => ImageLumaA8(compose_inner(pixels, w, h, at)),
        ImageRgb8(pixels) => ImageRgb8(compose_inner(pixels, w, h, at)),
        ImageRgba8(pixels) => ImageRgba8(compose_inner(pixels, w, h, at)),
        ImageLuma16(pixels) => ImageLuma16(compose_inner(pixels, w, h, at)),
        ImageLumaA16(pixels) => ImageLumaA16(compose_inner(pixels, w, h, at)),
        ImageRgb16(pixels) => ImageRgb16(compose_inner(pixels, w, h, at)),
        ImageRgba16(pixels) => ImageRgba16(compose_inner(pixels, w, h, at)),
        ImageRgb32F(pixels) => ImageRgb32F(compose_inner(pixels, w, h, at)),
        ImageRgba32F(pixels) => ImageRgba32F(compose_inner(pixels, w, h, at)),
        other => {
            return Err(rz_err!(
                ErrorKind::UnsupportedFormat,
                "unsupported color type {:?} for letterboxing",
                other.color()
            ))
        }
    };
    Ok(canvas)
}

fn compose_inner<P>(
    scaled: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
    (x, y): (u32, u32),
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let mut canvas = ImageBuffer::from_pixel(width, height, background_pixel::<P>());
    if P::HAS_ALPHA {
        overlay(&mut canvas, scaled, i64::from(x), i64::from(y));
    } else {
        replace(&mut canvas, scaled, i64::from(x), i64::from(y));
    }
    canvas
}

/// Opaque white, or fully transparent white if the pixel type has an alpha channel.
fn background_pixel<P: Pixel>() -> P {
    let subpixels = vec![P::Subpixel::DEFAULT_MAX_VALUE; usize::from(P::CHANNEL_COUNT)];
    let mut pixel = *P::from_slice(&subpixels);
    if P::HAS_ALPHA {
        if let Some(alpha) = pixel.channels_mut().last_mut() {
            *alpha = P::Subpixel::DEFAULT_MIN_VALUE;
        }
    }
    pixel
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat, LumaA, Rgb, Rgb32FImage, RgbImage, Rgba, RgbaImage};
    use quickcheck_macros::quickcheck;
    use std::num::NonZeroU16;

    fn size(width: u32, height: u32) -> TargetSize {
        TargetSize::new(width, height).unwrap()
    }

    fn test_image(pixels: DynamicImage) -> Image {
        Image {
            format: ImageFormat::Png,
            icc: None,
            pixels,
        }
    }

    #[test]
    fn test_fit_wide_source() {
        // ratio = min(3000/4000, 3000/2000) = 0.75
        let placement = fit_within((4000, 2000), TargetSize::default()).unwrap();
        assert_eq!(
            placement,
            Placement {
                width: 3000,
                height: 1500,
                x: 0,
                y: 750
            }
        );
    }

    #[test]
    fn test_fit_tall_source_is_upscaled() {
        // ratio = min(3000/100, 3000/200) = 15
        let placement = fit_within((100, 200), TargetSize::default()).unwrap();
        assert_eq!(
            placement,
            Placement {
                width: 1500,
                height: 3000,
                x: 750,
                y: 0
            }
        );
    }

    #[test]
    fn test_fit_exact_size_is_identity() {
        let placement = fit_within((3000, 3000), TargetSize::default()).unwrap();
        assert_eq!(
            placement,
            Placement {
                width: 3000,
                height: 3000,
                x: 0,
                y: 0
            }
        );
    }

    #[test]
    fn test_fit_odd_leftover_goes_right() {
        // ratio = 10/3; 3 * 10/3 = 10, 2 * 10/3 = 6.67 -> 6
        let placement = fit_within((3, 2), size(10, 10)).unwrap();
        assert_eq!(
            placement,
            Placement {
                width: 10,
                height: 6,
                x: 0,
                y: 2
            }
        );
        let placement = fit_within((2, 1), size(5, 5)).unwrap();
        assert_eq!((placement.width, placement.height), (5, 2));
        assert_eq!((placement.x, placement.y), (0, 1));
    }

    #[test]
    fn test_fit_collapsing_to_zero_is_invalid() {
        let err = fit_within((10000, 1), TargetSize::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGeometry);
    }

    #[test]
    fn test_fit_empty_source_is_invalid() {
        let err = fit_within((0, 10), TargetSize::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGeometry);
    }

    #[quickcheck]
    fn fit_stays_inside_and_centered(
        src_width: NonZeroU16,
        src_height: NonZeroU16,
        dst_width: NonZeroU16,
        dst_height: NonZeroU16,
    ) -> bool {
        let (sw, sh) = (u32::from(src_width.get()), u32::from(src_height.get()));
        let (tw, th) = (u32::from(dst_width.get()), u32::from(dst_height.get()));
        match fit_within((sw, sh), size(tw, th)) {
            Ok(p) => {
                let inside = p.x + p.width <= tw && p.y + p.height <= th;
                let centered = p.x == (tw - p.width) / 2 && p.y == (th - p.height) / 2;
                // at least one side touches the canvas edge
                let touches = p.width == tw || p.height == th;
                // floor(side * ratio), checked by cross-multiplication
                let (sw64, sh64, tw64, th64) = (sw as u64, sh as u64, tw as u64, th as u64);
                let floors = if tw64 * sh64 <= th64 * sw64 {
                    p.width == tw && p.height as u64 == sh64 * tw64 / sw64
                } else {
                    p.height == th && p.width as u64 == sw64 * th64 / sh64
                };
                inside && centered && touches && floors
            }
            Err(err) => err.kind() == ErrorKind::InvalidGeometry,
        }
    }

    #[test]
    fn test_background_pixels() {
        assert_eq!(background_pixel::<Rgb<u8>>(), Rgb([255, 255, 255]));
        assert_eq!(background_pixel::<Rgba<u8>>(), Rgba([255, 255, 255, 0]));
        assert_eq!(background_pixel::<LumaA<u16>>(), LumaA([u16::MAX, 0]));
        assert_eq!(background_pixel::<Rgb<f32>>(), Rgb([1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_letterbox_opaque_bars_are_white() {
        let mut image = test_image(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            40,
            20,
            Rgb([0, 0, 0]),
        )));
        letterbox(&mut image, size(30, 30), Filter::Lanczos).unwrap();
        assert_eq!(image.pixels.dimensions(), (30, 30));
        assert_eq!(image.pixels.color(), image::ColorType::Rgb8);
        // content is 30x15 at rows 7..22
        assert_eq!(image.pixels.get_pixel(15, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(image.pixels.get_pixel(15, 6), Rgba([255, 255, 255, 255]));
        assert_eq!(image.pixels.get_pixel(15, 7), Rgba([0, 0, 0, 255]));
        assert_eq!(image.pixels.get_pixel(0, 15), Rgba([0, 0, 0, 255]));
        assert_eq!(image.pixels.get_pixel(29, 21), Rgba([0, 0, 0, 255]));
        assert_eq!(image.pixels.get_pixel(15, 22), Rgba([255, 255, 255, 255]));
        assert_eq!(image.pixels.get_pixel(15, 29), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_letterbox_alpha_bars_are_transparent() {
        let mut image = test_image(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            10,
            20,
            Rgba([255, 0, 0, 255]),
        )));
        letterbox(&mut image, size(20, 20), Filter::Lanczos).unwrap();
        assert_eq!(image.pixels.dimensions(), (20, 20));
        assert_eq!(image.pixels.color(), image::ColorType::Rgba8);
        // content is 10x20 at x = 5
        assert_eq!(image.pixels.get_pixel(0, 10), Rgba([255, 255, 255, 0]));
        assert_eq!(image.pixels.get_pixel(19, 10), Rgba([255, 255, 255, 0]));
        let content = image.pixels.get_pixel(10, 10);
        let Rgba([r, g, b, a]) = content;
        assert!(r >= 254 && g <= 1 && b <= 1 && a >= 254, "{content:?}");
    }

    #[test]
    fn test_letterbox_keeps_float_precision() {
        let mut image = test_image(DynamicImage::ImageRgb32F(Rgb32FImage::from_pixel(
            4,
            2,
            Rgb([0.25, 0.5, 0.75]),
        )));
        letterbox(&mut image, size(4, 4), Filter::Lanczos).unwrap();
        let DynamicImage::ImageRgb32F(pixels) = &image.pixels else {
            panic!("pixel type changed to {:?}", image.pixels.color());
        };
        assert_eq!(pixels.get_pixel(0, 0), &Rgb([1.0, 1.0, 1.0]));
        assert_eq!(pixels.get_pixel(0, 1), &Rgb([0.25, 0.5, 0.75]));
        assert_eq!(pixels.get_pixel(3, 2), &Rgb([0.25, 0.5, 0.75]));
        assert_eq!(pixels.get_pixel(3, 3), &Rgb([1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_oversized_canvas_is_invalid_geometry() {
        // the 1x1 content needs no resampling, only the canvas is too large
        let mut image = test_image(DynamicImage::new_rgb8(1, 1));
        let err = letterbox(&mut image, size(u32::MAX, 1), Filter::Lanczos).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidGeometry);
    }
}
