#![no_main]

use std::{num::NonZeroU8, path::Path};

use arbitrary::Unstructured;
use canvasfit::{arg_parsers::TargetSize, error::ErrorKind, resize_image, ResizeOptions};
use image::GenericImageView;
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgba_data: Vec<u8>,
}

impl StructuredImage {
    fn save_as_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        use image::{codecs::png::PngEncoder, ImageEncoder};
        use std::fs::File;

        let file = File::create(path)?;
        let encoder = PngEncoder::new_with_quality(
            file,
            image::codecs::png::CompressionType::Fast,
            image::codecs::png::FilterType::NoFilter,
        );
        encoder.write_image(
            &self.rgba_data,
            self.width.get() as u32,
            self.height.get() as u32,
            image::ExtendedColorType::Rgba8,
        )
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgba_data_len = width.get() as usize * height.get() as usize * 4;
        let rgba_data = unstructured.bytes(rgba_data_len)?;

        Ok(Self {
            width,
            height,
            rgba_data: rgba_data.to_vec(),
        })
    }
}

fuzz_target!(|input: (StructuredImage, NonZeroU8, NonZeroU8, bool)| {
    let (image, target_width, target_height, preserve_aspect) = input;
    let target = TargetSize::new(target_width.get() as u32, target_height.get() as u32)
        .expect("both sides are non-zero");

    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input_image.png");
    image
        .save_as_png(&input_path)
        .expect("failed to save image as PNG");

    let options = ResizeOptions {
        target,
        preserve_aspect,
        ..ResizeOptions::default()
    };
    match resize_image(&input_path, None, &options) {
        Ok(output_path) => {
            let dimensions = image::open(&output_path)
                .expect("could not open the output file")
                .dimensions();
            // Contract: the output is always exactly the canvas size.
            assert_eq!(dimensions, target.dimensions(), "{}", output_path.display());
        }
        // only a fit that scales one side down to nothing may fail
        Err(err) => {
            assert!(preserve_aspect, "{err}");
            assert_eq!(err.kind(), ErrorKind::InvalidGeometry, "{err}");
            assert!(!temp_directory.path().join("input_image_resized.png").exists());
        }
    }
});
