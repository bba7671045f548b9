use image::{DynamicImage, ImageFormat};

#[derive(Debug, Clone)]
pub struct Image {
    /// The format the image was decoded from; it is re-encoded in the same one
    pub format: ImageFormat,
    /// Passed through to the encoder verbatim, never interpreted
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn has_alpha(&self) -> bool {
        self.pixels.color().has_alpha()
    }
}
