use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::arg_parsers::{Filter, TargetSize};
use crate::decode::decode;
use crate::encode::encode;
use crate::error::ResizeError;
use crate::operations::Operation;
use crate::utils::filename::default_output_path;

/// Everything that controls how a single image is resized.
/// Passed by value to every call; there is no global default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOptions {
    pub target: TargetSize,
    /// Letterbox onto the canvas instead of stretching
    pub preserve_aspect: bool,
    pub filter: Filter,
    /// Encoder quality for lossy formats, 1 to 100
    pub quality: u8,
}

impl ResizeOptions {
    pub const DEFAULT_QUALITY: u8 = 95;

    fn operation(&self) -> Operation {
        if self.preserve_aspect {
            Operation::Fit {
                target: self.target,
                filter: self.filter,
            }
        } else {
            Operation::Stretch {
                target: self.target,
                filter: self.filter,
            }
        }
    }
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            target: TargetSize::default(),
            preserve_aspect: true,
            filter: Filter::default(),
            quality: Self::DEFAULT_QUALITY,
        }
    }
}

/// Plan for a single run: one input, one output
#[derive(Debug, Clone, PartialEq)]
pub struct ResizePlan {
    input: PathBuf,
    output: PathBuf,
    options: ResizeOptions,
}

impl ResizePlan {
    /// If no output is given, it is placed next to the input with a `_resized` suffix.
    pub fn new(input: PathBuf, output: Option<PathBuf>, options: ResizeOptions) -> Self {
        let output = output.unwrap_or_else(|| default_output_path(&input));
        Self {
            input,
            output,
            options,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn options(&self) -> &ResizeOptions {
        &self.options
    }

    /// Decodes, resizes and writes the image. Returns the path that was written.
    pub fn execute(&self) -> Result<PathBuf, ResizeError> {
        let mut image = decode(&self.input)?;

        let operation = self.options.operation();
        debug!("applying {operation:?}");
        operation.execute(&mut image)?;

        encode(&image, &self.output, self.options.quality)?;
        info!(
            "wrote {}x{} image to `{}'",
            image.width(),
            image.height(),
            self.output.display()
        );
        Ok(self.output.clone())
    }
}

/// Resizes `input` onto the canvas described by `options` and writes it out.
///
/// On success returns the output path, which is `output` if given,
/// otherwise derived from `input` by appending `_resized` to the file stem.
pub fn resize_image(
    input: &Path,
    output: Option<&Path>,
    options: &ResizeOptions,
) -> Result<PathBuf, ResizeError> {
    let output = output.map(Path::to_path_buf);
    ResizePlan::new(input.to_path_buf(), output, *options).execute()
}
