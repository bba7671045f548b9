//! Command-line interface.
//!
//! Unlike imagemagick-style tools, the options here are conventional `--long` flags,
//! so they are declared with `clap`.

use std::path::PathBuf;

use clap::Parser;

use crate::arg_parsers::{Filter, TargetSize};
use crate::plan::{ResizeOptions, ResizePlan};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Resize an image to 3000x3000 pixels while preserving quality",
    long_about = "Resize an image to fit a fixed canvas (3000x3000 pixels by default).\n\
                  By default the aspect ratio is preserved and the leftover area is filled \
                  with white, or with transparency if the image has an alpha channel.\n\
                  The output is written in the same format as the input."
)]
pub struct Args {
    /// Input image file path
    pub input: PathBuf,

    /// Output image file path [default: <input>_resized.<ext>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not preserve aspect ratio (will stretch the image to the canvas size)
    #[arg(long = "no-preserve-aspect", action = clap::ArgAction::SetFalse)]
    pub preserve_aspect: bool,

    /// Canvas size as WIDTHxHEIGHT
    #[arg(short, long, default_value_t = TargetSize::default())]
    pub size: TargetSize,

    /// Resampling filter: Point, Box, Triangle, Hamming, Catrom, Mitchell or Lanczos
    #[arg(short, long, default_value_t = Filter::default(), value_parser = Filter::parse_arg)]
    pub filter: Filter,

    /// Quality for lossy output formats (JPEG, WebP); 100 makes WebP lossless
    #[arg(
        short,
        long,
        default_value_t = ResizeOptions::DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub quality: u8,
}

impl Args {
    pub fn options(&self) -> ResizeOptions {
        ResizeOptions {
            target: self.size,
            preserve_aspect: self.preserve_aspect,
            filter: self.filter,
            quality: self.quality,
        }
    }

    pub fn into_plan(self) -> ResizePlan {
        let options = self.options();
        ResizePlan::new(self.input, self.output, options)
    }
}
