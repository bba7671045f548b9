mod letterbox;
mod resize;

pub use letterbox::{fit_within, Placement};

use crate::{
    arg_parsers::{Filter, TargetSize},
    error::ResizeError,
    image::Image,
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    /// Scale to fit inside the target keeping the aspect ratio, then pad to the target size
    Fit { target: TargetSize, filter: Filter },
    /// Scale each axis independently to the target size
    Stretch { target: TargetSize, filter: Filter },
}

impl Operation {
    pub fn execute(&self, image: &mut Image) -> Result<(), ResizeError> {
        match *self {
            Operation::Fit { target, filter } => letterbox::letterbox(image, target, filter),
            Operation::Stretch { target, filter } => resize::stretch(image, target, filter),
        }
    }
}
