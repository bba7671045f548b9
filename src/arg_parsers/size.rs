use std::{fmt::Display, num::NonZeroU32, str::FromStr};

use crate::{error::ErrorKind, error::ResizeError, rz_err};

/// Dimensions of the output canvas. Both sides are always positive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TargetSize {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl TargetSize {
    pub const DEFAULT_WIDTH: u32 = 3000;
    pub const DEFAULT_HEIGHT: u32 = 3000;

    pub fn new(width: u32, height: u32) -> Result<Self, ResizeError> {
        match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(rz_err!(
                ErrorKind::InvalidGeometry,
                "negative or zero image size `{width}x{height}'"
            )),
        }
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self {
            width: NonZeroU32::new(Self::DEFAULT_WIDTH).unwrap_or(NonZeroU32::MIN),
            height: NonZeroU32::new(Self::DEFAULT_HEIGHT).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Accepts `WxH`, e.g. `3000x3000` or `1920X1080`.
/// Unlike imagemagick geometry, both sides are mandatory and no flags or offsets are accepted.
impl FromStr for TargetSize {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || rz_err!(ErrorKind::InvalidGeometry, "invalid canvas size `{s}'");
        let trimmed = s.trim();
        let (width, height) = trimmed.split_once(['x', 'X']).ok_or_else(invalid)?;
        let parse_side = |side: &str| -> Result<u32, ResizeError> {
            // `u32::from_str` accepts a leading `+`, we don't
            if !side.is_empty() && side.bytes().all(|b| b.is_ascii_digit()) {
                side.parse::<u32>().map_err(|_| invalid())
            } else {
                Err(invalid())
            }
        };
        Self::new(parse_side(width)?, parse_side(height)?)
    }
}
