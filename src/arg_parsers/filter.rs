use std::{fmt::Display, str::FromStr};

use fast_image_resize::{FilterType, ResizeAlg};

/// Resampling filters, named the way imagemagick's `-filter` names them.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Debug,
    Default,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
pub enum Filter {
    /// Nearest neighbor
    Point,
    Box,
    Triangle,
    Hamming,
    Catrom,
    Mitchell,
    #[default]
    Lanczos,
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stringified: &'static str = self.into();
        f.write_str(stringified)
    }
}

impl Filter {
    pub fn into_resize_alg(self) -> ResizeAlg {
        match self {
            Filter::Point => ResizeAlg::Nearest,
            Filter::Box => ResizeAlg::Convolution(FilterType::Box),
            Filter::Triangle => ResizeAlg::Convolution(FilterType::Bilinear),
            Filter::Hamming => ResizeAlg::Convolution(FilterType::Hamming),
            Filter::Catrom => ResizeAlg::Convolution(FilterType::CatmullRom),
            Filter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
            Filter::Lanczos => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }

    /// Value parser for the command line, with an error message that lists the accepted names
    pub fn parse_arg(s: &str) -> Result<Self, String> {
        Self::from_str(s.trim()).map_err(|_| {
            use strum::VariantArray;
            let known: Vec<&'static str> = Self::VARIANTS.iter().map(|f| f.into()).collect();
            format!(
                "unrecognized image filter `{s}', expected one of: {}",
                known.join(", ")
            )
        })
    }
}
