//! `canvasfit` resizes a single image onto a fixed-size canvas.
//!
//! The library is what the `canvasfit` binary is built from;
//! [`plan::resize_image`] is the whole operation in one call.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod arg_parsers;
pub mod args;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod image;
pub mod init;
pub mod operations;
pub mod plan;
pub mod utils;

pub use plan::{resize_image, ResizeOptions, ResizePlan};
