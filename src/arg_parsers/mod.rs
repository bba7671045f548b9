//! Parsers for the values of specific command-line options

mod filter;
pub use filter::*;
mod size;
pub use size::*;
