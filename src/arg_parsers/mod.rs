//! Parsers for the values of specific command-line options

mod conversion_mode;
pub use conversion_mode::*;
mod output_format;
pub use output_format::*;
mod quality;
pub use quality::*;
mod size;
pub use size::*;
pub mod numbers;
