//! Grayscale preview and output-settings validation.
//!
//! The core is three small pieces used by an interactive settings form:
//! - [`operations::grayscale`] converts RGBA pixels to gray with one of several
//!   perceptual formulas, for a local preview;
//! - [`capabilities::resolve`] keeps bit depth, transparency, quality and chroma
//!   subsampling consistent with the chosen output format;
//! - [`dimension_link::DimensionLinker`] keeps width and height edits in proportion.
//!
//! The `wg-preview` binary wires them together for files on disk.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod arg_parse_err;
pub mod arg_parsers;
pub mod args;
pub mod capabilities;
pub mod decode;
pub mod dimension_link;
pub mod encode;
pub mod error;
pub mod help;
pub mod image;
pub mod operations;
pub mod plan;
pub mod preview;
pub mod settings;
mod utils;
