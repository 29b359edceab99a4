mod alpha;
pub mod grayscale;
mod resize;

use crate::{arg_parsers::ConversionMode, image::Image, settings::SettingsState};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    Grayscale(ConversionMode),
    Resize { width: u32, height: u32 },
    DropAlpha,
}

impl Operation {
    pub fn execute(&self, image: &mut Image) {
        match self {
            Operation::Grayscale(mode) => grayscale::grayscale(&mut image.pixels, *mode),
            Operation::Resize { width, height } => resize::resize(&mut image.pixels, *width, *height),
            Operation::DropAlpha => alpha::drop_alpha(&mut image.pixels),
        }
    }
}

/// Operations that turn a source of the given size into the preview of the
/// file the conversion service would produce with these settings.
pub fn preview_operations(
    settings: &SettingsState,
    source_width: u32,
    source_height: u32,
) -> Vec<Operation> {
    let mut ops = vec![Operation::Grayscale(settings.mode)];
    let (width, height) = settings.target_size(source_width, source_height);
    if (width, height) != (source_width, source_height) {
        ops.push(Operation::Resize { width, height });
    }
    if !settings.preserve_alpha {
        ops.push(Operation::DropAlpha);
    }
    ops
}
